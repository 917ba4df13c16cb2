use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::recommendation::catalog;

/// Career tracks a resume can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackId {
    DataScience,
    WebDevelopment,
    Android,
    Ios,
    UiUx,
}

impl TrackId {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackId::DataScience => "data-science",
            TrackId::WebDevelopment => "web-development",
            TrackId::Android => "android",
            TrackId::Ios => "ios",
            TrackId::UiUx => "ui-ux",
        }
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub url: String,
}

/// A career track: trigger keywords plus what we recommend once it matches.
#[derive(Debug, Clone, Serialize)]
pub struct Track {
    pub id: TrackId,
    /// Lowercase, trimmed.
    pub keywords: BTreeSet<String>,
    pub skills: Vec<String>,
    pub courses: Vec<Course>,
}

impl Track {
    pub fn new(
        id: TrackId,
        keywords: &[&str],
        skills: &[&str],
        courses: &[(&str, &str)],
    ) -> Self {
        Self {
            id,
            keywords: keywords.iter().map(|k| normalize_skill(k)).collect(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            courses: courses
                .iter()
                .map(|(name, url)| Course {
                    name: name.to_string(),
                    url: url.to_string(),
                })
                .collect(),
        }
    }

    /// `skill` must already be normalized.
    pub fn is_triggered_by(&self, skill: &str) -> bool {
        self.keywords.contains(skill)
    }
}

/// Ordered track list. Position is priority: earlier tracks win ties
/// within the same skill.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct TrackTable {
    tracks: Vec<Track>,
}

impl TrackTable {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// The built-in table, in priority order:
    /// data-science, web-development, android, ios, ui-ux.
    pub fn builtin() -> Self {
        Self::new(vec![
            Track::new(
                TrackId::DataScience,
                catalog::DS_KEYWORDS,
                catalog::DS_SKILLS,
                catalog::DS_COURSES,
            ),
            Track::new(
                TrackId::WebDevelopment,
                catalog::WEB_KEYWORDS,
                catalog::WEB_SKILLS,
                catalog::WEB_COURSES,
            ),
            Track::new(
                TrackId::Android,
                catalog::ANDROID_KEYWORDS,
                catalog::ANDROID_SKILLS,
                catalog::ANDROID_COURSES,
            ),
            Track::new(
                TrackId::Ios,
                catalog::IOS_KEYWORDS,
                catalog::IOS_SKILLS,
                catalog::IOS_COURSES,
            ),
            Track::new(
                TrackId::UiUx,
                catalog::UIUX_KEYWORDS,
                catalog::UIUX_SKILLS,
                catalog::UIUX_COURSES,
            ),
        ])
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }
}

/// Lowercases and trims a free-text skill for keyword lookup.
pub fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_priority_order() {
        let table = TrackTable::builtin();
        let ids: Vec<TrackId> = table.tracks().iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            vec![
                TrackId::DataScience,
                TrackId::WebDevelopment,
                TrackId::Android,
                TrackId::Ios,
                TrackId::UiUx,
            ]
        );
    }

    #[test]
    fn test_builtin_keywords_are_normalized() {
        let table = TrackTable::builtin();
        for track in table.tracks() {
            for kw in &track.keywords {
                assert_eq!(kw, &normalize_skill(kw), "keyword {kw:?} in {}", track.id);
            }
        }
    }

    #[test]
    fn test_builtin_tracks_are_populated() {
        let table = TrackTable::builtin();
        for track in table.tracks() {
            assert!(!track.keywords.is_empty(), "{} has no keywords", track.id);
            assert!(!track.skills.is_empty(), "{} has no skills", track.id);
            assert!(track.courses.len() >= 10, "{} has too few courses", track.id);
        }
    }

    #[test]
    fn test_mixed_case_keywords_become_matchable() {
        // "deep Learning" and "node jS" are listed with stray capitals
        let table = TrackTable::builtin();
        let ds = table.get(TrackId::DataScience).unwrap();
        let web = table.get(TrackId::WebDevelopment).unwrap();
        assert!(ds.is_triggered_by("deep learning"));
        assert!(web.is_triggered_by("node js"));
    }

    #[test]
    fn test_track_id_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&TrackId::WebDevelopment).unwrap(),
            r#""web-development""#
        );
        assert_eq!(serde_json::to_string(&TrackId::UiUx).unwrap(), r#""ui-ux""#);
        assert_eq!(TrackId::UiUx.to_string(), "ui-ux");
    }

    #[test]
    fn test_normalize_skill_trims_and_lowercases() {
        assert_eq!(normalize_skill("  Machine Learning \n"), "machine learning");
    }
}
