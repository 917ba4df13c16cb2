//! Career track classifier: routes a resume's skill list to at most one track
//! and samples that track's course catalog.
//!
//! Matching is first-match-wins with skills as the outer loop and tracks as
//! the inner loop: a skill listed earlier beats a higher-priority track
//! matched by a later skill.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::recommendation::tracks::{normalize_skill, Course, Track, TrackId};

pub const MIN_COURSES: usize = 1;
pub const MAX_COURSES: usize = 10;
pub const DEFAULT_COURSES: usize = 4;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// The (skill, track) pair that ended the scan.
#[derive(Debug, Clone, Copy)]
pub struct TrackMatch<'a> {
    pub track: &'a Track,
    /// Index into the caller's skill list.
    pub skill_index: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CourseSample {
    pub courses: Vec<Course>,
    /// Same order as `courses`; this is what gets persisted.
    pub names: Vec<String>,
}

/// Result of one recommendation pass. `track: None` means no skill matched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Recommendation {
    pub track: Option<TrackId>,
    pub recommended_skills: Vec<String>,
    pub courses: Vec<Course>,
    pub selected_courses: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Core operations
// ────────────────────────────────────────────────────────────────────────────

/// Finds the first (skill, track) pair whose normalized skill is one of the
/// track's keywords. An empty skill list is a valid "no match".
pub fn classify<'a, S: AsRef<str>>(skills: &[S], tracks: &'a [Track]) -> Option<TrackMatch<'a>> {
    for (skill_index, skill) in skills.iter().enumerate() {
        let skill = normalize_skill(skill.as_ref());
        if skill.is_empty() {
            continue;
        }
        if let Some(track) = tracks.iter().find(|t| t.is_triggered_by(&skill)) {
            return Some(TrackMatch { track, skill_index });
        }
    }
    None
}

/// Clamps a caller-supplied course count into `[MIN_COURSES, MAX_COURSES]`.
pub fn clamp_course_count(requested: i64) -> usize {
    requested.clamp(MIN_COURSES as i64, MAX_COURSES as i64) as usize
}

/// Shuffles a private copy of the track's courses and keeps the first
/// `requested` (clamped). Never pads: a short catalog yields fewer entries.
pub fn sample_courses<R: Rng + ?Sized>(track: &Track, requested: i64, rng: &mut R) -> CourseSample {
    let count = clamp_course_count(requested);

    let mut courses = track.courses.clone();
    courses.shuffle(rng);
    courses.truncate(count);

    let names = courses.iter().map(|c| c.name.clone()).collect();
    CourseSample { courses, names }
}

/// `classify` followed by `sample_courses` on the matched track.
pub fn recommend<S: AsRef<str>, R: Rng + ?Sized>(
    skills: &[S],
    tracks: &[Track],
    requested_courses: i64,
    rng: &mut R,
) -> Recommendation {
    let Some(matched) = classify(skills, tracks) else {
        return Recommendation::default();
    };

    let sample = sample_courses(matched.track, requested_courses, rng);
    Recommendation {
        track: Some(matched.track.id),
        recommended_skills: matched.track.skills.clone(),
        courses: sample.courses,
        selected_courses: sample.names,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::tracks::TrackTable;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn tiny_track(courses: usize) -> Track {
        let courses: Vec<(String, String)> = (0..courses)
            .map(|i| (format!("Course {i}"), format!("https://example.com/{i}")))
            .collect();
        let refs: Vec<(&str, &str)> = courses
            .iter()
            .map(|(n, u)| (n.as_str(), u.as_str()))
            .collect();
        Track::new(TrackId::Ios, &["swift"], &["Swift"], &refs)
    }

    #[test]
    fn test_single_track_keyword_matches_that_track() {
        let table = TrackTable::builtin();
        let m = classify(&["Cooking", "Kotlin"], table.tracks()).unwrap();
        assert_eq!(m.track.id, TrackId::Android);
        assert_eq!(m.skill_index, 1);
    }

    #[test]
    fn test_skill_order_overrides_track_priority() {
        let table = TrackTable::builtin();
        let m = classify(&["web development", "data science"], table.tracks()).unwrap();
        assert_eq!(m.track.id, TrackId::WebDevelopment);
    }

    #[test]
    fn test_track_priority_breaks_ties_within_one_skill() {
        // "flask" is a keyword for both data-science and web-development
        let table = TrackTable::builtin();
        let m = classify(&["Flask"], table.tracks()).unwrap();
        assert_eq!(m.track.id, TrackId::DataScience);
    }

    #[test]
    fn test_matching_is_case_and_whitespace_insensitive() {
        let table = TrackTable::builtin();
        let m = classify(&["   MACHINE Learning  "], table.tracks()).unwrap();
        assert_eq!(m.track.id, TrackId::DataScience);
    }

    #[test]
    fn test_substrings_do_not_match() {
        let table = TrackTable::builtin();
        assert!(classify(&["reactive programming"], table.tracks()).is_none());
    }

    #[test]
    fn test_no_keywords_is_no_match() {
        let table = TrackTable::builtin();
        assert!(classify(&["cooking", "painting"], table.tracks()).is_none());

        let rec = recommend(&["cooking", "painting"], table.tracks(), 4, &mut rng());
        assert_eq!(rec.track, None);
        assert!(rec.recommended_skills.is_empty());
        assert!(rec.courses.is_empty());
        assert!(rec.selected_courses.is_empty());
    }

    #[test]
    fn test_empty_skill_list_is_no_match() {
        let table = TrackTable::builtin();
        let empty: [&str; 0] = [];
        assert!(classify(&empty, table.tracks()).is_none());
        assert_eq!(recommend(&empty, table.tracks(), 4, &mut rng()), Recommendation::default());
    }

    #[test]
    fn test_recommend_uses_only_the_matched_track() {
        let table = TrackTable::builtin();
        let rec = recommend(&["Figma", "React"], table.tracks(), 5, &mut rng());
        let uiux = table.get(TrackId::UiUx).unwrap();

        assert_eq!(rec.track, Some(TrackId::UiUx));
        assert_eq!(rec.recommended_skills, uiux.skills);
        assert_eq!(rec.courses.len(), 5);
        assert!(rec.courses.iter().all(|c| uiux.courses.contains(c)));
    }

    #[test]
    fn test_sample_returns_exact_count_without_duplicates() {
        let table = TrackTable::builtin();
        let track = table.get(TrackId::DataScience).unwrap();
        let mut rng = rng();

        for count in 1..=10 {
            let sample = sample_courses(track, count, &mut rng);
            assert_eq!(sample.courses.len(), count as usize);
            assert!(sample.courses.iter().all(|c| track.courses.contains(c)));

            let unique: HashSet<&str> = sample.courses.iter().map(|c| c.url.as_str()).collect();
            assert_eq!(unique.len(), sample.courses.len());
        }
    }

    #[test]
    fn test_sample_names_parallel_courses() {
        let table = TrackTable::builtin();
        let track = table.get(TrackId::Android).unwrap();
        let sample = sample_courses(track, 6, &mut rng());
        let expected: Vec<String> = sample.courses.iter().map(|c| c.name.clone()).collect();
        assert_eq!(sample.names, expected);
    }

    #[test]
    fn test_sample_never_pads_short_catalog() {
        let track = tiny_track(3);
        let sample = sample_courses(&track, 8, &mut rng());
        assert_eq!(sample.courses.len(), 3);
    }

    #[test]
    fn test_out_of_range_counts_are_clamped() {
        let table = TrackTable::builtin();
        let track = table.get(TrackId::Ios).unwrap();
        assert_eq!(sample_courses(track, 0, &mut rng()).courses.len(), 1);
        assert_eq!(sample_courses(track, -5, &mut rng()).courses.len(), 1);
        assert_eq!(sample_courses(track, 11, &mut rng()).courses.len(), 10);
        assert_eq!(sample_courses(track, i64::MAX, &mut rng()).courses.len(), 10);
    }

    #[test]
    fn test_clamp_course_count_bounds() {
        assert_eq!(clamp_course_count(0), MIN_COURSES);
        assert_eq!(clamp_course_count(4), 4);
        assert_eq!(clamp_course_count(11), MAX_COURSES);
    }

    #[test]
    fn test_sampling_leaves_track_untouched() {
        let table = TrackTable::builtin();
        let track = table.get(TrackId::WebDevelopment).unwrap();
        let before = track.courses.clone();
        let _ = sample_courses(track, 10, &mut rng());
        assert_eq!(track.courses, before);
    }

    #[test]
    fn test_different_seeds_still_yield_valid_subsets() {
        let table = TrackTable::builtin();
        let track = table.get(TrackId::UiUx).unwrap();
        for seed in 0..20 {
            let sample = sample_courses(track, 4, &mut StdRng::seed_from_u64(seed));
            assert_eq!(sample.courses.len(), 4);
            assert!(sample.courses.iter().all(|c| track.courses.contains(c)));
        }
    }

    #[test]
    fn test_concurrent_sampling_shares_one_table() {
        let table = Arc::new(TrackTable::builtin());
        let before = table.get(TrackId::DataScience).unwrap().courses.clone();

        let handles: Vec<_> = (0..8)
            .map(|seed| {
                let table = Arc::clone(&table);
                std::thread::spawn(move || {
                    let track = table.get(TrackId::DataScience).unwrap();
                    let mut rng = StdRng::seed_from_u64(seed);
                    (0..50)
                        .map(|_| sample_courses(track, 4, &mut rng))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            for sample in handle.join().unwrap() {
                assert_eq!(sample.courses.len(), 4);
                assert!(sample.courses.iter().all(|c| before.contains(c)));
            }
        }
        assert_eq!(table.get(TrackId::DataScience).unwrap().courses, before);
    }
}
