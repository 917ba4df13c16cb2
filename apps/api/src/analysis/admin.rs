//! Admin views over stored analyses: the full table, skill frequencies and a
//! CSV export. Gated by a shared token in the `x-admin-token` header.

use std::collections::HashMap;

use axum::http::HeaderMap;

use crate::errors::AppError;
use crate::models::analysis::{AnalysisRow, SkillCount};

pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Missing header is 401; a wrong token, or no token configured, is 403.
pub fn authorize(headers: &HeaderMap, expected: Option<&str>) -> Result<(), AppError> {
    let supplied = headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    match expected {
        Some(token) if constant_time_eq(token.as_bytes(), supplied.as_bytes()) => Ok(()),
        _ => Err(AppError::Forbidden),
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Counts trimmed skills across analyses. Sorted by count descending, ties
/// by skill name.
pub fn count_skills<I, S>(skill_lists: I) -> Vec<SkillCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[String]>,
{
    let mut counts: HashMap<String, i64> = HashMap::new();
    for list in skill_lists {
        for skill in list.as_ref() {
            let skill = skill.trim();
            if !skill.is_empty() {
                *counts.entry(skill.to_string()).or_insert(0) += 1;
            }
        }
    }

    let mut counts: Vec<SkillCount> = counts
        .into_iter()
        .map(|(skill, count)| SkillCount { skill, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.skill.cmp(&b.skill)));
    counts
}

const CSV_HEADER: &[&str] = &[
    "id",
    "name",
    "email",
    "mobile_number",
    "page_count",
    "candidate_level",
    "predicted_category",
    "recommended_job",
    "skills",
    "recommended_track",
    "recommended_skills",
    "recommended_courses",
    "created_at",
];

/// Renders rows as RFC 4180 CSV. List columns are joined with ", ".
pub fn rows_to_csv(rows: &[AnalysisRow]) -> String {
    let mut out = String::new();
    push_record(&mut out, CSV_HEADER.iter().map(|h| h.to_string()));

    for row in rows {
        push_record(
            &mut out,
            [
                row.id.to_string(),
                row.name.clone(),
                row.email.clone(),
                row.mobile_number.clone(),
                row.page_count.to_string(),
                row.candidate_level.clone(),
                row.predicted_category.clone(),
                row.recommended_job.clone(),
                row.skills.join(", "),
                row.recommended_track.clone().unwrap_or_default(),
                row.recommended_skills.join(", "),
                row.recommended_courses.join(", "),
                row.created_at.to_rfc3339(),
            ],
        );
    }
    out
}

fn push_record(out: &mut String, fields: impl IntoIterator<Item = String>) {
    let escaped: Vec<String> = fields.into_iter().map(|f| escape_field(&f)).collect();
    out.push_str(&escaped.join(","));
    out.push_str("\r\n");
}

fn escape_field(field: &str) -> String {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
