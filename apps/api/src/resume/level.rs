use serde::{Deserialize, Serialize};

/// Seniority guess from resume length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateLevel {
    Unknown,
    Fresher,
    Intermediate,
    Experienced,
}

impl CandidateLevel {
    pub fn from_page_count(pages: u32) -> Self {
        match pages {
            0 => CandidateLevel::Unknown,
            1 => CandidateLevel::Fresher,
            2 => CandidateLevel::Intermediate,
            _ => CandidateLevel::Experienced,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateLevel::Unknown => "Unknown",
            CandidateLevel::Fresher => "Fresher",
            CandidateLevel::Intermediate => "Intermediate",
            CandidateLevel::Experienced => "Experienced",
        }
    }
}
