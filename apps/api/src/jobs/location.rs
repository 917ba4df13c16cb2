//! Where a candidate lives, and which job-board country that maps to.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Location fields extracted from a resume. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub full_address: Option<String>,
}

impl LocationInfo {
    /// "city, state" for the job board's `where` parameter.
    pub fn locality(&self) -> Option<String> {
        let parts: Vec<&str> = [self.city.as_deref(), self.state.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// Checked in order against the full address.
const ADDRESS_COUNTRIES: &[&str] = &[
    "United States",
    "USA",
    "US",
    "United Kingdom",
    "UK",
    "Canada",
    "Australia",
    "Germany",
    "France",
    "Italy",
    "Spain",
    "Netherlands",
    "India",
];

const US_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY", "Alabama", "Alaska", "Arizona", "Arkansas", "California",
    "Colorado", "Connecticut", "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois",
    "Indiana", "Iowa", "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts",
    "Michigan", "Minnesota", "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada",
    "New Hampshire", "New Jersey", "New Mexico", "New York", "North Carolina", "North Dakota",
    "Ohio", "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island", "South Carolina",
    "South Dakota", "Tennessee", "Texas", "Utah", "Vermont", "Virginia", "Washington",
    "West Virginia", "Wisconsin", "Wyoming",
];

pub const DEFAULT_COUNTRY_CODE: &str = "us";

/// Resolves a country name: explicit country, then a known country named in
/// the address, then a US state.
pub fn infer_country(location: &LocationInfo) -> Option<String> {
    if let Some(country) = non_blank(location.country.as_deref()) {
        return Some(country.to_string());
    }

    if let Some(address) = non_blank(location.full_address.as_deref()) {
        let words = word_padded(address);
        if let Some(country) = ADDRESS_COUNTRIES
            .iter()
            .find(|c| words.contains(&word_padded(c)))
        {
            return Some(country.to_string());
        }
    }

    let state = non_blank(location.state.as_deref())?;
    US_STATES
        .iter()
        .any(|s| s.eq_ignore_ascii_case(state))
        .then(|| "United States".to_string())
}

/// Job-board country code for a country name. Unknown names fall back to `us`.
pub fn country_code(country: &str) -> &'static str {
    match country.trim().to_lowercase().as_str() {
        "united states" | "usa" | "us" => "us",
        "united kingdom" | "uk" => "gb",
        "canada" => "ca",
        "australia" => "au",
        "germany" => "de",
        "france" => "fr",
        "italy" => "it",
        "netherlands" => "nl",
        "spain" => "es",
        "india" => "in",
        other => {
            warn!("Unknown country {other:?}, searching {DEFAULT_COUNTRY_CODE}");
            DEFAULT_COUNTRY_CODE
        }
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Lowercased words separated and surrounded by single spaces, so that
/// containment only matches whole words ("us" never matches "Austin").
fn word_padded(s: &str) -> String {
    let words: Vec<String> = s
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();
    format!(" {} ", words.join(" "))
}
