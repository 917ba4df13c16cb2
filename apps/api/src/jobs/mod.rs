//! Job search near the candidate: AI location extraction, country inference
//! and the job board query.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

pub mod adzuna;
pub mod location;

use adzuna::{JobBoard, JobQuery, JobResults, DEFAULT_RADIUS_MILES};
use location::{country_code, infer_country, LocationInfo};

use crate::llm_client::prompts::LOCATION_PROMPT;
use crate::llm_client::LlmClient;

#[derive(Debug, Error)]
pub enum JobSearchError {
    #[error("job search is not configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("job board error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Caller overrides for one search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobSearchRequest {
    pub job_title: Option<String>,
    pub radius_miles: Option<u32>,
    /// Overrides the country inferred from the resume.
    pub country: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JobSearchOutcome {
    Found(JobResults),
    /// No country could be inferred; retry with `country` set.
    CountryRequired { location: LocationInfo },
}

/// Asks the LLM where the candidate lives. Failures yield an empty location.
pub async fn extract_location(llm: &LlmClient, resume_text: &str) -> LocationInfo {
    match llm.call_json::<LocationInfo>(&[LOCATION_PROMPT, resume_text]).await {
        Ok(location) => location,
        Err(e) => {
            warn!("Location extraction failed: {e}");
            LocationInfo::default()
        }
    }
}

/// Builds the board query, or None when no country is known.
pub fn plan_query(
    location: &LocationInfo,
    request: &JobSearchRequest,
    default_title: &str,
) -> Option<JobQuery> {
    let country = request
        .country
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .or_else(|| infer_country(location))?;

    let job_title = request
        .job_title
        .as_deref()
        .unwrap_or(default_title)
        .trim()
        .to_string();

    Some(JobQuery {
        country_code: country_code(&country).to_string(),
        country,
        job_title: (!job_title.is_empty()).then_some(job_title),
        locality: location.locality(),
        radius_miles: request.radius_miles.unwrap_or(DEFAULT_RADIUS_MILES),
    })
}

/// Finds openings near the candidate of `resume_text`.
pub async fn search_for_analysis(
    llm: &LlmClient,
    board: Option<&dyn JobBoard>,
    resume_text: &str,
    request: &JobSearchRequest,
    default_title: &str,
) -> Result<JobSearchOutcome, JobSearchError> {
    let board = board.ok_or(JobSearchError::NotConfigured)?;
    let location = extract_location(llm, resume_text).await;
    search_near(board, location, request, default_title).await
}

pub async fn search_near(
    board: &dyn JobBoard,
    location: LocationInfo,
    request: &JobSearchRequest,
    default_title: &str,
) -> Result<JobSearchOutcome, JobSearchError> {
    match plan_query(&location, request, default_title) {
        Some(query) => Ok(JobSearchOutcome::Found(board.search(&query).await?)),
        None => {
            info!("No country found for job search; asking the caller");
            Ok(JobSearchOutcome::CountryRequired { location })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records the last query and answers with no jobs.
    #[derive(Default)]
    struct RecordingBoard {
        last: Mutex<Option<JobQuery>>,
    }

    #[async_trait]
    impl JobBoard for RecordingBoard {
        async fn search(&self, query: &JobQuery) -> Result<JobResults, JobSearchError> {
            *self.last.lock().unwrap() = Some(query.clone());
            Ok(JobResults {
                jobs: Vec::new(),
                count: 0,
                country: query.country.clone(),
                location_used: query
                    .locality
                    .clone()
                    .unwrap_or_else(|| adzuna::ENTIRE_COUNTRY.to_string()),
            })
        }
    }

    fn austin() -> LocationInfo {
        LocationInfo {
            city: Some("Austin".into()),
            state: Some("TX".into()),
            country: None,
            full_address: None,
        }
    }

    #[test]
    fn test_plan_uses_inferred_country_and_default_title() {
        let q = plan_query(&austin(), &JobSearchRequest::default(), "Data Scientist").unwrap();
        assert_eq!(q.country, "United States");
        assert_eq!(q.country_code, "us");
        assert_eq!(q.job_title.as_deref(), Some("Data Scientist"));
        assert_eq!(q.locality.as_deref(), Some("Austin, TX"));
        assert_eq!(q.radius_miles, 50);
    }

    #[test]
    fn test_caller_country_and_title_override() {
        let request = JobSearchRequest {
            job_title: Some("Android Developer".into()),
            radius_miles: Some(10),
            country: Some("India".into()),
        };
        let q = plan_query(&austin(), &request, "Data Scientist").unwrap();
        assert_eq!(q.country_code, "in");
        assert_eq!(q.job_title.as_deref(), Some("Android Developer"));
        assert_eq!(q.radius_miles, 10);
    }

    #[test]
    fn test_no_country_means_no_query() {
        assert!(plan_query(&LocationInfo::default(), &JobSearchRequest::default(), "x").is_none());
    }

    #[test]
    fn test_blank_title_is_omitted() {
        let q = plan_query(&austin(), &JobSearchRequest::default(), "  ").unwrap();
        assert_eq!(q.job_title, None);
    }

    #[tokio::test]
    async fn test_search_near_reports_country_required() {
        let board = RecordingBoard::default();
        let outcome = search_near(&board, LocationInfo::default(), &JobSearchRequest::default(), "x")
            .await
            .unwrap();
        assert!(matches!(outcome, JobSearchOutcome::CountryRequired { .. }));
        assert!(board.last.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_search_near_queries_board() {
        let board = RecordingBoard::default();
        let outcome = search_near(&board, austin(), &JobSearchRequest::default(), "Web Developer")
            .await
            .unwrap();
        match outcome {
            JobSearchOutcome::Found(results) => {
                assert_eq!(results.country, "United States");
                assert_eq!(results.location_used, "Austin, TX");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        let last = board.last.lock().unwrap().clone().unwrap();
        assert_eq!(last.job_title.as_deref(), Some("Web Developer"));
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let value = serde_json::to_value(JobSearchOutcome::CountryRequired {
            location: LocationInfo::default(),
        })
        .unwrap();
        assert_eq!(value["status"], "country_required");
    }

    #[tokio::test]
    async fn test_missing_board_is_not_configured() {
        let llm = LlmClient::new("test-key".into(), None).unwrap();
        let err = search_for_analysis(&llm, None, "resume", &JobSearchRequest::default(), "x")
            .await
            .unwrap_err();
        assert!(matches!(err, JobSearchError::NotConfigured));
    }
}
