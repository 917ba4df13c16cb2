//! Adzuna job board client.
//!
//! `AppState` holds an `Option<Arc<dyn JobBoard>>`; absent when the Adzuna
//! credentials are not configured.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::AdzunaCredentials;
use crate::jobs::JobSearchError;

const ADZUNA_API_BASE: &str = "https://api.adzuna.com/v1/api/jobs";
const RESULTS_PER_PAGE: u32 = 15;
pub const DEFAULT_RADIUS_MILES: u32 = 50;
pub const ENTIRE_COUNTRY: &str = "Entire country";

/// One job board search.
#[derive(Debug, Clone, PartialEq)]
pub struct JobQuery {
    /// Country name as the user or resume gave it.
    pub country: String,
    /// Two-letter board code, e.g. `us` or `gb`.
    pub country_code: String,
    pub job_title: Option<String>,
    /// "city, state"; the whole country is searched when absent.
    pub locality: Option<String>,
    pub radius_miles: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
    pub salary: String,
    pub date_posted: String,
    pub job_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResults {
    pub jobs: Vec<JobPosting>,
    pub count: usize,
    pub country: String,
    pub location_used: String,
}

#[async_trait]
pub trait JobBoard: Send + Sync {
    async fn search(&self, query: &JobQuery) -> Result<JobResults, JobSearchError>;
}

// Wire format. Every field is optional in practice.

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<AdzunaJob>,
}

#[derive(Debug, Deserialize)]
struct AdzunaJob {
    title: Option<String>,
    company: Option<DisplayName>,
    location: Option<DisplayName>,
    description: Option<String>,
    redirect_url: Option<String>,
    salary_min: Option<serde_json::Value>,
    salary_max: Option<serde_json::Value>,
    created: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DisplayName {
    display_name: Option<String>,
}

impl From<AdzunaJob> for JobPosting {
    fn from(job: AdzunaJob) -> Self {
        let or = |value: Option<String>, default: &str| value.unwrap_or_else(|| default.to_string());
        let display = |d: Option<DisplayName>| d.and_then(|d| d.display_name);

        JobPosting {
            title: or(job.title, "Unknown Position"),
            company: or(display(job.company), "Unknown Company"),
            location: or(display(job.location), "Location not specified"),
            description: or(job.description, "No description available"),
            url: or(job.redirect_url, "#"),
            salary: format!(
                "{} - {}",
                salary_bound(job.salary_min),
                salary_bound(job.salary_max)
            ),
            date_posted: or(job.created, "Unknown date"),
            // the board rarely reports contract type
            job_type: "Full-time".to_string(),
        }
    }
}

fn salary_bound(value: Option<serde_json::Value>) -> String {
    match value {
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => s,
        _ => "N/A".to_string(),
    }
}

pub struct AdzunaClient {
    client: Client,
    credentials: AdzunaCredentials,
    base_url: String,
}

impl AdzunaClient {
    pub fn new(credentials: AdzunaCredentials) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(Duration::from_secs(30)).build()?,
            credentials,
            base_url: ADZUNA_API_BASE.to_string(),
        })
    }

    fn search_url(&self, country_code: &str) -> String {
        format!("{}/{country_code}/search/1", self.base_url)
    }

    fn query_params(&self, query: &JobQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("app_id", self.credentials.app_id.clone()),
            ("app_key", self.credentials.api_key.clone()),
            ("results_per_page", RESULTS_PER_PAGE.to_string()),
            ("content-type", "application/json".to_string()),
        ];
        if let Some(title) = query.job_title.as_deref().filter(|t| !t.trim().is_empty()) {
            params.push(("what", title.to_string()));
        }
        if let Some(locality) = &query.locality {
            params.push(("where", locality.clone()));
            params.push(("distance", query.radius_miles.to_string()));
        }
        params
    }
}

#[async_trait]
impl JobBoard for AdzunaClient {
    async fn search(&self, query: &JobQuery) -> Result<JobResults, JobSearchError> {
        let location_used = query
            .locality
            .clone()
            .unwrap_or_else(|| ENTIRE_COUNTRY.to_string());
        info!(
            "Searching jobs in {} ({}), location: {location_used}",
            query.country, query.country_code
        );

        let response = self
            .client
            .get(self.search_url(&query.country_code))
            .query(&self.query_params(query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(JobSearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response.json().await?;
        let jobs: Vec<JobPosting> = body.results.into_iter().map(JobPosting::from).collect();
        if jobs.is_empty() {
            warn!("No job openings found in {} matching the query", query.country);
        }

        Ok(JobResults {
            count: jobs.len(),
            jobs,
            country: query.country.clone(),
            location_used,
        })
    }
}
