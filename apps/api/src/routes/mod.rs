pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analyses", post(handlers::handle_create_analysis))
        .route("/api/v1/analyses/:id", get(handlers::handle_get_analysis))
        .route("/api/v1/analyses/:id/summary", post(handlers::handle_summary))
        .route("/api/v1/analyses/:id/match", post(handlers::handle_match))
        .route("/api/v1/analyses/:id/jobs", post(handlers::handle_jobs))
        // Recommendation API
        .route(
            "/api/v1/recommendations",
            post(recommendation::handle_recommend),
        )
        .route("/api/v1/tracks", get(recommendation::handle_list_tracks))
        // Admin API
        .route("/api/v1/admin/analyses", get(handlers::handle_admin_list))
        .route(
            "/api/v1/admin/analyses/export",
            get(handlers::handle_admin_export),
        )
        .route("/api/v1/admin/skills", get(handlers::handle_admin_skills))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::inference::TextClassifier;
    use crate::llm_client::LlmClient;
    use crate::recommendation::tracks::TrackTable;

    struct FixedLabel(&'static str);

    impl TextClassifier for FixedLabel {
        fn predict(&self, _text: &str) -> String {
            self.0.to_string()
        }
    }

    /// State whose pool never connects; only routes that skip the database
    /// are exercised here.
    fn test_state(admin_token: Option<&str>) -> AppState {
        let config = Config {
            database_url: "postgres://localhost:1/unused".to_string(),
            gemini_api_key: "test-key".to_string(),
            model_dir: "models".into(),
            redis_url: None,
            s3: None,
            adzuna: None,
            admin_token: admin_token.map(str::to_string),
            port: 8080,
            rust_log: "info".to_string(),
        };
        AppState {
            db: PgPoolOptions::new()
                .connect_lazy(&config.database_url)
                .unwrap(),
            llm: LlmClient::new(config.gemini_api_key.clone(), None).unwrap(),
            config,
            tracks: Arc::new(TrackTable::builtin()),
            category_model: Arc::new(FixedLabel("Data Science")),
            job_model: Arc::new(FixedLabel("Data Scientist")),
            job_board: None,
            archive: None,
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state(None));
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["service"], "resume-analyzer");
    }

    #[tokio::test]
    async fn test_tracks_listed_in_priority_order() {
        let app = build_router(test_state(None));
        let response = app
            .oneshot(Request::get("/api/v1/tracks").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = body_json(response).await;
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap())
            .collect();
        assert_eq!(
            ids,
            vec!["data-science", "web-development", "android", "ios", "ui-ux"]
        );
    }

    #[tokio::test]
    async fn test_recommendation_endpoint_clamps_courses() {
        let app = build_router(test_state(None));
        let request = Request::post("/api/v1/recommendations")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"skills": ["Cooking", "React"], "course_count": 50}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["track"], "web-development");
        assert_eq!(body["courses"].as_array().unwrap().len(), 10);
        assert_eq!(body["selected_courses"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_recommendation_without_match() {
        let app = build_router(test_state(None));
        let request = Request::post("/api/v1/recommendations")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"skills": []}"#))
            .unwrap();
        let body = body_json(app.oneshot(request).await.unwrap()).await;
        assert!(body["track"].is_null());
        assert!(body["recommended_skills"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_admin_requires_token() {
        let app = build_router(test_state(Some("s3cret")));
        let response = app
            .clone()
            .oneshot(
                Request::get("/api/v1/admin/skills")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .oneshot(
                Request::get("/api/v1/admin/analyses")
                    .header("x-admin-token", "wrong")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(response).await["error"]["code"], "FORBIDDEN");
    }

    #[tokio::test]
    async fn test_upload_without_file_is_bad_request() {
        let app = build_router(test_state(None));
        let boundary = "XBOUNDARY";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"course_count\"\r\n\r\n3\r\n--{boundary}--\r\n"
        );
        let request = Request::post("/api/v1/analyses")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
