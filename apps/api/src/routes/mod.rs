pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::pipeline::handlers as pipeline;
use crate::resume::handlers as resume;
use crate::search::handlers as jobs;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session / role switcher
        .route("/api/v1/session", get(session::handle_get_session))
        .route("/api/v1/session/role", put(session::handle_switch_role))
        // Jobs and search
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/recommended", get(jobs::handle_recommended_jobs))
        .route(
            "/api/v1/jobs/search",
            post(jobs::handle_search).delete(jobs::handle_reset_search),
        )
        .route(
            "/api/v1/jobs/search/results",
            get(jobs::handle_search_results),
        )
        .route("/api/v1/jobs/quick-filter", post(jobs::handle_quick_filter))
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        // Application pipeline
        .route(
            "/api/v1/applications",
            get(pipeline::handle_list_applications),
        )
        .route(
            "/api/v1/applications/:id/timeline",
            get(pipeline::handle_timeline),
        )
        .route(
            "/api/v1/applications/:id/transition",
            post(pipeline::handle_transition),
        )
        .route("/api/v1/pipeline/board", get(pipeline::handle_board))
        .route(
            "/api/v1/candidates/:id/applications",
            get(pipeline::handle_candidate_applications),
        )
        // Resume parsing
        .route("/api/v1/resumes/parse", post(resume::handle_parse_resume))
        .route("/api/v1/resumes/latest", get(resume::handle_latest_resume))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::errors::AppError;
    use crate::models::ResumeData;
    use crate::pipeline::TransitionPolicy;
    use crate::resume::ResumeExtractor;
    use crate::store::MockStore;

    struct FixedExtractor;

    #[async_trait]
    impl ResumeExtractor for FixedExtractor {
        async fn parse_resume(&self, raw_text: &str) -> Result<ResumeData, AppError> {
            if raw_text.contains("garbage") {
                return Err(AppError::Parse("not json".to_string()));
            }
            Ok(ResumeData {
                name: "Alex Johnson".to_string(),
                email: "alex@example.com".to_string(),
                phone: None,
                skills: vec!["Rust".to_string()],
                experience: vec![],
                education: vec![],
            })
        }
    }

    fn test_state(policy: TransitionPolicy) -> AppState {
        let config = Config {
            search_delay: Duration::ZERO,
            quick_filter_delay: Duration::ZERO,
            transition_policy: policy,
            ..Config::default()
        };
        AppState::new(config, MockStore::seeded().unwrap(), Arc::new(FixedExtractor))
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => request
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => request.body(Body::empty()),
        };
        app.oneshot(request.unwrap()).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state(TransitionPolicy::Unrestricted));
        let response = send(app, Method::GET, "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_transition_then_timeline() {
        let state = test_state(TransitionPolicy::Unrestricted);
        let app = build_router(state.clone());

        let response = send(
            app.clone(),
            Method::POST,
            "/api/v1/applications/a1/transition",
            Some(json!({"status": "OFFER", "note": "Extended offer"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "OFFER");
        assert_eq!(body["history"].as_array().unwrap().len(), 4);
        assert_eq!(body["history"][3]["note"], "Extended offer");

        let response = send(app, Method::GET, "/api/v1/applications/a1/timeline", None).await;
        let timeline = json_body(response).await;
        assert_eq!(timeline["progress_percent"], 100);
        assert_eq!(timeline["entries"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_transition_unknown_application_is_404() {
        let app = build_router(test_state(TransitionPolicy::Unrestricted));
        let response = send(
            app,
            Method::POST,
            "/api/v1/applications/a404/transition",
            Some(json!({"status": "OFFER"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_transition_refused_by_policy_is_422() {
        let app = build_router(test_state(TransitionPolicy::ForwardOnly));
        let response = send(
            app,
            Method::POST,
            "/api/v1/applications/a1/transition",
            Some(json!({"status": "APPLIED"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unknown_status_in_transition_body_is_validation_error() {
        let state = test_state(TransitionPolicy::Unrestricted);
        let app = build_router(state.clone());
        let response = send(
            app,
            Method::POST,
            "/api/v1/applications/a1/transition",
            Some(json!({"status": "HIRED"})),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            state.store.read().await.application("a1").unwrap().history.len(),
            3
        );
    }

    #[tokio::test]
    async fn test_malformed_transition_body_is_validation_error() {
        let app = build_router(test_state(TransitionPolicy::Unrestricted));
        let response = send(
            app,
            Method::POST,
            "/api/v1/applications/a1/transition",
            Some(json!({"note": "no status"})),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_status_query_is_validation_error() {
        let app = build_router(test_state(TransitionPolicy::Unrestricted));
        let response = send(app, Method::GET, "/api/v1/applications?status=Hired", None).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].is_string());
    }

    #[tokio::test]
    async fn test_blank_search_returns_to_browse_mode() {
        let app = build_router(test_state(TransitionPolicy::Unrestricted));

        let response = send(
            app.clone(),
            Method::POST,
            "/api/v1/jobs/search",
            Some(json!({"keyword": "", "location": ""})),
        )
        .await;
        assert_eq!(json_body(response).await["jobs"].as_array().unwrap().len(), 3);

        let response = send(app, Method::GET, "/api/v1/jobs/search/results", None).await;
        let view = json_body(response).await;
        assert_eq!(view["is_searching"], false);
        assert_eq!(view["is_loading"], false);
    }

    #[tokio::test]
    async fn test_board_has_five_columns() {
        let app = build_router(test_state(TransitionPolicy::Unrestricted));
        let response = send(app, Method::GET, "/api/v1/pipeline/board", None).await;
        let board = json_body(response).await;
        let columns = board["columns"].as_array().unwrap();
        assert_eq!(columns.len(), 5);
        assert_eq!(columns[2]["label"], "Interview");
        assert_eq!(columns[2]["cards"][0]["candidate_name"], "Alex Johnson");
    }

    #[tokio::test]
    async fn test_board_scoped_to_unknown_job_is_404() {
        let app = build_router(test_state(TransitionPolicy::Unrestricted));
        let response = send(app, Method::GET, "/api/v1/pipeline/board?job_id=j404", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_applications_by_status_query() {
        let state = test_state(TransitionPolicy::Unrestricted);
        let app = build_router(state);

        let response = send(
            app.clone(),
            Method::GET,
            "/api/v1/applications?status=INTERVIEW",
            None,
        )
        .await;
        assert_eq!(json_body(response).await.as_array().unwrap().len(), 1);

        let response = send(app, Method::GET, "/api/v1/applications?status=OFFER", None).await;
        assert!(json_body(response).await.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_publishes_results() {
        let app = build_router(test_state(TransitionPolicy::Unrestricted));

        let response = send(
            app.clone(),
            Method::POST,
            "/api/v1/jobs/search",
            Some(json!({"keyword": "engineer"})),
        )
        .await;
        let outcome = json_body(response).await;
        assert_eq!(outcome["applied"], true);
        assert_eq!(outcome["jobs"][0]["title"], "Senior Frontend Engineer");

        let response = send(app.clone(), Method::GET, "/api/v1/jobs/search/results", None).await;
        let view = json_body(response).await;
        // Title match plus the backend role through its "Engineering" category.
        assert_eq!(view["jobs"].as_array().unwrap().len(), 2);
        assert_eq!(view["is_searching"], true);

        let response = send(app, Method::DELETE, "/api/v1/jobs/search", None).await;
        let view = json_body(response).await;
        assert_eq!(view["jobs"].as_array().unwrap().len(), 3);
        assert_eq!(view["is_searching"], false);
    }

    #[tokio::test]
    async fn test_get_job_includes_company() {
        let app = build_router(test_state(TransitionPolicy::Unrestricted));
        let response = send(app.clone(), Method::GET, "/api/v1/jobs/j2", None).await;
        let detail = json_body(response).await;
        assert_eq!(detail["company"]["name"], "NexGen Digital");

        let response = send(app, Method::GET, "/api/v1/jobs/j404", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_parse_resume_replaces_latest_only_on_success() {
        let app = build_router(test_state(TransitionPolicy::Unrestricted));

        let response = send(app.clone(), Method::GET, "/api/v1/resumes/latest", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(
            app.clone(),
            Method::POST,
            "/api/v1/resumes/parse",
            Some(json!({"raw_text": "Alex Johnson, Rust"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(
            app.clone(),
            Method::POST,
            "/api/v1/resumes/parse",
            Some(json!({"raw_text": "garbage"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let response = send(app, Method::GET, "/api/v1/resumes/latest", None).await;
        assert_eq!(json_body(response).await["skills"][0], "Rust");
    }

    #[tokio::test]
    async fn test_switch_role_changes_navigation() {
        let app = build_router(test_state(TransitionPolicy::Unrestricted));

        let response = send(app.clone(), Method::GET, "/api/v1/session", None).await;
        let session = json_body(response).await;
        assert_eq!(session["role"], "CANDIDATE");
        assert_eq!(session["dashboard"], "candidate");
        assert_eq!(session["user"]["name"], "Alex Johnson");

        let response = send(
            app,
            Method::PUT,
            "/api/v1/session/role",
            Some(json!({"role": "EMPLOYER"})),
        )
        .await;
        let session = json_body(response).await;
        assert_eq!(session["dashboard"], "employer_pipeline");
        assert_eq!(session["navigation"][1]["label"], "ATS");
    }

    #[tokio::test]
    async fn test_candidate_dashboard() {
        let app = build_router(test_state(TransitionPolicy::Unrestricted));

        let response = send(
            app.clone(),
            Method::GET,
            "/api/v1/candidates/u1/applications",
            None,
        )
        .await;
        let overview = json_body(response).await;
        assert_eq!(overview[0]["company_name"], "TechFlow");
        assert_eq!(overview[0]["progress_percent"], 70);

        let response = send(app, Method::GET, "/api/v1/candidates/u404/applications", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
