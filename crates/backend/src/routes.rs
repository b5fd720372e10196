use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers;
use crate::shared::state::AppState;

/// All application routes
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // PROJECTS
        // ========================================
        .route(
            "/projects",
            get(handlers::a001_project::list_all).post(handlers::a001_project::create),
        )
        .route("/projects/:id", get(handlers::a001_project::get_by_id))
        // ========================================
        // MATERIALS & PREDICTION
        // ========================================
        .route("/materials", get(handlers::a002_material::list_all))
        .route(
            "/predict",
            post(handlers::u501_predict_materials::predict),
        )
        // ========================================
        // VENDORS
        // ========================================
        .route("/vendors", get(handlers::a003_vendor::search))
        .route("/vendors/:id", patch(handlers::a003_vendor::update))
        .route(
            "/vendors/finalize/:id",
            post(handlers::a003_vendor::finalize),
        )
        .route(
            "/vendors/finalized",
            get(handlers::a004_procurement::list_finalized),
        )
        .route(
            "/vendors/finalized/:material",
            axum::routing::delete(handlers::a004_procurement::remove),
        )
        // ========================================
        // PROCUREMENT MANAGEMENT
        // ========================================
        .route(
            "/procurement/timeline",
            get(handlers::a005_procurement_timeline::timeline),
        )
        .route(
            "/procurement/:material",
            patch(handlers::a004_procurement::update),
        )
        .route(
            "/procurement/:material/deliveries",
            post(handlers::a004_procurement::append_delivery),
        )
        .route(
            "/procurement/:material/mark-paid",
            post(handlers::a004_procurement::mark_paid),
        )
        // ========================================
        // ASSISTANT
        // ========================================
        .route("/chatbot", post(handlers::a006_chat::chatbot))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::assistant::CannedProvider;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use contracts::shared::fixtures::CANNED_REPLIES;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        configure_routes(AppState::new(Arc::new(CannedProvider), None))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn root_reports_name_and_version() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Smart Buy Dashboard API");
        assert_eq!(body["version"], "1.0.0");
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn chatbot_answers_without_project() {
        let response = app()
            .oneshot(post_json("/chatbot", r#"{"message":"When should I order steel?"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        let message = body["message"].as_str().unwrap();
        assert!(CANNED_REPLIES.contains(&message));
    }

    #[tokio::test]
    async fn blank_chat_message_is_a_bad_request() {
        let response = app()
            .oneshot(post_json("/chatbot", r#"{"message":"  "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["detail"], "Message must not be empty");
    }

    #[tokio::test]
    async fn finalize_flag_on_vendor_patch_is_rejected() {
        let request = Request::builder()
            .method("PATCH")
            .uri("/vendors/1")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"finalized":true}"#))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn finalize_without_material_is_a_bad_request() {
        let response = app()
            .oneshot(post_json("/vendors/finalize/1", r#"{"material":" "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn incomplete_prediction_request_is_a_bad_request() {
        let response = app()
            .oneshot(post_json(
                "/predict",
                r#"{"projectType":"Residential Development","size":"","state":"Maharashtra","city":"Pune","volume":5}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["detail"], "Project size is required");
    }

    #[tokio::test]
    async fn blank_vendor_search_is_a_bad_request() {
        let response = app()
            .oneshot(Request::builder().uri("/vendors?material=%20").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["detail"], "Material is required");
    }

    #[tokio::test]
    async fn malformed_project_id_is_a_bad_request() {
        let response = app()
            .oneshot(Request::builder().uri("/projects/not-a-uuid").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
