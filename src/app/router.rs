use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{app, generations, AppState};

use super::errors::DefaultApiError;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    Router::new()
        .route("/", get(app::controller::get_root))
        .route("/health", get(app::controller::get_health))
        // generations
        .route(
            "/generations",
            post(generations::controller::generate_images),
        )
        .with_state(state)
        // layers
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    tracing::error!("unhandled service error: {}", err);
                    DefaultApiError::InternalServerError.value()
                }))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(5, Duration::from_secs(1))),
        )
}

#[cfg(test)]
mod tests {
    use std::sync::{atomic::Ordering, Arc};

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::create_router;
    use crate::{app::env::Envy, generations::service::tests::MockProvider, AppState};

    fn state(provider: Arc<MockProvider>) -> AppState {
        AppState {
            envy: Arc::new(Envy {
                app_env: "test".to_string(),
                port: None,
                app_url: "https://example.com".to_string(),
                hf_api_key: "hf_test".to_string(),
                inference_api_url: None,
                inference_timeout_secs: None,
            }),
            provider,
        }
    }

    async fn post_json(provider: Arc<MockProvider>, body: Value) -> (StatusCode, Value) {
        let response = create_router(state(provider))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generations")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn serves_the_form_page() {
        let response = create_router(state(Arc::new(MockProvider::default())))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Generate Images"));
    }

    #[tokio::test]
    async fn health_reports_online() {
        let response = create_router(state(Arc::new(MockProvider::default())))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn generates_a_batch() {
        let provider = Arc::new(MockProvider {
            fail_slots: vec![1],
            ..Default::default()
        });

        let (status, body) = post_json(
            provider.clone(),
            json!({ "prompt": "cat", "num_images": 3, "width": 256, "height": 256 }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 3);
        assert_eq!(body["prompt"], "cat");
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0]["status"], "failure");
        assert_eq!(results[1]["status"], "image");
        assert_eq!(results[1]["file_name"], "generated_image_2.png");
        assert_eq!(results[2]["slot"], 3);
    }

    #[tokio::test]
    async fn empty_prompt_is_a_bad_request() {
        let provider = Arc::new(MockProvider::default());

        let (status, body) = post_json(provider.clone(), json!({ "prompt": "" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Please enter a prompt!");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn out_of_range_field_is_a_bad_request() {
        let provider = Arc::new(MockProvider::default());

        let (status, body) =
            post_json(provider.clone(), json!({ "prompt": "cat", "steps": 500 })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("steps"));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn values_overflowing_field_types_are_bad_requests() {
        let cases = [
            json!({ "prompt": "cat", "num_images": 300 }),
            json!({ "prompt": "cat", "width": -5 }),
            json!({ "prompt": "cat", "width": 70000 }),
            json!({ "prompt": "cat", "steps": -1 }),
        ];

        for body in cases {
            let provider = Arc::new(MockProvider::default());

            let (status, response) = post_json(provider.clone(), body.clone()).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
            assert!(response["message"].is_string());
            assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn malformed_json_is_rejected_with_message() {
        let response = create_router(state(Arc::new(MockProvider::default())))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generations")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["message"].is_string());
    }
}
