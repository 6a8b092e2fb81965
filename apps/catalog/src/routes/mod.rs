pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::search::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog page
        .route("/", get(handlers::handle_page))
        // Search API
        .route("/api/v1/products", get(handlers::handle_products))
        .route("/api/v1/categories", get(handlers::handle_categories))
        .route("/api/v1/search", post(handlers::handle_search))
        .route("/api/v1/filters/extract", post(handlers::handle_extract))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::filter::FilterSet;
    use crate::search::extractor::FilterExtractor;
    use crate::search::service::tests::{two_product_catalog, StubExtractor};

    fn app(extractor: Option<StubExtractor>) -> Router {
        let state = AppState {
            catalog: Arc::new(two_product_catalog()),
            extractor: extractor.map(|e| Arc::new(e) as Arc<dyn FilterExtractor>),
        };
        build_router(state)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn result_names(body: &str) -> Vec<String> {
        let value: Value = serde_json::from_str(body).unwrap();
        value["products"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_health_reports_catalog_size() {
        let (status, body) = send(app(None), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["products"], 2);
        assert_eq!(value["ai_search"], false);
    }

    #[tokio::test]
    async fn test_search_with_extracted_filters() {
        let stub = StubExtractor::Filters(FilterSet {
            category: Some("shoe".to_string()),
            max_price: Some(60.0),
            min_rating: Some(3.0),
            ..Default::default()
        });
        let (status, body) = send(
            app(Some(stub)),
            post_json("/api/v1/search", json!({"query": "comfy shoes"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["mode"], "ai");
        assert_eq!(value["count"], 1);
        assert_eq!(value["filters"]["category"], "shoe");
        assert_eq!(result_names(&body), vec!["Red Sneaker"]);
    }

    #[tokio::test]
    async fn test_search_manual_defaults_return_everything() {
        let (status, body) = send(
            app(None),
            post_json(
                "/api/v1/search",
                json!({"category": "All", "min_price": 0, "max_price": 1000, "min_rating": 1.0}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(result_names(&body), vec!["Red Sneaker", "Blue Hat"]);
    }

    #[tokio::test]
    async fn test_search_rejects_invalid_manual_filters() {
        let (status, body) = send(
            app(None),
            post_json("/api/v1/search", json!({"min_price": 900, "max_price": 100})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn test_search_failure_falls_back_with_warning() {
        let (status, body) = send(
            app(Some(StubExtractor::Failing)),
            post_json("/api/v1/search", json!({"query": "hat"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["mode"], "text");
        assert!(value["warning"].as_str().unwrap().contains("processing error"));
        assert_eq!(result_names(&body), vec!["Blue Hat"]);
    }

    #[tokio::test]
    async fn test_extract_requires_configured_ai() {
        let (status, body) = send(
            app(None),
            post_json("/api/v1/filters/extract", json!({"query": "hats"})),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.contains("AI_UNAVAILABLE"));
    }

    #[tokio::test]
    async fn test_extract_rejects_empty_query() {
        let (status, _) = send(
            app(Some(StubExtractor::Unparsable)),
            post_json("/api/v1/filters/extract", json!({"query": "  "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_extract_surfaces_llm_failure() {
        let (status, body) = send(
            app(Some(StubExtractor::Failing)),
            post_json("/api/v1/filters/extract", json!({"query": "hats"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("LLM_ERROR"));
    }

    #[tokio::test]
    async fn test_extract_unparsable_returns_null_filters() {
        let (status, body) = send(
            app(Some(StubExtractor::Unparsable)),
            post_json("/api/v1/filters/extract", json!({"query": "hats"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let value: Value = serde_json::from_str(&body).unwrap();
        assert!(value["filters"].is_null());
    }

    #[tokio::test]
    async fn test_categories_are_sorted() {
        let (_, body) = send(app(None), get("/api/v1/categories")).await;
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["categories"], json!(["Accessories", "Shoes"]));
    }

    #[tokio::test]
    async fn test_products_lists_catalog() {
        let (_, body) = send(app(None), get("/api/v1/products")).await;
        assert_eq!(result_names(&body), vec!["Red Sneaker", "Blue Hat"]);
    }

    #[tokio::test]
    async fn test_page_without_search_has_no_results() {
        let (status, body) = send(app(None), get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Product Catalog"));
        assert!(body.contains("AI search is disabled"));
        assert!(!body.contains("Results ("));
    }

    #[tokio::test]
    async fn test_page_query_runs_text_search_without_ai() {
        let (status, body) = send(app(None), get("/?q=hat")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Results (1 found)"));
        assert!(body.contains("Blue Hat"));
        assert!(!body.contains("<div class=\"product-title\">Red Sneaker</div>"));
    }

    #[tokio::test]
    async fn test_page_submit_applies_manual_filters() {
        let (status, body) = send(
            app(None),
            get("/?q=&category=Shoes&min_price=0&max_price=1000&min_rating=1.0&submit=search"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Results (1 found)"));
        assert!(body.contains("<div class=\"product-title\">Red Sneaker</div>"));
    }

    #[tokio::test]
    async fn test_page_shows_ai_filter_summary() {
        let stub = StubExtractor::Filters(FilterSet {
            max_price: Some(30.0),
            ..Default::default()
        });
        let (_, body) = send(app(Some(stub)), get("/?q=cheap+stuff")).await;
        assert!(body.contains("<div class=\"filter-summary\">Max Price: $30</div>"));
        assert!(body.contains("Results (1 found)"));
        assert!(body.contains("Blue Hat"));
    }

    #[tokio::test]
    async fn test_page_cleared_price_inputs_fall_back_to_defaults() {
        let (status, body) = send(
            app(None),
            get("/?q=&category=All&min_price=&max_price=&min_rating=1.0&submit=search"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Results (2 found)"));
        assert!(body.contains("name=\"min_price\""));
    }

    #[tokio::test]
    async fn test_page_rejects_non_numeric_price() {
        let (status, body) = send(app(None), get("/?min_price=cheap&submit=search")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.contains("Results ("));
    }
}
