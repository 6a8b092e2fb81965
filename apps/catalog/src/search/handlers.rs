//! Axum route handlers for the catalog page and the search API.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::filter::FilterSet;
use crate::catalog::manual::ManualFilters;
use crate::catalog::models::Product;
use crate::errors::AppError;
use crate::render::page::{render_page, PageView};
use crate::search::service::{run_search, SearchOutcome};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(flatten)]
    pub manual: ManualFilters,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub filters: Option<FilterSet>,
}

#[derive(Debug, Serialize)]
pub struct ProductsResponse<'a> {
    pub count: usize,
    pub products: &'a [Product],
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse<'a> {
    pub categories: &'a [String],
}

/// Query string submitted by the catalog page form.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub q: String,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub max_price: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_rating: Option<f64>,
    /// Present when the search button was pressed.
    pub submit: Option<String>,
}

/// A cleared number input is submitted as `field=`; treat it like an absent field.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<f64>().map(Some).map_err(serde::de::Error::custom),
    }
}

impl PageParams {
    fn manual_filters(&self) -> ManualFilters {
        let defaults = ManualFilters::default();
        ManualFilters {
            category: self.category.clone().unwrap_or(defaults.category),
            min_price: self.min_price.unwrap_or(defaults.min_price),
            max_price: self.max_price.unwrap_or(defaults.max_price),
            min_rating: self.min_rating.unwrap_or(defaults.min_rating),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
///
/// Renders the catalog page. Results appear once the form is submitted or a query is typed.
pub async fn handle_page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Html<String>, AppError> {
    let manual = params.manual_filters();
    manual.validate()?;

    let searched = params.submit.is_some() || !params.q.trim().is_empty();
    let outcome = if searched {
        Some(run_search(&state.catalog, state.extractor.as_deref(), &params.q, &manual).await)
    } else {
        None
    };

    let view = PageView {
        query: &params.q,
        manual: &manual,
        categories: state.catalog.categories(),
        ai_enabled: state.ai_enabled(),
        outcome: outcome.as_ref(),
    };

    Ok(Html(render_page(&view).into_string()))
}

/// POST /api/v1/search
///
/// JSON form of the page search: AI path for a non-empty query, manual filters otherwise.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    request.manual.validate()?;

    let outcome: SearchOutcome<'_> = run_search(
        &state.catalog,
        state.extractor.as_deref(),
        &request.query,
        &request.manual,
    )
    .await;

    let body = serde_json::to_value(&outcome).map_err(anyhow::Error::from)?;
    Ok(Json(body))
}

/// POST /api/v1/filters/extract
///
/// Previews what the extractor makes of a query. Unlike search, failures are not
/// swallowed here.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    if request.query.trim().is_empty() {
        return Err(AppError::Validation("query cannot be empty".to_string()));
    }

    let extractor = state.extractor.as_ref().ok_or(AppError::AiUnavailable)?;
    let filters = extractor
        .extract(request.query.trim())
        .await
        .map_err(|e| AppError::Llm(format!("filter extraction failed: {e}")))?;

    Ok(Json(ExtractResponse { filters }))
}

/// GET /api/v1/products
pub async fn handle_products(State(state): State<AppState>) -> Json<serde_json::Value> {
    let products = state.catalog.products();
    Json(serde_json::json!(ProductsResponse {
        count: products.len(),
        products,
    }))
}

/// GET /api/v1/categories
pub async fn handle_categories(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!(CategoriesResponse {
        categories: state.catalog.categories(),
    }))
}
