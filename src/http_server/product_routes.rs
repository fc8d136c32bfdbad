//! # Product HTTP Routes
//!
//! Endpoints for listing, creating, updating, and deleting products, plus
//! per-category statistics.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::store::{Product, ProductDraft, ProductStore};

use super::errors::{ApiError, ApiResult};
use super::middleware::require_api_key;

// ==================
// Shared State
// ==================

/// Product state shared across handlers
pub struct ProductState {
    pub store: ProductStore,
}

impl ProductState {
    /// Create new state around a seeded store
    pub fn new() -> Self {
        Self {
            store: ProductStore::seeded(),
        }
    }
}

impl Default for ProductState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Request/Response Types
// ==================

/// Query parameters accepted by the list endpoint.
///
/// `page` and `limit` arrive as raw strings: a non-numeric, missing, or
/// zero value falls back to the default instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListParams {
    /// Effective page number, defaulting to 1.
    pub fn page(&self) -> usize {
        parse_positive(self.page.as_deref()).unwrap_or(1)
    }

    /// Effective page size; unpaginated (the filtered result size) when
    /// absent or unusable.
    pub fn limit(&self, fallback: usize) -> usize {
        parse_positive(self.limit.as_deref()).unwrap_or(fallback)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.parse::<usize>().ok()).filter(|&n| n > 0)
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub products: Vec<Product>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStatsResponse {
    pub count_by_category: BTreeMap<String, usize>,
}

#[derive(Debug, Serialize)]
pub struct DeleteProductResponse {
    pub message: String,
    pub product: Product,
}

// ==================
// Product Routes
// ==================

/// Create product routes.
///
/// The literal `/products/stats` path is registered ahead of the
/// parameterized `/products/{id}` path; axum resolves static segments
/// with precedence over captures either way, so `stats` can never be
/// taken for an id.
pub fn product_routes(state: Arc<ProductState>) -> Router {
    Router::new()
        .route("/products", get(list_products_handler))
        .route("/products", post(create_product_handler))
        .route("/products/stats", get(product_stats_handler))
        .route("/products/{id}", get(get_product_handler))
        .route("/products/{id}", put(update_product_handler))
        .route("/products/{id}", delete(delete_product_handler))
        .layer(middleware::from_fn(require_api_key))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Parse a write payload at the deserialization boundary.
///
/// Any missing field, wrong primitive type, or malformed body is a
/// Validation error; the request fails wholesale.
fn validated_draft(body: Result<Json<ProductDraft>, JsonRejection>) -> ApiResult<ProductDraft> {
    let Json(draft) = body.map_err(|_| ApiError::Validation("Invalid product data".to_string()))?;
    Ok(draft)
}

// ==================
// Handlers
// ==================

/// List products with filtering, search, and pagination
async fn list_products_handler(
    State(state): State<Arc<ProductState>>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<ProductListResponse>> {
    let filtered = state
        .store
        .filtered(params.category.as_deref(), params.search.as_deref())?;

    let total = filtered.len();
    let page = params.page();
    let limit = params.limit(total);

    let start = page.saturating_sub(1).saturating_mul(limit);
    let products: Vec<Product> = filtered.into_iter().skip(start).take(limit).collect();

    Ok(Json(ProductListResponse {
        total,
        page,
        limit,
        products,
    }))
}

/// Get a single product by id
async fn get_product_handler(
    State(state): State<Arc<ProductState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let product = state.store.get(&id)?;
    Ok(Json(product))
}

/// Create a new product
async fn create_product_handler(
    State(state): State<Arc<ProductState>>,
    body: Result<Json<ProductDraft>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let draft = validated_draft(body)?;
    let created = state.store.insert(draft)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a product, replacing all fields except the id
async fn update_product_handler(
    State(state): State<Arc<ProductState>>,
    Path(id): Path<String>,
    body: Result<Json<ProductDraft>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let draft = validated_draft(body)?;
    let updated = state.store.replace(&id, draft)?;
    Ok(Json(updated))
}

/// Delete a product, returning its snapshot
async fn delete_product_handler(
    State(state): State<Arc<ProductState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteProductResponse>> {
    let removed = state.store.remove(&id)?;
    Ok(Json(DeleteProductResponse {
        message: "Product deleted".to_string(),
        product: removed,
    }))
}

/// Count of products per category over the full store
async fn product_stats_handler(
    State(state): State<Arc<ProductState>>,
) -> ApiResult<Json<ProductStatsResponse>> {
    let count_by_category = state.store.count_by_category()?;
    Ok(Json(ProductStatsResponse { count_by_category }))
}
