//! # catalogd HTTP Server Module
//!
//! Axum-based HTTP surface for the product catalog.
//!
//! # Endpoints
//!
//! - `/` - Plain text welcome
//! - `/api/products` - List (filter/search/pagination) and create
//! - `/api/products/stats` - Count of products per category
//! - `/api/products/{id}` - Get, update, delete a single product
//!
//! Every request passes Logging → (under `/api`, non-GET) Authentication →
//! routing → (writes) Validation → handler. Handler failures funnel to the
//! single rendering point in [`errors`].

pub mod config;
pub mod errors;
pub mod middleware;
pub mod product_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
