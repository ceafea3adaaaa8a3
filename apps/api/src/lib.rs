//! # Storefront API
//!
//! HTTP server exposing CRUD and search over products, departments and
//! employees, plus username/password registration and bearer-token login.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Storefront API                                  │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  crud::router  │  │  products      │  │  users                     ││
//! │  │                │  │                │  │                            ││
//! │  │ • list         │  │ • search       │  │ • register                 ││
//! │  │ • get / create │  │ • by category  │  │ • login (token | "fail")   ││
//! │  │ • update       │  │ • price range  │  │ • list users               ││
//! │  │ • delete       │  │ • sorted       │  │                            ││
//! │  └────────────────┘  └────────────────┘  └────────────────────────────┘│
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Infrastructure                               │  │
//! │  │                                                                   │  │
//! │  │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────────────┐│  │
//! │  │  │  SQLite      │  │  ApiConfig   │  │    JWT Auth              ││  │
//! │  │  │ (storefront- │  │  defaults →  │  │                          ││  │
//! │  │  │   db)        │  │  toml → env  │  │ HS256 + argon2           ││  │
//! │  │  └──────────────┘  └──────────────┘  └──────────────────────────┘│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables (all optional, see `config.rs`):
//! - `STOREFRONT_HTTP_PORT` - HTTP port (default: 8080)
//! - `STOREFRONT_DATABASE_PATH` - SQLite file (default: ./storefront.db)
//! - `STOREFRONT_JWT_SECRET` - Secret for JWT signing
//! - `STOREFRONT_JWT_ACCESS_LIFETIME_SECS` - Token lifetime (default: 3600)
//! - `STOREFRONT_DB_MAX_CONNECTIONS` - Pool size (default: 5)

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

// Re-exports
pub use crate::config::ApiConfig;
pub use crate::error::{ApiError, ErrorCode};
pub use crate::state::AppState;

/// Builds the full application router.
///
/// Used by `main` and by the black-box tests, so both serve the same routes.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .nest("/products", routes::products::router())
        .nest("/departments", routes::departments::router())
        .nest("/employees", routes::employees::router())
        .merge(routes::users::router())
        .merge(routes::system::router())
        .merge(routes::system::secured_router(state.clone()))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
