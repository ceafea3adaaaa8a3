//! Health, greeting and course catalog endpoints, plus the bearer-protected
//! `/secured`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{middleware, Extension, Json, Router};
use serde::Serialize;
use storefront_db::migrations::migration_status;
use storefront_db::Database;

use crate::middleware::{require_bearer, Principal};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
    /// `applied/total` embedded migrations
    pub migrations: String,
}

/// An entry in the fixed course catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub duration: u32,
}

const COURSES: [Course; 3] = [
    Course {
        id: 1,
        name: "React",
        description: "Frontend Dev using React",
        duration: 45,
    },
    Course {
        id: 2,
        name: "Spring Boot",
        description: "Backend Dev using Java and Spring Boot",
        duration: 60,
    },
    Course {
        id: 3,
        name: "Web Design",
        description: "Web Design using HTML CSS and BootStrap",
        duration: 45,
    },
];

/// Public routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/hello", get(hello))
        .route("/greet", get(greet))
        .route("/courses", get(courses))
}

/// Routes behind [`require_bearer`].
pub fn secured_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/secured", get(secured))
        .route_layer(middleware::from_fn_with_state(state, require_bearer))
}

async fn health(State(db): State<Database>) -> (StatusCode, Json<HealthResponse>) {
    let healthy = db.health_check().await;
    let (total, applied) = migration_status(db.pool()).await.unwrap_or((0, 0));

    let (status, body) = if healthy {
        (StatusCode::OK, ("ok", "connected"))
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, ("degraded", "unavailable"))
    };

    (
        status,
        Json(HealthResponse {
            status: body.0,
            version: env!("CARGO_PKG_VERSION"),
            database: body.1,
            migrations: format!("{}/{}", applied, total),
        }),
    )
}

async fn hello() -> &'static str {
    "hello world"
}

async fn greet() -> &'static str {
    "Hello World"
}

async fn courses() -> Json<Vec<Course>> {
    Json(COURSES.to_vec())
}

async fn secured(Extension(principal): Extension<Principal>) -> String {
    tracing::debug!(username = %principal.username, "Secured endpoint hit");
    "This is the secured api response".to_string()
}
