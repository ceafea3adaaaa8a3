//! Generic CRUD routes over any [`EntityStore`].
//!
//! ## Route Table
//! ```text
//! GET    /      → list          200 [entity]
//! POST   /      → create        201 entity       | 400
//! GET    /:id   → get_by_id     200 entity       | 404
//! PUT    /:id   → update        200 entity       | 404 | 400
//! DELETE /:id   → delete_by_id  204              | 404
//! ```

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::Serialize;
use storefront_core::validation::Validate;
use storefront_core::EntityId;
use storefront_db::EntityStore;
use tracing::info;

use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// Builds the five CRUD routes for store `S`.
pub fn router<S>() -> Router<AppState>
where
    S: EntityStore + FromRef<AppState> + Clone + 'static,
    S::Entity: Serialize,
    S::New: DeserializeOwned + Validate,
    S::Patch: DeserializeOwned + Validate,
{
    Router::new()
        .route("/", get(list::<S>).post(create::<S>))
        .route(
            "/:id",
            get(get_one::<S>).put(update::<S>).delete(delete::<S>),
        )
}

async fn list<S>(State(store): State<S>) -> ApiResult<Json<Vec<S::Entity>>>
where
    S: EntityStore,
    S::Entity: Serialize,
{
    Ok(Json(store.list().await?))
}

async fn get_one<S>(
    State(store): State<S>,
    ApiPath(id): ApiPath<EntityId>,
) -> ApiResult<Json<S::Entity>>
where
    S: EntityStore,
    S::Entity: Serialize,
{
    Ok(Json(store.get_by_id(id).await?))
}

async fn create<S>(
    State(store): State<S>,
    ApiJson(new): ApiJson<S::New>,
) -> ApiResult<(StatusCode, Json<S::Entity>)>
where
    S: EntityStore,
    S::Entity: Serialize,
    S::New: Validate,
{
    new.validate()?;
    let created = store.create(new).await?;

    info!(entity = S::ENTITY_NAME, "Created");
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update<S>(
    State(store): State<S>,
    ApiPath(id): ApiPath<EntityId>,
    ApiJson(patch): ApiJson<S::Patch>,
) -> ApiResult<Json<S::Entity>>
where
    S: EntityStore,
    S::Entity: Serialize,
    S::Patch: Validate,
{
    patch.validate()?;
    Ok(Json(store.update(id, patch).await?))
}

async fn delete<S>(State(store): State<S>, ApiPath(id): ApiPath<EntityId>) -> ApiResult<StatusCode>
where
    S: EntityStore,
{
    store.delete_by_id(id).await?;

    info!(entity = S::ENTITY_NAME, id, "Deleted");
    Ok(StatusCode::NO_CONTENT)
}
