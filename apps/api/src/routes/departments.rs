//! `/departments`: CRUD plus the employee listing of one department.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use storefront_core::{Employee, EntityId};
use storefront_db::DepartmentRepository;

use super::crud;
use crate::error::ApiResult;
use crate::extract::ApiPath;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    crud::router::<DepartmentRepository>().route("/:id/employees", get(employees))
}

async fn employees(
    State(departments): State<DepartmentRepository>,
    ApiPath(id): ApiPath<EntityId>,
) -> ApiResult<Json<Vec<Employee>>> {
    Ok(Json(departments.employees(id).await?))
}
