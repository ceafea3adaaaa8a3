//! `/employees`: plain CRUD.

use axum::Router;
use storefront_db::EmployeeRepository;

use super::crud;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    crud::router::<EmployeeRepository>()
}
