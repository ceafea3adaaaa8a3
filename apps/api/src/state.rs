//! Shared application state.
//!
//! Built once in `main` (or by a test) and handed to the router. Handlers
//! pull out only the piece they need through `FromRef`.

use std::sync::Arc;

use axum::extract::FromRef;
use storefront_db::{
    Database, DepartmentRepository, EmployeeRepository, ProductRepository, UserRepository,
};

use crate::auth::JwtManager;
use crate::config::ApiConfig;
use crate::services::AuthService;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub jwt: Arc<JwtManager>,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(db: Database, config: ApiConfig) -> Self {
        let jwt = JwtManager::new(&config.jwt_secret, config.jwt_access_lifetime_secs);

        AppState {
            db,
            jwt: Arc::new(jwt),
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for Arc<JwtManager> {
    fn from_ref(state: &AppState) -> Self {
        state.jwt.clone()
    }
}

impl FromRef<AppState> for ProductRepository {
    fn from_ref(state: &AppState) -> Self {
        state.db.products()
    }
}

impl FromRef<AppState> for DepartmentRepository {
    fn from_ref(state: &AppState) -> Self {
        state.db.departments()
    }
}

impl FromRef<AppState> for EmployeeRepository {
    fn from_ref(state: &AppState) -> Self {
        state.db.employees()
    }
}

impl FromRef<AppState> for UserRepository {
    fn from_ref(state: &AppState) -> Self {
        state.db.users()
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(state: &AppState) -> Self {
        AuthService::new(state.db.users(), state.jwt.clone())
    }
}
