//! # Repository Module
//!
//! Database repository implementations for Storefront.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Route handler                                                         │
//! │       │                                                                 │
//! │       │  store.get_by_id(7)                                            │
//! │       ▼                                                                 │
//! │  EntityStore (trait)                                                   │
//! │  ├── list / find_by_id / count / delete_by_id   (provided, generic)   │
//! │  ├── get_by_id                                  (provided, NotFound)  │
//! │  └── create / update                            (per entity)          │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  SearchableStore (trait, products only)                                │
//! │  ├── search_text_contains(field, term)                                 │
//! │  └── search_numeric_range(field, low, high)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and search
//! - [`DepartmentRepository`](department::DepartmentRepository) - Departments and their employees
//! - [`EmployeeRepository`](employee::EmployeeRepository) - Employee CRUD
//! - [`UserRepository`](user::UserRepository) - Registered users

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, Sqlite, SqlitePool, Transaction};
use storefront_core::EntityId;

use crate::error::{DbError, DbResult};

pub mod department;
pub mod employee;
pub mod product;
pub mod user;

// =============================================================================
// Column Selection
// =============================================================================

/// A closed set of columns a query may address.
///
/// Only `&'static str` literals ever reach the SQL text; search terms and
/// bounds are always bound as parameters.
pub trait Column: Copy + Send + Sync + 'static {
    fn column(&self) -> &'static str;
}

// =============================================================================
// Shared Helpers
// =============================================================================

/// Opens a transaction that holds the write lock from its first statement.
///
/// Under WAL a deferred read-then-write transaction fails with `SQLITE_BUSY`
/// when another writer got there first, without waiting on the busy timeout.
pub(crate) async fn begin_write(pool: &SqlitePool) -> DbResult<Transaction<'static, Sqlite>> {
    Ok(pool.begin_with("BEGIN IMMEDIATE").await?)
}

/// Decodes the rows whose `column` contains `term`, ignoring case.
///
/// NULL columns never match. Row order is preserved.
pub(crate) fn rows_containing<T>(
    rows: Vec<SqliteRow>,
    column: &str,
    term: &str,
) -> DbResult<Vec<T>>
where
    T: for<'r> FromRow<'r, SqliteRow>,
{
    let needle = term.to_lowercase();
    let mut matches = Vec::new();

    for row in rows {
        let value: Option<String> = row.try_get(column)?;
        if value.is_some_and(|v| v.to_lowercase().contains(&needle)) {
            matches.push(T::from_row(&row)?);
        }
    }

    Ok(matches)
}

// =============================================================================
// EntityStore
// =============================================================================

/// Generic CRUD over one entity table.
///
/// ## Contract
/// - `id` is assigned by the store on `create` and never changes
/// - An absent id surfaces as [`DbError::NotFound`], never as a placeholder
/// - The store performs no validation; callers validate payloads first
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Stored record type.
    type Entity: for<'r> FromRow<'r, SqliteRow> + Send + Sync + Unpin + 'static;

    /// Creation payload (no id).
    type New: Send + 'static;

    /// Partial update payload.
    type Patch: Send + 'static;

    /// Name used in `NotFound` errors and logs.
    const ENTITY_NAME: &'static str;

    /// Backing table.
    const TABLE: &'static str;

    fn pool(&self) -> &SqlitePool;

    /// All stored entities ordered by id.
    async fn list(&self) -> DbResult<Vec<Self::Entity>> {
        let sql = format!("SELECT * FROM {} ORDER BY id", Self::TABLE);
        let rows = sqlx::query_as::<_, Self::Entity>(&sql)
            .fetch_all(self.pool())
            .await?;
        Ok(rows)
    }

    /// Raw lookup; `None` when no row has this id.
    async fn find_by_id(&self, id: EntityId) -> DbResult<Option<Self::Entity>> {
        let sql = format!("SELECT * FROM {} WHERE id = ?1", Self::TABLE);
        let row = sqlx::query_as::<_, Self::Entity>(&sql)
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(row)
    }

    /// Lookup that fails with `NotFound` when the id is absent.
    async fn get_by_id(&self, id: EntityId) -> DbResult<Self::Entity> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found(Self::ENTITY_NAME, id))
    }

    /// Persists a new entity and returns it with its assigned id.
    async fn create(&self, new: Self::New) -> DbResult<Self::Entity>;

    /// Overwrites the fields present in `patch` and returns the stored result.
    async fn update(&self, id: EntityId, patch: Self::Patch) -> DbResult<Self::Entity>;

    /// Removes the row with this id.
    async fn delete_by_id(&self, id: EntityId) -> DbResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", Self::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(self.pool()).await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(Self::ENTITY_NAME, id));
        }

        tracing::debug!(entity = Self::ENTITY_NAME, id, "Deleted");
        Ok(())
    }

    /// Number of stored rows.
    async fn count(&self) -> DbResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", Self::TABLE);
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(self.pool()).await?;
        Ok(count)
    }
}

// =============================================================================
// SearchableStore
// =============================================================================

/// Filtered queries over a store's text and numeric columns.
#[async_trait]
pub trait SearchableStore: EntityStore {
    type TextField: Column;
    type NumericField: Column;

    /// Case-insensitive substring match over one text column, ordered by id.
    ///
    /// NULL columns never match. An empty term matches every non-NULL value.
    /// Case folding is Unicode-aware (`str::to_lowercase`) and happens in
    /// Rust; SQLite's `lower()` folds ASCII only.
    async fn search_text_contains(
        &self,
        field: Self::TextField,
        term: &str,
    ) -> DbResult<Vec<Self::Entity>> {
        let column = field.column();
        let sql = format!(
            "SELECT * FROM {table} WHERE {column} IS NOT NULL ORDER BY id",
            table = Self::TABLE,
        );

        tracing::debug!(entity = Self::ENTITY_NAME, column, term, "Text search");

        let rows = sqlx::query(&sql).fetch_all(self.pool()).await?;
        rows_containing(rows, column, term)
    }

    /// Inclusive range over one numeric column, ordered by that column then id.
    ///
    /// `low > high` yields an empty result.
    async fn search_numeric_range(
        &self,
        field: Self::NumericField,
        low: f64,
        high: f64,
    ) -> DbResult<Vec<Self::Entity>> {
        let column = field.column();
        let sql = format!(
            "SELECT * FROM {table} WHERE {column} BETWEEN ?1 AND ?2 ORDER BY {column}, id",
            table = Self::TABLE,
        );

        tracing::debug!(entity = Self::ENTITY_NAME, column, low, high, "Range search");

        let rows = sqlx::query_as::<_, Self::Entity>(&sql)
            .bind(low)
            .bind(high)
            .fetch_all(self.pool())
            .await?;
        Ok(rows)
    }
}
