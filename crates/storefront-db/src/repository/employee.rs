//! # Employee Repository
//!
//! A `department_id` that names no department is rejected by SQLite and
//! surfaces as [`DbError::ForeignKeyViolation`].

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use super::{begin_write, EntityStore};
use crate::error::{DbError, DbResult};
use storefront_core::{Employee, EmployeePatch, EntityId, NewEmployee};

/// Repository for employee database operations.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    /// Creates a new EmployeeRepository.
    pub fn new(pool: SqlitePool) -> Self {
        EmployeeRepository { pool }
    }
}

#[async_trait]
impl EntityStore for EmployeeRepository {
    type Entity = Employee;
    type New = NewEmployee;
    type Patch = EmployeePatch;

    const ENTITY_NAME: &'static str = "Employee";
    const TABLE: &'static str = "employees";

    fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn create(&self, new: NewEmployee) -> DbResult<Employee> {
        let id = sqlx::query(
            r#"
            INSERT INTO employees (name, email, department_id)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(new.department_id)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        debug!(id, department_id = ?new.department_id, "Employee created");

        Ok(Employee {
            id,
            name: new.name,
            email: new.email,
            department_id: new.department_id,
        })
    }

    async fn update(&self, id: EntityId, patch: EmployeePatch) -> DbResult<Employee> {
        let mut tx = begin_write(&self.pool).await?;

        let mut employee = sqlx::query_as::<_, Employee>(
            "SELECT id, name, email, department_id FROM employees WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::not_found(Self::ENTITY_NAME, id))?;

        employee.apply_patch(patch);

        sqlx::query(
            r#"
            UPDATE employees
            SET name = ?1, email = ?2, department_id = ?3
            WHERE id = ?4
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(employee.department_id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(employee)
    }
}
