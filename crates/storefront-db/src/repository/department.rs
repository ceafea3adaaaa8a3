//! # Department Repository
//!
//! Departments own their employees. The relation is read through an explicit
//! accessor backed by `idx_employees_department_id`; deleting a department
//! removes its employees via `ON DELETE CASCADE`.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use super::{begin_write, EntityStore};
use crate::error::{DbError, DbResult};
use storefront_core::{Department, DepartmentPatch, Employee, EntityId, NewDepartment};

/// Repository for department database operations.
#[derive(Debug, Clone)]
pub struct DepartmentRepository {
    pool: SqlitePool,
}

impl DepartmentRepository {
    /// Creates a new DepartmentRepository.
    pub fn new(pool: SqlitePool) -> Self {
        DepartmentRepository { pool }
    }

    /// Employees of one department, ordered by id.
    ///
    /// Fails with `NotFound` when the department does not exist, so an empty
    /// department and a missing one are distinguishable.
    pub async fn employees(&self, department_id: EntityId) -> DbResult<Vec<Employee>> {
        self.get_by_id(department_id).await?;

        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, email, department_id
            FROM employees
            WHERE department_id = ?1
            ORDER BY id
            "#,
        )
        .bind(department_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(department_id, count = employees.len(), "Loaded department employees");
        Ok(employees)
    }
}

#[async_trait]
impl EntityStore for DepartmentRepository {
    type Entity = Department;
    type New = NewDepartment;
    type Patch = DepartmentPatch;

    const ENTITY_NAME: &'static str = "Department";
    const TABLE: &'static str = "departments";

    fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn create(&self, new: NewDepartment) -> DbResult<Department> {
        let id = sqlx::query("INSERT INTO departments (name) VALUES (?1)")
            .bind(&new.name)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        debug!(id, name = %new.name, "Department created");

        Ok(Department { id, name: new.name })
    }

    async fn update(&self, id: EntityId, patch: DepartmentPatch) -> DbResult<Department> {
        let mut tx = begin_write(&self.pool).await?;

        let mut department =
            sqlx::query_as::<_, Department>("SELECT id, name FROM departments WHERE id = ?1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| DbError::not_found(Self::ENTITY_NAME, id))?;

        department.apply_patch(patch);

        sqlx::query("UPDATE departments SET name = ?1 WHERE id = ?2")
            .bind(&department.name)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(department)
    }
}
