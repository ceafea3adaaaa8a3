//! # Domain Types
//!
//! Entities served by the Storefront API.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   Department    │   │    Employee     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │◄──│  department_id  │       │
//! │  │  title          │   │  name           │   │  id             │       │
//! │  │  price          │   └─────────────────┘   │  name, email    │       │
//! │  │  brand          │                         └─────────────────┘       │
//! │  │  category       │   ┌─────────────────┐                             │
//! │  └─────────────────┘   │      User       │                             │
//! │                        │  ─────────────  │                             │
//! │                        │  id, username   │                             │
//! │                        │  password_hash  │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Three Shapes Per Entity
//! - `Product`: the stored record, always carries the store-assigned `id`
//! - `NewProduct`: creation payload, has no `id`
//! - `ProductPatch`: partial update, every field optional; absent fields keep
//!   their stored value and `id` can never be patched

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store on creation.
pub type EntityId = i64;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier.
    pub id: EntityId,

    /// Display title, also the sort key for category listings.
    pub title: String,

    /// Unit price.
    pub price: f64,

    pub brand: Option<String>,

    pub category: Option<String>,
}

impl Product {
    /// Overwrites the fields present in `patch`, leaving the rest untouched.
    pub fn apply_patch(&mut self, patch: ProductPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(brand) = patch.brand {
            self.brand = Some(brand);
        }
        if let Some(category) = patch.category {
            self.category = Some(category);
        }
    }
}

/// Creation payload for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Partial update for a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub brand: Option<String>,
    pub category: Option<String>,
}

// =============================================================================
// Department
// =============================================================================

/// A department. Owns its employees: deleting a department removes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: EntityId,
    pub name: String,
}

impl Department {
    pub fn apply_patch(&mut self, patch: DepartmentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDepartment {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DepartmentPatch {
    pub name: Option<String>,
}

// =============================================================================
// Employee
// =============================================================================

/// An employee, optionally attached to a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EntityId,
    pub name: String,
    pub email: Option<String>,

    /// Back-reference to the owning department.
    pub department_id: Option<EntityId>,
}

impl Employee {
    pub fn apply_patch(&mut self, patch: EmployeePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        if let Some(department_id) = patch.department_id {
            self.department_id = Some(department_id);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department_id: Option<EntityId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department_id: Option<EntityId>,
}

// =============================================================================
// User
// =============================================================================

/// A registered user.
///
/// The password hash is never serialized into responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// A user about to be stored. The password is already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

/// Username/password pair sent to `/register` and `/login`.
///
/// Accepts the legacy `userName`/`pwd` field names as aliases.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(alias = "userName")]
    pub username: String,
    #[serde(alias = "pwd")]
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn hat() -> Product {
        Product {
            id: 1,
            title: "Red Hat".to_string(),
            price: 15.0,
            brand: Some("Acme".to_string()),
            category: Some("Clothing".to_string()),
        }
    }

    #[test]
    fn test_patch_overwrites_only_present_fields() {
        let mut product = hat();
        product.apply_patch(ProductPatch {
            price: Some(18.0),
            ..Default::default()
        });

        assert_eq!(product.id, 1);
        assert_eq!(product.title, "Red Hat");
        assert_eq!(product.price, 18.0);
        assert_eq!(product.brand.as_deref(), Some("Acme"));
        assert_eq!(product.category.as_deref(), Some("Clothing"));
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut product = hat();
        product.apply_patch(ProductPatch::default());
        assert_eq!(product, hat());
    }

    #[test]
    fn test_patch_deserializes_partial_json() {
        let patch: ProductPatch = serde_json::from_str(r#"{"price": 18}"#).unwrap();
        assert_eq!(patch.price, Some(18.0));
        assert!(patch.title.is_none());
    }

    #[test]
    fn test_employee_patch_moves_department() {
        let mut employee = Employee {
            id: 7,
            name: "Ada".to_string(),
            email: None,
            department_id: Some(1),
        };
        employee.apply_patch(EmployeePatch {
            department_id: Some(2),
            ..Default::default()
        });

        assert_eq!(employee.department_id, Some(2));
        assert_eq!(employee.name, "Ada");
    }

    #[test]
    fn test_user_serialization_hides_hash() {
        let user = User {
            id: 3,
            username: "alice".to_string(),
            password_hash: "$argon2id$secret".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["username"], "alice");
        assert!(json.get("passwordHash").is_none());
    }

    #[test]
    fn test_credentials_accept_legacy_names() {
        let creds: Credentials =
            serde_json::from_str(r#"{"userName": "alice", "pwd": "pw"}"#).unwrap();
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.password, "pw");
        assert!(!format!("{:?}", creds).contains("pw\""));
    }

    #[test]
    fn test_employee_uses_camel_case() {
        let employee: NewEmployee =
            serde_json::from_str(r#"{"name": "Grace", "departmentId": 4}"#).unwrap();
        assert_eq!(employee.department_id, Some(4));
        assert!(employee.email.is_none());
    }
}
