//! # Validation Module
//!
//! Input validation for Storefront payloads.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractors (axum + serde)                               │
//! │  ├── Malformed JSON / wrong types → 400                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Route handlers                                               │
//! │  └── THIS MODULE: field rules (required, length, finite numbers)       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  ├── UNIQUE constraints (username)                                     │
//! │  └── Foreign key constraints (employee → department)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The repositories never call into this module: the store accepts whatever
//! it is given and validation stays a concern of the caller.
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_title, validate_price};
//!
//! assert!(validate_title("Red Hat").is_ok());
//! assert!(validate_price(-1.0).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{
    Credentials, DepartmentPatch, EmployeePatch, NewDepartment, NewEmployee, NewProduct,
    ProductPatch,
};
use crate::{MAX_NAME_LEN, MAX_SEARCH_TERM_LEN, MAX_USERNAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn validate_required_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a product title.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_title(title: &str) -> ValidationResult<()> {
    validate_required_text("title", title, MAX_NAME_LEN)
}

/// Validates a department or employee name.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    validate_required_text("name", name, MAX_NAME_LEN)
}

/// Validates a username.
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
/// - No whitespace
pub fn validate_username(username: &str) -> ValidationResult<()> {
    validate_required_text("username", username, MAX_USERNAME_LEN)?;

    if username.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "username".to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validates a plaintext password before hashing. Only emptiness is checked.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches every non-null value)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_term(term: &str) -> ValidationResult<String> {
    let term = term.trim();

    if term.chars().count() > MAX_SEARCH_TERM_LEN {
        return Err(ValidationError::TooLong {
            field: "searchTerm".to_string(),
            max: MAX_SEARCH_TERM_LEN,
        });
    }

    Ok(term.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be finite
/// - Must be non-negative; zero is allowed
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_price;
///
/// assert!(validate_price(10.99).is_ok());
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    validate_price_bound("price", price)?;

    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates one end of a price range query. Negative bounds are allowed,
/// non-finite ones are not.
pub fn validate_price_bound(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Payload Validators
// =============================================================================

/// Field rules for a request payload.
///
/// Implemented for every creation payload and patch so the HTTP layer can
/// validate bodies generically before handing them to a store.
pub trait Validate {
    fn validate(&self) -> ValidationResult<()>;
}

impl Validate for NewProduct {
    fn validate(&self) -> ValidationResult<()> {
        validate_title(&self.title)?;
        validate_price(self.price)
    }
}

impl Validate for ProductPatch {
    fn validate(&self) -> ValidationResult<()> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }
}

impl Validate for NewDepartment {
    fn validate(&self) -> ValidationResult<()> {
        validate_name(&self.name)
    }
}

impl Validate for DepartmentPatch {
    fn validate(&self) -> ValidationResult<()> {
        match &self.name {
            Some(name) => validate_name(name),
            None => Ok(()),
        }
    }
}

impl Validate for NewEmployee {
    fn validate(&self) -> ValidationResult<()> {
        validate_name(&self.name)
    }
}

impl Validate for EmployeePatch {
    fn validate(&self) -> ValidationResult<()> {
        match &self.name {
            Some(name) => validate_name(name),
            None => Ok(()),
        }
    }
}

impl Validate for Credentials {
    fn validate(&self) -> ValidationResult<()> {
        validate_username(&self.username)?;
        validate_password(&self.password)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Blue Shirt").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(19.99).is_ok());
        assert!(matches!(
            validate_price(-0.01),
            Err(ValidationError::Negative { .. })
        ));
        assert!(matches!(
            validate_price(f64::INFINITY),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username("al ice").is_err());
        assert!(validate_username(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_search_term_trims() {
        assert_eq!(validate_search_term("  shirt ").unwrap(), "shirt");
        assert_eq!(validate_search_term("").unwrap(), "");
        assert!(validate_search_term(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_new_product() {
        let product = NewProduct {
            title: "Red Hat".to_string(),
            price: 15.0,
            brand: None,
            category: Some("Clothing".to_string()),
        };
        assert!(product.validate().is_ok());

        let untitled = NewProduct {
            title: " ".to_string(),
            ..product
        };
        assert!(untitled.validate().is_err());
    }

    #[test]
    fn test_validate_product_patch() {
        assert!(ProductPatch::default().validate().is_ok());
        assert!(ProductPatch {
            title: Some(String::new()),
            ..Default::default()
        }
        .validate()
        .is_err());
        assert!(ProductPatch {
            price: Some(-5.0),
            ..Default::default()
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_validate_credentials() {
        let ok = Credentials {
            username: "alice".to_string(),
            password: "pw".to_string(),
        };
        assert!(ok.validate().is_ok());

        let empty_password = Credentials {
            username: "alice".to_string(),
            password: String::new(),
        };
        assert!(matches!(
            empty_password.validate(),
            Err(ValidationError::Required { .. })
        ));
    }
}
