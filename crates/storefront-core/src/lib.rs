//! # storefront-core: Domain Types for Storefront
//!
//! This crate holds the entities served by the Storefront API together with
//! their creation payloads, partial-update patches and validation rules.
//! It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 HTTP routes (apps/api, axum)                    │   │
//! │  │   /products  /departments  /employees  /register  /login        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │ validation│  │   error   │                  │   │
//! │  │   │  Product  │  │   rules   │  │ CoreError │                  │   │
//! │  │   │  Patches  │  │   checks  │  │           │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               storefront-db (Database Layer)                    │   │
//! │  │          SQLite queries, migrations, EntityStore impls          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities, creation payloads and patches
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation used at the HTTP boundary
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Product, ProductPatch};
//!
//! let mut hat = Product {
//!     id: 1,
//!     title: "Red Hat".to_string(),
//!     price: 15.0,
//!     brand: None,
//!     category: Some("Clothing".to_string()),
//! };
//!
//! hat.apply_patch(ProductPatch { price: Some(18.0), ..Default::default() });
//!
//! assert_eq!(hat.title, "Red Hat");
//! assert_eq!(hat.price, 18.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a search term accepted by the search endpoints.
pub const MAX_SEARCH_TERM_LEN: usize = 100;

/// Maximum length of titles and names.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length of a username.
pub const MAX_USERNAME_LEN: usize = 64;
