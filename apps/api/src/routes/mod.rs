//! # Route Table
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Route Table                                   │
//! │                                                                         │
//! │  /products      crud + /search /search-by-category /price-range        │
//! │                        /sorted /brand-price-range                      │
//! │  /departments   crud + /:id/employees                                  │
//! │  /employees     crud                                                   │
//! │  /register /login /users                                               │
//! │  /health /hello /greet /courses                                        │
//! │  /secured       (bearer token required)                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod crud;
pub mod departments;
pub mod employees;
pub mod products;
pub mod system;
pub mod users;
