//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD through [`EntityStore`]
//! - Substring and range search through [`SearchableStore`]
//! - Category listing ordered by title
//! - Brand + price window ordered by price
//!
//! ## Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Case-Insensitive Substring Search                    │
//! │                                                                         │
//! │  searchTerm: "shirt"                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  title.to_lowercase().contains("shirt")                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ products                                │                           │
//! │  │                                         │                           │
//! │  │ 1 | Blue Shirt | 12.50                  │ ← MATCH                   │
//! │  │ 2 | SHIRTS     | 30.00                  │ ← MATCH                   │
//! │  │ 3 | Pants      | 40.00                  │                           │
//! │  └─────────────────────────────────────────┘                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use super::{begin_write, rows_containing, Column, EntityStore, SearchableStore};
use crate::error::{DbError, DbResult};
use storefront_core::{EntityId, NewProduct, Product, ProductPatch};

/// Text columns of `products` that support substring search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductTextField {
    Title,
    Brand,
    Category,
}

impl Column for ProductTextField {
    fn column(&self) -> &'static str {
        match self {
            ProductTextField::Title => "title",
            ProductTextField::Brand => "brand",
            ProductTextField::Category => "category",
        }
    }
}

/// Numeric columns of `products` that support range search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductNumericField {
    Price,
}

impl Column for ProductNumericField {
    fn column(&self) -> &'static str {
        match self {
            ProductNumericField::Price => "price",
        }
    }
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let shirts = repo.search_text_contains(ProductTextField::Title, "shirt").await?;
/// let product = repo.get_by_id(1).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Products whose category contains `term` (case-insensitive), ordered by
    /// title ascending.
    pub async fn search_by_category_ordered(&self, term: &str) -> DbResult<Vec<Product>> {
        debug!(term = %term, "Searching products by category");

        let rows = sqlx::query(
            r#"
            SELECT id, title, price, brand, category
            FROM products
            WHERE category IS NOT NULL
            ORDER BY title ASC, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        let products: Vec<Product> = rows_containing(rows, "category", term)?;

        debug!(count = products.len(), "Category search returned products");
        Ok(products)
    }

    /// Every product, ordered by title ascending.
    pub async fn list_ordered_by_title(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, title, price, brand, category
            FROM products
            ORDER BY title ASC, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Products of exactly `brand` priced within `[min, max]`, cheapest first.
    pub async fn search_by_brand_in_price_range(
        &self,
        brand: &str,
        min: f64,
        max: f64,
    ) -> DbResult<Vec<Product>> {
        debug!(brand = %brand, min, max, "Searching products by brand and price");

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, title, price, brand, category
            FROM products
            WHERE brand = ?1 AND price BETWEEN ?2 AND ?3
            ORDER BY price ASC, id
            "#,
        )
        .bind(brand)
        .bind(min)
        .bind(max)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }
}

#[async_trait]
impl EntityStore for ProductRepository {
    type Entity = Product;
    type New = NewProduct;
    type Patch = ProductPatch;

    const ENTITY_NAME: &'static str = "Product";
    const TABLE: &'static str = "products";

    fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn create(&self, new: NewProduct) -> DbResult<Product> {
        let id = sqlx::query(
            r#"
            INSERT INTO products (title, price, brand, category)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&new.title)
        .bind(new.price)
        .bind(&new.brand)
        .bind(&new.category)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        debug!(id, title = %new.title, "Product created");

        Ok(Product {
            id,
            title: new.title,
            price: new.price,
            brand: new.brand,
            category: new.category,
        })
    }

    async fn update(&self, id: EntityId, patch: ProductPatch) -> DbResult<Product> {
        let mut tx = begin_write(&self.pool).await?;

        let mut product = sqlx::query_as::<_, Product>(
            "SELECT id, title, price, brand, category FROM products WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::not_found(Self::ENTITY_NAME, id))?;

        product.apply_patch(patch);

        sqlx::query(
            r#"
            UPDATE products
            SET title = ?1, price = ?2, brand = ?3, category = ?4
            WHERE id = ?5
            "#,
        )
        .bind(&product.title)
        .bind(product.price)
        .bind(&product.brand)
        .bind(&product.category)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(id, "Product updated");
        Ok(product)
    }
}

impl SearchableStore for ProductRepository {
    type TextField = ProductTextField;
    type NumericField = ProductNumericField;
}
