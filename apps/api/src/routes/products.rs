//! `/products`: CRUD plus the product search endpoints.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use storefront_core::validation::{validate_price_bound, validate_search_term};
use storefront_core::Product;
use storefront_db::{ProductNumericField, ProductRepository, ProductTextField, SearchableStore};

use super::crud;
use crate::error::ApiResult;
use crate::extract::ApiQuery;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    crud::router::<ProductRepository>()
        .route("/search", get(search))
        .route("/search-by-category", get(search_by_category))
        .route("/price-range", get(price_range))
        .route("/sorted", get(sorted))
        .route("/brand-price-range", get(brand_price_range))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub search_term: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeParams {
    pub start_price: f64,
    pub end_price: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPriceParams {
    pub brand: String,
    pub min_price: f64,
    pub max_price: f64,
}

/// Case-insensitive title search.
async fn search(
    State(products): State<ProductRepository>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> ApiResult<Json<Vec<Product>>> {
    let term = validate_search_term(&params.search_term)?;
    let found = products
        .search_text_contains(ProductTextField::Title, &term)
        .await?;
    Ok(Json(found))
}

/// Case-insensitive category search, ordered by title.
async fn search_by_category(
    State(products): State<ProductRepository>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> ApiResult<Json<Vec<Product>>> {
    let term = validate_search_term(&params.search_term)?;
    Ok(Json(products.search_by_category_ordered(&term).await?))
}

/// Inclusive price window.
async fn price_range(
    State(products): State<ProductRepository>,
    ApiQuery(params): ApiQuery<PriceRangeParams>,
) -> ApiResult<Json<Vec<Product>>> {
    validate_price_bound("startPrice", params.start_price)?;
    validate_price_bound("endPrice", params.end_price)?;

    let found = products
        .search_numeric_range(ProductNumericField::Price, params.start_price, params.end_price)
        .await?;
    Ok(Json(found))
}

async fn sorted(State(products): State<ProductRepository>) -> ApiResult<Json<Vec<Product>>> {
    Ok(Json(products.list_ordered_by_title().await?))
}

/// Exact brand within a price window, cheapest first.
async fn brand_price_range(
    State(products): State<ProductRepository>,
    ApiQuery(params): ApiQuery<BrandPriceParams>,
) -> ApiResult<Json<Vec<Product>>> {
    validate_price_bound("minPrice", params.min_price)?;
    validate_price_bound("maxPrice", params.max_price)?;

    let found = products
        .search_by_brand_in_price_range(&params.brand, params.min_price, params.max_price)
        .await?;
    Ok(Json(found))
}
