//! Product store behavior against an in-memory database.

use storefront_core::{NewProduct, ProductPatch};
use storefront_db::{
    Database, DbConfig, DbError, EntityStore, ProductNumericField, ProductRepository,
    ProductTextField, SearchableStore,
};

async fn repo() -> ProductRepository {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    db.products()
}

fn product(title: &str, price: f64, brand: Option<&str>, category: Option<&str>) -> NewProduct {
    NewProduct {
        title: title.to_string(),
        price,
        brand: brand.map(str::to_string),
        category: category.map(str::to_string),
    }
}

#[tokio::test]
async fn test_create_then_get_round_trips() {
    let repo = repo().await;

    let created = repo
        .create(product("Red Hat", 15.0, Some("Acme"), Some("Clothing")))
        .await
        .unwrap();
    let fetched = repo.get_by_id(created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.title, "Red Hat");
    assert_eq!(fetched.price, 15.0);
    assert_eq!(fetched.brand.as_deref(), Some("Acme"));
    assert_eq!(fetched.category.as_deref(), Some("Clothing"));
}

#[tokio::test]
async fn test_create_assigns_distinct_ids() {
    let repo = repo().await;

    let a = repo.create(product("A", 1.0, None, None)).await.unwrap();
    let b = repo.create(product("B", 2.0, None, None)).await.unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_list_empty_and_ordered_by_id() {
    let repo = repo().await;
    assert!(repo.list().await.unwrap().is_empty());

    let first = repo.create(product("Zebra", 1.0, None, None)).await.unwrap();
    let second = repo.create(product("Apple", 2.0, None, None)).await.unwrap();

    let ids: Vec<_> = repo.list().await.unwrap().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn test_absent_id_is_not_found() {
    let repo = repo().await;

    assert!(repo.find_by_id(999).await.unwrap().is_none());
    assert!(matches!(
        repo.get_by_id(999).await,
        Err(DbError::NotFound { .. })
    ));
    assert!(matches!(
        repo.update(999, ProductPatch::default()).await,
        Err(DbError::NotFound { .. })
    ));
    assert!(matches!(
        repo.delete_by_id(999).await,
        Err(DbError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let repo = repo().await;
    let created = repo.create(product("Mug", 8.0, None, None)).await.unwrap();

    repo.delete_by_id(created.id).await.unwrap();

    assert!(repo.get_by_id(created.id).await.unwrap_err().is_not_found());
    assert!(repo.delete_by_id(created.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_update_preserves_id_and_omitted_fields() {
    let repo = repo().await;
    let created = repo
        .create(product("Red Hat", 15.0, Some("Acme"), Some("Clothing")))
        .await
        .unwrap();

    let updated = repo
        .update(
            created.id,
            ProductPatch {
                price: Some(18.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.price, 18.0);
    assert_eq!(updated.title, "Red Hat");
    assert_eq!(updated.brand.as_deref(), Some("Acme"));
    assert_eq!(updated.category.as_deref(), Some("Clothing"));

    // Persisted, not just returned
    assert_eq!(repo.get_by_id(created.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_title_search_is_case_insensitive_substring() {
    let repo = repo().await;
    repo.create(product("Blue Shirt", 12.5, None, None)).await.unwrap();
    repo.create(product("SHIRTS", 30.0, None, None)).await.unwrap();
    repo.create(product("Pants", 40.0, None, None)).await.unwrap();

    let titles: Vec<_> = repo
        .search_text_contains(ProductTextField::Title, "shirt")
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();

    assert_eq!(titles, vec!["Blue Shirt", "SHIRTS"]);
}

#[tokio::test]
async fn test_search_folds_non_ascii_case() {
    let repo = repo().await;
    repo.create(product("ÉCHARPE Rouge", 25.0, None, Some("Accessoires")))
        .await
        .unwrap();
    repo.create(product("Über Shirt", 19.0, None, Some("ÉTÉ")))
        .await
        .unwrap();
    repo.create(product("Plain Tee", 9.0, None, Some("été")))
        .await
        .unwrap();

    let echarpe = repo
        .search_text_contains(ProductTextField::Title, "écharpe")
        .await
        .unwrap();
    assert_eq!(echarpe.len(), 1);
    assert_eq!(echarpe[0].title, "ÉCHARPE Rouge");

    let uber = repo
        .search_text_contains(ProductTextField::Title, "ÜBER")
        .await
        .unwrap();
    assert_eq!(uber.len(), 1);
    assert_eq!(uber[0].title, "Über Shirt");

    let summer: Vec<_> = repo
        .search_by_category_ordered("Été")
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(summer, vec!["Plain Tee", "Über Shirt"]);
}

#[tokio::test]
async fn test_null_column_never_matches() {
    let repo = repo().await;
    repo.create(product("No Brand", 5.0, None, None)).await.unwrap();
    repo.create(product("Branded", 5.0, Some("Acme"), None)).await.unwrap();

    // Empty term matches every non-null value
    let all_branded = repo
        .search_text_contains(ProductTextField::Brand, "")
        .await
        .unwrap();
    assert_eq!(all_branded.len(), 1);
    assert_eq!(all_branded[0].title, "Branded");

    let none = repo
        .search_text_contains(ProductTextField::Category, "")
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_price_range_is_inclusive() {
    let repo = repo().await;
    for price in [9.99, 10.0, 15.0, 20.0, 20.01] {
        repo.create(product(&format!("P{}", price), price, None, None))
            .await
            .unwrap();
    }

    let prices: Vec<_> = repo
        .search_numeric_range(ProductNumericField::Price, 10.0, 20.0)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.price)
        .collect();

    assert_eq!(prices, vec![10.0, 15.0, 20.0]);
}

#[tokio::test]
async fn test_inverted_price_range_is_empty() {
    let repo = repo().await;
    repo.create(product("Mug", 15.0, None, None)).await.unwrap();

    let results = repo
        .search_numeric_range(ProductNumericField::Price, 20.0, 10.0)
        .await
        .unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_category_search_orders_by_title() {
    let repo = repo().await;
    repo.create(product("Scarf", 20.0, None, Some("Winter Clothing")))
        .await
        .unwrap();
    repo.create(product("Mug", 8.0, None, Some("Kitchen"))).await.unwrap();
    repo.create(product("Beanie", 12.0, None, Some("clothing")))
        .await
        .unwrap();

    let titles: Vec<_> = repo
        .search_by_category_ordered("CLOTHING")
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();

    assert_eq!(titles, vec!["Beanie", "Scarf"]);
}

#[tokio::test]
async fn test_list_ordered_by_title() {
    let repo = repo().await;
    repo.create(product("Charlie", 1.0, None, None)).await.unwrap();
    repo.create(product("Alpha", 1.0, None, None)).await.unwrap();
    repo.create(product("Bravo", 1.0, None, None)).await.unwrap();

    let titles: Vec<_> = repo
        .list_ordered_by_title()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();

    assert_eq!(titles, vec!["Alpha", "Bravo", "Charlie"]);
}

#[tokio::test]
async fn test_brand_in_price_range_orders_by_price() {
    let repo = repo().await;
    repo.create(product("Jacket", 80.0, Some("Acme"), None)).await.unwrap();
    repo.create(product("Hat", 15.0, Some("Acme"), None)).await.unwrap();
    repo.create(product("Boots", 200.0, Some("Acme"), None)).await.unwrap();
    repo.create(product("Other Hat", 16.0, Some("Globex"), None))
        .await
        .unwrap();

    let titles: Vec<_> = repo
        .search_by_brand_in_price_range("Acme", 10.0, 100.0)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();

    assert_eq!(titles, vec!["Hat", "Jacket"]);
}
