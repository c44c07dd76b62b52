//! Integration tests for the products domain
//!
//! These tests exercise the PostgreSQL repository directly via
//! testcontainers, below the HTTP surface: id assignment, substring
//! search semantics, and delete behavior.

use domain_products::*;
use test_utils::{TestDatabase, TestDataBuilder};

fn input(name: String, price: f64) -> ProductInput {
    ProductInput {
        id: None,
        name,
        description: "integration".to_string(),
        price,
    }
}

#[tokio::test]
async fn test_store_assigns_sequential_ids() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("sequential_ids");

    let first = repo
        .save(input(builder.name("product", "first"), 1.0))
        .await
        .unwrap();
    let second = repo
        .save(input(builder.name("product", "second"), 2.0))
        .await
        .unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_save_with_id_updates_the_row() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let created = repo.save(input("before".to_string(), 1.0)).await.unwrap();

    let updated = repo
        .save(ProductInput {
            id: Some(created.id),
            name: "after".to_string(),
            description: "rewritten".to_string(),
            price: 4.25,
        })
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "after");

    // Still one row, carrying the new fields
    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].description, "rewritten");
    assert_eq!(all[0].price, 4.25);
}

#[tokio::test]
async fn test_find_by_name_containing_uses_substring_match() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    for name in ["alpha widget", "beta widget", "gamma gizmo"] {
        repo.save(input(name.to_string(), 1.0)).await.unwrap();
    }

    let widgets = repo.find_by_name_containing("widget").await.unwrap();
    assert_eq!(widgets.len(), 2);

    // A fragment spanning the middle of the name still matches
    let middle = repo.find_by_name_containing("a wid").await.unwrap();
    assert_eq!(middle.len(), 2);

    let none = repo.find_by_name_containing("delta").await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_delete_by_id_removes_row_and_tolerates_missing() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let created = repo.save(input("ephemeral".to_string(), 1.0)).await.unwrap();

    repo.delete_by_id(created.id).await.unwrap();
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());

    // Deleting an id that is already gone is not an error
    repo.delete_by_id(created.id).await.unwrap();
}

#[tokio::test]
async fn test_delete_by_identity_removes_only_that_product() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let keep = repo.save(input("keep".to_string(), 1.0)).await.unwrap();
    let drop = repo.save(input("drop".to_string(), 2.0)).await.unwrap();

    repo.delete(&drop).await.unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all, vec![keep]);
}
