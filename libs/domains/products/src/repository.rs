use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{Product, ProductInput};

/// Repository trait for Product persistence
///
/// The six store operations the service consumes. Implementations exist
/// for PostgreSQL and for an in-memory map.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, in store-defined order
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// Look up a single product by id
    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// All products whose name contains the given fragment
    async fn find_by_name_containing(&self, fragment: &str) -> ProductResult<Vec<Product>>;

    /// Insert when `input.id` is unset (the store assigns an id), update
    /// that row otherwise. Returns the persisted product.
    async fn save(&self, input: ProductInput) -> ProductResult<Product>;

    /// Remove by full identity (effectively by id)
    async fn delete(&self, product: &Product) -> ProductResult<()>;

    /// Remove by id. Does not fail when the row is already gone.
    async fn delete_by_id(&self, id: i32) -> ProductResult<()>;
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Mirrors the store's id contract: inserts take ids from a monotonic
/// counter, never reusing one within the lifetime of the repository.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<i32, Product>>>,
    last_id: Arc<AtomicI32>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products.values().cloned().collect();
        result.sort_by_key(|p| p.id);
        Ok(result)
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn find_by_name_containing(&self, fragment: &str) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products
            .values()
            .filter(|p| p.name.contains(fragment))
            .cloned()
            .collect();
        result.sort_by_key(|p| p.id);
        Ok(result)
    }

    async fn save(&self, input: ProductInput) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let id = match input.id {
            Some(id) => id,
            None => self.last_id.fetch_add(1, Ordering::SeqCst) + 1,
        };

        let product = Product {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
        };
        products.insert(id, product.clone());

        tracing::info!(product_id = %id, "Saved product");
        Ok(product)
    }

    async fn delete(&self, product: &Product) -> ProductResult<()> {
        self.delete_by_id(product.id).await
    }

    async fn delete_by_id(&self, id: i32) -> ProductResult<()> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_some() {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, price: f64) -> ProductInput {
        ProductInput {
            id: None,
            name: name.to_string(),
            description: String::new(),
            price,
        }
    }

    #[tokio::test]
    async fn test_save_assigns_monotonic_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo.save(input("first", 1.0)).await.unwrap();
        let second = repo.save(input("second", 2.0)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_save_with_id_updates_in_place() {
        let repo = InMemoryProductRepository::new();

        let created = repo.save(input("before", 1.0)).await.unwrap();
        let updated = repo
            .save(ProductInput {
                id: Some(created.id),
                name: "after".to_string(),
                description: "changed".to_string(),
                price: 3.5,
            })
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
        let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "after");
        assert_eq!(fetched.price, 3.5);
    }

    #[tokio::test]
    async fn test_find_by_name_containing_matches_substring() {
        let repo = InMemoryProductRepository::new();

        repo.save(input("Blue Widget", 1.0)).await.unwrap();
        repo.save(input("Red Widget", 2.0)).await.unwrap();
        repo.save(input("Gadget", 3.0)).await.unwrap();

        let widgets = repo.find_by_name_containing("Widget").await.unwrap();
        assert_eq!(widgets.len(), 2);

        let middle = repo.find_by_name_containing("e W").await.unwrap();
        assert_eq!(middle.len(), 2);

        let none = repo.find_by_name_containing("Sprocket").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_delete_by_id_is_idempotent() {
        let repo = InMemoryProductRepository::new();

        let created = repo.save(input("short-lived", 1.0)).await.unwrap();
        repo.delete_by_id(created.id).await.unwrap();
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());

        // A second delete of the same id is not an error
        repo.delete_by_id(created.id).await.unwrap();
    }
}
