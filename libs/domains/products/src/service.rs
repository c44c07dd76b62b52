//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;

/// Product service orchestrating repository calls.
///
/// The operations are deliberately thin: the single piece of business
/// logic is translating an absent row into the domain's not-found
/// condition in [`ProductService::get_by_id`].
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All products, unfiltered and unsorted; order is store-defined.
    #[instrument(skip(self))]
    pub async fn list(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    /// Fetch one product; a missing id is the not-found condition.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// All products whose name contains the fragment.
    #[instrument(skip(self))]
    pub async fn search_by_name(&self, fragment: &str) -> ProductResult<Vec<Product>> {
        self.repository.find_by_name_containing(fragment).await
    }

    /// Persist a new product. Any caller-supplied id is discarded so the
    /// store assigns one.
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create(&self, mut input: ProductInput) -> ProductResult<Product> {
        input.id = None;
        self.repository.save(input).await
    }

    /// Persist under the given id, regardless of any id in the body.
    /// Whether the id must already exist is the caller's concern.
    #[instrument(skip(self, input))]
    pub async fn update(&self, mut input: ProductInput, id: i32) -> ProductResult<Product> {
        input.id = Some(id);
        self.repository.save(input).await
    }

    /// Remove by full identity.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn delete(&self, product: &Product) -> ProductResult<()> {
        self.repository.delete(product).await
    }

    /// Remove by id. The delegate does not fail for a missing row; callers
    /// that need a not-found signal look the product up first.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i32) -> ProductResult<()> {
        self.repository.delete_by_id(id).await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryProductRepository;
    use axum_helpers::AppError;

    fn service() -> ProductService<InMemoryProductRepository> {
        ProductService::new(InMemoryProductRepository::new())
    }

    fn input(name: &str, price: f64) -> ProductInput {
        ProductInput {
            id: None,
            name: name.to_string(),
            description: "d".to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn test_create_ignores_caller_id() {
        let service = service();

        let mut body = input("widget", 9.99);
        body.id = Some(999);

        let created = service.create(body).await.unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_get_by_id_translates_missing_row() {
        let service = service();

        let err = service.get_by_id(7).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(7)));
    }

    #[tokio::test]
    async fn test_not_found_client_message_carries_id() {
        let app_error: AppError = ProductError::NotFound(1).into();

        assert!(matches!(
            &app_error,
            AppError::NotFound(msg)
                if msg == "Product with id: 1 not found, maybe you have to do a post before"
        ));
    }

    #[tokio::test]
    async fn test_update_forces_path_id_over_body_id() {
        let service = service();

        let created = service.create(input("original", 1.0)).await.unwrap();

        let mut body = input("renamed", 2.0);
        body.id = Some(12345);

        let updated = service.update(body, created.id).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "renamed");

        // Nothing was written under the body id
        let err = service.get_by_id(12345).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(12345)));
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_the_target() {
        let service = service();

        let keep = service.create(input("keep", 1.0)).await.unwrap();
        let drop = service.create(input("drop", 2.0)).await.unwrap();

        service.delete(&drop).await.unwrap();

        let remaining = service.list().await.unwrap();
        assert_eq!(remaining, vec![keep]);
    }
}
