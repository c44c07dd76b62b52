use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    entity,
    error::ProductResult,
    models::{Product, ProductInput},
    repository::ProductRepository,
};

pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let models = self.base.find_all().await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_name_containing(&self, fragment: &str) -> ProductResult<Vec<Product>> {
        // LIKE '%fragment%'; case sensitivity is the store's
        let models = entity::Entity::find()
            .filter(entity::Column::Name.contains(fragment))
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn save(&self, input: ProductInput) -> ProductResult<Product> {
        let is_update = input.id.is_some();
        let active_model: entity::ActiveModel = input.into();

        let model = if is_update {
            self.base.update(active_model).await?
        } else {
            self.base.insert(active_model).await?
        };

        tracing::info!(product_id = %model.id, "Saved product");
        Ok(model.into())
    }

    async fn delete(&self, product: &Product) -> ProductResult<()> {
        self.delete_by_id(product.id).await
    }

    async fn delete_by_id(&self, id: i32) -> ProductResult<()> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(())
    }
}
