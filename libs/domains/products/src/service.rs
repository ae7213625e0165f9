//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{
    CreateProduct, Product, ProductFilter, SetDiscountRequest, UpdateInventoryRequest,
    UpdatePriceRequest,
};
use crate::repository::ProductRepository;

/// Product service owning all reads/writes of a product's commercial and
/// stock state.
///
/// Guarantees that `price.current` and `inventory.status` are consistent
/// with their source fields after any mutating operation. Every mutation is
/// a single-document read-modify-write; name uniqueness relies on a
/// check-then-insert sequence, so concurrent creates with identical names
/// can race (accepted, see DESIGN.md).
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

    /// Create a new product.
    ///
    /// Fails with a conflict when a non-deleted product already uses the
    /// name; soft-deleted products do not block reuse of their name.
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input.validate()?;

        if self.repository.exists_active_by_name(&input.name).await? {
            return Err(ProductError::DuplicateName);
        }

        let product = Product::new(input);
        self.repository.insert(product).await
    }

    /// Get a product by ID.
    ///
    /// Soft-deleted products are still retrievable here; only listings
    /// exclude them.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound)
    }

    /// List products with filters and pagination.
    ///
    /// Returns the page of products plus the total over the filtered set,
    /// independent of pagination.
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> ProductResult<(Vec<Product>, u64)> {
        let total = self.repository.count(filter.clone()).await?;
        let products = self.repository.list(filter).await?;
        Ok((products, total))
    }

    /// Attach a discount to a product and recompute its current price.
    #[instrument(skip(self, input))]
    pub async fn set_discount(
        &self,
        id: Uuid,
        input: SetDiscountRequest,
    ) -> ProductResult<Product> {
        input.validate()?;

        let mut product = self.get_product(id).await?;
        product.set_discount(input);

        self.repository.save(product).await
    }

    /// Partially update a product's price fields.
    #[instrument(skip(self, input))]
    pub async fn update_price(
        &self,
        id: Uuid,
        input: UpdatePriceRequest,
    ) -> ProductResult<Product> {
        input.validate()?;

        let mut product = self.get_product(id).await?;
        product.apply_price_update(input);

        self.repository.save(product).await
    }

    /// Update a product's inventory. The product id is part of the request
    /// body; a missing id is rejected before any lookup.
    #[instrument(skip(self, input))]
    pub async fn update_inventory(&self, input: UpdateInventoryRequest) -> ProductResult<Product> {
        input.validate()?;

        let id = input.id.ok_or(ProductError::MissingId)?;

        let mut product = self.get_product(id).await?;
        product.apply_inventory_update(&input);

        self.repository.save(product).await
    }

    /// Soft delete a product.
    ///
    /// Deleting an already-deleted product is rejected, not a no-op.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<Product> {
        let mut product = self.get_product(id).await?;

        if product.metadata.is_deleted {
            return Err(ProductError::AlreadyDeleted);
        }

        product.mark_deleted();
        self.repository.save(product).await
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
    use crate::models::{
        CreateDescription, CreateInventory, CreatePrice, DiscountKind, InventoryStatus,
    };
    use crate::repository::MockProductRepository;

    fn create_input(name: &str) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            description: CreateDescription {
                short: "A product".to_string(),
                long: String::new(),
            },
            price: CreatePrice {
                base: 100.0,
                current: None,
                currency: None,
            },
            inventory: CreateInventory::default(),
            metadata: None,
        }
    }

    fn existing_product(name: &str) -> Product {
        Product::new(create_input(name))
    }

    #[tokio::test]
    async fn test_create_product_inserts_with_derived_slug() {
        let mut repo = MockProductRepository::new();
        repo.expect_exists_active_by_name()
            .withf(|name| name == "Blue Suede Shoes")
            .returning(|_| Ok(false));
        repo.expect_insert().returning(Ok);

        let service = ProductService::new(repo);
        let product = service
            .create_product(create_input("Blue Suede Shoes"))
            .await
            .unwrap();

        assert_eq!(product.slug, "blue-suede-shoes");
        assert_eq!(product.price.current, 100.0);
        assert_eq!(product.inventory.status, InventoryStatus::OutOfStock);
    }

    #[tokio::test]
    async fn test_create_product_duplicate_name_conflicts() {
        let mut repo = MockProductRepository::new();
        repo.expect_exists_active_by_name().returning(|_| Ok(true));

        let service = ProductService::new(repo);
        let result = service.create_product(create_input("Existing Product")).await;

        assert!(matches!(result, Err(ProductError::DuplicateName)));
    }

    // Uniqueness only considers non-deleted products: once the previous
    // holder is soft-deleted, the repository reports no active product and
    // creation succeeds.
    #[tokio::test]
    async fn test_create_product_allows_name_of_deleted_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_exists_active_by_name().returning(|_| Ok(false));
        repo.expect_insert().returning(Ok);

        let service = ProductService::new(repo);
        let result = service.create_product(create_input("Existing Product")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_product_invalid_input_rejected() {
        let repo = MockProductRepository::new();
        let service = ProductService::new(repo);

        let result = service.create_product(create_input("X")).await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ProductService::new(repo);
        let result = service.get_product(Uuid::now_v7()).await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_product_returns_soft_deleted() {
        let mut deleted = existing_product("Ghost");
        deleted.mark_deleted();
        let id = deleted.id;

        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(deleted.clone())));

        let service = ProductService::new(repo);
        let product = service.get_product(id).await.unwrap();

        assert!(product.metadata.is_deleted);
    }

    #[tokio::test]
    async fn test_list_products_returns_items_and_filtered_total() {
        let mut repo = MockProductRepository::new();
        repo.expect_count().returning(|_| Ok(1));
        repo.expect_list()
            .returning(|_| Ok(vec![existing_product("Only Match")]));

        let service = ProductService::new(repo);
        let (products, total) = service
            .list_products(ProductFilter {
                min_price: Some(100.0),
                max_price: Some(600.0),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn test_set_discount_percentage_recomputes_current() {
        let product = existing_product("Discounted");
        let id = product.id;

        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(product.clone())));
        repo.expect_save().returning(Ok);

        let service = ProductService::new(repo);
        let updated = service
            .set_discount(
                id,
                SetDiscountRequest {
                    kind: DiscountKind::Percentage,
                    value: 20.0,
                    start_date: None,
                    end_date: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.price.current, 80.0);
        assert!(updated.price.discount.is_some());
    }

    #[tokio::test]
    async fn test_set_discount_fixed_recomputes_current() {
        let product = existing_product("Discounted");
        let id = product.id;

        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(product.clone())));
        repo.expect_save().returning(Ok);

        let service = ProductService::new(repo);
        let updated = service
            .set_discount(
                id,
                SetDiscountRequest {
                    kind: DiscountKind::Fixed,
                    value: 30.0,
                    start_date: None,
                    end_date: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.price.current, 70.0);
    }

    #[tokio::test]
    async fn test_set_discount_missing_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ProductService::new(repo);
        let result = service
            .set_discount(
                Uuid::now_v7(),
                SetDiscountRequest {
                    kind: DiscountKind::Fixed,
                    value: 30.0,
                    start_date: None,
                    end_date: None,
                },
            )
            .await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_price_partial_overwrite() {
        let product = existing_product("Priced");
        let id = product.id;

        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(product.clone())));
        repo.expect_save().returning(Ok);

        let service = ProductService::new(repo);
        let updated = service
            .update_price(
                id,
                UpdatePriceRequest {
                    base: None,
                    current: Some(90.0),
                    currency: Some("USD".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.price.base, 100.0);
        assert_eq!(updated.price.current, 90.0);
        assert_eq!(updated.price.currency, "USD");
    }

    #[tokio::test]
    async fn test_update_inventory_requires_id() {
        let repo = MockProductRepository::new();
        let service = ProductService::new(repo);

        let result = service
            .update_inventory(UpdateInventoryRequest {
                id: None,
                quantity: Some(3),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(ProductError::MissingId)));
    }

    #[tokio::test]
    async fn test_update_inventory_rederives_status() {
        let product = existing_product("Restocked");
        let id = product.id;

        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(product.clone())));
        repo.expect_save().returning(Ok);

        let service = ProductService::new(repo);
        let updated = service
            .update_inventory(UpdateInventoryRequest {
                id: Some(id),
                quantity: Some(12),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.inventory.quantity, 12);
        assert_eq!(updated.inventory.status, InventoryStatus::InStock);
    }

    #[tokio::test]
    async fn test_delete_product_sets_tombstone_flags() {
        let mut input = create_input("Doomed");
        input.metadata = Some(crate::models::Metadata {
            is_published: true,
            ..Default::default()
        });
        let product = Product::new(input);
        let id = product.id;

        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(product.clone())));
        repo.expect_save().returning(Ok);

        let service = ProductService::new(repo);
        let deleted = service.delete_product(id).await.unwrap();

        assert!(deleted.metadata.is_deleted);
        assert!(!deleted.metadata.is_published);
        assert!(!deleted.metadata.show_in_search);
    }

    // Delete is explicitly NOT idempotent: the second call is rejected.
    #[tokio::test]
    async fn test_delete_product_twice_rejected() {
        let mut product = existing_product("Doomed");
        product.mark_deleted();
        let id = product.id;

        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(product.clone())));

        let service = ProductService::new(repo);
        let result = service.delete_product(id).await;

        assert!(matches!(result, Err(ProductError::AlreadyDeleted)));
    }
}
