use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{Product, ProductFilter};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Every mutating engine operation is a single-document read-modify-write
/// built from these primitives; there are no cross-document transactions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a newly built product
    async fn insert(&self, product: Product) -> ProductResult<Product>;

    /// Get a product by ID (soft-deleted products included)
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// List products matching a filter (soft-deleted always excluded)
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Count products matching a filter, ignoring pagination
    async fn count(&self, filter: ProductFilter) -> ProductResult<u64>;

    /// Persist a mutated product (full-document rewrite)
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// Check whether a non-deleted product with this name exists
    async fn exists_active_by_name(&self, name: &str) -> ProductResult<bool>;
}
