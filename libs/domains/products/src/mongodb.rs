//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductFilter, SortOrder};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Product>("products");
        Self { collection }
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Initialize indexes for optimal query performance
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = vec![
            // Unique slug index
            IndexModel::builder()
                .keys(doc! { "slug": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name("idx_slug_unique".to_string())
                        .build(),
                )
                .build(),
            // Name lookup (creation-time uniqueness check)
            IndexModel::builder()
                .keys(doc! { "name": 1 })
                .options(IndexOptions::builder().name("idx_name".to_string()).build())
                .build(),
            // Text search over name and descriptions
            IndexModel::builder()
                .keys(doc! {
                    "name": "text",
                    "description.short": "text",
                    "description.long": "text"
                })
                .options(
                    IndexOptions::builder()
                        .name("idx_text_search".to_string())
                        .build(),
                )
                .build(),
            // Price range queries
            IndexModel::builder()
                .keys(doc! { "price.current": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_price_current".to_string())
                        .build(),
                )
                .build(),
            // Listing filters
            IndexModel::builder()
                .keys(doc! { "metadata.is_published": 1, "metadata.is_deleted": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_visibility".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "inventory.status": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_inventory_status".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    /// Build a MongoDB filter document from ProductFilter.
    ///
    /// Soft-deleted products are always excluded here; direct-by-id fetches
    /// intentionally bypass this filter.
    fn build_filter(filter: &ProductFilter) -> mongodb::bson::Document {
        let mut doc = doc! { "metadata.is_deleted": false };

        if let Some(ref status) = filter.status {
            doc.insert("inventory.status", status.to_string());
        }

        if let Some(is_published) = filter.is_published {
            doc.insert("metadata.is_published", is_published);
        }

        if let Some(is_featured) = filter.is_featured {
            doc.insert("metadata.is_featured", is_featured);
        }

        // Inclusive price range on the current price
        if filter.min_price.is_some() || filter.max_price.is_some() {
            let mut price_filter = doc! {};
            if let Some(min) = filter.min_price {
                price_filter.insert("$gte", min);
            }
            if let Some(max) = filter.max_price {
                price_filter.insert("$lte", max);
            }
            doc.insert("price.current", price_filter);
        }

        if let Some(ref search) = filter.search {
            doc.insert("$text", doc! { "$search": search });
        }

        doc
    }

    /// Build the sort document from the requested field and direction.
    fn build_sort(filter: &ProductFilter) -> mongodb::bson::Document {
        let direction: i32 = match filter.order {
            SortOrder::Asc => 1,
            SortOrder::Desc => -1,
        };
        let mut sort = mongodb::bson::Document::new();
        sort.insert(filter.sort.as_str(), direction);
        sort
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, product), fields(product_name = %product.name))]
    async fn insert(&self, product: Product) -> ProductResult<Product> {
        self.collection.insert_one(&product).await?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let product = self.collection.find_one(filter).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        let mongo_filter = Self::build_filter(&filter);

        let options = mongodb::options::FindOptions::builder()
            .limit(filter.limit)
            .skip(filter.skip())
            .sort(Self::build_sort(&filter))
            .build();

        let cursor = self
            .collection
            .find(mongo_filter)
            .with_options(options)
            .await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: ProductFilter) -> ProductResult<u64> {
        let mongo_filter = Self::build_filter(&filter);
        let count = self.collection.count_documents(mongo_filter).await?;
        Ok(count)
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn save(&self, product: Product) -> ProductResult<Product> {
        let filter = doc! { "_id": to_bson(&product.id).unwrap_or(Bson::Null) };
        let result = self.collection.replace_one(filter, &product).await?;

        if result.matched_count == 0 {
            return Err(ProductError::NotFound);
        }

        tracing::info!(product_id = %product.id, "Product saved successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn exists_active_by_name(&self, name: &str) -> ProductResult<bool> {
        let filter = doc! { "name": name, "metadata.is_deleted": false };
        let count = self.collection.count_documents(filter).await?;
        Ok(count > 0)
    }
}
