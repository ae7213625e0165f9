use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

pub const DEFAULT_CURRENCY: &str = "NGN";
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Inventory status
///
/// `InStock`/`OutOfStock` are derived from the quantity on every save;
/// `Expired`/`Damaged`/`Returned` are manual override states that the
/// quantity rule never reverts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InventoryStatus {
    InStock,
    #[default]
    OutOfStock,
    Expired,
    Damaged,
    Returned,
}

impl InventoryStatus {
    /// Whether this status was set through an explicit override path
    /// rather than derived from the quantity.
    pub fn is_manual_override(self) -> bool {
        matches!(
            self,
            InventoryStatus::Expired | InventoryStatus::Damaged | InventoryStatus::Returned
        )
    }
}

/// Discount kind
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DiscountKind {
    Percentage,
    Fixed,
}

/// Discount descriptor attached to a product's price.
///
/// Stored verbatim; `price.current` is recomputed when the discount is set
/// and never re-derived afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Discount {
    pub kind: DiscountKind,
    pub value: f64,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Product description
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Description {
    /// Short description (max 300 chars)
    pub short: String,
    /// Long description
    #[serde(default)]
    pub long: String,
}

/// Product price sub-document
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Price {
    /// Base (undiscounted) price
    pub base: f64,
    /// Current selling price
    pub current: f64,
    /// ISO currency code
    pub currency: String,
    /// Active discount descriptor, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
}

/// Product inventory sub-document
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Inventory {
    pub quantity: i64,
    pub low_stock_threshold: i64,
    pub status: InventoryStatus,
}

/// Product lifecycle/visibility flags
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Metadata {
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default = "default_true")]
    pub show_in_search: bool,
    #[serde(default)]
    pub is_featured: bool,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            is_published: false,
            is_deleted: false,
            show_in_search: true,
            is_featured: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Product entity - represents a product stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Product name (unique among non-deleted products at creation time)
    pub name: String,
    /// URL slug, derived from the name at creation, immutable
    pub slug: String,
    pub description: Description,
    pub price: Price,
    pub inventory: Inventory,
    pub metadata: Metadata,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Derive a slug from a product name: lower-case, every character outside
/// `[a-zA-Z0-9]` replaced with `-`.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

/// DTO for the description of a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateDescription {
    #[validate(length(max = 300))]
    pub short: String,
    #[serde(default)]
    pub long: String,
}

/// DTO for the price of a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePrice {
    #[validate(range(min = 0.0))]
    pub base: f64,
    /// Defaults to `base` when omitted
    #[validate(range(min = 0.0))]
    pub current: Option<f64>,
    /// Defaults to "NGN" when omitted
    pub currency: Option<String>,
}

/// DTO for the inventory of a new product
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateInventory {
    /// Defaults to 0 when omitted
    #[validate(range(min = 0))]
    pub quantity: Option<i64>,
    /// Defaults to 5 when omitted
    pub low_stock_threshold: Option<i64>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 2))]
    pub name: String,
    #[validate(nested)]
    pub description: CreateDescription,
    #[validate(nested)]
    pub price: CreatePrice,
    #[serde(default)]
    #[validate(nested)]
    pub inventory: CreateInventory,
    pub metadata: Option<Metadata>,
}

/// DTO for a partial price update.
///
/// Provided fields overwrite; a caller-supplied `current` wins even while a
/// discount is active, which can desynchronize `current` from the discount
/// rule. Known behavior, not silently corrected.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdatePriceRequest {
    #[validate(range(min = 0.0))]
    pub base: Option<f64>,
    #[validate(range(min = 0.0))]
    pub current: Option<f64>,
    pub currency: Option<String>,
}

/// DTO for setting a discount
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SetDiscountRequest {
    pub kind: DiscountKind,
    #[validate(range(min = 0.0))]
    pub value: f64,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// DTO for an inventory update.
///
/// The product id travels in the body (route: `PATCH /products/update-inventory`).
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateInventoryRequest {
    pub id: Option<Uuid>,
    /// Zero is a valid quantity; presence is what matters
    #[validate(range(min = 0))]
    pub quantity: Option<i64>,
    /// Only applied when non-zero (a zero threshold cannot be set here)
    pub low_stock_threshold: Option<i64>,
    /// Explicit override path for the manual states
    pub status: Option<InventoryStatus>,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, Display, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Query filters for listing products.
///
/// Soft-deleted products are always excluded from listings.
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct ProductFilter {
    /// Filter by inventory status
    pub status: Option<InventoryStatus>,
    /// Filter by published flag
    pub is_published: Option<bool>,
    /// Filter by featured flag
    pub is_featured: Option<bool>,
    /// Minimum current price (inclusive)
    pub min_price: Option<f64>,
    /// Maximum current price (inclusive)
    pub max_price: Option<f64>,
    /// Full-text search over name and descriptions
    pub search: Option<String>,
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: u64,
    /// Page size
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Sort field
    #[serde(default = "default_sort")]
    pub sort: String,
    /// Sort direction
    #[serde(default)]
    pub order: SortOrder,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            status: None,
            is_published: None,
            is_featured: None,
            min_price: None,
            max_price: None,
            search: None,
            page: default_page(),
            limit: default_limit(),
            sort: default_sort(),
            order: SortOrder::default(),
        }
    }
}

impl ProductFilter {
    /// Number of documents to skip for the requested page.
    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1) * self.limit.max(0) as u64
    }
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> i64 {
    10
}

fn default_sort() -> String {
    "created_at".to_string()
}

/// One page of products plus the total over the filtered set
/// (independent of pagination).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
}

impl Product {
    /// Build a new product from the creation DTO, filling defaults and
    /// deriving slug and stock status.
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        let slug = slugify(&input.name);
        let base = input.price.base;

        let mut product = Self {
            id: Uuid::now_v7(),
            name: input.name,
            slug,
            description: Description {
                short: input.description.short,
                long: input.description.long,
            },
            price: Price {
                base,
                current: input.price.current.unwrap_or(base),
                currency: input
                    .price
                    .currency
                    .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
                discount: None,
            },
            inventory: Inventory {
                quantity: input.inventory.quantity.unwrap_or(0),
                low_stock_threshold: input
                    .inventory
                    .low_stock_threshold
                    .unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD),
                status: InventoryStatus::OutOfStock,
            },
            metadata: input.metadata.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        product.apply_stock_rule();
        product
    }

    /// Re-derive the stock status from the quantity.
    ///
    /// Invariant: status is `in_stock` iff quantity > 0, unless a manual
    /// override state (expired/damaged/returned) is set.
    pub fn apply_stock_rule(&mut self) {
        if self.inventory.status.is_manual_override() {
            return;
        }
        self.inventory.status = if self.inventory.quantity > 0 {
            InventoryStatus::InStock
        } else {
            InventoryStatus::OutOfStock
        };
    }

    /// Attach a discount descriptor and recompute the current price.
    ///
    /// `fixed` discounts are not floored at zero.
    pub fn set_discount(&mut self, input: SetDiscountRequest) {
        self.price.current = match input.kind {
            DiscountKind::Percentage => self.price.base * (1.0 - input.value / 100.0),
            DiscountKind::Fixed => self.price.base - input.value,
        };
        self.price.discount = Some(Discount {
            kind: input.kind,
            value: input.value,
            start_date: input.start_date,
            end_date: input.end_date,
        });
        self.apply_stock_rule();
        self.updated_at = Utc::now();
    }

    /// Apply a partial price update. Provided fields overwrite; the discount
    /// rule is NOT re-applied.
    pub fn apply_price_update(&mut self, input: UpdatePriceRequest) {
        if let Some(base) = input.base {
            self.price.base = base;
        }
        if let Some(current) = input.current {
            self.price.current = current;
        }
        if let Some(currency) = input.currency {
            self.price.currency = currency;
        }
        self.apply_stock_rule();
        self.updated_at = Utc::now();
    }

    /// Apply an inventory update, then re-derive the stock status.
    ///
    /// `quantity` respects "is provided" (zero is applied); the threshold
    /// respects "is truthy" (zero is ignored).
    pub fn apply_inventory_update(&mut self, input: &UpdateInventoryRequest) {
        if let Some(quantity) = input.quantity {
            self.inventory.quantity = quantity;
        }
        if let Some(threshold) = input.low_stock_threshold {
            if threshold != 0 {
                self.inventory.low_stock_threshold = threshold;
            }
        }
        if let Some(status) = input.status {
            self.inventory.status = status;
        }
        self.apply_stock_rule();
        self.updated_at = Utc::now();
    }

    /// Soft delete: tombstone the product and force it out of publication
    /// and search in the same mutation.
    pub fn mark_deleted(&mut self) {
        self.metadata.is_deleted = true;
        self.metadata.is_published = false;
        self.metadata.show_in_search = false;
        self.updated_at = Utc::now();
    }
}
