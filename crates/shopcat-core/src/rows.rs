use serde::{Deserialize, Serialize};

/// Output column names, in the order every CSV line is written.
///
/// Must stay in sync with the field order of [`FlatRow`]; rows are
/// serialized positionally.
pub const CSV_HEADERS: [&str; 21] = [
    "store_domain",
    "product_id",
    "title",
    "handle",
    "vendor",
    "product_type",
    "created_at",
    "updated_at",
    "published_at",
    "tags",
    "body_html",
    "variant_id",
    "variant_title",
    "sku",
    "price",
    "compare_at_price",
    "available",
    "variant_created_at",
    "variant_updated_at",
    "image_src",
    "all_image_srcs",
];

/// One denormalized catalog record: product attributes plus at most one
/// variant's attributes.
///
/// Products without variants produce a single row whose variant fields are
/// all `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRow {
    pub store_domain: String,
    pub product_id: Option<i64>,
    pub title: Option<String>,
    pub handle: Option<String>,
    pub vendor: Option<String>,
    pub product_type: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub published_at: Option<String>,
    /// Product tags joined with `", "`.
    pub tags: String,
    /// Raw HTML product description.
    pub body_html: Option<String>,
    pub variant_id: Option<i64>,
    pub variant_title: Option<String>,
    pub sku: Option<String>,
    /// Decimal string exactly as the storefront returns it, e.g. `"20.00"`.
    pub price: Option<String>,
    pub compare_at_price: Option<String>,
    pub available: Option<bool>,
    pub variant_created_at: Option<String>,
    pub variant_updated_at: Option<String>,
    /// `src` of the product's first image.
    pub image_src: Option<String>,
    /// Every non-empty image `src` of the product, joined with `|`.
    pub all_image_srcs: String,
}

