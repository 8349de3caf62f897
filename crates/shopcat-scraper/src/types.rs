//! Shopify response types for the public `products.json` endpoint.
//!
//! Decoding is loose: every attribute is optional, unknown keys are ignored,
//! and scalars of an unexpected JSON type are coerced (see the `lenient` module),
//! so a store that omits or retypes a field still yields rows.
//!
//! ### Tags
//! Returned as a JSON array of strings, e.g. `["blood orange", "ginger"]`.
//! Some older themes still send one comma-separated string; that is split
//! into the same list. Joined into a single cell during flattening.
//!
//! ### `compare_at_price`
//! Explicitly `null` when the variant is not on sale, otherwise a decimal
//! string such as `"162.00"`. Passed through as-is; a bare JSON number is
//! kept in its JSON text form (`25.0`).
//!
//! ### Missing vs `null` collections
//! `tags`, `images` and `variants` may be absent or `null`; both decode to an
//! empty list.
//!
//! ### `products`
//! A body without a `products` key decodes to `None`, which the pagination
//! loop treats the same as an empty page.

use serde::{Deserialize, Deserializer};

use crate::lenient;

/// Top-level response from `GET /products.json`.
#[derive(Debug, Default, Deserialize)]
pub struct ShopifyProductsResponse {
    #[serde(default)]
    pub products: Option<Vec<ShopifyProduct>>,
}

/// A single product from the storefront catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShopifyProduct {
    /// Shopify numeric product ID (e.g., `6789012345678`).
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<i64>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,

    /// URL slug for the product page.
    #[serde(default, deserialize_with = "lenient::string")]
    pub handle: Option<String>,

    /// Raw HTML product description.
    #[serde(default, deserialize_with = "lenient::string")]
    pub body_html: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub vendor: Option<String>,

    /// Product category string; may be empty.
    #[serde(default, deserialize_with = "lenient::string")]
    pub product_type: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub updated_at: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub published_at: Option<String>,

    #[serde(default, deserialize_with = "lenient::tags")]
    pub tags: Vec<String>,

    /// Full image gallery, in storefront order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<ShopifyImage>,

    /// All purchasable variants for this product.
    #[serde(default, deserialize_with = "null_as_default")]
    pub variants: Vec<ShopifyVariant>,
}

/// A single purchasable variant of a [`ShopifyProduct`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShopifyVariant {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<i64>,

    /// Display title, e.g. `"Large / Blue"` or `"Default Title"`.
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub sku: Option<String>,

    /// Current price as a decimal string (e.g., `"30.00"`).
    #[serde(default, deserialize_with = "lenient::string")]
    pub price: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub compare_at_price: Option<String>,

    #[serde(default, deserialize_with = "lenient::flag")]
    pub available: Option<bool>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub updated_at: Option<String>,
}

/// A product image. Only the CDN URL is extracted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShopifyImage {
    #[serde(default, deserialize_with = "lenient::string")]
    pub src: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_product() {
        let body = r#"{
            "products": [{
                "id": 6789012345678,
                "title": "Wool Runner",
                "handle": "wool-runner",
                "body_html": "<p>Soft.</p>",
                "vendor": "Allbirds",
                "product_type": "Shoes",
                "created_at": "2024-01-02T03:04:05-05:00",
                "updated_at": "2024-02-02T03:04:05-05:00",
                "published_at": "2024-01-03T03:04:05-05:00",
                "tags": ["mens", "wool"],
                "images": [{"id": 1, "src": "https://cdn.example.com/a.jpg", "width": 800}],
                "variants": [{
                    "id": 42,
                    "title": "8 / Grey",
                    "sku": "WR-8-G",
                    "price": "98.00",
                    "compare_at_price": null,
                    "available": true,
                    "created_at": "2024-01-02T03:04:05-05:00",
                    "updated_at": "2024-02-02T03:04:05-05:00",
                    "grams": 500
                }]
            }]
        }"#;

        let parsed: ShopifyProductsResponse = serde_json::from_str(body).unwrap();
        let products = parsed.products.unwrap();
        assert_eq!(products.len(), 1);
        let product = &products[0];
        assert_eq!(product.id, Some(6_789_012_345_678));
        assert_eq!(product.tags, vec!["mens", "wool"]);
        assert_eq!(
            product.images[0].src.as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
        let variant = &product.variants[0];
        assert_eq!(variant.id, Some(42));
        assert_eq!(variant.price.as_deref(), Some("98.00"));
        assert!(variant.compare_at_price.is_none());
        assert_eq!(variant.available, Some(true));
    }

    #[test]
    fn missing_products_key_decodes_to_none() {
        let parsed: ShopifyProductsResponse = serde_json::from_str(r#"{"errors": "nope"}"#).unwrap();
        assert!(parsed.products.is_none());
    }

    #[test]
    fn sparse_product_uses_defaults() {
        let parsed: ShopifyProductsResponse =
            serde_json::from_str(r#"{"products": [{"id": 1}]}"#).unwrap();
        let product = &parsed.products.unwrap()[0];
        assert!(product.title.is_none());
        assert!(product.tags.is_empty());
        assert!(product.images.is_empty());
        assert!(product.variants.is_empty());
    }

    #[test]
    fn null_collections_decode_to_empty() {
        let parsed: ShopifyProductsResponse = serde_json::from_str(
            r#"{"products": [{"id": 1, "tags": null, "images": null, "variants": null}]}"#,
        )
        .unwrap();
        let product = &parsed.products.unwrap()[0];
        assert!(product.tags.is_empty());
        assert!(product.images.is_empty());
        assert!(product.variants.is_empty());
    }

    #[test]
    fn image_without_src_decodes() {
        let parsed: ShopifyProductsResponse =
            serde_json::from_str(r#"{"products": [{"images": [{"id": 9}]}]}"#).unwrap();
        let product = &parsed.products.unwrap()[0];
        assert!(product.images[0].src.is_none());
    }

    #[test]
    fn non_object_body_is_an_error() {
        assert!(serde_json::from_str::<ShopifyProductsResponse>("[1, 2, 3]").is_err());
    }

    #[test]
    fn numeric_price_is_kept_as_text() {
        let parsed: ShopifyProductsResponse = serde_json::from_str(
            r#"{"products": [{"id": 1, "variants": [{"id": 2, "price": 25.0, "compare_at_price": 30}]}]}"#,
        )
        .unwrap();
        let variant = &parsed.products.unwrap()[0].variants[0];
        assert_eq!(variant.price.as_deref(), Some("25.0"));
        assert_eq!(variant.compare_at_price.as_deref(), Some("30"));
    }

    #[test]
    fn string_ids_and_flags_are_coerced() {
        let parsed: ShopifyProductsResponse = serde_json::from_str(
            r#"{"products": [{"id": "123", "variants": [{"id": " 456 ", "available": "TRUE"}, {"available": 0}]}]}"#,
        )
        .unwrap();
        let product = &parsed.products.unwrap()[0];
        assert_eq!(product.id, Some(123));
        assert_eq!(product.variants[0].id, Some(456));
        assert_eq!(product.variants[0].available, Some(true));
        assert_eq!(product.variants[1].available, Some(false));
    }

    #[test]
    fn unusable_scalars_decode_to_none() {
        let parsed: ShopifyProductsResponse = serde_json::from_str(
            r#"{"products": [{"id": "abc", "title": 7, "variants": [{"id": 1.5, "available": "maybe"}]}]}"#,
        )
        .unwrap();
        let product = &parsed.products.unwrap()[0];
        assert!(product.id.is_none());
        assert_eq!(product.title.as_deref(), Some("7"));
        assert!(product.variants[0].id.is_none());
        assert!(product.variants[0].available.is_none());
    }

    #[test]
    fn comma_separated_tags_are_split() {
        let parsed: ShopifyProductsResponse =
            serde_json::from_str(r#"{"products": [{"tags": "mens, wool,,  sale "}]}"#).unwrap();
        let product = &parsed.products.unwrap()[0];
        assert_eq!(product.tags, vec!["mens", "wool", "sale"]);
    }

    #[test]
    fn non_string_tags_are_stringified() {
        let parsed: ShopifyProductsResponse =
            serde_json::from_str(r#"{"products": [{"tags": ["new", 2024, null]}]}"#).unwrap();
        let product = &parsed.products.unwrap()[0];
        assert_eq!(product.tags, vec!["new", "2024"]);
    }
}
