//! Flattening of raw Shopify products into [`shopcat_core::FlatRow`]s.
//!
//! One row per variant, or a single variant-less row for products without
//! variants. Image columns always describe the product, never the variant.

use shopcat_core::FlatRow;

use crate::types::ShopifyProduct;

const TAG_SEPARATOR: &str = ", ";
const IMAGE_SEPARATOR: &str = "|";

/// Flattens every product of one store, preserving product and variant order.
///
/// The result holds `max(1, variants.len())` rows per product.
#[must_use]
pub fn flatten_products(products: &[ShopifyProduct], store_domain: &str) -> Vec<FlatRow> {
    products
        .iter()
        .flat_map(|product| flatten_product(product, store_domain))
        .collect()
}

/// Flattens a single product into its rows.
#[must_use]
pub fn flatten_product(product: &ShopifyProduct, store_domain: &str) -> Vec<FlatRow> {
    let image_src = product.images.first().and_then(|img| img.src.clone());
    let all_image_srcs = product
        .images
        .iter()
        .filter_map(|img| img.src.as_deref())
        .filter(|src| !src.is_empty())
        .collect::<Vec<_>>()
        .join(IMAGE_SEPARATOR);

    let product_row = FlatRow {
        store_domain: store_domain.to_owned(),
        product_id: product.id,
        title: product.title.clone(),
        handle: product.handle.clone(),
        vendor: product.vendor.clone(),
        product_type: product.product_type.clone(),
        created_at: product.created_at.clone(),
        updated_at: product.updated_at.clone(),
        published_at: product.published_at.clone(),
        tags: product.tags.join(TAG_SEPARATOR),
        body_html: product.body_html.clone(),
        variant_id: None,
        variant_title: None,
        sku: None,
        price: None,
        compare_at_price: None,
        available: None,
        variant_created_at: None,
        variant_updated_at: None,
        image_src,
        all_image_srcs,
    };

    if product.variants.is_empty() {
        return vec![product_row];
    }

    product
        .variants
        .iter()
        .map(|variant| FlatRow {
            variant_id: variant.id,
            variant_title: variant.title.clone(),
            sku: variant.sku.clone(),
            price: variant.price.clone(),
            compare_at_price: variant.compare_at_price.clone(),
            available: variant.available,
            variant_created_at: variant.created_at.clone(),
            variant_updated_at: variant.updated_at.clone(),
            ..product_row.clone()
        })
        .collect()
}

#[cfg(test)]
#[path = "flatten_test.rs"]
mod tests;
