pub mod client;
pub mod error;
pub mod flatten;
mod lenient;
pub mod types;

pub use client::{products_endpoint, ShopifyClient};
pub use error::ScraperError;
pub use flatten::{flatten_product, flatten_products};
pub use types::{ShopifyImage, ShopifyProduct, ShopifyProductsResponse, ShopifyVariant};
