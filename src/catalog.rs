//! Product catalog acquisition.
//!
//! On the first run the catalog comes from the remote endpoint and every
//! product starts out not-favorited. Afterwards the persisted copy under
//! `.cache/` is authoritative, so favorite flags survive restarts without
//! another network call.

use crate::config::AppConfig;
use crate::store;
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::time::Duration;
use tracing::{debug, info, warn};

/// One recommended item. The wire payload carries everything except
/// `is_favorite`, which defaults to `false` the first time a product is
/// observed and changes only through the favorite toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable unique identifier; the endpoint may send it as a number.
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub name: String,
    pub url: String,
    pub img: String,
    pub price: f64,
    #[serde(default)]
    pub is_favorite: bool,
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(value) => value.to_string(),
        Raw::Text(value) => value,
    })
}

/// Load the catalog, preferring the persisted copy over the network. A
/// missing or unreachable endpoint on first run is unrecoverable: the
/// carousel cannot render without data.
pub fn load_products(config: &AppConfig) -> Result<Vec<Product>> {
    if let Some(products) = store::load_catalog(&config.endpoint_url) {
        info!(count = products.len(), "Restored catalog from cache");
        return Ok(products);
    }
    fetch_products(&config.endpoint_url)
}

fn fetch_products(endpoint: &str) -> Result<Vec<Product>> {
    info!(%endpoint, "Fetching catalog from remote endpoint");
    let response = reqwest::blocking::get(endpoint)
        .with_context(|| format!("Request to {endpoint} failed"))?
        .error_for_status()
        .context("Catalog endpoint returned an error status")?;
    let products: Vec<Product> = response
        .json()
        .context("Catalog payload was not a JSON array of products")?;
    debug!(count = products.len(), "Parsed remote catalog");
    Ok(products)
}

/// Best-effort download of card images into the asset cache. A missing
/// image only downgrades its card to a placeholder, so failures are logged
/// and skipped.
pub fn prefetch_images(config: &AppConfig, products: &[Product]) {
    let client = match reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
    {
        Ok(client) => client,
        Err(err) => {
            warn!("Could not build image download client: {err}");
            return;
        }
    };

    for product in products {
        let path = store::image_path(&config.endpoint_url, product);
        if path.exists() {
            continue;
        }
        let bytes = match client
            .get(&product.img)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.bytes())
        {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(id = %product.id, url = %product.img, "Image download failed: {err}");
                continue;
            }
        };
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Err(err) = fs::write(&path, &bytes) {
            warn!(id = %product.id, "Failed to cache image: {err}");
        } else {
            debug!(id = %product.id, path = %path.display(), "Cached card image");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_payload_defaults_favorite_to_false() {
        let payload = r#"[
            {"id": 42, "name": "Wool Scarf", "url": "https://shop.example/p/42",
             "img": "https://cdn.example/42.jpg", "price": 129.5}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(payload).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "42");
        assert!(!products[0].is_favorite);
        assert!((products[0].price - 129.5).abs() < f64::EPSILON);
    }

    #[test]
    fn string_ids_pass_through_unchanged() {
        let payload = r#"{"id": "sku-7", "name": "Belt", "url": "u", "img": "i", "price": 1.0}"#;
        let product: Product = serde_json::from_str(payload).unwrap();
        assert_eq!(product.id, "sku-7");
    }

    #[test]
    fn persisted_shape_uses_camel_case_favorite_flag() {
        let product = Product {
            id: "9".to_string(),
            name: "Cap".to_string(),
            url: "https://shop.example/p/9".to_string(),
            img: "https://cdn.example/9.jpg".to_string(),
            price: 59.99,
            is_favorite: true,
        };
        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains(r#""isFavorite":true"#));

        let restored: Product = serde_json::from_str(&json).unwrap();
        assert!(restored.is_favorite);
        assert_eq!(restored.id, "9");
    }

    #[test]
    fn persisted_catalog_wins_over_the_network() {
        // The endpoint cannot resolve, so reaching this far proves the
        // cached copy short-circuited the fetch.
        let mut config = AppConfig::default();
        config.endpoint_url = format!(
            "http://invalid.invalid/catalog-{}.json",
            std::process::id()
        );

        let cached = vec![Product {
            id: "101".to_string(),
            name: "Canvas Sneaker".to_string(),
            url: "https://shop.example/p/101".to_string(),
            img: "https://cdn.example/101.jpg".to_string(),
            price: 449.99,
            is_favorite: true,
        }];
        store::save_catalog(&config.endpoint_url, &cached);

        let loaded = load_products(&config).expect("cached catalog should load");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "101");
        assert!(loaded[0].is_favorite);

        let _ = fs::remove_dir_all(store::hash_dir(&config.endpoint_url));
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let payload = r#"[{"id": 1, "name": "Missing fields"}]"#;
        assert!(serde_json::from_str::<Vec<Product>>(payload).is_err());
    }
}
