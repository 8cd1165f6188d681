//! Client-side persistence for the product catalog.
//!
//! The whole list is the unit of storage: one JSON file per endpoint under
//! `.cache/`, keyed by a hash of the endpoint URL to avoid filesystem
//! issues. Writes overwrite the prior value; errors are logged and swallowed
//! to keep the UI responsive. There are no partial updates, no versioning
//! and no expiry.

use crate::catalog::Product;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CACHE_DIR: &str = ".cache";

/// Load the persisted catalog for an endpoint, if present. Malformed data
/// fails safe with `None` so the caller falls back to a fresh fetch.
pub fn load_catalog(endpoint: &str) -> Option<Vec<Product>> {
    let path = catalog_path(endpoint);
    let data = fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&data) {
        Ok(products) => Some(products),
        Err(err) => {
            warn!(path = %path.display(), "Discarding malformed cached catalog: {err}");
            None
        }
    }
}

/// Persist the full catalog, favorite flags included, overwriting any prior
/// value for this endpoint.
pub fn save_catalog(endpoint: &str, products: &[Product]) {
    let path = catalog_path(endpoint);
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    match serde_json::to_string(products) {
        Ok(contents) => {
            if let Err(err) = fs::write(&path, contents) {
                warn!(path = %path.display(), "Failed to write catalog: {err}");
            } else {
                debug!(count = products.len(), "Saved catalog");
            }
        }
        Err(err) => warn!("Failed to serialize catalog: {err}"),
    }
}

pub fn hash_dir(endpoint: &str) -> PathBuf {
    let mut hasher = Sha256::new();
    hasher.update(endpoint.as_bytes());
    let hash = format!("{:x}", hasher.finalize());
    Path::new(CACHE_DIR).join(hash)
}

fn catalog_path(endpoint: &str) -> PathBuf {
    hash_dir(endpoint).join("products.json")
}

/// On-disk location of a product's cached card image. The original file
/// extension is kept where the URL carries one so decoding can infer the
/// format from the name.
pub fn image_path(endpoint: &str, product: &Product) -> PathBuf {
    let mut hasher = Sha256::new();
    hasher.update(product.img.as_bytes());
    let hash = format!("{:x}", hasher.finalize());
    let ext = image_extension(&product.img);
    hash_dir(endpoint)
        .join("assets")
        .join(format!("{hash}.{ext}"))
}

fn image_extension(url: &str) -> &str {
    let tail = url.rsplit('/').next().unwrap_or(url);
    match tail.rsplit_once('.') {
        Some((_, ext))
            if !ext.is_empty() && ext.len() <= 4 && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            ext
        }
        _ => "img",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_products() -> Vec<Product> {
        vec![
            Product {
                id: "101".to_string(),
                name: "Canvas Sneaker".to_string(),
                url: "https://shop.example/p/101".to_string(),
                img: "https://cdn.example/101.jpg".to_string(),
                price: 449.99,
                is_favorite: true,
            },
            Product {
                id: "102".to_string(),
                name: "Denim Jacket".to_string(),
                url: "https://shop.example/p/102".to_string(),
                img: "https://cdn.example/102.jpg".to_string(),
                price: 899.0,
                is_favorite: false,
            },
        ]
    }

    #[test]
    fn save_then_load_round_trips_favorite_flags() {
        let endpoint = format!("test://round-trip-{}", std::process::id());
        save_catalog(&endpoint, &sample_products());

        let restored = load_catalog(&endpoint).expect("catalog should be present");
        assert_eq!(restored.len(), 2);
        assert!(restored[0].is_favorite);
        assert!(!restored[1].is_favorite);
        assert_eq!(restored[0].id, "101");
        assert_eq!(restored[1].name, "Denim Jacket");

        let _ = fs::remove_dir_all(hash_dir(&endpoint));
    }

    #[test]
    fn absent_catalog_loads_as_none() {
        let endpoint = format!("test://absent-{}", std::process::id());
        assert!(load_catalog(&endpoint).is_none());
    }

    #[test]
    fn malformed_catalog_is_discarded() {
        let endpoint = format!("test://malformed-{}", std::process::id());
        let path = catalog_path(&endpoint);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();

        assert!(load_catalog(&endpoint).is_none());

        let _ = fs::remove_dir_all(hash_dir(&endpoint));
    }

    #[test]
    fn image_paths_keep_recognizable_extensions() {
        let mut product = sample_products().remove(0);
        assert!(
            image_path("test://ext", &product)
                .to_string_lossy()
                .ends_with(".jpg")
        );

        product.img = "https://cdn.example/streamed-image".to_string();
        assert!(
            image_path("test://ext", &product)
                .to_string_lossy()
                .ends_with(".img")
        );
    }
}
