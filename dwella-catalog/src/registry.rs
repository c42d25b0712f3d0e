use std::collections::HashMap;

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::product::Product;

/// In-memory product registry backing the admin catalog screens.
/// Keyed by product id; durable storage is the embedding application's
/// concern.
pub struct CatalogManager {
    products: HashMap<String, Product>,
}

impl CatalogManager {
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
        }
    }

    /// A registry pre-seeded with the shipped catalog.
    pub fn with_starter_catalog() -> Self {
        let mut manager = Self::new();
        for product in crate::product::starter_catalog() {
            manager.products.insert(product.id.clone(), product);
        }
        manager
    }

    /// Insert a product, assigning a generated id when the given one is
    /// empty. Returns the stored product.
    pub fn create_product(&mut self, mut product: Product) -> Product {
        if product.id.is_empty() {
            product.id = generate_product_id();
        }
        tracing::info!(product_id = %product.id, name = %product.name, "product created");
        self.products.insert(product.id.clone(), product.clone());
        product
    }

    pub fn get_product(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn update_product(&mut self, id: &str, product: Product) -> Result<Product, CatalogError> {
        if !self.products.contains_key(id) {
            return Err(CatalogError::NotFound(id.to_string()));
        }
        let stored = Product {
            id: id.to_string(),
            ..product
        };
        self.products.insert(id.to_string(), stored.clone());
        Ok(stored)
    }

    pub fn delete_product(&mut self, id: &str) -> Result<(), CatalogError> {
        self.products
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    pub fn all_products(&self) -> Vec<&Product> {
        self.products.values().collect()
    }
}

impl Default for CatalogManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Format: `product_{epoch millis}_{9 lowercase alphanumeric chars}`.
fn generate_product_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect();
    format!("product_{}_{}", millis, suffix)
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(String),
}
