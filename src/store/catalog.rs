//! # Product Store
//!
//! Ordered in-memory collection of product records behind a single
//! mutual-exclusion boundary. Constructed once at boot and shared with
//! request handlers by reference; handlers receive cloned snapshots.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use super::errors::{StoreError, StoreResult};
use super::product::{seed_products, Product, ProductDraft};

/// The in-memory product collection.
///
/// Insertion order is the only ordering guarantee and is what default
/// listing order relies on. Every access goes through the one `Mutex`.
pub struct ProductStore {
    products: Mutex<Vec<Product>>,
}

impl ProductStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    /// Create a store seeded with the three fixed records (ids "1"-"3").
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }

    /// Create a store holding the given records.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
        }
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Vec<Product>>> {
        self.products.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Number of records in the store.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// Working copy of the store with the list filters applied, in order:
    /// exact `category` match, then case-insensitive substring match on
    /// `name`. Both filters are optional.
    pub fn filtered(
        &self,
        category: Option<&str>,
        search: Option<&str>,
    ) -> StoreResult<Vec<Product>> {
        let products = self.lock()?;

        let mut result: Vec<Product> = products.clone();

        if let Some(category) = category {
            result.retain(|p| p.category == category);
        }

        if let Some(search) = search {
            let needle = search.to_lowercase();
            result.retain(|p| p.name.to_lowercase().contains(&needle));
        }

        Ok(result)
    }

    /// First record whose id matches.
    pub fn get(&self, id: &str) -> StoreResult<Product> {
        let products = self.lock()?;
        products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Append a new record built from the draft under a freshly generated
    /// UUID v4 id (effectively globally unique, not merely unique within
    /// the current store).
    pub fn insert(&self, draft: ProductDraft) -> StoreResult<Product> {
        let product = Product::from_draft(Uuid::new_v4().to_string(), draft);

        let mut products = self.lock()?;
        products.push(product.clone());

        Ok(product)
    }

    /// Replace all fields except `id` wholesale. Fields not carried by the
    /// draft do not exist, so nothing from the prior record survives.
    pub fn replace(&self, id: &str, draft: ProductDraft) -> StoreResult<Product> {
        let mut products = self.lock()?;

        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;

        let updated = Product::from_draft(id, draft);
        products[index] = updated.clone();

        Ok(updated)
    }

    /// Remove the record with the given id, returning its snapshot.
    pub fn remove(&self, id: &str) -> StoreResult<Product> {
        let mut products = self.lock()?;

        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;

        Ok(products.remove(index))
    }

    /// Count of records per distinct `category` over the full, unfiltered
    /// store.
    pub fn count_by_category(&self) -> StoreResult<BTreeMap<String, usize>> {
        let products = self.lock()?;

        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for product in products.iter() {
            *counts.entry(product.category.clone()).or_insert(0) += 1;
        }

        Ok(counts)
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::seeded()
    }
}
