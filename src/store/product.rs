//! # Product Records
//!
//! The sole entity of the catalog, plus the write payload accepted on
//! create and update.

use serde::{Deserialize, Serialize};

/// A product record.
///
/// `id` is an opaque unique string, immutable after creation. All other
/// fields are replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// Write payload for create and update requests.
///
/// All five fields are required with exact primitive types; a missing
/// field or a wrong type fails deserialization, so a successfully parsed
/// draft is a validated one. Unknown extra fields are ignored. No
/// coercion: a numeric string is not a number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    /// Build a record from a validated draft under the given id.
    pub fn from_draft(id: impl Into<String>, draft: ProductDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            in_stock: draft.in_stock,
        }
    }
}

/// The three fixed records every store starts with.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Laptop".to_string(),
            description: "High-performance laptop with 16GB RAM".to_string(),
            price: 1200.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "2".to_string(),
            name: "Smartphone".to_string(),
            description: "Latest model with 128GB storage".to_string(),
            price: 800.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "3".to_string(),
            name: "Coffee Maker".to_string(),
            description: "Programmable coffee maker with timer".to_string(),
            price: 50.0,
            category: "kitchen".to_string(),
            in_stock: false,
        },
    ]
}
