// Cart snapshot and its line items.
//
// Responsibilities
// - Hold entries in first-added order.
// - Guarantee at most one entry per product and no entry with amount 0.
// - Produce a fresh snapshot for every change; a published Cart is never mutated.
//
// Boundaries
// - No input or output here. Persistence and lookups live behind ports.

use crate::modules::cart::core::product::{Product, ProductId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: ProductId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub amount: u32,
}

impl CartEntry {
    /// A fresh line item holding a single unit of `product`.
    pub fn from_product(product: Product) -> Self {
        let mut fields = product.fields;
        fields.remove("amount");
        Self {
            id: product.id,
            fields,
            amount: 1,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CartInvariantError {
    #[error("product {0} appears more than once")]
    DuplicateEntry(ProductId),

    #[error("product {0} has amount 0")]
    EmptyEntry(ProductId),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartEntry>", into = "Vec<CartEntry>")]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl TryFrom<Vec<CartEntry>> for Cart {
    type Error = CartInvariantError;

    fn try_from(entries: Vec<CartEntry>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.amount == 0 {
                return Err(CartInvariantError::EmptyEntry(entry.id));
            }
            if !seen.insert(entry.id) {
                return Err(CartInvariantError::DuplicateEntry(entry.id));
            }
        }
        Ok(Self { entries })
    }
}

impl From<Cart> for Vec<CartEntry> {
    fn from(cart: Cart) -> Self {
        cart.entries
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, product_id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| entry.id == product_id)
    }

    pub fn amount_of(&self, product_id: ProductId) -> Option<u32> {
        self.find(product_id).map(|entry| entry.amount)
    }

    pub fn with_incremented(&self, product_id: ProductId) -> Self {
        self.map_entry(product_id, |entry| {
            entry.amount = entry.amount.saturating_add(1)
        })
    }

    /// Appends `entry` unless its product is already present, in which case
    /// the snapshot is returned unchanged.
    pub fn with_appended(&self, entry: CartEntry) -> Self {
        let mut next = self.clone();
        if entry.amount > 0 && self.find(entry.id).is_none() {
            next.entries.push(entry);
        }
        next
    }

    pub fn without(&self, product_id: ProductId) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| entry.id != product_id)
                .cloned()
                .collect(),
        }
    }

    /// Sets the amount of an existing entry. An amount of 0 removes the entry.
    pub fn with_amount(&self, product_id: ProductId, amount: u32) -> Self {
        if amount == 0 {
            return self.without(product_id);
        }
        self.map_entry(product_id, |entry| entry.amount = amount)
    }

    fn map_entry(&self, product_id: ProductId, change: impl FnOnce(&mut CartEntry)) -> Self {
        let mut next = self.clone();
        if let Some(entry) = next.entries.iter_mut().find(|entry| entry.id == product_id) {
            change(entry);
        }
        next
    }
}
