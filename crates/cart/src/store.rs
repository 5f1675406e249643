//! Cart entries and the in-memory cart store.
//!
//! The store is the sole mutable state of the cart. It holds an ordered
//! sequence of entries, at most one per product ID, and exposes a read-only
//! view to the rest of the application. Mutation goes through the crate's
//! service layer so that catalog validation and write-through persistence
//! cannot be bypassed.

use avogrove_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// One line in the cart.
///
/// Carries a snapshot of the product's name and unit price taken when the
/// entry was created, so catalog changes after that point do not
/// retroactively alter a cart in progress. This is also the persisted wire
/// format: `{id, name, unitPrice, quantity}`. Unknown fields in stored data
/// are ignored; any field added later must be optional with a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// ID of the catalog product this entry references.
    pub id: ProductId,
    /// Product name at the time the entry was created.
    pub name: String,
    /// Unit price at the time the entry was created.
    #[serde(rename = "unitPrice")]
    pub unit_price: Price,
    /// Number of units selected, always >= 1.
    pub quantity: u32,
}

impl CartEntry {
    /// Create a quantity-1 entry snapshotting the given product.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            unit_price: product.unit_price,
            quantity: 1,
        }
    }

    /// The line total for this entry.
    #[must_use]
    pub const fn line_total(&self) -> Price {
        self.unit_price.line_total(self.quantity)
    }
}

/// Ordered collection of cart entries, keyed by product ID.
///
/// Insertion order is preserved so the checkout summary lists items in the
/// order the visitor added them.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    entries: Vec<CartEntry>,
}

impl CartStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn all(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Find the entry for a product, if present.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Atomically replace the whole entry sequence.
    ///
    /// Used by restore-from-storage and clear.
    pub fn replace_all(&mut self, entries: Vec<CartEntry>) {
        self.entries = entries;
    }

    pub(crate) fn find_mut(&mut self, id: ProductId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    pub(crate) fn push(&mut self, entry: CartEntry) {
        self.entries.push(entry);
    }

    /// Remove the entry for a product. Returns whether an entry existed.
    pub(crate) fn remove(&mut self, id: ProductId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn entry(id: u32, price: u64, quantity: u32) -> CartEntry {
        CartEntry {
            id: ProductId::new(id),
            name: format!("product {id}"),
            unit_price: Price::new(price),
            quantity,
        }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = CartStore::new();
        store.push(entry(3, 450, 1));
        store.push(entry(1, 80, 2));
        let ids: Vec<_> = store.all().iter().map(|e| e.id.as_u32()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_find() {
        let mut store = CartStore::new();
        store.push(entry(1, 80, 1));
        assert_eq!(store.find(ProductId::new(1)).unwrap().quantity, 1);
        assert!(store.find(ProductId::new(2)).is_none());
    }

    #[test]
    fn test_remove() {
        let mut store = CartStore::new();
        store.push(entry(1, 80, 1));
        assert!(store.remove(ProductId::new(1)));
        assert!(!store.remove(ProductId::new(1)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_replace_all() {
        let mut store = CartStore::new();
        store.push(entry(1, 80, 1));
        store.replace_all(vec![entry(2, 120, 3)]);
        assert_eq!(store.all().len(), 1);
        assert_eq!(store.find(ProductId::new(2)).unwrap().quantity, 3);
    }

    #[test]
    fn test_wire_format_field_names() {
        let json = serde_json::to_string(&entry(1, 80, 2)).unwrap();
        assert!(json.contains("\"unitPrice\":80"));
        assert!(json.contains("\"quantity\":2"));
    }

    #[test]
    fn test_wire_format_ignores_unknown_fields() {
        let json = r#"{"id":1,"name":"酪梨","unitPrice":80,"quantity":2,"image":"🥑"}"#;
        let parsed: CartEntry = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.quantity, 2);
        assert_eq!(parsed.unit_price, Price::new(80));
    }

    #[test]
    fn test_line_total() {
        assert_eq!(entry(1, 80, 3).line_total(), Price::new(240));
    }
}
