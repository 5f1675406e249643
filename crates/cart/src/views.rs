//! Pure derived views over the cart.
//!
//! Everything here is side-effect-free and computed on demand from a
//! snapshot of the cart entries, so the UI and the checkout flow can call
//! these at any point without touching cart state.

use avogrove_core::Price;
use serde::{Deserialize, Serialize};

use crate::store::CartEntry;

/// Total number of units across all entries.
#[must_use]
pub fn total_item_count(entries: &[CartEntry]) -> u64 {
    entries.iter().map(|e| u64::from(e.quantity)).sum()
}

/// Sum of unit price times quantity across all entries.
#[must_use]
pub fn total_price(entries: &[CartEntry]) -> Price {
    entries.iter().map(CartEntry::line_total).sum()
}

/// One line of the checkout summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryLine {
    /// Product name as snapshotted in the cart entry.
    pub name: String,
    /// Units ordered.
    pub quantity: u32,
    /// Unit price times quantity for this line.
    pub line_total: Price,
}

/// The line-item view shown to the user before an order is submitted.
///
/// Lines appear in cart insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    /// One line per cart entry, in insertion order.
    pub lines: Vec<SummaryLine>,
    /// Sum of all line totals.
    pub total: Price,
}

/// Build the checkout summary for the given entries.
#[must_use]
pub fn checkout_summary(entries: &[CartEntry]) -> CheckoutSummary {
    CheckoutSummary {
        lines: entries
            .iter()
            .map(|e| SummaryLine {
                name: e.name.clone(),
                quantity: e.quantity,
                line_total: e.line_total(),
            })
            .collect(),
        total: total_price(entries),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use avogrove_core::ProductId;

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
    fn test_empty_cart_totals() {
        assert_eq!(total_item_count(&[]), 0);
        assert_eq!(total_price(&[]), Price::ZERO);
        assert!(checkout_summary(&[]).lines.is_empty());
    }

    #[test]
    fn test_totals() {
        let entries = [entry(1, 80, 2), entry(3, 450, 1)];
        assert_eq!(total_item_count(&entries), 3);
        assert_eq!(total_price(&entries), Price::new(610));
    }

    #[test]
    fn test_summary_preserves_order_and_line_totals() {
        let entries = [entry(3, 450, 1), entry(1, 80, 2)];
        let summary = checkout_summary(&entries);

        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0].name, "product 3");
        assert_eq!(summary.lines[0].line_total, Price::new(450));
        assert_eq!(summary.lines[1].line_total, Price::new(160));
        assert_eq!(summary.total, Price::new(610));
    }

    #[test]
    fn test_summary_line_wire_format() {
        let line = SummaryLine {
            name: "酪梨禮盒組（6入）".to_owned(),
            quantity: 2,
            line_total: Price::new(900),
        };
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"lineTotal\":900"));
    }
}
