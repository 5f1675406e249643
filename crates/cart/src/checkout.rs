//! Order record and submission seam.
//!
//! Checkout transport (where an order actually goes) is an external
//! collaborator. This module defines the order record the cart hands over
//! and the [`OrderSubmitter`] trait the transport implements; the cart is
//! cleared only after a submitter acknowledges the order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use avogrove_core::Price;

use crate::views::CheckoutSummary;

/// Contact details entered by the customer at checkout.
///
/// The storefront collects these as free text; validating them is the UI
/// layer's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Optional note from the customer.
    #[serde(default)]
    pub note: String,
}

/// A submitted order: who ordered, what, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub customer: CustomerDetails,
    /// Line items as shown to the customer at submission time.
    pub items: Vec<crate::views::SummaryLine>,
    pub total: Price,
    pub submitted_at: DateTime<Utc>,
}

impl Order {
    /// Build an order from customer details and a checkout summary,
    /// timestamped now.
    #[must_use]
    pub fn new(customer: CustomerDetails, summary: CheckoutSummary) -> Self {
        Self {
            customer,
            items: summary.lines,
            total: summary.total,
            submitted_at: Utc::now(),
        }
    }
}

/// Errors from the order transport.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The order record could not be encoded for transmission.
    #[error("failed to encode order: {0}")]
    Encode(#[from] serde_json::Error),

    /// The transport rejected or failed to deliver the order.
    #[error("order transport failed: {0}")]
    Transport(String),
}

/// Transport seam for submitting an order.
pub trait OrderSubmitter {
    /// Transmit the order.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError`] if the order was not accepted; the caller
    /// must not clear the cart in that case.
    fn submit(&self, order: &Order) -> Result<(), SubmitError>;
}

/// Submitter that records the order in the application log.
///
/// This is the development transport the storefront launched with; a real
/// backend replaces it behind the same trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmitter;

impl OrderSubmitter for LogSubmitter {
    fn submit(&self, order: &Order) -> Result<(), SubmitError> {
        let payload = serde_json::to_string(order)?;
        tracing::info!(
            customer = %order.customer.name,
            total = %order.total,
            %payload,
            "order submitted"
        );
        Ok(())
    }
}
