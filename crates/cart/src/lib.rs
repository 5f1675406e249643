//! Avogrove Cart - cart state management for the storefront.
//!
//! This crate owns the shopping cart: which catalog products a visitor has
//! selected, their quantities, and the durable copy of that selection. The
//! UI layer invokes the operations on [`CartService`] and renders the
//! derived views; it never mutates cart state directly.
//!
//! # Modules
//!
//! - [`catalog`] - The static product catalog
//! - [`store`] - Cart entries and the in-memory cart store
//! - [`storage`] - Durable persistence behind the [`CartStorage`] trait
//! - [`service`] - The cart operations (add, remove, adjust, clear, restore)
//! - [`views`] - Pure derived views (totals, checkout summary)
//! - [`checkout`] - The order record and submission seam
//!
//! # Example
//!
//! ```
//! use avogrove_cart::{CartService, catalog, storage::MemoryStorage};
//! use avogrove_core::ProductId;
//!
//! let mut cart = CartService::new(catalog::demo_catalog(), MemoryStorage::new());
//! cart.restore();
//! cart.add_item(ProductId::new(1))?;
//! assert_eq!(cart.total_item_count(), 1);
//! # Ok::<(), avogrove_cart::CartError>(())
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod error;
pub mod service;
pub mod storage;
pub mod store;
pub mod views;

pub use catalog::{Catalog, Product};
pub use checkout::{CustomerDetails, LogSubmitter, Order, OrderSubmitter, SubmitError};
pub use error::CartError;
pub use service::CartService;
pub use storage::{CartStorage, PersistenceError};
pub use store::{CartEntry, CartStore};
pub use views::{CheckoutSummary, SummaryLine};
