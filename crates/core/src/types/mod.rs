//! Core type definitions.
//!
//! Newtype wrappers that prevent accidentally mixing raw integers with
//! domain values (product IDs, monetary amounts).

mod id;
mod price;

pub use id::ProductId;
pub use price::Price;
