//! Avogrove Core - Shared types library.
//!
//! This crate provides the common types used across the Avogrove components:
//! - `cart` - Cart state management for the storefront
//! - the storefront UI layer, which renders what the cart derives
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe product IDs and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
