//! Integration tests for Avogrove.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p avogrove-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_session` - Full shopping sessions against file-backed storage,
//!   including restarts (a new service over the same file)
//! - `checkout_flow` - Order submission and the post-checkout cart state

#![cfg_attr(not(test), forbid(unsafe_code))]
