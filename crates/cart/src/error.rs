//! Cart error types.

use avogrove_core::ProductId;
use thiserror::Error;

use crate::checkout::SubmitError;
use crate::storage::PersistenceError;

/// Errors surfaced by cart operations.
///
/// How each variant relates to cart state:
///
/// - [`NotFound`](Self::NotFound) aborts the operation before any mutation;
///   the cart is unchanged.
/// - [`Persistence`](Self::Persistence) from a save means the mutation was
///   applied in memory but the durable write failed. The in-memory cart
///   stays authoritative; the caller may surface a warning.
/// - [`EmptyCart`](Self::EmptyCart) and [`Submit`](Self::Submit) leave the
///   cart unchanged.
#[derive(Debug, Error)]
pub enum CartError {
    /// The referenced product exists in neither the catalog nor the cart,
    /// depending on the operation.
    #[error("no such product: {0}")]
    NotFound(ProductId),

    /// The durable store could not be written.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Checkout was requested on an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// The order could not be transmitted.
    #[error(transparent)]
    Submit(#[from] SubmitError),
}
