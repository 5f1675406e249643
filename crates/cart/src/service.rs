//! Cart operations.
//!
//! [`CartService`] is the only mutation path for the cart. It owns the
//! catalog, the store, and the storage adapter, and every operation runs
//! its whole read-modify-write-persist sequence under `&mut self`, which is
//! the single-owner serialization the cart's concurrency model requires:
//! no two operations can interleave, and nothing else can mutate the store.
//!
//! Every mutating operation writes through to storage before returning.
//! A failed write surfaces as [`CartError::Persistence`] but does not roll
//! back the mutation; the in-memory cart stays authoritative so the user's
//! action is not silently discarded.

use avogrove_core::{Price, ProductId};

use crate::catalog::Catalog;
use crate::checkout::{CustomerDetails, Order, OrderSubmitter};
use crate::error::CartError;
use crate::storage::CartStorage;
use crate::store::{CartEntry, CartStore};
use crate::views::{self, CheckoutSummary};

/// The cart operations component.
pub struct CartService<S: CartStorage> {
    catalog: Catalog,
    store: CartStore,
    storage: S,
}

impl<S: CartStorage> CartService<S> {
    /// Create a service with an empty cart.
    ///
    /// Call [`restore`](Self::restore) once at startup to load any saved
    /// cart.
    pub const fn new(catalog: Catalog, storage: S) -> Self {
        Self {
            catalog,
            store: CartStore::new(),
            storage,
        }
    }

    /// The product catalog.
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current cart entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        self.store.all()
    }

    /// Find the cart entry for a product, if present.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&CartEntry> {
        self.store.find(id)
    }

    /// Whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Load the saved cart from storage, replacing the current entries.
    ///
    /// Corrupt or unreadable stored state must never block the user from
    /// shopping, so a load failure is logged and recovered with an empty
    /// cart rather than propagated. Entries whose product ID no longer
    /// resolves in the catalog are kept as-is; their snapshotted name and
    /// price make them self-contained.
    pub fn restore(&mut self) {
        match self.storage.load() {
            Ok(entries) => self.store.replace_all(entries),
            Err(e) => {
                tracing::warn!(error = %e, "could not restore saved cart, starting empty");
                self.store.replace_all(Vec::new());
            }
        }
    }

    /// Add one unit of a catalog product to the cart.
    ///
    /// Increments the quantity if the product is already in the cart,
    /// otherwise appends a new quantity-1 entry snapshotting the product's
    /// current name and price.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if the product is not in the
    /// catalog; the cart is unchanged. Returns [`CartError::Persistence`]
    /// if the write-through save fails; the mutation is retained in memory.
    pub fn add_item(&mut self, id: ProductId) -> Result<(), CartError> {
        let Some(product) = self.catalog.find(id) else {
            return Err(CartError::NotFound(id));
        };

        if let Some(entry) = self.store.find_mut(id) {
            entry.quantity = entry.quantity.saturating_add(1);
        } else {
            let entry = CartEntry::from_product(product);
            self.store.push(entry);
        }

        self.persist()
    }

    /// Remove a product from the cart.
    ///
    /// A product that is not in the cart is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Persistence`] if the write-through save fails.
    pub fn remove_item(&mut self, id: ProductId) -> Result<(), CartError> {
        self.store.remove(id);
        self.persist()
    }

    /// Adjust a cart entry's quantity by `delta` (negative to decrement).
    ///
    /// If the resulting quantity would drop to zero or below, the entry is
    /// removed. This is the sole decrement path; an entry never stays in
    /// the cart with quantity below one.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if the product has no cart entry;
    /// the cart is unchanged. Returns [`CartError::Persistence`] if the
    /// write-through save fails; the mutation is retained in memory.
    pub fn change_quantity(&mut self, id: ProductId, delta: i64) -> Result<(), CartError> {
        let current = self
            .store
            .find(id)
            .map(|e| i64::from(e.quantity))
            .ok_or(CartError::NotFound(id))?;

        let new_quantity = current.saturating_add(delta);
        if new_quantity <= 0 {
            self.store.remove(id);
        } else if let Some(entry) = self.store.find_mut(id) {
            entry.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        }

        self.persist()
    }

    /// Empty the cart.
    ///
    /// Called by the checkout flow after an order is acknowledged, and
    /// available to the UI directly.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Persistence`] if the write-through save fails.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.store.replace_all(Vec::new());
        self.persist()
    }

    /// Total number of units in the cart.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        views::total_item_count(self.store.all())
    }

    /// Total price of the cart.
    #[must_use]
    pub fn total_price(&self) -> Price {
        views::total_price(self.store.all())
    }

    /// The line-item summary shown before an order is submitted.
    #[must_use]
    pub fn checkout_summary(&self) -> CheckoutSummary {
        views::checkout_summary(self.store.all())
    }

    /// Start checkout: the summary for a non-empty cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EmptyCart`] if there is nothing to check out.
    pub fn begin_checkout(&self) -> Result<CheckoutSummary, CartError> {
        if self.store.is_empty() {
            return Err(CartError::EmptyCart);
        }
        Ok(self.checkout_summary())
    }

    /// Submit the cart as an order and clear it on acknowledgement.
    ///
    /// The cart is cleared only after the submitter accepts the order. If
    /// the save of the now-empty cart fails, the order still stands; the
    /// failure is logged and the emptied in-memory cart remains
    /// authoritative.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EmptyCart`] for an empty cart and
    /// [`CartError::Submit`] if the transport rejects the order; the cart
    /// is unchanged in both cases.
    pub fn place_order(
        &mut self,
        customer: CustomerDetails,
        submitter: &dyn OrderSubmitter,
    ) -> Result<Order, CartError> {
        let summary = self.begin_checkout()?;
        let order = Order::new(customer, summary);
        submitter.submit(&order)?;

        if let Err(e) = self.clear() {
            tracing::error!(error = %e, "order submitted but clearing the saved cart failed");
        }

        Ok(order)
    }

    fn persist(&self) -> Result<(), CartError> {
        self.storage.save(self.store.all()).map_err(|e| {
            tracing::error!(error = %e, "cart save failed; in-memory cart retained");
            CartError::Persistence(e)
        })
    }
}
