//! The store state manager.
//!
//! [`Store`] owns the catalog snapshot, the cart, the wishlist, and the
//! session flag, and funnels every mutation through its methods. It is a
//! single owned object - `&mut self` enforces the single-writer invariant
//! at compile time, so no locking is needed or present.
//!
//! After every mutation the cart, wishlist, and auth flag are serialized
//! and written to the backing [`StateStore`] as three independent records.
//! Writes are fire-and-forget: a failed write is logged and swallowed, and
//! the in-memory state stays authoritative for the running session. On
//! construction the three records are read back with per-record failure
//! isolation - a missing or corrupt record falls back to its default
//! without touching the other two.

use serde::Serialize;
use serde::de::DeserializeOwned;

use velvet_fig_core::{Price, ProductId};

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::models::{CartLine, Product};
use crate::persist::{JsonFileStore, PersistError, StateStore, keys};

/// The shared storefront state: catalog, cart, wishlist, session flag.
pub struct Store {
    catalog: Catalog,
    cart: Vec<CartLine>,
    wishlist: Vec<Product>,
    authenticated: bool,
    backend: Box<dyn StateStore>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("catalog_len", &self.catalog.len())
            .field("cart", &self.cart)
            .field("wishlist_len", &self.wishlist.len())
            .field("authenticated", &self.authenticated)
            .finish_non_exhaustive()
    }
}

impl Store {
    /// Create a store over `backend`, rehydrating persisted state.
    ///
    /// Each of the three records is adopted if present and parseable and
    /// falls back to empty/`false` otherwise. A corrupt record is reported
    /// via `tracing::warn!` and never aborts construction.
    #[must_use]
    pub fn new(catalog: Catalog, backend: Box<dyn StateStore>) -> Self {
        let cart = load_record(backend.as_ref(), keys::CART);
        let wishlist = load_record(backend.as_ref(), keys::WISHLIST);
        let authenticated = load_record(backend.as_ref(), keys::AUTH);

        Self {
            catalog,
            cart,
            wishlist,
            authenticated,
            backend,
        }
    }

    /// Open a store with a JSON-file backend at the configured data dir.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] if the data directory cannot be created.
    pub fn open(config: &StorefrontConfig, catalog: Catalog) -> Result<Self, PersistError> {
        let backend = JsonFileStore::open(config.data_dir())?;
        Ok(Self::new(catalog, Box::new(backend)))
    }

    // =========================================================================
    // Read access
    // =========================================================================

    /// The immutable catalog snapshot.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    /// Wishlist entries in insertion order.
    #[must_use]
    pub fn wishlist(&self) -> &[Product] {
        &self.wishlist
    }

    /// The session authentication flag.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Sum of `price * quantity` over the cart. Zero for an empty cart.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.cart.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over the cart. Zero for an empty cart.
    #[must_use]
    pub fn items_count(&self) -> u32 {
        self.cart.iter().map(|line| line.quantity).sum()
    }

    // =========================================================================
    // Cart mutations
    // =========================================================================

    /// Add `quantity` units of `product` to the cart.
    ///
    /// If the product is already in the cart its line quantity is
    /// incremented and its selections are left untouched. Otherwise a new
    /// line is appended, defaulting unset selections to the product's
    /// first available color and size.
    pub fn add_to_cart(
        &mut self,
        product: &Product,
        quantity: u32,
        color: Option<&str>,
        size: Option<&str>,
    ) {
        if let Some(line) = self.cart.iter_mut().find(|line| line.id() == product.id) {
            line.quantity += quantity;
        } else {
            self.cart
                .push(CartLine::new(product.clone(), quantity, color, size));
        }
        self.persist();
    }

    /// Remove the cart line for `id`, if any.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart.retain(|line| line.id() != id);
        self.persist();
    }

    /// Set the quantity of the cart line for `id` verbatim.
    ///
    /// A quantity of zero removes the line. No-op if the id is not in the
    /// cart.
    pub fn update_cart_item(&mut self, id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_from_cart(id);
            return;
        }
        if let Some(line) = self.cart.iter_mut().find(|line| line.id() == id) {
            line.quantity = quantity;
        }
        self.persist();
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist();
    }

    // =========================================================================
    // Wishlist mutations
    // =========================================================================

    /// Add `product` to the wishlist. Idempotent per product id.
    pub fn add_to_wishlist(&mut self, product: &Product) {
        if self.wishlist.iter().any(|p| p.id == product.id) {
            return;
        }
        self.wishlist.push(product.clone());
        self.persist();
    }

    /// Remove the wishlist entry for `id`, if any.
    pub fn remove_from_wishlist(&mut self, id: ProductId) {
        self.wishlist.retain(|p| p.id != id);
        self.persist();
    }

    /// Empty the wishlist.
    pub fn clear_wishlist(&mut self) {
        self.wishlist.clear();
        self.persist();
    }

    /// Move `product` from the wishlist to the cart.
    ///
    /// Adds one unit to the cart, then removes the wishlist entry. Removal
    /// of an id that was never wishlisted is a no-op, so calling this on a
    /// non-wishlist product still adds it to the cart.
    pub fn move_to_cart(&mut self, product: &Product) {
        self.add_to_cart(product, 1, None, None);
        self.remove_from_wishlist(product.id);
    }

    // =========================================================================
    // Session flag
    // =========================================================================

    /// Set the authentication flag. No credential check; the flag is
    /// purely presentational.
    pub fn login(&mut self) {
        self.authenticated = true;
        self.persist();
    }

    /// Clear the authentication flag.
    pub fn logout(&mut self) {
        self.authenticated = false;
        self.persist();
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write all three records. Each failure is logged and swallowed
    /// independently so one bad write never blocks the others.
    fn persist(&mut self) {
        write_record(self.backend.as_mut(), keys::CART, &self.cart);
        write_record(self.backend.as_mut(), keys::WISHLIST, &self.wishlist);
        write_record(self.backend.as_mut(), keys::AUTH, &self.authenticated);
    }
}

/// Read one record, falling back to `T::default()` when it is absent,
/// unreadable, or unparseable.
fn load_record<T: DeserializeOwned + Default>(backend: &dyn StateStore, key: &str) -> T {
    let raw = match backend.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read persisted record, using default");
            return T::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to parse persisted record, using default");
            T::default()
        }
    }
}

/// Serialize and write one record, logging failure instead of returning it.
fn write_record<T: Serialize>(backend: &mut dyn StateStore, key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!(key, error = %e, "failed to serialize record, state not persisted");
            return;
        }
    };
    if let Err(e) = backend.put(key, &raw) {
        tracing::error!(key, error = %e, "failed to write record, in-memory state still authoritative");
    }
}
