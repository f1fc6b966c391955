//! The persisted cart store.

use crate::cart::cart::non_empty;
use crate::cart::{CartTotals, LineItem, LineItemKey};
use crate::catalog::{Product, Specification};
use crate::error::CommerceError;
use crate::money::Price;
use shop_cache::{Cache, KvStore};

/// Storage key holding the JSON array of line items.
pub const CART_STORAGE_KEY: &str = "ddhj_cart";

/// Sole owner of the shopping cart.
///
/// The store is an explicit object: construct one per session with
/// [`CartStore::open`] and hand it to whatever needs the cart. Every
/// mutating method finishes by writing the whole cart back to storage
/// before it returns, so the persisted copy never lags the in-memory one.
///
/// # Example
///
/// ```rust,ignore
/// let mut cart = CartStore::open(FileStore::open(dir)?);
/// let key = cart.add_to_cart(&product, Some(&spec), 2, "Snacks");
/// cart.update_quantity(&key, 5);
/// println!("{} items, {}", cart.total_count(), cart.total_price());
/// ```
#[derive(Debug)]
pub struct CartStore<S: KvStore> {
    items: Vec<LineItem>,
    cache: Cache<S>,
}

impl<S: KvStore> CartStore<S> {
    /// Open the cart persisted in `store`.
    ///
    /// Missing data gives an empty cart. Unreadable or corrupt data is
    /// logged and also gives an empty cart; this never fails.
    pub fn open(store: S) -> Self {
        let cache = Cache::new(store);
        let items = match cache.get::<Vec<LineItem>>(CART_STORAGE_KEY) {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::error!(error = %e, key = CART_STORAGE_KEY, "Failed to parse saved cart");
                Vec::new()
            }
        };
        tracing::debug!(items = items.len(), "cart loaded");
        Self { items, cache }
    }

    /// Line items in display (insertion) order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up an item by its handle.
    pub fn get(&self, key: &LineItemKey) -> Option<&LineItem> {
        self.items.iter().find(|i| i.key() == *key)
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all items.
    pub fn total_count(&self) -> i64 {
        self.items
            .iter()
            .map(|i| i.quantity)
            .fold(0, i64::saturating_add)
    }

    /// Sum of price times quantity across all items.
    pub fn total_price(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Both totals and the line count in one value.
    pub fn totals(&self) -> CartTotals {
        CartTotals::of(&self.items)
    }

    /// Add `quantity` of a product (and optional specification).
    ///
    /// If the cart already holds the same `(product, specification)` pair
    /// its quantity grows and, when `category_name` is non-empty, its
    /// category is replaced. Otherwise a new item is appended. Returns the
    /// handle of the affected item.
    pub fn add_to_cart(
        &mut self,
        product: &Product,
        spec: Option<&Specification>,
        quantity: i64,
        category_name: &str,
    ) -> LineItemKey {
        let key = LineItemKey::new(product.id, spec.map(|s| s.id));

        match self.items.iter_mut().find(|i| i.key() == key) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(quantity);
                if let Some(category) = non_empty(category_name) {
                    existing.category_name = Some(category);
                }
            }
            None => {
                self.items
                    .push(LineItem::new(product, spec, quantity, category_name));
            }
        }

        tracing::debug!(item = %key, quantity, "added to cart");
        self.persist();
        key
    }

    /// Add a single unit with no category label.
    pub fn add_one(&mut self, product: &Product, spec: Option<&Specification>) -> LineItemKey {
        self.add_to_cart(product, spec, 1, "")
    }

    /// Set an item's quantity, removing it when `quantity <= 0`.
    ///
    /// A handle that no longer matches any item is a no-op. Returns whether
    /// an item was changed.
    pub fn update_quantity(&mut self, key: &LineItemKey, quantity: i64) -> bool {
        let changed = if quantity <= 0 {
            match self.items.iter().position(|i| i.key() == *key) {
                Some(index) => {
                    self.items.remove(index);
                    true
                }
                None => false,
            }
        } else {
            match self.items.iter_mut().find(|i| i.key() == *key) {
                Some(item) => {
                    item.quantity = quantity;
                    true
                }
                None => false,
            }
        };

        if changed {
            tracing::debug!(item = %key, quantity, "cart quantity updated");
            self.persist();
        }
        changed
    }

    /// Remove an item. Same as setting its quantity to zero.
    pub fn remove(&mut self, key: &LineItemKey) -> bool {
        self.update_quantity(key, 0)
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.items.clear();
        tracing::debug!("cart cleared");
        self.persist();
    }

    /// Borrow the backing store.
    pub fn store(&self) -> &S {
        self.cache.store()
    }

    /// Post-mutation hook: overwrite the persisted copy with the current
    /// items. Write failures are logged and otherwise ignored.
    fn persist(&self) {
        if let Err(e) = self.write_snapshot() {
            tracing::warn!(error = %e, key = CART_STORAGE_KEY, "Failed to save cart");
        }
    }

    fn write_snapshot(&self) -> Result<(), CommerceError> {
        self.cache.set(CART_STORAGE_KEY, &self.items)?;
        Ok(())
    }
}
