// CartStore owns the cart for one session and is the only writer of its slot.
//
// Responsibilities
// - Rehydrate the cart from the persistent slot once, at creation.
// - Serialize mutations: the writer lock is held from the first read of the
//   current cart until the next snapshot is committed.
// - Commit a snapshot by persisting it first, then publishing it in memory.
// - Report every mutating outcome to the notifier.
//
// The mutating operations are implemented next to their use case, see
// use_cases/*/handler.rs.

use crate::modules::cart::adapters::outbound::catalog::Catalog;
use crate::modules::cart::adapters::outbound::toast::{CartOperation, render};
use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::errors::CartError;
use crate::shared::infrastructure::notifier::Notifier;
use crate::shared::infrastructure::persistent_slot::PersistentSlot;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard, RwLock};
use tracing::{debug, error, info, instrument};

pub const CART_SLOT_KEY: &str = "@RocketShoes:cart";

pub struct CartStore {
    pub(crate) catalog: Arc<dyn Catalog>,
    slot: Arc<dyn PersistentSlot>,
    notifier: Arc<dyn Notifier>,
    cart: RwLock<Cart>,
    writer: Mutex<()>,
}

impl CartStore {
    /// Build a store, restoring the cart persisted under [`CART_SLOT_KEY`].
    ///
    /// # Errors
    ///
    /// Fails when the slot cannot be read or holds a snapshot that is not a
    /// valid cart.
    #[instrument(skip_all)]
    pub async fn load(
        catalog: Arc<dyn Catalog>,
        slot: Arc<dyn PersistentSlot>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, CartError> {
        let cart = match slot.get(CART_SLOT_KEY).await? {
            Some(snapshot) => serde_json::from_str::<Cart>(&snapshot)?,
            None => Cart::new(),
        };
        info!(entries = cart.len(), "cart restored");

        Ok(Self {
            catalog,
            slot,
            notifier,
            cart: RwLock::new(cart),
            writer: Mutex::new(()),
        })
    }

    /// Last committed snapshot. Never waits on an in-flight lookup.
    pub async fn cart(&self) -> Cart {
        self.cart.read().await.clone()
    }

    pub(crate) async fn begin(&self) -> (MutexGuard<'_, ()>, Cart) {
        let guard = self.writer.lock().await;
        let current = self.cart().await;
        (guard, current)
    }

    /// Persist `next`, then publish it. On a persistence failure the
    /// previous snapshot stays in place, in memory and in the slot.
    pub(crate) async fn commit(&self, _writer: &MutexGuard<'_, ()>, next: Cart) -> Result<Cart, CartError> {
        let snapshot = serde_json::to_string(&next)?;
        self.slot.set(CART_SLOT_KEY, &snapshot).await?;
        *self.cart.write().await = next.clone();
        debug!(entries = next.len(), "cart committed");
        Ok(next)
    }

    pub(crate) async fn report(&self, operation: CartOperation, outcome: &Result<Cart, CartError>) {
        if let Err(e) = outcome {
            match e {
                CartError::Domain(reason) => debug!(?operation, %reason, "cart operation rejected"),
                other => error!(?operation, error = %other, "cart operation failed"),
            }
        }
        if let Some(notification) = render(operation, outcome) {
            self.notifier.notify(notification).await;
        }
    }
}
