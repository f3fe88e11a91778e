use crate::modules::cart::adapters::outbound::catalog_in_memory::InMemoryCatalog;
use crate::modules::cart::store::CartStore;
use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use crate::shared::infrastructure::persistent_slot::in_memory::InMemorySlot;
use crate::shell::state::AppState;
use crate::tests::fixtures::products::load_catalog_records;
use rstest::fixture;
use std::sync::Arc;

pub struct TestCart {
    pub store: Arc<CartStore>,
    pub catalog: Arc<InMemoryCatalog>,
    pub slot: Arc<InMemorySlot>,
    pub notifier: Arc<InMemoryNotifier>,
}

pub fn make_catalog() -> InMemoryCatalog {
    load_catalog_records()
        .into_iter()
        .fold(InMemoryCatalog::new(), |catalog, record| {
            catalog.with_product(record.product, record.stock)
        })
}

pub async fn make_test_cart(slot: InMemorySlot) -> TestCart {
    let catalog = Arc::new(make_catalog());
    let slot = Arc::new(slot);
    let notifier = Arc::new(InMemoryNotifier::new());
    let store = CartStore::load(catalog.clone(), slot.clone(), notifier.clone())
        .await
        .expect("CartStore > load failed");
    TestCart {
        store: Arc::new(store),
        catalog,
        slot,
        notifier,
    }
}

#[fixture]
pub async fn before_each() -> TestCart {
    make_test_cart(InMemorySlot::new()).await
}

pub async fn make_test_state() -> (AppState, TestCart) {
    let test = make_test_cart(InMemorySlot::new()).await;
    let state = AppState {
        store: test.store.clone(),
    };
    (state, test)
}
