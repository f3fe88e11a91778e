// End to end flow against the file-backed slot.
//
// - Mutate a cart through the public store API.
// - Reopen the slot file in a fresh store and assert the snapshot survived.

use cart_store::modules::cart::adapters::outbound::catalog_in_memory::InMemoryCatalog;
use cart_store::modules::cart::core::product::{Product, ProductId};
use cart_store::modules::cart::store::CartStore;
use cart_store::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use cart_store::shared::infrastructure::persistent_slot::file::FileSlot;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

fn catalog() -> InMemoryCatalog {
    let sneaker: Product = serde_json::from_value(json!({
        "id": 1,
        "title": "Tênis de Caminhada Leve Confortável",
        "price": 179.9
    }))
    .unwrap();
    let boot: Product = serde_json::from_value(json!({ "id": 2, "title": "Bota", "price": 259.0 })).unwrap();
    InMemoryCatalog::new().with_product(sneaker, 4).with_product(boot, 1)
}

async fn open_store(path: &PathBuf) -> CartStore {
    let slot = FileSlot::open(path).await.unwrap();
    CartStore::load(
        Arc::new(catalog()),
        Arc::new(slot),
        Arc::new(InMemoryNotifier::new()),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn cart_survives_a_restart() {
    let path = std::env::temp_dir().join(format!("cart_flow_{}.json", uuid::Uuid::now_v7()));

    let store = open_store(&path).await;
    store.add_product(ProductId(2)).await.unwrap();
    store.add_product(ProductId(1)).await.unwrap();
    store.add_product(ProductId(1)).await.unwrap();
    assert!(store.add_product(ProductId(2)).await.is_err());
    let before = store.cart().await;
    drop(store);

    let restarted = open_store(&path).await;
    let after = restarted.cart().await;

    assert_eq!(after, before);
    assert_eq!(after.entries()[0].id, ProductId(2));
    assert_eq!(after.amount_of(ProductId(1)), Some(2));

    let _ = tokio::fs::remove_file(&path).await;
}
