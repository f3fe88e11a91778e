use crate::modules::cart::adapters::outbound::catalog_in_memory::InMemoryCatalog;
use crate::modules::cart::adapters::outbound::toast::{OUT_OF_STOCK, PRODUCT_ADDED};
use crate::modules::cart::core::product::ProductId;
use crate::modules::cart::store::{CART_SLOT_KEY, CartStore};
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::shared::infrastructure::notifier::Notification;
use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use crate::shared::infrastructure::persistent_slot::PersistentSlot;
use crate::shared::infrastructure::persistent_slot::in_memory::InMemorySlot;
use crate::tests::fixtures::products::make_product;
use crate::tests::fixtures::store::make_catalog;
use std::sync::Arc;

#[tokio::test]
async fn add_add_update_beyond_stock_then_remove() {
    let catalog = Arc::new(InMemoryCatalog::new().with_product(make_product(1), 5));
    let slot = Arc::new(InMemorySlot::new());
    let notifier = Arc::new(InMemoryNotifier::new());
    let store = CartStore::load(catalog, slot.clone(), notifier.clone())
        .await
        .unwrap();

    let cart = store.add_product(ProductId(1)).await.unwrap();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.amount_of(ProductId(1)), Some(1));

    let cart = store.add_product(ProductId(1)).await.unwrap();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.amount_of(ProductId(1)), Some(2));

    let result = store
        .update_product_amount(UpdateProductAmount {
            product_id: ProductId(1),
            amount: 10,
        })
        .await;
    assert!(result.is_err());
    assert_eq!(store.cart().await.amount_of(ProductId(1)), Some(2));

    let cart = store.remove_product(ProductId(1)).await.unwrap();
    assert!(cart.is_empty());
    assert_eq!(slot.get(CART_SLOT_KEY).await.unwrap().as_deref(), Some("[]"));

    assert_eq!(
        notifier.take().await,
        vec![
            Notification::success(PRODUCT_ADDED),
            Notification::success(PRODUCT_ADDED),
            Notification::error(OUT_OF_STOCK),
        ]
    );
}

#[tokio::test]
async fn reloading_the_store_restores_the_same_ordered_cart() {
    let slot = Arc::new(InMemorySlot::new());
    let first = CartStore::load(
        Arc::new(make_catalog()),
        slot.clone(),
        Arc::new(InMemoryNotifier::new()),
    )
    .await
    .unwrap();

    first.add_product(ProductId(3)).await.unwrap();
    first.add_product(ProductId(1)).await.unwrap();
    first.add_product(ProductId(2)).await.unwrap();
    first.add_product(ProductId(1)).await.unwrap();
    first
        .update_product_amount(UpdateProductAmount {
            product_id: ProductId(2),
            amount: 4,
        })
        .await
        .unwrap();

    let reloaded = CartStore::load(
        Arc::new(make_catalog()),
        slot,
        Arc::new(InMemoryNotifier::new()),
    )
    .await
    .unwrap();

    assert_eq!(reloaded.cart().await, first.cart().await);
    let ids: Vec<u64> = reloaded.cart().await.entries().iter().map(|e| e.id.0).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}
