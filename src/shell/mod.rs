// Composition root for the cart bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Load the cart store and expose it over HTTP and GraphQL.

pub mod graphql;
pub mod http;
pub mod state;

use crate::config::AppConfig;
use crate::modules::cart::adapters::outbound::catalog_http::HttpCatalog;
use crate::modules::cart::store::CartStore;
use crate::shared::infrastructure::notifier::tracing_log::TracingNotifier;
use crate::shared::infrastructure::persistent_slot::file::FileSlot;
use crate::shell::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let catalog = HttpCatalog::new(&config.catalog_url, config.catalog_timeout)?;
    let slot = FileSlot::open(&config.slot_path).await?;
    info!(
        catalog = %catalog.base_url(),
        slot = %slot.path().display(),
        "adapters ready"
    );

    let store = CartStore::load(Arc::new(catalog), Arc::new(slot), Arc::new(TracingNotifier)).await?;
    Ok(AppState {
        store: Arc::new(store),
    })
}
