use crate::modules::cart::store::CartStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CartStore>,
}
