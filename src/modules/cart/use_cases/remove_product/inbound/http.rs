use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::modules::cart::adapters::inbound::http_response::respond;
use crate::modules::cart::adapters::outbound::toast::CartOperation;
use crate::modules::cart::core::product::ProductId;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(product_id): Path<ProductId>) -> Response {
    respond(CartOperation::RemoveProduct, state.store.remove_product(product_id).await)
}
