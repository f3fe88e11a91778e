use async_graphql_axum::GraphQL;
use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::cart::use_cases::add_product::inbound::http as add_http;
use crate::modules::cart::use_cases::get_cart::inbound::http as get_http;
use crate::modules::cart::use_cases::remove_product::inbound::http as remove_http;
use crate::modules::cart::use_cases::update_product_amount::inbound::http as update_http;
use crate::shell::graphql::build_schema;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/cart", get(get_http::handle))
        .route(
            "/cart/products/{product_id}",
            post(add_http::handle).delete(remove_http::handle),
        )
        .route("/cart/products/{product_id}/amount", put(update_http::handle))
        .route_service("/graphql", GraphQL::new(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
