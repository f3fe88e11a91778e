use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

use crate::modules::cart::adapters::outbound::catalog::CatalogError;
use crate::modules::cart::adapters::outbound::toast::{CartOperation, render_error};
use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::decision::DecideError;
use crate::modules::cart::errors::CartError;

#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
}

pub fn status_for(error: &CartError) -> StatusCode {
    match error {
        CartError::Domain(DecideError::StockExceeded { .. }) => StatusCode::CONFLICT,
        CartError::Domain(DecideError::NotInCart(_)) => StatusCode::NOT_FOUND,
        CartError::Domain(DecideError::NonPositiveAmount(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        CartError::Catalog(CatalogError::NotFound(_)) => StatusCode::NOT_FOUND,
        CartError::Catalog(_) => StatusCode::BAD_GATEWAY,
        CartError::Slot(_) | CartError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn respond(operation: CartOperation, outcome: Result<Cart, CartError>) -> Response {
    match outcome {
        Ok(cart) => (StatusCode::OK, Json(cart)).into_response(),
        Err(error) => {
            let message = render_error(operation, &error)
                .map(|notification| notification.message)
                .unwrap_or_else(|| error.to_string());
            (status_for(&error), Json(ErrorBody { message })).into_response()
        }
    }
}
