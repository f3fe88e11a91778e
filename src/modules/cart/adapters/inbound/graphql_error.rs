use async_graphql::{Error, ErrorExtensions};

use crate::modules::cart::adapters::outbound::toast::{CartOperation, render_error};
use crate::modules::cart::core::decision::DecideError;
use crate::modules::cart::errors::CartError;

fn code_for(error: &CartError) -> &'static str {
    match error {
        CartError::Domain(DecideError::StockExceeded { .. }) => "OUT_OF_STOCK",
        CartError::Domain(DecideError::NotInCart(_)) => "NOT_IN_CART",
        CartError::Domain(DecideError::NonPositiveAmount(_)) => "NON_POSITIVE_AMOUNT",
        CartError::Catalog(_) => "CATALOG_UNAVAILABLE",
        CartError::Slot(_) | CartError::Serialization(_) => "INTERNAL",
    }
}

pub fn to_graphql_error(operation: CartOperation, error: CartError) -> Error {
    let message = render_error(operation, &error)
        .map(|notification| notification.message)
        .unwrap_or_else(|| error.to_string());
    let code = code_for(&error);
    Error::new(message).extend_with(|_, extensions| extensions.set("code", code))
}
