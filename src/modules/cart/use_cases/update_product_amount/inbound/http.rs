use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::cart::adapters::inbound::http_response::{ErrorBody, respond};
use crate::modules::cart::adapters::outbound::toast::CartOperation;
use crate::modules::cart::core::product::ProductId;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateProductAmountBody {
    pub amount: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
    body: Result<Json<UpdateProductAmountBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            let message = rejection.body_text();
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorBody { message })).into_response();
        }
    };

    let command = UpdateProductAmount {
        product_id,
        amount: body.amount,
    };
    respond(
        CartOperation::UpdateProductAmount,
        state.store.update_product_amount(command).await,
    )
}
