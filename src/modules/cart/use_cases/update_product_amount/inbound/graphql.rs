use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::cart::adapters::inbound::graphql_error::to_graphql_error;
use crate::modules::cart::adapters::outbound::toast::CartOperation;
use crate::modules::cart::core::product::ProductId;
use crate::modules::cart::use_cases::get_cart::inbound::graphql::{GqlCartEntry, to_gql_cart};
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateProductAmountMutation;

#[Object]
impl UpdateProductAmountMutation {
    async fn update_product_amount(
        &self,
        context: &Context<'_>,
        product_id: u64,
        amount: i64,
    ) -> GqlResult<Vec<GqlCartEntry>> {
        let state = context.data_unchecked::<AppState>();
        let command = UpdateProductAmount {
            product_id: ProductId(product_id),
            amount,
        };
        state
            .store
            .update_product_amount(command)
            .await
            .map(|cart| to_gql_cart(&cart))
            .map_err(|e| to_graphql_error(CartOperation::UpdateProductAmount, e))
    }
}
