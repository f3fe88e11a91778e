use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::cart::adapters::inbound::graphql_error::to_graphql_error;
use crate::modules::cart::adapters::outbound::toast::CartOperation;
use crate::modules::cart::core::product::ProductId;
use crate::modules::cart::use_cases::get_cart::inbound::graphql::{GqlCartEntry, to_gql_cart};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AddProductMutation;

#[Object]
impl AddProductMutation {
    async fn add_product(&self, context: &Context<'_>, product_id: u64) -> GqlResult<Vec<GqlCartEntry>> {
        let state = context.data_unchecked::<AppState>();
        state
            .store
            .add_product(ProductId(product_id))
            .await
            .map(|cart| to_gql_cart(&cart))
            .map_err(|e| to_graphql_error(CartOperation::AddProduct, e))
    }
}
