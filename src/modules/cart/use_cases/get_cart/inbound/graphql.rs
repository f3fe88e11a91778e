use async_graphql::{Context, Json, Object};

use crate::modules::cart::core::cart::{Cart, CartEntry};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlCartEntry {
    pub product_id: u64,
    pub amount: u32,
    /// Product attributes as served by the catalog.
    pub fields: Json<serde_json::Value>,
}

impl From<&CartEntry> for GqlCartEntry {
    fn from(entry: &CartEntry) -> Self {
        Self {
            product_id: entry.id.0,
            amount: entry.amount,
            fields: Json(serde_json::Value::Object(entry.fields.clone())),
        }
    }
}

pub fn to_gql_cart(cart: &Cart) -> Vec<GqlCartEntry> {
    cart.entries().iter().map(Into::into).collect()
}

#[derive(Default)]
pub struct CartQuery;

#[Object]
impl CartQuery {
    async fn cart(&self, context: &Context<'_>) -> Vec<GqlCartEntry> {
        let state = context.data_unchecked::<AppState>();
        to_gql_cart(&state.store.cart().await)
    }
}
