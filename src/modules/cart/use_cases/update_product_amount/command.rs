use crate::modules::cart::core::product::ProductId;
use serde::Deserialize;

/// Sets the quantity of a product already in the cart. `amount` is signed so
/// that zero and negative requests reach the decider instead of failing at
/// the transport boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}
