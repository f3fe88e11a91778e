// Pure decision for adding one unit of a product.
//
// Responsibilities
// - Compute the desired amount: current amount + 1, or 1 for a new product.
// - Reject when the desired amount exceeds the available stock.
// - Tell the handler whether to increment in place or fetch and append.

use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::decision::{DecideError, ensure_in_stock};
use crate::modules::cart::core::product::{ProductId, StockInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddPlan {
    Increment { to: u32 },
    Append,
}

pub fn decide_add(cart: &Cart, product_id: ProductId, stock: &StockInfo) -> Result<AddPlan, DecideError> {
    let current = cart.amount_of(product_id);
    let desired = current.map_or(1, |amount| amount.saturating_add(1));
    ensure_in_stock(product_id, desired, stock.amount)?;
    Ok(match current {
        Some(_) => AddPlan::Increment { to: desired },
        None => AddPlan::Append,
    })
}
