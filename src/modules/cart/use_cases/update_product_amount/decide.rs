// Pure decisions for setting a product amount.
//
// Responsibilities
// - Before any lookup: reject amounts below 1.
// - After the stock lookup: reject amounts above stock, otherwise produce the next cart.
//   A product missing from the cart leaves the cart as it is.

use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::decision::{DecideError, ensure_in_stock};
use crate::modules::cart::core::product::StockInfo;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;

pub fn precheck_update(command: &UpdateProductAmount) -> Result<u32, DecideError> {
    if command.amount < 1 {
        return Err(DecideError::NonPositiveAmount(command.amount));
    }
    Ok(u32::try_from(command.amount).unwrap_or(u32::MAX))
}

pub fn decide_update(
    cart: &Cart,
    command: &UpdateProductAmount,
    stock: &StockInfo,
) -> Result<Cart, DecideError> {
    let amount = precheck_update(command)?;
    ensure_in_stock(command.product_id, amount, stock.amount)?;
    Ok(cart.with_amount(command.product_id, amount))
}
