use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::decision::DecideError;
use crate::modules::cart::core::product::ProductId;

pub fn decide_remove(cart: &Cart, product_id: ProductId) -> Result<Cart, DecideError> {
    if cart.find(product_id).is_none() {
        return Err(DecideError::NotInCart(product_id));
    }
    Ok(cart.without(product_id))
}
