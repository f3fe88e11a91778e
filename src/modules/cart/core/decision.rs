use crate::modules::cart::core::product::ProductId;

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum DecideError {
    #[error("requested {requested} of product {product_id}, only {available} in stock")]
    StockExceeded {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),

    #[error("amount must be at least 1, got {0}")]
    NonPositiveAmount(i64),
}

/// Stock ceiling shared by every quantity-increasing operation.
pub fn ensure_in_stock(product_id: ProductId, requested: u32, available: u32) -> Result<(), DecideError> {
    if requested > available {
        return Err(DecideError::StockExceeded {
            product_id,
            requested,
            available,
        });
    }
    Ok(())
}
