use crate::modules::cart::adapters::outbound::toast::CartOperation;
use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::errors::CartError;
use crate::modules::cart::store::CartStore;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::modules::cart::use_cases::update_product_amount::decide::{decide_update, precheck_update};
use tracing::instrument;

impl CartStore {
    /// Set the amount of a product in the cart. Amounts below 1 are rejected
    /// without a lookup and without notifying the user; removing a product is
    /// `remove_product`'s job. A product missing from the cart is still
    /// checked against stock and then leaves the cart unchanged.
    #[instrument(skip(self), fields(product_id = %command.product_id, amount = command.amount))]
    pub async fn update_product_amount(&self, command: UpdateProductAmount) -> Result<Cart, CartError> {
        let outcome = self.try_update_product_amount(command).await;
        self.report(CartOperation::UpdateProductAmount, &outcome).await;
        outcome
    }

    async fn try_update_product_amount(&self, command: UpdateProductAmount) -> Result<Cart, CartError> {
        let (writer, current) = self.begin().await;
        precheck_update(&command)?;
        let stock = self.catalog.stock(command.product_id).await?;
        let next = decide_update(&current, &command, &stock)?;
        self.commit(&writer, next).await
    }
}
