use crate::modules::cart::adapters::outbound::toast::CartOperation;
use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::product::ProductId;
use crate::modules::cart::errors::CartError;
use crate::modules::cart::store::CartStore;
use crate::modules::cart::use_cases::remove_product::decide::decide_remove;
use tracing::instrument;

impl CartStore {
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn remove_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let outcome = self.try_remove_product(product_id).await;
        self.report(CartOperation::RemoveProduct, &outcome).await;
        outcome
    }

    async fn try_remove_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let (writer, current) = self.begin().await;
        let next = decide_remove(&current, product_id)?;
        self.commit(&writer, next).await
    }
}
