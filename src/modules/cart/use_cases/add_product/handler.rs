use crate::modules::cart::adapters::outbound::toast::CartOperation;
use crate::modules::cart::core::cart::{Cart, CartEntry};
use crate::modules::cart::core::product::ProductId;
use crate::modules::cart::errors::CartError;
use crate::modules::cart::store::CartStore;
use crate::modules::cart::use_cases::add_product::decide::{AddPlan, decide_add};
use tracing::{debug, instrument};

impl CartStore {
    /// Add one unit of `product_id`, fetching the product when it is new to
    /// the cart. Stock is checked against a fresh lookup on every call.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let outcome = self.try_add_product(product_id).await;
        self.report(CartOperation::AddProduct, &outcome).await;
        outcome
    }

    async fn try_add_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let (writer, current) = self.begin().await;
        let stock = self.catalog.stock(product_id).await?;

        let next = match decide_add(&current, product_id, &stock)? {
            AddPlan::Increment { to } => {
                debug!(amount = to, "incrementing cart entry");
                current.with_incremented(product_id)
            }
            AddPlan::Append => {
                let product = self.catalog.product(product_id).await?;
                debug!("appending cart entry");
                current.with_appended(CartEntry::from_product(product))
            }
        };

        self.commit(&writer, next).await
    }
}
