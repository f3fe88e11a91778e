// Maps the outcome of a cart operation to the message shown to the user.
//
// Message text lives here so the core and the store only deal in typed outcomes.
// Returns None where the user must not be notified: a successful remove or
// amount change, and a non-positive amount request.

use crate::modules::cart::core::decision::DecideError;
use crate::modules::cart::errors::CartError;
use crate::shared::infrastructure::notifier::Notification;

pub const PRODUCT_ADDED: &str = "Produto incluído no carrinho";
pub const OUT_OF_STOCK: &str = "Quantidade solicitada fora de estoque";
pub const ADD_FAILED: &str = "Erro na adição do produto";
pub const REMOVE_FAILED: &str = "Erro na remoção do produto";
pub const UPDATE_FAILED: &str = "Erro na alteração de quantidade do produto";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    AddProduct,
    RemoveProduct,
    UpdateProductAmount,
}

impl CartOperation {
    fn failure_message(self) -> &'static str {
        match self {
            Self::AddProduct => ADD_FAILED,
            Self::RemoveProduct => REMOVE_FAILED,
            Self::UpdateProductAmount => UPDATE_FAILED,
        }
    }
}

pub fn render<T>(operation: CartOperation, outcome: &Result<T, CartError>) -> Option<Notification> {
    match (operation, outcome) {
        (CartOperation::AddProduct, Ok(_)) => Some(Notification::success(PRODUCT_ADDED)),
        (_, Ok(_)) => None,
        (_, Err(error)) => render_error(operation, error),
    }
}

pub fn render_error(operation: CartOperation, error: &CartError) -> Option<Notification> {
    match error.domain() {
        Some(DecideError::NonPositiveAmount(_)) => None,
        Some(DecideError::StockExceeded { .. }) => Some(Notification::error(OUT_OF_STOCK)),
        _ => Some(Notification::error(operation.failure_message())),
    }
}

#[cfg(test)]
mod cart_toast_tests {
    use super::*;
    use crate::modules::cart::adapters::outbound::catalog::CatalogError;
    use crate::modules::cart::core::product::ProductId;
    use crate::shared::infrastructure::notifier::Severity;
    use rstest::rstest;

    fn stock_exceeded() -> CartError {
        CartError::Domain(DecideError::StockExceeded {
            product_id: ProductId(1),
            requested: 2,
            available: 1,
        })
    }

    #[rstest]
    fn it_should_only_announce_successful_additions() {
        let added = render(CartOperation::AddProduct, &Ok::<(), CartError>(()));
        assert_eq!(added, Some(Notification::success(PRODUCT_ADDED)));
        assert_eq!(render(CartOperation::RemoveProduct, &Ok::<(), CartError>(())), None);
        assert_eq!(render(CartOperation::UpdateProductAmount, &Ok::<(), CartError>(())), None);
    }

    #[rstest]
    #[case(CartOperation::AddProduct)]
    #[case(CartOperation::UpdateProductAmount)]
    fn it_should_report_stock_shortage_with_a_specific_message(#[case] operation: CartOperation) {
        let notification = render_error(operation, &stock_exceeded()).unwrap();
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.message, OUT_OF_STOCK);
    }

    #[rstest]
    #[case(CartOperation::AddProduct, ADD_FAILED)]
    #[case(CartOperation::RemoveProduct, REMOVE_FAILED)]
    #[case(CartOperation::UpdateProductAmount, UPDATE_FAILED)]
    fn it_should_map_transport_failures_to_one_message_per_operation(
        #[case] operation: CartOperation,
        #[case] expected: &str,
    ) {
        let error = CartError::Catalog(CatalogError::Request("timeout".into()));
        assert_eq!(render_error(operation, &error), Some(Notification::error(expected)));
    }

    #[rstest]
    fn it_should_report_missing_products_with_the_operation_message() {
        let error = CartError::Domain(DecideError::NotInCart(ProductId(4)));
        assert_eq!(
            render_error(CartOperation::RemoveProduct, &error),
            Some(Notification::error(REMOVE_FAILED))
        );
    }

    #[rstest]
    fn it_should_stay_silent_on_non_positive_amounts() {
        let error = CartError::Domain(DecideError::NonPositiveAmount(0));
        assert_eq!(render_error(CartOperation::UpdateProductAmount, &error), None);
    }
}
