use axum::{Json, extract::State};

use crate::modules::cart::core::cart::Cart;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Json<Cart> {
    Json(state.store.cart().await)
}

#[cfg(test)]
mod get_cart_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::handle;
    use crate::modules::cart::core::product::ProductId;
    use crate::tests::fixtures::store::make_test_state;

    #[tokio::test]
    async fn it_should_return_the_current_snapshot() {
        let (state, test) = make_test_state().await;
        test.store.add_product(ProductId(3)).await.unwrap();
        test.store.add_product(ProductId(1)).await.unwrap();

        let response = Router::new()
            .route("/cart", get(handle))
            .with_state(state)
            .oneshot(Request::get("/cart").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json[0]["id"], 3);
        assert_eq!(json[1]["id"], 1);
        assert_eq!(json[1]["title"], "Tênis de Caminhada Leve Confortável");
    }
}
