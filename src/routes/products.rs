use axum::{routing::get, Router};

use crate::handlers::product;
use crate::state::AppState;

/// `/products` collection and `/products/{id}` item routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(product::get_products).post(product::create_product),
        )
        .route(
            "/products/{id}",
            get(product::get_product)
                .put(product::update_product)
                .delete(product::delete_product),
        )
}
