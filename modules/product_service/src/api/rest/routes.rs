//! Route registration

use super::{handlers, openapi};
use crate::contract::ProductApi;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

/// Register the product routes and the OpenAPI document on `router`
pub fn register_routes(router: Router, api: Arc<dyn ProductApi>) -> Router {
    router
        .route("/product/", post(handlers::save_product))
        .route(
            "/product/{id}",
            get(handlers::get_product).delete(handlers::delete_product),
        )
        .route("/openapi.json", get(openapi::openapi_json))
        .layer(Extension(api))
}
