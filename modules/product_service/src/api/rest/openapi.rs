//! OpenAPI document for the product routes

use super::handlers;
use crate::contract::ProductDto;
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::get_product, handlers::save_product, handlers::delete_product),
    components(schemas(ProductDto)),
    tags((name = "product", description = "Product records"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
