//! HTTP request handlers - thin layer that delegates to the product API

use super::error::{map_storage_error, Problem};
use crate::contract::{ProductApi, ProductDto};
use axum::{extract::Path, Extension, Json};
use std::sync::Arc;

/// Shared handle the routes are layered with
pub type ApiHandle = Arc<dyn ProductApi>;

/// Get a product by id
#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = "product",
    params(("id" = i32, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product found", body = ProductDto),
        (status = 404, description = "No product with this id"),
        (status = 500, description = "Storage failure"),
    )
)]
pub async fn get_product(
    Extension(api): Extension<ApiHandle>,
    Path(id): Path<i32>,
) -> Result<Json<ProductDto>, Problem> {
    api.get_product(id)
        .await
        .map_err(map_storage_error)?
        .map(Json)
        .ok_or_else(|| Problem::product_not_found(id))
}

/// Create or overwrite a product
#[utoipa::path(
    post,
    path = "/product/",
    tag = "product",
    request_body = ProductDto,
    responses(
        (status = 200, description = "Product stored", body = bool),
        (status = 500, description = "Storage failure"),
    )
)]
pub async fn save_product(
    Extension(api): Extension<ApiHandle>,
    Json(product): Json<ProductDto>,
) -> Result<Json<bool>, Problem> {
    let saved = api.save_product(product).await.map_err(map_storage_error)?;
    Ok(Json(saved))
}

/// Delete a product; absent ids are not an error
#[utoipa::path(
    delete,
    path = "/product/{id}",
    tag = "product",
    params(("id" = i32, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product removed or never existed", body = bool),
        (status = 500, description = "Storage failure"),
    )
)]
pub async fn delete_product(
    Extension(api): Extension<ApiHandle>,
    Path(id): Path<i32>,
) -> Result<Json<bool>, Problem> {
    let deleted = api.delete_product(id).await.map_err(map_storage_error)?;
    Ok(Json(deleted))
}
