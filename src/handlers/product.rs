// src/handlers/product.rs
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{info, instrument, Span};

use crate::dtos::product::ProductPayload;
use crate::error::AppError;
use crate::models::product::Product;
use crate::state::AppState;
use crate::validation::normalize_product;

const PRODUCT_NOT_FOUND: &str = "Product not found";

// GET /products - List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "The list of products", body = [Product]),
        (status = 404, description = "No products found"),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument(skip(state))]
pub async fn get_products(State(state): State<AppState>) -> Result<Response, AppError> {
    let products = state.products.list().await?;

    if products.is_empty() {
        let body = Json(json!({ "message": "No products found" }));
        return Ok((StatusCode::NOT_FOUND, body).into_response());
    }

    Ok(Json(products).into_response())
}

// GET /products/{id} - Get single product
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "The product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument(skip_all, fields(id))]
pub async fn get_product(
    id: Result<Path<i32>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<Product>, AppError> {
    let Path(id) = id?;
    Span::current().record("id", id);

    let product = state
        .products
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found(PRODUCT_NOT_FOUND))?;

    Ok(Json(product))
}

// POST /products - Create new product
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "The created product", body = Product),
        (status = 400, description = "Missing or invalid fields"),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument(skip_all)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let Json(payload) = payload?;
    let new_product = normalize_product(payload)?;

    let product = state.products.create(&new_product).await?;
    info!(product_id = product.product_id, "Product created");

    Ok((StatusCode::CREATED, Json(product)))
}

// PUT /products/{id} - Replace product
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "The product id")),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "The updated product", body = Product),
        (status = 400, description = "Missing or invalid fields"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument(skip_all, fields(id))]
pub async fn update_product(
    id: Result<Path<i32>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<Product>, AppError> {
    let Path(id) = id?;
    Span::current().record("id", id);
    let Json(payload) = payload?;
    let new_product = normalize_product(payload)?;

    let product = state
        .products
        .update(id, &new_product)
        .await?
        .ok_or_else(|| AppError::not_found(PRODUCT_NOT_FOUND))?;
    info!("Product updated");

    Ok(Json(product))
}

// DELETE /products/{id} - Delete product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "The product id")),
    responses(
        (status = 200, description = "The deleted product", body = Product),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument(skip_all, fields(id))]
pub async fn delete_product(
    id: Result<Path<i32>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<Product>, AppError> {
    let Path(id) = id?;
    Span::current().record("id", id);

    let product = state
        .products
        .delete(id)
        .await?
        .ok_or_else(|| AppError::not_found(PRODUCT_NOT_FOUND))?;
    info!("Product deleted");

    Ok(Json(product))
}
