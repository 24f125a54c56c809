//! Route table and handlers for the `/products` resource.
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | GET | `/products` | 200, all products |
//! | GET | `/products/:id` | 200, the product |
//! | POST | `/products` | 201, the created product |
//! | PUT | `/products/:id` | 200, the merged product |
//! | DELETE | `/products/:id` | 200, the removed product |
//!
//! Any other method or path is a 404 with `{"message": "Sahifa topilmadi"}`.

use crate::clients::ProductClient;
use crate::http::response::ApiError;
use crate::model::{PathId, Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use tracing::instrument;

/// Build the axum `Router` for the products API over `client`.
pub fn router(client: ProductClient) -> Router {
    Router::new()
        .route(
            "/products",
            get(list_products)
                .post(create_product)
                .fallback(route_not_found),
        )
        .route(
            "/products/:id",
            get(get_product)
                .put(update_product)
                .delete(delete_product)
                .fallback(route_not_found),
        )
        .fallback(route_not_found)
        .with_state(client)
}

/// `GET /products`
#[instrument(skip(client))]
async fn list_products(
    State(client): State<ProductClient>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(client.list_products().await?))
}

/// `GET /products/:id`
#[instrument(skip(client))]
async fn get_product(
    State(client): State<ProductClient>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Product>, ApiError> {
    let id = product_id(id)?;
    Ok(Json(client.get_product(id).await?))
}

/// `POST /products`
#[instrument(skip(client, body))]
async fn create_product(
    State(client): State<ProductClient>,
    body: Bytes,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let params = ProductCreate::try_from(parse_body(&body)?)?;
    let product = client.create_product(params).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /products/:id`
///
/// The body is checked before the id, so a bad body is a 400 even for an unknown id.
#[instrument(skip(client, body))]
async fn update_product(
    State(client): State<ProductClient>,
    id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<Product>, ApiError> {
    let update = ProductUpdate::try_from(parse_body(&body)?)?;
    let id = product_id(id)?;
    Ok(Json(client.update_product(id, update).await?))
}

/// `DELETE /products/:id`
#[instrument(skip(client))]
async fn delete_product(
    State(client): State<ProductClient>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Product>, ApiError> {
    let id = product_id(id)?;
    Ok(Json(client.delete_product(id).await?))
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// A path segment that reads as no number can't name a stored product.
///
/// A segment axum can't decode (e.g. `%FF`, not UTF-8) has no digits either.
fn product_id(
    path: Result<Path<String>, PathRejection>,
) -> Result<ProductId, ProductError> {
    let Ok(Path(raw)) = path else {
        return Err(ProductError::NotFound("NaN".into()));
    };
    match PathId::parse(&raw) {
        PathId::Id(id) => Ok(id),
        unmatched => Err(ProductError::NotFound(unmatched.to_string())),
    }
}

fn parse_body(body: &[u8]) -> Result<Value, ProductError> {
    serde_json::from_slice(body).map_err(|_| ProductError::InvalidJson)
}
