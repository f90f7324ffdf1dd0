//! Product CRUD handlers: bind, validate, call the service, wrap the result
//! in the response envelope.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::error::AppError;
use crate::requests::{CreateProductRequest, ListProductsQuery, UpdateProductRequest, UriId};
use crate::response::ApiResponse;
use crate::state::AppState;

pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    let product = state.service.create_product(req).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "product created successfully",
            json!({ "product": product }),
        )),
    ))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    UriId { id }.validate()?;
    let product = state.service.get_product(id).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "get one product successfully",
            json!({ "product": product }),
        )),
    ))
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;
    let (products, pagination) = state.service.list_products(query).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "list products successfully",
            json!({ "products": products, "pagination": pagination }),
        )),
    ))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut req): Json<UpdateProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.id = id;
    req.validate()?;
    let product = state.service.update_product(req).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "update product successfully",
            json!({ "product": product }),
        )),
    ))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    UriId { id }.validate()?;
    let deleted = state.service.delete_product(id).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "product deleted successfully",
            json!({ "product": deleted }),
        )),
    ))
}
