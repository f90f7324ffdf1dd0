//! User handlers, including the cursor-paginated product listing.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::error::AppError;
use crate::requests::{CreateUserRequest, UriId, UserProductsQuery};
use crate::response::ApiResponse;
use crate::state::AppState;

pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    let user = state.service.create_user(req).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "user created successfully",
            json!({ "user": user }),
        )),
    ))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    UriId { id }.validate()?;
    let user = state.service.get_user(id).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "get user successfully",
            json!({ "user": user }),
        )),
    ))
}

pub async fn user_products(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<UserProductsQuery>,
) -> Result<impl IntoResponse, AppError> {
    UriId { id }.validate()?;
    query.validate()?;
    let connection = state.service.user_products(id, query).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "list user products successfully",
            json!({ "user": connection }),
        )),
    ))
}
