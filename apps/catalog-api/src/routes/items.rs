//! # Item Routes
//!
//! ```text
//! POST   /items        create            201 Item
//! GET    /items        list / by name    200 [Item]
//! GET    /items/{id}   fetch             200 Item
//! PUT    /items/{id}   full replace      200 Item
//! DELETE /items/{id}   delete            200 {"message": ...}
//! ```
//!
//! Handlers validate, call the Repository, and map its errors. Nothing
//! here decides whether an operation is allowed.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_core::validation::{validate_item_fields, validate_matching_id, validate_page_limit};
use catalog_core::{Item, ItemFields, ItemId, Price};
use catalog_db::RepoError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, Span};

use crate::error::{ApiError, ApiResult, ErrorCode};
use crate::AppState;

// =============================================================================
// Request / Response Bodies
// =============================================================================

/// Body of `POST /items`.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
}

/// Body of `PUT /items/{id}`.
///
/// `id` may be echoed back but must then match the path.
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub id: Option<ItemId>,
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
}

/// Query string of `GET /items`.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub name: Option<String>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// =============================================================================
// Handlers
// =============================================================================

/// `POST /items`
#[instrument(skip_all, fields(name))]
pub async fn create_item(
    State(state): State<AppState>,
    body: Result<Json<CreateItemRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Item>)> {
    let Json(req) = body?;
    let fields = validate_item_fields(ItemFields::new(req.name, req.description, req.price))?;
    Span::current().record("name", fields.name.as_str());

    let item = state.db.items().create(&fields).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// `GET /items`
///
/// With a non-blank `name` (trimmed like stored names), returns that item
/// alone or an empty list. Otherwise pages through all items in id order.
#[instrument(skip_all)]
pub async fn list_items(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Item>>> {
    let Query(query) = query?;
    let items = state.db.items();

    let name = query
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty());

    if let Some(name) = name {
        debug!(name = %name, "Looking up item by name");
        return match items.fetch_by_name(name).await {
            Ok(item) => Ok(Json(vec![item])),
            Err(RepoError::NotFound(_)) => Ok(Json(Vec::new())),
            Err(e) => Err(e.into()),
        };
    }

    if let Some(limit) = query.limit {
        validate_page_limit(limit)?;
    }

    let page = items.fetch_all(query.skip, query.limit).await?;
    Ok(Json(page))
}

/// `GET /items/{id}`
#[instrument(skip_all, fields(id))]
pub async fn get_item(
    State(state): State<AppState>,
    path: Result<Path<ItemId>, PathRejection>,
) -> ApiResult<Json<Item>> {
    let Path(id) = path?;
    Span::current().record("id", id);

    let item = state.db.items().fetch_by_id(id).await?;
    Ok(Json(item))
}

/// `PUT /items/{id}`
///
/// A missing id is reported as 400, not 404.
#[instrument(skip_all, fields(id))]
pub async fn update_item(
    State(state): State<AppState>,
    path: Result<Path<ItemId>, PathRejection>,
    body: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> ApiResult<Json<Item>> {
    let Path(id) = path?;
    Span::current().record("id", id);
    let Json(req) = body?;

    validate_matching_id(id, req.id)?;
    let fields = validate_item_fields(ItemFields::new(req.name, req.description, req.price))?;

    let item = state.db.items().update(id, &fields).await.map_err(|e| {
        let err = ApiError::from(e);
        if err.code == ErrorCode::NotFound {
            err.with_status(StatusCode::BAD_REQUEST)
        } else {
            err
        }
    })?;

    Ok(Json(item))
}

/// `DELETE /items/{id}`
#[instrument(skip_all, fields(id))]
pub async fn delete_item(
    State(state): State<AppState>,
    path: Result<Path<ItemId>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = path?;
    Span::current().record("id", id);

    state.db.items().delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Item deleted successfully!",
    }))
}
