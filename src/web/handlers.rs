//! HTTP handlers for the items API

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::service::{ItemError, ItemPayload, ItemResult, ItemService};
use crate::store::Item;

/// Response for listing items
#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub items: Vec<Item>,
}

/// Response for a created item
#[derive(Debug, Serialize)]
pub struct AddedResponse {
    pub added: Item,
}

/// Response for an updated item
#[derive(Debug, Serialize)]
pub struct UpdatedResponse {
    pub updated: Item,
}

/// Response for a deleted item
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub items: usize,
}

/// Unwrap a JSON body, reporting malformed bodies as a validation error
fn json_payload(body: Result<Json<Value>, JsonRejection>) -> ItemResult<ItemPayload> {
    match body {
        Ok(Json(body)) => ItemPayload::from_json(body),
        Err(rejection) => {
            debug!("Rejected request body: {}", rejection.body_text());
            Err(ItemError::Validation)
        }
    }
}

/// Unwrap the item name, treating undecodable segments as unknown names
fn item_name(name: Result<Path<String>, PathRejection>) -> ItemResult<String> {
    match name {
        Ok(Path(name)) => Ok(name),
        Err(rejection) => {
            debug!("Rejected item name: {}", rejection.body_text());
            Err(ItemError::NotFound(String::new()))
        }
    }
}

/// List all items
pub async fn list_items(State(service): State<ItemService>) -> impl IntoResponse {
    let items = service.list_items().await;
    (StatusCode::OK, Json(ItemsResponse { items }))
}

/// Get a single item by name
pub async fn get_item(
    State(service): State<ItemService>,
    name: Result<Path<String>, PathRejection>,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(&item_name(name)?).await?;
    Ok(Json(item))
}

/// Create a new item
pub async fn create_item(
    State(service): State<ItemService>,
    body: Result<Json<Value>, JsonRejection>,
) -> ItemResult<impl IntoResponse> {
    let added = service.create_item(json_payload(body)?).await?;
    Ok((StatusCode::CREATED, Json(AddedResponse { added })))
}

/// Update an item
pub async fn update_item(
    State(service): State<ItemService>,
    name: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> ItemResult<Json<UpdatedResponse>> {
    let name = item_name(name)?;
    let updated = service.update_item(&name, json_payload(body)?).await?;
    Ok(Json(UpdatedResponse { updated }))
}

/// Delete an item
pub async fn delete_item(
    State(service): State<ItemService>,
    name: Result<Path<String>, PathRejection>,
) -> ItemResult<Json<DeletedResponse>> {
    service.delete_item(&item_name(name)?).await?;
    Ok(Json(DeletedResponse { message: "Deleted" }))
}

/// Liveness check with the current item count
pub async fn health_handler(State(service): State<ItemService>) -> impl IntoResponse {
    let items = service.count().await;
    (StatusCode::OK, Json(HealthResponse { status: "ok", items }))
}
