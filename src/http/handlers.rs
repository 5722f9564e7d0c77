//! Route handlers mapping REST calls onto the lifecycle service.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::{Value, json};

use super::{
    AppState,
    dto::{CreateTodoBody, TodoResponse, UpdateTodoBody, validate_title},
    error::ApiErrorResponse,
};
use crate::todo::{domain::TodoId, services::UpdateTodoRequest};

fn not_found(id: TodoId) -> ApiErrorResponse {
    ApiErrorResponse::not_found(format!("To-do item {id} not found"))
}

/// `GET /health`
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /api/todo`
///
/// # Errors
///
/// Returns a 500 response when storage fails.
pub async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoResponse>>, ApiErrorResponse> {
    let items = state.todos.list().await?;
    Ok(Json(items.into_iter().map(TodoResponse::from).collect()))
}

/// `GET /api/todo/{id}`
///
/// # Errors
///
/// Returns a 404 response for unknown identifiers and a 500 response when
/// storage fails.
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Result<Json<TodoResponse>, ApiErrorResponse> {
    state
        .todos
        .get(id)
        .await?
        .map(|item| Json(TodoResponse::from(item)))
        .ok_or_else(|| not_found(id))
}

/// `POST /api/todo`
///
/// Responds with 201 and a `Location` header pointing at the new item.
///
/// # Errors
///
/// Returns a 400 response for blank titles and a 500 response when storage
/// fails.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(body): Json<CreateTodoBody>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    validate_title(&body.title)
        .map_err(|details| ApiErrorResponse::validation_error("Validation failed", details))?;

    let item = state.todos.create(body.title, body.description).await?;
    let location = format!("/api/todo/{}", item.id());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TodoResponse::from(item)),
    ))
}

/// `PUT /api/todo/{id}`
///
/// # Errors
///
/// Returns a 400 response for blank titles, a 404 response for unknown
/// identifiers and a 500 response when storage fails.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
    Json(body): Json<UpdateTodoBody>,
) -> Result<Json<TodoResponse>, ApiErrorResponse> {
    validate_title(&body.title)
        .map_err(|details| ApiErrorResponse::validation_error("Validation failed", details))?;

    let request = UpdateTodoRequest::new(id, body.title, body.is_completed)
        .with_optional_description(body.description);
    state
        .todos
        .update(request)
        .await?
        .map(|item| Json(TodoResponse::from(item)))
        .ok_or_else(|| not_found(id))
}

/// `DELETE /api/todo/{id}`
///
/// # Errors
///
/// Returns a 404 response for unknown identifiers and a 500 response when
/// storage fails.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Result<StatusCode, ApiErrorResponse> {
    if state.todos.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// `POST /api/todo/{id}/complete`
///
/// # Errors
///
/// Returns a 404 response for unknown identifiers and a 500 response when
/// storage fails.
pub async fn complete_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Result<Json<TodoResponse>, ApiErrorResponse> {
    state
        .todos
        .mark_completed(id)
        .await?
        .map(|item| Json(TodoResponse::from(item)))
        .ok_or_else(|| not_found(id))
}
