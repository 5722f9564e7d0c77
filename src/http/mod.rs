//! HTTP surface for the to-do service.
//!
//! Routes:
//!
//! - `GET /health` (open)
//! - `GET /api/todo`, `POST /api/todo`
//! - `GET /api/todo/{id}`, `PUT /api/todo/{id}`, `DELETE /api/todo/{id}`
//! - `POST /api/todo/{id}/complete`
//!
//! Every `/api` route sits behind [`auth::require_api_key`].

pub mod auth;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use mockable::Clock;
use tower_http::trace::TraceLayer;

use crate::todo::{ports::TodoRepository, services::TodoLifecycleService};
use auth::ApiKeyGate;

/// Lifecycle service over runtime-selected storage and clock.
pub type SharedTodoService = TodoLifecycleService<dyn TodoRepository, dyn Clock + Send + Sync>;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// To-do lifecycle service.
    pub todos: SharedTodoService,
    /// API-key gate applied to `/api` routes.
    pub api_key: Arc<ApiKeyGate>,
}

impl AppState {
    /// Creates handler state from a repository, a clock and an API-key gate.
    #[must_use]
    pub fn new(
        repository: Arc<dyn TodoRepository>,
        clock: Arc<dyn Clock + Send + Sync>,
        api_key: ApiKeyGate,
    ) -> Self {
        Self {
            todos: TodoLifecycleService::new(repository, clock),
            api_key: Arc::new(api_key),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/todo", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/api/todo/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .route("/api/todo/{id}/complete", post(handlers::complete_todo))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.api_key),
            auth::require_api_key,
        ));

    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
