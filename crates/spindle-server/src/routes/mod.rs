//! Router assembly.
//!
//! Endpoints:
//!   GET    /health
//!   GET    /stats
//!   GET    /tasks             (cursor pagination: status?, cursor?, limit?)
//!   POST   /tasks
//!   GET    /tasks/paged       (offset pagination: status?, page?, page_size?)
//!   GET    /tasks/{id}
//!   PUT    /tasks/{id}
//!   DELETE /tasks/{id}

pub mod health;
pub mod tasks;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppContext;

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/stats", get(tasks::stats))
        .route(
            "/tasks",
            get(tasks::list_tasks_cursor).post(tasks::create_task),
        )
        .route("/tasks/paged", get(tasks::list_tasks_paged))
        .route(
            "/tasks/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
