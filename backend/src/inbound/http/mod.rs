//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod health;
pub mod state;
pub mod todos;
pub mod validation;

pub use error::ApiResult;

/// Register the four todo routes on an application or scope.
///
/// The caller supplies [`state::HttpState`] as app data.
pub fn configure_todo_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(todos::list_todos)
        .service(todos::create_todo)
        .service(todos::update_todo)
        .service(todos::delete_todo);
}
