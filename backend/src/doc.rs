//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the todo endpoints, the health probes, and the wire
//! schemas. Debug builds serve it through Swagger UI; the `openapi-dump`
//! binary prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::todos::{
    CreateTodoRequest, DeleteTodoResponse, TodoEnvelope, TodoListResponse, TodoResponse,
    UpdateTodoRequest,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo service API",
        description = "CRUD interface over a single PostgreSQL-backed todo list."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::todos::list_todos,
        crate::inbound::http::todos::create_todo,
        crate::inbound::http::todos::update_todo,
        crate::inbound::http::todos::delete_todo,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        TodoResponse,
        TodoListResponse,
        TodoEnvelope,
        CreateTodoRequest,
        UpdateTodoRequest,
        DeleteTodoResponse,
        ErrorBody
    )),
    tags(
        (name = "todos", description = "Create, list, update and delete todos"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
