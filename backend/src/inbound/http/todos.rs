//! Todo HTTP handlers.
//!
//! ```text
//! GET    /todos
//! POST   /todos
//! PATCH  /todos/{id}
//! DELETE /todos/{id}
//! ```
//!
//! Validation always runs before the repository is called. Storage failures
//! are logged with their detail and reported to clients as a generic 500.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::{TodoRepositoryError, UpdateOutcome};
use crate::domain::{Error, Todo, TodoUpdate};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    NO_FIELDS_MESSAGE, TITLE_REQUIRED_MESSAGE, non_null, parse_json_body, parse_title,
    parse_todo_id, read_body,
};

const LIST_FAILED_MESSAGE: &str = "Unable to load todos right now.";
const CREATE_FAILED_MESSAGE: &str = "Unable to create todo right now.";
const UPDATE_FAILED_MESSAGE: &str = "Unable to update todo right now.";
const DELETE_FAILED_MESSAGE: &str = "Unable to delete todo right now.";
const NOT_FOUND_MESSAGE: &str = "Todo not found.";

/// Request payload for creating a todo.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateTodoRequest {
    /// Title text; trimmed, 1-120 characters.
    #[serde(default, deserialize_with = "non_null")]
    #[schema(example = "Buy milk")]
    pub title: Option<String>,
}

/// Request payload for partially updating a todo.
///
/// At least one field must be present. Fields may be omitted but not set to
/// `null`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateTodoRequest {
    #[serde(default, deserialize_with = "non_null")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub completed: Option<bool>,
}

/// Wire representation of a todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Buy milk")]
    pub title: String,
    pub completed: bool,
    /// ISO-8601 UTC timestamp with millisecond precision.
    #[schema(example = "2024-05-01T09:30:00.000Z")]
    pub created_at: String,
}

impl From<Todo> for TodoResponse {
    fn from(value: Todo) -> Self {
        Self {
            id: value.id.get(),
            created_at: value.created_at_iso8601(),
            title: value.title,
            completed: value.completed,
        }
    }
}

/// `{ "data": [...] }` envelope for the collection.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TodoListResponse {
    pub data: Vec<TodoResponse>,
}

/// `{ "data": {...} }` envelope for a single todo.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TodoEnvelope {
    pub data: TodoResponse,
}

/// Acknowledgement returned by a successful delete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteTodoResponse {
    #[schema(example = true)]
    pub success: bool,
}

fn storage_failure(err: &TodoRepositoryError, message: &'static str) -> Error {
    error!(error = %err, "todo storage operation failed");
    Error::internal(message)
}

fn parse_update_request(payload: UpdateTodoRequest) -> Result<TodoUpdate, Error> {
    let title = payload.title.as_deref().map(parse_title).transpose()?;
    let update = TodoUpdate {
        title,
        completed: payload.completed,
    };
    if update.is_empty() {
        return Err(Error::invalid_request(NO_FIELDS_MESSAGE));
    }
    Ok(update)
}

/// List every todo, newest first.
#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "All todos, newest first", body = TodoListResponse),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["todos"],
    operation_id = "listTodos"
)]
#[get("/todos")]
pub async fn list_todos(state: web::Data<HttpState>) -> ApiResult<web::Json<TodoListResponse>> {
    let todos = state
        .todos
        .list()
        .await
        .map_err(|err| storage_failure(&err, LIST_FAILED_MESSAGE))?;

    Ok(web::Json(TodoListResponse {
        data: todos.into_iter().map(TodoResponse::from).collect(),
    }))
}

/// Create a todo.
#[utoipa::path(
    post,
    path = "/todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Created todo", body = TodoEnvelope),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["todos"],
    operation_id = "createTodo"
)]
#[post("/todos")]
pub async fn create_todo(
    state: web::Data<HttpState>,
    body: Result<web::Bytes, actix_web::Error>,
) -> ApiResult<HttpResponse> {
    let payload: CreateTodoRequest = parse_json_body(&read_body(body)?)?;
    let raw_title = payload
        .title
        .ok_or_else(|| Error::invalid_request(TITLE_REQUIRED_MESSAGE))?;
    let title = parse_title(&raw_title)?;

    let todo = state
        .todos
        .create(&title)
        .await
        .map_err(|err| storage_failure(&err, CREATE_FAILED_MESSAGE))?;

    Ok(HttpResponse::Created().json(TodoEnvelope {
        data: TodoResponse::from(todo),
    }))
}

/// Update a todo's title and/or completion flag.
#[utoipa::path(
    patch,
    path = "/todos/{id}",
    params(("id" = String, Path, description = "Positive integer todo id")),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Updated todo", body = TodoEnvelope),
        (status = 400, description = "Invalid id or payload", body = ErrorBody),
        (status = 404, description = "Todo not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["todos"],
    operation_id = "updateTodo"
)]
#[patch("/todos/{id}")]
pub async fn update_todo(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: Result<web::Bytes, actix_web::Error>,
) -> ApiResult<web::Json<TodoEnvelope>> {
    let id = parse_todo_id(&path)?;
    let changes = parse_update_request(parse_json_body(&read_body(body)?)?)?;

    let outcome = state
        .todos
        .update(id, &changes)
        .await
        .map_err(|err| storage_failure(&err, UPDATE_FAILED_MESSAGE))?;

    match outcome {
        UpdateOutcome::Updated(todo) => Ok(web::Json(TodoEnvelope {
            data: TodoResponse::from(todo),
        })),
        UpdateOutcome::NotFound => Err(Error::not_found(NOT_FOUND_MESSAGE)),
        UpdateOutcome::NoFieldsProvided => Err(Error::invalid_request(NO_FIELDS_MESSAGE)),
    }
}

/// Delete a todo.
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(("id" = String, Path, description = "Positive integer todo id")),
    responses(
        (status = 200, description = "Todo deleted", body = DeleteTodoResponse),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Todo not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["todos"],
    operation_id = "deleteTodo"
)]
#[delete("/todos/{id}")]
pub async fn delete_todo(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteTodoResponse>> {
    let id = parse_todo_id(&path)?;

    let removed = state
        .todos
        .delete(id)
        .await
        .map_err(|err| storage_failure(&err, DELETE_FAILED_MESSAGE))?;

    if !removed {
        return Err(Error::not_found(NOT_FOUND_MESSAGE));
    }
    Ok(web::Json(DeleteTodoResponse { success: true }))
}
