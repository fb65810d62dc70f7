//! Behavioural tests for the todo HTTP resource over the in-memory repository.

use std::sync::Arc;

use actix_web::http::Method;
use actix_web::test as actix_test;
use actix_web::{App, web};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};
use todo_backend::Trace;
use todo_backend::domain::TodoTitle;
use todo_backend::domain::ports::TodoRepository;
use todo_backend::inbound::http::configure_todo_routes;
use todo_backend::inbound::http::state::HttpState;
use todo_backend::test_support::InMemoryTodoRepository;

struct TodoWorld {
    repo: InMemoryTodoRepository,
    current_id: Option<i32>,
    last_status: Option<u16>,
    last_body: Option<Value>,
}

struct Captured {
    status: u16,
    body: Value,
}

fn perform(repo: &InMemoryTodoRepository, method: Method, path: &str, body: Option<&str>) -> Captured {
    let repo = repo.clone();
    let mut request = actix_test::TestRequest::default().method(method).uri(path);
    if let Some(body) = body {
        request = request
            .insert_header(("content-type", "application/json"))
            .set_payload(body.to_owned());
    }
    actix_rt::System::new().block_on(async move {
        let state = web::Data::new(HttpState::new(Arc::new(repo)));
        let app = actix_test::init_service(
            App::new()
                .wrap(Trace)
                .app_data(state)
                .configure(configure_todo_routes),
        )
        .await;
        let response = actix_test::call_service(&app, request.to_request()).await;
        let status = response.status().as_u16();
        let body: Value = actix_test::read_body_json(response).await;
        Captured { status, body }
    })
}

impl TodoWorld {
    fn record(&mut self, method: Method, path: &str, body: Option<&str>) {
        let captured = perform(&self.repo, method, path, body);
        self.last_status = Some(captured.status);
        self.last_body = Some(captured.body);
    }

    fn current_path(&self) -> String {
        let id = self.current_id.expect("a todo should have been created");
        format!("/todos/{id}")
    }

    fn listed(&self) -> Vec<Value> {
        let captured = perform(&self.repo, Method::GET, "/todos", None);
        assert_eq!(captured.status, 200, "listing should succeed");
        captured
            .body
            .get("data")
            .and_then(Value::as_array)
            .cloned()
            .expect("list body has a data array")
    }
}

#[fixture]
fn world() -> TodoWorld {
    TodoWorld {
        repo: InMemoryTodoRepository::new(),
        current_id: None,
        last_status: None,
        last_body: None,
    }
}

#[given("an empty todo list")]
fn an_empty_todo_list(world: &mut TodoWorld) {
    assert!(world.repo.is_empty());
}

#[given("a todo titled \"{title}\" exists")]
fn a_todo_titled_exists(world: &mut TodoWorld, title: String) {
    let repo = world.repo.clone();
    let title = TodoTitle::new(&title).expect("valid title");
    let todo = actix_rt::System::new()
        .block_on(async move { repo.create(&title).await })
        .expect("seed todo");
    world.current_id = Some(todo.id.get());
}

#[given("the todo store is unavailable")]
fn the_todo_store_is_unavailable(world: &mut TodoWorld) {
    world.repo.set_failing(true);
}

#[when("the client creates a todo titled \"{title}\"")]
fn the_client_creates_a_todo_titled(world: &mut TodoWorld, title: String) {
    let payload = json!({ "title": title }).to_string();
    world.record(Method::POST, "/todos", Some(&payload));
}

#[when("the client creates a todo with a {length} character title")]
fn the_client_creates_a_todo_with_a_long_title(world: &mut TodoWorld, length: usize) {
    let payload = json!({ "title": "x".repeat(length) }).to_string();
    world.record(Method::POST, "/todos", Some(&payload));
}

#[when("the client lists todos")]
fn the_client_lists_todos(world: &mut TodoWorld) {
    world.record(Method::GET, "/todos", None);
}

#[when("the client marks the todo as completed")]
fn the_client_marks_the_todo_as_completed(world: &mut TodoWorld) {
    let path = world.current_path();
    world.record(Method::PATCH, &path, Some(r#"{"completed": true}"#));
}

#[when("the client completes the todo with id \"{raw_id}\"")]
fn the_client_completes_the_todo_with_id(world: &mut TodoWorld, raw_id: String) {
    let path = format!("/todos/{raw_id}");
    world.record(Method::PATCH, &path, Some(r#"{"completed": true}"#));
}

#[when("the client sends an empty update for the todo")]
fn the_client_sends_an_empty_update(world: &mut TodoWorld) {
    let path = world.current_path();
    world.record(Method::PATCH, &path, Some("{}"));
}

#[when("the client deletes the todo")]
fn the_client_deletes_the_todo(world: &mut TodoWorld) {
    let path = world.current_path();
    world.record(Method::DELETE, &path, None);
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &mut TodoWorld, status: u16) {
    assert_eq!(world.last_status, Some(status));
}

#[then("the error message is \"{message}\"")]
fn the_error_message_is(world: &mut TodoWorld, message: String) {
    let body = world.last_body.as_ref().expect("response body");
    assert_eq!(body, &json!({ "error": message }));
}

#[then("the list contains \"{title}\" as not completed")]
fn the_list_contains_as_not_completed(world: &mut TodoWorld, title: String) {
    let listed = world.listed();
    assert!(
        listed
            .iter()
            .any(|todo| todo["title"] == json!(title) && todo["completed"] == json!(false)),
        "expected an open todo titled {title:?} in {listed:?}"
    );
}

#[then("the list contains \"{title}\" as completed")]
fn the_list_contains_as_completed(world: &mut TodoWorld, title: String) {
    let listed = world.listed();
    assert!(
        listed
            .iter()
            .any(|todo| todo["title"] == json!(title) && todo["completed"] == json!(true)),
        "expected a completed todo titled {title:?} in {listed:?}"
    );
}

#[then("the first listed title is \"{title}\"")]
fn the_first_listed_title_is(world: &mut TodoWorld, title: String) {
    let body = world.last_body.as_ref().expect("response body");
    let first = body
        .get("data")
        .and_then(Value::as_array)
        .and_then(|todos| todos.first())
        .expect("at least one todo listed");
    assert_eq!(first.get("title"), Some(&json!(title)));
}

#[then("the todo list is empty")]
fn the_todo_list_is_empty(world: &mut TodoWorld) {
    assert!(world.listed().is_empty());
    assert!(world.repo.is_empty());
}

#[scenario(
    path = "tests/features/todos.feature",
    name = "Creating a todo adds it to the list"
)]
fn creating_a_todo_adds_it_to_the_list(world: TodoWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/todos.feature",
    name = "Listing returns the newest todo first"
)]
fn listing_returns_the_newest_todo_first(world: TodoWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/todos.feature",
    name = "Completing a todo keeps its title"
)]
fn completing_a_todo_keeps_its_title(world: TodoWorld) {
    drop(world);
}

#[scenario(path = "tests/features/todos.feature", name = "Deleting a todo removes it")]
fn deleting_a_todo_removes_it(world: TodoWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/todos.feature",
    name = "Overlong titles are rejected without storing anything"
)]
fn overlong_titles_are_rejected(world: TodoWorld) {
    drop(world);
}

#[scenario(path = "tests/features/todos.feature", name = "Non-numeric ids are rejected")]
fn non_numeric_ids_are_rejected(world: TodoWorld) {
    drop(world);
}

#[scenario(path = "tests/features/todos.feature", name = "Empty updates are rejected")]
fn empty_updates_are_rejected(world: TodoWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/todos.feature",
    name = "Storage outages surface as a generic error"
)]
fn storage_outages_surface_as_a_generic_error(world: TodoWorld) {
    drop(world);
}
