use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::state::make_seeded_state;

#[fixture]
fn app() -> Router {
    router(make_seeded_state())
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Option<Value>) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = (!bytes.is_empty()).then(|| serde_json::from_slice(&bytes).unwrap());
    (status, json)
}

#[rstest]
#[tokio::test]
async fn welcome_returns_the_message(app: Router) {
    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Some(json!({"message": "Welcome to the Events API"})));
}

#[rstest]
#[tokio::test]
async fn fresh_store_lists_the_seed_events(app: Router) {
    let (status, body) = send(&app, Method::GET, "/events", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        Some(json!([
            {"id": 1, "title": "Tech Meetup"},
            {"id": 2, "title": "Python Workshop"}
        ]))
    );
}

#[rstest]
#[tokio::test]
async fn create_assigns_the_next_id_and_lists_it(app: Router) {
    let (status, body) =
        send(&app, Method::POST, "/events", Some(json!({"title": "New Talk"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, Some(json!({"id": 3, "title": "New Talk"})));

    let (_, list) = send(&app, Method::GET, "/events", None).await;
    assert_eq!(list.unwrap()[2], json!({"id": 3, "title": "New Talk"}));
}

#[rstest]
#[tokio::test]
async fn create_without_title_is_rejected(app: Router) {
    let (status, body) = send(&app, Method::POST, "/events", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, Some(json!({"error": "Missing required field: title"})));

    let (_, list) = send(&app, Method::GET, "/events", None).await;
    assert_eq!(list.unwrap().as_array().unwrap().len(), 2);
}

#[rstest]
#[tokio::test]
async fn update_changes_the_title_only(app: Router) {
    let (status, body) =
        send(&app, Method::PATCH, "/events/1", Some(json!({"title": "Updated"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Some(json!({"id": 1, "title": "Updated"})));

    let (_, list) = send(&app, Method::GET, "/events", None).await;
    assert_eq!(list.unwrap()[0], json!({"id": 1, "title": "Updated"}));
}

#[rstest]
#[tokio::test]
async fn delete_of_unknown_event_is_not_found(app: Router) {
    let (status, body) = send(&app, Method::DELETE, "/events/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Some(json!({"error": "Event not found"})));
}

#[rstest]
#[tokio::test]
async fn delete_removes_the_event_from_the_list(app: Router) {
    let (status, body) = send(&app, Method::DELETE, "/events/2", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, None);

    let (_, list) = send(&app, Method::GET, "/events", None).await;
    assert_eq!(list, Some(json!([{"id": 1, "title": "Tech Meetup"}])));
}

#[rstest]
#[tokio::test]
async fn deleted_highest_id_is_reused_by_the_next_create(app: Router) {
    send(&app, Method::DELETE, "/events/2", None).await;
    let (_, body) = send(&app, Method::POST, "/events", Some(json!({"title": "Again"}))).await;
    assert_eq!(body, Some(json!({"id": 2, "title": "Again"})));
}

#[rstest]
#[tokio::test]
async fn deleted_lower_id_is_not_reused(app: Router) {
    send(&app, Method::DELETE, "/events/1", None).await;
    let (_, body) = send(&app, Method::POST, "/events", Some(json!({"title": "Again"}))).await;
    assert_eq!(body, Some(json!({"id": 3, "title": "Again"})));
}

#[rstest]
#[tokio::test]
async fn delete_is_terminal(app: Router) {
    send(&app, Method::DELETE, "/events/1", None).await;
    let (update_status, _) =
        send(&app, Method::PATCH, "/events/1", Some(json!({"title": "Back"}))).await;
    let (delete_status, _) = send(&app, Method::DELETE, "/events/1", None).await;
    assert_eq!(update_status, StatusCode::NOT_FOUND);
    assert_eq!(delete_status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn repeated_lists_are_identical(app: Router) {
    let first = send(&app, Method::GET, "/events", None).await;
    let second = send(&app, Method::GET, "/events", None).await;
    assert_eq!(first, second);
}

#[rstest]
#[case(Method::PUT, "/events/1")]
#[case(Method::DELETE, "/events")]
#[tokio::test]
async fn unrouted_methods_are_not_allowed(app: Router, #[case] method: Method, #[case] uri: &str) {
    let (status, _) = send(&app, method, uri, None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[rstest]
#[tokio::test]
async fn unknown_paths_are_not_found(app: Router) {
    let (status, _) = send(&app, Method::GET, "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn signed_ids_do_not_reach_any_event(app: Router) {
    let (delete_status, delete_body) = send(&app, Method::DELETE, "/events/+1", None).await;
    let (patch_status, _) =
        send(&app, Method::PATCH, "/events/+1", Some(json!({"title": "Signed"}))).await;
    assert_eq!(delete_status, StatusCode::NOT_FOUND);
    assert_eq!(delete_body, None);
    assert_eq!(patch_status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, Method::GET, "/events", None).await;
    assert_eq!(
        list,
        Some(json!([
            {"id": 1, "title": "Tech Meetup"},
            {"id": 2, "title": "Python Workshop"}
        ]))
    );
}
