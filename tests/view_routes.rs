use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;

use roll_call::{
    state::AppState,
    test_helpers::{test_app, test_state},
};

async fn send(state: &Arc<AppState>, request: Request<Body>) -> axum::response::Response {
    test_app(state).oneshot(request).await.unwrap()
}

async fn page(state: &Arc<AppState>, uri: &str) -> (StatusCode, String) {
    let response = send(
        state,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await;
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn post_form(state: &Arc<AppState>, uri: &str, form: &str) -> axum::response::Response {
    send(
        state,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap(),
    )
    .await
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

async fn api_json(state: &Arc<AppState>, uri: &str) -> Value {
    let response = send(
        state,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await;
    let body = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn static_pages_render() {
    let state = test_state().await;
    for uri in ["/", "/about", "/classrooms", "/classrooms/new", "/attendance"] {
        let (status, body) = page(&state, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains("Roll Call"), "{uri}");
    }
}

#[tokio::test]
async fn unknown_page_is_html_not_found() {
    let state = test_state().await;
    let (status, body) = page(&state, "/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("does-not-exist"));
}

#[tokio::test]
async fn stylesheet_is_served() {
    let state = test_state().await;
    let (status, body) = page(&state, "/static/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("body"));
}

#[tokio::test]
async fn classroom_and_student_forms_redirect() {
    let state = test_state().await;

    let response = post_form(&state, "/classrooms/new", "name=3B").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/classrooms");

    let (_, body) = page(&state, "/classrooms").await;
    assert!(body.contains("3B"));

    let (status, body) = page(&state, "/students/new?classroom_id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("selected"));

    let response = post_form(
        &state,
        "/students/new",
        "name=Ana&classroom_id=1&guardian_phone=5511987654321",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/classrooms/1");

    let (status, body) = page(&state, "/classrooms/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Ana"));
    assert!(body.contains("5511987654321"));
}

#[tokio::test]
async fn invalid_forms_render_error_pages() {
    let state = test_state().await;

    let response = post_form(&state, "/classrooms/new", "name=++").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_form(
        &state,
        "/students/new",
        "name=Ana&classroom_id=7&guardian_phone=123",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let (status, body) = page(&state, "/classrooms/7").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("404"));
}

#[tokio::test]
async fn roll_call_form_records_attendance() {
    let state = test_state().await;
    post_form(&state, "/classrooms/new", "name=3B").await;
    post_form(&state, "/students/new", "name=beto&classroom_id=1&guardian_phone=1").await;
    post_form(&state, "/students/new", "name=Ana&classroom_id=1&guardian_phone=2").await;

    let (status, body) = page(&state, "/classrooms/1/roll-call").await;
    assert_eq!(status, StatusCode::OK);
    let ana = body.find("value=\"Ana\"").unwrap();
    let beto = body.find("value=\"beto\"").unwrap();
    assert!(ana < beto);

    let response = post_form(
        &state,
        "/classrooms/1/roll-call",
        "date=2024-05-01&name=Ana&present=1&name=beto&present=0",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("1 present, 1 absent"));

    let json = api_json(&state, "/api/v1/attendance?name=beto").await;
    let entries = json["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["present"], 0);

    let (status, body) = page(&state, "/attendance/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("2024-05-01"));
    assert!(body.contains("Absent"));
}

#[tokio::test]
async fn roll_call_without_date_is_rejected() {
    let state = test_state().await;
    post_form(&state, "/classrooms/new", "name=3B").await;

    let response = post_form(&state, "/classrooms/1/roll-call", "name=Ana&present=1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = api_json(&state, "/api/v1/attendance?name=Ana").await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn delete_buttons_redirect_to_the_list() {
    let state = test_state().await;
    post_form(&state, "/classrooms/new", "name=3B").await;
    post_form(&state, "/students/new", "name=Ana&classroom_id=1&guardian_phone=1").await;

    let response = post_form(&state, "/students/1/delete", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/classrooms");

    let response = post_form(&state, "/classrooms/1/delete", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let (status, _) = page(&state, "/classrooms/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_ids_render_the_error_page() {
    let state = test_state().await;

    for uri in ["/classrooms/abc", "/classrooms/abc/roll-call", "/attendance/3x"] {
        let response = send(
            &state,
            Request::builder().uri(uri).body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.contains("text/html"), "{uri}");
        let body = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("Something went wrong (400)"), "{uri}");
    }

    let response = post_form(&state, "/students/abc/delete", "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
