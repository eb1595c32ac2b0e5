use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use taskpad::{app::build_app, error::ErrorResponse, state::AppState};
use tower::ServiceExt;

fn app() -> axum::Router {
    build_app(AppState::fake())
}

async fn body_json(response: axum::response::Response) -> ErrorResponse {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn health_is_open() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn protected_route_without_token_gets_challenge() {
    let response = app()
        .oneshot(Request::builder().uri("/task").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok()),
        Some("Bearer")
    );
    let body = body_json(response).await;
    assert_eq!(body.error, "unauthenticated");
}

#[tokio::test]
async fn write_route_without_token_gets_challenge() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/task")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":"buy milk"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
}

#[tokio::test]
async fn non_bearer_scheme_is_rejected() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/task")
                .header(header::AUTHORIZATION, "Basic YWxpY2U6cHcx")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/task/1")
                .header(header::AUTHORIZATION, "Bearer not-a-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body.error, "unauthenticated");
    assert_eq!(body.message, "invalid or expired token");
}

#[tokio::test]
async fn register_rejects_invalid_email() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/user")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"name":"alice","email":"not-an-email","password":"longenough"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body.error, "validation_error");
    assert_eq!(body.message, "Invalid email");
}

#[tokio::test]
async fn register_rejects_short_password() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/user")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"name":"alice","email":"a@x.com","password":"pw1"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body.error, "validation_error");
    assert_eq!(body.message, "Password too short");
}

#[tokio::test]
async fn register_rejects_empty_name() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/user")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"name":"  ","email":"a@x.com","password":"longenough"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body.error, "validation_error");
}
