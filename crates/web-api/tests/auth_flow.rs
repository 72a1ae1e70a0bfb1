mod support;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;

use support::{create_and_authenticate_user, send_request, test_app};

#[tokio::test]
async fn register_authenticate_and_profile_flow() {
    let app = test_app().router;

    let (status, body) = send_request(
        &app,
        Request::builder()
            .method("POST")
            .uri("/users")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "name": "John Doe",
                    "email": "johndoe@example.com",
                    "password": "123456"
                })
                .to_string(),
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["name"], "John Doe");
    assert_eq!(body["user"]["email"], "johndoe@example.com");
    assert!(body["user"]["createdAt"].is_string());
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());
    assert!(body["user"].get("password_hash").is_none());

    let (status, body) = send_request(
        &app,
        Request::builder()
            .method("POST")
            .uri("/session")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "email": "johndoe@example.com",
                    "password": "123456"
                })
                .to_string(),
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().expect("token").to_owned();

    let (status, body) = send_request(
        &app,
        Request::builder()
            .method("GET")
            .uri("/me")
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "johndoe@example.com");
}

#[tokio::test]
async fn rejects_duplicate_email_registration() {
    let app = test_app().router;

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let (status, body) = send_request(
            &app,
            Request::builder()
                .method("POST")
                .uri("/users")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "name": "John Doe",
                        "email": "johndoe@example.com",
                        "password": "123456"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await;
        assert_eq!(status, expected);
        if expected == StatusCode::CONFLICT {
            assert_eq!(body["code"], "EMAIL_ALREADY_IN_USE");
        }
    }
}

#[tokio::test]
async fn rejects_malformed_email() {
    let app = test_app().router;

    let (status, body) = send_request(
        &app,
        Request::builder()
            .method("POST")
            .uri("/users")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "name": "John Doe",
                    "email": "johndoe.example.com",
                    "password": "123456"
                })
                .to_string(),
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn authentication_failures_are_ambiguous() {
    let app = test_app().router;
    create_and_authenticate_user(&app).await;

    // 密码错误
    let (status, body) = send_request(
        &app,
        Request::builder()
            .method("POST")
            .uri("/session")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "email": "johndoe@example.com",
                    "password": "wrong-password"
                })
                .to_string(),
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "INVALID_CREDENTIALS");

    // 邮箱不存在，响应与密码错误不可区分
    let (status, body) = send_request(
        &app,
        Request::builder()
            .method("POST")
            .uri("/session")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "email": "nobody@example.com",
                    "password": "123456"
                })
                .to_string(),
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn profile_requires_valid_bearer_token() {
    let app = test_app().router;

    let (status, _) = send_request(
        &app,
        Request::builder()
            .method("GET")
            .uri("/me")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send_request(
        &app,
        Request::builder()
            .method("GET")
            .uri("/me")
            .header("authorization", "Bearer not-a-real-token")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
