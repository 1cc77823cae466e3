mod common;

use common::{ADMIN_EMAIL, ADMIN_PASSWORD, SESSION_COOKIE, body_json, memory_client};
use poem::http::{StatusCode, header};
use serde_json::json;

#[tokio::test]
async fn test_login_sets_cookie_and_status_reports_authenticated() {
    let (cli, _dir) = memory_client();

    let resp = cli
        .post("/api/auth/login")
        .body_json(&json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}))
        .send()
        .await;
    resp.assert_status_is_ok();

    let set_cookie = resp
        .0
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .expect("login should set a cookie");
    assert!(set_cookie.starts_with(SESSION_COOKIE));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Max-Age=604800"));

    let body = body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Login successful"));
    assert_eq!(
        body["user"],
        json!({"email": ADMIN_EMAIL, "name": "Admin User", "role": "admin"})
    );

    let cookie_pair = set_cookie.split(';').next().unwrap().to_string();
    let status = cli
        .get("/api/auth/status")
        .header(header::COOKIE, cookie_pair)
        .send()
        .await;
    status.assert_status_is_ok();

    let body = body_json(status).await;
    assert_eq!(body["isAuthenticated"], json!(true));
    assert_eq!(body["user"]["email"], json!(ADMIN_EMAIL));
}

#[tokio::test]
async fn test_wrong_credentials_are_401_without_cookie() {
    let (cli, _dir) = memory_client();

    let resp = cli
        .post("/api/auth/login")
        .body_json(&json!({"email": ADMIN_EMAIL, "password": "wrong"}))
        .send()
        .await;
    resp.assert_status(StatusCode::UNAUTHORIZED);
    assert!(resp.0.headers().get(header::SET_COOKIE).is_none());

    let body = body_json(resp).await;
    assert_eq!(body, json!({"success": false, "error": "Invalid email or password"}));
}

#[tokio::test]
async fn test_missing_fields_are_400() {
    let (cli, _dir) = memory_client();

    for payload in [json!({"email": ADMIN_EMAIL}), json!({"password": ADMIN_PASSWORD}), json!({})] {
        let resp = cli.post("/api/auth/login").body_json(&payload).send().await;
        resp.assert_status(StatusCode::BAD_REQUEST);

        let body = body_json(resp).await;
        assert_eq!(body["error"], json!("Email and password are required"));
    }
}

#[tokio::test]
async fn test_malformed_login_body_is_bad_request_envelope() {
    let (cli, _dir) = memory_client();

    let responses = [
        cli.post("/api/auth/login")
            .content_type("application/json")
            .body("{\"email\": ")
            .send()
            .await,
        cli.post("/api/auth/login").send().await,
    ];

    for resp in responses {
        resp.assert_status(StatusCode::BAD_REQUEST);
        assert!(resp.0.headers().get(header::SET_COOKIE).is_none());

        let body = body_json(resp).await;
        assert_eq!(body["success"], json!(false));
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
    }
}

#[tokio::test]
async fn test_status_without_cookie() {
    let (cli, _dir) = memory_client();

    let resp = cli.get("/api/auth/status").send().await;
    resp.assert_status_is_ok();

    let body = body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["isAuthenticated"], json!(false));
    assert_eq!(body["user"], json!(null));
}

#[tokio::test]
async fn test_status_with_foreign_cookie_value() {
    let (cli, _dir) = memory_client();

    let resp = cli
        .get("/api/auth/status")
        .header(header::COOKIE, "auth-token=something-else")
        .send()
        .await;

    let body = body_json(resp).await;
    assert_eq!(body["isAuthenticated"], json!(false));
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let (cli, _dir) = memory_client();

    let resp = cli
        .post("/api/auth/logout")
        .header(header::COOKIE, SESSION_COOKIE)
        .send()
        .await;
    resp.assert_status_is_ok();

    let set_cookie = resp
        .0
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .expect("logout should clear the cookie");
    assert!(set_cookie.starts_with("auth-token=;"));
    assert!(set_cookie.contains("Max-Age=0"));

    let body = body_json(resp).await;
    assert_eq!(body, json!({"success": true, "message": "Logout successful"}));
}
