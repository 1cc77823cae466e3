mod common;

use common::{SESSION_COOKIE, memory_client};
use poem::http::{StatusCode, header};

fn location(resp: &poem::test::TestResponse) -> Option<String> {
    resp.0
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

#[tokio::test]
async fn test_protected_page_without_cookie_redirects_to_login() {
    let (cli, _dir) = memory_client();

    let resp = cli.get("/add-item").send().await;

    resp.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp).as_deref(), Some("/login?redirect=/add-item"));
}

#[tokio::test]
async fn test_protected_page_with_wrong_cookie_redirects() {
    let (cli, _dir) = memory_client();

    let resp = cli
        .get("/add-item/details")
        .header(header::COOKIE, "auth-token=forged")
        .send()
        .await;

    resp.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        location(&resp).as_deref(),
        Some("/login?redirect=/add-item/details")
    );
}

#[tokio::test]
async fn test_protected_page_with_session_is_served() {
    let (cli, dir) = memory_client();
    let page_dir = dir.path().join("public");
    tokio::fs::create_dir_all(&page_dir).await.unwrap();
    tokio::fs::write(page_dir.join("add-item.html"), "<h1>Add item</h1>")
        .await
        .unwrap();

    let resp = cli
        .get("/add-item.html")
        .header(header::COOKIE, SESSION_COOKIE)
        .send()
        .await;

    resp.assert_status_is_ok();
    resp.assert_text("<h1>Add item</h1>").await;
}

#[tokio::test]
async fn test_public_pages_are_not_guarded() {
    let (cli, dir) = memory_client();
    let page_dir = dir.path().join("public");
    tokio::fs::create_dir_all(&page_dir).await.unwrap();
    tokio::fs::write(page_dir.join("index.html"), "home").await.unwrap();

    let resp = cli.get("/").send().await;
    resp.assert_status_is_ok();
    resp.assert_text("home").await;

    let resp = cli.get("/login").send().await;
    assert!(location(&resp).is_none());
}

#[tokio::test]
async fn test_api_routes_are_not_guarded() {
    let (cli, _dir) = memory_client();

    cli.get("/api/items").send().await.assert_status_is_ok();
}
