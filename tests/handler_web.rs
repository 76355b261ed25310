mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_dashboard_lists_links() {
    let (mut state, _rx, repository) = common::create_test_state(100);
    state.base_url = Some("https://s.example.com".to_string());
    common::create_test_link(&repository, "dash01", "https://example.com/dashboard").await;
    let server = common::test_server(state);

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("https://s.example.com/dash01"));
    assert!(html.contains("https://example.com/dashboard"));
    assert!(html.contains("never"));
}

#[tokio::test]
async fn test_dashboard_escapes_urls() {
    let (state, _rx, repository) = common::create_test_state(100);
    common::create_test_link(&repository, "xss001", "https://example.com/?q=<script>").await;
    let server = common::test_server(state);

    let html = server.get("/").await.text();

    assert!(!html.contains("q=<script>"));
    assert!(html.contains("q=&lt;script&gt;") || html.contains("q=&#60;script&#62;"));
}

#[tokio::test]
async fn test_dashboard_store_unavailable() {
    let (state, _rx) = common::unavailable_state();
    let server = common::test_server(state);

    server
        .get("/")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_code_stats_page() {
    let (state, _rx, repository) = common::create_test_state(100);
    common::create_test_link(&repository, "stat01", "https://example.com/stats").await;
    let server = common::test_server(state);

    let response = server.get("/code/stat01").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("stat01"));
    assert!(html.contains("https://example.com/stats"));
}

#[tokio::test]
async fn test_code_stats_page_script_url_not_linked() {
    let (state, _rx, repository) = common::create_test_state(100);
    common::create_test_link(&repository, "xss123", "javascript:alert(1)").await;
    let server = common::test_server(state);

    let response = server.get("/code/xss123").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("javascript:alert(1)"));
    assert!(!html.contains("href=\"javascript:"));
}

#[tokio::test]
async fn test_code_stats_page_links_web_url() {
    let (state, _rx, repository) = common::create_test_state(100);
    common::create_test_link(&repository, "web001", "https://example.com/page").await;
    let server = common::test_server(state);

    let html = server.get("/code/web001").await.text();

    assert!(html.contains("href=\"https://example.com/page\""));
}

#[tokio::test]
async fn test_code_stats_page_not_found() {
    let (state, _rx, _repository) = common::create_test_state(100);
    let server = common::test_server(state);

    server
        .get("/code/nope12")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .get("/code/bad!")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_path_not_found_page() {
    let (state, _rx, _repository) = common::create_test_state(100);
    let server = common::test_server(state);

    let response = server.get("/some/deep/path").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Link not found"));
}
