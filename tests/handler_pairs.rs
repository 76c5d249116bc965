mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use url_pair_shortener::routes::build_router;

async fn create_server() -> (TestServer, sqlx::SqlitePool) {
    let pool = common::create_test_pool().await;
    let server = TestServer::new(build_router(common::create_test_state(pool.clone()))).unwrap();

    (server, pool)
}

#[tokio::test]
async fn test_list_all_empty() {
    let (server, _pool) = create_server().await;

    let response = server.get("/all").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), serde_json::json!([]));
}

#[tokio::test]
async fn test_list_all() {
    let (server, pool) = create_server().await;
    common::insert_test_pair(&pool, "https://a.com/", "3eI66h6b60").await;
    common::insert_test_pair(&pool, "https://b.com/", "21DikZ6Td3").await;

    let response = server.get("/all").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let pairs = json.as_array().unwrap();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0]["original_url"], "https://a.com/");
    assert_eq!(pairs[0]["short_code"], "3eI66h6b60");
    assert_eq!(pairs[1]["original_url"], "https://b.com/");
}

#[tokio::test]
async fn test_delete_pair() {
    let (server, pool) = create_server().await;
    common::insert_test_pair(&pool, "https://a.com/", "3eI66h6b60").await;

    let response = server.delete("/delete-pair/3eI66h6b60").await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert_eq!(common::count_pairs(&pool).await, 0);

    server.get("/3eI66h6b60").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_pair_by_encoded_url() {
    let (server, pool) = create_server().await;
    common::insert_test_pair(&pool, "https://a.com/", "3eI66h6b60").await;

    let response = server
        .delete("/delete-pair/https%3A%2F%2Fa.com%2F")
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert_eq!(common::count_pairs(&pool).await, 0);
}

#[tokio::test]
async fn test_delete_pair_not_found() {
    let (server, _pool) = create_server().await;

    let response = server.delete("/delete-pair/NON_EXIST").await;

    response.assert_status_not_found();
}
