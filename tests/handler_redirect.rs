mod common;

use axum_test::TestServer;
use sqlx::PgPool;

const OWNER: &str = "0123456789abcdef0123456789abcdef";

#[sqlx::test]
async fn test_redirect_success(pool: PgPool) {
    let server = TestServer::new(common::test_app(common::create_test_state(pool.clone()))).unwrap();

    common::create_test_user(&pool, "alice@example.com", OWNER).await;
    common::create_test_alias(&pool, "aB3x9", "https://example.com/target", OWNER).await;

    let response = server.get("/aB3x9").await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_increments_visit_count(pool: PgPool) {
    let server = TestServer::new(common::test_app(common::create_test_state(pool.clone()))).unwrap();

    common::create_test_user(&pool, "alice@example.com", OWNER).await;
    common::create_test_alias(&pool, "count", "https://example.com", OWNER).await;

    assert_eq!(common::visit_count(&pool, "count").await, 0);

    for expected in 1..=5 {
        let response = server.get("/count").await;
        assert_eq!(response.status_code(), 307);
        assert_eq!(common::visit_count(&pool, "count").await, expected);
    }
}

#[sqlx::test]
async fn test_concurrent_redirects_count_exactly_once_each(pool: PgPool) {
    let server = TestServer::new(common::test_app(common::create_test_state(pool.clone()))).unwrap();

    common::create_test_user(&pool, "alice@example.com", OWNER).await;
    common::create_test_alias(&pool, "racer", "https://example.com", OWNER).await;

    let (a, b, c, d) = tokio::join!(
        async { server.get("/racer").await },
        async { server.get("/racer").await },
        async { server.get("/racer").await },
        async { server.get("/racer").await },
    );

    for response in [a, b, c, d] {
        assert_eq!(response.status_code(), 307);
    }

    assert_eq!(common::visit_count(&pool, "racer").await, 4);
}

#[sqlx::test]
async fn test_redirect_unknown_code_is_404(pool: PgPool) {
    let server = TestServer::new(common::test_app(common::create_test_state(pool))).unwrap();

    let response = server.get("/zzzz9").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_redirect_malformed_code_is_404(pool: PgPool) {
    let server = TestServer::new(common::test_app(common::create_test_state(pool))).unwrap();

    let response = server.get("/way-too-long-to-be-a-code").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_redirect_unknown_code_counts_nothing(pool: PgPool) {
    let server = TestServer::new(common::test_app(common::create_test_state(pool.clone()))).unwrap();

    common::create_test_user(&pool, "alice@example.com", OWNER).await;
    common::create_test_alias(&pool, "kept1", "https://example.com", OWNER).await;

    let response = server.get("/gone9").await;
    response.assert_status_not_found();

    assert_eq!(common::visit_count(&pool, "kept1").await, 0);
}
