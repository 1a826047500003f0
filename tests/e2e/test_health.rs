use crate::e2e::helpers::TestContext;
use hyper::StatusCode;

#[tokio::test]
async fn it_should_report_liveness() {
    let ctx = TestContext::new().await;

    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body_bytes, b"OK");
}

#[tokio::test]
async fn it_should_report_readiness_when_the_cache_answers() {
    let ctx = TestContext::new().await;

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json()["status"], "ready");
    assert_eq!(response.json()["cache"], "connected");
}
