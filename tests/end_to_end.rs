//! End-to-end tests against a live server.

use std::time::Duration;

use factor_service::envelope::{encode_request, FactorRequest};
use factor_service::{ClientError, FactorClient};

mod common;

#[tokio::test]
async fn test_reference_cases() {
    let server = common::start_default_server().await;
    let client = FactorClient::with_client(common::http_client(), &server.url());

    let result = client
        .find_factors(&[1, 5, 23, 25, 35, 78, 30, 96], 5)
        .await
        .expect("call should succeed");
    assert_eq!(result, vec![5, 25, 35, 30]);

    let result = client.find_factors(&[3, 20, 15], 3).await.unwrap();
    assert_eq!(result, vec![3, 15]);

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_raw_response_body() {
    let server = common::start_default_server().await;
    let body = encode_request(&FactorRequest::new(vec![1, 5, 23, 25, 35, 78, 30, 96], 5));

    let res = common::http_client()
        .post(server.url())
        .header("content-type", "text/xml; charset=utf-8")
        .body(body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "text/xml");
    assert!(res.headers().contains_key("x-request-id"));
    let text = res.text().await.unwrap();
    assert!(text.contains("<result>5, 25, 35, 30</result>"));

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_missing_divisor_returns_input() {
    let server = common::start_default_server().await;
    let client = FactorClient::with_client(common::http_client(), &server.url());

    let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
    <soap:Body>
        <findFactors>
            <numbers>7, 8, 9</numbers>
        </findFactors>
    </soap:Body>
</soap:Envelope>"#;
    let text = client.post(body.to_string()).await.unwrap();
    assert!(text.contains("<result>7, 8, 9</result>"));

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_empty_numbers_gives_empty_result() {
    let server = common::start_default_server().await;
    let client = FactorClient::with_client(common::http_client(), &server.url());

    let result = client.find_factors(&[], 4).await.unwrap();
    assert!(result.is_empty());

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_descriptor_is_identical_every_call() {
    let server = common::start_default_server().await;
    let client = FactorClient::with_client(common::http_client(), &server.url());

    let first = client.describe().await.unwrap();
    assert!(first.contains(&format!(r#"<soap:address location="{}"/>"#, server.url())));
    for _ in 0..3 {
        assert_eq!(client.describe().await.unwrap(), first);
    }

    let wsdl = common::http_client()
        .get(format!("{}?wsdl", server.url()))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(wsdl, first);

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_method_not_allowed() {
    let server = common::start_default_server().await;

    let res = common::http_client().put(server.url()).send().await.unwrap();
    assert_eq!(res.status(), 405);
    assert_eq!(res.headers()["allow"], "GET, HEAD, POST");
    assert_eq!(res.headers()["content-type"], "text/xml");
    assert!(res.text().await.unwrap().contains("<faultcode>soap:Client</faultcode>"));

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_wrong_path_is_status_error() {
    let server = common::start_default_server().await;
    let client = FactorClient::with_client(
        common::http_client(),
        &format!("http://{}/nothing-here", server.addr),
    );

    match client.find_factors(&[1], 1).await {
        Err(ClientError::Status { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected status error, got {:?}", other),
    }

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let server = common::start_default_server().await;
    let client = FactorClient::with_client(common::http_client(), &server.url());
    assert!(client.describe().await.is_ok());

    server.shutdown.trigger();
    let joined = tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("server should stop")
        .expect("server task should not panic");
    assert!(joined.is_ok());

    assert!(client.describe().await.is_err());
}
