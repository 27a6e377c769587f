//! Malformed and hostile input must come back as fault envelopes.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use factor_service::config::ServiceConfig;
use factor_service::{ClientError, FactorClient};

mod common;

async fn post_raw(url: &str, body: impl Into<reqwest::Body>) -> (u16, String) {
    let res = common::http_client()
        .post(url)
        .header("content-type", "text/xml")
        .body(body)
        .send()
        .await
        .expect("service unreachable");
    let status = res.status().as_u16();
    (status, res.text().await.unwrap())
}

#[tokio::test]
async fn test_zero_divisor_fault() {
    let server = common::start_default_server().await;

    let (status, body) = post_raw(
        &server.url(),
        "<findFactors><numbers>1,2,3</numbers><divisor>0</divisor></findFactors>",
    )
    .await;
    assert_eq!(status, 200);
    assert!(body.contains("<soap:Fault>"));
    assert!(body.contains("<faultstring>Error processing request: division by zero"));

    let client = FactorClient::with_client(common::http_client(), &server.url());
    match client.find_factors(&[10, 20], 0).await {
        Err(ClientError::Fault { code, message }) => {
            assert_eq!(code, "soap:Server");
            assert!(!message.is_empty());
        }
        other => panic!("expected fault, got {:?}", other),
    }

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_unparsable_number_fault() {
    let server = common::start_default_server().await;

    let (status, body) = post_raw(&server.url(), "<numbers>1,abc,3</numbers><divisor>1</divisor>").await;
    assert_eq!(status, 200);
    assert!(body.contains("<faultcode>soap:Server</faultcode>"));
    assert!(body.contains("abc"));

    let (status, body) = post_raw(&server.url(), "<numbers>1</numbers><divisor>9999999999999999999999</divisor>").await;
    assert_eq!(status, 200);
    assert!(body.contains("<soap:Fault>"));

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_invalid_utf8_fault() {
    let server = common::start_default_server().await;

    let (status, body) = post_raw(&server.url(), vec![0x3c_u8, 0xff, 0xfe, 0x3e]).await;
    assert_eq!(status, 200);
    assert!(body.contains("not valid UTF-8"));

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_oversized_body_fault() {
    let mut config = ServiceConfig::default();
    config.listener.max_body_size = 64;
    let server = common::start_server(config).await;

    let numbers = (0..100).map(|n| n.to_string()).collect::<Vec<_>>().join(",");
    let (status, body) = post_raw(&server.url(), format!("<numbers>{}</numbers>", numbers)).await;
    assert_eq!(status, 200);
    assert!(body.contains("<soap:Fault>"));

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_fault_does_not_affect_next_call() {
    let server = common::start_default_server().await;
    let client = FactorClient::with_client(common::http_client(), &server.url());

    assert!(client.find_factors(&[1], 0).await.is_err());
    assert_eq!(client.find_factors(&[4, 5, 6], 2).await.unwrap(), vec![4, 6]);

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_stalled_body_times_out_as_fault() {
    let mut config = ServiceConfig::default();
    config.timeouts.request_secs = 1;
    let server = common::start_server(config).await;

    // Announce 100 bytes, send a handful, then go quiet.
    let mut stream = TcpStream::connect(server.addr).await.unwrap();
    stream
        .write_all(
            b"POST /factorservice HTTP/1.1\r\n\
              Host: localhost\r\n\
              Content-Type: text/xml\r\n\
              Content-Length: 100\r\n\
              Connection: close\r\n\r\n\
              <numbers>1,2",
        )
        .await
        .unwrap();

    let mut reply = Vec::new();
    tokio::time::timeout(Duration::from_secs(10), stream.read_to_end(&mut reply))
        .await
        .expect("server never answered")
        .unwrap();
    let reply = String::from_utf8_lossy(&reply);

    assert!(reply.starts_with("HTTP/1.1 200"), "got: {}", reply);
    assert!(reply.contains("<faultcode>soap:Server</faultcode>"));
    assert!(reply.contains("request timed out"));

    server.shutdown.trigger();
}
