//! Client for the factor service.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use thiserror::Error;

use crate::envelope::{self, DecodeError, FactorReply, FactorRequest, OPERATION};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("service fault {code}: {message}")]
    Fault { code: String, message: String },

    #[error("could not decode response: {0}")]
    Decode(#[from] DecodeError),
}

/// Talks to one service endpoint.
#[derive(Debug, Clone)]
pub struct FactorClient {
    client: Client,
    endpoint: String,
}

impl FactorClient {
    pub fn new(endpoint: &str) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }

    /// Ask the service which of `numbers` are divisible by `divisor`.
    pub async fn find_factors(&self, numbers: &[i64], divisor: i64) -> Result<Vec<i64>, ClientError> {
        let body = envelope::encode_request(&FactorRequest::new(numbers.to_vec(), divisor));
        let text = self.post(body).await?;

        match envelope::decode_response(&text)? {
            FactorReply::Result(values) => Ok(values),
            FactorReply::Fault { code, message } => Err(ClientError::Fault { code, message }),
        }
    }

    /// Send an already-built envelope and return the raw reply.
    pub async fn post(&self, body: String) -> Result<String, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/xml; charset=utf-8"));
        headers.insert("soapaction", HeaderValue::from_static(OPERATION));

        let resp = self
            .client
            .post(&self.endpoint)
            .headers(headers)
            .body(body)
            .send()
            .await?;
        Self::text(resp).await
    }

    /// Fetch the descriptor document.
    pub async fn describe(&self) -> Result<String, ClientError> {
        let resp = self.client.get(&self.endpoint).send().await?;
        Self::text(resp).await
    }

    async fn text(resp: reqwest::Response) -> Result<String, ClientError> {
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}
