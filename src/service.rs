//! Request processing independent of the HTTP layer.
//!
//! `FactorService` is built once at startup and shared read-only across
//! requests. Every call works only on its own inputs.

use std::sync::Arc;
use thiserror::Error;

use crate::envelope::{self, descriptor, DecodeError, FAULT_SERVER};
use crate::factor::{self, FilterError};

/// Anything that turns a POST into a fault instead of a result.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error("request body could not be read: {0}")]
    Body(String),

    #[error("request body is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),

    /// The request did not finish within the configured time limit.
    #[error("request timed out")]
    Timeout,

    /// Unexpected failure inside the handler.
    #[error("internal error")]
    Internal,
}

/// Result of processing one POST body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Response envelope carrying the filtered numbers.
    Result(String),
    /// Fault envelope, plus the plain message for logging.
    Fault { envelope: String, message: String },
}

impl Outcome {
    pub fn body(&self) -> &str {
        match self {
            Outcome::Result(body) => body,
            Outcome::Fault { envelope, .. } => envelope,
        }
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, Outcome::Fault { .. })
    }
}

/// The factor service. Cheap to clone.
#[derive(Debug, Clone)]
pub struct FactorService {
    descriptor: Arc<str>,
}

impl FactorService {
    /// Build the service, advertising `public_url` in the descriptor.
    pub fn new(public_url: &str) -> Self {
        Self {
            descriptor: descriptor::render(public_url).into(),
        }
    }

    /// The descriptor document served on GET.
    pub fn describe(&self) -> &str {
        &self.descriptor
    }

    /// Decode, filter and encode. Failures become fault envelopes.
    pub fn process(&self, body: &str) -> Outcome {
        match Self::find_factors(body) {
            Ok(result) => Outcome::Result(envelope::encode_response(&result)),
            Err(e) => Self::fault(&e),
        }
    }

    /// Raw bytes variant of [`process`](Self::process).
    pub fn process_bytes(&self, body: &[u8]) -> Outcome {
        match std::str::from_utf8(body) {
            Ok(text) => self.process(text),
            Err(e) => Self::fault(&ServiceError::from(e)),
        }
    }

    /// Fault envelope for an error raised outside `process`.
    pub fn fault(error: &ServiceError) -> Outcome {
        let message = format!("Error processing request: {}", error);
        Outcome::Fault {
            envelope: envelope::encode_fault(FAULT_SERVER, &message),
            message,
        }
    }

    fn find_factors(body: &str) -> Result<Vec<i64>, ServiceError> {
        let request = envelope::decode_request(body)?;
        Ok(factor::filter(&request.numbers, request.divisor)?)
    }
}
