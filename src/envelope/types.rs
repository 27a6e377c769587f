//! Envelope payload types and decode errors.

use thiserror::Error;

/// SOAP 1.1 envelope namespace.
pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Operation name carried in the request body and the SOAPAction header.
pub const OPERATION: &str = "findFactors";

/// Fault code for failures while processing a well-routed call.
pub const FAULT_SERVER: &str = "soap:Server";

/// Fault code for calls the service refuses outright (e.g. wrong HTTP method).
pub const FAULT_CLIENT: &str = "soap:Client";

/// Decoded `findFactors` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorRequest {
    /// Candidates, in the order they appeared on the wire.
    pub numbers: Vec<i64>,
    /// Divisor tested against every candidate.
    pub divisor: i64,
}

impl FactorRequest {
    pub fn new(numbers: Vec<i64>, divisor: i64) -> Self {
        Self { numbers, divisor }
    }
}

/// What came back from the service: a result list or a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactorReply {
    Result(Vec<i64>),
    Fault { code: String, message: String },
}

/// Errors raised while pulling fields out of an envelope.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// A token inside a numeric field is not an integer.
    #[error("invalid integer {token:?} in <{field}>")]
    InvalidNumber { field: &'static str, token: String },

    /// A reply carried neither `<result>` nor `<faultstring>`.
    #[error("response carries neither <result> nor <faultstring>")]
    MissingResult,
}
