//! Handlers for the service path.
//!
//! GET/HEAD return the descriptor, POST runs the factor filter, anything
//! else is refused with 405. POST always answers 200: failures travel as
//! fault envelopes, including panics and timeouts caught by the outer layers.

use std::any::Any;
use std::time::Instant;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};

use crate::envelope::{encode_fault, FAULT_CLIENT};
use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::observability::metrics::{self, CallOutcome};
use crate::service::{FactorService, Outcome, ServiceError};

/// Content type of every reply.
pub const TEXT_XML: &str = "text/xml";

/// Methods served on the service path.
pub const ALLOWED_METHODS: &str = "GET, HEAD, POST";

fn xml_response(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, TEXT_XML)], body).into_response()
}

/// GET → descriptor document.
pub async fn describe(State(state): State<AppState>, method: Method, headers: HeaderMap) -> Response {
    let start = Instant::now();
    tracing::debug!(request_id = %request_id(&headers), "Serving descriptor");
    metrics::record_call(method.as_str(), CallOutcome::Descriptor, start);
    xml_response(StatusCode::OK, state.service.describe().to_owned())
}

/// POST → decode, filter, encode.
pub async fn process(State(state): State<AppState>, request: Request) -> Response {
    let start = Instant::now();
    let id = request_id(request.headers()).to_owned();

    let outcome = match axum::body::to_bytes(request.into_body(), state.max_body_size).await {
        Ok(bytes) => {
            tracing::debug!(request_id = %id, bytes = bytes.len(), "Received envelope");
            state.service.process_bytes(&bytes)
        }
        Err(e) => FactorService::fault(&ServiceError::Body(e.to_string())),
    };

    let call = match &outcome {
        Outcome::Result(_) => CallOutcome::Result,
        Outcome::Fault { message, .. } => {
            tracing::warn!(request_id = %id, fault = %message, "Request answered with fault");
            CallOutcome::Fault
        }
    };
    metrics::record_call("POST", call, start);

    let body = match outcome {
        Outcome::Result(body) => body,
        Outcome::Fault { envelope, .. } => envelope,
    };
    xml_response(StatusCode::OK, body)
}

/// Any other method → 405 with a client fault.
pub async fn method_not_allowed(method: Method, headers: HeaderMap) -> Response {
    let start = Instant::now();
    tracing::warn!(request_id = %request_id(&headers), method = %method, "Method not allowed");
    metrics::record_call(method.as_str(), CallOutcome::Rejected, start);

    let body = encode_fault(FAULT_CLIENT, &format!("Method {} not allowed", method));
    let mut response = xml_response(StatusCode::METHOD_NOT_ALLOWED, body);
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static(ALLOWED_METHODS));
    response
}

/// Replace the timeout layer's bare 408 with a fault envelope.
pub async fn timeout_fault(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }
    tracing::warn!("Request timed out");
    let outcome = FactorService::fault(&ServiceError::Timeout);
    xml_response(StatusCode::OK, outcome.body().to_owned())
}

/// Turn a handler panic into a generic fault envelope.
pub fn panic_fault(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = %detail, "Handler panicked");

    let outcome = FactorService::fault(&ServiceError::Internal);
    xml_response(StatusCode::OK, outcome.body().to_owned())
}
