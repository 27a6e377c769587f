//! SOAP-style envelope codec.
//!
//! # Data Flow
//! ```text
//! client:  FactorRequest → codec::encode_request → XML text → HTTP POST
//! server:  XML text → codec::decode_request (scan.rs) → FactorRequest
//!          Vec<i64> → codec::encode_response → XML text
//!          failure  → codec::encode_fault    → XML text
//! client:  XML text → codec::decode_response → FactorReply
//! ```
//!
//! # Design Decisions
//! - Decoding is a tag scan, not an XML parse; absent fields take a named default
//! - Output is built as an element tree (xml.rs) and escaped on render

pub mod codec;
pub mod descriptor;
pub mod scan;
pub mod types;
pub mod xml;

pub use codec::{decode_request, decode_response, encode_fault, encode_request, encode_response};
pub use types::{DecodeError, FactorReply, FactorRequest, FAULT_CLIENT, FAULT_SERVER, OPERATION};
