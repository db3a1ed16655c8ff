//! Helpers shared by the service and HTTP layers.
//!
//! - [`base62`] - Short code encoding and strict decoding
//! - [`client_ip`] - Visitor IP extraction from request headers

pub mod base62;
pub mod client_ip;
