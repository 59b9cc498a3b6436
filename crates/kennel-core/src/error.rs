//! Error types for the kennel client.
//!
//! This module provides a single error type covering every failure mode of a
//! request round trip, with explicit variants to allow callers to handle
//! specific cases.

use thiserror::Error;

/// The error type for kennel operations.
///
/// Every variant is terminal at this layer; nothing here is retried. Status
/// handling is flat: any response outside the 2xx range surfaces as
/// [`Error::BadStatus`] with the numeric code, with no distinction between
/// client and server errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Connection-level failure from the HTTP transport.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Response status code outside the 2xx range.
    #[error("bad status {0}")]
    BadStatus(u16),

    /// A URL could not be parsed into a valid request target.
    #[error("bad URL")]
    BadUrl,

    /// A payload could not be serialized to JSON.
    #[error("JSON encoding failed")]
    JsonEncode,

    /// A response body could not be deserialized into the expected type.
    #[error("JSON decoding failed: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Any other error raised by the HTTP transport.
    #[error("HTTP error: {message}")]
    Http { message: String },
}
