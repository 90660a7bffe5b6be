use std::io;
use thiserror::Error;

/// Errors produced while decoding a request head.
///
/// The first four variants are the codec's own taxonomy; the framing variants
/// only come out of [`RequestHeadDecoder`](crate::codec::RequestHeadDecoder).
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed header line: {line:?}")]
    MalformedHeaderLine { line: String },

    #[error("malformed request line: {line:?}")]
    MalformedRequestLine { line: String },

    #[error("unknown http method: {method:?}")]
    UnknownMethod { method: String },

    #[error("malformed query string: {reason}")]
    MalformedQueryString { reason: String },

    #[error("header size too large, current: {current_size} exceed the limit {max_size}")]
    TooLargeHeader { current_size: usize, max_size: usize },

    #[error("invalid encoding: {reason}")]
    InvalidEncoding { reason: String },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ParseError {
    pub fn malformed_header_line<S: ToString>(line: S) -> Self {
        Self::MalformedHeaderLine { line: line.to_string() }
    }

    pub fn malformed_request_line<S: ToString>(line: S) -> Self {
        Self::MalformedRequestLine { line: line.to_string() }
    }

    pub fn unknown_method<S: ToString>(method: S) -> Self {
        Self::UnknownMethod { method: method.to_string() }
    }

    pub fn malformed_query_string<S: ToString>(reason: S) -> Self {
        Self::MalformedQueryString { reason: reason.to_string() }
    }

    pub fn too_large_header(current_size: usize, max_size: usize) -> Self {
        Self::TooLargeHeader { current_size, max_size }
    }

    pub fn invalid_encoding<S: ToString>(reason: S) -> Self {
        Self::InvalidEncoding { reason: reason.to_string() }
    }
}
