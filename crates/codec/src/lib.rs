//! Request head codec for the micro http server
//!
//! This crate turns the raw text of an HTTP/1.1 request head into structured
//! data and writes header blocks back to the wire. It knows nothing about
//! sockets: a transport hands it the request line and the header block (or a
//! buffer holding both) and gets typed values or a [`protocol::ParseError`]
//! back.
//!
//! # Features
//!
//! - Request line decoding: method, path, query parameters and version
//! - Header block decoding into an ordered, case-preserving multimap
//! - Header block encoding with a configurable wire format
//! - Request head framing over `BytesMut` via `tokio_util::codec::Decoder`
//! - Pluggable method lookup and query-string decoding
//! - Fail-fast errors for malformed input, logged through `tracing`
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use micro_codec::codec::RequestHeadDecoder;
//! use tokio_util::codec::Decoder;
//!
//! let mut buf = BytesMut::from("GET /?lang=en HTTP/1.1\r\nAccept: text/html, */*\r\n\r\n");
//! let head = RequestHeadDecoder::new().decode(&mut buf).unwrap().unwrap();
//!
//! assert_eq!(head.line().path(), "/home");
//! assert_eq!(head.line().parameter("lang"), Some("en"));
//! assert_eq!(head.headers().get("Accept").unwrap(), ["text/html", "*/*"]);
//! ```
//!
//! # Architecture
//!
//! - [`protocol`]: the data model ([`protocol::HeaderMap`],
//!   [`protocol::RequestLine`]), the collaborator traits and errors
//! - [`codec`]: the decoders and the encoder
//!
//! # Limitations
//!
//! - Not a compliant HTTP/1.1 parser: no header folding, no case-insensitive
//!   header lookup, no body framing
//! - Maximum head size when framing: 8KB
//!
//! # Logging
//!
//! Every decode emits an `info` event with the raw input and an `error` event
//! when the input is rejected. The crate never installs a subscriber.

pub mod codec;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
