//! Request head codec.
//!
//! Decoding and encoding are independent, pure transformations over text:
//!
//! - [`RequestLineDecoder`]: request line into a
//!   [`RequestLine`](crate::protocol::RequestLine)
//! - [`HeaderDecoder`] / [`HeaderEncoder`]: header block to and from a
//!   [`HeaderMap`](crate::protocol::HeaderMap)
//! - [`RequestHeadDecoder`]: frames a complete head out of a `BytesMut` and
//!   runs both decoders, for use with `tokio_util::codec::FramedRead`
//!
//! # Example
//!
//! ```
//! use micro_codec::codec::{HeaderDecoder, HeaderEncoder, RequestLineDecoder};
//!
//! let line = RequestLineDecoder::new().decode("GET /search?q=cats HTTP/1.1").unwrap();
//! assert_eq!(line.path(), "/search");
//! assert_eq!(line.parameter("q"), Some("cats"));
//!
//! let mut headers = HeaderDecoder::new().decode("Accept: text/html, */*\r\n").unwrap();
//! headers.set_content_type("text/html");
//! assert_eq!(
//!     HeaderEncoder::new().encode(&headers),
//!     "Accept: text/html,*/* \r\nContent-Type: text/html \r\n\r\n"
//! );
//! ```

mod header;
mod request_head_decoder;
mod request_line_decoder;

pub use header::EncodeOptions;
pub use header::HeaderDecoder;
pub use header::HeaderEncoder;
pub use header::Preprocess;
pub use request_head_decoder::MAX_HEADER_BYTES;
pub use request_head_decoder::RequestHeadDecoder;
pub use request_line_decoder::RequestLineDecoder;
