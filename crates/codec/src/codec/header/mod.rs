//! Header block processing.
//!
//! - [`HeaderDecoder`]: parses a CRLF separated header block into a
//!   [`HeaderMap`](crate::protocol::HeaderMap)
//!   - tolerant or strict line preprocessing, see [`Preprocess`]
//!   - comma separated values are split and trimmed
//!   - repeated names accumulate their values
//!
//! - [`HeaderEncoder`]: writes a header map back to wire text
//!   - merges the out-of-band content type
//!   - separators configurable through [`EncodeOptions`]

mod header_decoder;
mod header_encoder;

pub use header_decoder::HeaderDecoder;
pub use header_decoder::Preprocess;
pub use header_encoder::EncodeOptions;
pub use header_encoder::HeaderEncoder;
