//! Header block encoder.
//!
//! Serializes a [`HeaderMap`] back into wire text. The default
//! [`EncodeOptions::compat`] output is what the server has always produced:
//!
//! ```text
//! Name: a,b \r\n
//! Other: c \r\n
//! \r\n
//! ```
//!
//! Values are joined with a bare `,` and every line ends with `" \r\n"`.
//! [`EncodeOptions::standard`] drops the stray space and joins values with
//! `", "`.
//!
//! Decoding and then encoding a block is not guaranteed to give back the same
//! text: per-token whitespace is lost and the terminator is fixed.

use bytes::{BufMut, BytesMut};
use std::io;
use tokio_util::codec::Encoder;

use crate::protocol::{CONTENT_TYPE, HeaderMap};

const KEY_VALUE_DELIMITER: &str = ": ";
const BLOCK_END: &str = "\r\n";

/// Separators used when writing a header block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    value_separator: &'static str,
    line_end: &'static str,
}

impl EncodeOptions {
    /// `","` between values and `" \r\n"` after each line.
    pub const fn compat() -> Self {
        Self { value_separator: ",", line_end: " \r\n" }
    }

    /// `", "` between values and `"\r\n"` after each line.
    pub const fn standard() -> Self {
        Self { value_separator: ", ", line_end: "\r\n" }
    }

    pub const fn with_value_separator(mut self, value_separator: &'static str) -> Self {
        self.value_separator = value_separator;
        self
    }

    pub const fn with_line_end(mut self, line_end: &'static str) -> Self {
        self.line_end = line_end;
        self
    }

    pub fn value_separator(&self) -> &'static str {
        self.value_separator
    }

    pub fn line_end(&self) -> &'static str {
        self.line_end
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self::compat()
    }
}

/// Encoder for [`HeaderMap`]s.
///
/// If the map carries a content type it is written as `Content-Type`,
/// replacing any values already stored under that exact name. The caller's
/// map is left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderEncoder {
    options: EncodeOptions,
}

impl HeaderEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EncodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> EncodeOptions {
        self.options
    }

    /// Encodes the header block, entries in map order.
    ///
    /// An empty map still produces the block terminator.
    pub fn encode(&self, headers: &HeaderMap) -> String {
        let mut headers = headers.clone();
        if let Some(content_type) = headers.clear_content_type() {
            headers.insert(CONTENT_TYPE, [content_type]);
        }

        let EncodeOptions { value_separator, line_end } = self.options;

        let mut encoded = String::new();
        for (index, (name, values)) in headers.iter().enumerate() {
            if index > 0 {
                encoded.push_str(line_end);
            }
            encoded.push_str(name);
            encoded.push_str(KEY_VALUE_DELIMITER);
            encoded.push_str(&values.join(value_separator));
        }
        encoded.push_str(line_end);
        encoded.push_str(BLOCK_END);
        encoded
    }
}

impl Encoder<&HeaderMap> for HeaderEncoder {
    type Error = io::Error;

    /// Appends the encoded block to `dst`. Never fails.
    fn encode(&mut self, item: &HeaderMap, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let encoded = HeaderEncoder::encode(self, item);
        dst.reserve(encoded.len());
        dst.put_slice(encoded.as_bytes());
        Ok(())
    }
}
