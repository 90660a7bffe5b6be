//! Request head framing.
//!
//! [`RequestHeadDecoder`] waits until a buffer holds a complete request head,
//! the request line and header block up to and including the empty line,
//! then cuts it off the buffer and decodes both parts. Body bytes stay in the
//! buffer for whoever reads the payload.
//!
//! # Limits
//!
//! - Maximum head size: 8KB ([`MAX_HEADER_BYTES`])
//! - The head must be valid UTF-8

use bytes::BytesMut;
use tokio_util::codec::Decoder;
use tracing::trace;

use crate::codec::{HeaderDecoder, RequestLineDecoder};
use crate::ensure;
use crate::protocol::{MethodResolver, ParamDecoder, ParseError, RequestHead, StandardMethods, UrlEncodedParams};

/// Maximum size in bytes allowed for the request line plus the header block.
pub const MAX_HEADER_BYTES: usize = 8 * 1024;

const LINE_END: &str = "\r\n";
const HEAD_END: &[u8] = b"\r\n\r\n";

/// Decoder for complete request heads implementing the [`Decoder`] trait.
///
/// Remembers how far the current buffer has already been searched for the
/// end of the head, so feeding a head in small pieces does not rescan it.
#[derive(Debug, Clone, Copy)]
pub struct RequestHeadDecoder<M = StandardMethods, P = UrlEncodedParams> {
    line_decoder: RequestLineDecoder<M, P>,
    header_decoder: HeaderDecoder,
    scanned: usize,
}

impl RequestHeadDecoder {
    /// Creates a decoder with the default collaborators and tolerant header
    /// preprocessing.
    pub fn new() -> Self {
        Self::with(RequestLineDecoder::new(), HeaderDecoder::new())
    }
}

impl Default for RequestHeadDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, P> RequestHeadDecoder<M, P>
where
    M: MethodResolver,
    P: ParamDecoder,
{
    pub fn with(line_decoder: RequestLineDecoder<M, P>, header_decoder: HeaderDecoder) -> Self {
        Self { line_decoder, header_decoder, scanned: 0 }
    }
}

impl<M, P> Decoder for RequestHeadDecoder<M, P>
where
    M: MethodResolver,
    P: ParamDecoder,
{
    type Item = RequestHead;
    type Error = ParseError;

    /// Attempts to frame and decode one request head from `src`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(head))` once a complete head was consumed from `src`
    /// - `Ok(None)` if more data is needed; `src` is left untouched
    ///
    /// # Errors
    ///
    /// - [`ParseError::TooLargeHeader`] if the head exceeds [`MAX_HEADER_BYTES`]
    /// - [`ParseError::InvalidEncoding`] if the head is not UTF-8
    /// - any error from the request line or header decoder
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        // a terminator may straddle the previous end of the buffer
        let from = self.scanned.saturating_sub(HEAD_END.len() - 1).min(src.len());
        let Some(end) = find_head_end(&src[from..]).map(|end| from + end) else {
            self.scanned = src.len();
            ensure!(src.len() <= MAX_HEADER_BYTES, ParseError::too_large_header(src.len(), MAX_HEADER_BYTES));
            return Ok(None);
        };
        self.scanned = 0;

        let head_size = end + HEAD_END.len();
        trace!(head_size, "framed request head");
        ensure!(head_size <= MAX_HEADER_BYTES, ParseError::too_large_header(head_size, MAX_HEADER_BYTES));

        let head_bytes = src.split_to(head_size).freeze();
        let head = std::str::from_utf8(&head_bytes).map_err(ParseError::invalid_encoding)?;

        let (request_line, header_block) = head.split_once(LINE_END).unwrap_or((head, ""));
        let line = self.line_decoder.decode(request_line)?;
        let headers = self.header_decoder.decode(header_block)?;

        Ok(Some(RequestHead::new(line, headers)))
    }
}

fn find_head_end(src: &[u8]) -> Option<usize> {
    src.windows(HEAD_END.len()).position(|window| window == HEAD_END)
}
