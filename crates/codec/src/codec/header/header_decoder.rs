//! Header block decoder.
//!
//! Turns the text between the request line and the body into a [`HeaderMap`].
//!
//! # Format
//!
//! - lines are separated by CRLF
//! - each line is `Name: value`, split on the exact `": "` delimiter
//! - a value is split on `,` and every token is trimmed
//! - empty segments at the end of a split are dropped, so `X: ` is malformed
//!   and `a,b,` yields two values
//! - a name seen on several lines accumulates all of its tokens in order
//!
//! Names are kept verbatim, so `Accept` and `accept` are different entries.
//!
//! # Preprocessing
//!
//! [`Preprocess::Tolerant`] trims the whole block and skips blank lines and
//! lines made only of NUL bytes, which some transports leave behind as
//! padding. [`Preprocess::Strict`] takes the lines as they are.
//!
//! Either way a line that does not split into exactly a name and a value fails
//! the whole block with [`ParseError::MalformedHeaderLine`].

use tracing::{error, info};

use crate::protocol::{HeaderMap, ParseError};

const LINE_DELIMITER: &str = "\r\n";
const KEY_VALUE_DELIMITER: &str = ": ";
const MULTIPLE_VALUES_DELIMITER: &str = ",";

/// How lines are cleaned up before they are parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preprocess {
    /// Trim the block and skip blank or NUL-only lines.
    #[default]
    Tolerant,
    /// Parse every line; only empty segments after the last CRLF are ignored.
    Strict,
}

/// Decoder for CRLF separated header blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderDecoder {
    preprocess: Preprocess,
}

impl HeaderDecoder {
    /// Creates a decoder with tolerant preprocessing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self::with_preprocess(Preprocess::Strict)
    }

    pub fn with_preprocess(preprocess: Preprocess) -> Self {
        Self { preprocess }
    }

    pub fn preprocess(&self) -> Preprocess {
        self.preprocess
    }

    /// Decodes a raw header block.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedHeaderLine`] for the first line that is
    /// not exactly `name: value`. Nothing is returned for the lines before it.
    pub fn decode(&self, raw: &str) -> Result<HeaderMap, ParseError> {
        let lines = match self.preprocess {
            Preprocess::Tolerant => {
                let stripped = raw.trim();
                info!(header = %stripped, "decoding header block");
                stripped.split(LINE_DELIMITER).filter(|line| !is_padding(line)).collect::<Vec<_>>()
            }
            Preprocess::Strict => {
                info!(header = %raw, "decoding header block");
                split_dropping_trailing(raw, LINE_DELIMITER)
            }
        };

        let mut headers = HeaderMap::new();
        for line in lines {
            let (name, value) = split_line(line)?;
            let values = split_dropping_trailing(value, MULTIPLE_VALUES_DELIMITER);
            headers.append(name, values.into_iter().map(str::trim));
        }

        Ok(headers)
    }
}

/// Splits a header line into its name and raw value.
fn split_line(line: &str) -> Result<(&str, &str), ParseError> {
    let tokens = split_dropping_trailing(line, KEY_VALUE_DELIMITER);
    match tokens.as_slice() {
        &[name, value] => Ok((name, value)),
        _ => {
            error!(tokens = %tokens.join(" "), "malformed header line");
            Err(ParseError::malformed_header_line(line))
        }
    }
}

/// Splits `text` on `delimiter` and drops the empty segments at the end.
fn split_dropping_trailing<'a>(text: &'a str, delimiter: &str) -> Vec<&'a str> {
    let mut tokens = text.split(delimiter).collect::<Vec<_>>();
    while tokens.last().is_some_and(|token| token.is_empty()) {
        tokens.pop();
    }
    tokens
}

/// Blank lines and runs of NUL bytes carry no header.
fn is_padding(line: &str) -> bool {
    line.trim().is_empty() || line.bytes().all(|b| b == b'\0')
}
