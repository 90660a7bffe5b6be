//! Query-string decoding used by the request line decoder.

use std::collections::HashMap;

use crate::protocol::ParseError;

/// Decoded query parameters, one value per key.
pub type Parameters = HashMap<String, String>;

/// Decodes the query string of a request target (everything after the first
/// `?`) into [`Parameters`].
///
/// The request line decoder hands the raw query over untouched and stores the
/// result as-is, so syntax, duplicate keys and percent-decoding are all up to
/// the implementation.
#[cfg_attr(test, mockall::automock)]
pub trait ParamDecoder {
    fn decode(&self, query: &str) -> Result<Parameters, ParseError>;
}

/// `application/x-www-form-urlencoded` decoding backed by `serde_urlencoded`.
///
/// - percent escapes are decoded and `+` becomes a space
/// - a pair without `=` maps to an empty value
/// - the last occurrence of a repeated key wins
/// - a pair with an empty name is rejected
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlEncodedParams;

impl ParamDecoder for UrlEncodedParams {
    fn decode(&self, query: &str) -> Result<Parameters, ParseError> {
        let pairs = serde_urlencoded::from_str::<Vec<(String, String)>>(query)
            .map_err(|e| ParseError::malformed_query_string(e.to_string()))?;

        let mut parameters = Parameters::with_capacity(pairs.len());
        for (key, value) in pairs {
            if key.is_empty() {
                return Err(ParseError::malformed_query_string(format!("empty parameter name in {query:?}")));
            }
            parameters.insert(key, value);
        }
        Ok(parameters)
    }
}

impl<F> ParamDecoder for F
where
    F: Fn(&str) -> Result<Parameters, ParseError>,
{
    fn decode(&self, query: &str) -> Result<Parameters, ParseError> {
        self(query)
    }
}
