//! Decoded request line and request head types.

use std::fmt;

use http::Method;

use crate::protocol::{HeaderMap, Parameters};

/// The first line of a request: method, path, query parameters and version.
///
/// Built either by [`RequestLineDecoder`](crate::codec::RequestLineDecoder)
/// from raw text or directly through [`RequestLine::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    method: Method,
    path: String,
    parameters: Parameters,
    http_version: String,
}

impl RequestLine {
    /// Assembles a request line from already typed parts.
    ///
    /// Nothing is validated or normalized here; in particular `/` is kept as
    /// is and not rewritten to the default route.
    pub fn new<P, V>(method: Method, path: P, parameters: Parameters, http_version: V) -> Self
    where
        P: Into<String>,
        V: Into<String>,
    {
        Self { method, path: path.into(), parameters, http_version: http_version.into() }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns a copy of the query parameters.
    ///
    /// Changing the returned map never affects this request line.
    pub fn parameters(&self) -> Parameters {
        self.parameters.clone()
    }

    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    pub fn http_version(&self) -> &str {
        &self.http_version
    }

    /// Splits the request line into its owned parts.
    pub fn into_parts(self) -> (Method, String, Parameters, String) {
        (self.method, self.path, self.parameters, self.http_version)
    }
}

/// Writes the line back as `METHOD target version`, with the query
/// form-urlencoded in key order.
///
/// Decoding the output gives an equal request line, except that a decoded `/`
/// already shows up as `/home`.
impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)?;
        if !self.parameters.is_empty() {
            let mut pairs: Vec<_> = self.parameters.iter().collect();
            pairs.sort();
            let Ok(query) = serde_urlencoded::to_string(pairs) else {
                return Err(fmt::Error);
            };
            write!(f, "?{query}")?;
        }
        write!(f, " {}", self.http_version)
    }
}

/// A fully framed request head: the request line plus its header block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHead {
    line: RequestLine,
    headers: HeaderMap,
}

impl RequestHead {
    pub fn new(line: RequestLine, headers: HeaderMap) -> Self {
        Self { line, headers }
    }

    pub fn line(&self) -> &RequestLine {
        &self.line
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn into_parts(self) -> (RequestLine, HeaderMap) {
        (self.line, self.headers)
    }
}
