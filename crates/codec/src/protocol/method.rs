//! Method lookup used by the request line decoder.

use http::Method;

use crate::protocol::ParseError;

/// Resolves the method token of a request line.
///
/// Implementations decide which tokens are acceptable and report everything
/// else, typically as [`ParseError::UnknownMethod`]. The request line decoder
/// propagates whatever error comes back.
#[cfg_attr(test, mockall::automock)]
pub trait MethodResolver {
    fn resolve(&self, token: &str) -> Result<Method, ParseError>;
}

/// Accepts the nine methods registered by RFC 9110 and RFC 5789, matched
/// case-sensitively.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMethods;

impl MethodResolver for StandardMethods {
    fn resolve(&self, token: &str) -> Result<Method, ParseError> {
        let method = match token {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "CONNECT" => Method::CONNECT,
            "OPTIONS" => Method::OPTIONS,
            "TRACE" => Method::TRACE,
            "PATCH" => Method::PATCH,
            _ => return Err(ParseError::unknown_method(token)),
        };
        Ok(method)
    }
}

impl<F> MethodResolver for F
where
    F: Fn(&str) -> Result<Method, ParseError>,
{
    fn resolve(&self, token: &str) -> Result<Method, ParseError> {
        self(token)
    }
}
