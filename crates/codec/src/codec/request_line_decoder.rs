//! Request line decoder.
//!
//! Parses `METHOD SP request-target SP HTTP-version` into a [`RequestLine`].
//!
//! - the line is split on single spaces, trailing empty tokens are dropped
//! - exactly three tokens are required and the last must start with `HTTP`
//! - the method token goes through a [`MethodResolver`]
//! - the path is the target up to the first `?`; `/` becomes `/home`
//! - whatever follows the first `?` goes through a [`ParamDecoder`]
//! - the version is kept verbatim
//!
//! Errors from either collaborator are returned to the caller unchanged.

use tracing::{error, info};

use crate::ensure;
use crate::protocol::{
    MethodResolver, ParamDecoder, ParseError, Parameters, RequestLine, StandardMethods, UrlEncodedParams,
};

const TOKEN_DELIMITER: char = ' ';
const QUERY_DELIMITER: char = '?';
const VERSION_PREFIX: &str = "HTTP";

/// Requests for the root path are served by the home route.
const ROOT_PATH: &str = "/";
const DEFAULT_PATH: &str = "/home";

/// Decoder for request lines, generic over its method and query collaborators.
#[derive(Debug, Clone, Copy)]
pub struct RequestLineDecoder<M = StandardMethods, P = UrlEncodedParams> {
    methods: M,
    params: P,
}

impl RequestLineDecoder {
    /// Creates a decoder backed by [`StandardMethods`] and [`UrlEncodedParams`].
    pub fn new() -> Self {
        Self { methods: StandardMethods, params: UrlEncodedParams }
    }
}

impl Default for RequestLineDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, P> RequestLineDecoder<M, P>
where
    M: MethodResolver,
    P: ParamDecoder,
{
    /// Creates a decoder with custom collaborators.
    pub fn with(methods: M, params: P) -> Self {
        Self { methods, params }
    }

    /// Decodes a single request line, without its trailing CRLF.
    ///
    /// # Errors
    ///
    /// - [`ParseError::MalformedRequestLine`] if the line does not have exactly
    ///   three tokens or the version lacks the `HTTP` prefix
    /// - whatever the [`MethodResolver`] or [`ParamDecoder`] returns
    pub fn decode(&self, raw: &str) -> Result<RequestLine, ParseError> {
        info!(request_line = %raw, "decoding request line");

        let mut tokens = raw.split(TOKEN_DELIMITER).collect::<Vec<_>>();
        while tokens.last().is_some_and(|token| token.is_empty()) {
            tokens.pop();
        }

        let &[method, target, version] = tokens.as_slice() else {
            return Err(malformed(raw));
        };
        ensure!(version.starts_with(VERSION_PREFIX), malformed(raw));

        let method = self.methods.resolve(method)?;

        let (path, query) = match target.split_once(QUERY_DELIMITER) {
            Some((path, query)) => (path, Some(query)),
            None => (target, None),
        };
        let path = if path == ROOT_PATH { DEFAULT_PATH } else { path };

        let parameters = match query {
            Some(query) => self.params.decode(query)?,
            None => Parameters::new(),
        };

        Ok(RequestLine::new(method, path, parameters, version))
    }
}

fn malformed(raw: &str) -> ParseError {
    error!(request_line = %raw, "malformed request line");
    ParseError::malformed_request_line(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{MockMethodResolver, MockParamDecoder};
    use http::Method;

    #[test]
    fn decode_root() {
        let line = RequestLineDecoder::new().decode("GET / HTTP/1.1").unwrap();

        assert_eq!(line, RequestLine::new(Method::GET, "/home", Parameters::new(), "HTTP/1.1"));
    }

    #[test]
    fn decode_with_query() {
        let line = RequestLineDecoder::new().decode("GET /search?q=cats&limit=10 HTTP/1.1").unwrap();

        assert_eq!(line.method(), &Method::GET);
        assert_eq!(line.path(), "/search");
        assert_eq!(line.parameter("q"), Some("cats"));
        assert_eq!(line.parameter("limit"), Some("10"));
        assert_eq!(line.parameters().len(), 2);
        assert_eq!(line.http_version(), "HTTP/1.1");
    }

    #[test]
    fn decode_keeps_other_paths() {
        let decoder = RequestLineDecoder::new();

        assert_eq!(decoder.decode("POST /index.html HTTP/1.0").unwrap().path(), "/index.html");
        assert_eq!(decoder.decode("GET /home/ HTTP/1.1").unwrap().path(), "/home/");
        assert_eq!(decoder.decode("GET // HTTP/1.1").unwrap().path(), "//");
    }

    #[test]
    fn root_with_query_is_rewritten() {
        let line = RequestLineDecoder::new().decode("GET /?lang=en HTTP/1.1").unwrap();

        assert_eq!(line.path(), "/home");
        assert_eq!(line.parameter("lang"), Some("en"));
    }

    #[test]
    fn version_is_verbatim() {
        let line = RequestLineDecoder::new().decode("GET /a HTTP/2.0-draft").unwrap();
        assert_eq!(line.http_version(), "HTTP/2.0-draft");
    }

    #[test]
    fn trailing_space_is_ignored() {
        let line = RequestLineDecoder::new().decode("GET /a HTTP/1.1 ").unwrap();
        assert_eq!(line.http_version(), "HTTP/1.1");
    }

    #[test]
    fn wrong_token_count_is_malformed() {
        let decoder = RequestLineDecoder::new();

        for raw in ["GET /", "GET", "", "GET / HTTP/1.1 extra", "GET  / HTTP/1.1"] {
            match decoder.decode(raw) {
                Err(ParseError::MalformedRequestLine { line }) => assert_eq!(line, raw),
                other => panic!("unexpected result for {raw:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn version_without_prefix_is_malformed() {
        let result = RequestLineDecoder::new().decode("GET / FTP/1.1");
        assert!(matches!(result, Err(ParseError::MalformedRequestLine { .. })));

        let result = RequestLineDecoder::new().decode("GET / http/1.1");
        assert!(matches!(result, Err(ParseError::MalformedRequestLine { .. })));
    }

    #[test]
    fn unknown_method_propagates() {
        match RequestLineDecoder::new().decode("BREW /pot HTTP/1.1") {
            Err(ParseError::UnknownMethod { method }) => assert_eq!(method, "BREW"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn malformed_query_propagates() {
        let result = RequestLineDecoder::new().decode("GET /search?=cats HTTP/1.1");
        assert!(matches!(result, Err(ParseError::MalformedQueryString { .. })));
    }

    #[test]
    fn parameters_come_from_decoder_verbatim() {
        let mut methods = MockMethodResolver::new();
        methods.expect_resolve().times(1).returning(|token| {
            assert_eq!(token, "GET");
            Ok(Method::GET)
        });

        let mut params = MockParamDecoder::new();
        params.expect_decode().times(1).returning(|query| {
            assert_eq!(query, "q=cats&limit=10");
            Ok(Parameters::from([("decoded".to_string(), "by-collaborator".to_string())]))
        });

        let line = RequestLineDecoder::with(methods, params).decode("GET /search?q=cats&limit=10 HTTP/1.1").unwrap();

        assert_eq!(line.path(), "/search");
        assert_eq!(line.parameters(), Parameters::from([("decoded".to_string(), "by-collaborator".to_string())]));
    }

    #[test]
    fn everything_after_first_question_mark_is_the_query() {
        let mut params = MockParamDecoder::new();
        params.expect_decode().times(1).returning(|query| {
            assert_eq!(query, "a=1?b=2");
            Ok(Parameters::new())
        });

        let line = RequestLineDecoder::with(StandardMethods, params).decode("GET /x?a=1?b=2 HTTP/1.1").unwrap();
        assert_eq!(line.path(), "/x");
    }

    #[test]
    fn no_query_skips_param_decoder() {
        let mut params = MockParamDecoder::new();
        params.expect_decode().never();

        let line = RequestLineDecoder::with(StandardMethods, params).decode("GET /plain HTTP/1.1").unwrap();
        assert!(line.parameters().is_empty());
    }

    #[test]
    fn collaborator_errors_are_not_swallowed() {
        let mut methods = MockMethodResolver::new();
        methods.expect_resolve().returning(|token| Err(ParseError::unknown_method(token)));
        let mut params = MockParamDecoder::new();
        params.expect_decode().never();

        let result = RequestLineDecoder::with(methods, params).decode("GET /?a=1 HTTP/1.1");
        assert!(matches!(result, Err(ParseError::UnknownMethod { .. })));

        let failing = |_: &str| -> Result<Parameters, ParseError> { Err(ParseError::malformed_query_string("rejected")) };
        match RequestLineDecoder::with(StandardMethods, failing).decode("GET /?a=1 HTTP/1.1") {
            Err(ParseError::MalformedQueryString { reason }) => assert_eq!(reason, "rejected"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn malformed_line_skips_collaborators() {
        let mut methods = MockMethodResolver::new();
        methods.expect_resolve().never();
        let mut params = MockParamDecoder::new();
        params.expect_decode().never();

        let result = RequestLineDecoder::with(methods, params).decode("GET /?a=1");
        assert!(matches!(result, Err(ParseError::MalformedRequestLine { .. })));
    }

    #[test]
    fn returned_parameters_are_independent() {
        let line = RequestLineDecoder::new().decode("GET /search?q=cats HTTP/1.1").unwrap();

        let mut copy = line.parameters();
        copy.clear();

        assert_eq!(line.parameter("q"), Some("cats"));
        assert_eq!(line.parameters().len(), 1);
    }
}
