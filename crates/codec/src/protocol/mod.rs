//! Data model shared by the decoders and the encoder.
//!
//! - **Headers**: [`HeaderMap`], an ordered, case-preserving
//!   multimap with an out-of-band content type
//! - **Request line**: [`RequestLine`] and the combined
//!   [`RequestHead`]
//! - **Collaborators**: [`MethodResolver`] for the method token and
//!   [`ParamDecoder`] for the query string, each with a default implementation
//! - **Errors**: [`ParseError`]

mod header;
pub use header::HeaderMap;
pub use header::CONTENT_TYPE;

mod request_line;
pub use request_line::RequestHead;
pub use request_line::RequestLine;

mod method;
pub use method::MethodResolver;
pub use method::StandardMethods;
#[cfg(test)]
pub(crate) use method::MockMethodResolver;

mod params;
pub use params::ParamDecoder;
pub use params::Parameters;
pub use params::UrlEncodedParams;
#[cfg(test)]
pub(crate) use params::MockParamDecoder;

mod error;
pub use error::ParseError;
