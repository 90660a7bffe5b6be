//! Reads a request head from stdin, decodes it and prints the result.
//!
//! ```text
//! printf 'GET /search?q=cats HTTP/1.1\r\nAccept: text/html, */*\r\n\r\n' \
//!     | cargo run -p micro-codec --example parse_request
//! ```

use std::io::{self, Read};

use bytes::BytesMut;
use micro_codec::codec::{HeaderEncoder, RequestHeadDecoder};
use tokio_util::codec::Decoder;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut input = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut input) {
        error!(cause = %e, "failed to read stdin");
        return;
    }

    let mut buf = BytesMut::from(&input[..]);
    let head = match RequestHeadDecoder::new().decode(&mut buf) {
        Ok(Some(head)) => head,
        Ok(None) => {
            error!(size = buf.len(), "incomplete request head");
            return;
        }
        Err(e) => {
            error!(cause = %e, "failed to decode request head");
            return;
        }
    };

    let line = head.line();
    info!(method = %line.method(), path = line.path(), version = line.http_version(), "decoded request line");
    for (key, value) in line.parameters() {
        info!(key = %key, value = %value, "query parameter");
    }

    let mut headers = head.headers().clone();
    headers.set_content_type("text/plain");
    print!("{}", HeaderEncoder::new().encode(&headers));

    if !buf.is_empty() {
        info!(body_size = buf.len(), "bytes left after the head");
    }
}
