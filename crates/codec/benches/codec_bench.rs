use bytes::BytesMut;
use criterion::{Criterion, criterion_group, criterion_main};
use micro_codec::codec::{HeaderDecoder, HeaderEncoder, RequestHeadDecoder, RequestLineDecoder};
use std::hint::black_box;
use tokio_util::codec::Decoder;

const REQUEST_LINE: &str = "GET /index/?a=1&b=2&c=3 HTTP/1.1";

const HEADER_BLOCK: &str = "Host: 127.0.0.1:8080\r\n\
    Connection: keep-alive\r\n\
    Cache-Control: max-age=0\r\n\
    User-Agent: Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36\r\n\
    Accept: text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8\r\n\
    Accept-Encoding: gzip, deflate, br\r\n\
    Accept-Language: zh-CN,zh;q=0.9,en-US;q=0.8,en;q=0.7\r\n";

fn bench_request_line_decoder(c: &mut Criterion) {
    let decoder = RequestLineDecoder::new();

    c.bench_function("decode_request_line", |b| {
        b.iter(|| decoder.decode(black_box(REQUEST_LINE)).unwrap());
    });
}

fn bench_header_decoder(c: &mut Criterion) {
    let decoder = HeaderDecoder::new();

    c.bench_function("decode_header_block", |b| {
        b.iter(|| decoder.decode(black_box(HEADER_BLOCK)).unwrap());
    });
}

fn bench_header_encoder(c: &mut Criterion) {
    let mut headers = HeaderDecoder::new().decode(HEADER_BLOCK).unwrap();
    headers.set_content_type("text/html");
    let encoder = HeaderEncoder::new();

    c.bench_function("encode_header_block", |b| {
        b.iter(|| encoder.encode(black_box(&headers)));
    });
}

fn bench_request_head_decoder(c: &mut Criterion) {
    let request = format!("{REQUEST_LINE}\r\n{HEADER_BLOCK}\r\n");

    c.bench_function("decode_request_head", |b| {
        b.iter(|| {
            let mut buf = BytesMut::from(request.as_str());
            RequestHeadDecoder::new().decode(black_box(&mut buf)).unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_request_line_decoder,
    bench_header_decoder,
    bench_header_encoder,
    bench_request_head_decoder
);
criterion_main!(benches);
