//! Benchmarks for message encoding and HTTP request framing.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gelf_transport::{
    GelfLevel, GelfMessage, HttpTransportConfig, MessageEncoder, http_transport::HttpRequest,
};

fn sample_message() -> GelfMessage {
    GelfMessage::new("web-01", "request served")
        .with_full_message("GET /index.html 200 OK in 12ms")
        .with_level(GelfLevel::Informational)
        .with_facility("nginx")
        .with_additional("status", 200)
        .with_additional("duration_ms", 12)
        .with_additional("path", "/index.html")
}

fn bench_encoders(c: &mut Criterion) {
    let message = sample_message();
    c.bench_function("encode_json", |b| {
        b.iter(|| MessageEncoder::Json.encode(black_box(&message)))
    });
    c.bench_function("encode_gzip", |b| {
        let encoder = MessageEncoder::compressed();
        b.iter(|| encoder.encode(black_box(&message)))
    });
}

fn bench_framing(c: &mut Criterion) {
    let config = HttpTransportConfig::default();
    let body = MessageEncoder::Json
        .encode(&sample_message())
        .unwrap_or_default();
    c.bench_function("frame_http_request", |b| {
        b.iter(|| {
            HttpRequest::post(black_box(&config), &MessageEncoder::Json, body.clone()).to_bytes()
        })
    });
}

criterion_group!(benches, bench_encoders, bench_framing);
criterion_main!(benches);
