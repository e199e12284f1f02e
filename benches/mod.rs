use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches,
    network::http::bench_scan_headers,
    network::http::bench_read_body,
    network::http::bench_exchange
);
criterion_main!(benches);
