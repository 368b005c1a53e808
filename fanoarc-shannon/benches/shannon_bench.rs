//! Performance benchmarks for fanoarc-shannon
//!
//! This benchmark suite evaluates:
//! - Code table construction for different alphabets
//! - Compression/decompression throughput
//! - Behaviour across data patterns (uniform, skewed, text, random)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fanoarc_shannon::{FanoConfig, FrequencyTable, build_code_table, compress, decompress};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

/// The random pattern uses all 256 byte values, so every benchmark runs with
/// the two-byte table size.
const CONFIG: FanoConfig = FanoConfig::WIDE;

mod test_data {
    /// Uniform data - a single symbol (empty code, no payload)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - all byte values, near-equal counts
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Skewed data - geometric distribution over 16 symbols
    pub fn skewed(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x0F1E2D3C4B5A6978;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            let r = (seed >> 48) as u16 | 1;
            data.push(r.trailing_zeros().min(15) as u8);
        }
        data
    }

    /// Text-like data - realistic scenario
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! ";
        text.iter().copied().cycle().take(size).collect()
    }
}

const SIZES: [(&str, usize); 2] = [("64KB", 64 * 1024), ("1MB", 1024 * 1024)];

const PATTERNS: [(&str, PatternGenerator); 4] = [
    ("uniform", test_data::uniform as PatternGenerator),
    ("random", test_data::random as PatternGenerator),
    ("skewed", test_data::skewed as PatternGenerator),
    ("text", test_data::text_like as PatternGenerator),
];

/// Benchmark frequency analysis plus code construction
fn bench_code_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("code_table");

    for (pattern_name, generator) in PATTERNS {
        let data = generator(64 * 1024);
        group.bench_with_input(BenchmarkId::from_parameter(pattern_name), &data, |b, data| {
            b.iter(|| {
                let table = build_code_table(&FrequencyTable::from_bytes(black_box(data)));
                black_box(table);
            });
        });
    }

    group.finish();
}

/// Benchmark compression speed for different data sizes and patterns
fn bench_compression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_speed");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let data = generator(size);
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &data, |b, data| {
                b.iter(|| {
                    let compressed = compress(black_box(data), CONFIG).unwrap();
                    black_box(compressed);
                });
            });
        }
    }

    group.finish();
}

/// Benchmark decompression speed
fn bench_decompression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompression_speed");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let compressed = compress(&generator(size), CONFIG).unwrap();
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &compressed, |b, compressed| {
                b.iter(|| {
                    let decompressed = decompress(black_box(compressed), CONFIG).unwrap();
                    black_box(decompressed);
                });
            });
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_code_table,
    bench_compression_speed,
    bench_decompression_speed
);
criterion_main!(benches);
