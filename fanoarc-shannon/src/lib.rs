//! # fanoarc-shannon: Pure Rust Shannon-Fano Compression
//!
//! This crate compresses a file by Shannon-Fano coding its bytes and writes
//! a single-file archive holding the code table followed by the packed
//! bitstream.
//!
//! ## Pipeline
//!
//! - **Frequency analysis**: count each byte value, first-seen order
//! - **Code construction**: sort by descending count, split recursively into
//!   two windows of near-equal weight, `0` to the left and `1` to the right
//! - **Archive**: code table, total bit count, MSB-first packed payload
//!   (see [`archive`] for the exact layout)
//! - **Decoding**: rebuild the table from the archive, walk a bit trie
//!
//! ## Example
//!
//! ```rust
//! use fanoarc_shannon::{compress, decompress, FanoConfig};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! // Compress
//! let compressed = compress(original, FanoConfig::COMPATIBLE).unwrap();
//!
//! // Decompress
//! let decompressed = decompress(&compressed, FanoConfig::COMPATIBLE).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Table Size Limit
//!
//! The standard layout stores the number of table entries in one byte, so an
//! input that uses all 256 byte values cannot be represented. Such inputs
//! are rejected with [`FanoArcError::TooManySymbols`] unless
//! [`FanoConfig::WIDE`] is used on both sides:
//!
//! ```rust
//! use fanoarc_shannon::{compress, decompress, FanoArcError, FanoConfig};
//!
//! let all_bytes: Vec<u8> = (0..=255).collect();
//! assert!(matches!(
//!     compress(&all_bytes, FanoConfig::COMPATIBLE),
//!     Err(FanoArcError::TooManySymbols { .. })
//! ));
//!
//! let compressed = compress(&all_bytes, FanoConfig::WIDE).unwrap();
//! assert_eq!(decompress(&compressed, FanoConfig::WIDE).unwrap(), all_bytes);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod archive;
pub mod code;
mod config;
mod decoder;
mod encoder;
pub mod frequency;
pub mod tree;
pub mod trie;

pub use archive::{ArchiveHeader, ArchiveInfo, TableEntryInfo};
pub use code::{Code, CodeTable};
pub use config::{FanoConfig, TableSizeField};
pub use decoder::{DecodeStats, ShannonFanoDecoder};
pub use encoder::{EncodeStats, ShannonFanoEncoder};
pub use fanoarc_core::error::{FanoArcError, Result};
pub use frequency::{FrequencyEntry, FrequencyTable};
pub use tree::build_code_table;

use std::fs::File;
use std::io::{BufReader, BufWriter, Seek, SeekFrom, Write};
use std::path::Path;

/// Outcome of [`compress_file`].
#[derive(Debug, Clone)]
pub struct CompressReport {
    /// Sizes and counts of the written archive.
    pub stats: EncodeStats,
    /// The code table, for printing.
    pub table: CodeTable,
}

/// Compress data into an archive with the given configuration.
///
/// # Example
///
/// ```rust
/// use fanoarc_shannon::{compress, FanoConfig};
///
/// let data = b"aaaaaaaaaaaaaaaabbbbbbbbcccc";
/// let compressed = compress(data, FanoConfig::COMPATIBLE).unwrap();
/// assert!(compressed.len() < data.len());
/// ```
pub fn compress(data: &[u8], config: FanoConfig) -> Result<Vec<u8>> {
    ShannonFanoEncoder::new(config).encode(data)
}

/// Decompress an archive produced with the same configuration.
pub fn decompress(data: &[u8], config: FanoConfig) -> Result<Vec<u8>> {
    ShannonFanoDecoder::new(config).decode(data)
}

/// Compress the file at `input` into an archive at `output`.
///
/// The input is read twice: once to build the code table, once to encode.
/// The output file is only created after the table has been built, so an
/// input rejected with [`FanoArcError::TooManySymbols`] leaves no archive
/// behind.
pub fn compress_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: FanoConfig,
) -> Result<CompressReport> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let mut source = File::open(input).map_err(|e| FanoArcError::open(input, e))?;

    let mut encoder = ShannonFanoEncoder::new(config);
    encoder.analyze(&mut source)?;

    let sink = File::create(output).map_err(|e| FanoArcError::open(output, e))?;
    source.seek(SeekFrom::Start(0))?;
    let stats = encoder.write_archive(BufReader::new(source), BufWriter::new(sink))?;

    log::debug!(
        "compressed {} -> {}: {} -> {} bytes",
        input.display(),
        output.display(),
        stats.input_bytes,
        stats.output_bytes
    );
    Ok(CompressReport {
        stats,
        table: encoder.table().clone(),
    })
}

/// Decompress the archive at `input` into `output`.
///
/// Pass `echo` to receive a copy of every decoded byte. Set
/// [`FanoConfig::max_output`] to bound the output of untrusted archives.
pub fn decompress_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: FanoConfig,
    echo: Option<&mut dyn Write>,
) -> Result<DecodeStats> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let source = File::open(input).map_err(|e| FanoArcError::open(input, e))?;
    let sink = File::create(output).map_err(|e| FanoArcError::open(output, e))?;

    let mut decoder = ShannonFanoDecoder::new(config);
    if let Some(echo) = echo {
        decoder = decoder.with_echo(echo);
    }
    let stats = decoder.decode_stream(BufReader::new(source), BufWriter::new(sink))?;

    log::debug!(
        "decompressed {} -> {}: {} bytes",
        input.display(),
        output.display(),
        stats.output_bytes
    );
    Ok(stats)
}

/// Read the header of the archive at `path` without decoding the payload.
pub fn read_archive_info(path: impl AsRef<Path>, config: FanoConfig) -> Result<ArchiveInfo> {
    let path = path.as_ref();
    let source = File::open(path).map_err(|e| FanoArcError::open(path, e))?;
    let mut reader = fanoarc_core::BitReader::new(BufReader::new(source));
    let header = archive::read_header(&mut reader, config)?;
    Ok(header.info(reader.bits_read() / 8))
}
