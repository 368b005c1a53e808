//! Core traits for compression.
//!
//! Codecs in this workspace are whole-buffer: an archive carries its code
//! table up front, so there is no incremental interface.

use crate::error::Result;

/// A whole-buffer compressor (encoder).
pub trait Compressor {
    /// Compress all of `input` into a freshly allocated archive.
    fn compress_all(&mut self, input: &[u8]) -> Result<Vec<u8>>;
}

/// A whole-buffer decompressor (decoder).
pub trait Decompressor {
    /// Decompress a complete archive.
    fn decompress_all(&mut self, input: &[u8]) -> Result<Vec<u8>>;
}
