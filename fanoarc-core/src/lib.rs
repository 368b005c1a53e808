//! # fanoarc Core
//!
//! Core components for the fanoarc compressor.
//!
//! This crate provides the fundamental building blocks:
//!
//! - [`bitstream`]: MSB-first bit-level I/O for variable-length prefix codes
//! - [`traits`]: Core traits for compression/decompression
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: CLI                                                 │
//! │     fanoarc compress / decompress / info               │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Shannon-Fano tables, archive layout                │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                              │
//! │     BitReader/BitWriter, errors                        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fanoarc_core::bitstream::{pack_bits, unpack_bits};
//!
//! let bits = [true, false, true, true];
//! let packed = pack_bits(&bits);
//! assert_eq!(packed, vec![0b1011_0000]);
//! assert_eq!(unpack_bits(&packed, 4).unwrap(), bits);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter, pack_bits, unpack_bits};
pub use error::{FanoArcError, Result};
pub use traits::{Compressor, Decompressor};
