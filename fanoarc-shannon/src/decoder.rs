//! Shannon-Fano decoder (decompression).

use crate::archive::{self, ArchiveHeader};
use crate::config::FanoConfig;
use fanoarc_core::bitstream::BitReader;
use fanoarc_core::error::Result;
use fanoarc_core::traits::Decompressor;
use std::fmt;
use std::io::{Read, Write};

/// Figures reported after decoding an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeStats {
    /// Number of code table entries read.
    pub table_size: usize,
    /// Value of the `totalBits` field.
    pub total_bits: u64,
    /// Bytes written to the output.
    pub output_bytes: u64,
}

/// Shannon-Fano decoder for decompression.
///
/// The code table is rebuilt from each archive; nothing carries over
/// between calls. An optional echo sink receives a copy of every decoded
/// byte.
pub struct ShannonFanoDecoder<'a> {
    config: FanoConfig,
    echo: Option<&'a mut dyn Write>,
}

impl<'a> ShannonFanoDecoder<'a> {
    /// Create a new decoder with the given configuration.
    pub fn new(config: FanoConfig) -> Self {
        Self { config, echo: None }
    }

    /// Copy every decoded byte to `echo` as well.
    pub fn with_echo(mut self, echo: &'a mut dyn Write) -> Self {
        self.echo = Some(echo);
        self
    }

    /// Read only the header of an archive.
    pub fn read_header<R: Read>(&self, input: R) -> Result<ArchiveHeader> {
        archive::read_header(&mut BitReader::new(input), self.config)
    }

    /// Decode the archive in `input` into `output`.
    pub fn decode_stream<R: Read, W: Write>(&mut self, input: R, mut output: W) -> Result<DecodeStats> {
        let mut reader = BitReader::new(input);
        let header = archive::read_header(&mut reader, self.config)?;
        let echo = self.echo.as_mut().map(|e| &mut **e as &mut dyn Write);
        let output_bytes = archive::read_payload(
            &mut reader,
            &header,
            &mut output,
            echo,
            self.config.max_output,
        )?;
        output.flush()?;
        if let Some(echo) = self.echo.as_mut() {
            echo.flush()?;
        }
        Ok(DecodeStats {
            table_size: header.table.len(),
            total_bits: header.total_bits,
            output_bytes,
        })
    }

    /// Decode an in-memory archive.
    pub fn decode(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.decode_stream(input, &mut output)?;
        Ok(output)
    }
}

impl Default for ShannonFanoDecoder<'_> {
    fn default() -> Self {
        Self::new(FanoConfig::default())
    }
}

impl fmt::Debug for ShannonFanoDecoder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShannonFanoDecoder")
            .field("config", &self.config)
            .field("echo", &self.echo.is_some())
            .finish()
    }
}

impl Decompressor for ShannonFanoDecoder<'_> {
    fn decompress_all(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.decode(input)
    }
}
