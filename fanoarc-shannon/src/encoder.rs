//! Shannon-Fano encoder (compression).

use crate::archive;
use crate::code::CodeTable;
use crate::config::FanoConfig;
use crate::frequency::FrequencyTable;
use crate::tree::build_code_table;
use fanoarc_core::bitstream::BitWriter;
use fanoarc_core::error::{FanoArcError, Result};
use fanoarc_core::traits::Compressor;
use std::io::{self, Read, Write};

/// Figures reported after writing an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeStats {
    /// Bytes read from the input.
    pub input_bytes: u64,
    /// Bytes written to the archive.
    pub output_bytes: u64,
    /// Number of code table entries.
    pub table_size: usize,
    /// Value of the `totalBits` field.
    pub total_bits: u64,
}

impl EncodeStats {
    /// Archive size as a percentage of input size.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        self.output_bytes as f64 / self.input_bytes as f64 * 100.0
    }
}

/// Shannon-Fano encoder for compression.
///
/// Encoding takes two passes over the input: [`ShannonFanoEncoder::analyze`]
/// counts symbols and builds the code table, then
/// [`ShannonFanoEncoder::write_archive`] reads the input again from the
/// start and writes the archive.
#[derive(Debug, Clone)]
pub struct ShannonFanoEncoder {
    config: FanoConfig,
    frequencies: FrequencyTable,
    table: CodeTable,
}

impl ShannonFanoEncoder {
    /// Create a new encoder with the given configuration.
    pub fn new(config: FanoConfig) -> Self {
        Self {
            config,
            frequencies: FrequencyTable::new(),
            table: CodeTable::new(),
        }
    }

    /// First pass: count the symbols of `input` and build the code table.
    ///
    /// Fails with [`FanoArcError::TooManySymbols`] if the table will not fit
    /// the configured table-size field.
    pub fn analyze<R: Read>(&mut self, input: R) -> Result<&CodeTable> {
        let frequencies = FrequencyTable::analyze(input)?;
        self.prepare(frequencies)
    }

    /// First pass over an in-memory buffer.
    pub fn analyze_bytes(&mut self, input: &[u8]) -> Result<&CodeTable> {
        self.prepare(FrequencyTable::from_bytes(input))
    }

    fn prepare(&mut self, frequencies: FrequencyTable) -> Result<&CodeTable> {
        let max = self.config.table_size_field.max_entries();
        if frequencies.len() > max {
            return Err(FanoArcError::too_many_symbols(frequencies.len(), max));
        }
        self.table = build_code_table(&frequencies);
        self.frequencies = frequencies;
        Ok(&self.table)
    }

    /// The code table built by the last analysis.
    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// The symbol counts gathered by the last analysis.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Value written to the `totalBits` field.
    pub fn total_bits(&self) -> u64 {
        if self.table.single_symbol().is_some() {
            self.frequencies.total()
        } else {
            self.table.encoded_bits(&self.frequencies)
        }
    }

    /// Second pass: write the archive for `input` to `output`.
    ///
    /// `input` must yield the same bytes that were analyzed.
    pub fn write_archive<R: Read, W: Write>(&self, input: R, output: W) -> Result<EncodeStats> {
        let total_bits = self.total_bits();
        let mut writer = BitWriter::new(output);
        archive::write_header(&mut writer, &self.table, total_bits, self.config)?;
        let input_bytes = archive::write_payload(&mut writer, &self.table, input)?;
        if input_bytes != self.frequencies.total() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "input changed since analysis: {} bytes analyzed, {} encoded",
                    self.frequencies.total(),
                    input_bytes
                ),
            )
            .into());
        }
        writer.flush()?;
        let stats = EncodeStats {
            input_bytes,
            output_bytes: writer.bits_written() / 8,
            table_size: self.table.len(),
            total_bits,
        };
        log::debug!(
            "encoded {} bytes into {} bytes ({} table entries, {} bits)",
            stats.input_bytes,
            stats.output_bytes,
            stats.table_size,
            stats.total_bits
        );
        Ok(stats)
    }

    /// Encode an in-memory buffer.
    pub fn encode(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.analyze_bytes(input)?;
        let mut output = Vec::new();
        self.write_archive(input, &mut output)?;
        Ok(output)
    }
}

impl Default for ShannonFanoEncoder {
    fn default() -> Self {
        Self::new(FanoConfig::default())
    }
}

impl Compressor for ShannonFanoEncoder {
    fn compress_all(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.encode(input)
    }
}
