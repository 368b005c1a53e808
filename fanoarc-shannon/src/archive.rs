//! Archive layout.
//!
//! ```text
//! tableSize                 1 byte (2 bytes LE with FanoConfig::WIDE)
//! repeat tableSize times, ascending symbol order:
//!   symbol                  1 byte
//!   bitLength               1 byte
//!   code                    ceil(bitLength / 8) bytes, MSB-first, zero-padded
//! totalBits                 u64 little-endian
//! payload                   ceil(totalBits / 8) bytes, MSB-first, zero-padded
//! ```
//!
//! When the table has a single entry with an empty code the payload is empty
//! and `totalBits` holds the number of times that symbol repeats. Nothing
//! bounds that count except `FanoConfig::max_output`; without a limit a
//! corrupt count makes the decoder write up to 2^64 bytes.
//!
//! There is no magic number and no checksum. A payload that ends before
//! `totalBits` bits have been read decodes to truncated output.

use crate::code::{Code, CodeTable};
use crate::config::{FanoConfig, TableSizeField};
use crate::trie::{DecodeTrie, Step};
use fanoarc_core::bitstream::{BitReader, BitWriter};
use fanoarc_core::error::{FanoArcError, Result};
use serde::Serialize;
use std::io::{self, BufRead, BufReader, Read, Write};

/// Width of the `totalBits` field.
pub const TOTAL_BITS_WIDTH: usize = 8;

/// Longest code a table entry can describe.
pub const MAX_CODE_LENGTH: usize = u8::MAX as usize;

/// Decoded archive header: the code table and the payload length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveHeader {
    /// Code table read from the archive.
    pub table: CodeTable,
    /// Payload bit count, or repeat count for a single-symbol table.
    pub total_bits: u64,
}

/// One table entry as reported by [`ArchiveHeader::info`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableEntryInfo {
    /// Byte value.
    pub symbol: u8,
    /// Code length in bits.
    pub bit_length: usize,
    /// Code as a string of `0`/`1`.
    pub code: String,
}

/// Summary of an archive header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveInfo {
    /// Number of table entries.
    pub table_size: usize,
    /// Payload bit count, or repeat count for a single-symbol table.
    pub total_bits: u64,
    /// Number of bytes the header occupies.
    pub header_bytes: u64,
    /// Table entries in ascending symbol order.
    pub entries: Vec<TableEntryInfo>,
}

impl ArchiveHeader {
    /// Summarize this header.
    pub fn info(&self, header_bytes: u64) -> ArchiveInfo {
        ArchiveInfo {
            table_size: self.table.len(),
            total_bits: self.total_bits,
            header_bytes,
            entries: self
                .table
                .iter()
                .map(|(symbol, code)| TableEntryInfo {
                    symbol,
                    bit_length: code.len(),
                    code: code.bits().iter().map(|&b| if b { '1' } else { '0' }).collect(),
                })
                .collect(),
        }
    }
}

/// Write the table size, table entries and `total_bits`.
///
/// Fails before writing anything if the table does not fit the configured
/// table-size field.
pub fn write_header<W: Write>(
    writer: &mut BitWriter<W>,
    table: &CodeTable,
    total_bits: u64,
    config: FanoConfig,
) -> Result<()> {
    let max = config.table_size_field.max_entries();
    if table.len() > max {
        return Err(FanoArcError::too_many_symbols(table.len(), max));
    }
    if let Some((symbol, code)) = table.iter().find(|(_, c)| c.len() > MAX_CODE_LENGTH) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "code for symbol {:#04x} is {} bits, limit is {}",
                symbol,
                code.len(),
                MAX_CODE_LENGTH
            ),
        )
        .into());
    }

    match config.table_size_field {
        TableSizeField::Byte => writer.write_bytes(&[table.len() as u8])?,
        TableSizeField::Wide => writer.write_bytes(&(table.len() as u16).to_le_bytes())?,
    }

    for (symbol, code) in table.iter() {
        writer.write_bytes(&[symbol, code.len() as u8])?;
        writer.write_bit_slice(code.bits())?;
        writer.align_to_byte()?;
    }

    writer.write_bytes(&total_bits.to_le_bytes())?;
    Ok(())
}

/// Encode every byte of `input` with `table`.
///
/// Returns the number of input bytes consumed. Fails if a byte has no code.
pub fn write_payload<R: Read, W: Write>(
    writer: &mut BitWriter<W>,
    table: &CodeTable,
    input: R,
) -> Result<u64> {
    let mut codes: Vec<Option<&Code>> = vec![None; 256];
    for (symbol, code) in table.iter() {
        codes[symbol as usize] = Some(code);
    }

    let mut reader = BufReader::new(input);
    let mut consumed = 0u64;
    loop {
        let chunk = reader.fill_buf()?;
        if chunk.is_empty() {
            break;
        }
        for &byte in chunk {
            let code = codes[byte as usize].ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("byte {:#04x} has no code in the table", byte),
                )
            })?;
            writer.write_bit_slice(code.bits())?;
        }
        let len = chunk.len();
        consumed += len as u64;
        reader.consume(len);
    }
    writer.align_to_byte()?;
    Ok(consumed)
}

/// Read the table size, table entries and `total_bits`.
pub fn read_header<R: Read>(reader: &mut BitReader<R>, config: FanoConfig) -> Result<ArchiveHeader> {
    let mut size = [0u8; 2];
    let width = config.table_size_field.width();
    reader
        .read_bytes(&mut size[..width])
        .map_err(|e| truncated(e, 0, "missing table size"))?;
    let table_size = u16::from_le_bytes(size) as usize;
    if table_size > config.table_size_field.max_entries() {
        return Err(FanoArcError::malformed(
            0,
            format!("table size {} exceeds 256 symbols", table_size),
        ));
    }

    let mut table = CodeTable::new();
    for index in 0..table_size {
        let offset = reader.bits_read() / 8;
        let mut entry = [0u8; 2];
        reader
            .read_bytes(&mut entry)
            .map_err(|e| truncated(e, offset, format!("truncated table entry {}", index)))?;
        let [symbol, bit_length] = entry;
        let bits = reader
            .read_bit_vec(bit_length as usize)
            .map_err(|e| truncated(e, offset, format!("truncated code for symbol {:#04x}", symbol)))?;
        reader.align_to_byte();
        table.insert(symbol, Code::from_bits(bits));
    }

    let offset = reader.bits_read() / 8;
    let mut total = [0u8; TOTAL_BITS_WIDTH];
    reader
        .read_bytes(&mut total)
        .map_err(|e| truncated(e, offset, "missing total bit count"))?;
    let total_bits = u64::from_le_bytes(total);

    log::debug!(
        "read archive header: {} table entries, total bits {}",
        table.len(),
        total_bits
    );
    Ok(ArchiveHeader { table, total_bits })
}

/// Map an end-of-input error to a malformed-archive error.
fn truncated(err: FanoArcError, offset: u64, message: impl Into<String>) -> FanoArcError {
    if err.is_eof() {
        FanoArcError::malformed(offset, message)
    } else {
        err
    }
}

/// Decode the payload that follows `header` into `output`.
///
/// Every decoded byte is also written to `echo` when one is given. Returns
/// the number of bytes written to `output`. Decoding stops early, without
/// an error, when the input runs out or a bit sequence matches no code.
///
/// With `max_output` set, an archive that would decode to more bytes fails
/// with [`FanoArcError::MalformedArchive`]. A single-symbol repeat count is
/// checked before anything is written.
pub fn read_payload<R: Read, W: Write>(
    reader: &mut BitReader<R>,
    header: &ArchiveHeader,
    output: &mut W,
    mut echo: Option<&mut dyn Write>,
    max_output: Option<u64>,
) -> Result<u64> {
    let limit = max_output.unwrap_or(u64::MAX);
    if let Some(symbol) = header.table.single_symbol() {
        if header.total_bits > limit {
            let offset = (reader.bits_read() / 8).saturating_sub(TOTAL_BITS_WIDTH as u64);
            return Err(FanoArcError::malformed(
                offset,
                format!(
                    "repeat count {} exceeds output limit of {} bytes",
                    header.total_bits, limit
                ),
            ));
        }
        return write_repeated(symbol, header.total_bits, output, echo);
    }

    let mut trie = DecodeTrie::new(&header.table);
    let mut emitted = 0u64;
    let mut consumed = 0u64;
    while consumed < header.total_bits {
        let bit = match reader.read_bit() {
            Ok(bit) => bit,
            Err(e) if e.is_eof() => {
                log::warn!(
                    "archive payload ends after {} of {} bits",
                    consumed,
                    header.total_bits
                );
                break;
            }
            Err(e) => return Err(e),
        };
        consumed += 1;

        match trie.step(bit) {
            Step::Partial => {}
            Step::Symbol(symbol) => {
                if emitted == limit {
                    return Err(FanoArcError::malformed(
                        reader.bits_read().div_ceil(8),
                        format!("payload decodes past output limit of {} bytes", limit),
                    ));
                }
                output.write_all(&[symbol])?;
                if let Some(echo) = echo.as_mut() {
                    echo.write_all(&[symbol])?;
                }
                emitted += 1;
            }
            Step::Dead => {
                log::warn!(
                    "bit {} of the payload matches no code, stopping",
                    consumed - 1
                );
                break;
            }
        }
    }
    Ok(emitted)
}

/// Write `symbol` `count` times.
fn write_repeated<W: Write>(
    symbol: u8,
    count: u64,
    output: &mut W,
    mut echo: Option<&mut dyn Write>,
) -> Result<u64> {
    let block = [symbol; 4096];
    let mut remaining = count;
    while remaining > 0 {
        let n = remaining.min(block.len() as u64) as usize;
        output.write_all(&block[..n])?;
        if let Some(echo) = echo.as_mut() {
            echo.write_all(&block[..n])?;
        }
        remaining -= n as u64;
    }
    Ok(count)
}
