//! Bit-level I/O for prefix codes.
//!
//! This module provides `BitReader` and `BitWriter` for reading and writing
//! data at the bit level, plus the slice helpers [`pack_bits`] and
//! [`unpack_bits`].
//!
//! # Bit Ordering
//!
//! Bits are packed MSB-first (Most Significant Bit first): the first bit
//! written lands in bit 7 of the first byte. A trailing partial byte is
//! padded with zero bits in its low-order positions. This differs from
//! DEFLATE/LZH, which pack LSB-first.
//!
//! # Example
//!
//! ```
//! use fanoarc_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! // Writing bits
//! let mut writer = BitWriter::new(Vec::new());
//! writer.write_bits(0b101, 3).unwrap();  // Write 3 bits
//! writer.write_bits(0b1100, 4).unwrap(); // Write 4 bits
//! let output = writer.finish().unwrap();
//! assert_eq!(output, vec![0b1011_1000]);
//!
//! // Reading bits
//! let mut reader = BitReader::new(Cursor::new(&output));
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
//! ```

use crate::error::{FanoArcError, Result};
use std::io::{Read, Write};

/// A bit-level reader that wraps any `Read` implementation.
///
/// Bytes are pulled from the underlying reader one at a time, so wrap file
/// handles in a `BufReader`.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Current byte (MSB-first).
    buffer: u8,
    /// Number of unread bits left in `buffer` (0-8).
    bits_in_buffer: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<R: Read> BitReader<R> {
    /// Create a new `BitReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Get the total number of bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Pull the next byte into the buffer.
    #[inline]
    fn fill_buffer(&mut self) -> Result<()> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Err(FanoArcError::unexpected_eof(1)),
                Ok(_) => break,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        self.buffer = byte[0];
        self.bits_in_buffer = 8;
        Ok(())
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.bits_in_buffer == 0 {
            self.fill_buffer()?;
        }
        self.bits_in_buffer -= 1;
        self.total_bits_read += 1;
        Ok((self.buffer >> self.bits_in_buffer) & 1 != 0)
    }

    /// Read up to 32 bits from the stream.
    ///
    /// The first bit read ends up in the most significant position of the
    /// returned value.
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        debug_assert!(count <= 32, "Cannot read more than 32 bits at once");

        let mut value = 0u32;
        for _ in 0..count {
            value = (value << 1) | self.read_bit()? as u32;
        }
        Ok(value)
    }

    /// Read exactly `count` bits into a vector.
    pub fn read_bit_vec(&mut self, count: usize) -> Result<Vec<bool>> {
        let mut bits = Vec::with_capacity(count);
        for _ in 0..count {
            bits.push(self.read_bit()?);
        }
        Ok(bits)
    }

    /// Align to the next byte boundary by discarding partial bits.
    pub fn align_to_byte(&mut self) {
        self.total_bits_read += self.bits_in_buffer as u64;
        self.bits_in_buffer = 0;
    }

    /// Read bytes directly after discarding any partial bits.
    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        self.align_to_byte();
        self.reader.read_exact(buf).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                FanoArcError::unexpected_eof(buf.len() * 8)
            } else {
                e.into()
            }
        })?;
        self.total_bits_read += buf.len() as u64 * 8;
        Ok(())
    }
}

/// A bit-level writer that wraps any `Write` implementation.
///
/// `BitWriter` accumulates bits in a one-byte buffer and writes each byte
/// as soon as it is complete. Call [`BitWriter::flush`] or
/// [`BitWriter::finish`] when done to write the zero-padded partial byte.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Partial byte (MSB-first).
    buffer: u8,
    /// Number of bits in buffer (0-7).
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new `BitWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
        }
    }

    /// Get the total number of bits written so far.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.buffer |= (bit as u8) << (7 - self.bits_in_buffer);
        self.bits_in_buffer += 1;
        self.total_bits_written += 1;

        if self.bits_in_buffer == 8 {
            self.writer.write_all(&[self.buffer])?;
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
        Ok(())
    }

    /// Write the low `count` bits of `value`, most significant first.
    pub fn write_bits(&mut self, value: u32, count: u8) -> Result<()> {
        debug_assert!(count <= 32, "Cannot write more than 32 bits at once");

        for shift in (0..count).rev() {
            self.write_bit((value >> shift) & 1 != 0)?;
        }
        Ok(())
    }

    /// Write every bit of `bits` in order.
    pub fn write_bit_slice(&mut self, bits: &[bool]) -> Result<()> {
        for &bit in bits {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    /// Pad to byte boundary with zeros.
    pub fn align_to_byte(&mut self) -> Result<()> {
        if self.bits_in_buffer != 0 {
            self.writer.write_all(&[self.buffer])?;
            self.total_bits_written += (8 - self.bits_in_buffer) as u64;
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
        Ok(())
    }

    /// Write bytes directly after padding to a byte boundary.
    pub fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        self.align_to_byte()?;
        self.writer.write_all(buf)?;
        self.total_bits_written += buf.len() as u64 * 8;
        Ok(())
    }

    /// Pad the partial byte and flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.align_to_byte()?;
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.writer)
    }
}

/// Pack `bits` MSB-first into `ceil(bits.len() / 8)` bytes.
pub fn pack_bits(bits: &[bool]) -> Vec<u8> {
    let mut bytes = vec![0u8; bits.len().div_ceil(8)];
    for (i, &bit) in bits.iter().enumerate() {
        if bit {
            bytes[i / 8] |= 1 << (7 - i % 8);
        }
    }
    bytes
}

/// Unpack exactly `count` bits from `bytes`, ignoring padding past `count`.
pub fn unpack_bits(bytes: &[u8], count: usize) -> Result<Vec<bool>> {
    let needed = count.div_ceil(8);
    if bytes.len() < needed {
        return Err(FanoArcError::unexpected_eof(count - bytes.len() * 8));
    }
    Ok((0..count)
        .map(|i| (bytes[i / 8] >> (7 - i % 8)) & 1 != 0)
        .collect())
}
