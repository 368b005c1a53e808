//! Byte frequency analysis.

use fanoarc_core::error::Result;
use std::io::{BufRead, BufReader, Read};

/// Occurrence count of one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyEntry {
    /// Byte value.
    pub symbol: u8,
    /// Number of times `symbol` occurs.
    pub count: u64,
}

/// Symbol counts in first-seen order, plus their sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
    /// Index into `entries` for each symbol already seen.
    slots: Vec<Option<u16>>,
    total: u64,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            slots: vec![None; 256],
            total: 0,
        }
    }

    /// Count every byte of `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        table.update(data);
        table
    }

    /// Build a table from precomputed `(symbol, count)` pairs.
    ///
    /// Repeated symbols have their counts added together.
    pub fn from_counts(counts: impl IntoIterator<Item = (u8, u64)>) -> Self {
        let mut table = Self::new();
        for (symbol, count) in counts {
            match table.slots[symbol as usize] {
                Some(index) => table.entries[index as usize].count += count,
                None => {
                    table.slots[symbol as usize] = Some(table.entries.len() as u16);
                    table.entries.push(FrequencyEntry { symbol, count });
                }
            }
            table.total += count;
        }
        table
    }

    /// Count every byte available from `reader` until end of input.
    pub fn analyze<R: Read>(reader: R) -> Result<Self> {
        let mut table = Self::new();
        let mut reader = BufReader::new(reader);
        loop {
            let chunk = reader.fill_buf()?;
            if chunk.is_empty() {
                break;
            }
            let len = chunk.len();
            table.update(chunk);
            reader.consume(len);
        }
        Ok(table)
    }

    /// Count the bytes of `data` on top of what has been seen so far.
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            match self.slots[byte as usize] {
                Some(index) => self.entries[index as usize].count += 1,
                None => {
                    self.slots[byte as usize] = Some(self.entries.len() as u16);
                    self.entries.push(FrequencyEntry {
                        symbol: byte,
                        count: 1,
                    });
                }
            }
        }
        self.total += data.len() as u64;
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no bytes have been counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count for `symbol`, zero if it never occurred.
    pub fn count(&self, symbol: u8) -> u64 {
        self.slots[symbol as usize]
            .map(|index| self.entries[index as usize].count)
            .unwrap_or(0)
    }

    /// Entries sorted by descending count.
    ///
    /// The sort is stable, so equal counts keep first-seen order.
    pub fn sorted_desc(&self) -> Vec<FrequencyEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
