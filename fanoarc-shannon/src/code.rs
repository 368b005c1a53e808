//! Prefix codes and the symbol-to-code table.

use crate::frequency::FrequencyTable;
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

/// A variable-length bit sequence, first bit first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    /// Create an empty code.
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Wrap an existing bit sequence.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Append one bit.
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// The bits in emission order.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the code has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Whether `self` is a prefix of `other` (or equal to it).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bits.is_empty() {
            return f.write_str("(empty)");
        }
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Mapping from symbol to its code.
///
/// Iteration is in ascending symbol order, which is also the order entries
/// are written to an archive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the code for `symbol`, returning the previous one.
    pub fn insert(&mut self, symbol: u8, code: Code) -> Option<Code> {
        self.codes.insert(symbol, code)
    }

    /// Code for `symbol`.
    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    /// Mutable code for `symbol`, created empty if absent.
    pub(crate) fn entry(&mut self, symbol: u8) -> &mut Code {
        self.codes.entry(symbol).or_default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// The symbol of a one-entry table whose code is empty.
    ///
    /// Such a table encodes its input as zero payload bits, so the archive
    /// stores the occurrence count in place of the bit count.
    pub fn single_symbol(&self) -> Option<u8> {
        match self.codes.iter().next() {
            Some((&symbol, code)) if self.codes.len() == 1 && code.is_empty() => Some(symbol),
            _ => None,
        }
    }

    /// Length in bits of the encoded payload for `frequencies`.
    ///
    /// Symbols missing from the table contribute nothing.
    pub fn encoded_bits(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .entries()
            .iter()
            .filter_map(|e| self.get(e.symbol).map(|c| e.count * c.len() as u64))
            .sum()
    }

    /// Whether no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Code> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !a.is_prefix_of(b))
        })
    }

    /// Write one line per entry: hex symbol, quoted printable ASCII, code.
    pub fn write_table<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (symbol, code) in self.iter() {
            if symbol.is_ascii_graphic() || symbol == b' ' {
                writeln!(out, "{:#04x} '{}' {}", symbol, symbol as char, code)?;
            } else {
                writeln!(out, "{:#04x}     {}", symbol, code)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        self.write_table(&mut buf).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        Code::from_bits(s.chars().map(|c| c == '1').collect())
    }

    #[test]
    fn test_code_display() {
        assert_eq!(code("0110").to_string(), "0110");
        assert_eq!(Code::new().to_string(), "(empty)");
    }

    #[test]
    fn test_prefix_free() {
        let mut table = CodeTable::new();
        table.insert(b'a', code("0"));
        table.insert(b'b', code("10"));
        table.insert(b'c', code("11"));
        assert!(table.is_prefix_free());

        table.insert(b'd', code("1"));
        assert!(!table.is_prefix_free());
    }

    #[test]
    fn test_single_symbol() {
        let mut table = CodeTable::new();
        assert_eq!(table.single_symbol(), None);
        table.insert(b'x', Code::new());
        assert_eq!(table.single_symbol(), Some(b'x'));
        table.insert(b'y', code("1"));
        assert_eq!(table.single_symbol(), None);
    }

    #[test]
    fn test_encoded_bits() {
        let freq = FrequencyTable::from_bytes(b"aaabbc");
        let mut table = CodeTable::new();
        table.insert(b'a', code("0"));
        table.insert(b'b', code("10"));
        table.insert(b'c', code("11"));
        assert_eq!(table.encoded_bits(&freq), 3 + 4 + 2);
    }

    #[test]
    fn test_write_table() {
        let mut table = CodeTable::new();
        table.insert(b'A', code("0"));
        table.insert(0x0A, code("1"));
        let text = table.to_string();
        assert_eq!(text, "0x0a     1\n0x41 'A' 0\n");
    }
}
