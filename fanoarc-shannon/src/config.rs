//! Archive layout configuration.

/// Width of the table-size field at the start of an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableSizeField {
    /// One unsigned byte. Holds at most 255 entries.
    #[default]
    Byte,
    /// Two bytes, little-endian. Holds all 256 symbols.
    Wide,
}

impl TableSizeField {
    /// Number of bytes the field occupies.
    pub fn width(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Wide => 2,
        }
    }

    /// Largest table size the field can represent.
    pub fn max_entries(self) -> usize {
        match self {
            Self::Byte => u8::MAX as usize,
            Self::Wide => 256,
        }
    }
}

/// Shannon-Fano archive configuration parameters.
///
/// The layout is not self-describing, so an archive must be decompressed
/// with the configuration it was compressed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FanoConfig {
    /// Width of the table-size field.
    pub table_size_field: TableSizeField,
    /// Most bytes a decoder may write for one archive. `None` is unlimited.
    ///
    /// Only read when decompressing. A single-symbol archive stores its
    /// repeat count in `totalBits`, so a corrupt header can otherwise ask
    /// for up to 2^64 bytes of output from an 11-byte file.
    pub max_output: Option<u64>,
}

impl FanoConfig {
    /// The standard layout with a one-byte table size.
    ///
    /// Inputs that use all 256 byte values are rejected.
    pub const COMPATIBLE: Self = Self {
        table_size_field: TableSizeField::Byte,
        max_output: None,
    };

    /// Two-byte table size; accepts every input.
    pub const WIDE: Self = Self {
        table_size_field: TableSizeField::Wide,
        max_output: None,
    };

    /// Pick the layout from a `wide` flag.
    pub fn with_wide_table(wide: bool) -> Self {
        if wide { Self::WIDE } else { Self::COMPATIBLE }
    }

    /// Refuse to decode more than `limit` bytes.
    pub fn with_max_output(mut self, limit: u64) -> Self {
        self.max_output = Some(limit);
        self
    }
}
