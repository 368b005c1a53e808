//! Info command implementation.

use fanoarc_core::{FanoArcError, Result};
use fanoarc_shannon::{FanoConfig, read_archive_info};
use std::io;
use std::path::Path;

pub fn cmd_info(archive: &Path, json: bool, wide_table: bool) -> Result<()> {
    let config = FanoConfig::with_wide_table(wide_table);
    let info = read_archive_info(archive, config)?;

    if json {
        let text = serde_json::to_string_pretty(&info)
            .map_err(|e| FanoArcError::Io(io::Error::other(e)))?;
        println!("{}", text);
        return Ok(());
    }

    let metadata = std::fs::metadata(archive)?;
    println!("Archive Information");
    println!("===================");
    println!("File: {}", archive.display());
    println!("Size: {} bytes", metadata.len());
    println!("Header: {} bytes", info.header_bytes);
    println!("Table entries: {}", info.table_size);
    if info.table_size == 1 && info.entries[0].bit_length == 0 {
        println!("Repeat count: {}", info.total_bits);
    } else {
        println!("Payload bits: {}", info.total_bits);
    }

    println!();
    println!("{:>6} {:>5} {:>6}  Code", "Symbol", "Char", "Length");
    println!("{}", "-".repeat(40));
    for entry in &info.entries {
        let shown = if entry.symbol.is_ascii_graphic() {
            format!("'{}'", entry.symbol as char)
        } else {
            String::new()
        };
        println!(
            "{:>#6x} {:>5} {:>6}  {}",
            entry.symbol, shown, entry.bit_length, entry.code
        );
    }
    Ok(())
}
