//! Compress command implementation.

use crate::utils::{format_elapsed, format_ratio, timed};
use fanoarc_core::Result;
use fanoarc_shannon::{FanoConfig, compress_file};
use std::io::{self, Write};
use std::path::Path;

pub fn cmd_compress(
    input: &Path,
    output: &Path,
    time: bool,
    print_codes: bool,
    wide_table: bool,
) -> Result<()> {
    let config = FanoConfig::with_wide_table(wide_table);
    log::debug!("compressing with {:?}", config);
    let (result, elapsed) = timed(|| compress_file(input, output, config));
    let report = result?;

    println!(
        "Compressed {} -> {} ({} -> {} bytes, {}, {} symbols)",
        input.display(),
        output.display(),
        report.stats.input_bytes,
        report.stats.output_bytes,
        format_ratio(report.stats.input_bytes, report.stats.output_bytes),
        report.stats.table_size
    );

    if print_codes {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        report.table.write_table(&mut out)?;
        out.flush()?;
    }

    if time {
        println!("{}", format_elapsed(elapsed));
    }
    Ok(())
}
