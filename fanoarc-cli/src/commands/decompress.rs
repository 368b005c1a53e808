//! Decompress command implementation.

use crate::utils::{format_elapsed, timed};
use fanoarc_core::Result;
use fanoarc_shannon::{FanoConfig, decompress_file};
use std::io::{self, Write};
use std::path::Path;

pub fn cmd_decompress(
    input: &Path,
    output: &Path,
    time: bool,
    echo: bool,
    max_output: Option<u64>,
    wide_table: bool,
) -> Result<()> {
    let mut config = FanoConfig::with_wide_table(wide_table);
    if let Some(limit) = max_output {
        config = config.with_max_output(limit);
    }
    log::debug!("decompressing with {:?}", config);
    let stdout = io::stdout();
    let mut echo_sink = stdout.lock();

    let (result, elapsed) = timed(|| {
        let sink: Option<&mut dyn Write> = if echo {
            Some(&mut echo_sink as &mut dyn Write)
        } else {
            None
        };
        decompress_file(input, output, config, sink)
    });
    let stats = result?;

    if echo {
        writeln!(echo_sink)?;
    }
    println!(
        "Decompressed {} -> {} ({} bytes)",
        input.display(),
        output.display(),
        stats.output_bytes
    );

    if time {
        println!("{}", format_elapsed(elapsed));
    }
    Ok(())
}
