//! fanoarc CLI - Shannon-Fano file compressor
//!
//! Compresses a single file into a Shannon-Fano archive and back.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{cmd_compress, cmd_decompress, cmd_info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fanoarc")]
#[command(author, version, about = "Shannon-Fano file compressor")]
#[command(long_about = "
fanoarc compresses a single file with Shannon-Fano coding. The archive holds
the code table followed by the packed bitstream.

Examples:
  fanoarc compress notes.txt notes.sf
  fanoarc compress notes.txt notes.sf --time --print-codes
  fanoarc decompress notes.sf notes.txt
  fanoarc info notes.sf --json
")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Archive to write
        output: PathBuf,

        /// Show execution time
        #[arg(short, long)]
        time: bool,

        /// Print the code table after compressing
        #[arg(short, long)]
        print_codes: bool,

        /// Use a two-byte table size (needed when all 256 byte values occur)
        #[arg(short, long)]
        wide_table: bool,
    },

    /// Decompress an archive
    #[command(alias = "d")]
    Decompress {
        /// Archive to read
        input: PathBuf,

        /// File to write
        output: PathBuf,

        /// Show execution time
        #[arg(short, long)]
        time: bool,

        /// Also write the decoded bytes to stdout
        #[arg(short, long)]
        echo: bool,

        /// Fail instead of writing more than this many bytes
        #[arg(short, long, value_name = "BYTES")]
        max_output: Option<u64>,

        /// The archive was written with --wide-table
        #[arg(short, long)]
        wide_table: bool,
    },

    /// Show the code table of an archive
    #[command(alias = "i")]
    Info {
        /// Archive to inspect
        archive: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// The archive was written with --wide-table
        #[arg(short, long)]
        wide_table: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            time,
            print_codes,
            wide_table,
        } => cmd_compress(&input, &output, time, print_codes, wide_table),
        Commands::Decompress {
            input,
            output,
            time,
            echo,
            max_output,
            wide_table,
        } => cmd_decompress(&input, &output, time, echo, max_output, wide_table),
        Commands::Info {
            archive,
            json,
            wide_table,
        } => cmd_info(&archive, json, wide_table),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compress_flags() {
        let cli = Cli::parse_from(["fanoarc", "c", "in.txt", "out.sf", "-t", "-p"]);
        match cli.command {
            Commands::Compress {
                input,
                output,
                time,
                print_codes,
                wide_table,
            } => {
                assert_eq!(input, PathBuf::from("in.txt"));
                assert_eq!(output, PathBuf::from("out.sf"));
                assert!(time);
                assert!(print_codes);
                assert!(!wide_table);
            }
            _ => panic!("expected compress"),
        }
    }

    #[test]
    fn test_parse_max_output() {
        let cli = Cli::parse_from(["fanoarc", "d", "a.sf", "a.txt", "--max-output", "4096"]);
        assert!(matches!(
            cli.command,
            Commands::Decompress {
                max_output: Some(4096),
                ..
            }
        ));
    }

    #[test]
    fn test_parse_decompress_flags() {
        let cli = Cli::parse_from(["fanoarc", "-v", "decompress", "a.sf", "a.txt", "--echo", "-w"]);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Decompress {
                echo: true,
                wide_table: true,
                time: false,
                ..
            }
        ));
    }
}
