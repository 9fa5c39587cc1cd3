//! BytePress CLI
//!
//! A Pure Rust Huffman file compressor. The code is built from the input
//! file's own byte frequencies and travels at the head of the compressed
//! stream, so decompression needs nothing but the file itself.

use bytepress_huffman::{ByteFrequencies, build_tree, compress, decompress};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufReader, BufWriter, Seek, SeekFrom};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bytepress")]
#[command(author, version, about = "Pure Rust Huffman file compression")]
#[command(long_about = "
BytePress compresses a single file with a Huffman code built from the
file's byte frequencies. The code travels inside the compressed file.

Examples:
  bytepress compress notes.txt notes.txt.bp
  bytepress decompress notes.txt.bp notes.txt
  bytepress compress --verbose big.log big.log.bp
")]
struct Cli {
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

        /// Compressed output file
        output: PathBuf,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Show progress bar
        #[arg(short = 'P', long, default_value = "true")]
        progress: bool,
    },

    /// Decompress a file
    #[command(alias = "d")]
    Decompress {
        /// File to decompress
        input: PathBuf,

        /// Decompressed output file
        output: PathBuf,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Show progress bar
        #[arg(short = 'P', long, default_value = "true")]
        progress: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            verbose,
            progress,
        } => cmd_compress(&input, &output, verbose, progress),
        Commands::Decompress {
            input,
            output,
            verbose,
            progress,
        } => cmd_decompress(&input, &output, verbose, progress),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Create a progress bar with standard styling.
fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

fn cmd_compress(
    input: &Path,
    output: &Path,
    verbose: bool,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::open(input)?;
    let mut reader = BufReader::new(file);

    let pb = create_progress_bar(2, progress);
    pb.set_message("Analyzing");

    // First pass: tally byte frequencies and build the code.
    let freqs = ByteFrequencies::tally(&mut reader)?;
    let tree = build_tree(&freqs);
    pb.inc(1);

    if verbose {
        pb.println(format!("  Input bytes: {}", freqs.total()));
        pb.println(format!("  Distinct byte values: {}", freqs.distinct_bytes()));
        pb.println(format!("  Code leaves: {}", tree.leaf_count()));
    }

    // Second pass: encode from the start.
    reader.seek(SeekFrom::Start(0))?;
    let writer = BufWriter::new(File::create(output)?);

    pb.set_message("Compressing");
    compress(&tree, reader, writer)?;
    pb.inc(1);
    pb.finish_with_message("Done");

    let original = std::fs::metadata(input)?.len();
    let compressed = std::fs::metadata(output)?.len();
    println!("Original size: {} bytes", original);
    println!("Compressed size: {} bytes", compressed);
    if original > 0 {
        println!(
            "Space savings: {:.1}%",
            (1.0 - compressed as f64 / original as f64) * 100.0
        );
    }

    Ok(())
}

fn cmd_decompress(
    input: &Path,
    output: &Path,
    verbose: bool,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);

    let pb = create_progress_bar(1, progress);
    pb.set_message("Decompressing");

    decompress(reader, writer)?;
    pb.inc(1);
    pb.finish_with_message("Done");

    let compressed = std::fs::metadata(input)?.len();
    let restored = std::fs::metadata(output)?.len();
    if verbose {
        println!("Compressed size: {} bytes", compressed);
        println!("Restored size: {} bytes", restored);
    }

    Ok(())
}
