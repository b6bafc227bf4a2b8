//! tldc CLI
//!
//! Transpiles effective-TLD rule lists into the gperf input that builds
//! the compiled TLD lookup table.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;

use tldc_compiler::{transpile, CompileError, Stats};

mod source;

use source::LineSource;

#[derive(Parser)]
#[command(name = "tldc")]
#[command(about = "Effective-TLD rule list to gperf input transpiler")]
struct Cli {
    /// Input rule list files, read in order; stdin when omitted
    files: Vec<PathBuf>,

    /// Write the generated grammar here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print per-run counts to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print per-run counts as JSON to stderr
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CompileError> {
    let lines = LineSource::new(cli.files);

    let stats = match &cli.output {
        Some(path) => {
            let file = fs::File::create(path).map_err(CompileError::Output)?;
            let mut out = BufWriter::new(file);
            let stats = transpile(lines, &mut out)?;
            out.flush()?;
            stats
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            let stats = transpile(lines, &mut out)?;
            out.flush()?;
            stats
        }
    };

    if cli.verbose {
        eprintln!(
            "Rules:    {} ({} standard, {} wildcard, {} exception)",
            stats.records(),
            stats.standard,
            stats.wildcard,
            stats.exception
        );
        eprintln!("Skipped:  {} comments, {} blank lines", stats.comments, stats.blank);
    }

    if cli.stats {
        print_stats_json(&stats);
    }

    Ok(())
}

fn print_stats_json(stats: &Stats) {
    match serde_json::to_string(stats) {
        Ok(json) => eprintln!("{json}"),
        Err(e) => eprintln!("Error: failed to encode stats: {e}"),
    }
}
