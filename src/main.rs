use anyhow::Result;
use clap::Parser;
use filebatch::emit::{EmitRange, emit_files, list_files, list_files_json};
use filebatch::enumerate::{EnumerateOptions, enumerate_files};
use log::LevelFilter;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Prepare files for upload by emitting their contents in index batches"
)]
struct Cli {
    /// Start index of files to output (inclusive)
    #[arg(long, default_value = "0")]
    start: usize,

    /// End index of files to output (exclusive, defaults to the file count)
    #[arg(long)]
    end: Option<usize>,

    /// Directory to walk
    #[arg(long, default_value = "frontend")]
    dir: PathBuf,

    /// List files with their indices only
    #[arg(long)]
    list: bool,

    /// Print the file list as JSON
    #[arg(long, requires = "list")]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    filebatch::telemetry::init_with_level(level)?;

    let files = enumerate_files(&cli.dir, &EnumerateOptions::default())?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.list {
        if cli.json {
            list_files_json(&mut out, &files)?;
        } else {
            list_files(&mut out, &files)?;
        }
    } else {
        let range = EmitRange::new(cli.start, cli.end);
        let summary = emit_files(&mut out, &files, range, &cli.dir)?;
        log::debug!(
            "Emitted {} files, {} unreadable",
            summary.emitted,
            summary.failed
        );
    }

    out.flush()?;
    Ok(())
}
