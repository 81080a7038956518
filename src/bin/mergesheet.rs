//! MergeSheet CLI - merge required columns from csv/xlsx files and share links

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mergesheet::export;
use mergesheet::merge_sources;
use mergesheet::RequiredSchema;
use mergesheet::Source;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mergesheet")]
#[command(version)]
#[command(about = "Extract required columns from csv/xlsx sources and merge them into one table", long_about = None)]
struct Args {
    /// Input files (.csv or .xlsx); glob patterns are expanded
    files: Vec<String>,

    /// Spreadsheet share link, fetched as its CSV export (repeatable)
    #[arg(short, long = "url")]
    urls: Vec<String>,

    /// Directory the artifacts are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Which artifacts to write
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Both)]
    format: OutputFormat,

    /// Suppress per-source skip reports
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// CSV artifact only
    Csv,
    /// XLSX artifact only
    Xlsx,
    /// Both artifacts
    Both,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (mut sources, unreadable) = collect_file_sources(&expand_patterns(&args.files));
    // Files merge ahead of links, in the order given
    for url in &args.urls {
        sources.push(Source::url(url));
    }

    if sources.is_empty() && unreadable == 0 {
        eprintln!("✗ No input sources given, pass files or --url links");
        std::process::exit(2);
    }

    let source_count = sources.len() + unreadable;
    let report = merge_sources(&sources, &RequiredSchema::default());
    if !args.quiet {
        for skipped in &report.skipped {
            eprintln!("⚠ Skipped {}: {}", skipped.source, skipped.reason);
        }
    }

    let merged = match report.merged {
        Some(table) => table,
        None => {
            eprintln!("✗ No valid data found in {source_count} source(s)");
            std::process::exit(1);
        }
    };

    let mut artifacts = Vec::new();
    if matches!(args.format, OutputFormat::Csv | OutputFormat::Both) {
        artifacts.push(export::csv::generate(&merged)?);
    }
    if matches!(args.format, OutputFormat::Xlsx | OutputFormat::Both) {
        artifacts.push(export::xlsx::generate(&merged)?);
    }

    for artifact in &artifacts {
        let path = args.out_dir.join(artifact.file_name);
        fs::write(&path, &artifact.bytes)
            .with_context(|| format!("writing {}", path.display()))?;
        eprintln!("✓ Output written to: {}", path.display());
    }

    eprintln!(
        "✓ Merged {} source(s) into {} row(s) ({} skipped)",
        report.merged_sources,
        merged.row_count(),
        report.skipped.len() + unreadable
    );
    Ok(())
}

/// Reads each path into a file source, counting paths that cannot be read.
/// Unreadable paths are reported and count toward the skip tally.
fn collect_file_sources(paths: &[PathBuf]) -> (Vec<Source>, usize) {
    let mut sources = Vec::new();
    let mut unreadable = 0usize;
    for path in paths {
        match Source::from_path(path) {
            Ok(source) => sources.push(source),
            Err(error) => {
                unreadable += 1;
                eprintln!("⚠ Skipped {}: {}", path.display(), error);
            }
        }
    }
    (sources, unreadable)
}

/// Expands glob patterns into concrete paths, keeping plain paths as given.
/// Matches come back in the alphabetical order the glob walk yields.
fn expand_patterns(patterns: &[String]) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for pattern in patterns {
        if pattern.contains(['*', '?', '[']) {
            match glob::glob(pattern) {
                Ok(matches) => {
                    let mut matched = false;
                    for entry in matches {
                        match entry {
                            Ok(path) => {
                                matched = true;
                                paths.push(path);
                            }
                            Err(error) => eprintln!("⚠ Skipped unreadable path: {error}"),
                        }
                    }
                    if !matched {
                        eprintln!("⚠ No files match pattern '{pattern}'");
                    }
                }
                Err(error) => eprintln!("⚠ Invalid pattern '{pattern}': {error}"),
            }
        } else {
            paths.push(PathBuf::from(pattern));
        }
    }
    paths
}
