use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use gallery_sort::{date, ingest, page, sort};

#[derive(Parser)]
#[command(name = "gallery-sort", version, about = "Sort image gallery rows chronologically, best effort")]
struct Cli {
    /// JSON file with an array of gallery rows
    input: PathBuf,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep sub2 as-is instead of overwriting it with the rendered date
    #[arg(long)]
    no_render_date: bool,

    /// Emit a single grid page, dimensions as ROWSxCOLS (e.g. 2x3)
    #[arg(long)]
    grid: Option<String>,

    /// Zero-based page to emit (with --grid)
    #[arg(long, default_value_t = 0)]
    page: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Stage 1: Read rows
    eprintln!("=== Stage 1: Reading rows ===");
    let json = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let ingest::IngestResult { records, dropped } = ingest::rows_from_json(&json)?;
    eprintln!("  Kept {} rows ({} dropped without an image URL)", records.len(), dropped);

    if records.is_empty() {
        eprintln!("No rows with an image URL. Nothing to do.");
        return Ok(());
    }

    let has_date = records.iter().any(|r| !r.date.is_empty());

    // Stage 2: Sort chronologically
    eprintln!("=== Stage 2: Sorting chronologically ===");
    let dated = records
        .iter()
        .filter(|r| date::normalize_to_timestamp(&r.date).is_some())
        .count();
    eprintln!("  Parseable dates: {}/{}", dated, records.len());
    let mut records = sort::sort_chronologically(records);

    // Display policy: a bound date column replaces sub2 with dd-mm-yyyy
    if has_date && !cli.no_render_date {
        for r in &mut records {
            r.sub2 = date::format_display(&r.date);
        }
    }

    // Stage 3: Write output
    eprintln!("=== Stage 3: Writing output ===");
    let visible: &[_] = match &cli.grid {
        Some(dims) => {
            let (rows, cols) = parse_grid(dims)?;
            let page_size = rows * cols;
            let total = page::page_count(records.len(), page_size);
            let current = page::clamp_page(cli.page, total);
            eprintln!("  Grid {}x{}, page {}/{}", rows, cols, current + 1, total);
            page::page_slice(&records, current, page_size)
        }
        None => &records,
    };

    let out = serde_json::to_string_pretty(visible)?;
    match &cli.output {
        Some(path) => {
            fs::write(path, out)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Wrote {} rows to {}", visible.len(), path.display());
        }
        None => println!("{}", out),
    }

    Ok(())
}

fn parse_grid(dims: &str) -> anyhow::Result<(usize, usize)> {
    let (rows, cols) = dims
        .split_once(['x', 'X'])
        .with_context(|| format!("bad grid spec '{}', expected ROWSxCOLS", dims))?;
    let rows: i64 = rows.trim().parse().context("grid rows must be a number")?;
    let cols: i64 = cols.trim().parse().context("grid cols must be a number")?;
    Ok((page::clamp_grid_dim(rows), page::clamp_grid_dim(cols)))
}
