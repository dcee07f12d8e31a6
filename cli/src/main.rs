//! pagediff CLI - compare extracted document pages

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pagediff::compare::{CompareLimits, Comparison};
use pagediff::render::{format_item, to_json, to_text};
use pagediff::{
    CompareResponse, DiffDetector, DiffOptions, DiffType, JsonFormat, PageSource,
    DEFAULT_SIMILARITY_THRESHOLD,
};

#[derive(Parser)]
#[command(name = "pagediff")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Compare two versions of a document page by page", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two extracted page files (JSON)
    Compare {
        /// Pages of the old version
        #[arg(value_name = "OLD")]
        old: PathBuf,

        /// Pages of the new version
        #[arg(value_name = "NEW")]
        new: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Minimum similarity for a line to count as modified (0.0-1.0]
        #[arg(short, long, default_value_t = DEFAULT_SIMILARITY_THRESHOLD, env = "PAGEDIFF_THRESHOLD")]
        threshold: f64,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: Format,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Maximum pages per document
        #[arg(long, default_value = "50")]
        max_pages: usize,

        /// Compare pages one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Show extracted page information
    Info {
        /// Extracted page file (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// JSON result
    Json,
    /// Human-readable report
    Text,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compare {
            old,
            new,
            output,
            threshold,
            format,
            compact,
            max_pages,
            sequential,
        } => {
            let options = DiffOptions::new()
                .with_threshold(threshold)
                .with_parallel(!sequential);
            cmd_compare(
                &old,
                &new,
                output.as_deref(),
                options,
                format,
                compact,
                max_pages,
            )
        }
        Commands::Info { input } => cmd_info(&input),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_compare(
    old: &Path,
    new: &Path,
    output: Option<&Path>,
    options: DiffOptions,
    format: Format,
    compact: bool,
    max_pages: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let detector = DiffDetector::with_options(options)?;
    let comparison = Comparison::new()
        .with_detector(detector)
        .with_limits(CompareLimits::new().with_max_pages(max_pages));

    // Progress goes to stderr only when the result is written to a file
    let pb = if output.is_some() {
        ProgressBar::new(3)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Loading old pages...");
    let old_pages = comparison.json_source(old, "old").load()?;
    pb.inc(1);

    pb.set_message("Loading new pages...");
    let new_pages = comparison.json_source(new, "new").load()?;
    pb.inc(1);

    pb.set_message("Comparing...");
    let response = comparison.compare(&old_pages, &new_pages)?;
    pb.inc(1);
    pb.finish_and_clear();

    let rendered = match format {
        Format::Json => {
            let json_format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            to_json(&response, json_format)?
        }
        Format::Text => to_text(&response),
    };

    if let Some(path) = output {
        fs::write(path, &rendered)?;
        println!("{} {}", "Saved to".green(), path.display());
        print_summary(&response);
    } else if format == Format::Text {
        print_colored_report(&response);
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

fn print_colored_report(response: &CompareResponse) {
    for page in &response.pages {
        println!(
            "{}",
            format!(
                "Page {} ({} x {})",
                page.page_number, page.width, page.height
            )
            .cyan()
            .bold()
        );
        for item in &page.diffs {
            let line = format_item(item);
            match item.diff_type {
                DiffType::Added => println!("  {}", line.green()),
                DiffType::Removed => println!("  {}", line.red()),
                DiffType::Modified => println!("  {}", line.yellow()),
            }
        }
        println!();
    }
    print_summary(response);
}

fn print_summary(response: &CompareResponse) {
    let summary = response.summary();
    if summary.total() == 0 {
        println!("{}", "No differences".green().bold());
        return;
    }
    println!(
        "{} {} added, {} removed, {} modified across {} of {} pages",
        "Changes:".bold(),
        summary.added.to_string().green(),
        summary.removed.to_string().red(),
        summary.modified.to_string().yellow(),
        summary.pages_changed,
        response.old_page_count.max(response.new_page_count)
    );
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let pages = pagediff::load_pages(input)?;

    println!("{}", "Page Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), pages.len());

    let total: usize = pages.values().map(|p| p.line_count()).sum();
    println!("{}: {}", "Lines".bold(), total);

    println!();
    for page in pages.values() {
        println!(
            "  {} {:>4}  {:>5} lines  {} x {}",
            "Page".dimmed(),
            page.page_number,
            page.line_count(),
            page.width,
            page.height
        );
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pagediff".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Line-level document comparison tool");
    println!();
    println!("License: MIT");
}
