use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use pagestash::pipeline::{ExitStatus, process_address};
use pagestash_fetcher::Fetcher;
use std::time::Duration;
use tracing::info;

mod arguments;

use arguments::Arguments;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args = Arguments::parse();
    if args.urls.is_empty() {
        eprintln!("Usage: pagestash url [url ...]");
        std::process::exit(ExitStatus::Usage.code());
    }

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!(
                "{} cannot determine working directory: {}",
                "error:".red().bold(),
                e
            );
            std::process::exit(ExitStatus::Other.code());
        }
    };

    let spinner = if args.quiet {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    };

    let fetcher = Fetcher::new();
    let mut status = ExitStatus::Normal;
    let mut failed = 0usize;

    // Addresses are processed strictly in order, one at a time; an error
    // on one address never stops the next.
    for address in &args.urls {
        if let Some(ref pb) = spinner {
            pb.set_message(format!("Fetching {}", address));
        }

        match process_address(&fetcher, &cwd, address).await {
            Ok(result) => {
                if !result.is_clean() {
                    status = status.worst(ExitStatus::Other);
                    failed += 1;
                }
                if let Some(ref pb) = spinner {
                    pb.println(format!("{} {}", "✓".green().bold(), result.summary()));
                }
            }
            Err(e) => {
                eprintln!("{} {}: {}", "error:".red().bold(), address, e);
                status = status.worst(ExitStatus::for_error(&e));
                failed += 1;
            }
        }
    }

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    info!(
        "Processed {} addresses, {} with failures",
        args.urls.len(),
        failed
    );

    std::process::exit(status.code());
}
