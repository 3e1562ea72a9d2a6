//! LogoForge CLI
//!
//! Takes no options: always generates the full logo set from the built-in
//! configuration. Logs go to stderr (`RUST_LOG` controls verbosity), the
//! completion message to stdout.
//! Returns non-zero on any failure.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use logoforge::{Generator, ENGINE_VERSION};

#[derive(Parser)]
#[command(name = "logoforge", version = ENGINE_VERSION)]
#[command(about = "LogoForge - generate brand logo SVGs and a README for every configured font")]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let generator = Generator::default();

    match generator.run() {
        Ok(report) => {
            println!(
                "Generated {} logo sets ({} files) in '{}'",
                report.font_count(),
                report.files.len(),
                report.output_dir.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
