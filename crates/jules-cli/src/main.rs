//! jules-verify - capture a verification screenshot of the local dev server
//!
//! Usage:
//!   jules-verify              Navigate to http://localhost:3000 and write
//!                             jules-scratch/verification/verification.png
//!   jules-verify --verbose    Same, with debug logging
//!
//! Assumes a server is already running on port 3000 and that the
//! jules-scratch/verification/ directory exists. Exits non-zero if the
//! browser fails to launch, navigation fails, or the screenshot cannot be
//! written.

use anyhow::Result;
use clap::Parser;
use jules_browser::verification;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "jules-verify")]
#[command(about = "Capture a verification screenshot of the local dev server")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let outcome = verification::run().await?;

    println!(
        "Screenshot saved: {} ({} bytes)",
        outcome.output_path.display(),
        outcome.size_bytes
    );

    Ok(())
}
