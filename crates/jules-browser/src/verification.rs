//! Visual verification runner
//!
//! The fixed pipeline for eyeballing the local dev server: launch a
//! headless browser, open a tab, navigate to the dev server, capture a
//! screenshot, release the browser. Each step blocks until complete and any
//! failure aborts the run; the browser process is reclaimed on every exit
//! path because [`BrowserSession`] owns it.

use crate::browser::{BrowserConfig, BrowserSession};
use crate::error::Result;
use crate::screenshot::{capture_to_file, ScreenshotOptions};
use std::path::{Path, PathBuf};
use tracing::info;

/// URL the verification run navigates to
pub const TARGET_URL: &str = "http://localhost:3000";

/// Path the screenshot artifact is written to, relative to the working
/// directory; the parent directory must already exist
pub const OUTPUT_PATH: &str = "jules-scratch/verification/verification.png";

/// Result of a completed verification run
#[derive(Debug, Clone)]
pub struct VerificationOutcome {
    /// URL that was captured
    pub url: String,
    /// Where the screenshot was written
    pub output_path: PathBuf,
    /// Size of the written artifact
    pub size_bytes: u64,
}

/// Run the verification pipeline against the fixed URL and output path
pub async fn run() -> Result<VerificationOutcome> {
    run_with(TARGET_URL, Path::new(OUTPUT_PATH), BrowserConfig::default()).await
}

/// Run the verification pipeline with explicit target and configuration
///
/// # Arguments
/// * `url` - Page to navigate to
/// * `output_path` - File the screenshot is written to (overwritten if present)
/// * `config` - Browser launch configuration
pub async fn run_with(
    url: &str,
    output_path: &Path,
    config: BrowserConfig,
) -> Result<VerificationOutcome> {
    info!("Starting verification run for {}", url);

    let session = BrowserSession::launch_with_config(config).await?;

    session.navigate(url).await?;

    let size_bytes = capture_to_file(&session, output_path, ScreenshotOptions::viewport()).await?;

    session.close().await?;

    info!(
        "Verification run complete: {} ({} bytes)",
        output_path.display(),
        size_bytes
    );

    Ok(VerificationOutcome {
        url: url.to_string(),
        output_path: output_path.to_path_buf(),
        size_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_url_is_local_dev_server() {
        assert_eq!(TARGET_URL, "http://localhost:3000");
    }

    #[test]
    fn test_output_path_is_relative_png() {
        let path = Path::new(OUTPUT_PATH);
        assert!(path.is_relative());
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));
        assert_eq!(
            path.parent(),
            Some(Path::new("jules-scratch/verification"))
        );
    }

    #[test]
    fn test_outcome_carries_run_details() {
        let outcome = VerificationOutcome {
            url: TARGET_URL.to_string(),
            output_path: PathBuf::from(OUTPUT_PATH),
            size_bytes: 1024,
        };

        assert_eq!(outcome.url, TARGET_URL);
        assert_eq!(outcome.output_path, Path::new(OUTPUT_PATH));
        assert!(outcome.size_bytes > 0);
    }
}
