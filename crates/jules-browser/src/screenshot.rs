//! Screenshot capture using Chrome DevTools Protocol

use crate::browser::BrowserSession;
use crate::error::{BrowserError, Result};
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use std::path::Path;
use tracing::{debug, info};

/// Screenshot capture options
#[derive(Debug, Clone)]
pub struct ScreenshotOptions {
    /// Capture the full scrollable page instead of just the viewport
    pub full_page: bool,
}

impl Default for ScreenshotOptions {
    fn default() -> Self {
        Self::viewport()
    }
}

impl ScreenshotOptions {
    /// Capture only the visible viewport (the automation default)
    pub fn viewport() -> Self {
        Self { full_page: false }
    }

    /// Capture the full scrollable page
    pub fn full_page() -> Self {
        Self { full_page: true }
    }
}

/// Capture a PNG screenshot of the session's active tab
///
/// # Arguments
/// * `session` - Active browser session
/// * `options` - Screenshot capture options
///
/// # Returns
/// Raw PNG bytes
pub async fn capture_screenshot(
    session: &BrowserSession,
    options: ScreenshotOptions,
) -> Result<Vec<u8>> {
    debug!(
        "Capturing {} screenshot",
        if options.full_page { "full page" } else { "viewport" }
    );

    let data = session
        .tab()
        .capture_screenshot(
            CaptureScreenshotFormatOption::Png,
            None,
            None,
            options.full_page,
        )
        .map_err(|e| BrowserError::Screenshot(format!("CDP capture failed: {}", e)))?;

    Ok(data)
}

/// Capture a screenshot and write it to a file path
///
/// Overwrites an existing file at `path`. The parent directory must already
/// exist; it is not created here.
///
/// # Arguments
/// * `session` - Active browser session
/// * `path` - Output file path
/// * `options` - Screenshot capture options
///
/// # Returns
/// Number of bytes written
pub async fn capture_to_file(
    session: &BrowserSession,
    path: &Path,
    options: ScreenshotOptions,
) -> Result<u64> {
    let data = capture_screenshot(session, options).await?;
    let size = persist(path, &data).await?;

    info!("Screenshot stored: {} ({} bytes)", path.display(), size);

    Ok(size)
}

/// Write screenshot bytes to disk
async fn persist(path: &Path, data: &[u8]) -> Result<u64> {
    tokio::fs::write(path, data).await?;
    Ok(data.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screenshot_options_default_is_viewport() {
        let options = ScreenshotOptions::default();
        assert!(!options.full_page);
    }

    #[test]
    fn test_screenshot_options_full_page() {
        let options = ScreenshotOptions::full_page();
        assert!(options.full_page);
    }

    #[tokio::test]
    async fn test_persist_writes_nonzero_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("verification.png");

        let size = persist(&path, b"\x89PNG\r\n\x1a\n").await.unwrap();

        assert_eq!(size, 8);
        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[tokio::test]
    async fn test_persist_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("verification.png");

        persist(&path, b"first run with a longer payload").await.unwrap();
        let size = persist(&path, b"second").await.unwrap();

        assert_eq!(size, 6);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_persist_fails_when_parent_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("verification.png");

        let result = persist(&path, b"data").await;

        assert!(matches!(result, Err(BrowserError::Io(_))));
        assert!(!path.exists());
    }
}
