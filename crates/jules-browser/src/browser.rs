//! Browser lifecycle management using Chrome DevTools Protocol

use crate::error::{BrowserError, Result};
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Configuration for browser launch
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run in headless mode (default: true)
    pub headless: bool,
    /// Browser window width
    pub window_width: u32,
    /// Browser window height
    pub window_height: u32,
    /// Navigation timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1280,
            window_height: 720,
            timeout_seconds: 30,
        }
    }
}

/// Active browser session with Chrome DevTools Protocol
///
/// The session owns the underlying browser process. Dropping it on any exit
/// path, including mid-pipeline errors, tears down the child process, so no
/// separate cleanup call is required for correctness.
pub struct BrowserSession {
    /// Underlying browser instance (kept alive for tab lifetime)
    #[allow(dead_code)]
    browser: Browser,
    /// Current active tab
    tab: Arc<Tab>,
    /// Configuration
    config: BrowserConfig,
}

impl BrowserSession {
    /// Launch a new headless browser with default configuration
    pub async fn launch() -> Result<Self> {
        Self::launch_with_config(BrowserConfig::default()).await
    }

    /// Launch browser with custom configuration
    pub async fn launch_with_config(config: BrowserConfig) -> Result<Self> {
        info!(
            "Launching browser (headless: {}, size: {}x{})",
            config.headless, config.window_width, config.window_height
        );

        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.window_width, config.window_height)))
            .build()
            .map_err(|e| BrowserError::Launch(e.to_string()))?;

        let browser =
            Browser::new(launch_options).map_err(|e| BrowserError::Launch(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| BrowserError::Tab(e.to_string()))?;

        tab.set_default_timeout(Duration::from_secs(config.timeout_seconds));

        info!("Browser launched successfully");

        Ok(Self {
            browser,
            tab,
            config,
        })
    }

    /// Navigate to a URL and block until the navigation completes
    ///
    /// # Arguments
    /// * `url` - URL to navigate to
    pub async fn navigate(&self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);

        self.tab.navigate_to(url).map_err(|e| BrowserError::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| BrowserError::Navigation {
                url: url.to_string(),
                reason: format!("navigation did not complete: {}", e),
            })?;

        info!("Successfully navigated to {}", url);
        Ok(())
    }

    /// Get reference to the active tab
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Configuration this session was launched with
    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Close the browser session
    ///
    /// Consumes the session; the browser process is torn down when the
    /// underlying handle drops.
    pub async fn close(self) -> Result<()> {
        info!("Closing browser session");
        Ok(())
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        debug!("BrowserSession dropped, browser process will be cleaned up");
    }
}
