//! Headless browser automation for visual verification
//!
//! This crate drives Chrome/Chromium over the Chrome DevTools Protocol (CDP)
//! to capture a screenshot of the local dev server for ad-hoc visual
//! verification during development.
//!
//! # Features
//!
//! - **Browser Management**: Launch and control a headless Chrome/Chromium
//! - **Screenshot Capture**: Viewport and full-page screenshots to disk
//! - **Verification Runner**: The fixed launch/navigate/capture/close pipeline
//!
//! # Example
//!
//! ```no_run
//! use jules_browser::verification;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Navigates to http://localhost:3000 and writes
//!     // jules-scratch/verification/verification.png
//!     let outcome = verification::run().await?;
//!     println!("Captured {} bytes", outcome.size_bytes);
//!     Ok(())
//! }
//! ```
//!
//! # Requirements
//!
//! - Chrome or Chromium browser installed
//! - A server already listening on `http://localhost:3000`
//! - The `jules-scratch/verification/` directory must exist
//!
//! # Architecture
//!
//! The crate is organized into modules:
//!
//! - [`browser`]: Browser lifecycle and session management
//! - [`screenshot`]: Screenshot capture to disk
//! - [`verification`]: The verification runner and its fixed constants
//! - [`error`]: Error types for browser operations

pub mod browser;
pub mod error;
pub mod screenshot;
pub mod verification;

// Re-export commonly used types
pub use browser::{BrowserConfig, BrowserSession};
pub use error::{BrowserError, Result};
pub use screenshot::{capture_screenshot, capture_to_file, ScreenshotOptions};
pub use verification::{run, run_with, VerificationOutcome, OUTPUT_PATH, TARGET_URL};
