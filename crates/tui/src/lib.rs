//! # Navetta TUI Library
//!
//! Terminal rendition of a single-page brochure: the content sections are
//! rendered as one tall scrollable page beneath a fixed navigation bar with
//! scroll-spy highlighting, smooth scrolling, and a slide-out menu.
//!
//! ## Architecture
//!
//! The UI follows a component-based architecture: the bar, the page, and the
//! menu each handle their own events and rendering, coordinate through
//! state owned by `App`, and report side effects back to the runtime as
//! `Effect`s. The scroll interaction core (threshold watcher, section
//! navigator, smooth-scroll animator) lives in `ui::scroll` and is pure
//! state, testable without a terminal.

mod app;
mod cmd;
mod ui;

use anyhow::Result;
use navetta_content::SiteContent;

/// Runs the main TUI application loop.
///
/// Initializes the terminal, mounts the UI, and runs the event loop until
/// the user quits (`q` or Ctrl+C). The theme preference, when given, wins
/// over terminal capability detection.
///
/// # Errors
///
/// Returns an error on terminal setup failures or event-loop I/O errors.
pub async fn run(site: SiteContent, theme_preference: Option<&str>) -> Result<()> {
    let theme = ui::theme::load(theme_preference);
    ui::runtime::run_app(site, theme).await
}
