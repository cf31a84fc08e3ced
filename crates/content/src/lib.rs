//! Page content for the Navetta brochure.
//!
//! This crate is the content side of the application: the five page sections
//! with their copy, the navigation link list, the page metadata, and the user
//! configuration file. The TUI treats all of it as read-only input; content
//! contributes no behavior beyond exposing stable section identifiers.

mod config;
mod meta;
mod sections;

pub use config::{AppConfig, ConfigError, default_config_path};
pub use meta::SiteMeta;
pub use sections::{Section, SiteContent, footer_lines, nav_links, sections};
