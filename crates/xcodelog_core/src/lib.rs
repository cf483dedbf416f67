//! # xcodelog_core
//!
//! Turns `xcodebuild` log output into Markdown reports.
//!
//! This crate provides:
//! - The line scanner that pairs `error:` markers with their code line
//! - Per-file grouping of the collected errors
//! - Summary and text renderers in two output flavors
//!
//! ## Example
//!
//! ```rust
//! use xcodelog_core::{OutputMode, ReportConfig, render, scan_lines};
//!
//! let log = scan_lines([
//!     "/repo/src/a.m:10:5: error: unused variable 'x'",
//!     "    int x = 1;",
//! ]);
//! let config = ReportConfig::new()
//!     .with_root_prefix("/repo")
//!     .with_mode(OutputMode::Text);
//!
//! let mut out = Vec::new();
//! render(&log, &config, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("src/a.m (10:5)"));
//! ```

mod config;
mod error;
pub mod group;
pub mod render;
pub mod scanner;

pub use config::{Flavor, OutputMode, RepoLink, ReportConfig, default_root_prefix};
pub use error::XcodelogError;
pub use group::{FileGroup, group_by_file};
pub use render::render;
pub use scanner::{BuildLog, ErrorRecord, LineScanner, Severity, scan_lines, scan_reader};
