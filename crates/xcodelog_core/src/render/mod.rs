//! Report rendering.

mod html;
mod markdown;
mod summary;

use std::io::{self, Write};

use tracing::debug;

use crate::config::{Flavor, OutputMode, ReportConfig};
use crate::group::group_by_file;
use crate::scanner::BuildLog;

/// Writes the report selected by `config` for `log` into `out`.
pub fn render<W: Write>(log: &BuildLog, config: &ReportConfig, out: &mut W) -> io::Result<()> {
    debug!(
        "Rendering {:?} report ({:?} flavor) for {} errors",
        config.mode,
        config.flavor,
        log.errors.len()
    );

    match config.mode {
        OutputMode::Summary => summary::write_summary(log, config.flavor, out),
        OutputMode::Text => {
            let groups = group_by_file(&log.errors, config.root_prefix.as_deref());
            let link = config.link.as_ref();
            match config.flavor {
                Flavor::Markdown => markdown::write_text(&groups, link, out),
                Flavor::Html => html::write_text(&groups, link, out),
            }
        }
    }
}
