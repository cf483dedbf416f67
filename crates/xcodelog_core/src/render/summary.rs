//! Summary report.

use std::io::{self, Write};

use crate::config::Flavor;
use crate::scanner::BuildLog;

pub(super) fn write_summary<W: Write>(
    log: &BuildLog,
    flavor: Flavor,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "### xcodebuild Summary:")?;
    writeln!(out, " ")?;
    if flavor == Flavor::Html {
        writeln!(out, "- :warning: {} Warning(s)", log.warning_count())?;
    }
    writeln!(out, "- :heavy_exclamation_mark: {} Error(s)", log.error_count())?;
    Ok(())
}
