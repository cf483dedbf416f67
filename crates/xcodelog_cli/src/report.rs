//! Report command implementation

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use miette::{IntoDiagnostic, Result};
use tracing::{debug, warn};
use xcodelog_core::{
    Flavor, OutputMode, RepoLink, ReportConfig, default_root_prefix, render, scan_reader,
};

use crate::cli::Cli;

pub fn run_report(cli: &Cli, input: &Path) -> Result<()> {
    let config = build_config(cli, input)?;
    debug!("Report config: {:?}", config);

    let file = File::open(input)
        .map_err(|e| miette::miette!("Failed to open {}: {}", input.display(), e))?;
    let log = scan_reader(BufReader::new(file)).into_diagnostic()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&log, &config, &mut out).into_diagnostic()?;
    out.flush().into_diagnostic()?;

    Ok(())
}

fn build_config(cli: &Cli, input: &Path) -> Result<ReportConfig> {
    let flavor: Flavor = cli.flavor.parse().into_diagnostic()?;

    let root_prefix = match &cli.root {
        Some(root) => root.clone(),
        None => default_root_prefix(input).into_diagnostic()?,
    };

    let (sha, repo_url) = (cli.sha(), cli.repo_url());
    if sha.is_some() != repo_url.is_some() {
        warn!("Source links need both a commit SHA and a repository URL; rendering plain headers");
    }

    Ok(ReportConfig::new()
        .with_root_prefix(root_prefix)
        .with_mode(OutputMode::from_arg(cli.output_mode()))
        .with_flavor(flavor)
        .with_link(RepoLink::from_parts(repo_url, sha)))
}
