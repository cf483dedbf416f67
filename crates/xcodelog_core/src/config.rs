//! Report configuration.

use std::path::Path;
use std::str::FromStr;

use crate::error::XcodelogError;

/// What kind of report to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Error (and, for the HTML flavor, warning) counts.
    #[default]
    Summary,
    /// One block per error, grouped by file.
    Text,
}

impl OutputMode {
    /// Interprets a command-line value. Only `text` selects [`OutputMode::Text`];
    /// anything else falls back to the summary.
    pub fn from_arg(value: &str) -> Self {
        match value {
            "text" => Self::Text,
            _ => Self::Summary,
        }
    }
}

/// Markup used for rendered reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Flavor {
    /// Fenced code block with a quoted message.
    #[default]
    Markdown,
    /// GitHub diff-highlight `<div>`/`<span>` block.
    Html,
}

impl FromStr for Flavor {
    type Err = XcodelogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            other => Err(XcodelogError::config(format!(
                "Unknown flavor '{}' (expected 'markdown' or 'html')",
                other
            ))),
        }
    }
}

/// Repository coordinates used to hyperlink file headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLink {
    pub repo_url: String,
    pub sha: String,
}

impl RepoLink {
    /// Builds a link only when both the repository URL and the commit are known.
    pub fn from_parts(repo_url: Option<String>, sha: Option<String>) -> Option<Self> {
        match (repo_url, sha) {
            (Some(repo_url), Some(sha)) => Some(Self { repo_url, sha }),
            _ => None,
        }
    }

    /// `<repo_url>/blob/<sha>/<path>`
    pub fn blob_url(&self, path: &str) -> String {
        format!("{}/blob/{}/{}", self.repo_url, self.sha, path)
    }
}

/// Everything the renderer needs besides the scanned log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportConfig {
    /// Prefix stripped (together with a following `/`) from file paths.
    pub root_prefix: Option<String>,
    pub mode: OutputMode,
    pub flavor: Flavor,
    pub link: Option<RepoLink>,
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root_prefix(mut self, root_prefix: impl Into<String>) -> Self {
        self.root_prefix = Some(root_prefix.into());
        self
    }

    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = flavor;
        self
    }

    pub fn with_link(mut self, link: Option<RepoLink>) -> Self {
        self.link = link;
        self
    }
}

/// Returns the directory containing `input`, made absolute against the
/// current directory. Symlinks are left unresolved.
pub fn default_root_prefix(input: &Path) -> Result<String, XcodelogError> {
    let absolute = std::path::absolute(input)?;
    let parent = absolute.parent().unwrap_or(&absolute);
    Ok(parent.to_string_lossy().into_owned())
}
