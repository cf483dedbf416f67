//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;

/// xcodelog-to-md - Turn xcodebuild logs into Markdown reports
///
/// Arguments may be given positionally (`INPUT [OUTPUT] [SHA] [REPO_URL]`)
/// or through the equivalent named flags. Positionals always fill from
/// `INPUT` onwards, so `--input` cannot be followed by a positional mode;
/// a value supplied both ways is rejected.
#[derive(Parser, Debug)]
#[command(name = "xcodelog-to-md")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Build log to read
    #[arg(value_name = "INPUT", conflicts_with = "input_flag")]
    pub input: Option<PathBuf>,

    /// Output mode (summary, text)
    #[arg(value_name = "OUTPUT", conflicts_with = "output_flag")]
    pub output: Option<String>,

    /// Commit SHA used for source links
    #[arg(value_name = "SHA", conflicts_with = "sha_flag")]
    pub sha: Option<String>,

    /// Repository base URL used for source links
    #[arg(value_name = "REPO_URL", conflicts_with = "repo_url_flag")]
    pub repo_url: Option<String>,

    /// Build log to read
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input_flag: Option<PathBuf>,

    /// Output mode (summary, text)
    #[arg(short = 'o', long = "output", value_name = "MODE")]
    pub output_flag: Option<String>,

    /// Commit SHA used for source links
    #[arg(long = "sha", value_name = "SHA")]
    pub sha_flag: Option<String>,

    /// Repository base URL used for source links (requires --sha)
    #[arg(long = "repo-url", value_name = "URL")]
    pub repo_url_flag: Option<String>,

    /// Path prefix stripped from file names (defaults to the input's directory)
    #[arg(long, value_name = "PREFIX")]
    pub root: Option<String>,

    /// Markup flavor for reports (markdown, html)
    #[arg(short, long, default_value = "markdown")]
    pub flavor: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input_flag.as_ref().or(self.input.as_ref())
    }

    pub fn output_mode(&self) -> &str {
        self.output_flag
            .as_deref()
            .or(self.output.as_deref())
            .unwrap_or("summary")
    }

    pub fn sha(&self) -> Option<String> {
        self.sha_flag.clone().or_else(|| self.sha.clone())
    }

    pub fn repo_url(&self) -> Option<String> {
        self.repo_url_flag.clone().or_else(|| self.repo_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_arguments() {
        let cli = Cli::parse_from([
            "xcodelog-to-md",
            "build.log",
            "text",
            "abc123",
            "https://github.com/o/r",
        ]);

        assert_eq!(cli.input_path(), Some(&PathBuf::from("build.log")));
        assert_eq!(cli.output_mode(), "text");
        assert_eq!(cli.sha().as_deref(), Some("abc123"));
        assert_eq!(cli.repo_url().as_deref(), Some("https://github.com/o/r"));
    }

    #[test]
    fn named_flags() {
        let cli = Cli::parse_from([
            "xcodelog-to-md",
            "--input",
            "build.log",
            "-o",
            "text",
            "--sha",
            "abc123",
            "--repo-url",
            "https://github.com/o/r",
            "--root",
            "/repo",
            "--flavor",
            "html",
        ]);

        assert_eq!(cli.input_path(), Some(&PathBuf::from("build.log")));
        assert_eq!(cli.output_mode(), "text");
        assert_eq!(cli.sha().as_deref(), Some("abc123"));
        assert_eq!(cli.repo_url().as_deref(), Some("https://github.com/o/r"));
        assert_eq!(cli.root.as_deref(), Some("/repo"));
        assert_eq!(cli.flavor, "html");
    }

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["xcodelog-to-md"]);

        assert!(cli.input_path().is_none());
        assert_eq!(cli.output_mode(), "summary");
        assert!(cli.sha().is_none());
        assert!(cli.repo_url().is_none());
        assert_eq!(cli.flavor, "markdown");
        assert!(!cli.verbose);
    }

    #[test]
    fn positional_input_with_named_output() {
        let cli = Cli::parse_from(["xcodelog-to-md", "build.log", "--output", "text"]);
        assert_eq!(cli.input_path(), Some(&PathBuf::from("build.log")));
        assert_eq!(cli.output_mode(), "text");
    }

    #[test]
    fn named_input_with_positional_mode_conflicts() {
        let result = Cli::try_parse_from(["xcodelog-to-md", "--input", "build.log", "text"]);
        assert!(result.is_err());
    }

    #[test]
    fn positional_and_flag_conflict() {
        let result = Cli::try_parse_from(["xcodelog-to-md", "a.log", "--input", "b.log"]);
        assert!(result.is_err());
    }
}
