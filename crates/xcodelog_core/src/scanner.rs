//! Line scanner for `xcodebuild` logs.
//!
//! The scanner looks for lines carrying an ` error:` marker, such as
//!
//! ```text
//! /repo/src/a.m:10:5: error: unused variable 'x'
//!     int x = 1;
//! ```
//!
//! and pairs each marker with the line that follows it (the code line).
//! Only one marker can be in flight at a time: the next line always completes it.

use std::io::BufRead;

use tracing::debug;

use crate::error::XcodelogError;

const MARKER: &str = " error:";
const SPLIT_TOKEN: &str = "error:";

/// Severity of a collected record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A single error found in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    /// Path exactly as it appeared in the log.
    pub file: String,
    pub line: String,
    pub column: String,
    /// Raw text after the marker, untrimmed.
    pub message: String,
    pub severity: Severity,
    /// The log line that followed the marker.
    pub code_line: String,
}

/// A marker that is still waiting for its code line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingError {
    pub file: String,
    pub line: String,
    pub column: String,
    pub message: String,
}

impl PendingError {
    fn complete(self, code_line: &str) -> ErrorRecord {
        ErrorRecord {
            file: self.file,
            line: self.line,
            column: self.column,
            message: self.message,
            severity: Severity::Error,
            code_line: code_line.to_string(),
        }
    }
}

#[derive(Debug, Default)]
enum ScanState {
    #[default]
    Idle,
    Pending(PendingError),
}

/// Result of scanning a whole log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildLog {
    pub errors: Vec<ErrorRecord>,
}

impl BuildLog {
    pub fn error_count(&self) -> usize {
        self.errors
            .iter()
            .filter(|e| e.severity == Severity::Error)
            .count()
    }

    /// Always zero today: the scanner does not recognise warning markers.
    pub fn warning_count(&self) -> usize {
        self.errors
            .iter()
            .filter(|e| e.severity == Severity::Warning)
            .count()
    }
}

/// Incremental scanner fed one line at a time.
#[derive(Debug, Default)]
pub struct LineScanner {
    state: ScanState,
    errors: Vec<ErrorRecord>,
    lines_seen: usize,
}

impl LineScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes the next line of the log.
    pub fn push_line(&mut self, line: &str) {
        self.lines_seen += 1;

        if let ScanState::Pending(pending) = std::mem::take(&mut self.state) {
            self.errors.push(pending.complete(line));
        }

        if let Some(pending) = parse_marker(line) {
            debug!(
                "Found error marker at line {} in {}",
                self.lines_seen, pending.file
            );
            self.state = ScanState::Pending(pending);
        }
    }

    /// Ends the scan.
    ///
    /// A marker on the final line has no code line and is dropped.
    pub fn finish(self) -> BuildLog {
        if let ScanState::Pending(pending) = self.state {
            debug!(
                "Dropping error marker for {} on the final line: no code line follows",
                pending.file
            );
        }

        debug!(
            "Scanned {} lines, collected {} errors",
            self.lines_seen,
            self.errors.len()
        );

        BuildLog {
            errors: self.errors,
        }
    }
}

/// Scans an in-memory sequence of lines.
pub fn scan_lines<I>(lines: I) -> BuildLog
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut scanner = LineScanner::new();
    for line in lines {
        scanner.push_line(line.as_ref());
    }
    scanner.finish()
}

/// Scans a log from a reader, line by line.
///
/// Lines end at `\n` or `\r\n`. Invalid UTF-8 is replaced with U+FFFD;
/// read failures abort the scan.
pub fn scan_reader<R: BufRead>(mut reader: R) -> Result<BuildLog, XcodelogError> {
    let mut scanner = LineScanner::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        scanner.push_line(&String::from_utf8_lossy(&buf));
    }
    Ok(scanner.finish())
}

/// Parses a marker line into its location and message.
///
/// Returns `None` unless ` error:` appears after the first byte. Missing
/// line or column fields become empty strings.
pub fn parse_marker(line: &str) -> Option<PendingError> {
    match line.find(MARKER) {
        Some(idx) if idx > 0 => {}
        _ => return None,
    }

    let (location, message) = line.split_once(SPLIT_TOKEN)?;
    let mut fields = location.split(':');
    let mut next_field = || fields.next().unwrap_or_default().to_string();

    Some(PendingError {
        file: next_field(),
        line: next_field(),
        column: next_field(),
        message: message.to_string(),
    })
}
