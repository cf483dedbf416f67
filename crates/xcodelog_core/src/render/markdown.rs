//! Markdown text report: fenced code line and a quoted message.

use std::io::{self, Write};

use crate::config::RepoLink;
use crate::group::FileGroup;

pub(super) fn write_text<W: Write>(
    groups: &[FileGroup<'_>],
    link: Option<&RepoLink>,
    out: &mut W,
) -> io::Result<()> {
    for group in groups {
        for error in &group.errors {
            let position = format!("{} ({}:{})", group.file_name, error.line, error.column);
            match link {
                Some(link) => {
                    writeln!(out, "[{}]({})", position, link.blob_url(&group.file_name))?
                }
                None => writeln!(out, "{}", position)?,
            }

            writeln!(out, "```")?;
            writeln!(out, "{}", error.code_line.trim())?;
            writeln!(out, "```")?;
            writeln!(out, "> :heavy_exclamation_mark: {}", error.message.trim())?;
            writeln!(out)?;
            writeln!(out, "---")?;
            writeln!(out)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::{render_to_string, sample_link};
    use crate::config::{OutputMode, ReportConfig};
    use crate::scanner::scan_lines;
    use pretty_assertions::assert_eq;

    fn text_config() -> ReportConfig {
        ReportConfig::new()
            .with_root_prefix("/repo")
            .with_mode(OutputMode::Text)
    }

    #[test]
    fn renders_single_error_block() {
        let log = scan_lines(["/repo/src/a.m:10:5: error: unused variable 'x'", "    int x = 1;"]);

        let expected = "\
src/a.m (10:5)
```
int x = 1;
```
> :heavy_exclamation_mark: unused variable 'x'

---


";
        assert_eq!(render_to_string(&log, &text_config()), expected);
    }

    #[test]
    fn renders_linked_header() {
        let log = scan_lines(["/repo/src/a.m:10:5: error: unused variable 'x'", "    int x = 1;"]);
        let config = text_config().with_link(sample_link());

        let rendered = render_to_string(&log, &config);
        assert!(rendered.starts_with(
            "[src/a.m (10:5)](https://github.com/acme/app/blob/abc123/src/a.m)\n```\n"
        ));
    }

    #[test]
    fn separates_groups_with_blank_line() {
        let log = scan_lines([
            "/repo/a.m:1:1: error: one",
            "x",
            "/repo/b.m:2:2: error: two",
            "y",
        ]);

        let rendered = render_to_string(&log, &text_config());
        assert!(rendered.contains("> :heavy_exclamation_mark: one\n\n---\n\n\nb.m (2:2)\n"));
    }
}
