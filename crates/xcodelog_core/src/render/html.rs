//! HTML text report using GitHub's diff highlighting classes.

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
            match link {
                Some(link) => writeln!(
                    out,
                    ":heavy_exclamation_mark: [{}:{}] [{}]({})",
                    error.line,
                    error.column,
                    group.file_name,
                    link.blob_url(&group.file_name)
                )?,
                None => writeln!(
                    out,
                    ":heavy_exclamation_mark: {} [{}:{}]",
                    group.file_name, error.line, error.column
                )?,
            }

            writeln!(out, "<div class=\"highlight highlight-source-diff\">")?;
            writeln!(out, "<pre>")?;
            writeln!(out, "<span class=\"pl-mi1\">")?;
            writeln!(out, "{}", error.code_line.trim())?;
            writeln!(out, "</span>")?;
            writeln!(out, "<span class=\"pl-md\">")?;
            writeln!(out, "{}", error.message.trim())?;
            writeln!(out, "</span>")?;
            writeln!(out, "</pre>")?;
            writeln!(out, "</div>")?;
            writeln!(out, " ")?;
            writeln!(out, "---")?;
            writeln!(out, " ")?;
        }
        writeln!(out, " ")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::{render_to_string, sample_link};
    use crate::config::{Flavor, OutputMode, ReportConfig};
    use crate::scanner::scan_lines;
    use pretty_assertions::assert_eq;

    fn html_config() -> ReportConfig {
        ReportConfig::new()
            .with_root_prefix("/repo")
            .with_mode(OutputMode::Text)
            .with_flavor(Flavor::Html)
    }

    #[test]
    fn renders_diff_highlight_block() {
        let log = scan_lines(["/repo/src/a.m:10:5: error: unused variable 'x'", "    int x = 1;"]);

        let expected = r#":heavy_exclamation_mark: src/a.m [10:5]
<div class="highlight highlight-source-diff">
<pre>
<span class="pl-mi1">
int x = 1;
</span>
<span class="pl-md">
unused variable 'x'
</span>
</pre>
</div>
 
---
 
 
"#;
        assert_eq!(render_to_string(&log, &html_config()), expected);
    }

    #[test]
    fn renders_linked_header() {
        let log = scan_lines(["/repo/src/a.m:10:5: error: unused variable 'x'", "    int x = 1;"]);
        let config = html_config().with_link(sample_link());

        let rendered = render_to_string(&log, &config);
        assert!(rendered.starts_with(
            ":heavy_exclamation_mark: [10:5] [src/a.m](https://github.com/acme/app/blob/abc123/src/a.m)\n"
        ));
    }
}
