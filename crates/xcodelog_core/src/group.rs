//! Grouping of errors by source file.

use indexmap::IndexMap;

use crate::scanner::ErrorRecord;

/// Errors attributed to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup<'a> {
    /// Path relative to the root prefix, trimmed.
    pub file_name: String,
    pub errors: Vec<&'a ErrorRecord>,
}

/// Groups errors by their normalized file name.
///
/// Groups appear in the order their first error was seen; errors within a
/// group keep scan order.
pub fn group_by_file<'a>(
    errors: &'a [ErrorRecord],
    root_prefix: Option<&str>,
) -> Vec<FileGroup<'a>> {
    let mut groups: IndexMap<String, Vec<&'a ErrorRecord>> = IndexMap::new();
    for error in errors {
        groups
            .entry(relative_file_name(&error.file, root_prefix))
            .or_default()
            .push(error);
    }

    groups
        .into_iter()
        .map(|(file_name, errors)| FileGroup { file_name, errors })
        .collect()
}

fn relative_file_name(file: &str, root_prefix: Option<&str>) -> String {
    let stripped = root_prefix
        .and_then(|prefix| file.strip_prefix(prefix))
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(file);
    stripped.trim().to_string()
}
