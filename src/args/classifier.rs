//! Trailing-argument classifier — raw trailing tokens → classified buckets.

/// Result of classifying the trailing arguments of an extract command.
///
/// Every input token lands in exactly one bucket; relative order within
/// `files` and `list_files` matches the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyResult {
    /// Literal file names to extract.
    pub files: Vec<String>,
    /// Paths to list files, `@` sigil stripped. Duplicates preserved.
    pub list_files: Vec<String>,
    /// Directory to extract into, if any trailing token named one.
    pub dest_dir: Option<String>,
}

/// Split trailing tokens into `[files...]`, `[@list-files...]` and
/// `[path_to_extract/]`.
///
/// unrar considers every token ending with `/` a path. If multiple paths
/// are present only the last one is used; earlier ones are dropped
/// without a diagnostic. unrar behaves the same way, so the wrapper
/// replicates it rather than warning or erroring.
pub fn classify(rest: &[String]) -> ClassifyResult {
    let mut result = ClassifyResult::default();

    for token in rest {
        if token.ends_with('/') {
            result.dest_dir = Some(token.clone());
        } else if let Some(list_file) = token.strip_prefix('@') {
            result.list_files.push(list_file.to_string());
        } else {
            result.files.push(token.clone());
        }
    }

    result
}
