//! List-file expansion — `@list-file` references → file names.
//!
//! A list file is plain text, one file name or path per line, no quoting
//! or escaping. unar has no native `@list` support, so the wrapper
//! flattens the referenced files into explicit arguments before spawning.

use std::fs;
use std::io;
use thiserror::Error;

/// Error raised when a referenced list file cannot be read.
#[derive(Debug, Error)]
pub enum ListFileError {
    #[error("Cannot open {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Read each list file in order and return the concatenated entries.
///
/// One entry per line, trailing line terminator stripped; any other
/// whitespace in the line is kept verbatim. Order is preserved both
/// across files and within each file. An empty list file contributes
/// nothing.
///
/// Fail-fast: the first unreadable path aborts the whole expansion. A
/// bad list file is an operator error, so no partial result is returned.
pub fn expand_list_files(list_files: &[String]) -> Result<Vec<String>, ListFileError> {
    let mut files = Vec::new();

    for path in list_files {
        let content = fs::read_to_string(path).map_err(|source| ListFileError::Read {
            path: path.clone(),
            source,
        })?;
        files.extend(content.lines().map(str::to_string));
    }

    Ok(files)
}
