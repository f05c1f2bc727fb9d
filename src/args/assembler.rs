//! Argument assembler — the final child argv in one place.

/// Builder for the argument vector passed to the spawned unar/lsar
/// process. Push order is final order: options, archive, then files.
#[derive(Debug, Clone)]
pub struct ArgAssembler {
    args: Vec<String>,
}

impl ArgAssembler {
    /// Start with the translated base options.
    pub fn from_options(options: Vec<String>) -> Self {
        Self { args: options }
    }

    /// Append `-D` so unar never creates a containing directory when the
    /// archive has more than one top-level entry. unrar never creates
    /// one, so extraction always gets this flag.
    pub fn with_auto_dir_suppressed(mut self) -> Self {
        self.args.push("-D".to_string());
        self
    }

    /// Append `-o <dir>` if an extraction directory was classified.
    pub fn with_dest_dir(mut self, dest_dir: Option<&str>) -> Self {
        if let Some(dir) = dest_dir {
            self.args.push("-o".to_string());
            self.args.push(dir.to_string());
        }
        self
    }

    /// Append the archive path. Must come after every option.
    pub fn with_archive(mut self, archive: &str) -> Self {
        self.args.push(archive.to_string());
        self
    }

    /// Append the files to extract, literal entries first, list-file
    /// entries after, each keeping its own order.
    pub fn with_files(mut self, files: Vec<String>) -> Self {
        self.args.extend(files);
        self
    }

    /// Build the final argument list.
    pub fn build(self) -> Vec<String> {
        self.args
    }
}
