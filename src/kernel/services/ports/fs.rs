use std::path::PathBuf;

/// One entry of a shallow directory listing.
#[derive(Debug, Clone)]
pub struct DirEntryInfo {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub icon: &'static str,
    /// Hint only; corrected when the directory is actually listed.
    pub has_children: bool,
}

/// Native directory-selection dialog. `None` means the user cancelled.
pub trait DirectoryPicker: Send + Sync {
    fn pick(&self) -> Option<PathBuf>;
}
