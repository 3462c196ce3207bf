use std::path::PathBuf;

use crate::kernel::services::ports::DirEntryInfo;

#[derive(Debug, Clone)]
pub enum Action {
    SelectWorkspace,
    WorkspaceSelected {
        root: PathBuf,
    },
    ExpandDir {
        path: PathBuf,
    },
    CollapseDir {
        path: PathBuf,
    },
    OpenPath {
        path: PathBuf,
    },
    ActivateTab {
        path: PathBuf,
    },
    DocumentEdited {
        path: PathBuf,
    },
    SaveTab {
        path: PathBuf,
    },
    CloseTab {
        path: PathBuf,
    },
    DirLoaded {
        path: PathBuf,
        entries: Vec<DirEntryInfo>,
    },
    DirLoadError {
        path: PathBuf,
        error: String,
    },
    FileLoaded {
        path: PathBuf,
        content: String,
    },
    FileLoadError {
        path: PathBuf,
        error: String,
    },
    FileSaved {
        path: PathBuf,
        version: u64,
    },
    FileSaveError {
        path: PathBuf,
        error: String,
    },
}
