//! 异步消息定义

use std::path::PathBuf;

use crate::kernel::services::ports::DirEntryInfo;

pub enum SessionMessage {
    WorkspacePicked {
        root: Option<PathBuf>,
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
