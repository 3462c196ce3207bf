use std::path::PathBuf;

/// Observable session transitions. The store emits these; presentation
/// adapters (the notification center) subscribe to them. Reducers never
/// decide how a transition is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SelectionStarted { root: PathBuf },
    WorkspaceLoaded { root: PathBuf },
    WorkspaceLoadFailed { root: PathBuf, error: String },
    DirLoadFailed { path: PathBuf, error: String },
    Opened { path: PathBuf },
    OpenFailed { path: PathBuf, error: String },
    Modified { path: PathBuf },
    Saved { path: PathBuf },
    SaveFailed { path: PathBuf, error: String },
    Closed { path: PathBuf },
}
