use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Effect {
    PickWorkspace,
    LoadDir {
        path: PathBuf,
    },
    LoadFile {
        path: PathBuf,
    },
    WriteFile {
        path: PathBuf,
        content: String,
        version: u64,
    },
}
