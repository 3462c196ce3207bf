use super::message::SessionMessage;
use crate::kernel::doc_kind::{DocKind, FOLDER_ICON};
use crate::kernel::services::ports::{DirEntryInfo, DirectoryPicker};
use crate::models::should_ignore;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::sync::Arc;

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<SessionMessage>,
}

impl AsyncRuntime {
    pub fn new(tx: Sender<SessionMessage>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self { runtime, tx })
    }

    pub fn shutdown(self) {
        self.runtime.shutdown_background();
    }

    pub fn pick_workspace(&self, picker: Arc<dyn DirectoryPicker>) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let root = tokio::task::spawn_blocking(move || picker.pick())
                .await
                .unwrap_or_default();
            let _ = tx.send(SessionMessage::WorkspacePicked { root });
        });
    }

    pub fn load_dir(&self, path: PathBuf) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            match read_dir_shallow(&path).await {
                Ok(entries) => {
                    let _ = tx.send(SessionMessage::DirLoaded { path, entries });
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "directory listing failed");
                    let _ = tx.send(SessionMessage::DirLoadError {
                        path,
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    pub fn load_file(&self, path: PathBuf) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            match tokio::fs::read_to_string(&path).await {
                Ok(content) => {
                    let _ = tx.send(SessionMessage::FileLoaded { path, content });
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "file read failed");
                    let _ = tx.send(SessionMessage::FileLoadError {
                        path,
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    pub fn write_file(&self, path: PathBuf, content: String, version: u64) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            match tokio::fs::write(&path, content.as_bytes()).await {
                Ok(()) => {
                    let _ = tx.send(SessionMessage::FileSaved { path, version });
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "file write failed");
                    let _ = tx.send(SessionMessage::FileSaveError {
                        path,
                        error: e.to_string(),
                    });
                }
            }
        });
    }
}

async fn read_dir_shallow(path: &Path) -> io::Result<Vec<DirEntryInfo>> {
    let mut reader = tokio::fs::read_dir(path).await?;
    let mut entries = Vec::new();

    while let Some(entry) = reader.next_entry().await? {
        let name = entry.file_name().to_string_lossy().to_string();
        if should_ignore(&name) {
            continue;
        }
        let Ok(file_type) = entry.file_type().await else {
            continue;
        };

        let child_path = entry.path();
        if file_type.is_dir() {
            let has_children = dir_has_entries(&child_path).await;
            entries.push(DirEntryInfo {
                name,
                path: child_path,
                is_dir: true,
                icon: FOLDER_ICON,
                has_children,
            });
        } else {
            let icon = DocKind::from_path(&child_path).icon_ref();
            entries.push(DirEntryInfo {
                name,
                path: child_path,
                is_dir: false,
                icon,
                has_children: false,
            });
        }
    }

    entries.sort_by(|a, b| match (a.is_dir, b.is_dir) {
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    });

    Ok(entries)
}

// One-entry peek; the full listing stays deferred until expansion.
async fn dir_has_entries(path: &Path) -> bool {
    let Ok(mut reader) = tokio::fs::read_dir(path).await else {
        return false;
    };
    loop {
        match reader.next_entry().await {
            Ok(Some(entry)) => {
                if !should_ignore(&entry.file_name().to_string_lossy()) {
                    return true;
                }
            }
            Ok(None) | Err(_) => return false,
        }
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/async_runtime.rs"]
mod tests;
