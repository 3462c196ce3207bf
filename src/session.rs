use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::time::Instant;

use crate::kernel::services::adapters::{AsyncRuntime, SessionMessage};
use crate::kernel::services::ports::{DirectoryPicker, EditorWidgetFactory, SessionConfig};
use crate::kernel::{
    Action, Effect, Notification, NotificationCenter, NotificationId, SessionState, Store,
};

const MAX_MESSAGE_DRAIN_PER_PUMP: usize = 128;

/// Owns the whole editor session: store, notification queue, async
/// runtime and the completion channel. All state lives here; nothing is
/// process-global.
pub struct Session {
    store: Store,
    notifications: NotificationCenter,
    runtime: AsyncRuntime,
    rx: Receiver<SessionMessage>,
    picker: Arc<dyn DirectoryPicker>,
}

impl Session {
    pub fn create(
        config: SessionConfig,
        widgets: Box<dyn EditorWidgetFactory>,
        picker: Arc<dyn DirectoryPicker>,
    ) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let runtime = AsyncRuntime::new(tx)?;
        let notifications = NotificationCenter::new(&config);
        let store = Store::new(SessionState::new(), widgets);

        Ok(Self {
            store,
            notifications,
            runtime,
            rx,
            picker,
        })
    }

    pub fn state(&self) -> &SessionState {
        self.store.state()
    }

    pub fn notifications(&self) -> &[Notification] {
        self.notifications.entries()
    }

    pub fn select_workspace(&mut self) -> bool {
        self.dispatch(Action::SelectWorkspace)
    }

    /// Opens a workspace root directly, bypassing the picker dialog.
    pub fn open_workspace(&mut self, root: PathBuf) -> bool {
        self.dispatch(Action::WorkspaceSelected { root })
    }

    pub fn expand(&mut self, path: &Path) -> bool {
        self.dispatch(Action::ExpandDir {
            path: path.to_path_buf(),
        })
    }

    pub fn collapse(&mut self, path: &Path) -> bool {
        self.dispatch(Action::CollapseDir {
            path: path.to_path_buf(),
        })
    }

    pub fn open(&mut self, path: &Path) -> bool {
        self.dispatch(Action::OpenPath {
            path: path.to_path_buf(),
        })
    }

    pub fn activate(&mut self, path: &Path) -> bool {
        self.dispatch(Action::ActivateTab {
            path: path.to_path_buf(),
        })
    }

    /// Forwarded by the shell from the widget's content-change hook.
    pub fn document_edited(&mut self, path: &Path) -> bool {
        self.dispatch(Action::DocumentEdited {
            path: path.to_path_buf(),
        })
    }

    pub fn save(&mut self, path: &Path) -> bool {
        self.dispatch(Action::SaveTab {
            path: path.to_path_buf(),
        })
    }

    pub fn save_active(&mut self) -> bool {
        let Some(path) = self.store.state().tabs.active_path().map(Path::to_path_buf) else {
            return false;
        };
        self.save(&path)
    }

    pub fn close(&mut self, path: &Path) -> bool {
        self.dispatch(Action::CloseTab {
            path: path.to_path_buf(),
        })
    }

    pub fn dismiss_notification(&mut self, id: NotificationId) -> bool {
        self.notifications.dismiss(id)
    }

    /// Drains pending I/O completions (bounded per call). Returns true
    /// when visible state changed.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        let mut drained = 0usize;
        loop {
            if drained >= MAX_MESSAGE_DRAIN_PER_PUMP {
                break;
            }
            match self.rx.try_recv() {
                Ok(msg) => {
                    drained += 1;
                    changed |= self.apply_message(msg);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        changed
    }

    /// Periodic driver hook: drains completions and expires
    /// notifications.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.pump();
        changed |= self.notifications.tick(now);
        changed
    }

    pub fn dispose(self) {
        self.runtime.shutdown();
    }

    fn apply_message(&mut self, msg: SessionMessage) -> bool {
        match msg {
            SessionMessage::WorkspacePicked { root: Some(root) } => {
                self.dispatch(Action::WorkspaceSelected { root })
            }
            SessionMessage::WorkspacePicked { root: None } => {
                tracing::debug!("workspace selection cancelled");
                false
            }
            SessionMessage::DirLoaded { path, entries } => {
                self.dispatch(Action::DirLoaded { path, entries })
            }
            SessionMessage::DirLoadError { path, error } => {
                self.dispatch(Action::DirLoadError { path, error })
            }
            SessionMessage::FileLoaded { path, content } => {
                self.dispatch(Action::FileLoaded { path, content })
            }
            SessionMessage::FileLoadError { path, error } => {
                self.dispatch(Action::FileLoadError { path, error })
            }
            SessionMessage::FileSaved { path, version } => {
                self.dispatch(Action::FileSaved { path, version })
            }
            SessionMessage::FileSaveError { path, error } => {
                self.dispatch(Action::FileSaveError { path, error })
            }
        }
    }

    fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        let now = Instant::now();

        let mut changed = result.state_changed;
        for event in &result.events {
            changed |= self.notifications.observe(event, now);
        }
        for effect in result.effects {
            self.run_effect(effect);
        }
        changed
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::PickWorkspace => self.runtime.pick_workspace(Arc::clone(&self.picker)),
            Effect::LoadDir { path } => self.runtime.load_dir(path),
            Effect::LoadFile { path } => self.runtime.load_file(path),
            Effect::WriteFile {
                path,
                content,
                version,
            } => self.runtime.write_file(path, content, version),
        }
    }
}
