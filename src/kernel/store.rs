use crate::kernel::services::ports::EditorWidgetFactory;
use crate::kernel::state::{DirLoadApplied, SessionState};
use crate::kernel::tabs::SaveApplied;
use crate::kernel::{Action, Effect, SessionEvent};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub events: Vec<SessionEvent>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn none() -> Self {
        Self {
            effects: Vec::new(),
            events: Vec::new(),
            state_changed: false,
        }
    }
}

pub struct Store {
    state: SessionState,
    widgets: Box<dyn EditorWidgetFactory>,
}

impl Store {
    pub fn new(state: SessionState, widgets: Box<dyn EditorWidgetFactory>) -> Self {
        Self { state, widgets }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::SelectWorkspace => DispatchResult {
                effects: vec![Effect::PickWorkspace],
                events: Vec::new(),
                state_changed: false,
            },
            Action::WorkspaceSelected { root } => {
                self.state.tree.begin_workspace(root.clone());
                DispatchResult {
                    effects: vec![Effect::LoadDir { path: root.clone() }],
                    events: vec![SessionEvent::SelectionStarted { root }],
                    state_changed: true,
                }
            }
            Action::ExpandDir { path } => {
                let (state_changed, effects) = self.state.tree.expand_path(&path);
                DispatchResult {
                    effects,
                    events: Vec::new(),
                    state_changed,
                }
            }
            Action::CollapseDir { path } => DispatchResult {
                effects: Vec::new(),
                events: Vec::new(),
                state_changed: self.state.tree.collapse_path(&path),
            },
            Action::DirLoaded { path, entries } => {
                match self.state.tree.apply_dir_loaded(&path, entries) {
                    DirLoadApplied::Root => DispatchResult {
                        effects: Vec::new(),
                        events: vec![SessionEvent::WorkspaceLoaded { root: path }],
                        state_changed: true,
                    },
                    DirLoadApplied::Subdir => DispatchResult {
                        effects: Vec::new(),
                        events: Vec::new(),
                        state_changed: true,
                    },
                    DirLoadApplied::Stale => {
                        tracing::debug!(path = %path.display(), "discarding stale directory listing");
                        DispatchResult::none()
                    }
                }
            }
            Action::DirLoadError { path, error } => {
                let is_root = self.state.tree.workspace_root() == Some(path.as_path());
                if self.state.tree.apply_dir_load_error(&path) {
                    let event = if is_root {
                        SessionEvent::WorkspaceLoadFailed { root: path, error }
                    } else {
                        SessionEvent::DirLoadFailed { path, error }
                    };
                    DispatchResult {
                        effects: Vec::new(),
                        events: vec![event],
                        state_changed: true,
                    }
                } else {
                    tracing::debug!(path = %path.display(), "discarding stale listing failure");
                    DispatchResult::none()
                }
            }
            Action::OpenPath { path } => {
                if self.state.tabs.contains(&path) {
                    return DispatchResult {
                        effects: Vec::new(),
                        events: Vec::new(),
                        state_changed: self.state.tabs.activate(&path),
                    };
                }
                if self.state.tabs.begin_open(path.clone()) {
                    DispatchResult {
                        effects: vec![Effect::LoadFile { path }],
                        events: Vec::new(),
                        state_changed: false,
                    }
                } else {
                    // Read already in flight for this path.
                    DispatchResult::none()
                }
            }
            Action::FileLoaded { path, content } => {
                if !self.state.tabs.take_pending_open(&path) {
                    tracing::debug!(path = %path.display(), "discarding stale file content");
                    return DispatchResult::none();
                }
                self.state
                    .tabs
                    .insert_opened(path.clone(), &content, self.widgets.as_ref());
                DispatchResult {
                    effects: Vec::new(),
                    events: vec![SessionEvent::Opened { path }],
                    state_changed: true,
                }
            }
            Action::FileLoadError { path, error } => {
                if !self.state.tabs.take_pending_open(&path) {
                    tracing::debug!(path = %path.display(), "discarding stale read failure");
                    return DispatchResult::none();
                }
                DispatchResult {
                    effects: Vec::new(),
                    events: vec![SessionEvent::OpenFailed { path, error }],
                    state_changed: false,
                }
            }
            Action::ActivateTab { path } => DispatchResult {
                effects: Vec::new(),
                events: Vec::new(),
                state_changed: self.state.tabs.activate(&path),
            },
            Action::DocumentEdited { path } => match self.state.tabs.mark_edited(&path) {
                Some(true) => DispatchResult {
                    effects: Vec::new(),
                    events: vec![SessionEvent::Modified { path }],
                    state_changed: true,
                },
                Some(false) => DispatchResult::none(),
                None => {
                    tracing::debug!(path = %path.display(), "edit notification for unknown tab");
                    DispatchResult::none()
                }
            },
            Action::SaveTab { path } => match self.state.tabs.save_snapshot(&path) {
                Some((content, version)) => DispatchResult {
                    effects: vec![Effect::WriteFile {
                        path,
                        content,
                        version,
                    }],
                    events: Vec::new(),
                    state_changed: false,
                },
                None => DispatchResult::none(),
            },
            Action::FileSaved { path, version } => {
                match self.state.tabs.apply_saved(&path, version) {
                    SaveApplied::Clean => DispatchResult {
                        effects: Vec::new(),
                        events: vec![SessionEvent::Saved { path }],
                        state_changed: true,
                    },
                    SaveApplied::OutdatedWrite => {
                        tracing::debug!(path = %path.display(), "save completion outdated by newer edits");
                        DispatchResult::none()
                    }
                    SaveApplied::Stale => {
                        tracing::debug!(path = %path.display(), "discarding save completion for closed tab");
                        DispatchResult::none()
                    }
                }
            }
            Action::FileSaveError { path, error } => {
                if self.state.tabs.contains(&path) {
                    DispatchResult {
                        effects: Vec::new(),
                        events: vec![SessionEvent::SaveFailed { path, error }],
                        state_changed: false,
                    }
                } else {
                    tracing::debug!(path = %path.display(), "discarding write failure for closed tab");
                    DispatchResult::none()
                }
            }
            Action::CloseTab { path } => {
                if self.state.tabs.close(&path) {
                    DispatchResult {
                        effects: Vec::new(),
                        events: vec![SessionEvent::Closed { path }],
                        state_changed: true,
                    }
                } else {
                    DispatchResult::none()
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
