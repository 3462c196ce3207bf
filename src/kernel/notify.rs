use std::path::Path;
use std::time::{Duration, Instant};

use crate::kernel::event::SessionEvent;
use crate::kernel::services::ports::SessionConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
    Loading,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub context: Option<String>,
    pub created_at: Instant,
    pub expires_after: Option<Duration>,
}

impl Notification {
    fn expired(&self, now: Instant) -> bool {
        match self.expires_after {
            Some(ttl) => now.duration_since(self.created_at) >= ttl,
            None => false,
        }
    }
}

/// Bounded queue of transient status messages, plus the adapter mapping
/// session events onto it.
pub struct NotificationCenter {
    entries: Vec<Notification>,
    next_id: u64,
    max_live: usize,
    default_ttl: Duration,
    workspace_loading: Option<NotificationId>,
}

impl NotificationCenter {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            max_live: config.max_notifications.max(1),
            default_ttl: config.notification_ttl(),
            workspace_loading: None,
        }
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn enqueue(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        context: Option<String>,
        expires_after: Option<Duration>,
        now: Instant,
    ) -> NotificationId {
        self.evict_for_insert();

        let id = NotificationId(self.next_id);
        self.next_id += 1;

        // Loading entries stay until explicitly completed.
        let expires_after = match severity {
            Severity::Loading => None,
            _ => expires_after.or(Some(self.default_ttl)),
        };

        self.entries.push(Notification {
            id,
            message: message.into(),
            severity,
            context,
            created_at: now,
            expires_after,
        });
        id
    }

    /// Atomically replaces a loading entry with a success entry carrying
    /// the same context. Returns `None` if the handle no longer names a
    /// loading entry.
    pub fn complete(
        &mut self,
        id: NotificationId,
        message: impl Into<String>,
        now: Instant,
    ) -> Option<NotificationId> {
        let index = self
            .entries
            .iter()
            .position(|n| n.id == id && n.severity == Severity::Loading)?;
        let removed = self.entries.remove(index);
        Some(self.enqueue(message, Severity::Success, removed.context, None, now))
    }

    /// Dismissal is refused for loading entries; those go through
    /// `complete`.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let Some(index) = self.entries.iter().position(|n| n.id == id) else {
            return false;
        };
        if self.entries[index].severity == Severity::Loading {
            return false;
        }
        self.entries.remove(index);
        true
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| !n.expired(now));
        self.entries.len() != before
    }

    fn evict_for_insert(&mut self) {
        while self.entries.len() >= self.max_live {
            let victim = self
                .entries
                .iter()
                .position(|n| n.severity != Severity::Loading)
                .unwrap_or(0);
            let gone = self.entries.remove(victim);
            if self.workspace_loading == Some(gone.id) {
                self.workspace_loading = None;
            }
        }
    }

    fn remove_any(&mut self, id: NotificationId) {
        self.entries.retain(|n| n.id != id);
    }

    /// Presentation adapter: one notification per observable transition.
    pub fn observe(&mut self, event: &SessionEvent, now: Instant) -> bool {
        match event {
            SessionEvent::SelectionStarted { root } => {
                if let Some(id) = self.workspace_loading.take() {
                    self.remove_any(id);
                }
                let id = self.enqueue(
                    "Opening workspace…",
                    Severity::Loading,
                    Some(root.display().to_string()),
                    None,
                    now,
                );
                self.workspace_loading = Some(id);
            }
            SessionEvent::WorkspaceLoaded { root } => match self.workspace_loading.take() {
                Some(id) => {
                    if self.complete(id, "Workspace loaded", now).is_none() {
                        self.enqueue(
                            "Workspace loaded",
                            Severity::Success,
                            Some(root.display().to_string()),
                            None,
                            now,
                        );
                    }
                }
                None => {
                    self.enqueue(
                        "Workspace loaded",
                        Severity::Success,
                        Some(root.display().to_string()),
                        None,
                        now,
                    );
                }
            },
            SessionEvent::WorkspaceLoadFailed { root, error } => {
                if let Some(id) = self.workspace_loading.take() {
                    self.remove_any(id);
                }
                self.enqueue(
                    format!("Failed to load workspace: {error}"),
                    Severity::Error,
                    Some(root.display().to_string()),
                    None,
                    now,
                );
            }
            SessionEvent::DirLoadFailed { path, error } => {
                self.enqueue(
                    format!("Failed to list {}: {error}", file_label(path)),
                    Severity::Error,
                    Some(path.display().to_string()),
                    None,
                    now,
                );
            }
            SessionEvent::Opened { path } => {
                self.enqueue(
                    format!("Opened {}", file_label(path)),
                    Severity::Success,
                    None,
                    None,
                    now,
                );
            }
            SessionEvent::OpenFailed { path, error } => {
                self.enqueue(
                    format!("Failed to open {}: {error}", file_label(path)),
                    Severity::Error,
                    Some(path.display().to_string()),
                    None,
                    now,
                );
            }
            SessionEvent::Modified { path } => {
                self.enqueue(
                    format!("{} has unsaved changes", file_label(path)),
                    Severity::Warning,
                    None,
                    None,
                    now,
                );
            }
            SessionEvent::Saved { path } => {
                self.enqueue(
                    format!("Saved {}", file_label(path)),
                    Severity::Success,
                    None,
                    None,
                    now,
                );
            }
            SessionEvent::SaveFailed { path, error } => {
                self.enqueue(
                    format!("Failed to save {}: {error}", file_label(path)),
                    Severity::Error,
                    Some(path.display().to_string()),
                    None,
                    now,
                );
            }
            SessionEvent::Closed { path } => {
                self.enqueue(
                    format!("Closed {}", file_label(path)),
                    Severity::Success,
                    None,
                    None,
                    now,
                );
            }
        }
        true
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/notify.rs"]
mod tests;
