use rustc_hash::FxHashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::kernel::doc_kind::DocKind;
use crate::kernel::services::ports::{EditorWidget, EditorWidgetFactory};

pub struct TabState {
    pub path: PathBuf,
    pub title: String,
    pub kind: DocKind,
    pub icon: &'static str,
    pub dirty: bool,
    pub edit_version: u64,
    widget: Box<dyn EditorWidget>,
}

impl fmt::Debug for TabState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabState")
            .field("path", &self.path)
            .field("title", &self.title)
            .field("kind", &self.kind)
            .field("dirty", &self.dirty)
            .field("edit_version", &self.edit_version)
            .finish()
    }
}

impl TabState {
    fn from_file(path: PathBuf, content: &str, factory: &dyn EditorWidgetFactory) -> Self {
        let title = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string());
        let kind = DocKind::from_path(&path);
        let widget = factory.create(&path, content);

        Self {
            path,
            title,
            kind,
            icon: kind.icon_ref(),
            dirty: false,
            edit_version: 0,
            widget,
        }
    }

    pub fn content(&self) -> String {
        self.widget.content()
    }
}

/// What a completed save applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveApplied {
    Clean,
    /// The tab was edited again while the write was in flight; the
    /// written content is already outdated, so dirty stays set.
    OutdatedWrite,
    /// No tab for the path anymore. The result is discarded.
    Stale,
}

#[derive(Default)]
pub struct TabsState {
    /// Insertion order = open order = display order.
    pub tabs: Vec<TabState>,
    active: Option<PathBuf>,
    pending_opens: FxHashSet<PathBuf>,
}

impl fmt::Debug for TabsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabsState")
            .field("tabs", &self.tabs)
            .field("active", &self.active)
            .finish()
    }
}

impl TabsState {
    pub fn active_path(&self) -> Option<&Path> {
        self.active.as_deref()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.position(path).is_some()
    }

    pub fn get(&self, path: &Path) -> Option<&TabState> {
        self.tabs.iter().find(|t| t.path == path)
    }

    fn position(&self, path: &Path) -> Option<usize> {
        self.tabs.iter().position(|t| t.path == path)
    }

    pub fn activate(&mut self, path: &Path) -> bool {
        if self.position(path).is_none() {
            return false;
        }
        if self.active.as_deref() == Some(path) {
            return false;
        }
        self.active = Some(path.to_path_buf());
        self.apply_visibility();
        true
    }

    /// Records an in-flight content read. Returns false when a tab for
    /// the path already exists or a read is already pending.
    pub fn begin_open(&mut self, path: PathBuf) -> bool {
        if self.position(&path).is_some() || self.pending_opens.contains(&path) {
            return false;
        }
        self.pending_opens.insert(path);
        true
    }

    /// Claims the pending read for `path`. A completion whose path was
    /// never requested (or was cancelled) is stale.
    pub fn take_pending_open(&mut self, path: &Path) -> bool {
        self.pending_opens.remove(path)
    }

    pub fn insert_opened(
        &mut self,
        path: PathBuf,
        content: &str,
        factory: &dyn EditorWidgetFactory,
    ) -> bool {
        if let Some(index) = self.position(&path) {
            let path = self.tabs[index].path.clone();
            return self.activate(&path);
        }

        self.tabs.push(TabState::from_file(path.clone(), content, factory));
        self.active = Some(path);
        self.apply_visibility();
        true
    }

    /// Bumps the edit version; returns `Some(true)` only on the
    /// clean-to-dirty transition.
    pub fn mark_edited(&mut self, path: &Path) -> Option<bool> {
        let tab = self.tabs.iter_mut().find(|t| t.path == path)?;
        tab.edit_version = tab.edit_version.saturating_add(1);
        if tab.dirty {
            Some(false)
        } else {
            tab.dirty = true;
            Some(true)
        }
    }

    pub fn save_snapshot(&self, path: &Path) -> Option<(String, u64)> {
        let tab = self.get(path)?;
        Some((tab.content(), tab.edit_version))
    }

    pub fn apply_saved(&mut self, path: &Path, version: u64) -> SaveApplied {
        let Some(tab) = self.tabs.iter_mut().find(|t| t.path == path) else {
            return SaveApplied::Stale;
        };
        if tab.edit_version != version {
            return SaveApplied::OutdatedWrite;
        }
        tab.dirty = false;
        SaveApplied::Clean
    }

    /// Removes the tab and drops its widget. If the closed tab was
    /// active, activation falls to the tab now occupying the vacated
    /// index, clamped to the new length.
    pub fn close(&mut self, path: &Path) -> bool {
        self.pending_opens.remove(path);

        let Some(index) = self.position(path) else {
            return false;
        };
        let was_active = self.active.as_deref() == Some(path);
        self.tabs.remove(index);

        if was_active {
            self.active = if self.tabs.is_empty() {
                None
            } else {
                let fallback = index.min(self.tabs.len() - 1);
                Some(self.tabs[fallback].path.clone())
            };
            self.apply_visibility();
        }
        true
    }

    fn apply_visibility(&mut self) {
        let active = self.active.clone();
        for tab in &mut self.tabs {
            tab.widget
                .set_hidden(active.as_deref() != Some(tab.path.as_path()));
        }
    }
}
