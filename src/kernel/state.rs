use std::path::{Path, PathBuf};

use crate::kernel::doc_kind::FOLDER_ICON;
use crate::kernel::services::ports::DirEntryInfo;
use crate::kernel::tabs::TabsState;
use crate::kernel::Effect;
use crate::models::{DirTree, DirTreeRow, LoadState, NodeKind};

pub struct SessionState {
    pub tree: TreeState,
    pub tabs: TabsState,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            tree: TreeState::default(),
            tabs: TabsState::default(),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// What a completed directory listing applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirLoadApplied {
    Root,
    Subdir,
    /// Node or tree gone (e.g. the workspace root was re-selected while
    /// the listing was in flight). The result is discarded.
    Stale,
}

#[derive(Default)]
pub struct TreeState {
    tree: Option<DirTree>,
    pub rows: Vec<DirTreeRow>,
}

impl TreeState {
    pub fn workspace_root(&self) -> Option<&Path> {
        self.tree.as_ref().map(|t| t.absolute_root())
    }

    /// Replaces any previous tree. In-flight loads for the old tree miss
    /// the path index afterwards and are dropped on completion.
    pub fn begin_workspace(&mut self, root: PathBuf) {
        let name = root
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| root.display().to_string());
        self.tree = Some(DirTree::new_with_root(
            name,
            root,
            LoadState::Loading,
            FOLDER_ICON,
        ));
        self.refresh_rows();
    }

    pub fn expand_path(&mut self, path: &Path) -> (bool, Vec<Effect>) {
        let Some(tree) = self.tree.as_mut() else {
            return (false, Vec::new());
        };
        let Some(id) = tree.find_node_by_path(path) else {
            return (false, Vec::new());
        };
        if !tree.is_dir(id) {
            return (false, Vec::new());
        }

        match tree.load_state(id) {
            Some(LoadState::NotLoaded) => {
                tree.set_load_state(id, LoadState::Loading);
                tree.expand(id);
                let path = tree.full_path(id);
                self.refresh_rows();
                (true, vec![Effect::LoadDir { path }])
            }
            // Listing already in flight; the first request wins.
            Some(LoadState::Loading) => (false, Vec::new()),
            Some(LoadState::Loaded) | None => {
                if tree.is_expanded(id) {
                    return (false, Vec::new());
                }
                tree.expand(id);
                self.refresh_rows();
                (true, Vec::new())
            }
        }
    }

    pub fn collapse_path(&mut self, path: &Path) -> bool {
        let Some(tree) = self.tree.as_mut() else {
            return false;
        };
        let Some(id) = tree.find_node_by_path(path) else {
            return false;
        };
        if !tree.is_dir(id) || !tree.is_expanded(id) {
            return false;
        }
        tree.collapse(id);
        self.refresh_rows();
        true
    }

    pub fn apply_dir_loaded(
        &mut self,
        path: &Path,
        entries: Vec<DirEntryInfo>,
    ) -> DirLoadApplied {
        let Some(tree) = self.tree.as_mut() else {
            return DirLoadApplied::Stale;
        };
        let Some(id) = tree.find_node_by_path(path) else {
            return DirLoadApplied::Stale;
        };
        if tree.load_state(id) != Some(LoadState::Loading) {
            return DirLoadApplied::Stale;
        }

        let has_any = !entries.is_empty();
        for entry in entries {
            let kind = if entry.is_dir {
                NodeKind::Dir
            } else {
                NodeKind::File
            };
            let _ = tree.insert_child(id, entry.name, kind, entry.icon, entry.has_children);
        }

        tree.set_load_state(id, LoadState::Loaded);
        tree.set_has_children(id, has_any);
        let was_root = id == tree.root();
        self.refresh_rows();

        if was_root {
            DirLoadApplied::Root
        } else {
            DirLoadApplied::Subdir
        }
    }

    /// Failed listings leave the node retryable; cached siblings are
    /// untouched.
    pub fn apply_dir_load_error(&mut self, path: &Path) -> bool {
        let Some(tree) = self.tree.as_mut() else {
            return false;
        };
        let Some(id) = tree.find_node_by_path(path) else {
            return false;
        };
        if tree.load_state(id) != Some(LoadState::Loading) {
            return false;
        }

        tree.set_load_state(id, LoadState::NotLoaded);
        tree.collapse(id);
        self.refresh_rows();
        true
    }

    fn refresh_rows(&mut self) {
        self.rows = self
            .tree
            .as_ref()
            .map(|t| t.flatten_for_view())
            .unwrap_or_default();
    }
}
