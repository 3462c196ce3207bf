//! 目录树数据模型

use rustc_hash::FxHashSet;
use slotmap::{new_key_type, SlotMap};
use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    path::{Path, PathBuf},
};

new_key_type! { pub struct NodeId; }

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Dir,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    NotLoaded,
    Loading,
    Loaded,
}

#[derive(Debug)]
pub enum DirTreeError {
    ParentNotDirectory,
    NameExists,
    InvalidNodeId,
}

impl fmt::Display for DirTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirTreeError::ParentNotDirectory => write!(f, "parent is not a directory"),
            DirTreeError::NameExists => write!(f, "name already exists in parent"),
            DirTreeError::InvalidNodeId => write!(f, "invalid node id"),
        }
    }
}

impl std::error::Error for DirTreeError {}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    name: String,
    icon: &'static str,
    // Lister hint; may be stale until the node is actually loaded.
    has_children: bool,
    parent: Option<NodeId>,
    children: Option<BTreeMap<String, NodeId>>,
    load_state: LoadState,
}

impl Node {
    fn new_file(name: String, icon: &'static str, parent: Option<NodeId>) -> Self {
        Self {
            kind: NodeKind::File,
            name,
            icon,
            has_children: false,
            parent,
            children: None,
            load_state: LoadState::Loaded,
        }
    }

    fn new_dir(
        name: String,
        icon: &'static str,
        has_children: bool,
        parent: Option<NodeId>,
        load_state: LoadState,
    ) -> Self {
        Self {
            kind: NodeKind::Dir,
            name,
            icon,
            has_children,
            parent,
            children: Some(BTreeMap::new()),
            load_state,
        }
    }
}

pub struct DirTree {
    arena: SlotMap<NodeId, Node>,
    root: NodeId,
    expanded: FxHashSet<NodeId>,
    absolute_root: PathBuf,
    path_cache: HashMap<NodeId, PathBuf>,
    id_by_path: HashMap<PathBuf, NodeId>,
}

impl DirTree {
    pub fn new_with_root(
        root_name: String,
        absolute_root: PathBuf,
        root_state: LoadState,
        root_icon: &'static str,
    ) -> Self {
        let mut arena = SlotMap::with_key();
        let root = arena.insert(Node::new_dir(root_name, root_icon, true, None, root_state));

        let mut expanded = FxHashSet::default();
        expanded.insert(root);

        Self {
            arena,
            root,
            expanded,
            absolute_root,
            path_cache: HashMap::new(),
            id_by_path: HashMap::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn absolute_root(&self) -> &Path {
        &self.absolute_root
    }

    pub fn load_state(&self, id: NodeId) -> Option<LoadState> {
        self.arena.get(id).map(|n| n.load_state)
    }

    pub fn set_load_state(&mut self, id: NodeId, state: LoadState) {
        if let Some(node) = self.arena.get_mut(id) {
            node.load_state = state;
        }
    }

    pub fn has_children(&self, id: NodeId) -> bool {
        self.arena.get(id).map(|n| n.has_children).unwrap_or(false)
    }

    pub fn set_has_children(&mut self, id: NodeId, has_children: bool) {
        if let Some(node) = self.arena.get_mut(id) {
            node.has_children = has_children;
        }
    }

    pub fn insert_child(
        &mut self,
        parent: NodeId,
        name: String,
        kind: NodeKind,
        icon: &'static str,
        has_children: bool,
    ) -> Result<NodeId, DirTreeError> {
        {
            let parent_ro = self.arena.get(parent).ok_or(DirTreeError::InvalidNodeId)?;
            let children_ro = parent_ro
                .children
                .as_ref()
                .ok_or(DirTreeError::ParentNotDirectory)?;
            if children_ro.contains_key(&name) {
                return Err(DirTreeError::NameExists);
            }
        }

        let node = match kind {
            NodeKind::File => Node::new_file(name.clone(), icon, Some(parent)),
            NodeKind::Dir => Node::new_dir(
                name.clone(),
                icon,
                has_children,
                Some(parent),
                LoadState::NotLoaded,
            ),
        };
        let id = self.arena.insert(node);

        let parent_node = self
            .arena
            .get_mut(parent)
            .ok_or(DirTreeError::InvalidNodeId)?;
        let children = parent_node
            .children
            .as_mut()
            .ok_or(DirTreeError::ParentNotDirectory)?;
        children.insert(name, id);

        Ok(id)
    }

    pub fn full_path(&mut self, id: NodeId) -> PathBuf {
        if id == self.root {
            self.id_by_path
                .insert(self.absolute_root.clone(), self.root);
            return self.absolute_root.clone();
        }

        if let Some(cached_path) = self.path_cache.get(&id) {
            return cached_path.clone();
        }

        let mut path = self.absolute_root.clone();
        let mut current = id;
        let mut components = vec![];

        while let Some(node) = self.arena.get(current) {
            if let Some(parent) = node.parent {
                components.push(node.name.clone());
                current = parent;
            } else {
                break;
            }
        }

        for comp in components.iter().rev() {
            path.push(comp);
        }

        self.path_cache.insert(id, path.clone());
        self.id_by_path.insert(path.clone(), id);
        path
    }

    pub fn find_node_by_path(&mut self, path: &Path) -> Option<NodeId> {
        if path == self.absolute_root {
            self.id_by_path
                .insert(self.absolute_root.clone(), self.root);
            return Some(self.root);
        }

        if let Some(id) = self.id_by_path.get(path).copied() {
            return Some(id);
        }

        let relative = path.strip_prefix(&self.absolute_root).ok()?;
        let mut current = self.root;

        for component in relative.components() {
            let name = component.as_os_str().to_str()?;
            let children = self.arena.get(current)?.children.as_ref()?;
            current = *children.get(name)?;
        }

        self.path_cache.insert(current, path.to_path_buf());
        self.id_by_path.insert(path.to_path_buf(), current);
        Some(current)
    }

    pub fn expand(&mut self, id: NodeId) {
        if self.arena.get(id).is_some_and(|n| n.kind == NodeKind::Dir) {
            self.expanded.insert(id);
        }
    }

    pub fn collapse(&mut self, id: NodeId) {
        self.expanded.remove(&id);
    }

    pub fn is_dir(&self, id: NodeId) -> bool {
        self.arena
            .get(id)
            .map(|n| n.kind == NodeKind::Dir)
            .unwrap_or(false)
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }
}

#[derive(Debug, Clone)]
pub struct DirTreeRow {
    pub id: NodeId,
    pub depth: u16,
    pub name: String,
    pub icon: &'static str,
    pub is_dir: bool,
    pub is_expanded: bool,
    pub has_children: bool,
    pub load_state: LoadState,
}

impl DirTree {
    pub fn flatten_for_view(&self) -> Vec<DirTreeRow> {
        let mut result = Vec::new();
        let mut stack: Vec<(NodeId, u16)> = vec![(self.root, 0)];

        while let Some((id, depth)) = stack.pop() {
            if id != self.root {
                if let Some(node) = self.arena.get(id) {
                    result.push(DirTreeRow {
                        id,
                        depth,
                        name: node.name.clone(),
                        icon: node.icon,
                        is_dir: node.kind == NodeKind::Dir,
                        is_expanded: self.expanded.contains(&id),
                        has_children: node.has_children,
                        load_state: node.load_state,
                    });
                }
            }

            if self.expanded.contains(&id) {
                if let Some(node) = self.arena.get(id) {
                    if let Some(children) = &node.children {
                        let mut dirs = Vec::new();
                        let mut files = Vec::new();

                        for (name, &child_id) in children.iter() {
                            if let Some(child) = self.arena.get(child_id) {
                                if child.kind == NodeKind::Dir {
                                    dirs.push((name.clone(), child_id));
                                } else {
                                    files.push((name.clone(), child_id));
                                }
                            }
                        }

                        for (_, file_id) in files.into_iter().rev() {
                            stack.push((file_id, depth + 1));
                        }
                        for (_, dir_id) in dirs.into_iter().rev() {
                            stack.push((dir_id, depth + 1));
                        }
                    }
                }
            }
        }

        result
    }
}

pub fn should_ignore(name: &str) -> bool {
    matches!(
        name,
        ".DS_Store"
            | ".Spotlight-V100"
            | ".Trashes"
            | ".fseventsd"
            | ".TemporaryItems"
            | "Thumbs.db"
            | "desktop.ini"
            | ".git"
            | "node_modules"
    )
}
