pub mod dir_tree;

pub use dir_tree::{
    should_ignore, DirTree, DirTreeError, DirTreeRow, LoadState, NodeId, NodeKind,
};
