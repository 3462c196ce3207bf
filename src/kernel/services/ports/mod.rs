//! Service ports: traits + data contracts.

pub mod config;
pub mod editor;
pub mod fs;
pub mod settings;

pub use config::SessionConfig;
pub use editor::{EditorWidget, EditorWidgetFactory};
pub use fs::{DirEntryInfo, DirectoryPicker};
pub use settings::Settings;
