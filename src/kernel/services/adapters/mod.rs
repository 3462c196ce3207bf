//! Service adapters: local-disk async runtime + settings file.

pub mod runtime;
pub mod settings;

use std::path::PathBuf;

pub use runtime::{AsyncRuntime, SessionMessage};

const LOG_DIR: &str = "logs";

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = settings::get_cache_dir()
        .ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "Cannot determine cache directory")
        })?
        .join(".zdesk")
        .join(LOG_DIR);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
