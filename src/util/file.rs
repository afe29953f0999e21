use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

/// Creates `path` and its parents, an existing directory is fine.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_file() {
        return Err(anyhow!("{} exists and is not a directory", path.display()));
    }
    std::fs::create_dir_all(path)?;
    Ok(())
}

pub trait PathExt {
    fn ensure_dir(&self) -> Result<()>;
}

impl PathExt for Path {
    fn ensure_dir(&self) -> Result<()> {
        ensure_dir(self)
    }
}

impl PathExt for PathBuf {
    fn ensure_dir(&self) -> Result<()> {
        ensure_dir(self)
    }
}
