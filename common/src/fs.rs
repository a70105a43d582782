use std::path::{Path, PathBuf};

use anyhow::Result;

pub trait FsExt {
    // Converts the provided relative path to be based from the currently
    // working directory. Absolute paths are returned unchanged.
    fn relative_to_cwd(&self) -> Result<PathBuf>
    where
        Self: AsRef<Path>,
    {
        let path = self.as_ref();
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }

        let cwd = std::env::current_dir()?;

        Ok(cwd.join(path))
    }
}

impl FsExt for String {}

impl FsExt for &str {}
