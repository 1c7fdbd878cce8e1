/// Shared utility helpers.
pub mod fs {
    use std::fs;

    use anyhow::{Context, Result};
    use camino::Utf8Path;

    /// Ensure a directory exists, creating it recursively if needed.
    pub fn ensure_dir(path: &Utf8Path) -> Result<()> {
        if !path.is_dir() {
            fs::create_dir_all(path).with_context(|| format!("creating directory {}", path))?;
        }
        Ok(())
    }
}
