//! Static asset handling.
//!
//! Files under the static directory (stylesheets, showcase icons) are copied
//! verbatim into the output directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};

/// Asset errors.
#[derive(Debug, Error)]
pub enum AssetError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A file was found outside the static directory.
    #[error("invalid asset path: {0}")]
    InvalidPath(PathBuf),
}

/// Result type for asset operations.
pub type Result<T> = std::result::Result<T, AssetError>;

/// A directory of static files.
#[derive(Debug, Clone)]
pub struct StaticAssets {
    root: PathBuf,
}

impl StaticAssets {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The static directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether `relative` (a URL-style path such as `img/showcase/a.png`)
    /// names an existing file.
    #[must_use]
    pub fn contains(&self, relative: &str) -> bool {
        self.root.join(relative.trim_start_matches('/')).is_file()
    }

    /// Copy every non-hidden file into `dest`, keeping relative paths.
    ///
    /// Returns the copied paths relative to `dest`, sorted. A missing static
    /// directory copies nothing.
    pub fn copy_to(&self, dest: &Path) -> Result<Vec<PathBuf>> {
        let mut copied = Vec::new();

        if !self.root.is_dir() {
            debug!(dir = %self.root.display(), "static directory does not exist, skipping");
            return Ok(copied);
        }

        info!(
            source = %self.root.display(),
            dest = %dest.display(),
            "copying static assets"
        );

        self.copy_dir(&self.root, dest, &mut copied)?;
        copied.sort();

        info!(count = copied.len(), "static assets copied");
        Ok(copied)
    }

    fn copy_dir(&self, dir: &Path, dest: &Path, copied: &mut Vec<PathBuf>) -> Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();

            if path
                .file_name()
                .is_some_and(|n| n.to_string_lossy().starts_with('.'))
            {
                continue;
            }

            if path.is_dir() {
                self.copy_dir(&path, dest, copied)?;
                continue;
            }

            let relative = path
                .strip_prefix(&self.root)
                .map_err(|_| AssetError::InvalidPath(path.clone()))?
                .to_path_buf();
            let target = dest.join(&relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(&path, &target)?;

            debug!(asset = %relative.display(), "copied");
            copied.push(relative);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn static_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("css")).unwrap();
        fs::create_dir_all(dir.path().join("img/showcase")).unwrap();
        fs::write(dir.path().join("css/main.css"), "body {}").unwrap();
        fs::write(dir.path().join("img/showcase/a.png"), [0u8; 4]).unwrap();
        fs::write(dir.path().join(".DS_Store"), "junk").unwrap();
        dir
    }

    #[test]
    fn test_copy_to() {
        let source = static_tree();
        let dest = TempDir::new().unwrap();

        let copied = StaticAssets::new(source.path()).copy_to(dest.path()).unwrap();

        assert_eq!(
            copied,
            vec![
                PathBuf::from("css/main.css"),
                PathBuf::from("img/showcase/a.png"),
            ]
        );
        assert!(dest.path().join("img/showcase/a.png").exists());
        assert!(!dest.path().join(".DS_Store").exists());
    }

    #[test]
    fn test_missing_static_dir() {
        let dest = TempDir::new().unwrap();
        let copied = StaticAssets::new("/nonexistent/static")
            .copy_to(dest.path())
            .unwrap();
        assert!(copied.is_empty());
    }

    #[test]
    fn test_contains() {
        let source = static_tree();
        let assets = StaticAssets::new(source.path());

        assert!(assets.contains("img/showcase/a.png"));
        assert!(assets.contains("/css/main.css"));
        assert!(!assets.contains("img/showcase/b.png"));
        assert!(!assets.contains("img/showcase"));
    }
}
