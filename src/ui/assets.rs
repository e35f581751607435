//! Filesystem asset source for the piece SVGs.

use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use gpui::{AssetSource, SharedString};

/// Looks for assets next to the executable, then in the working directory.
pub struct FileAssets {
    roots: Vec<PathBuf>,
}

impl FileAssets {
    pub fn new() -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()));
        let cwd = std::env::current_dir().ok();
        Self::with_roots(exe_dir.into_iter().chain(cwd).collect())
    }

    pub fn with_roots(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }
}

impl Default for FileAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetSource for FileAssets {
    fn load(&self, path: &str) -> gpui::Result<Option<Cow<'static, [u8]>>> {
        for root in &self.roots {
            if let Ok(data) = fs::read(root.join(path)) {
                return Ok(Some(Cow::Owned(data)));
            }
        }
        tracing::warn!("[ASSETS] {} not found", path);
        Ok(None)
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        let mut results = Vec::new();
        for root in &self.roots {
            let Ok(entries) = fs::read_dir(root.join(path)) else {
                continue;
            };
            for entry in entries.flatten() {
                if let Some(name) = entry.file_name().to_str() {
                    let name = SharedString::from(name.to_string());
                    if !results.contains(&name) {
                        results.push(name);
                    }
                }
            }
        }
        Ok(results)
    }
}
