use crate::error::Result;
use crate::io::IoCommand;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

/// Reloads the catalog whenever its file is written or replaced.
#[derive(Default)]
pub struct CatalogWatcher {
    watcher: Option<RecommendedWatcher>,
    watched: Option<PathBuf>,
}

impl CatalogWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn watch(&mut self, catalog: &Path, commands: Sender<IoCommand>) -> Result<()> {
        self.stop();

        // Editors often replace the file, so watch the directory and filter by name.
        let dir = catalog
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        let target = catalog.to_path_buf();
        let file_name = catalog.file_name().map(|n| n.to_os_string());

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let Ok(event) = res else {
                return;
            };
            if !is_content_change(&event.kind) {
                return;
            }
            let touches_catalog = event
                .paths
                .iter()
                .any(|p| p.file_name().map(|n| n.to_os_string()) == file_name);
            if touches_catalog {
                tracing::debug!(path = %target.display(), "catalog changed on disk");
                let _ = commands.send(IoCommand::LoadCatalog(target.clone()));
            }
        })?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        tracing::info!(dir = %dir.display(), "watching catalog directory");
        self.watcher = Some(watcher);
        self.watched = Some(dir);
        Ok(())
    }

    /// Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let (Some(mut watcher), Some(dir)) = (self.watcher.take(), self.watched.take()) {
            let _ = watcher.unwatch(&dir);
        }
    }

    pub fn is_active(&self) -> bool {
        self.watcher.is_some()
    }
}

impl Drop for CatalogWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Removal alone is ignored: editors remove then rename on save, and the
/// Create/Modify that follows triggers the reload.
fn is_content_change(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}
