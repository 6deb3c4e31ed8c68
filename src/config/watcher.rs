//! Configuration file watcher for hot reload.
//!
//! The parent directory is watched rather than the file itself: editors
//! that save by rename replace the inode, which ends a watch on the file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::AtlasConfig;

/// A watcher that monitors the configuration file for changes.
///
/// Only configurations that load, validate and differ from the last one
/// forwarded are sent; a broken edit leaves the running route table in place.
pub struct ConfigWatcher {
    reloader: Reloader,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for configuration updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<AtlasConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let reloader = Reloader {
            path: path.to_path_buf(),
            update_tx,
            last: None,
        };
        (Self { reloader }, update_rx)
    }

    /// Seed with the configuration already being served, so saving the file
    /// without changes does not trigger a recompile.
    pub fn with_current(mut self, config: AtlasConfig) -> Self {
        self.reloader.last = Some(config);
        self
    }

    /// Start watching. The returned handle must be kept alive.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let dir = self
            .reloader
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        let path = self.reloader.path.clone();

        let mut reloader = self.reloader;
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| reloader.handle(res),
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?path, "Config watcher started");
        Ok(watcher)
    }
}

struct Reloader {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<AtlasConfig>,
    last: Option<AtlasConfig>,
}

impl Reloader {
    fn handle(&mut self, res: notify::Result<Event>) {
        let event = match res {
            Ok(event) => event,
            Err(e) => {
                tracing::error!(error = ?e, "Watch error");
                return;
            }
        };

        if !(event.kind.is_modify() || event.kind.is_create()) {
            return;
        }
        let target = self.path.file_name();
        if !event.paths.iter().any(|p| p.file_name() == target) {
            return;
        }

        match load_config(&self.path) {
            Ok(config) if self.last.as_ref() == Some(&config) => {
                tracing::debug!(path = ?self.path, "Config unchanged, skipping reload");
            }
            Ok(config) => {
                tracing::info!(
                    path = ?self.path,
                    modules = config.modules.len(),
                    "Config file change detected, reloading"
                );
                self.last = Some(config.clone());
                if self.update_tx.send(config).is_err() {
                    tracing::debug!("Config receiver dropped");
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to reload config, keeping current routes");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, EventKind, ModifyKind};
    use std::fs;

    const ONE_MODULE: &str = r#"
        [[modules]]
        module_id = 1
        name = "Settings"
    "#;

    fn reloader(path: &Path) -> (Reloader, mpsc::UnboundedReceiver<AtlasConfig>) {
        let (watcher, rx) = ConfigWatcher::new(path);
        (watcher.reloader, rx)
    }

    fn modified(path: &Path) -> notify::Result<Event> {
        Ok(Event::new(EventKind::Modify(ModifyKind::Any)).add_path(path.to_path_buf()))
    }

    #[test]
    fn test_forwards_changed_config_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("route-atlas.toml");
        fs::write(&path, ONE_MODULE).unwrap();
        let (mut reloader, mut rx) = reloader(&path);

        reloader.handle(modified(&path));
        assert_eq!(rx.try_recv().unwrap().modules[0].name, "Settings");

        reloader.handle(modified(&path));
        assert!(rx.try_recv().is_err());

        fs::write(&path, "").unwrap();
        reloader.handle(Ok(
            Event::new(EventKind::Create(CreateKind::File)).add_path(path.clone())
        ));
        assert!(rx.try_recv().unwrap().modules.is_empty());
    }

    #[test]
    fn test_ignores_other_files_and_invalid_configs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("route-atlas.toml");
        fs::write(&path, ONE_MODULE).unwrap();
        let (mut reloader, mut rx) = reloader(&path);

        reloader.handle(modified(&dir.path().join("other.toml")));
        assert!(rx.try_recv().is_err());

        fs::write(&path, "[[modules]]\nname = 3").unwrap();
        reloader.handle(modified(&path));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_seeded_config_is_not_resent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("route-atlas.toml");
        fs::write(&path, ONE_MODULE).unwrap();
        let current = load_config(&path).unwrap();

        let (watcher, mut rx) = ConfigWatcher::new(&path);
        let mut reloader = watcher.with_current(current).reloader;

        reloader.handle(modified(&path));
        assert!(rx.try_recv().is_err());
    }
}
