//! Puzzle File Watching
//!
//! Translates filesystem changes to the puzzle file into structure-replaced
//! events for live mode. This is environment plumbing: the session never
//! touches the filesystem and only sees explicit events.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use anyhow::Result;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Events delivered to the live-mode loop
#[derive(Debug)]
pub enum WatchEvent {
    /// The watched puzzle file was created, modified, or removed
    StructureChanged(PathBuf),
    /// The underlying watcher failed
    WatcherError(notify::Error),
}

/// Watches a single puzzle file and forwards change events over a channel
pub struct PuzzleWatcher {
    rx: Receiver<WatchEvent>,
    // Keeps the notify backend alive for the watcher's lifetime
    _watcher: RecommendedWatcher,
}

impl PuzzleWatcher {
    pub fn new(path: &Path) -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let file_name = path.file_name().map(|name| name.to_os_string());

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| match res {
                Ok(event) => {
                    if let EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) =
                        event.kind
                    {
                        for event_path in event.paths {
                            if event_path.file_name().map(|n| n.to_os_string()) == file_name {
                                let _ = tx.send(WatchEvent::StructureChanged(event_path));
                            }
                        }
                    }
                }
                Err(e) => {
                    let _ = tx.send(WatchEvent::WatcherError(e));
                }
            },
            Config::default().with_poll_interval(Duration::from_secs(1)),
        )?;

        // Watch the containing directory: editors often replace the file
        // instead of writing it in place.
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        log::debug!("Watching {} for puzzle changes", dir.display());

        Ok(Self {
            rx,
            _watcher: watcher,
        })
    }

    /// Block until the next event; `None` once the watcher has shut down
    pub fn recv(&self) -> Option<WatchEvent> {
        self.rx.recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watcher_starts_on_existing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("puzzle.toml");
        std::fs::write(&path, "").expect("write");

        let watcher = PuzzleWatcher::new(&path);
        assert!(watcher.is_ok());
    }
}
