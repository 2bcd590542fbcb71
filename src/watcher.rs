use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use anyhow::{Context, Result};

use crate::config::WatchConfig;
use crate::events::{AppEvent, InputEvent, InputSide};

/// Watches the before/after input files and reports content changes
pub struct InputWatcher {
    _watcher: RecommendedWatcher,
    event_rx: Receiver<AppEvent>,
}

impl InputWatcher {
    pub fn new<P: AsRef<Path>>(before: P, after: P, config: &WatchConfig) -> Result<Self> {
        let targets = [
            (canonical(before.as_ref())?, InputSide::Before),
            (canonical(after.as_ref())?, InputSide::After),
        ];

        let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
        let (event_tx, event_rx) = mpsc::channel::<AppEvent>();

        let mut watcher = notify::recommended_watcher(tx)
            .context("Failed to create file system watcher")?;

        // Watch parent directories so editors that replace files on save are seen
        let mut watched_dirs: Vec<PathBuf> = Vec::new();
        for (path, _) in &targets {
            let dir = path
                .parent()
                .with_context(|| format!("Input has no parent directory: {}", path.display()))?
                .to_path_buf();
            if !watched_dirs.contains(&dir) {
                watcher
                    .watch(&dir, RecursiveMode::NonRecursive)
                    .with_context(|| format!("Failed to start watching {}", dir.display()))?;
                watched_dirs.push(dir);
            }
        }

        let debounce = config.debounce_duration();

        // Trailing-edge debounce: a path is re-read only once its events have
        // been quiet for `debounce`, so the last save in a burst always wins.
        thread::spawn(move || {
            let mut pending = HashMap::<PathBuf, InputSide>::new();

            loop {
                match rx.recv_timeout(debounce) {
                    Ok(Ok(event)) => {
                        if !matches!(
                            event.kind,
                            notify::EventKind::Create(_)
                                | notify::EventKind::Modify(_)
                                | notify::EventKind::Remove(_)
                        ) {
                            continue;
                        }
                        for path in event.paths {
                            if let Some(side) = side_for(&targets, &path) {
                                pending.insert(path, side);
                            }
                        }
                    }
                    Ok(Err(err)) => {
                        tracing::error!("File watcher error: {}", err);
                    }
                    Err(RecvTimeoutError::Timeout) => {
                        for (path, side) in pending.drain() {
                            let Some(app_event) = read_input_event(path, side) else {
                                continue;
                            };
                            if event_tx.send(app_event).is_err() {
                                return; // Receiver dropped, exit thread
                            }
                        }
                    }
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Ok(Self {
            _watcher: watcher,
            event_rx,
        })
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.event_rx.recv_timeout(timeout)
    }
}

/// Current state of an input after its events settled
fn read_input_event(path: PathBuf, side: InputSide) -> Option<AppEvent> {
    if !path.exists() {
        return Some(AppEvent::InputRemoved(side));
    }
    match std::fs::read_to_string(&path) {
        Ok(content) => Some(AppEvent::InputChanged(InputEvent::new(path, side, content))),
        Err(err) => {
            tracing::debug!("Skipping unreadable input {}: {}", path.display(), err);
            None
        }
    }
}

fn canonical(path: &Path) -> Result<PathBuf> {
    path.canonicalize()
        .with_context(|| format!("Input file does not exist: {}", path.display()))
}

fn side_for(targets: &[(PathBuf, InputSide)], path: &Path) -> Option<InputSide> {
    // Events may carry non-canonical paths, e.g. through symlinked temp dirs
    let resolved = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    targets
        .iter()
        .find(|(target, _)| *target == resolved || target.as_path() == path)
        .map(|(_, side)| *side)
}
