//! Hot reload of the logger config file.
//!
//! # Data Flow
//! ```text
//! notify event on the config's directory
//!     → filtered to the config file name
//!     → burst collapsed (RELOAD_DEBOUNCE of quiet)
//!     → ReloadState::poll (read once, skip empty/unchanged, parse + validate)
//!     → LoggerConfig sent to the owner, who calls Logger::apply_config
//! ```
//!
//! # Design Decisions
//! - The directory is watched, not the file, so editors that save by renaming a
//!   temp file over the config keep being followed
//! - A save truncates before writing; an empty read is treated as "mid-write", never
//!   as an all-defaults config. Resetting to defaults needs an explicit document
//! - Anything that fails to load leaves the logger on its current settings

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::parse_config;
use crate::config::schema::LoggerConfig;

/// Quiet period that ends a burst of file events.
pub const RELOAD_DEBOUNCE: Duration = Duration::from_millis(100);

/// Environment lookup used when parsing a reloaded document.
pub type EnvLookup = fn(&str) -> Option<String>;

fn process_env(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

/// Decides whether the file's current content is a new config worth publishing.
pub struct ReloadState {
    path: PathBuf,
    last_content: Option<String>,
    env: EnvLookup,
}

impl ReloadState {
    /// State for `path`, seeded with the file's current content so that a touch
    /// without changes publishes nothing.
    pub fn new(path: &Path, env: EnvLookup) -> Self {
        Self {
            path: path.to_path_buf(),
            last_content: fs::read_to_string(path).ok(),
            env,
        }
    }

    /// Read the file once and return a config only if it is non-empty, changed
    /// since the last published version, and valid.
    pub fn poll(&mut self) -> Option<LoggerConfig> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(
                    path = ?self.path,
                    error = %e,
                    "Logger config unreadable, waiting"
                );
                return None;
            }
        };

        if content.trim().is_empty() {
            tracing::debug!(
                path = ?self.path,
                "Logger config empty, assuming save in progress"
            );
            return None;
        }
        if self.last_content.as_deref() == Some(content.as_str()) {
            return None;
        }

        match parse_config(&content, self.env) {
            Ok(config) => {
                tracing::info!(
                    path = ?self.path,
                    level = %config.level,
                    "Logger config reloaded"
                );
                self.last_content = Some(content);
                Some(config)
            }
            Err(e) => {
                tracing::error!(
                    path = ?self.path,
                    error = %e,
                    "Logger config rejected, settings unchanged"
                );
                None
            }
        }
    }
}

/// Watches the logger config file and publishes each valid new version.
pub struct ConfigWatcher {
    path: PathBuf,
    env: EnvLookup,
    update_tx: mpsc::UnboundedSender<LoggerConfig>,
}

impl ConfigWatcher {
    /// Returns the watcher and the receiver that reloaded configs arrive on.
    /// Reloads honor the `LEVELED_LOG_*` environment overrides.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<LoggerConfig>) {
        Self::with_env(path, process_env)
    }

    /// Like [`ConfigWatcher::new`] with an explicit environment lookup.
    pub fn with_env(
        path: &Path,
        env: EnvLookup,
    ) -> (Self, mpsc::UnboundedReceiver<LoggerConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        (
            Self {
                path: path.to_path_buf(),
                env,
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching. Must be called inside a Tokio runtime; reloading stops when
    /// the returned handle is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|e| {
            notify::Error::generic(&format!("config watcher needs a Tokio runtime: {}", e))
        })?;

        let file_name: OsString = self
            .path
            .file_name()
            .ok_or_else(|| notify::Error::generic("config path has no file name"))?
            .to_os_string();
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let (event_tx, event_rx) = mpsc::unbounded_channel::<()>();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    let touches_config = (event.kind.is_modify() || event.kind.is_create())
                        && event
                            .paths
                            .iter()
                            .any(|p| p.file_name() == Some(file_name.as_os_str()));
                    if touches_config {
                        let _ = event_tx.send(());
                    }
                }
                Err(e) => tracing::warn!(error = %e, "Logger config watch error"),
            },
            Config::default(),
        )?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        let state = ReloadState::new(&self.path, self.env);
        runtime.spawn(debounce_reloads(state, event_rx, self.update_tx));

        tracing::info!(path = ?self.path, "Logger config watcher started");
        Ok(watcher)
    }
}

/// Collapse each burst of events into a single poll of the file.
async fn debounce_reloads(
    mut state: ReloadState,
    mut events: mpsc::UnboundedReceiver<()>,
    updates: mpsc::UnboundedSender<LoggerConfig>,
) {
    while events.recv().await.is_some() {
        loop {
            match tokio::time::timeout(RELOAD_DEBOUNCE, events.recv()).await {
                Ok(Some(())) => continue,
                Ok(None) => return,
                Err(_) => break,
            }
        }

        if let Some(config) = state.poll() {
            if updates.send(config).is_err() {
                return;
            }
        }
    }
}
