//! Filesystem watching for the requirement folder and the settings file.
//!
//! The watcher runs on notify's background thread and only posts
//! [`ControlEvent`]s; the manager does the reloading when it pumps.

use notify::event::ModifyKind;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::ControlPaths;
use crate::control::{ControlEvent, EventSender};
use crate::error::Result;

/// A running watch on the requirement folder and the settings file.
/// Dropping it stops the watch.
pub struct FileWatch {
    _watcher: RecommendedWatcher,
    folder: PathBuf,
}

impl FileWatch {
    /// Watch `paths.folder` recursively and the settings file in
    /// `paths.root`, posting events to `sender`.
    ///
    /// # Errors
    ///
    /// Returns `Watch` if the platform watcher cannot be created or a
    /// directory cannot be watched, and `Io` if the folder does not exist.
    pub fn start(paths: &ControlPaths, sender: EventSender) -> Result<Self> {
        let folder = paths.folder.canonicalize()?;
        let root = paths.root.canonicalize()?;
        let classify_paths = ControlPaths::new(&root);

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            match res {
                Ok(event) => {
                    for control_event in classify(&classify_paths, &event) {
                        sender.send(control_event);
                    }
                }
                Err(e) => warn!("File watch error: {}", e),
            }
        })?;
        watcher.watch(&folder, RecursiveMode::Recursive)?;
        watcher.watch(&root, RecursiveMode::NonRecursive)?;

        debug!("Watching {} and {}", folder.display(), root.display());
        Ok(Self {
            _watcher: watcher,
            folder,
        })
    }

    /// The watched folder, canonicalized.
    pub fn folder(&self) -> &Path {
        &self.folder
    }
}

/// Map a raw filesystem event to the reload events it implies.
///
/// Access and metadata-only events are ignored, as are paths that are
/// not a document, the display name file or the settings file.
pub fn classify(paths: &ControlPaths, event: &Event) -> Vec<ControlEvent> {
    match event.kind {
        EventKind::Create(_) | EventKind::Remove(_) | EventKind::Any => {}
        EventKind::Modify(ModifyKind::Metadata(_)) => return Vec::new(),
        EventKind::Modify(_) => {}
        EventKind::Access(_) | EventKind::Other => return Vec::new(),
    }

    let mut events = Vec::new();
    for path in &event.paths {
        let control_event = if paths.is_settings(path) {
            ControlEvent::SettingsChanged
        } else if paths.is_display_names(path) {
            ControlEvent::DisplayNamesChanged
        } else if paths.is_document(path) {
            ControlEvent::DocumentsChanged
        } else {
            continue;
        };
        if !events.contains(&control_event) {
            events.push(control_event);
        }
    }
    events
}
