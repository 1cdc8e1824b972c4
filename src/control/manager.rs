//! The item control manager.
//!
//! A process runs the manager in one of two roles:
//!
//! - **Host** reads requirement documents from disk, validates them against
//!   its catalog, fills the store and publishes the accepted raw documents
//!   on the sync channel.
//! - **Peer** ignores its own disk documents, decodes the host snapshot and
//!   validates it against its own catalog.
//!
//! Both roles load skill display names and settings from disk. All store
//! and settings writes happen on the thread that calls
//! [`ItemControlManager::pump`]; watchers and the channel only post events.

use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::events::{EventQueue, EventSender, PendingEvents};
use crate::attributes::AttributeSystems;
use crate::catalog::{Catalog, RecipeBook, SharedRecipeBook};
use crate::config::{ControlPaths, Settings, SettingsHandle};
use crate::error::Result;
use crate::gate::ItemGate;
use crate::query::RequirementQuery;
use crate::requirements::{
    document_paths, example_documents, load_document, write_document, RequirementDocument,
    RequirementKind, RequirementStore, SkillDisplayNames, Validation, Validator,
};
use crate::sync::{snapshot, SyncChannel};

/// Which side of the host/peer split this process is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Authoritative: loads from disk and publishes.
    Host,
    /// Follows the host snapshot.
    Peer,
}

/// A document that did not make it into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedDocument {
    /// File path, or prefab name for snapshot entries
    pub source: String,
    /// Why it was rejected
    pub reason: String,
}

/// A skill entry dropped from an accepted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedEntry {
    pub prefab: String,
    pub kind: RequirementKind,
    pub skill: String,
}

/// Outcome of one load pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Role that produced the report
    pub role: Role,
    /// Prefabs now in the store, in load order
    pub loaded: Vec<String>,
    /// Documents that were rejected
    pub rejected: Vec<RejectedDocument>,
    /// Skill entries dropped under the lenient policy
    pub unresolved: Vec<UnresolvedEntry>,
    /// Example files written to an empty folder
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples_written: Vec<PathBuf>,
    /// True when a peer left the store untouched
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub skipped: bool,
}

impl LoadReport {
    fn new(role: Role) -> Self {
        Self {
            role,
            loaded: Vec::new(),
            rejected: Vec::new(),
            unresolved: Vec::new(),
            examples_written: Vec::new(),
            skipped: false,
        }
    }

    fn skipped(role: Role) -> Self {
        Self {
            skipped: true,
            ..Self::new(role)
        }
    }

    fn reject(&mut self, source: impl Into<String>, reason: impl ToString) {
        self.rejected.push(RejectedDocument {
            source: source.into(),
            reason: reason.to_string(),
        });
    }

    fn accept(&mut self, validation: &Validation) {
        let prefab = validation.item.prefab().to_string();
        for skill in &validation.unresolved {
            warn!(
                "Skill '{}' in {} requirements of {} not found, ignoring",
                skill.name, skill.kind, prefab
            );
            self.unresolved.push(UnresolvedEntry {
                prefab: prefab.clone(),
                kind: skill.kind,
                skill: skill.name.clone(),
            });
        }
        self.loaded.push(prefab);
    }
}

/// Owns the requirement store and keeps it current for its role.
pub struct ItemControlManager {
    role: Role,
    paths: ControlPaths,
    settings: SettingsHandle,
    recipe_book: Option<SharedRecipeBook>,
    write_examples: bool,
    catalog: Arc<dyn Catalog>,
    channel: Arc<dyn SyncChannel>,
    store: RequirementStore,
    display_names: SkillDisplayNames,
    events: EventQueue,
    subscribed: bool,
    applied_digest: Option<String>,
}

impl ItemControlManager {
    /// Create a manager with default settings. Nothing is loaded until
    /// [`init`](Self::init).
    pub fn new(
        role: Role,
        paths: ControlPaths,
        catalog: Arc<dyn Catalog>,
        channel: Arc<dyn SyncChannel>,
    ) -> Self {
        Self {
            role,
            paths,
            settings: SettingsHandle::default(),
            recipe_book: None,
            write_examples: true,
            catalog,
            channel,
            store: RequirementStore::new(),
            display_names: SkillDisplayNames::new(),
            events: EventQueue::new(),
            subscribed: false,
            applied_digest: None,
        }
    }

    /// Use `settings` instead of the defaults.
    pub fn with_settings(self, settings: Settings) -> Self {
        self.settings.store(settings);
        self
    }

    /// Learn recipes into `book` when settings change on disk.
    pub fn with_recipe_book(mut self, book: SharedRecipeBook) -> Self {
        self.recipe_book = Some(book);
        self
    }

    /// Leave an empty folder empty instead of writing the examples.
    pub fn without_examples(mut self) -> Self {
        self.write_examples = false;
        self
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn paths(&self) -> &ControlPaths {
        &self.paths
    }

    /// The current settings.
    pub fn settings(&self) -> Arc<Settings> {
        self.settings.load()
    }

    /// Shared handle to the settings, updated when the file changes.
    pub fn settings_handle(&self) -> SettingsHandle {
        self.settings.clone()
    }

    /// Shared handle to the store.
    pub fn store(&self) -> &RequirementStore {
        &self.store
    }

    /// Shared handle to the display name mapping.
    pub fn display_names(&self) -> &SkillDisplayNames {
        &self.display_names
    }

    /// Producer handle for file watchers.
    pub fn event_sender(&self) -> EventSender {
        self.events.sender()
    }

    /// A query over this manager's store and display names.
    pub fn query(&self, attributes: AttributeSystems) -> RequirementQuery {
        RequirementQuery::new(
            self.store.clone(),
            self.display_names.clone(),
            attributes,
        )
    }

    /// A gate over this manager's query that follows the live settings.
    pub fn gate(&self, attributes: AttributeSystems) -> ItemGate {
        ItemGate::new(self.query(attributes), self.settings.clone())
    }

    /// Prepare the folder, load display names and run the initial load for
    /// this role. A peer also subscribes to snapshot changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the folder cannot be created or listed. A peer
    /// also fails if the current snapshot does not decode.
    pub fn init(&mut self) -> Result<LoadReport> {
        self.paths.ensure_folder()?;
        self.reload_display_names();

        if self.role == Role::Peer && !self.subscribed {
            self.channel.subscribe(self.events.sender());
            self.subscribed = true;
        }

        self.reload()
    }

    /// Run the full load for this role.
    pub fn reload(&mut self) -> Result<LoadReport> {
        match self.role {
            Role::Host => self.load_local(),
            Role::Peer => self.apply_snapshot(true),
        }
    }

    /// Load, validate and publish every document in the folder.
    ///
    /// A folder without any `*.yml` file, the display name file included,
    /// gets the example documents written to it first unless
    /// [`without_examples`](Self::without_examples) was set.
    /// Documents that fail to parse or validate are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error only if the folder cannot be listed, an example
    /// cannot be written, or the snapshot cannot be encoded.
    pub fn load_local(&mut self) -> Result<LoadReport> {
        let validator =
            Validator::new(self.catalog.as_ref()).with_policy(self.settings.load().validation);
        let mut report = LoadReport::new(Role::Host);
        let mut items = Vec::new();
        let mut published: Vec<RequirementDocument> = Vec::new();

        let files = document_paths(&self.paths)?;
        if self.write_examples && files.is_empty() && !self.paths.display_names.exists() {
            debug!("No requirement documents found, writing examples");
            for example in example_documents() {
                match validator.validate(&example) {
                    Ok(validation) => {
                        let path = write_document(&self.paths, &example)?;
                        report.examples_written.push(path);
                        report.accept(&validation);
                        items.push(validation.item);
                        published.push(example);
                    }
                    Err(e) => {
                        warn!("Skipping example {}: {}", example.prefab_name, e);
                        report.reject(example.prefab_name.clone(), e);
                    }
                }
            }
        }

        for path in files {
            let source = path.display().to_string();
            let document = match load_document(&path) {
                Ok(document) => document,
                Err(e) => {
                    warn!("Failed to load {}: {}", source, e);
                    report.reject(source, e);
                    continue;
                }
            };

            match validator.validate(&document) {
                Ok(validation) => {
                    report.accept(&validation);
                    items.push(validation.item);
                    published.push(document);
                }
                Err(e) => {
                    warn!("Rejected {}: {}", source, e);
                    report.reject(source, e);
                }
            }
        }

        self.store.replace_all(items);
        let encoded = snapshot::encode(&published)?;
        self.channel.publish(encoded);

        info!(
            "Loaded {} item requirements ({} rejected)",
            report.loaded.len(),
            report.rejected.len()
        );
        Ok(report)
    }

    /// Replace the store with the validated contents of the host snapshot.
    ///
    /// An empty channel leaves the store untouched. Unless `force` is set,
    /// a snapshot identical to the last one applied is skipped.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotDecode` if the value is malformed; the store keeps
    /// its previous contents.
    pub fn apply_snapshot(&mut self, force: bool) -> Result<LoadReport> {
        let value = self.channel.value();
        if value.trim().is_empty() {
            debug!("No snapshot published on '{}' yet", self.channel.name());
            return Ok(LoadReport::skipped(Role::Peer));
        }

        let digest = snapshot::digest(&value);
        if !force && self.applied_digest.as_deref() == Some(digest.as_str()) {
            debug!("Snapshot {} already applied", digest);
            return Ok(LoadReport::skipped(Role::Peer));
        }

        let documents = snapshot::decode(&value)?;
        let validator =
            Validator::new(self.catalog.as_ref()).with_policy(self.settings.load().validation);
        let mut report = LoadReport::new(Role::Peer);
        let mut items = Vec::new();

        for document in &documents {
            match validator.validate(document) {
                Ok(validation) => {
                    report.accept(&validation);
                    items.push(validation.item);
                }
                Err(e) => {
                    warn!("Rejected synced requirements for {}: {}", document.prefab_name, e);
                    report.reject(document.prefab_name.clone(), e);
                }
            }
        }

        self.store.replace_all(items);
        self.applied_digest = Some(digest);

        info!(
            "Applied {} of {} synced item requirements",
            report.loaded.len(),
            documents.len()
        );
        Ok(report)
    }

    /// Reload the display name mapping, keeping the old one on failure.
    pub fn reload_display_names(&self) -> bool {
        match self.display_names.load(&self.paths.display_names) {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!("Failed to load skill display names: {}", e);
                false
            }
        }
    }

    /// Process every queued event without blocking.
    pub fn pump(&mut self) -> PendingEvents {
        let pending = self.events.drain();
        self.handle(pending);
        pending
    }

    /// Wait up to `timeout` for an event, then process everything queued.
    pub fn pump_blocking(&mut self, timeout: Duration) -> PendingEvents {
        let pending = self.events.wait(timeout);
        self.handle(pending);
        pending
    }

    fn handle(&mut self, pending: PendingEvents) {
        if pending.settings {
            debug!("Settings changed");
            self.reload_settings();
        }

        if pending.display_names {
            debug!("Skill display names changed");
            self.reload_display_names();
        }

        if pending.documents {
            debug!("Requirement documents changed");
            if let Err(e) = self.reload() {
                warn!("Reload failed: {}", e);
            }
        } else if pending.snapshot && self.role == Role::Peer {
            if let Err(e) = self.apply_snapshot(false) {
                warn!("Failed to apply synced requirements: {}", e);
            }
        }
    }

    /// Teach `book` the recipe of every controlled item that has one.
    /// Returns how many recipes were learned.
    pub fn learn_unknown_recipes(&self, book: &mut dyn RecipeBook) -> usize {
        let mut learned = 0;
        for item in self.store.snapshot().items() {
            let prefab = item.prefab();
            if self.catalog.has_recipe(prefab) && !book.knows_recipe(prefab) {
                book.learn_recipe(prefab);
                learned += 1;
            }
        }
        if learned > 0 {
            info!("Learned {} controlled recipes", learned);
        }
        learned
    }

    /// Apply new settings. Turning recipe learning on teaches `book`
    /// immediately; a policy change triggers a reload.
    pub fn on_settings_changed(&mut self, settings: Settings, book: &mut dyn RecipeBook) -> usize {
        self.apply_settings(settings);
        if self.settings.load().learn_items {
            self.learn_unknown_recipes(book)
        } else {
            0
        }
    }

    /// Re-read the settings file and apply it, learning into the attached
    /// recipe book if there is one. Returns how many recipes were learned.
    /// A file that fails to parse keeps the current settings.
    pub fn reload_settings(&mut self) -> usize {
        let settings = match Settings::load(&self.paths.settings) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings: {}", e);
                return 0;
            }
        };

        match self.recipe_book.clone() {
            Some(book) => self.on_settings_changed(settings, &mut *book.lock()),
            None => {
                self.apply_settings(settings);
                0
            }
        }
    }

    fn apply_settings(&mut self, settings: Settings) {
        let policy = settings.validation;
        let policy_changed = policy != self.settings.load().validation;
        self.settings.store(settings);

        if policy_changed {
            debug!("Validation policy changed to {:?}", policy);
            if let Err(e) = self.reload() {
                warn!("Reload failed: {}", e);
            }
        }
    }
}
