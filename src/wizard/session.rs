use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use crate::{
    config::Config,
    domain::{AssetRegistry, FieldUpdate, FileAsset, FormRecord},
    errors::Result,
    prompt,
    storage::FormStore,
};

use super::{
    generation::{CopiedIndicator, GenerationStatus, PromptGeneration},
    navigation::{NavigationController, WizardStep},
    steps,
};

/// Owns everything a wizard run mutates: the record, the step position, the
/// store mirroring the record, and the handles of files picked this session.
pub struct WizardSession {
    record: FormRecord,
    navigation: NavigationController,
    store: FormStore,
    assets: AssetRegistry,
    revision: u64,
    generation: PromptGeneration,
    copied: CopiedIndicator,
}

impl WizardSession {
    /// Starts a session from whatever the store holds.
    pub fn open(store: FormStore, config: &Config) -> Self {
        let record = store.load();
        Self {
            record,
            navigation: NavigationController::new(),
            store,
            assets: AssetRegistry::new(),
            revision: 0,
            generation: PromptGeneration::new(config.generation_delay()),
            copied: CopiedIndicator::new(config.copied_indicator()),
        }
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn step(&self) -> WizardStep {
        self.navigation.step()
    }

    /// Incremented on every change to the record.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    /// Merges `updates` into the record and mirrors the result to storage.
    /// An empty batch changes nothing.
    pub fn update(&mut self, updates: Vec<FieldUpdate>) {
        if updates.is_empty() {
            return;
        }
        let keys: Vec<&str> = updates.iter().map(FieldUpdate::key).collect();
        tracing::debug!(?keys, "Applying field updates");
        self.record.apply(updates);
        self.store.save(&self.record);
        self.revision += 1;
    }

    pub fn can_advance(&self) -> bool {
        steps::can_advance(self.step(), &self.record)
    }

    /// Moves to the next step when the current one is complete.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.navigation.advance()
    }

    pub fn retreat(&mut self) -> bool {
        self.navigation.retreat()
    }

    /// Restores the default record, drops the stored copy and returns to the
    /// first step.
    pub fn reset(&mut self) {
        self.record = FormRecord::default();
        self.store.clear();
        self.navigation.reset();
        self.assets.clear();
        self.generation.cancel();
        self.revision += 1;
        tracing::info!("Wizard reset to defaults");
    }

    /// Registers files from disk and returns their metadata, ready to be added
    /// through a step's file control.
    pub fn pick_files(&mut self, paths: &[PathBuf]) -> Result<Vec<FileAsset>> {
        paths
            .iter()
            .map(|path| self.assets.register(path))
            .collect()
    }

    pub fn asset_source(&self, asset: &FileAsset) -> Option<&Path> {
        self.assets.source(asset)
    }

    pub fn export_data(&self, dir: &Path) -> Result<PathBuf> {
        self.store.export_to_file(&self.record, dir)
    }

    pub fn export_prompt(&self, dir: &Path) -> Result<PathBuf> {
        let text = prompt::assemble(&self.record);
        self.store.export_prompt(&text, &self.record, dir)
    }

    /// Replaces the record with an imported one. On failure the current record
    /// is left untouched.
    pub fn import(&mut self, path: &Path) -> Result<()> {
        let imported = self.store.import_from_file(path)?;
        self.record = imported;
        self.store.save(&self.record);
        self.revision += 1;
        tracing::info!(path = %path.display(), "Imported form data");
        Ok(())
    }

    pub fn prompt_text(&self) -> String {
        prompt::assemble(&self.record)
    }

    pub fn request_generation(&mut self, now: Instant) {
        self.generation.request(self.revision, now);
    }

    pub fn regenerate(&mut self, now: Instant) {
        self.generation.regenerate(self.revision, now);
    }

    pub fn poll_generation(&mut self, now: Instant) -> GenerationStatus {
        self.generation.poll(&self.record, self.revision, now)
    }

    pub fn mark_copied(&mut self, now: Instant) {
        self.copied.mark(now);
    }

    pub fn copied_active(&self, now: Instant) -> bool {
        self.copied.is_active(now)
    }
}
