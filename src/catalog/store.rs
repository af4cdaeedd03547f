use crate::catalog::schema;
use crate::catalog::types::{Catalog, ToolDraft, ToolPatch, ToolRecord};
use crate::config::{Mode, Settings};
use crate::io::paths::ToolshedPaths;
use crate::{Result, ToolshedError};
use chrono::{Duration, Utc};
use std::path::{Path, PathBuf};

/// Owns the in-memory catalog and its on-disk representation.
///
/// Every mutation is written through to disk before the call returns: one
/// CLI invocation performs at most one load → operate → save cycle, so
/// nothing may be left only in memory. Saves go to a sibling temp file that
/// is renamed over the primary, which means a reader never observes a
/// half-written catalog. A failed save leaves the previous file intact and
/// the in-memory state mutated; the next successful save picks it up.
pub struct CatalogStore {
    paths: ToolshedPaths,
    settings: Settings,
    catalog: Catalog,
    /// True when load() created a fresh catalog (first run)
    first_run: bool,
}

impl CatalogStore {
    /// Load the catalog from disk, creating and persisting a fresh default
    /// catalog when no file exists yet.
    ///
    /// A document that fails schema validation is rejected as-is; the file
    /// on disk is never repaired or overwritten in response.
    pub fn load(paths: ToolshedPaths, settings: Settings) -> Result<Self> {
        paths.ensure_directories()?;
        let catalog_file = paths.catalog_file();

        let (catalog, first_run) = if catalog_file.exists() && !is_empty_file(&catalog_file)? {
            let contents = std::fs::read_to_string(&catalog_file)?;
            let document: serde_json::Value = serde_json::from_str(&contents)?;
            schema::validate(&document)?;
            let catalog: Catalog = serde_json::from_value(document)?;
            tracing::debug!(
                tools = catalog.tools.len(),
                "Loaded catalog from {}",
                catalog_file.display()
            );
            (catalog, false)
        } else {
            tracing::info!("No catalog at {}, creating default", catalog_file.display());
            (Catalog::new_default(), true)
        };

        let mut store = Self {
            paths,
            settings,
            catalog,
            first_run,
        };
        if first_run {
            store.save()?;
        }
        Ok(store)
    }

    /// Serialize the catalog and atomically replace the primary file.
    ///
    /// Refreshes `last_modified` and `total_tools`, takes a backup of the
    /// previous file when the frequency condition is met, and validates the
    /// serialized document before any byte reaches disk.
    pub fn save(&mut self) -> Result<()> {
        if self.backup_due() {
            self.backup()?;
        }

        self.catalog.metadata.last_modified = Utc::now();
        self.catalog.metadata.total_tools = self.catalog.tools.len() as u64;

        let document = serde_json::to_value(&self.catalog)?;
        schema::validate(&document)?;
        let content = serde_json::to_string_pretty(&document)?;

        let primary = self.paths.catalog_file();
        let temp = primary.with_extension("json.tmp");
        std::fs::write(&temp, &content)?;
        std::fs::rename(&temp, &primary)?;

        tracing::debug!("Saved catalog to {}", primary.display());
        Ok(())
    }

    /// Copy the current primary file to a timestamped backup and prune
    /// backups beyond the retention count, oldest first.
    pub fn backup(&mut self) -> Result<()> {
        let primary = self.paths.catalog_file();
        if !primary.exists() {
            return Ok(());
        }

        let stamp = Utc::now().format("%Y%m%d_%H%M%S");
        let backup_path = self
            .paths
            .backup_dir
            .join(format!("tools_backup_{stamp}.json"));
        std::fs::copy(&primary, &backup_path)?;
        self.catalog.metadata.last_backup = Some(Utc::now());
        tracing::info!("Backed up catalog to {}", backup_path.display());

        self.prune_backups()?;
        Ok(())
    }

    fn backup_due(&self) -> bool {
        if !self.paths.catalog_file().exists() {
            return false;
        }
        let minutes = self.settings.backup.frequency_minutes;
        if minutes == 0 {
            return true;
        }
        match self.catalog.metadata.last_backup {
            None => true,
            Some(last) => Utc::now() - last >= Duration::minutes(minutes as i64),
        }
    }

    fn prune_backups(&self) -> Result<()> {
        let mut backups: Vec<PathBuf> = std::fs::read_dir(&self.paths.backup_dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("tools_backup_") && n.ends_with(".json"))
            })
            .collect();

        // Timestamped names sort chronologically
        backups.sort();
        let retention = self.settings.backup.retention;
        if backups.len() > retention {
            for old in &backups[..backups.len() - retention] {
                std::fs::remove_file(old)?;
                tracing::debug!("Pruned old backup {}", old.display());
            }
        }
        Ok(())
    }

    /// Add a new tool, assign it a unique id, and persist.
    ///
    /// The category is added to the known set when new; an empty category
    /// falls back to `custom`. Rejects empty name/path and a name that
    /// already exists (case-insensitive).
    pub fn add_tool(&mut self, draft: ToolDraft) -> Result<String> {
        if draft.name.trim().is_empty() {
            return Err(ToolshedError::Validation("tool name is required".to_string()));
        }
        if draft.path.trim().is_empty() {
            return Err(ToolshedError::Validation("tool path is required".to_string()));
        }
        if self.catalog.find_by_name(&draft.name).is_some() {
            return Err(ToolshedError::Validation(format!(
                "tool '{}' already exists",
                draft.name
            )));
        }

        let category = if draft.category.trim().is_empty() {
            "custom".to_string()
        } else {
            draft.category.trim().to_string()
        };
        self.catalog.ensure_category(&category);

        let id = self.new_unique_id();
        let now = Utc::now();
        let verified = verify_path(&draft.path);
        let tags = self.catalog.normalize_tags(&draft.tags);
        let record = ToolRecord {
            id: id.clone(),
            name: draft.name.trim().to_string(),
            path: draft.path.trim().to_string(),
            description: draft.description,
            category,
            tags,
            example_usage: draft.example_usage,
            notes: draft.notes,
            date_added: now,
            last_modified: now,
            last_accessed: now,
            access_count: 0,
            verified,
            verification_date: now,
        };

        tracing::info!(name = %record.name, id = %id, "Adding tool");
        self.catalog.tools.push(record);
        self.save()?;
        Ok(id)
    }

    /// Apply a partial update to an existing tool and persist.
    ///
    /// An unknown id fails with NotFound and leaves the catalog unchanged.
    /// A path change triggers re-verification; a new category is added to
    /// the known set.
    pub fn update_tool(&mut self, id: &str, patch: ToolPatch) -> Result<()> {
        if self.catalog.find_tool(id).is_none() {
            return Err(ToolshedError::NotFound(format!("tool id '{id}'")));
        }
        if patch.is_empty() {
            return Err(ToolshedError::Validation(
                "no fields to update".to_string(),
            ));
        }
        if let Some(name) = &patch.name {
            if name.trim().is_empty() {
                return Err(ToolshedError::Validation("tool name is required".to_string()));
            }
            if self
                .catalog
                .find_by_name(name)
                .is_some_and(|existing| existing.id != id)
            {
                return Err(ToolshedError::Validation(format!(
                    "tool '{name}' already exists"
                )));
            }
        }
        if let Some(path) = &patch.path {
            if path.trim().is_empty() {
                return Err(ToolshedError::Validation("tool path is required".to_string()));
            }
        }
        if let Some(category) = &patch.category {
            if category.trim().is_empty() {
                return Err(ToolshedError::Validation(
                    "category must not be empty".to_string(),
                ));
            }
            self.catalog.ensure_category(category.trim());
        }

        let normalized_tags = patch
            .tags
            .as_ref()
            .map(|tags| self.catalog.normalize_tags(tags));
        let now = Utc::now();
        let tool = self
            .catalog
            .find_tool_mut(id)
            .ok_or_else(|| ToolshedError::NotFound(format!("tool id '{id}'")))?;

        if let Some(name) = patch.name {
            tool.name = name.trim().to_string();
        }
        if let Some(path) = patch.path {
            tool.path = path.trim().to_string();
            tool.verified = verify_path(&tool.path);
            tool.verification_date = now;
        }
        if let Some(description) = patch.description {
            tool.description = description;
        }
        if let Some(category) = patch.category {
            tool.category = category.trim().to_string();
        }
        if let Some(tags) = normalized_tags {
            tool.tags = tags;
        }
        if let Some(example_usage) = patch.example_usage {
            tool.example_usage = example_usage;
        }
        if let Some(notes) = patch.notes {
            tool.notes = notes;
        }
        tool.last_modified = now;

        tracing::info!(id = %id, "Updated tool");
        self.save()
    }

    /// Remove a tool and persist. The category set is left alone even when
    /// the removed tool was the last one in its category.
    pub fn delete_tool(&mut self, id: &str) -> Result<()> {
        let before = self.catalog.tools.len();
        self.catalog.tools.retain(|t| t.id != id);
        if self.catalog.tools.len() == before {
            return Err(ToolshedError::NotFound(format!("tool id '{id}'")));
        }
        tracing::info!(id = %id, "Deleted tool");
        self.save()
    }

    /// Record a use of the tool: bump its access count, stamp
    /// `last_accessed`, and persist.
    pub fn touch_access(&mut self, id: &str) -> Result<()> {
        let tool = self
            .catalog
            .find_tool_mut(id)
            .ok_or_else(|| ToolshedError::NotFound(format!("tool id '{id}'")))?;
        tool.access_count += 1;
        tool.last_accessed = Utc::now();
        self.save()
    }

    /// Re-verify every tool path, refresh verification timestamps, and
    /// persist once. Returns (verified, failed) counts.
    pub fn verify_all(&mut self) -> Result<(usize, usize)> {
        let now = Utc::now();
        let mut verified = 0;
        let mut failed = 0;
        for tool in &mut self.catalog.tools {
            tool.verified = verify_path(&tool.path);
            tool.verification_date = now;
            if tool.verified {
                verified += 1;
            } else {
                failed += 1;
            }
        }
        self.save()?;
        Ok((verified, failed))
    }

    /// Count an invocation through the given front-end and persist.
    pub fn record_mode_usage(&mut self, mode: Mode) -> Result<()> {
        match mode {
            Mode::Menu => self.catalog.metadata.mode_usage.menu += 1,
            Mode::Cli => self.catalog.metadata.mode_usage.cli += 1,
        }
        self.save()
    }

    fn new_unique_id(&self) -> String {
        loop {
            let id = uuid::Uuid::new_v4().to_string();
            if self.catalog.find_tool(&id).is_none() {
                return id;
            }
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tools(&self) -> &[ToolRecord] {
        &self.catalog.tools
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_first_run(&self) -> bool {
        self.first_run
    }

    pub fn paths(&self) -> &ToolshedPaths {
        &self.paths
    }
}

fn is_empty_file(path: &Path) -> Result<bool> {
    Ok(std::fs::metadata(path)?.len() == 0)
}

/// A tool counts as verified when its path exists and is executable
fn verify_path(path: &str) -> bool {
    let path = Path::new(path);
    path.exists() && is_executable(path)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}
