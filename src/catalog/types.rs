use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current catalog document schema version
pub const SCHEMA_VERSION: &str = "2.0";

/// Categories seeded into a freshly created catalog
pub const DEFAULT_CATEGORIES: &[&str] = &["network", "forensics", "web", "system", "custom"];

/// A single cataloged command-line tool
///
/// Field order is the canonical key order of the persisted document and of
/// JSON exports; keep it stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
    /// Unique id, assigned at creation, never changed afterwards
    pub id: String,
    pub name: String,
    /// Filesystem path; recorded as given, not required to exist
    pub path: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub example_usage: String,
    pub notes: String,
    pub date_added: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub last_accessed: DateTime<Utc>,
    pub access_count: u64,
    pub verified: bool,
    pub verification_date: DateTime<Utc>,
}

/// Fields supplied by the user when adding a tool
#[derive(Debug, Clone, Default)]
pub struct ToolDraft {
    pub name: String,
    pub path: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub example_usage: String,
    pub notes: String,
}

/// Partial update applied to an existing record; `None` fields are left alone
#[derive(Debug, Clone, Default)]
pub struct ToolPatch {
    pub name: Option<String>,
    pub path: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub example_usage: Option<String>,
    pub notes: Option<String>,
}

impl ToolPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.path.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.example_usage.is_none()
            && self.notes.is_none()
    }
}

/// Per-mode invocation counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeUsage {
    pub menu: u64,
    pub cli: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogMetadata {
    pub version: String,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub total_tools: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_backup: Option<DateTime<Utc>>,
    #[serde(default)]
    pub mode_usage: ModeUsage,
    /// Tag case policy, fixed when the catalog is created
    #[serde(default = "default_true")]
    pub tags_case_insensitive: bool,
}

fn default_true() -> bool {
    true
}

/// The full persisted catalog: metadata, known categories, and tool records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub metadata: CatalogMetadata,
    pub categories: Vec<String>,
    pub tools: Vec<ToolRecord>,
}

impl Catalog {
    /// Fresh catalog with default categories and zeroed counters
    pub fn new_default() -> Self {
        let now = Utc::now();
        Self {
            metadata: CatalogMetadata {
                version: SCHEMA_VERSION.to_string(),
                created: now,
                last_modified: now,
                total_tools: 0,
                last_backup: None,
                mode_usage: ModeUsage::default(),
                tags_case_insensitive: true,
            },
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            tools: Vec::new(),
        }
    }

    pub fn find_tool(&self, id: &str) -> Option<&ToolRecord> {
        self.tools.iter().find(|t| t.id == id)
    }

    pub fn find_tool_mut(&mut self, id: &str) -> Option<&mut ToolRecord> {
        self.tools.iter_mut().find(|t| t.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&ToolRecord> {
        self.tools
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Add the category to the known set if it is new; categories are never
    /// removed, even when the last tool using one is deleted
    pub fn ensure_category(&mut self, category: &str) {
        if !self.categories.iter().any(|c| c == category) {
            self.categories.push(category.to_string());
        }
    }

    /// Drop empty tags, trim whitespace, apply the catalog's case policy,
    /// and collapse duplicates while preserving first-seen order
    pub fn normalize_tags(&self, tags: &[String]) -> Vec<String> {
        let mut seen = Vec::new();
        for tag in tags {
            let tag = tag.trim();
            if tag.is_empty() {
                continue;
            }
            let tag = if self.metadata.tags_case_insensitive {
                tag.to_lowercase()
            } else {
                tag.to_string()
            };
            if !seen.contains(&tag) {
                seen.push(tag);
            }
        }
        seen
    }

    /// Number of tools in each known category, in category order
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        self.categories
            .iter()
            .map(|c| {
                let count = self.tools.iter().filter(|t| &t.category == c).count();
                (c.clone(), count)
            })
            .collect()
    }
}
