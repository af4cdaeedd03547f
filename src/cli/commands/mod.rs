pub mod add;
pub mod delete;
pub mod export;
pub mod list;
pub mod search;
pub mod touch;
pub mod update;
pub mod verify;

use crate::catalog::CatalogStore;
use crate::{Result, ToolshedError};

/// Common trait for all command handlers
///
/// Handlers are thin adapters: they translate flags into core operations and
/// print the outcome. All invariants live in the store and query engine.
pub trait CommandHandler {
    /// Execute the command against the loaded store
    fn execute(&self, store: &mut CatalogStore) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Resolve a user-facing tool name to its record id
pub fn resolve_id(store: &CatalogStore, name: &str) -> Result<String> {
    store
        .catalog()
        .find_by_name(name)
        .map(|tool| tool.id.clone())
        .ok_or_else(|| ToolshedError::NotFound(format!("tool '{name}'")))
}

/// One-line summary used by the search and list outputs
pub fn print_tool_line(index: usize, tool: &crate::catalog::ToolRecord) {
    let mark = if tool.verified { "ok" } else { "??" };
    println!("{}. {} [{}]", index + 1, tool.name, mark);
    println!("   {} | {}", tool.category, tool.path);
    if !tool.description.is_empty() {
        let description = if tool.description.chars().count() > 60 {
            let head: String = tool.description.chars().take(60).collect();
            format!("{head}...")
        } else {
            tool.description.clone()
        };
        println!("   {description}");
    }
}
