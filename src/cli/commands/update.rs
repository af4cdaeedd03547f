use super::{resolve_id, CommandHandler};
use crate::catalog::{CatalogStore, ToolPatch};
use crate::cli::app::split_csv_flag;
use crate::Result;

/// Handler for the `update` command
pub struct UpdateCommand {
    pub name: String,
    pub rename: Option<String>,
    pub path: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub usage: Option<String>,
    pub notes: Option<String>,
}

impl CommandHandler for UpdateCommand {
    fn execute(&self, store: &mut CatalogStore) -> Result<()> {
        let id = resolve_id(store, &self.name)?;
        let patch = ToolPatch {
            name: self.rename.clone(),
            path: self.path.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            tags: self.tags.as_deref().map(split_csv_flag),
            example_usage: self.usage.clone(),
            notes: self.notes.clone(),
        };

        store.update_tool(&id, patch)?;
        println!("Tool '{}' updated successfully", self.name);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "update"
    }
}
