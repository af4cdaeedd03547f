use super::CommandHandler;
use crate::catalog::{CatalogStore, ToolDraft};
use crate::cli::app::split_csv_flag;
use crate::Result;

/// Handler for the `add` command
pub struct AddCommand {
    pub name: String,
    pub path: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub usage: Option<String>,
    pub notes: Option<String>,
}

impl CommandHandler for AddCommand {
    fn execute(&self, store: &mut CatalogStore) -> Result<()> {
        let draft = ToolDraft {
            name: self.name.clone(),
            path: self.path.clone(),
            description: self.description.clone().unwrap_or_default(),
            category: self.category.clone().unwrap_or_default(),
            tags: self.tags.as_deref().map(split_csv_flag).unwrap_or_default(),
            example_usage: self.usage.clone().unwrap_or_default(),
            notes: self.notes.clone().unwrap_or_default(),
        };

        let id = store.add_tool(draft)?;
        println!("Added tool '{}' ({})", self.name, id);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "add"
    }
}
