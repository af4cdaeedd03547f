use super::{resolve_id, CommandHandler};
use crate::catalog::CatalogStore;
use crate::Result;

/// Handler for the `use` command: displays a tool's usage info and records
/// the access so popular tools surface under `--sort access_count`
pub struct TouchCommand {
    pub name: String,
}

impl CommandHandler for TouchCommand {
    fn execute(&self, store: &mut CatalogStore) -> Result<()> {
        let id = resolve_id(store, &self.name)?;
        store.touch_access(&id)?;

        // fetch after the touch so the printed count reflects this use
        if let Some(tool) = store.catalog().find_tool(&id) {
            println!("{} ({})", tool.name, tool.path);
            if !tool.description.is_empty() {
                println!("  {}", tool.description);
            }
            if !tool.example_usage.is_empty() {
                println!("  Example: {}", tool.example_usage);
            }
            if !tool.notes.is_empty() {
                println!("  Notes: {}", tool.notes);
            }
            println!("  Used {} times", tool.access_count);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "use"
    }
}
