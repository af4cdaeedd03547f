use super::{resolve_id, CommandHandler};
use crate::catalog::CatalogStore;
use crate::{Result, ToolshedError};

/// Handler for the `delete` command
pub struct DeleteCommand {
    pub name: String,
    pub confirm: bool,
}

impl CommandHandler for DeleteCommand {
    fn execute(&self, store: &mut CatalogStore) -> Result<()> {
        let id = resolve_id(store, &self.name)?;
        if !self.confirm {
            return Err(ToolshedError::Validation(format!(
                "use --confirm to delete '{}'",
                self.name
            )));
        }

        store.delete_tool(&id)?;
        println!("Tool '{}' deleted successfully", self.name);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "delete"
    }
}
