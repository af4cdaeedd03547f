use super::CommandHandler;
use crate::catalog::CatalogStore;
use crate::export::{self, ExportFormat};
use crate::query::{self, SearchCriteria};
use crate::Result;

/// Handler for the `export` command
pub struct ExportCommand {
    pub format: String,
    pub output: String,
    pub category: Option<String>,
}

impl CommandHandler for ExportCommand {
    fn execute(&self, store: &mut CatalogStore) -> Result<()> {
        let format = self.format.parse::<ExportFormat>()?;

        let records = match &self.category {
            Some(_) => {
                let criteria = SearchCriteria {
                    category: self.category.clone(),
                    ..Default::default()
                };
                query::search(store.tools(), &criteria, &store.settings().search_defaults)?
            }
            None => store.tools().to_vec(),
        };

        let content = export::render(&records, format)?;
        std::fs::write(&self.output, content)?;
        println!("Exported {} tools to {}", records.len(), self.output);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "export"
    }
}
