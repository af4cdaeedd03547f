use super::{print_tool_line, CommandHandler};
use crate::catalog::CatalogStore;
use crate::query::{self, SearchCriteria, SortKey};
use crate::Result;

/// Handler for the `list` command
pub struct ListCommand {
    pub category: Option<String>,
    pub sort: String,
    pub reverse: bool,
    pub limit: Option<usize>,
    pub count: bool,
    pub categories: bool,
}

impl CommandHandler for ListCommand {
    fn execute(&self, store: &mut CatalogStore) -> Result<()> {
        if self.categories {
            let counts = store.catalog().category_counts();
            println!("Available categories ({}):", counts.len());
            for (category, count) in counts {
                println!("  {category} ({count} tools)");
            }
            return Ok(());
        }

        let criteria = SearchCriteria {
            category: self.category.clone(),
            sort: Some(self.sort.parse::<SortKey>()?),
            reverse: self.reverse,
            limit: self.limit,
            ..Default::default()
        };
        let defaults = store.settings().search_defaults.clone();
        let tools = query::search(store.tools(), &criteria, &defaults)?;

        if self.count {
            println!("Total tools: {}", tools.len());
            return Ok(());
        }

        if tools.is_empty() {
            println!("No tools found");
            return Ok(());
        }
        println!("Tools ({}):", tools.len());
        for (i, tool) in tools.iter().enumerate() {
            print_tool_line(i, tool);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "list"
    }
}
