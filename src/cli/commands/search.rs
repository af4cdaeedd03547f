use super::{print_tool_line, CommandHandler};
use crate::catalog::CatalogStore;
use crate::cli::app::split_csv_flag;
use crate::query::{self, SearchCriteria, SortKey, TagMode};
use crate::Result;

/// Handler for the `search` command
pub struct SearchCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub path: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub any_tag: bool,
    pub fuzzy: bool,
    pub exact: bool,
    pub regex: bool,
    pub sort: Option<String>,
    pub reverse: bool,
    pub limit: Option<usize>,
}

impl SearchCommand {
    fn criteria(&self, default_limit: usize) -> Result<SearchCriteria> {
        let sort = self
            .sort
            .as_deref()
            .map(str::parse::<SortKey>)
            .transpose()?;

        // --fuzzy / --exact force the mode; otherwise the configured
        // default applies
        let fuzzy = if self.fuzzy {
            Some(true)
        } else if self.exact {
            Some(false)
        } else {
            None
        };

        Ok(SearchCriteria {
            name: self.name.clone(),
            description: self.description.clone(),
            path: self.path.clone(),
            category: self.category.clone(),
            tags: self.tags.as_deref().map(split_csv_flag).unwrap_or_default(),
            tag_mode: if self.any_tag { TagMode::Any } else { TagMode::All },
            fuzzy,
            regex: self.regex,
            sort,
            reverse: self.reverse,
            limit: Some(self.limit.unwrap_or(default_limit)),
        })
    }
}

impl CommandHandler for SearchCommand {
    fn execute(&self, store: &mut CatalogStore) -> Result<()> {
        let defaults = store.settings().search_defaults.clone();
        let criteria = self.criteria(defaults.limit)?;
        let results = query::search(store.tools(), &criteria, &defaults)?;

        if results.is_empty() {
            println!("No tools found matching your criteria");
            return Ok(());
        }

        println!("Found {} matching tools:", results.len());
        for (i, tool) in results.iter().enumerate() {
            print_tool_line(i, tool);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "search"
    }
}
