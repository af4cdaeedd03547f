use crate::ToolshedError;
use std::str::FromStr;

/// How a multi-tag filter combines its tags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagMode {
    /// Record must carry every listed tag
    #[default]
    All,
    /// Record must carry at least one listed tag
    Any,
}

/// Field a result sequence can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Category,
    AccessCount,
    DateAdded,
    LastModified,
}

impl FromStr for SortKey {
    type Err = ToolshedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "category" => Ok(SortKey::Category),
            "access_count" => Ok(SortKey::AccessCount),
            "date_added" => Ok(SortKey::DateAdded),
            "last_modified" => Ok(SortKey::LastModified),
            other => Err(ToolshedError::Query(format!(
                "unknown sort key '{other}' (expected name, category, access_count, \
                 date_added, or last_modified)"
            ))),
        }
    }
}

/// Structured search parameters, combined with logical AND.
///
/// All fields are optional; an entirely empty criteria set matches the full
/// catalog in catalog order.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    /// Match against the name field
    pub name: Option<String>,
    /// Match against the description field
    pub description: Option<String>,
    /// Match against the path field
    pub path: Option<String>,
    /// Exact (case-insensitive) category filter
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub tag_mode: TagMode,
    /// Approximate matching for the text fields; None falls back to the
    /// configured search default
    pub fuzzy: Option<bool>,
    /// Interpret text criteria as regular expressions. Takes precedence
    /// over `fuzzy` when both are set.
    pub regex: bool,
    pub sort: Option<SortKey>,
    pub reverse: bool,
    /// Truncates the result sequence after sorting
    pub limit: Option<usize>,
}

impl SearchCriteria {
    /// True when at least one text criterion is present
    pub fn has_text_query(&self) -> bool {
        self.name.is_some() || self.description.is_some() || self.path.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::Name);
        assert_eq!(
            "access_count".parse::<SortKey>().unwrap(),
            SortKey::AccessCount
        );
        assert!(matches!(
            "popularity".parse::<SortKey>(),
            Err(ToolshedError::Query(_))
        ));
    }

    #[test]
    fn test_empty_criteria_has_no_text_query() {
        let criteria = SearchCriteria::default();
        assert!(!criteria.has_text_query());
        assert_eq!(criteria.tag_mode, TagMode::All);
    }
}
