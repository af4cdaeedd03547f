use clap::{Parser, Subcommand};

/// Toolshed: personal catalog of installed command-line tools
#[derive(Parser)]
#[command(name = "toolshed")]
#[command(version)]
#[command(about = "Personal catalog of installed command-line tools")]
#[command(
    long_about = "Toolshed keeps a searchable catalog of the command-line tools installed on \
                  this machine: where they live, what they do, and how often you reach for them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new tool to the catalog
    Add {
        /// Tool name
        #[arg(short, long)]
        name: String,

        /// Tool executable path
        #[arg(short, long)]
        path: String,

        /// Tool description
        #[arg(short, long)]
        description: Option<String>,

        /// Tool category (created if new)
        #[arg(short, long)]
        category: Option<String>,

        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,

        /// Example usage
        #[arg(short = 'u', long)]
        usage: Option<String>,

        /// Additional notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Search the catalog
    Search {
        /// Search by name
        #[arg(short, long)]
        name: Option<String>,

        /// Search in descriptions
        #[arg(short, long)]
        description: Option<String>,

        /// Search by path
        #[arg(short, long)]
        path: Option<String>,

        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,

        /// Required tags, comma-separated
        #[arg(short, long)]
        tags: Option<String>,

        /// Match records carrying any of the tags instead of all of them
        #[arg(long)]
        any_tag: bool,

        /// Force fuzzy matching
        #[arg(short, long)]
        fuzzy: bool,

        /// Force exact substring matching
        #[arg(short, long, conflicts_with = "fuzzy")]
        exact: bool,

        /// Interpret text criteria as regular expressions
        #[arg(short, long)]
        regex: bool,

        /// Sort by field (name, category, access_count, date_added, last_modified)
        #[arg(short, long)]
        sort: Option<String>,

        /// Reverse the sort order
        #[arg(long)]
        reverse: bool,

        /// Limit results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List tools or categories
    List {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,

        /// Sort by field
        #[arg(short, long, default_value = "name")]
        sort: String,

        /// Reverse the sort order
        #[arg(long)]
        reverse: bool,

        /// Limit results
        #[arg(long)]
        limit: Option<usize>,

        /// Show count only
        #[arg(long)]
        count: bool,

        /// List categories with tool counts
        #[arg(long)]
        categories: bool,
    },

    /// Update an existing tool
    Update {
        /// Tool name to update
        name: String,

        /// New tool name
        #[arg(long)]
        rename: Option<String>,

        /// New tool path
        #[arg(short, long)]
        path: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New tags, comma-separated
        #[arg(short, long)]
        tags: Option<String>,

        /// New example usage
        #[arg(short = 'u', long)]
        usage: Option<String>,

        /// New notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a tool from the catalog
    Delete {
        /// Tool name to delete
        name: String,

        /// Confirm deletion
        #[arg(long)]
        confirm: bool,
    },

    /// Record a use of a tool and show its usage info
    Use {
        /// Tool name
        name: String,
    },

    /// Re-verify every tool path
    Verify,

    /// Export the catalog to a structured format
    Export {
        /// Export format (csv, json, markdown)
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Output file path
        #[arg(short, long)]
        output: String,

        /// Only export tools in this category
        #[arg(short, long)]
        category: Option<String>,
    },
}

/// Split a comma-separated flag value into trimmed, non-empty parts
pub fn split_csv_flag(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_csv_flag() {
        assert_eq!(
            split_csv_flag("scanner, tcp , ,ipv6"),
            vec!["scanner", "tcp", "ipv6"]
        );
        assert!(split_csv_flag(" , ").is_empty());
    }

    #[test]
    fn test_cli_parses_add() {
        let cli = Cli::try_parse_from([
            "toolshed", "add", "-n", "nmap", "-p", "/usr/bin/nmap", "-c", "network",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Add { .. }));
    }

    #[test]
    fn test_fuzzy_conflicts_with_exact() {
        let result =
            Cli::try_parse_from(["toolshed", "search", "-n", "nmap", "--fuzzy", "--exact"]);
        assert!(result.is_err());
    }
}
