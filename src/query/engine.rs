//! Filter, rank, sort, and truncate the catalog against a criteria set.

use super::criteria::{SearchCriteria, SortKey, TagMode};
use super::fuzzy;
use crate::catalog::types::ToolRecord;
use crate::config::SearchDefaults;
use crate::Result;
use regex::{Regex, RegexBuilder};

/// Text matching strategy resolved from the criteria flags. Regex wins when
/// both the regex and fuzzy flags are set.
enum TextMatcher {
    Exact,
    Fuzzy { threshold: f64 },
    Regex {
        name: Option<Regex>,
        description: Option<Regex>,
        path: Option<Regex>,
    },
}

/// Evaluate a criteria set against the records and return the matching
/// records, ranked and truncated.
///
/// All non-empty criteria must hold (logical AND). Regex patterns are
/// compiled before any record is inspected, so an invalid pattern fails the
/// whole search up front instead of producing a silent empty result.
pub fn search(
    tools: &[ToolRecord],
    criteria: &SearchCriteria,
    defaults: &SearchDefaults,
) -> Result<Vec<ToolRecord>> {
    let matcher = if criteria.regex {
        TextMatcher::Regex {
            name: compile(criteria.name.as_deref())?,
            description: compile(criteria.description.as_deref())?,
            path: compile(criteria.path.as_deref())?,
        }
    } else if criteria.fuzzy.unwrap_or(defaults.fuzzy) {
        TextMatcher::Fuzzy {
            threshold: defaults.fuzzy_threshold,
        }
    } else {
        TextMatcher::Exact
    };

    let mut matches: Vec<(f64, &ToolRecord)> = Vec::new();
    for tool in tools {
        if let Some(category) = &criteria.category {
            if !tool.category.eq_ignore_ascii_case(category) {
                continue;
            }
        }
        if !tags_match(tool, criteria) {
            continue;
        }
        match text_score(tool, criteria, &matcher) {
            Some(score) => matches.push((score, tool)),
            None => continue,
        }
    }

    // Closest fuzzy matches surface first; explicit sort below keeps this
    // order for records comparing equal on the sort key (stable sort)
    if matches!(matcher, TextMatcher::Fuzzy { .. }) && criteria.has_text_query() {
        matches.sort_by(|a, b| b.0.total_cmp(&a.0));
    }

    if let Some(sort) = criteria.sort {
        matches.sort_by(|a, b| {
            let ordering = compare_by_key(a.1, b.1, sort);
            if criteria.reverse {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }

    let mut results: Vec<ToolRecord> = matches.into_iter().map(|(_, t)| t.clone()).collect();
    if let Some(limit) = criteria.limit {
        results.truncate(limit);
    }
    Ok(results)
}

fn compile(pattern: Option<&str>) -> Result<Option<Regex>> {
    match pattern {
        Some(p) => Ok(Some(RegexBuilder::new(p).case_insensitive(true).build()?)),
        None => Ok(None),
    }
}

fn tags_match(tool: &ToolRecord, criteria: &SearchCriteria) -> bool {
    if criteria.tags.is_empty() {
        return true;
    }
    let has_tag = |wanted: &String| {
        tool.tags
            .iter()
            .any(|t| t.eq_ignore_ascii_case(wanted.trim()))
    };
    match criteria.tag_mode {
        TagMode::All => criteria.tags.iter().all(has_tag),
        TagMode::Any => criteria.tags.iter().any(has_tag),
    }
}

/// Combined match decision over the text criteria. Returns the record's
/// relevance score, or None when any criterion misses.
fn text_score(
    tool: &ToolRecord,
    criteria: &SearchCriteria,
    matcher: &TextMatcher,
) -> Option<f64> {
    let fields = [
        (criteria.name.as_deref(), tool.name.as_str()),
        (criteria.description.as_deref(), tool.description.as_str()),
        (criteria.path.as_deref(), tool.path.as_str()),
    ];

    let mut score = 0.0;
    for (index, (query, field)) in fields.into_iter().enumerate() {
        let Some(query) = query else { continue };
        match matcher {
            TextMatcher::Exact => {
                if !field.to_lowercase().contains(&query.to_lowercase()) {
                    return None;
                }
                score += 1.0;
            }
            TextMatcher::Fuzzy { threshold } => {
                let similarity = fuzzy::similarity(query, field);
                if similarity < *threshold {
                    return None;
                }
                score += similarity;
            }
            TextMatcher::Regex {
                name,
                description,
                path,
            } => {
                let regex = match index {
                    0 => name,
                    1 => description,
                    _ => path,
                };
                match regex {
                    Some(regex) if regex.is_match(field) => score += 1.0,
                    _ => return None,
                }
            }
        }
    }
    Some(score)
}

fn compare_by_key(a: &ToolRecord, b: &ToolRecord, key: SortKey) -> std::cmp::Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
        SortKey::AccessCount => a.access_count.cmp(&b.access_count),
        SortKey::DateAdded => a.date_added.cmp(&b.date_added),
        SortKey::LastModified => a.last_modified.cmp(&b.last_modified),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn record(name: &str, category: &str, tags: &[&str]) -> ToolRecord {
        let now = Utc::now();
        ToolRecord {
            id: format!("id-{name}"),
            name: name.to_string(),
            path: format!("/usr/bin/{name}"),
            description: String::new(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            example_usage: String::new(),
            notes: String::new(),
            date_added: now,
            last_modified: now,
            last_accessed: now,
            access_count: 0,
            verified: false,
            verification_date: now,
        }
    }

    fn network_fixture() -> Vec<ToolRecord> {
        vec![
            record("nmap", "network", &["scanner"]),
            record("nmap6", "network", &["scanner", "ipv6"]),
            record("wireshark", "network", &["capture"]),
        ]
    }

    fn names(results: &[ToolRecord]) -> Vec<&str> {
        results.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_returns_catalog_order() {
        let tools = network_fixture();
        let results = search(&tools, &SearchCriteria::default(), &SearchDefaults::default())
            .unwrap();
        assert_eq!(names(&results), vec!["nmap", "nmap6", "wireshark"]);
    }

    #[test]
    fn test_exact_substring_match_is_case_insensitive() {
        let tools = network_fixture();
        let criteria = SearchCriteria {
            name: Some("NMAP".to_string()),
            fuzzy: Some(false),
            ..Default::default()
        };
        let results = search(&tools, &criteria, &SearchDefaults::default()).unwrap();
        assert_eq!(names(&results), vec!["nmap", "nmap6"]);
    }

    #[test]
    fn test_exact_match_returns_only_substring_hits() {
        // "nmap" is a substring of both nmap and nmap6, so drop nmap6 to
        // observe a single-hit result
        let tools = vec![
            record("nmap", "network", &[]),
            record("wireshark", "network", &[]),
        ];
        let criteria = SearchCriteria {
            name: Some("nmap".to_string()),
            fuzzy: Some(false),
            ..Default::default()
        };
        let results = search(&tools, &criteria, &SearchDefaults::default()).unwrap();
        assert_eq!(names(&results), vec!["nmap"]);
    }

    #[test]
    fn test_fuzzy_ranks_closest_first() {
        let tools = network_fixture();
        let criteria = SearchCriteria {
            name: Some("nmp".to_string()),
            fuzzy: Some(true),
            ..Default::default()
        };
        let results = search(&tools, &criteria, &SearchDefaults::default()).unwrap();
        // both nmap variants match, wireshark does not; closest first
        assert_eq!(names(&results), vec!["nmap", "nmap6"]);
    }

    #[test]
    fn test_regex_takes_precedence_over_fuzzy() {
        let tools = network_fixture();
        let criteria = SearchCriteria {
            name: Some("^nm".to_string()),
            fuzzy: Some(true),
            regex: true,
            ..Default::default()
        };
        let results = search(&tools, &criteria, &SearchDefaults::default()).unwrap();
        assert_eq!(names(&results), vec!["nmap", "nmap6"]);
    }

    #[test]
    fn test_invalid_regex_fails_before_scan() {
        let tools = network_fixture();
        let criteria = SearchCriteria {
            name: Some("[unclosed".to_string()),
            regex: true,
            ..Default::default()
        };
        assert!(search(&tools, &criteria, &SearchDefaults::default()).is_err());
    }

    #[test]
    fn test_category_filter_and_limit() {
        let tools = network_fixture();
        let criteria = SearchCriteria {
            category: Some("network".to_string()),
            limit: Some(2),
            ..Default::default()
        };
        let results = search(&tools, &criteria, &SearchDefaults::default()).unwrap();
        assert_eq!(names(&results), vec!["nmap", "nmap6"]);
    }

    #[test]
    fn test_tag_mode_all_is_conjunctive() {
        let tools = network_fixture();
        let criteria = SearchCriteria {
            tags: vec!["scanner".to_string(), "ipv6".to_string()],
            ..Default::default()
        };
        let results = search(&tools, &criteria, &SearchDefaults::default()).unwrap();
        assert_eq!(names(&results), vec!["nmap6"]);
    }

    #[test]
    fn test_tag_mode_any_is_disjunctive() {
        let tools = network_fixture();
        let criteria = SearchCriteria {
            tags: vec!["ipv6".to_string(), "capture".to_string()],
            tag_mode: TagMode::Any,
            ..Default::default()
        };
        let results = search(&tools, &criteria, &SearchDefaults::default()).unwrap();
        assert_eq!(names(&results), vec!["nmap6", "wireshark"]);
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let mut tools = network_fixture();
        tools.push(record("nmap-web", "web", &["scanner"]));
        let criteria = SearchCriteria {
            name: Some("nmap".to_string()),
            category: Some("network".to_string()),
            fuzzy: Some(false),
            ..Default::default()
        };
        let results = search(&tools, &criteria, &SearchDefaults::default()).unwrap();
        assert_eq!(names(&results), vec!["nmap", "nmap6"]);
    }

    #[test]
    fn test_sort_by_access_count_reversed() {
        let mut tools = network_fixture();
        tools[1].access_count = 10;
        tools[2].access_count = 5;
        let criteria = SearchCriteria {
            sort: Some(SortKey::AccessCount),
            reverse: true,
            ..Default::default()
        };
        let results = search(&tools, &criteria, &SearchDefaults::default()).unwrap();
        assert_eq!(names(&results), vec!["nmap6", "wireshark", "nmap"]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let tools = network_fixture();
        let criteria = SearchCriteria {
            sort: Some(SortKey::Category),
            ..Default::default()
        };
        let results = search(&tools, &criteria, &SearchDefaults::default()).unwrap();
        // all share a category, so catalog order is retained
        assert_eq!(names(&results), vec!["nmap", "nmap6", "wireshark"]);
    }

    #[test]
    fn test_no_match_returns_empty_not_error() {
        let tools = network_fixture();
        let criteria = SearchCriteria {
            name: Some("metasploit".to_string()),
            fuzzy: Some(false),
            ..Default::default()
        };
        let results = search(&tools, &criteria, &SearchDefaults::default()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_default_fuzzy_setting_applies_when_flag_unset() {
        let tools = network_fixture();
        let criteria = SearchCriteria {
            name: Some("nmp".to_string()),
            ..Default::default()
        };
        // defaults have fuzzy on
        let fuzzy_on = search(&tools, &criteria, &SearchDefaults::default()).unwrap();
        assert_eq!(fuzzy_on.len(), 2);

        let exact_defaults = SearchDefaults {
            fuzzy: false,
            ..Default::default()
        };
        let fuzzy_off = search(&tools, &criteria, &exact_defaults).unwrap();
        assert!(fuzzy_off.is_empty());
    }

    #[test]
    fn test_path_criterion() {
        let tools = network_fixture();
        let criteria = SearchCriteria {
            path: Some("/usr/bin/wireshark".to_string()),
            fuzzy: Some(false),
            ..Default::default()
        };
        let results = search(&tools, &criteria, &SearchDefaults::default()).unwrap();
        assert_eq!(names(&results), vec!["wireshark"]);
    }
}
