//! Structural validation of the catalog document.
//!
//! Runs against the raw JSON value on every load, before the document is
//! deserialized into typed records, and again on the serialized document
//! before every persist. A document that fails validation is reported with
//! the offending field and reason; it is never repaired in place.

use crate::{Result, ToolshedError};
use chrono::DateTime;
use serde_json::Value;

/// Fields every tool object must carry
const REQUIRED_TOOL_FIELDS: &[&str] = &["id", "name", "path", "description", "category"];

/// Timestamp fields checked for RFC 3339 form when present
const TOOL_TIMESTAMP_FIELDS: &[&str] = &[
    "date_added",
    "last_modified",
    "last_accessed",
    "verification_date",
];

/// Validate a catalog document against the required structure
pub fn validate(document: &Value) -> Result<()> {
    let root = document
        .as_object()
        .ok_or_else(|| ToolshedError::schema("$", "document is not an object"))?;

    let metadata = root
        .get("metadata")
        .ok_or_else(|| ToolshedError::schema("metadata", "required key missing"))?
        .as_object()
        .ok_or_else(|| ToolshedError::schema("metadata", "must be an object"))?;

    for field in ["version", "created", "last_modified", "total_tools"] {
        if !metadata.contains_key(field) {
            return Err(ToolshedError::schema(
                format!("metadata.{field}"),
                "required key missing",
            ));
        }
    }
    expect_non_negative_int(metadata.get("total_tools"), "metadata.total_tools")?;
    for field in ["created", "last_modified", "last_backup"] {
        if let Some(value) = metadata.get(field) {
            expect_timestamp(value, &format!("metadata.{field}"))?;
        }
    }
    if let Some(usage) = metadata.get("mode_usage") {
        let usage = usage
            .as_object()
            .ok_or_else(|| ToolshedError::schema("metadata.mode_usage", "must be an object"))?;
        for (key, value) in usage {
            expect_non_negative_int(Some(value), &format!("metadata.mode_usage.{key}"))?;
        }
    }

    let categories = root
        .get("categories")
        .ok_or_else(|| ToolshedError::schema("categories", "required key missing"))?
        .as_array()
        .ok_or_else(|| ToolshedError::schema("categories", "must be an array"))?;
    for (i, category) in categories.iter().enumerate() {
        if !category.is_string() {
            return Err(ToolshedError::schema(
                format!("categories[{i}]"),
                "must be a string",
            ));
        }
    }

    let tools = root
        .get("tools")
        .ok_or_else(|| ToolshedError::schema("tools", "required key missing"))?
        .as_array()
        .ok_or_else(|| ToolshedError::schema("tools", "must be an array"))?;

    for (i, tool) in tools.iter().enumerate() {
        validate_tool(tool, i)?;
    }

    Ok(())
}

fn validate_tool(tool: &Value, index: usize) -> Result<()> {
    let object = tool
        .as_object()
        .ok_or_else(|| ToolshedError::schema(format!("tools[{index}]"), "must be an object"))?;

    for field in REQUIRED_TOOL_FIELDS {
        match object.get(*field) {
            None => {
                return Err(ToolshedError::schema(
                    format!("tools[{index}].{field}"),
                    "required key missing",
                ))
            }
            Some(value) if !value.is_string() => {
                return Err(ToolshedError::schema(
                    format!("tools[{index}].{field}"),
                    "must be a string",
                ))
            }
            _ => {}
        }
    }

    if let Some(value) = object.get("access_count") {
        expect_non_negative_int(Some(value), &format!("tools[{index}].access_count"))?;
    }
    for field in TOOL_TIMESTAMP_FIELDS {
        if let Some(value) = object.get(*field) {
            expect_timestamp(value, &format!("tools[{index}].{field}"))?;
        }
    }
    if let Some(tags) = object.get("tags") {
        if !tags.is_array() {
            return Err(ToolshedError::schema(
                format!("tools[{index}].tags"),
                "must be an array",
            ));
        }
    }

    Ok(())
}

fn expect_non_negative_int(value: Option<&Value>, field: &str) -> Result<()> {
    match value {
        Some(v) if v.is_u64() => Ok(()),
        Some(_) => Err(ToolshedError::schema(
            field,
            "must be a non-negative integer",
        )),
        None => Err(ToolshedError::schema(field, "required key missing")),
    }
}

fn expect_timestamp(value: &Value, field: &str) -> Result<()> {
    if value.is_null() {
        return Ok(());
    }
    let text = value
        .as_str()
        .ok_or_else(|| ToolshedError::schema(field, "must be an RFC 3339 timestamp string"))?;
    DateTime::parse_from_rfc3339(text)
        .map_err(|e| ToolshedError::schema(field, format!("invalid timestamp: {e}")))?;
    Ok(())
}
