use pretty_assertions::assert_eq;
use tempfile::TempDir;
use toolshed::catalog::{CatalogStore, ToolDraft};
use toolshed::config::Settings;
use toolshed::export::{self, ExportFormat};
use toolshed::io::paths::ToolshedPaths;

fn populated_store() -> (CatalogStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let paths = ToolshedPaths::for_root(temp_dir.path());
    let mut store = CatalogStore::load(paths, Settings::default()).unwrap();
    store
        .add_tool(ToolDraft {
            name: "nmap".to_string(),
            path: "/usr/bin/nmap".to_string(),
            description: "Network scanner, with \"quotes\" | and pipes".to_string(),
            category: "network".to_string(),
            tags: vec!["scanner".to_string(), "tcp".to_string()],
            ..Default::default()
        })
        .unwrap();
    store
        .add_tool(ToolDraft {
            name: "binwalk".to_string(),
            path: "/usr/bin/binwalk".to_string(),
            category: "forensics".to_string(),
            ..Default::default()
        })
        .unwrap();
    (store, temp_dir)
}

#[test]
fn rendering_twice_is_byte_identical() {
    let (store, _temp_dir) = populated_store();
    for format in [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Markdown] {
        let first = export::render(store.tools(), format).unwrap();
        let second = export::render(store.tools(), format).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn export_never_mutates_the_catalog() {
    let (store, _temp_dir) = populated_store();
    let before = store.catalog().clone();

    for format in [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Markdown] {
        export::render(store.tools(), format).unwrap();
    }

    assert_eq!(store.catalog(), &before);
    assert!(store.tools().iter().all(|t| t.access_count == 0));
}

#[test]
fn csv_export_round_trips_field_content() {
    let (store, _temp_dir) = populated_store();
    let csv = export::render(store.tools(), ExportFormat::Csv).unwrap();

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "id,name,path,description,category,tags,access_count,verified"
    );
    // embedded quotes doubled per RFC 4180
    assert!(lines[1].contains("\"\"quotes\"\""));
    assert!(lines[1].contains("scanner;tcp"));
}

#[test]
fn json_export_parses_back_to_the_same_records() {
    let (store, _temp_dir) = populated_store();
    let json = export::render(store.tools(), ExportFormat::Json).unwrap();
    let parsed: Vec<toolshed::catalog::ToolRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, store.tools());
}

#[test]
fn markdown_export_keeps_table_shape_with_pipes_in_cells() {
    let (store, _temp_dir) = populated_store();
    let markdown = export::render(store.tools(), ExportFormat::Markdown).unwrap();

    let lines: Vec<&str> = markdown.lines().collect();
    assert_eq!(lines.len(), 4);
    // every data row has the same number of columns as the header
    let header_cols = lines[0].matches('|').count();
    for line in &lines[2..] {
        let unescaped_pipes = line.replace("\\|", "").matches('|').count();
        assert_eq!(unescaped_pipes, header_cols);
    }
}
