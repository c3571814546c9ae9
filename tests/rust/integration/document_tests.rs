use cypher_builder::config::{OutputFormat, ToolConfig};
use cypher_builder::document::{DocumentError, QueryDocument};
use cypher_builder::Clause;
use serde_json::json;
use std::io::Write;

#[test]
fn test_yaml_document_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        r#"
clauses:
  - match:
      - node: [p, Person]
      - relation: {{ direction: left, args: [[Follows], "*"] }}
      - node: [f, Person]
  - where: {{ p: {{ active: true }} }}
  - return_distinct: {{ f: [name, {{ email: contact }}] }}
  - order_by: {{ fields: f.name, direction: descending }}
  - skip: 20
"#
    )
    .unwrap();

    let query = QueryDocument::from_path(file.path())
        .unwrap()
        .to_query()
        .unwrap();
    let object = query.build_query_object();
    assert_eq!(
        object.text,
        "MATCH (p:Person)<-[:Follows*]-(f:Person)\n\
         WHERE p.active = $active\n\
         RETURN DISTINCT f.name, f.email AS contact\n\
         ORDER BY f.name DESC\n\
         SKIP $skipCount;"
    );
    assert_eq!(
        object.parameters,
        *json!({"active": true, "skipCount": 20}).as_object().unwrap()
    );
}

#[test]
fn test_json_document_file_interpolates() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{"clauses": [
            {{"unwind": {{"list": ["a", "b"], "name": "x"}}}},
            {{"create": {{"node": ["n", "Item", {{"label": "x"}}]}}}}
        ]}}"#
    )
    .unwrap();

    let query = QueryDocument::from_path(file.path())
        .unwrap()
        .to_query()
        .unwrap();
    assert_eq!(
        query.interpolate(),
        "UNWIND [ 'a', 'b' ] AS x\nCREATE (n:Item { label: 'x' });"
    );
}

#[test]
fn test_missing_document() {
    assert!(matches!(
        QueryDocument::from_path("/definitely/not/here.yaml"),
        Err(DocumentError::Io(_))
    ));
}

#[test]
fn test_tool_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "format: text\nlog_level: debug").unwrap();
    let config = ToolConfig::from_yaml_file(file.path()).unwrap();
    assert_eq!(config.format, OutputFormat::Text);
    assert!(!config.interpolate);
}
