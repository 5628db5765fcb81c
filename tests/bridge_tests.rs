use autoon::bridge::{self, check, generate, visualize, Format};
use autoon::{Error, GraphType};
use std::path::Path;

const CLASS_JSON: &str = r#"{
  "graph": {
    "id": "user-model",
    "type": "class",
    "label": "User Model",
    "nodes": {
      "User": { "label": "User", "type": "class" },
      "Admin": { "label": "Admin", "type": "class" },
      "login": { "label": "login(user, password)", "type": "method" }
    },
    "edges": [
      { "source": "Admin", "target": "User", "relation": "inherits" },
      { "source": "User", "target": "login", "relation": "has" }
    ],
    "metadata": { "version": "1.0.0", "tags": ["user", "auth"] }
  }
}"#;

const CLASS_TEXT: &str = "\
graph{id,type,label,directed}:
  user-model,class,User Model,true

nodes[3]{id,label,type}:
  User,User,class
  Admin,Admin,class
  login,\"login(user, password)\",method

edges[2]{source,target,relation,label}:
  Admin,User,inherits,
  User,login,has,

metadata:
  version: 1.0.0
  tags: [user,auth]";

#[test]
fn test_detect_by_extension_and_content() {
    assert_eq!(Format::detect(CLASS_JSON, None), Format::Json);
    assert_eq!(Format::detect(CLASS_TEXT, None), Format::Compact);
    assert_eq!(
        Format::detect(CLASS_TEXT, Some(Path::new("model.json"))),
        Format::Json
    );
    assert_eq!(
        Format::detect(CLASS_JSON, Some(Path::new("model.toon"))),
        Format::Json
    );
}

#[test]
fn test_generate_class_document() {
    let text = generate(CLASS_JSON, Format::Json, None).unwrap();
    println!("Class notation:\n{}", text);
    assert_eq!(text, CLASS_TEXT);
}

#[test]
fn test_generate_back_to_json() {
    let json = generate(CLASS_TEXT, Format::Compact, None).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["graph"]["id"], "user-model");
    assert_eq!(value["graph"]["nodes"]["login"]["label"], "login(user, password)");
    assert_eq!(value["graph"]["edges"][0]["relation"], "inherits");
    assert_eq!(value["graph"]["metadata"]["tags"], serde_json::json!(["user", "auth"]));
    assert_eq!(value["graph"]["metadata"]["version"], "1.0.0");
}

#[test]
fn test_generate_same_format_normalizes() {
    let again = generate(CLASS_TEXT, Format::Compact, Some(Format::Compact)).unwrap();
    assert_eq!(again, CLASS_TEXT);

    let pretty = generate(CLASS_JSON, Format::Json, Some(Format::Json)).unwrap();
    let a: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    let b: serde_json::Value = serde_json::from_str(CLASS_JSON).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_generate_reports_violations() {
    let bad = r#"{"graph": {"type": "class", "nodes": {"x": {"type": "widget"}}}}"#;
    match generate(bad, Format::Json, None) {
        Err(Error::Invalid(result)) => {
            assert_eq!(result.errors.len(), 1);
            assert_eq!(result.errors[0].path, "/graph/nodes/x/type");
        }
        other => panic!("Expected Invalid, got {:?}", other),
    }
}

#[test]
fn test_generate_generic_payload() {
    let json = r#"{
        "warehouse": "north",
        "items": [
            {"sku": "A-100", "qty": 12},
            {"sku": "B-200", "qty": 3}
        ],
        "manager": {"name": "Ada", "since": "2021-04-01"}
    }"#;
    let text = generate(json, Format::Json, None).unwrap();
    assert_eq!(
        text,
        "warehouse: north\nitems[2]{sku,qty}:\n  A-100,12\n  B-200,3\nmanager:\n  name: Ada\n  since: 2021-04-01"
    );
}

#[test]
fn test_check_valid_document() {
    let report = check(CLASS_JSON, Format::Json, Some(&GraphType::Class)).unwrap();
    assert!(report.is_valid());
    assert_eq!(report.graph_type.as_deref(), Some("class"));
    assert_eq!(report.nodes, 3);
    assert_eq!(report.edges, 2);
    assert!(!report.type_mismatch);
}

#[test]
fn test_check_compact_input() {
    let report = check(CLASS_TEXT, Format::Compact, Some(&GraphType::Process)).unwrap();
    assert!(report.is_valid());
    assert!(report.type_mismatch);
}

#[test]
fn test_check_graphs_list_summarizes_first() {
    let json = r#"{"graphs": [
        {"type": "process", "nodes": {"a": {}, "b": {}}},
        {"type": "class", "nodes": {}}
    ]}"#;
    let report = check(json, Format::Json, None).unwrap();
    assert!(report.is_valid());
    assert_eq!(report.graph_type.as_deref(), Some("process"));
    assert_eq!(report.nodes, 2);
    assert_eq!(report.edges, 0);
}

#[test]
fn test_check_report_serializes() {
    let report = check(r#"{"graph": {"type": "class"}}"#, Format::Json, None).unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["result"]["valid"], false);
    assert_eq!(value["nodes"], 0);
}

#[test]
fn test_visualize_class_document() {
    let dot = visualize(CLASS_TEXT, Format::Compact).unwrap();
    assert!(dot.starts_with("digraph \"user-model\" {"));
    assert!(dot.contains("  \"Admin\" -> \"User\" [tooltip=\"inherits\"];"));
    assert!(dot.contains("  \"login\" [label=\"login(user, password)\", shape=ellipse"));
    assert!(dot.ends_with('}'));
}

#[test]
fn test_read_value_from_compact() {
    let value = bridge::read_value("nodes[1]{id}:\n  a", Format::Compact).unwrap();
    assert!(value["graph"]["nodes"]["a"].is_object());
    assert!(bridge::is_graph_document(&value));
}

#[test]
fn test_malformed_json_is_an_error() {
    assert!(matches!(
        generate("{\"graph\": [", Format::Json, None),
        Err(Error::Json { .. })
    ));
    assert!(matches!(
        visualize("not json", Format::Json),
        Err(Error::Json { .. })
    ));
}
