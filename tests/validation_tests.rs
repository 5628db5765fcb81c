use autoon::{
    decode, validate, validate_as, validate_document, GraphType, Schema, ValidationResult,
};
use serde_json::json;

fn paths(result: &ValidationResult) -> Vec<&str> {
    result.errors.iter().map(|e| e.path.as_str()).collect()
}

#[test]
fn test_rejects_missing_nodes() {
    let result = validate(&json!({"graph": {"type": "class"}})).unwrap();
    assert!(!result.valid);
    assert!(paths(&result).contains(&"/graph/nodes"));
}

#[test]
fn test_rejects_bad_graph_type() {
    let result = validate(&json!({"graph": {"type": "bogus", "nodes": {}}})).unwrap();
    assert!(!result.valid);
    assert_eq!(result.errors[0].keyword.as_deref(), Some("enum"));
}

#[test]
fn test_accepts_minimal_document() {
    let result = validate(&json!({"graph": {"type": "workflow", "nodes": {}}})).unwrap();
    assert!(result.valid);
    assert!(result.errors.is_empty());
}

#[test]
fn test_rejects_non_object_documents() {
    for doc in [json!(null), json!("graph"), json!([1, 2])] {
        let result = validate(&doc).unwrap();
        assert!(!result.valid, "{} should be rejected", doc);
    }
}

#[test]
fn test_requires_exactly_one_of_graph_or_graphs() {
    let neither = validate(&json!({"model": {}})).unwrap();
    assert!(!neither.valid);
    assert_eq!(neither.errors[0].path, "/");
    assert_eq!(neither.errors[0].keyword.as_deref(), Some("oneOf"));

    let graph = json!({"type": "class", "nodes": {}});
    let both = validate(&json!({"graph": graph.clone(), "graphs": [graph]})).unwrap();
    assert!(!both.valid);
}

#[test]
fn test_graphs_list_is_validated() {
    let ok = validate(&json!({"graphs": [
        {"type": "class", "nodes": {}},
        {"type": "process", "nodes": {}}
    ]}))
    .unwrap();
    assert!(ok.valid);

    let empty = validate(&json!({"graphs": []})).unwrap();
    assert!(!empty.valid);

    let bad_second = validate(&json!({"graphs": [
        {"type": "class", "nodes": {}},
        {"type": "class"}
    ]}))
    .unwrap();
    assert!(paths(&bad_second).contains(&"/graphs/1/nodes"));
}

#[test]
fn test_node_type_vocabulary() {
    for node_type in ["class", "attribute", "method", "instance", "state", "action", "decision", "start", "end", "fork", "join"] {
        let doc = json!({"graph": {"type": "process", "nodes": {"n": {"type": node_type}}}});
        assert!(validate(&doc).unwrap().valid, "{} should be accepted", node_type);
    }

    let doc = json!({"graph": {"type": "process", "nodes": {"n": {"type": "task"}}}});
    let result = validate(&doc).unwrap();
    assert_eq!(paths(&result), vec!["/graph/nodes/n/type"]);
}

#[test]
fn test_edge_rules() {
    let doc = json!({"graph": {
        "type": "class",
        "nodes": {"A": {}, "B": {}},
        "edges": [
            {"source": "A", "target": "B", "relation": "inherits"},
            {"target": "B"},
            {"source": "", "target": "B"},
            {"source": "A", "target": "B", "relation": "depends"}
        ]
    }});
    let result = validate(&doc).unwrap();
    let paths = paths(&result);
    assert!(paths.contains(&"/graph/edges/1/source"));
    assert!(paths.contains(&"/graph/edges/2/source"));
    assert!(paths.contains(&"/graph/edges/3/relation"));
    assert!(!paths.iter().any(|p| p.starts_with("/graph/edges/0")));
}

#[test]
fn test_dangling_edges_are_allowed() {
    let doc = json!({"graph": {
        "type": "class",
        "nodes": {},
        "edges": [{"source": "ghost", "target": "phantom"}]
    }});
    assert!(validate(&doc).unwrap().valid);
}

#[test]
fn test_metadata_tags_must_be_strings() {
    let doc = json!({"graph": {
        "type": "class",
        "nodes": {},
        "metadata": {"tags": ["ok", 3], "custom": {"free": "form"}}
    }});
    let result = validate(&doc).unwrap();
    assert_eq!(paths(&result), vec!["/graph/metadata/tags/1"]);
}

#[test]
fn test_metadata_dates_are_checked() {
    let bad = json!({"graph": {
        "type": "class",
        "nodes": {},
        "metadata": {"created": "yesterday"}
    }});
    let result = validate(&bad).unwrap();
    assert!(!result.valid);
    assert_eq!(paths(&result), vec!["/graph/metadata/created"]);
    assert_eq!(result.errors[0].keyword.as_deref(), Some("format"));

    let good = json!({"graph": {
        "type": "class",
        "nodes": {},
        "metadata": {"created": "2024-05-01T12:30:00Z", "modified": "2024-05-02T08:00:00+02:00"}
    }});
    assert!(validate(&good).unwrap().valid);
}

#[test]
fn test_every_violation_is_reported() {
    let doc = json!({"graph": {
        "type": "diagram",
        "label": 5,
        "edges": [{"relation": "likes"}]
    }});
    let result = validate(&doc).unwrap();
    assert!(result.errors.len() >= 5, "{:?}", result.errors);
}

#[test]
fn test_decoded_text_is_validated_separately() {
    let doc = decode("graph{id,type}:\n  g,sequence\nnodes[1]{id,type}:\n  a,actor");
    let result = validate_document(&doc).unwrap();
    assert!(!result.valid);
    let paths = paths(&result);
    assert!(paths.contains(&"/graph/type"));
    assert!(paths.contains(&"/graph/nodes/a/type"));
}

#[test]
fn test_validate_as_expected_type() {
    let doc = json!({"graph": {"type": "instance", "nodes": {}}});
    assert!(validate_as(&doc, GraphType::Instance).unwrap().valid);

    let result = validate_as(&doc, GraphType::Class).unwrap();
    assert!(!result.valid);
    assert_eq!(result.errors[0].path, "/graph/type");
    assert_eq!(result.errors[0].keyword.as_deref(), Some("const"));
}

#[test]
fn test_injected_schema_matches_shared() {
    let own = Schema::compile().unwrap();
    let doc = json!({"graph": {"type": "class"}});
    assert_eq!(own.validate(&doc), validate(&doc).unwrap());
}

#[test]
fn test_result_json_shape() {
    let result = validate(&json!({"graph": {"type": "class"}})).unwrap();
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["valid"], false);
    assert_eq!(value["errors"][0]["path"], "/graph/nodes");
    assert_eq!(value["errors"][0]["keyword"], "required");
    assert!(value["errors"][0]["message"].is_string());
}

#[test]
fn test_shared_schema_from_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let doc = json!({"graph": {"type": "class", "nodes": {"n": {"label": format!("node {}", i)}}}});
                validate(&doc).unwrap().valid
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
