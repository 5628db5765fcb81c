//! Graph document model.
//!
//! A [`Document`] holds either one [`Graph`] or a list of them. Graphs own their
//! nodes (keyed by id, in insertion order) and an ordered edge list.
//!
//! The three vocabularies ([`GraphType`], [`NodeType`], [`EdgeRelation`]) are
//! closed sets with an `Other` fallback: decoding keeps whatever word it finds
//! and leaves rejection to the validator.

use crate::Metadata;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $word:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// A word outside the vocabulary, kept verbatim.
            Other(String),
        }

        impl $name {
            /// Every word of the vocabulary, in declaration order.
            pub const ALL: &'static [&'static str] = &[$($word),+];

            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $word,)+
                    $name::Other(word) => word.as_str(),
                }
            }

            /// Returns `true` unless this is an [`Other`](Self::Other) word.
            #[must_use]
            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl From<&str> for $name {
            fn from(word: &str) -> Self {
                match word {
                    $($word => $name::$variant,)+
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(word: String) -> Self {
                $name::from(word.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vocabulary! {
    /// Kind of diagram a graph describes.
    GraphType {
        Class => "class",
        Instance => "instance",
        Process => "process",
        Workflow => "workflow",
    }
}

vocabulary! {
    /// Node kinds across class, instance, process and workflow diagrams.
    NodeType {
        Class => "class",
        Attribute => "attribute",
        Method => "method",
        Instance => "instance",
        State => "state",
        Action => "action",
        Decision => "decision",
        Start => "start",
        End => "end",
        Fork => "fork",
        Join => "join",
    }
}

vocabulary! {
    /// Relation an edge expresses between its endpoints.
    EdgeRelation {
        Inherits => "inherits",
        Implements => "implements",
        Has => "has",
        Uses => "uses",
        Creates => "creates",
        Transitions => "transitions",
        Triggers => "triggers",
        Flows => "flows",
        Guards => "guards",
    }
}

impl Default for GraphType {
    fn default() -> Self {
        GraphType::Class
    }
}

/// Root artifact: one `graph` or a non-empty list of `graphs`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<Graph>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphs: Option<Vec<Graph>>,
}

impl Document {
    /// Wraps a single graph.
    #[must_use]
    pub fn new(graph: Graph) -> Self {
        Document {
            graph: Some(graph),
            graphs: None,
        }
    }

    /// The graph a single-graph consumer should look at: `graph`, else `graphs[0]`.
    #[must_use]
    pub fn first_graph(&self) -> Option<&Graph> {
        self.graph
            .as_ref()
            .or_else(|| self.graphs.as_ref().and_then(|graphs| graphs.first()))
    }

    /// All graphs in encoding order: `graph` first, then `graphs`.
    pub fn all_graphs(&self) -> impl Iterator<Item = &Graph> {
        self.graph
            .iter()
            .chain(self.graphs.iter().flat_map(|graphs| graphs.iter()))
    }
}

/// A typed graph of nodes and edges.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub graph_type: GraphType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directed: Option<bool>,
    #[serde(default)]
    pub nodes: IndexMap<String, Node>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<Edge>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl Graph {
    #[must_use]
    pub fn new(graph_type: GraphType) -> Self {
        Graph {
            graph_type,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Adds (or replaces) a node under `key`.
    #[must_use]
    pub fn with_node(mut self, key: impl Into<String>, node: Node) -> Self {
        self.nodes.insert(key.into(), node);
        self
    }

    #[must_use]
    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }

    /// Graphs are directed unless `directed` is explicitly `false`.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed != Some(false)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<NodeType>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl Node {
    #[must_use]
    pub fn new(label: impl Into<String>, node_type: NodeType) -> Self {
        Node {
            label: Some(label.into()),
            node_type: Some(node_type),
            metadata: Metadata::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<EdgeRelation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directed: Option<bool>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl Edge {
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Edge {
            source: source.into(),
            target: target.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_relation(mut self, relation: EdgeRelation) -> Self {
        self.relation = Some(relation);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
