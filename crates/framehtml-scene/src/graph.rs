//! Arena-backed scene graph.
//!
//! The host snapshot is a nested tree. Loading flattens it into a `Vec` of
//! [`SceneNode`]s where both the parent link and the child list are
//! [`NodeId`] indices into the arena.

use crate::node::{Constraints, NodeKind, Paint};
use crate::SceneError;
use serde::Deserialize;
use std::fmt;

/// Index of a node inside its [`SceneGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node of the scene graph.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub id: NodeId,
    /// Identifier assigned by the host (`"12:34"`), if the snapshot carries one.
    pub host_id: Option<String>,
    pub kind: NodeKind,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub constraints: Option<Constraints>,
    pub fills: Vec<Paint>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Default string form of a node: its type tag and quoted name.
impl fmt::Display for SceneNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.name)
    }
}

/// Node as it appears in the host's nested JSON snapshot.
#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    kind: NodeKind,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    #[serde(default)]
    width: f64,
    #[serde(default)]
    height: f64,
    #[serde(default)]
    constraints: Option<Constraints>,
    #[serde(default)]
    fills: Vec<Paint>,
    #[serde(default)]
    children: Vec<RawNode>,
}

/// Read-only scene graph rooted at a `DOCUMENT` node.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    /// Load a scene snapshot from JSON text.
    pub fn from_json(source: &str) -> Result<Self, SceneError> {
        let raw: RawNode = serde_json::from_str(source)?;
        Self::from_raw(raw)
    }

    /// Load a scene snapshot from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, SceneError> {
        let raw: RawNode = serde_json::from_value(value)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawNode) -> Result<Self, SceneError> {
        if raw.kind != NodeKind::Document {
            return Err(SceneError::RootNotDocument { found: raw.kind });
        }

        let mut graph = SceneGraph { nodes: Vec::new() };
        graph.insert(raw, None);
        log::debug!("loaded scene graph with {} nodes", graph.nodes.len());
        Ok(graph)
    }

    fn insert(&mut self, raw: RawNode, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let RawNode {
            kind,
            id: host_id,
            name,
            x,
            y,
            width,
            height,
            constraints,
            fills,
            children,
        } = raw;

        self.nodes.push(SceneNode {
            id,
            host_id,
            kind,
            name,
            x,
            y,
            width,
            height,
            constraints,
            fills,
            parent,
            children: Vec::new(),
        });

        let child_ids = children
            .into_iter()
            .map(|child| self.insert(child, Some(id)))
            .collect();
        self.nodes[id.0].children = child_ids;
        id
    }

    /// The `DOCUMENT` node.
    pub fn root(&self) -> &SceneNode {
        &self.nodes[0]
    }

    /// Look up a node by id.
    ///
    /// Ids are only ever handed out by this graph, so indexing cannot miss.
    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id.0]
    }

    pub fn parent(&self, id: NodeId) -> Option<&SceneNode> {
        self.node(id).parent.map(|p| self.node(p))
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &SceneNode> {
        self.node(id).children.iter().map(|&c| self.node(c))
    }

    /// Pages in document order.
    pub fn pages(&self) -> impl Iterator<Item = &SceneNode> {
        self.children(self.root().id)
            .filter(|n| n.kind == NodeKind::Page)
    }

    /// Find a node by the identifier the host assigned to it.
    pub fn find_by_host_id(&self, host_id: &str) -> Option<&SceneNode> {
        self.nodes
            .iter()
            .find(|n| n.host_id.as_deref() == Some(host_id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
