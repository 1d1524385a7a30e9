//! framehtml scene graph
//!
//! Read-only model of the design tool's scene graph: node kinds, geometry,
//! layout constraints and fill paints. The host hands over a nested JSON
//! snapshot which is flattened into an arena ([`SceneGraph`]) so that parent
//! links are plain [`NodeId`]s.
//!
//! The [`locate`] module finds the top-level frames that are marked for
//! export with a markdown link in their name (`[Home](/)`).
//!
//! # Example
//!
//! ```
//! use framehtml_scene::{locate, SceneGraph};
//!
//! let graph = SceneGraph::from_json(r#"{
//!     "type": "DOCUMENT",
//!     "children": [{
//!         "type": "PAGE",
//!         "name": "Page 1",
//!         "children": [{ "type": "FRAME", "name": "[Home](/)", "width": 100, "height": 100 }]
//!     }]
//! }"#).unwrap();
//!
//! let frames = locate::top_level_frames(&graph);
//! assert_eq!(frames[0].len(), 1);
//! ```

pub mod graph;
pub mod locate;
pub mod node;

pub use graph::{NodeId, SceneGraph, SceneNode};
pub use node::{ColorStop, Constraint, Constraints, NodeKind, Paint, Rgba};

/// Error raised while loading a scene snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("Invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Scene root must be a DOCUMENT node, found {found}")]
    RootNotDocument { found: NodeKind },
}
