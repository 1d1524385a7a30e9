//! Node kinds, constraints and paints as the host reports them.

use serde::Deserialize;
use std::fmt;

/// The type tag of a scene node.
///
/// Wire tags are the host's upper-snake names (`FRAME`, `BOOLEAN_OPERATION`).
/// Tags this crate does not know are kept verbatim in [`NodeKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum NodeKind {
    Document,
    Page,
    Frame,
    Group,
    Component,
    Instance,
    Slice,
    Rectangle,
    Vector,
    Star,
    Line,
    Ellipse,
    Polygon,
    Text,
    BooleanOperation,
    Other(String),
}

impl NodeKind {
    /// Host type tag for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Document => "DOCUMENT",
            NodeKind::Page => "PAGE",
            NodeKind::Frame => "FRAME",
            NodeKind::Group => "GROUP",
            NodeKind::Component => "COMPONENT",
            NodeKind::Instance => "INSTANCE",
            NodeKind::Slice => "SLICE",
            NodeKind::Rectangle => "RECTANGLE",
            NodeKind::Vector => "VECTOR",
            NodeKind::Star => "STAR",
            NodeKind::Line => "LINE",
            NodeKind::Ellipse => "ELLIPSE",
            NodeKind::Polygon => "POLYGON",
            NodeKind::Text => "TEXT",
            NodeKind::BooleanOperation => "BOOLEAN_OPERATION",
            NodeKind::Other(tag) => tag,
        }
    }

    /// Kinds that organize other nodes. Children of these are positioned
    /// relative to the container's origin.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            NodeKind::Document
                | NodeKind::Page
                | NodeKind::Slice
                | NodeKind::Frame
                | NodeKind::Group
                | NodeKind::Component
                | NodeKind::Instance
        )
    }

    /// Leaf shapes that go through the layout-and-fill pipeline.
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            NodeKind::Rectangle
                | NodeKind::Vector
                | NodeKind::Star
                | NodeKind::Line
                | NodeKind::Ellipse
                | NodeKind::Polygon
                | NodeKind::BooleanOperation
        )
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "DOCUMENT" => NodeKind::Document,
            "PAGE" => NodeKind::Page,
            "FRAME" => NodeKind::Frame,
            "GROUP" => NodeKind::Group,
            "COMPONENT" => NodeKind::Component,
            "INSTANCE" => NodeKind::Instance,
            "SLICE" => NodeKind::Slice,
            "RECTANGLE" => NodeKind::Rectangle,
            "VECTOR" => NodeKind::Vector,
            "STAR" => NodeKind::Star,
            "LINE" => NodeKind::Line,
            "ELLIPSE" => NodeKind::Ellipse,
            "POLYGON" => NodeKind::Polygon,
            "TEXT" => NodeKind::Text,
            "BOOLEAN_OPERATION" => NodeKind::BooleanOperation,
            _ => NodeKind::Other(tag),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How one edge pair of a node tracks its parent when the parent resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Constraint {
    Min,
    Max,
    Center,
    Stretch,
    Scale,
}

/// Per-axis layout constraints. Either axis may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Constraints {
    #[serde(default)]
    pub horizontal: Option<Constraint>,
    #[serde(default)]
    pub vertical: Option<Constraint>,
}

/// A color with normalized `[0, 1]` channels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default)]
    pub a: Option<f64>,
}

impl Rgba {
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: None }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a: Some(a), ..self }
    }
}

/// One stop of a gradient paint.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: Rgba,
}

/// A fill paint. Paints are stacked bottom-to-top.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid {
        color: Rgba,
        #[serde(default)]
        opacity: Option<f64>,
    },
    Image {
        #[serde(default, rename = "imageHash")]
        image_hash: Option<String>,
        #[serde(default, rename = "scaleMode")]
        scale_mode: Option<String>,
    },
    GradientLinear {
        #[serde(default, rename = "gradientStops")]
        gradient_stops: Vec<ColorStop>,
    },
    GradientRadial {
        #[serde(default, rename = "gradientStops")]
        gradient_stops: Vec<ColorStop>,
    },
    /// Angular, diamond, video and any future paint type.
    #[serde(other)]
    Unsupported,
}
