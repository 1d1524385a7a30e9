//! HTML generation.
//!
//! Renders the direct children of one top-level frame. Only shapes carry
//! layout; containers and text become inert placeholders and are not
//! recursed into.

use crate::css::STYLESHEET;
use crate::layout::{compute_bounds, constraint_styles};
use crate::paint::apply_fills;
use framehtml_scene::{NodeId, NodeKind, SceneGraph, SceneNode};

/// Render one child of a frame as an HTML fragment.
pub fn render_node(graph: &SceneGraph, id: NodeId) -> String {
    let node = graph.node(id);
    match node.kind {
        NodeKind::Slice
        | NodeKind::Frame
        | NodeKind::Group
        | NodeKind::Component
        | NodeKind::Instance => "<div>instance</div>".to_string(),
        NodeKind::BooleanOperation
        | NodeKind::Vector
        | NodeKind::Star
        | NodeKind::Line
        | NodeKind::Ellipse
        | NodeKind::Polygon
        | NodeKind::Rectangle => render_shape(graph, node),
        NodeKind::Text => "<div>text</div>".to_string(),
        NodeKind::Document | NodeKind::Page | NodeKind::Other(_) => {
            log::warn!("no markup for {node}, emitting placeholder");
            format!("<div>{}</div>", escape_html(&node.to_string()))
        }
    }
}

fn render_shape(graph: &SceneGraph, node: &SceneNode) -> String {
    let bounds = compute_bounds(graph, node);
    let constraints = node.constraints.unwrap_or_default();
    let mut layout = constraint_styles(&bounds, constraints.horizontal, constraints.vertical);
    apply_fills(node, &mut layout.inner);

    log::trace!("{node}: {bounds:?}");

    format!(
        "\n    <div class=\"{}\" style=\"{}\">\n      <div class=\"innerDiv\" style=\"{}\">\n      </div>\n    </div>\n  ",
        layout.outer_class,
        layout.outer.to_inline(),
        layout.inner.to_inline(),
    )
}

/// Render a top-level frame as a complete HTML document.
///
/// Returns `None` when `id` is not a frame.
pub fn render_frame(graph: &SceneGraph, id: NodeId) -> Option<String> {
    let frame = graph.node(id);
    if frame.kind != NodeKind::Frame {
        log::debug!("{frame} is not a frame, nothing to render");
        return None;
    }

    let body: String = frame
        .children
        .iter()
        .map(|&child| render_node(graph, child))
        .collect();

    Some(document(&body))
}

fn document(body: &str) -> String {
    let mut html = String::new();
    html.push_str("<!doctype html>\n<html>\n  <head>\n    <style>\n");
    html.push_str(STYLESHEET);
    html.push_str("    </style>\n  </head>\n  <body>\n    <div class=\"root\">\n      ");
    html.push_str(body);
    html.push_str("\n    </div>\n  </body>\n</html>");
    html
}

/// Escape text for use inside an element.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
