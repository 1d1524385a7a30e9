//! Bounds computation and constraint-to-CSS mapping.
//!
//! Every shape is emitted as a full-width flex row (`outerDiv`) holding a
//! single box (`innerDiv`). Horizontal constraints become justification on
//! the row plus margins/width on the box; vertical constraints become
//! margins/height on the box, with `centerer` stretching the row to the
//! parent's height.

use crate::css::StyleMap;
use crate::format_number;
use framehtml_scene::{Constraint, NodeKind, SceneGraph, SceneNode};

/// Distances from each edge of a node to the matching edge of its parent,
/// plus the node's own size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

/// Styles for the outer/inner element pair of one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutStyles {
    pub outer_class: String,
    pub outer: StyleMap,
    pub inner: StyleMap,
}

impl LayoutStyles {
    fn new() -> Self {
        Self {
            outer_class: "outerDiv".to_string(),
            outer: StyleMap::new(),
            inner: StyleMap::new(),
        }
    }

    fn add_centerer(&mut self) {
        self.outer_class.push_str(" centerer");
    }
}

/// Origin of the coordinate space a node is laid out in.
///
/// Structural containers position their children from (0, 0). A shape
/// parent acts as a clip, so its own position is the origin.
pub fn parent_offset(parent: &SceneNode) -> (f64, f64) {
    match parent.kind {
        NodeKind::Document
        | NodeKind::Page
        | NodeKind::Slice
        | NodeKind::Frame
        | NodeKind::Group
        | NodeKind::Component
        | NodeKind::Instance => (0.0, 0.0),
        NodeKind::BooleanOperation
        | NodeKind::Vector
        | NodeKind::Star
        | NodeKind::Line
        | NodeKind::Ellipse
        | NodeKind::Polygon
        | NodeKind::Rectangle
        | NodeKind::Text => (parent.x, parent.y),
        NodeKind::Other(_) => (0.0, 0.0),
    }
}

/// Compute the bounds of `node` within its parent.
pub fn compute_bounds(graph: &SceneGraph, node: &SceneNode) -> Bounds {
    let (offset_x, offset_y, parent_width, parent_height) = match graph.parent(node.id) {
        Some(parent) => {
            let (ox, oy) = parent_offset(parent);
            (ox, oy, parent.width, parent.height)
        }
        None => (0.0, 0.0, 0.0, 0.0),
    };

    Bounds {
        left: node.x - offset_x,
        right: (offset_x + parent_width) - (node.x + node.width),
        top: node.y - offset_y,
        bottom: (offset_y + parent_height) - (node.y + node.height),
        width: node.width,
        height: node.height,
    }
}

fn px(n: f64) -> String {
    format!("{}px", format_number(n))
}

fn percent(part: f64, total: f64) -> String {
    format!("{}%", format_number(part * 100.0 / total))
}

fn truthy(n: f64) -> bool {
    n != 0.0 && !n.is_nan()
}

/// Translate a node's constraints into outer/inner styles.
pub fn constraint_styles(
    bounds: &Bounds,
    horizontal: Option<Constraint>,
    vertical: Option<Constraint>,
) -> LayoutStyles {
    let mut layout = LayoutStyles::new();
    apply_horizontal(&mut layout, bounds, horizontal);
    apply_vertical(&mut layout, bounds, vertical);
    layout
}

fn apply_horizontal(layout: &mut LayoutStyles, b: &Bounds, constraint: Option<Constraint>) {
    let inner = &mut layout.inner;
    match constraint {
        Some(Constraint::Center) => {
            layout.outer.set("justifyContent", "center");
            inner.set("width", px(b.width));
            // A zero edge on either side drops the offset entirely.
            let margin = (truthy(b.left) && truthy(b.right)).then(|| px(b.left - b.right));
            inner.set_opt("marginLeft", margin);
        }
        Some(Constraint::Scale) => {
            let parent_width = b.left + b.width + b.right;
            inner.set("width", percent(b.width, parent_width));
            inner.set("marginLeft", percent(b.left, parent_width));
        }
        Some(Constraint::Max) => {
            layout.outer.set("justifyContent", "flex-end");
            inner.set("marginRight", px(b.right));
            inner.set("width", px(b.width));
            inner.set("minWidth", format_number(b.width));
        }
        Some(Constraint::Min) => {
            layout.outer.set("justifyContent", "flex-start");
            inner.set("marginLeft", px(b.left));
            inner.set("width", px(b.width));
            inner.set("minWidth", format_number(b.width));
        }
        Some(Constraint::Stretch) => {
            inner.set("marginLeft", px(b.left));
            inner.set("marginRight", px(b.right));
            inner.set("flexGrow", "1");
        }
        None => {}
    }
}

fn apply_vertical(layout: &mut LayoutStyles, b: &Bounds, constraint: Option<Constraint>) {
    if constraint != Some(Constraint::Stretch) {
        layout.inner.set("height", px(b.height));
    }

    match constraint {
        Some(Constraint::Center) => {
            layout.add_centerer();
            layout.outer.set("alignItems", "center");
            layout.inner.set("marginTop", px(b.top - b.bottom));
        }
        Some(Constraint::Scale) => {
            layout.add_centerer();
            let parent_height = b.top + b.height + b.bottom;
            layout.inner.set("height", percent(b.height, parent_height));
            layout.inner.set("top", percent(b.top, parent_height));
        }
        Some(Constraint::Stretch) => {
            layout.add_centerer();
            layout.inner.set("marginTop", px(b.top));
            layout.inner.set("marginBottom", px(b.bottom));
            layout.inner.set("minHeight", px(b.height));
            layout.inner.set_opt("height", None::<String>);
        }
        // Max is laid out exactly like Min on this axis.
        Some(Constraint::Max) | Some(Constraint::Min) => {
            layout.add_centerer();
            layout.inner.set("marginTop", px(b.top));
            layout.inner.set("marginBottom", px(b.bottom));
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn bounds(left: f64, right: f64, top: f64, bottom: f64, width: f64, height: f64) -> Bounds {
        Bounds {
            left,
            right,
            top,
            bottom,
            width,
            height,
        }
    }

    fn inline(h: Option<Constraint>, v: Option<Constraint>, b: &Bounds) -> (String, String, String) {
        let layout = constraint_styles(b, h, v);
        (layout.outer_class, layout.outer.to_inline(), layout.inner.to_inline())
    }

    // =========================================================================
    // Bounds
    // =========================================================================

    #[test]
    fn test_bounds_inside_frame() {
        let graph = SceneGraph::from_value(json!({
            "type": "DOCUMENT",
            "children": [{ "type": "PAGE", "children": [{
                "type": "FRAME", "x": 500, "y": 500, "width": 100, "height": 80,
                "children": [{ "type": "RECTANGLE", "x": 10, "y": 20, "width": 30, "height": 40 }]
            }] }]
        }))
        .unwrap();
        let page = graph.pages().next().unwrap();
        let frame = graph.children(page.id).next().unwrap();
        let rect = graph.children(frame.id).next().unwrap();

        assert_eq!(compute_bounds(&graph, rect), bounds(10.0, 60.0, 20.0, 20.0, 30.0, 40.0));
    }

    #[test]
    fn test_bounds_inside_shape_use_parent_position() {
        let graph = SceneGraph::from_value(json!({
            "type": "DOCUMENT",
            "children": [{ "type": "PAGE", "children": [{
                "type": "BOOLEAN_OPERATION", "x": 100, "y": 50, "width": 200, "height": 100,
                "children": [{ "type": "RECTANGLE", "x": 120, "y": 60, "width": 50, "height": 30 }]
            }] }]
        }))
        .unwrap();
        let page = graph.pages().next().unwrap();
        let op = graph.children(page.id).next().unwrap();
        let rect = graph.children(op.id).next().unwrap();

        assert_eq!(
            compute_bounds(&graph, rect),
            bounds(20.0, 130.0, 10.0, 60.0, 50.0, 30.0)
        );
    }

    #[test]
    fn test_parent_offset_by_kind() {
        let graph = SceneGraph::from_value(json!({
            "type": "DOCUMENT",
            "children": [{ "type": "PAGE", "children": [
                { "type": "GROUP", "x": 7, "y": 9 },
                { "type": "TEXT", "x": 7, "y": 9 },
                { "type": "STICKY", "x": 7, "y": 9 }
            ] }]
        }))
        .unwrap();
        let page = graph.pages().next().unwrap();
        let offsets: Vec<(f64, f64)> = graph.children(page.id).map(parent_offset).collect();
        assert_eq!(offsets, vec![(0.0, 0.0), (7.0, 9.0), (0.0, 0.0)]);
    }

    // =========================================================================
    // Horizontal constraints
    // =========================================================================

    #[test]
    fn test_horizontal_min() {
        let b = bounds(10.0, 40.0, 0.0, 0.0, 50.0, 20.0);
        let (_, outer, inner) = inline(Some(Constraint::Min), None, &b);
        assert_eq!(outer, "justify-content:flex-start");
        assert_eq!(inner, "margin-left:10px;width:50px;min-width:50;height:20px");
    }

    #[test]
    fn test_horizontal_max() {
        let b = bounds(10.0, 40.0, 0.0, 0.0, 50.0, 20.0);
        let (_, outer, inner) = inline(Some(Constraint::Max), None, &b);
        assert_eq!(outer, "justify-content:flex-end");
        assert_eq!(inner, "margin-right:40px;width:50px;min-width:50;height:20px");
    }

    #[test]
    fn test_horizontal_center() {
        let b = bounds(30.0, 20.0, 0.0, 0.0, 50.0, 20.0);
        let (_, outer, inner) = inline(Some(Constraint::Center), None, &b);
        assert_eq!(outer, "justify-content:center");
        assert_eq!(inner, "width:50px;margin-left:10px;height:20px");
    }

    #[test]
    fn test_horizontal_center_zero_left_omits_margin() {
        let b = bounds(0.0, 5.0, 0.0, 0.0, 95.0, 20.0);
        let (_, _, inner) = inline(Some(Constraint::Center), None, &b);
        assert_eq!(inner, "width:95px;height:20px");
        assert!(!inner.contains("margin-left"));
    }

    #[test]
    fn test_horizontal_center_zero_right_omits_margin() {
        let b = bounds(5.0, 0.0, 0.0, 0.0, 95.0, 20.0);
        let layout = constraint_styles(&b, Some(Constraint::Center), None);
        assert_eq!(layout.inner.get("marginLeft"), None);
    }

    #[test]
    fn test_horizontal_stretch() {
        let b = bounds(10.0, 15.0, 0.0, 0.0, 75.0, 20.0);
        let (_, outer, inner) = inline(Some(Constraint::Stretch), None, &b);
        assert_eq!(outer, "");
        assert_eq!(inner, "margin-left:10px;margin-right:15px;flex-grow:1;height:20px");
    }

    #[test]
    fn test_horizontal_scale() {
        let b = bounds(25.0, 25.0, 0.0, 0.0, 150.0, 20.0);
        let (_, outer, inner) = inline(Some(Constraint::Scale), None, &b);
        assert_eq!(outer, "");
        assert_eq!(inner, "width:75%;margin-left:12.5%;height:20px");
    }

    #[test]
    fn test_horizontal_scale_reconstructs_pixels() {
        for (left, width, right) in [(10.0, 50.0, 40.0), (3.0, 17.0, 11.0), (0.0, 64.0, 0.5)] {
            let b = bounds(left, right, 0.0, 0.0, width, 10.0);
            let layout = constraint_styles(&b, Some(Constraint::Scale), None);
            let parent_width = left + width + right;
            let parse = |key: &str| -> f64 {
                layout.inner.get(key).unwrap().trim_end_matches('%').parse().unwrap()
            };
            assert!((parse("width") * parent_width / 100.0 - width).abs() < 1e-9);
            assert!((parse("marginLeft") * parent_width / 100.0 - left).abs() < 1e-9);
        }
    }

    #[test]
    fn test_no_constraints() {
        let b = bounds(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let (class, outer, inner) = inline(None, None, &b);
        assert_eq!(class, "outerDiv");
        assert_eq!(outer, "");
        assert_eq!(inner, "height:6px");
    }

    // =========================================================================
    // Vertical constraints
    // =========================================================================

    #[test]
    fn test_vertical_min_and_max_match() {
        let b = bounds(0.0, 0.0, 10.0, 40.0, 50.0, 50.0);
        let min = inline(None, Some(Constraint::Min), &b);
        let max = inline(None, Some(Constraint::Max), &b);
        assert_eq!(min, max);
        assert_eq!(min.0, "outerDiv centerer");
        assert_eq!(min.2, "height:50px;margin-top:10px;margin-bottom:40px");
    }

    #[test]
    fn test_vertical_center() {
        let b = bounds(0.0, 0.0, 30.0, 10.0, 50.0, 60.0);
        let (class, outer, inner) = inline(None, Some(Constraint::Center), &b);
        assert_eq!(class, "outerDiv centerer");
        assert_eq!(outer, "align-items:center");
        assert_eq!(inner, "height:60px;margin-top:20px");
    }

    #[test]
    fn test_vertical_center_negative_offset() {
        let b = bounds(0.0, 0.0, 0.0, 10.0, 50.0, 60.0);
        let (_, _, inner) = inline(None, Some(Constraint::Center), &b);
        assert_eq!(inner, "height:60px;margin-top:-10px");
    }

    #[test]
    fn test_vertical_stretch_clears_height() {
        let b = bounds(0.0, 0.0, 5.0, 15.0, 50.0, 80.0);
        let (class, _, inner) = inline(None, Some(Constraint::Stretch), &b);
        assert_eq!(class, "outerDiv centerer");
        assert_eq!(inner, "margin-top:5px;margin-bottom:15px;min-height:80px");
    }

    #[test]
    fn test_vertical_scale() {
        let b = bounds(0.0, 0.0, 20.0, 20.0, 50.0, 60.0);
        let (class, _, inner) = inline(None, Some(Constraint::Scale), &b);
        assert_eq!(class, "outerDiv centerer");
        assert_eq!(inner, "height:60%;top:20%");
    }

    #[test]
    fn test_combined_constraints() {
        let b = bounds(10.0, 40.0, 10.0, 40.0, 50.0, 50.0);
        let (class, outer, inner) =
            inline(Some(Constraint::Max), Some(Constraint::Center), &b);
        assert_eq!(class, "outerDiv centerer");
        assert_eq!(outer, "justify-content:flex-end;align-items:center");
        assert_eq!(
            inner,
            "margin-right:40px;width:50px;min-width:50;height:50px;margin-top:-30px"
        );
    }

    #[test]
    fn test_fractional_pixels() {
        let b = bounds(10.5, 0.25, 0.0, 0.0, 33.25, 1.5);
        let (_, _, inner) = inline(Some(Constraint::Min), None, &b);
        assert_eq!(inner, "margin-left:10.5px;width:33.25px;min-width:33.25;height:1.5px");
    }
}
