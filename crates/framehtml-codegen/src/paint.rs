//! Fill paint resolution.

use crate::css::StyleMap;
use crate::format_number;
use framehtml_scene::{NodeKind, Paint, Rgba, SceneNode};

fn channel(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Format a color as `rgba(r, g, b, a)`.
///
/// A missing or zero alpha prints as `1`.
pub fn color_string(color: &Rgba) -> String {
    let alpha = match color.a {
        Some(a) if a != 0.0 && !a.is_nan() => format_number(a),
        _ => "1".to_string(),
    };
    format!(
        "rgba({}, {}, {}, {})",
        channel(color.r),
        channel(color.g),
        channel(color.b),
        alpha
    )
}

/// Apply the topmost fill of a rectangle to its inner styles.
///
/// Other kinds, empty fill lists and non-solid paints leave `styles` untouched.
pub fn apply_fills(node: &SceneNode, styles: &mut StyleMap) {
    if node.kind != NodeKind::Rectangle {
        return;
    }

    let Some(top) = node.fills.last() else {
        return;
    };

    match top {
        Paint::Solid { color, opacity } => {
            styles.set("backgroundColor", color_string(color));
            styles.set_opt("opacity", opacity.map(format_number));
        }
        Paint::Image { .. } | Paint::GradientLinear { .. } | Paint::GradientRadial { .. } => {
            log::debug!("{node}: {} fill is not exported", paint_label(top));
        }
        Paint::Unsupported => {}
    }
}

fn paint_label(paint: &Paint) -> &'static str {
    match paint {
        Paint::Solid { .. } => "solid",
        Paint::Image { .. } => "image",
        Paint::GradientLinear { .. } => "linear gradient",
        Paint::GradientRadial { .. } => "radial gradient",
        Paint::Unsupported => "unsupported",
    }
}
