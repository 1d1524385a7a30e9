//! framehtml Code Generator
//!
//! Turns one top-level frame of a scene graph into a static HTML document.
//! Shapes become an outer/inner `div` pair whose inline CSS reproduces the
//! node's layout constraints and fill; everything else becomes a
//! placeholder.
//!
//! ```text
//! SceneGraph → locate → export() → HTML document
//! ```

pub mod css;
pub mod html;
pub mod layout;
pub mod options;
pub mod paint;
pub mod plugin;

pub use options::ExportOptions;

use framehtml_scene::{locate, SceneError, SceneGraph};

/// Export error.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The requested page has no frame whose name is a markdown link.
    #[error("No exportable frame found (page {page}, frame {frame})")]
    NoExportableFrame { page: usize, frame: usize },

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Export the frame selected by `options` as an HTML document.
pub fn export(graph: &SceneGraph, options: &ExportOptions) -> Result<String, ExportError> {
    let frames = locate::top_level_frames(graph);
    let missing = ExportError::NoExportableFrame {
        page: options.page,
        frame: options.frame,
    };

    let Some(&id) = frames
        .get(options.page)
        .and_then(|page| page.get(options.frame))
    else {
        return Err(missing);
    };

    log::debug!("exporting {}", graph.node(id));
    html::render_frame(graph, id).ok_or(missing)
}

/// Export the first exportable frame of the first page.
pub fn export_first_frame(graph: &SceneGraph) -> Result<String, ExportError> {
    export(graph, &ExportOptions::default())
}

/// Load a JSON scene snapshot and export it in one step.
pub fn export_json(source: &str, options: &ExportOptions) -> Result<String, ExportError> {
    let graph = SceneGraph::from_json(source)?;
    export(&graph, options)
}

/// Format a number the way the host stringifies it: `10` rather than `10.0`,
/// `-0` as `0`, non-finite values as `NaN`/`Infinity`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".into()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if n == 0.0 {
        "0".into()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
