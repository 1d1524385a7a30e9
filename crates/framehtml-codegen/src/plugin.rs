//! Message protocol between the plugin UI and the exporter.
//!
//! The UI posts a message; the exporter answers with a list of actions for
//! the host shim to carry out, in order.

use crate::{export, ExportError, ExportOptions};
use framehtml_scene::SceneGraph;
use serde::{Deserialize, Serialize};

/// Message type that requests an export.
pub const EXPORT_MESSAGE: &str = "doit";

/// A message posted by the plugin UI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PluginMessage {
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl PluginMessage {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    pub fn is_export(&self) -> bool {
        self.kind == EXPORT_MESSAGE
    }
}

/// Something the host should do in response to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostAction {
    /// Resize the plugin's display surface.
    Resize { width: u32, height: u32 },
    /// Send the generated document to the UI.
    PostMessage { html: String },
    /// Shut the plugin down.
    ClosePlugin,
}

/// Handle one message from the UI.
///
/// An export request resizes the surface and posts the document; any other
/// message closes the plugin.
pub fn handle_message(
    graph: &SceneGraph,
    message: &PluginMessage,
    options: &ExportOptions,
) -> Result<Vec<HostAction>, ExportError> {
    if !message.is_export() {
        log::debug!("closing on message {:?}", message.kind);
        return Ok(vec![HostAction::ClosePlugin]);
    }

    let html = export(graph, options)?;
    Ok(vec![
        HostAction::Resize {
            width: options.surface_width,
            height: options.surface_height,
        },
        HostAction::PostMessage { html },
    ])
}
