//! WASM bindings for the framehtml exporter.
//!
//! The plugin sandbox serializes the scene graph to JSON and calls into
//! these functions. `handleMessage` returns the list of host actions
//! (`resize`, `postMessage`, `closePlugin`) for the JS shim to apply.

use framehtml_codegen::plugin::{self, PluginMessage};
use framehtml_codegen::{ExportError, ExportOptions};
use framehtml_scene::{locate, SceneGraph};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// An exportable frame as seen from JavaScript.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSummary {
    pub page_index: usize,
    pub page_name: String,
    pub frame_index: usize,
    pub host_id: Option<String>,
    pub name: String,
    pub link_text: String,
    pub link_target: String,
}

fn js_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

fn load(scene_json: &str) -> Result<SceneGraph, ExportError> {
    Ok(SceneGraph::from_json(scene_json)?)
}

fn frame_summaries(graph: &SceneGraph) -> Vec<FrameSummary> {
    locate::exportable_frames(graph)
        .into_iter()
        .map(|f| FrameSummary {
            page_index: f.page_index,
            page_name: f.page_name,
            frame_index: f.frame_index,
            host_id: graph.node(f.node).host_id.clone(),
            name: f.name,
            link_text: f.link.text,
            link_target: f.link.target,
        })
        .collect()
}

/// Export the first linked frame of the first page as an HTML document.
///
/// Throws a JS error if the scene cannot be read or has no exportable frame.
#[wasm_bindgen(js_name = exportFrame)]
pub fn export_frame(scene_json: &str) -> Result<String, JsError> {
    let graph = load(scene_json).map_err(js_error)?;
    framehtml_codegen::export_first_frame(&graph).map_err(js_error)
}

/// List every exportable frame in the scene.
///
/// Returns an array of `{ pageIndex, pageName, frameIndex, hostId, name,
/// linkText, linkTarget }` objects.
#[wasm_bindgen(js_name = findFrames)]
pub fn find_frames(scene_json: &str) -> Result<JsValue, JsError> {
    let graph = load(scene_json).map_err(js_error)?;
    serde_wasm_bindgen::to_value(&frame_summaries(&graph)).map_err(js_error)
}

/// Handle a message posted by the plugin UI.
///
/// Returns an array of host actions, e.g.
/// `[{ type: "resize", width: 1200, height: 600 }, { type: "postMessage", html }]`.
#[wasm_bindgen(js_name = handleMessage)]
pub fn handle_message(scene_json: &str, message: JsValue) -> Result<JsValue, JsError> {
    let message: PluginMessage = serde_wasm_bindgen::from_value(message).map_err(js_error)?;
    let graph = load(scene_json).map_err(js_error)?;
    let actions =
        plugin::handle_message(&graph, &message, &ExportOptions::default()).map_err(js_error)?;
    serde_wasm_bindgen::to_value(&actions).map_err(js_error)
}

/// Get the exporter version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use framehtml_codegen::plugin::HostAction;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    // =========================================================================
    // Native tests (non-WASM) — exercise the pipeline behind the bindings
    // =========================================================================

    fn scene() -> String {
        json!({
            "type": "DOCUMENT",
            "children": [
                {
                    "type": "PAGE",
                    "name": "Site",
                    "children": [
                        {
                            "type": "FRAME",
                            "id": "1:2",
                            "name": "[Home](/)",
                            "width": 100,
                            "height": 100,
                            "children": [{
                                "type": "RECTANGLE",
                                "x": 10, "y": 10, "width": 50, "height": 50,
                                "constraints": { "horizontal": "MIN", "vertical": "MIN" },
                                "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 0, "b": 0 } }]
                            }]
                        },
                        { "type": "FRAME", "id": "1:3", "name": "[About us](/about)" }
                    ]
                }
            ]
        })
        .to_string()
    }

    #[test]
    fn test_native_export() {
        let graph = load(&scene()).unwrap();
        let html = framehtml_codegen::export_first_frame(&graph).unwrap();
        assert!(html.contains("background-color:rgba(255, 0, 0, 1)"));
    }

    #[test]
    fn test_frame_summaries() {
        let graph = load(&scene()).unwrap();
        let summaries = frame_summaries(&graph);
        assert_eq!(summaries.len(), 2);
        assert_eq!(
            summaries[1],
            FrameSummary {
                page_index: 0,
                page_name: "Site".into(),
                frame_index: 1,
                host_id: Some("1:3".into()),
                name: "[About us](/about)".into(),
                link_text: "About us".into(),
                link_target: "/about".into(),
            }
        );
    }

    #[test]
    fn test_summary_field_names() {
        let graph = load(&scene()).unwrap();
        let value = serde_json::to_value(&frame_summaries(&graph)[0]).unwrap();
        assert_eq!(value["pageIndex"], json!(0));
        assert_eq!(value["linkTarget"], json!("/"));
        assert_eq!(value["hostId"], json!("1:2"));
    }

    #[test]
    fn test_native_message_round() {
        let graph = load(&scene()).unwrap();
        let actions = plugin::handle_message(
            &graph,
            &PluginMessage::new("doit"),
            &ExportOptions::default(),
        )
        .unwrap();
        assert_eq!(actions[0], HostAction::Resize { width: 1200, height: 600 });

        let closed =
            plugin::handle_message(&graph, &PluginMessage::new("close"), &ExportOptions::default())
                .unwrap();
        assert_eq!(closed, vec![HostAction::ClosePlugin]);
    }

    #[test]
    fn test_load_rejects_bad_scene() {
        assert!(load("not json").is_err());
        assert!(load(r#"{ "type": "FRAME" }"#).is_err());
    }

    #[test]
    fn test_multiple_exports_are_independent() {
        let graph = load(&scene()).unwrap();
        let first = framehtml_codegen::export_first_frame(&graph).unwrap();
        let second = framehtml_codegen::export_first_frame(&graph).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
        assert!(v.contains('.'));
    }
}
