//! Export options.

use serde::{Deserialize, Serialize};

/// Which frame to export and how large the host display surface should be.
///
/// Missing keys fall back to the defaults: first frame of the first page,
/// shown in a 1200×600 surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Index into the list of pages.
    pub page: usize,
    /// Index into the page's exportable frames.
    pub frame: usize,
    pub surface_width: u32,
    pub surface_height: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            page: 0,
            frame: 0,
            surface_width: 1200,
            surface_height: 600,
        }
    }
}
