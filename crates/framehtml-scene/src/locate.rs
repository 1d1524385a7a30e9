//! Frame Locator.
//!
//! A top-level frame is exported when its name contains a markdown link,
//! e.g. `[Home Page](/)`. Only the direct children of each page are
//! considered.

use crate::graph::{NodeId, SceneGraph};
use crate::node::NodeKind;
use regex::Regex;
use std::sync::OnceLock;

fn link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[([^\[]+)\](\(.*\))").expect("link pattern is valid"))
}

/// Link text and target parsed from a frame name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLink {
    pub text: String,
    pub target: String,
}

/// An exportable frame together with where it lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportableFrame {
    pub page_index: usize,
    pub page_name: String,
    pub frame_index: usize,
    pub node: NodeId,
    pub name: String,
    pub link: FrameLink,
}

/// Whether a name contains a markdown link. Case-sensitive, matches anywhere.
pub fn is_link_name(name: &str) -> bool {
    link_pattern().is_match(name)
}

/// Parse the first markdown link in a name.
pub fn parse_link(name: &str) -> Option<FrameLink> {
    let caps = link_pattern().captures(name)?;
    let target = &caps[2];
    Some(FrameLink {
        text: caps[1].to_string(),
        target: target[1..target.len() - 1].to_string(),
    })
}

/// For each page in order, the direct child frames whose name is a link.
pub fn top_level_frames(graph: &SceneGraph) -> Vec<Vec<NodeId>> {
    graph
        .pages()
        .map(|page| {
            graph
                .children(page.id)
                .filter(|n| n.kind == NodeKind::Frame && is_link_name(&n.name))
                .map(|n| n.id)
                .collect()
        })
        .collect()
}

/// Flat list of every exportable frame across all pages.
pub fn exportable_frames(graph: &SceneGraph) -> Vec<ExportableFrame> {
    let mut frames = Vec::new();

    for (page_index, (page, ids)) in graph.pages().zip(top_level_frames(graph)).enumerate() {
        for (frame_index, id) in ids.into_iter().enumerate() {
            let node = graph.node(id);
            let Some(link) = parse_link(&node.name) else {
                continue;
            };
            frames.push(ExportableFrame {
                page_index,
                page_name: page.name.clone(),
                frame_index,
                node: id,
                name: node.name.clone(),
                link,
            });
        }
    }

    frames
}
