//! Bounded node/edge export for visualization
//!
//! The walk follows vertex insertion order and stops adding nodes once the cap
//! is reached, so large graphs yield a partial, order-dependent subset.

use serde::Serialize;
use std::collections::HashSet;

use super::equipment_graph::{EquipmentGraph, EquipmentVertex};

/// Default node cap used by the visualization collaborator.
pub const DEFAULT_MAX_VERTICES: usize = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeView {
    pub identity: String,
    pub kind: String,
    pub skill: String,
    pub effective_ranges: Vec<String>,
}

impl NodeView {
    fn from_vertex(vertex: &EquipmentVertex) -> Self {
        Self {
            identity: vertex.identity().to_string(),
            kind: vertex.kind().to_string(),
            skill: vertex.skill().to_string(),
            effective_ranges: vertex
                .effective_ranges()
                .iter()
                .map(|r| r.label().to_string())
                .collect(),
        }
    }

    /// Ranges joined for hover text, e.g. `"Close range, Mid range"`.
    pub fn ranges_label(&self) -> String {
        self.effective_ranges.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeView {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphView {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}

impl GraphView {
    pub fn node(&self, identity: &str) -> Option<&NodeView> {
        self.nodes.iter().find(|n| n.identity == identity)
    }
}

impl EquipmentGraph {
    /// Export at most `max_vertices` nodes plus the edges among them.
    ///
    /// For each vertex in insertion order: include it, then include each
    /// neighbour while the cap allows, and emit an edge to every neighbour
    /// already included. The cap is checked before each vertex, so the walk
    /// ends once it is reached and `max_vertices == 0` exports nothing.
    pub fn export(&self, max_vertices: usize) -> GraphView {
        let mut view = GraphView::default();
        let mut included: HashSet<usize> = HashSet::new();
        let mut emitted: HashSet<(usize, usize)> = HashSet::new();

        for (idx, vertex) in self.vertices().enumerate() {
            if view.nodes.len() >= max_vertices {
                break;
            }
            self.include(idx, &mut included, &mut view);

            for neighbour in vertex.neighbour_indices() {
                if view.nodes.len() < max_vertices {
                    self.include(neighbour, &mut included, &mut view);
                }
                if !included.contains(&neighbour) {
                    continue;
                }
                let key = (idx.min(neighbour), idx.max(neighbour));
                if emitted.insert(key) {
                    view.edges.push(EdgeView {
                        source: vertex.identity().to_string(),
                        target: self.vertex_at(neighbour).identity().to_string(),
                    });
                }
            }
        }

        view
    }

    fn include(&self, idx: usize, included: &mut HashSet<usize>, view: &mut GraphView) {
        if included.insert(idx) {
            view.nodes.push(NodeView::from_vertex(self.vertex_at(idx)));
        }
    }
}
