//! Equipment relationship graph
//!
//! Undirected graph keyed by item name. Vertices keep insertion order, are
//! never removed, and a second insertion of the same name is ignored.
//!
//! [`EquipmentGraph::from_catalog`] clusters weapons by owning skill as a star:
//! the first weapon seen for a skill is its anchor and every later weapon of
//! that skill links to the anchor only, giving `k - 1` edges for `k` items.

use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

use crate::entities::{Catalog, RANGE_ATTRIBUTE};
use crate::value_objects::EffectiveRange;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge referenced an item that is not in the graph.
    #[error("Invalid reference: item '{identity}' is not in the graph")]
    InvalidReference { identity: String },
}

/// One item in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentVertex {
    identity: String,
    kind: String,
    skill: String,
    effective_ranges: Vec<EffectiveRange>,
    /// Indices into the graph's vertex list, ordered by insertion.
    neighbours: BTreeSet<usize>,
}

impl EquipmentVertex {
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Raw category label the item was loaded under.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Normalized owning-skill label.
    pub fn skill(&self) -> &str {
        &self.skill
    }

    pub fn effective_ranges(&self) -> &[EffectiveRange] {
        &self.effective_ranges
    }

    pub fn degree(&self) -> usize {
        self.neighbours.len()
    }

    pub(super) fn neighbour_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.neighbours.iter().copied()
    }
}

#[derive(Debug, Clone, Default)]
pub struct EquipmentGraph {
    vertices: Vec<EquipmentVertex>,
    index: HashMap<String, usize>,
    anchors: HashMap<String, usize>,
}

impl EquipmentGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the weapon graph from a catalog.
    pub fn from_catalog(catalog: &Catalog) -> Result<Self, GraphError> {
        let mut graph = Self::new();

        for category in catalog.weapons() {
            for record in category.records() {
                let ranges = record
                    .get(RANGE_ATTRIBUTE)
                    .map(EffectiveRange::parse_list)
                    .unwrap_or_default();

                graph.add_vertex(record.name(), category.label(), ranges, category.skill());

                let idx = graph.index_of(record.name())?;
                let anchor = *graph
                    .anchors
                    .entry(category.skill().to_string())
                    .or_insert(idx);

                if anchor != idx {
                    let anchor_identity = graph.vertices[anchor].identity.clone();
                    graph.add_edge(record.name(), &anchor_identity)?;
                }
            }
        }

        Ok(graph)
    }

    /// Insert a vertex unless the identity already exists.
    ///
    /// Returns `false` when the identity was already present; the existing
    /// vertex, its metadata and its edges are left untouched.
    pub fn add_vertex(
        &mut self,
        identity: impl Into<String>,
        kind: impl Into<String>,
        ranges: Vec<EffectiveRange>,
        skill: impl Into<String>,
    ) -> bool {
        let identity = identity.into();
        if self.index.contains_key(&identity) {
            return false;
        }

        let idx = self.vertices.len();
        self.index.insert(identity.clone(), idx);
        self.vertices.push(EquipmentVertex {
            identity,
            kind: kind.into(),
            skill: skill.into(),
            effective_ranges: ranges,
            neighbours: BTreeSet::new(),
        });
        true
    }

    /// Link two existing vertices in both directions.
    pub fn add_edge(&mut self, a: &str, b: &str) -> Result<(), GraphError> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;

        self.vertices[ia].neighbours.insert(ib);
        self.vertices[ib].neighbours.insert(ia);
        Ok(())
    }

    fn index_of(&self, identity: &str) -> Result<usize, GraphError> {
        self.index
            .get(identity)
            .copied()
            .ok_or_else(|| GraphError::InvalidReference {
                identity: identity.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.index.contains_key(identity)
    }

    pub fn vertex(&self, identity: &str) -> Option<&EquipmentVertex> {
        self.index.get(identity).map(|&idx| &self.vertices[idx])
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &EquipmentVertex> + '_ {
        self.vertices.iter()
    }

    pub(super) fn vertex_at(&self, idx: usize) -> &EquipmentVertex {
        &self.vertices[idx]
    }

    /// Neighbour identities of a vertex, `None` if it is not in the graph.
    pub fn neighbours(&self, identity: &str) -> Option<Vec<&str>> {
        self.vertex(identity).map(|v| {
            v.neighbour_indices()
                .map(|idx| self.vertices[idx].identity.as_str())
                .collect()
        })
    }

    pub fn degree(&self, identity: &str) -> Option<usize> {
        self.vertex(identity).map(EquipmentVertex::degree)
    }

    /// Number of undirected edges, counting a self-loop once.
    pub fn edge_count(&self) -> usize {
        let (loops, links) = self.vertices.iter().enumerate().fold(
            (0, 0),
            |(loops, links), (idx, v)| {
                let has_loop = v.neighbours.contains(&idx);
                (
                    loops + usize::from(has_loop),
                    links + v.neighbours.len() - usize::from(has_loop),
                )
            },
        );
        loops + links / 2
    }

    /// Anchor item of a skill cluster, when built with [`Self::from_catalog`].
    pub fn anchor(&self, skill: &str) -> Option<&str> {
        self.anchors
            .get(skill)
            .map(|&idx| self.vertices[idx].identity.as_str())
    }
}
