//! Build equipment graph use case.
//!
//! Clusters the catalog's weapons per owning skill and exports a bounded
//! view for the visualization collaborator.

use std::collections::BTreeMap;

use loadout_domain::{Catalog, EquipmentGraph, GraphView};
use serde::Serialize;

use super::AdvisorError;

/// Graph totals plus the exported (possibly truncated) view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphReport {
    pub vertex_count: usize,
    pub edge_count: usize,
    /// Skill label to the item every other weapon of that skill links to.
    pub anchors: BTreeMap<String, String>,
    pub view: GraphView,
}

impl GraphReport {
    pub fn is_truncated(&self) -> bool {
        self.view.nodes.len() < self.vertex_count
    }
}

pub struct BuildEquipmentGraph {
    max_vertices: usize,
}

impl BuildEquipmentGraph {
    pub fn new(max_vertices: usize) -> Self {
        Self { max_vertices }
    }

    pub fn execute(&self, catalog: &Catalog) -> Result<GraphReport, AdvisorError> {
        let graph = EquipmentGraph::from_catalog(catalog)?;

        let anchors = graph
            .vertices()
            .filter_map(|vertex| {
                graph
                    .anchor(vertex.skill())
                    .map(|anchor| (vertex.skill().to_string(), anchor.to_string()))
            })
            .collect();

        let report = GraphReport {
            vertex_count: graph.len(),
            edge_count: graph.edge_count(),
            anchors,
            view: graph.export(self.max_vertices),
        };

        if report.is_truncated() {
            tracing::info!(
                exported = report.view.nodes.len(),
                total = report.vertex_count,
                max_vertices = self.max_vertices,
                "Graph export truncated at vertex cap"
            );
        } else {
            tracing::debug!(
                vertices = report.vertex_count,
                edges = report.edge_count,
                "Built equipment graph"
            );
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use loadout_domain::{CatalogSection, EquipmentCategory, EquipmentRecord};

    use super::*;

    fn item(name: &str) -> EquipmentRecord {
        EquipmentRecord::from_pairs([("Name", name), ("Range", "Mid range")]).unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::new()
            .with_category(
                CatalogSection::Weapons,
                EquipmentCategory::new("Guns - pistols", vec![item("9mm pistol"), item(".357 revolver")]),
            )
            .with_category(
                CatalogSection::Weapons,
                EquipmentCategory::new("Melee weapons - bladed", vec![item("Machete"), item("Knife")]),
            )
            .with_category(
                CatalogSection::Weapons,
                EquipmentCategory::new("Guns - rifles", vec![item("Varmint rifle")]),
            )
            .with_category(
                CatalogSection::Armour,
                EquipmentCategory::new("Light armor", vec![item("Leather armor")]),
            )
    }

    #[test]
    fn when_catalog_has_weapons_then_builds_star_per_skill() {
        let report = BuildEquipmentGraph::new(5000).execute(&catalog()).unwrap();

        assert_eq!(report.vertex_count, 5);
        assert_eq!(report.edge_count, 3);
        assert!(!report.is_truncated());
        assert_eq!(report.anchors.get("Guns").map(String::as_str), Some("9mm pistol"));
        assert_eq!(
            report.anchors.get("Melee weapons").map(String::as_str),
            Some("Machete")
        );
        assert!(report.view.node("Leather armor").is_none());
    }

    #[test]
    fn when_cap_is_small_then_view_is_truncated() {
        let report = BuildEquipmentGraph::new(2).execute(&catalog()).unwrap();

        assert_eq!(report.vertex_count, 5);
        assert!(report.is_truncated());
        assert_eq!(report.view.nodes.len(), 2);
    }

    #[test]
    fn when_catalog_is_empty_then_report_is_empty() {
        let report = BuildEquipmentGraph::new(10).execute(&Catalog::new()).unwrap();

        assert_eq!(report.vertex_count, 0);
        assert!(report.anchors.is_empty());
        assert!(!report.is_truncated());
    }
}
