//! Equipment relationship graph and its visualization export

mod equipment_graph;
mod export;

pub use equipment_graph::{EquipmentGraph, EquipmentVertex, GraphError};
pub use export::{EdgeView, GraphView, NodeView, DEFAULT_MAX_VERTICES};
