//! Relationship Analysis graph.

use dshield_shared::GraphData;

/// Fixed node/edge set, returned verbatim.
pub struct GraphStore {
    graph: GraphData,
}

impl GraphStore {
    pub fn new(graph: GraphData) -> Self {
        Self { graph }
    }

    pub fn get_graph(&self) -> GraphData {
        self.graph.clone()
    }
}
