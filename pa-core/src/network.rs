use crate::{error::GrowthError, types::NodeId};
use petgraph::{
    graph::{NodeIndex, UnGraph},
    visit::{Bfs, EdgeRef},
};
use std::collections::BTreeMap;

/// Undirected network keyed by caller-assigned [`NodeId`]s.
///
/// A thin wrapper over a petgraph [`UnGraph`]: petgraph owns adjacency,
/// and degrees are always read back from it rather than stored.
#[derive(Debug, Clone, Default)]
pub struct Network {
    graph: UnGraph<NodeId, ()>,
    index: BTreeMap<NodeId, NodeIndex>,
}

impl Network {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            index: BTreeMap::new(),
        }
    }

    /// Adds an isolated node.
    ///
    /// ### Errors
    /// [`GrowthError::DuplicateNode`] if `id` is already present.
    pub fn add_node(&mut self, id: NodeId) -> Result<(), GrowthError> {
        if self.index.contains_key(&id) {
            return Err(GrowthError::DuplicateNode(id));
        }
        let idx = self.graph.add_node(id);
        self.index.insert(id, idx);
        Ok(())
    }

    /// Adds the undirected edge `(a, b)`.
    ///
    /// ### Errors
    /// - [`GrowthError::SelfLoop`] if `a == b`.
    /// - [`GrowthError::UnknownNode`] if either endpoint is missing.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GrowthError> {
        if a == b {
            return Err(GrowthError::SelfLoop(a));
        }
        let ia = self.node_index(a)?;
        let ib = self.node_index(b)?;
        self.graph.add_edge(ia, ib, ());
        Ok(())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of edges incident to `id`, or `None` for an unknown node.
    pub fn degree(&self, id: NodeId) -> Option<usize> {
        self.index
            .get(&id)
            .map(|&idx| self.graph.edges(idx).count())
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Highest node id, or `None` for an empty network.
    pub fn max_id(&self) -> Option<NodeId> {
        self.index.last_key_value().map(|(&id, _)| id)
    }

    /// Node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.index.keys().copied()
    }

    /// `(id, degree)` pairs in ascending id order.
    pub fn degrees(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        self.index
            .iter()
            .map(|(&id, &idx)| (id, self.graph.edges(idx).count()))
    }

    /// Edges as `(a, b)` id pairs in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (self.graph[e.source()], self.graph[e.target()]))
    }

    /// Returns `true` if every node is reachable from the lowest id.
    ///
    /// An empty network counts as connected.
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.index.values().next() else {
            return true;
        };
        let mut bfs = Bfs::new(&self.graph, start);
        let mut seen = 0;
        while bfs.next(&self.graph).is_some() {
            seen += 1;
        }
        seen == self.graph.node_count()
    }

    fn node_index(&self, id: NodeId) -> Result<NodeIndex, GrowthError> {
        self.index
            .get(&id)
            .copied()
            .ok_or(GrowthError::UnknownNode(id))
    }
}
