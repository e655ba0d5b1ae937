use crate::types::FlowchartGraph;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Tier a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Analysis,
    Legal,
}

#[derive(Debug, Clone)]
struct IndexedNode {
    id: &'static str,
    kind: NodeKind,
}

/// Indexed view over one [`FlowchartGraph`] snapshot.
///
/// Backs the interactive reads the host performs against a snapshot:
/// direct-neighbor lists for detail panels and the two-round neighborhood
/// expansion used to highlight a node's surroundings.
pub struct FlowchartIndex {
    graph: DiGraph<IndexedNode, ()>,
    id_index: HashMap<&'static str, NodeIndex>,
}

impl FlowchartIndex {
    /// Build the index from a snapshot. Connections whose endpoints are not
    /// in the snapshot are skipped (cannot occur for assembler output).
    pub fn from_graph(snapshot: &FlowchartGraph) -> Self {
        let mut graph = DiGraph::new();
        let mut id_index = HashMap::new();

        let add = |graph: &mut DiGraph<IndexedNode, ()>,
                   id_index: &mut HashMap<&'static str, NodeIndex>,
                   id: &'static str,
                   kind: NodeKind| {
            let idx = graph.add_node(IndexedNode { id, kind });
            id_index.insert(id, idx);
        };

        for doc in &snapshot.documents {
            add(&mut graph, &mut id_index, doc.id, NodeKind::Document);
        }
        for analysis in &snapshot.analyses {
            add(&mut graph, &mut id_index, analysis.id, NodeKind::Analysis);
        }
        for legal in &snapshot.legal_texts {
            add(&mut graph, &mut id_index, legal.id, NodeKind::Legal);
        }

        for conn in &snapshot.connections {
            if let (Some(&from), Some(&to)) = (id_index.get(conn.from), id_index.get(conn.to)) {
                graph.add_edge(from, to, ());
            }
        }

        Self { graph, id_index }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.id_index.contains_key(id)
    }

    pub fn node_kind(&self, id: &str) -> Option<NodeKind> {
        let idx = self.id_index.get(id)?;
        self.graph.node_weight(*idx).map(|node| node.kind)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Direct neighbors of a node, in either edge direction.
    pub fn connected_ids(&self, id: &str) -> BTreeSet<&'static str> {
        let Some(&idx) = self.id_index.get(id) else {
            return BTreeSet::new();
        };
        self.graph
            .neighbors_undirected(idx)
            .filter_map(|n| self.graph.node_weight(n))
            .map(|node| node.id)
            .collect()
    }

    /// Nodes to highlight when `focus` is hovered or selected.
    ///
    /// Starts from the focus, adds both endpoints of every connection
    /// touching the set, then expands once more from that first ring. The
    /// result always contains the focus id, even when it is not part of the
    /// snapshot.
    pub fn highlight_set(&self, focus: &str) -> BTreeSet<String> {
        let mut out: BTreeSet<String> = BTreeSet::new();
        out.insert(focus.to_string());

        let Some(&focus_idx) = self.id_index.get(focus) else {
            return out;
        };

        let mut ring: HashSet<NodeIndex> = HashSet::from([focus_idx]);
        for edge in self.graph.edge_references() {
            if edge.source() == focus_idx || edge.target() == focus_idx {
                ring.insert(edge.source());
                ring.insert(edge.target());
            }
        }

        let first_ring = ring.clone();
        for edge in self.graph.edge_references() {
            if first_ring.contains(&edge.source()) || first_ring.contains(&edge.target()) {
                ring.insert(edge.source());
                ring.insert(edge.target());
            }
        }

        out.extend(
            ring.into_iter()
                .filter_map(|idx| self.graph.node_weight(idx))
                .map(|node| node.id.to_string()),
        );
        out
    }
}
