use super::*;

/// Materializes vertex-induced subgraphs
pub trait InducedSubgraph: Sized {
    /// Returns a new graph containing the given vertices (node i of the
    /// result is `vertices[i]` of self) and exactly those edges of self
    /// with both endpoints among them, together with the old-id/new-id
    /// mapping between the two graphs.
    fn vertex_induced(&self, vertices: &[Node]) -> (Self, NodeMapper);
}

impl<G: GraphNew + GraphEdgeEditing + AdjacencyList> InducedSubgraph for G {
    fn vertex_induced(&self, vertices: &[Node]) -> (Self, NodeMapper) {
        let mut mapping = NodeMapper::with_capacity(vertices.len() as Node);
        for (new, &old) in vertices.iter().enumerate() {
            mapping.map_node_to(old, new as Node);
        }

        let mut result = G::new(vertices.len());
        for (new_u, &old_u) in vertices.iter().enumerate() {
            for new_v in self
                .out_neighbors(old_u)
                .filter_map(|v| mapping.new_id_of(v))
            {
                result.add_edge(new_u as Node, new_v);
            }
        }

        (result, mapping)
    }
}
