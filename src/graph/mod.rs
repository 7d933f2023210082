pub mod adj_array;
pub mod connectivity;
pub mod io;
pub mod node_mapper;
pub mod subgraph;
pub mod traversal;

use std::ops::Range;

pub type Node = u32;
pub type Edge = (Node, Node);

pub use adj_array::{AdjArray, AdjArrayIn};
pub use connectivity::Connectivity;
pub use node_mapper::NodeMapper;
pub use subgraph::InducedSubgraph;
pub use traversal::{TopoSearch, Traversal};

/// Provides getters pertaining to the size of a graph
pub trait GraphOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> Node;

    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> usize;

    /// Returns the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V in ascending id order
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }
}

/// Provides basic read-only functionality associated with an adjacency list
pub trait AdjacencyList: GraphOrder {
    type Iter<'a>: Iterator<Item = Node>
    where
        Self: 'a;

    /// Returns an iterator over the outgoing neighbors of a given vertex.
    /// The enumeration order is fixed for a given construction sequence.
    /// ** Panics if u >= n **
    fn out_neighbors(&self, u: Node) -> Self::Iter<'_>;

    /// Returns the number of outgoing edges of *u*
    fn out_degree(&self, u: Node) -> Node;

    /// Returns a vector of all edges in the graph
    fn edges(&self) -> Vec<Edge> {
        self.vertices()
            .flat_map(|u| self.out_neighbors(u).map(move |v| (u, v)))
            .collect()
    }
}

/// Read access to the incoming edges of every vertex
pub trait AdjacencyListIn: AdjacencyList {
    type IterIn<'a>: Iterator<Item = Node>
    where
        Self: 'a;

    fn in_neighbors(&self, u: Node) -> Self::IterIn<'_>;

    fn in_degree(&self, u: Node) -> Node;
}

/// Provides efficient tests whether an edge exists
pub trait AdjacencyTest {
    /// Returns *true* exactly if the graph contains the directed edge (u, v)
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Provides a constructor for a graph of isolated nodes
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: usize) -> Self;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the directed edge *(u,v)* to the graph and returns true. Inserting
    /// an edge that is already present is a no-op returning false; self-loops
    /// are ordinary edges.
    /// ** Panics if u, v >= n **
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool;

    /// Adds the directed edge *(u,v)* unless it is already present
    fn add_edge(&mut self, u: Node, v: Node) {
        self.try_add_edge(u, v);
    }

    /// Removes all edges into node u, i.e. post-condition the in-degree is 0
    fn remove_edges_into_node(&mut self, u: Node);

    /// Removes all edges out of node u, i.e. post-condition the out-degree is 0
    fn remove_edges_out_of_node(&mut self, u: Node);

    /// Removes all edges into and out of node u
    fn remove_edges_at_node(&mut self, u: Node) {
        self.remove_edges_into_node(u);
        self.remove_edges_out_of_node(u);
    }
}

mod graph_macros {
    macro_rules! impl_helper_graph_from_edges {
        ($t:ident) => {
            impl<'a, T: IntoIterator<Item = &'a Edge> + Clone> From<T> for $t {
                fn from(edges: T) -> Self {
                    let n = edges
                        .clone()
                        .into_iter()
                        .map(|e| e.0.max(e.1) + 1)
                        .max()
                        .unwrap_or(0);
                    let mut graph = Self::new(n as usize);
                    for e in edges {
                        graph.add_edge(e.0, e.1);
                    }
                    graph
                }
            }
        };
    }

    pub(crate) use impl_helper_graph_from_edges;
}
