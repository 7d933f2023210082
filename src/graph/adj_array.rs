use super::graph_macros::impl_helper_graph_from_edges;
use super::*;
use std::fmt;

/// A directed graph stored as one out-neighbor array per vertex.
/// Self-loops are supported, parallel edges are not.
#[derive(Clone)]
pub struct AdjArray {
    m: usize,
    pub(super) out_neighbors: Vec<Vec<Node>>,
}

/// Same as AdjArray, but additionally stores the in-neighbors of every vertex
#[derive(Clone)]
pub struct AdjArrayIn {
    in_neighbors: Vec<Vec<Node>>,
    adj: AdjArray,
}

impl_helper_graph_from_edges!(AdjArray);
impl_helper_graph_from_edges!(AdjArrayIn);

impl GraphOrder for AdjArray {
    fn number_of_nodes(&self) -> Node {
        self.out_neighbors.len() as Node
    }

    fn number_of_edges(&self) -> usize {
        self.m
    }
}

impl AdjacencyList for AdjArray {
    type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, Node>> where Self: 'a;

    fn out_neighbors(&self, u: Node) -> Self::Iter<'_> {
        self.out_neighbors[u as usize].iter().copied()
    }

    fn out_degree(&self, u: Node) -> Node {
        self.out_neighbors[u as usize].len() as Node
    }
}

impl AdjacencyTest for AdjArray {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.out_neighbors[u as usize].contains(&v)
    }
}

impl GraphNew for AdjArray {
    fn new(n: usize) -> Self {
        Self {
            m: 0,
            out_neighbors: vec![Vec::new(); n],
        }
    }
}

fn try_remove_helper(nb: &mut Vec<Node>, v: Node) -> bool {
    if let Some(i) = nb.iter().position(|&x| x == v) {
        nb.swap_remove(i);
        true
    } else {
        false
    }
}

impl GraphEdgeEditing for AdjArray {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        assert!((v as usize) < self.out_neighbors.len());
        if self.has_edge(u, v) {
            return false;
        }
        self.out_neighbors[u as usize].push(v);
        self.m += 1;
        true
    }

    fn remove_edges_into_node(&mut self, u: Node) {
        for v in 0..self.out_neighbors.len() {
            if try_remove_helper(&mut self.out_neighbors[v], u) {
                self.m -= 1;
            }
        }
    }

    fn remove_edges_out_of_node(&mut self, u: Node) {
        self.m -= self.out_neighbors[u as usize].len();
        self.out_neighbors[u as usize].clear();
    }
}

impl GraphOrder for AdjArrayIn {
    fn number_of_nodes(&self) -> Node {
        self.adj.number_of_nodes()
    }

    fn number_of_edges(&self) -> usize {
        self.adj.number_of_edges()
    }
}

impl AdjacencyList for AdjArrayIn {
    type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, Node>> where Self: 'a;

    fn out_neighbors(&self, u: Node) -> Self::Iter<'_> {
        self.adj.out_neighbors(u)
    }

    fn out_degree(&self, u: Node) -> Node {
        self.adj.out_degree(u)
    }
}

impl AdjacencyListIn for AdjArrayIn {
    type IterIn<'a> = std::iter::Copied<std::slice::Iter<'a, Node>> where Self: 'a;

    fn in_neighbors(&self, u: Node) -> Self::IterIn<'_> {
        self.in_neighbors[u as usize].iter().copied()
    }

    fn in_degree(&self, u: Node) -> Node {
        self.in_neighbors[u as usize].len() as Node
    }
}

impl AdjacencyTest for AdjArrayIn {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.adj.has_edge(u, v)
    }
}

impl GraphNew for AdjArrayIn {
    fn new(n: usize) -> Self {
        Self {
            adj: AdjArray::new(n),
            in_neighbors: vec![Vec::new(); n],
        }
    }
}

impl GraphEdgeEditing for AdjArrayIn {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if self.adj.try_add_edge(u, v) {
            self.in_neighbors[v as usize].push(u);
            true
        } else {
            false
        }
    }

    fn remove_edges_into_node(&mut self, u: Node) {
        for &v in &self.in_neighbors[u as usize] {
            try_remove_helper(&mut self.adj.out_neighbors[v as usize], u);
        }
        self.adj.m -= self.in_neighbors[u as usize].len();
        self.in_neighbors[u as usize].clear();
    }

    fn remove_edges_out_of_node(&mut self, u: Node) {
        for &v in &self.adj.out_neighbors[u as usize] {
            try_remove_helper(&mut self.in_neighbors[v as usize], u);
        }
        self.adj.m -= self.adj.out_neighbors[u as usize].len();
        self.adj.out_neighbors[u as usize].clear();
    }
}

impl fmt::Debug for AdjArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AdjArray {{ n: {}, m: {}, edges: {:?} }}",
            self.number_of_nodes(),
            self.number_of_edges(),
            self.edges()
        )
    }
}

impl fmt::Debug for AdjArrayIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AdjArrayIn {{ n: {}, m: {}, edges: {:?} }}",
            self.number_of_nodes(),
            self.number_of_edges(),
            self.edges()
        )
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn graph_edges() {
        let mut edges = vec![(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)];
        let graph = AdjArray::from(&edges);
        assert_eq!(graph.number_of_nodes(), 6);
        assert_eq!(graph.number_of_edges(), edges.len());
        let mut ret_edges = graph.edges();

        edges.sort_unstable();
        ret_edges.sort_unstable();

        assert_eq!(edges, ret_edges);
    }

    #[test]
    fn graph_edges_in() {
        let mut edges = vec![(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)];
        let graph = AdjArrayIn::from(&edges);
        assert_eq!(graph.number_of_nodes(), 6);
        assert_eq!(graph.number_of_edges(), edges.len());
        let mut ret_edges = graph.edges();

        edges.sort_unstable();
        ret_edges.sort_unstable();

        assert_eq!(edges, ret_edges);

        assert_eq!(graph.in_degree(4), 2);
        let mut in_nb: Vec<_> = graph.in_neighbors(4).collect();
        in_nb.sort_unstable();
        assert_eq!(in_nb, vec![2, 5]);
    }

    #[test]
    fn add_edge_is_idempotent() {
        let mut graph = AdjArrayIn::new(3);
        assert!(graph.try_add_edge(0, 1));
        assert!(!graph.try_add_edge(0, 1));
        graph.add_edge(0, 1);
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.out_degree(0), 1);
        assert_eq!(graph.in_degree(1), 1);
    }

    #[test]
    fn self_loop() {
        let mut graph = AdjArrayIn::new(2);
        graph.add_edge(0, 0);
        graph.add_edge(0, 1);
        assert_eq!(graph.number_of_edges(), 2);
        assert!(graph.has_edge(0, 0));
        assert_eq!(graph.out_degree(0), 2);
        assert_eq!(graph.in_degree(0), 1);

        graph.remove_edges_at_node(0);
        assert_eq!(graph.number_of_edges(), 0);
        assert!(!graph.has_edge(0, 0));
        assert!(!graph.has_edge(0, 1));
        assert_eq!(graph.in_degree(0), 0);
        assert_eq!(graph.out_degree(0), 0);
    }

    #[test]
    #[should_panic]
    fn add_edge_out_of_range() {
        let mut graph = AdjArray::new(3);
        graph.add_edge(0, 3);
    }

    #[test]
    fn test_remove_edges() {
        let org_graph = AdjArrayIn::from(&[(0, 3), (1, 3), (2, 3), (3, 4), (3, 5)]);

        // no changes
        {
            let mut graph = org_graph.clone();

            graph.remove_edges_into_node(0);
            assert_eq!(graph.edges(), org_graph.edges());

            graph.remove_edges_out_of_node(4);
            assert_eq!(graph.edges(), org_graph.edges());
        }

        // remove out
        {
            let mut graph = org_graph.clone();

            graph.remove_edges_out_of_node(3);
            assert_eq!(
                graph.number_of_edges(),
                org_graph.number_of_edges() - org_graph.out_degree(3) as usize
            );
            for (u, _v) in graph.edges() {
                assert_ne!(u, 3);
            }
        }

        // remove in
        {
            let mut graph = org_graph.clone();

            graph.remove_edges_into_node(3);
            assert_eq!(
                graph.number_of_edges(),
                org_graph.number_of_edges() - org_graph.in_degree(3) as usize
            );
            for (_u, v) in graph.edges() {
                assert_ne!(v, 3);
            }
        }

        // remove both
        {
            let mut graph = org_graph.clone();

            graph.remove_edges_at_node(3);
            assert_eq!(graph.number_of_edges(), 0);
        }
    }
}
