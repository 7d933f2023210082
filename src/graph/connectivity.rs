use super::*;
use std::cmp::min;

pub trait Connectivity: AdjacencyList + Sized {
    /// Returns the strongly connected components of the graph as a Vec<Vec<Node>>
    fn strongly_connected_components(&self) -> Vec<Vec<Node>> {
        let sc = StronglyConnected::new(self);
        sc.find()
    }

    /// Returns the strongly connected components of the graph as a Vec<Vec<Node>>.
    /// In contrast to [`Connectivity::strongly_connected_components`], this
    /// method includes SCCs of size 1 if and only if the node has a self-loop
    fn strongly_connected_components_no_singletons(&self) -> Vec<Vec<Node>> {
        let mut sc = StronglyConnected::new(self);
        sc.set_include_singletons(false);
        sc.find()
    }

    /// Returns one induced subgraph per SCC, each containing exactly the
    /// vertices of that SCC and the edges of self between them. Edges
    /// between different SCCs appear in no subgraph.
    fn scc_subgraphs(&self) -> Vec<(Self, NodeMapper)>
    where
        Self: GraphNew + GraphEdgeEditing,
    {
        self.strongly_connected_components()
            .iter()
            .map(|component| self.vertex_induced(component))
            .collect()
    }

    /// Same as [`Connectivity::scc_subgraphs`] but skips trivial SCCs,
    /// i.e. single vertices without a self-loop. Every returned subgraph
    /// contains at least one cycle.
    fn cyclic_scc_subgraphs(&self) -> Vec<(Self, NodeMapper)>
    where
        Self: GraphNew + GraphEdgeEditing,
    {
        self.strongly_connected_components_no_singletons()
            .iter()
            .map(|component| self.vertex_induced(component))
            .collect()
    }
}

impl<T: AdjacencyList + Sized> Connectivity for T {}

/// Tarjan's algorithm over an adjacency list
pub struct StronglyConnected<'a, T: AdjacencyList> {
    graph: &'a T,
    idx: Node,
    stack: Vec<Node>,
    on_stack: Vec<bool>,
    indices: Vec<Option<Node>>,
    low_links: Vec<Node>,
    components: Vec<Vec<Node>>,
    include_singletons: bool,
}

impl<'a, T: AdjacencyList> StronglyConnected<'a, T> {
    pub fn new(graph: &'a T) -> Self {
        Self {
            graph,
            idx: 0,
            stack: Vec::with_capacity(graph.len()),
            on_stack: vec![false; graph.len()],
            indices: vec![None; graph.len()],
            low_links: vec![0; graph.len()],
            components: vec![],
            include_singletons: true,
        }
    }

    pub fn set_include_singletons(&mut self, include: bool) {
        self.include_singletons = include;
    }

    pub fn find(mut self) -> Vec<Vec<Node>> {
        for v in self.graph.vertices() {
            if self.indices[v as usize].is_none() {
                self.sc(v);
            }
        }

        debug_assert!(self.stack.is_empty());

        self.components
    }

    fn sc(&mut self, v: Node) {
        self.indices[v as usize] = Some(self.idx);
        self.low_links[v as usize] = self.idx;
        self.idx += 1;

        self.stack.push(v);
        self.on_stack[v as usize] = true;

        let mut self_loop = false;

        for w in self.graph.out_neighbors(v) {
            self_loop |= w == v;

            if self.indices[w as usize].is_none() {
                self.sc(w);
                self.low_links[v as usize] =
                    min(self.low_links[v as usize], self.low_links[w as usize]);
            } else if self.on_stack[w as usize] {
                self.low_links[v as usize] = min(
                    self.low_links[v as usize],
                    self.indices[w as usize].unwrap(),
                );
            }
        }

        if self.low_links[v as usize] == self.indices[v as usize].unwrap() {
            if !self.include_singletons && self.stack.last() == Some(&v) && !self_loop {
                // drop the singleton component, but still undo the stack
                self.pop();
            } else {
                let mut component = vec![];
                loop {
                    let w = self.pop();
                    component.push(w);
                    if w == v {
                        break;
                    }
                }
                self.components.push(component);
            }
        }
    }

    fn pop(&mut self) -> Node {
        let w = self.stack.pop().unwrap();
        self.on_stack[w as usize] = false;
        w
    }
}
