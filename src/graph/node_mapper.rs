use super::Node;
use fxhash::FxHashMap;

/// Bidirectional mapping between the node ids of a graph and the node ids
/// of a graph derived from it (e.g. an induced subgraph)
#[derive(Clone, Default)]
pub struct NodeMapper {
    new_to_old: FxHashMap<Node, Node>,
    old_to_new: FxHashMap<Node, Node>,
}

impl NodeMapper {
    pub fn with_capacity(n: Node) -> Self {
        Self {
            new_to_old: FxHashMap::with_capacity_and_hasher(n as usize, Default::default()),
            old_to_new: FxHashMap::with_capacity_and_hasher(n as usize, Default::default()),
        }
    }

    /// Stores a mapping old <-> new.
    /// ** Panics if either id is already mapped **
    pub fn map_node_to(&mut self, old: Node, new: Node) {
        let fresh = self.old_to_new.insert(old, new).is_none()
            & self.new_to_old.insert(new, old).is_none();
        assert!(fresh);
    }

    /// If the mapping (old, new) exists, returns Some(new), otherwise None
    pub fn new_id_of(&self, old: Node) -> Option<Node> {
        self.old_to_new.get(&old).copied()
    }

    /// If the mapping (old, new) exists, returns Some(old), otherwise None
    pub fn old_id_of(&self, new: Node) -> Option<Node> {
        self.new_to_old.get(&new).copied()
    }

    /// Returns the number of stored mappings
    pub fn len(&self) -> Node {
        self.new_to_old.len() as Node
    }

    pub fn is_empty(&self) -> bool {
        self.new_to_old.is_empty()
    }
}
