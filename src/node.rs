// node arena of the suffix tree
//
// Nodes live in one Vec and refer to each other by handle. Only the
// parent -> child slots own structure; suffix links and parent handles
// are plain back references.

use crate::alphabet::SIGMA;
use crate::end::EdgeEnd;

pub type NodeId = u32;

/// empty child slot
pub const NIL: NodeId = NodeId::MAX;

pub const ROOT: NodeId = 0;

#[derive(Clone, Debug)]
pub struct Node {
    /// label of the incoming edge is `text[start..end]`
    pub start: usize,
    /// `None` while the edge is open (leaves), read from `EdgeEnd` instead
    pub end: Option<usize>,
    pub parent: NodeId,
    pub link: NodeId,
    /// starting position of the suffix, for leaves only
    pub leaf: Option<usize>,
    /// string depth; only kept for the root and internal nodes
    pub depth: usize,
    pub children: [NodeId; SIGMA],
}

impl Node {
    fn new(start: usize, end: Option<usize>, parent: NodeId, leaf: Option<usize>) -> Node {
        Node {
            start,
            end,
            parent,
            link: ROOT,
            leaf,
            depth: 0,
            children: [NIL; SIGMA],
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.leaf.is_some()
    }

    /// occupied child slots in ascending symbol order
    pub fn child_ids(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.children.iter().copied().filter(|&c| c != NIL)
    }
}

/// Storage for every node of one tree; only the builder mutates it.
///
/// Each node carries a full `[NodeId; SIGMA]` child table, about 400 bytes,
/// and a text of length n needs up to 2n + 1 nodes, so construction costs
/// roughly 800 bytes per text byte.
///
/// ```compile_fail
/// let mut arena = sufrank::node::Arena::new(4);
/// arena.create_leaf(sufrank::node::ROOT, 1, 0, 0);
/// ```
#[derive(Clone, Debug)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    /// arena holding only the root
    pub(crate) fn new(capacity: usize) -> Arena {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Node::new(0, Some(0), ROOT, None));
        Arena { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn child(&self, node: NodeId, sym: u8) -> Option<NodeId> {
        match self.get(node).children[sym as usize] {
            NIL => None,
            c => Some(c),
        }
    }

    pub fn effective_end(&self, node: NodeId, end: &EdgeEnd) -> usize {
        self.get(node).end.unwrap_or_else(|| end.value())
    }

    pub fn edge_len(&self, node: NodeId, end: &EdgeEnd) -> usize {
        self.effective_end(node, end) - self.get(node).start
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = self.nodes.len();
        assert!(id < NIL as usize, "suffix tree exceeds {} nodes", NIL);
        self.nodes.push(node);
        id as NodeId
    }

    fn attach(&mut self, parent: NodeId, sym: u8, child: NodeId) {
        let slot = &mut self.get_mut(parent).children[sym as usize];
        assert!(*slot == NIL, "node {} already has a child on {}", parent, sym);
        *slot = child;
    }

    /// open leaf for the suffix starting at `id`, labelled `text[start..]`
    pub(crate) fn create_leaf(&mut self, parent: NodeId, sym: u8, start: usize, id: usize) -> NodeId {
        assert!(!self.get(parent).is_leaf());
        let leaf = self.push(Node::new(start, None, parent, Some(id)));
        self.attach(parent, sym, leaf);
        leaf
    }

    /// internal node labelled `text[start..end]`
    pub(crate) fn create_internal(&mut self, parent: NodeId, sym: u8, start: usize, end: usize) -> NodeId {
        let depth = self.get(parent).depth + (end - start);
        let mut node = Node::new(start, Some(end), parent, None);
        node.depth = depth;
        let id = self.push(node);
        self.attach(parent, sym, id);
        id
    }

    /// Insert an internal node `at_length` symbols down the edge into
    /// `child`. `child` keeps its subtree and becomes the only child of the
    /// new node, keyed by `next`, the symbol at the split point.
    pub(crate) fn split_edge(&mut self, child: NodeId, at_length: usize, first: u8, next: u8) -> NodeId {
        let (parent, start) = {
            let c = self.get(child);
            (c.parent, c.start)
        };
        assert!(
            self.get(parent).children[first as usize] == child,
            "split of node {} not reachable from its parent",
            child
        );
        self.get_mut(parent).children[first as usize] = NIL;
        let mid = self.create_internal(parent, first, start, start + at_length);
        let c = self.get_mut(child);
        c.start += at_length;
        c.parent = mid;
        self.attach(mid, next, child);
        mid
    }

    /// freeze every open edge at `end`
    pub(crate) fn close(&mut self, end: usize) {
        for node in self.nodes.iter_mut() {
            if node.end.is_none() {
                node.end = Some(end);
            }
        }
    }
}

#[test]
fn test_split_edge_keeps_subtree() {
    let mut end = EdgeEnd::new();
    let mut arena = Arena::new(8);
    for _ in 0..5 {
        end.advance();
    }
    // root -[0..)-> leaf 0, then split it after two symbols
    let leaf = arena.create_leaf(ROOT, 7, 0, 0);
    assert_eq!(arena.edge_len(leaf, &end), 5);
    let mid = arena.split_edge(leaf, 2, 7, 9);
    assert_eq!(arena.child(ROOT, 7), Some(mid));
    assert_eq!(arena.child(mid, 9), Some(leaf));
    assert_eq!(arena.get(mid).depth, 2);
    assert_eq!(arena.edge_len(mid, &end), 2);
    assert_eq!(arena.get(leaf).start, 2);
    assert_eq!(arena.get(leaf).parent, mid);
    assert_eq!(arena.edge_len(leaf, &end), 3);

    // splitting an internal node moves its children along with it
    let other = arena.create_leaf(mid, 3, 4, 1);
    let top = arena.split_edge(mid, 1, 7, 8);
    assert_eq!(arena.child(ROOT, 7), Some(top));
    assert_eq!(arena.child(top, 8), Some(mid));
    assert_eq!(arena.get(mid).depth, 2);
    assert_eq!(arena.get(top).depth, 1);
    assert_eq!(arena.child_ids_of(mid), vec![other, leaf]);
}

#[test]
fn test_close_freezes_leaves() {
    let mut end = EdgeEnd::new();
    let mut arena = Arena::new(2);
    end.advance();
    let leaf = arena.create_leaf(ROOT, 1, 0, 0);
    arena.close(end.value());
    end.advance();
    assert_eq!(arena.edge_len(leaf, &end), 1);
    assert!(!arena.get(ROOT).is_leaf());
}

#[test]
fn test_node_size() {
    // child table dominates the per-node cost
    assert_eq!(std::mem::size_of::<[NodeId; SIGMA]>(), 384);
    assert!(std::mem::size_of::<Node>() < 448);
}

#[test]
#[should_panic]
fn test_attach_twice_panics() {
    let mut arena = Arena::new(3);
    arena.create_leaf(ROOT, 1, 0, 0);
    arena.create_leaf(ROOT, 1, 1, 1);
}

#[cfg(test)]
impl Arena {
    fn child_ids_of(&self, node: NodeId) -> Vec<NodeId> {
        self.get(node).child_ids().collect()
    }
}
