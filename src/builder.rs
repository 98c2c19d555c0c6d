// Ukkonen's online suffix tree construction
//
// Phase i appends text[i]. Suffixes 0..j already end in leaves, which grow
// for free through the shared EdgeEnd (rule 1). Extensions j..=i are
// inserted one by one starting from the active node until one of them finds
// text[i] already present (rule 3) and the phase stops early.

use tracing::debug;

use crate::alphabet;
use crate::end::EdgeEnd;
use crate::error::Result;
use crate::node::{Arena, Node, NodeId, ROOT};

/// A closed suffix tree over a text and its terminator.
#[derive(Clone, Debug)]
pub struct SuffixTree {
    text: Vec<u8>,
    arena: Arena,
}

impl SuffixTree {
    /// Encode `text`, append the terminator and build the tree.
    /// Fails before any node is created if a byte is outside the alphabet.
    pub fn new(text: &[u8]) -> Result<SuffixTree> {
        let codes = alphabet::encode_text(text)?;
        Ok(SuffixTree::from_codes(codes))
    }

    /// `codes` must be alphabet codes ending with the terminator and not
    /// containing it elsewhere.
    pub fn from_codes(codes: Vec<u8>) -> SuffixTree {
        assert!(
            codes.last() == Some(&alphabet::TERMINATOR)
                && !codes[..codes.len() - 1].contains(&alphabet::TERMINATOR),
            "text must end with its only terminator"
        );
        assert!(
            codes.iter().all(|&c| (c as usize) < alphabet::SIGMA),
            "text holds codes outside the alphabet"
        );
        let mut builder = Builder::new(&codes);
        for i in 0..codes.len() {
            builder.phase(i);
        }
        let arena = builder.finish();
        SuffixTree { text: codes, arena }
    }

    /// length of the text, terminator excluded
    pub fn len(&self) -> usize {
        self.text.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// encoded text, terminator included
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.arena.iter().filter(|n| n.is_leaf()).count()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        self.arena.get(id)
    }

    pub fn root(&self) -> &Node {
        self.arena.get(ROOT)
    }

    /// edge label of `id` as encoded symbols
    pub fn label(&self, id: NodeId) -> &[u8] {
        let node = self.arena.get(id);
        // closed tree: every end is set
        let end = node.end.unwrap_or(self.text.len());
        &self.text[node.start..end]
    }
}

/// Build the suffix tree of `text`.
#[tracing::instrument(skip_all, fields(len = text.len()))]
pub fn build(text: &[u8]) -> Result<SuffixTree> {
    let tree = SuffixTree::new(text)?;
    debug!(
        nodes = tree.node_count(),
        leaves = tree.leaf_count(),
        "suffix tree built"
    );
    Ok(tree)
}

struct Builder<'a> {
    text: &'a [u8],
    arena: Arena,
    end: EdgeEnd,
    active: NodeId,
    // first suffix without a leaf
    j: usize,
}

impl<'a> Builder<'a> {
    fn new(text: &'a [u8]) -> Builder<'a> {
        Builder {
            text,
            // at most n + 1 leaves and n internal nodes besides the root
            arena: Arena::new(2 * text.len()),
            end: EdgeEnd::new(),
            active: ROOT,
            j: 0,
        }
    }

    fn phase(&mut self, i: usize) {
        self.end.advance();
        let c = self.text[i];
        // newest internal node whose suffix link is still unresolved
        let mut pending: Option<NodeId> = None;

        while self.j <= i {
            let (node, len) = self.walk_down(i);
            if len == 0 {
                if let Some(v) = pending.take() {
                    self.arena.get_mut(v).link = node;
                }
                if self.arena.child(node, c).is_some() {
                    // rule 3
                    break;
                }
                // rule 2
                self.arena.create_leaf(node, c, i, self.j);
            } else {
                let first = self.text[i - len];
                let child = self.child_on_path(node, first);
                let next = self.text[self.arena.get(child).start + len];
                if next == c {
                    // rule 3, inside an edge
                    break;
                }
                // rule 2 with split
                let mid = self.arena.split_edge(child, len, first, next);
                self.arena.create_leaf(mid, c, i, self.j);
                if let Some(v) = pending {
                    self.arena.get_mut(v).link = mid;
                }
                pending = Some(mid);
            }
            self.j += 1;
            self.active = self.arena.get(node).link;
        }
    }

    /// Skip/count walk from the active node towards the end of the path
    /// `text[j..i]`, hopping whole edges. Returns the deepest node reached,
    /// which becomes the active node, and the length still to go.
    fn walk_down(&mut self, i: usize) -> (NodeId, usize) {
        let mut node = self.active;
        // at the root this is i - j
        let mut len = i - self.j - self.arena.get(node).depth;
        while len > 0 {
            let child = self.child_on_path(node, self.text[i - len]);
            let edge = self.arena.edge_len(child, &self.end);
            if len < edge {
                break;
            }
            debug_assert!(!self.arena.get(child).is_leaf());
            node = child;
            len -= edge;
        }
        self.active = node;
        (node, len)
    }

    fn child_on_path(&self, node: NodeId, sym: u8) -> NodeId {
        match self.arena.child(node, sym) {
            Some(c) => c,
            None => panic!(
                "active point left the tree: node {} has no child on {}",
                node, sym
            ),
        }
    }

    fn finish(mut self) -> Arena {
        assert_eq!(self.j, self.text.len(), "suffixes left without a leaf");
        self.arena.close(self.end.value());
        self.arena
    }
}

#[cfg(test)]
fn tree_of(s: &str) -> SuffixTree {
    build(s.as_bytes()).unwrap()
}

// spell out the path label from the root down to `id`
#[cfg(test)]
fn path_label(tree: &SuffixTree, id: NodeId) -> Vec<u8> {
    let mut parts = Vec::new();
    let mut cur = id;
    while cur != ROOT {
        parts.push(tree.label(cur).to_vec());
        cur = tree.node(cur).parent;
    }
    parts.into_iter().rev().flatten().collect()
}

#[cfg(test)]
fn check_structure(tree: &SuffixTree) {
    let n = tree.len();
    assert_eq!(tree.leaf_count(), n + 1);
    assert!(!tree.root().is_leaf());
    assert_eq!(tree.root().link, ROOT);
    for id in 0..tree.node_count() as NodeId {
        let node = tree.node(id);
        if let Some(pos) = node.leaf {
            // a leaf spells out exactly its suffix
            assert_eq!(path_label(tree, id), tree.text()[pos..].to_vec());
            continue;
        }
        if id != ROOT {
            assert!(node.child_ids().count() >= 2, "node {} does not branch", id);
            let label = path_label(tree, id);
            assert_eq!(label.len(), node.depth);
            assert_eq!(path_label(tree, node.link), label[1..].to_vec());
        }
        for (sym, &c) in node.children.iter().enumerate() {
            if c != crate::node::NIL {
                assert_eq!(tree.label(c)[0] as usize, sym);
                assert_eq!(tree.node(c).parent, id);
            }
        }
    }
}

#[test]
fn test_banana_structure() {
    let tree = tree_of("banana");
    assert_eq!(tree.len(), 6);
    check_structure(&tree);
    // root, 7 leaves, internal nodes for "a", "ana", "na"
    assert_eq!(tree.node_count(), 11);
}

#[test]
fn test_empty_text() {
    let tree = tree_of("");
    assert!(tree.is_empty());
    assert_eq!(tree.node_count(), 2);
    check_structure(&tree);
}

#[test]
fn test_repetitive_texts_structure() {
    for s in ["aaaa", "abab", "mississippi", "abcabxabcd", "xabxac", "dedododeeodo"] {
        check_structure(&tree_of(s));
    }
    for k in 0..8 {
        check_structure(&SuffixTree::new(&crate::words::fibonacci(k)).unwrap());
        check_structure(&SuffixTree::new(&crate::words::thue_morse(k)).unwrap());
        check_structure(&SuffixTree::new(&crate::words::period_doubling(k)).unwrap());
    }
}

#[test]
fn test_all_binary_strings_structure() {
    for len in 0..=7 {
        for s in crate::words::enumerate_all(b"ab", len) {
            check_structure(&SuffixTree::new(&s).unwrap());
        }
    }
}

#[test]
fn test_unsupported_symbol() {
    use crate::error::Error;
    assert_eq!(
        build(b"ban\tana").unwrap_err(),
        Error::UnsupportedSymbol {
            symbol: b'\t',
            position: 3
        }
    );
    assert!(build("caf\u{e9}".as_bytes()).is_err());
}

#[test]
fn test_dollar_is_ordinary_text() {
    // the terminator is not a byte, so '$' inside the text is fine
    check_structure(&tree_of("a$b$a$"));
}

#[test]
#[should_panic(expected = "text must end with its only terminator")]
fn test_from_codes_requires_terminator() {
    SuffixTree::from_codes(vec![3, 4, 5]);
}

#[test]
#[should_panic(expected = "text holds codes outside the alphabet")]
fn test_from_codes_rejects_large_codes() {
    SuffixTree::from_codes(vec![3, alphabet::SIGMA as u8, alphabet::TERMINATOR]);
}

#[test]
fn test_from_codes_matches_new() {
    let codes = alphabet::encode_text(b"abracadabra").unwrap();
    let tree = SuffixTree::from_codes(codes);
    assert_eq!(tree.suffix_array(), tree_of("abracadabra").suffix_array());
}
