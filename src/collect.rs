// suffix array and ranks read off a finished suffix tree

use std::io;

use crate::alphabet;
use crate::builder::SuffixTree;
use crate::error::{Error, Result};
use crate::node::{NodeId, ROOT};

impl SuffixTree {
    /// Leaf ids in depth-first order, children visited by ascending symbol.
    /// This is the suffix array of the text, terminator suffix included.
    pub fn suffix_array(&self) -> Vec<usize> {
        let mut sa = Vec::with_capacity(self.len() + 1);
        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            match node.leaf {
                Some(pos) => sa.push(pos),
                // reversed so the smallest symbol is popped first
                None => stack.extend(node.child_ids().rev()),
            }
        }
        sa
    }

    /// write the tree as an indented list of edge labels
    pub fn dump<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        let mut stack: Vec<(NodeId, usize)> = vec![(ROOT, 0)];
        while let Some((id, indent)) = stack.pop() {
            let node = self.node(id);
            if id == ROOT {
                writeln!(out, "(root)")?;
            } else {
                let label: String = self.label(id).iter().map(|&c| alphabet::display(c)).collect();
                write!(out, "{:1$}{2}", "", indent * 2, label)?;
                match node.leaf {
                    Some(pos) => writeln!(out, " [{}]", pos)?,
                    None => writeln!(out)?,
                }
            }
            stack.extend(node.child_ids().rev().map(|c| (c, indent + 1)));
        }
        Ok(())
    }
}

/// 1-based lexicographic rank of every suffix start position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankMap {
    ranks: Vec<usize>,
}

impl RankMap {
    /// `sa` must be a permutation of `0..sa.len()`
    pub fn from_suffix_array(sa: &[usize]) -> RankMap {
        let mut ranks = vec![0; sa.len()];
        for (i, &pos) in sa.iter().enumerate() {
            assert!(ranks[pos] == 0, "position {} occurs twice", pos);
            ranks[pos] = i + 1;
        }
        RankMap { ranks }
    }

    /// number of suffixes, i.e. text length plus one
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// rank of the suffix starting at 0-based `position`
    pub fn rank(&self, position: usize) -> Result<usize> {
        self.ranks
            .get(position)
            .copied()
            .ok_or(Error::InvalidQueryPosition {
                position,
                len: self.ranks.len(),
            })
    }

    /// rank of the suffix starting at 1-based `offset`
    pub fn rank_of_offset(&self, offset: usize) -> Result<usize> {
        match offset.checked_sub(1) {
            Some(position) => self.rank(position),
            None => Err(Error::InvalidQueryPosition {
                position: offset,
                len: self.ranks.len(),
            }),
        }
    }

    /// ranks for a list of 1-based offsets, failing on the first bad one
    pub fn ranks_of_offsets(&self, offsets: &[usize]) -> Result<Vec<usize>> {
        offsets.iter().map(|&o| self.rank_of_offset(o)).collect()
    }

    /// (position, rank) pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.ranks.iter().copied().enumerate()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.ranks
    }
}

/// rank map of a finished tree
pub fn ranks(tree: &SuffixTree) -> RankMap {
    RankMap::from_suffix_array(&tree.suffix_array())
}

#[cfg(test)]
fn naive_suffix_array(s: &[u8]) -> Vec<usize> {
    let codes = alphabet::encode_text(s).unwrap();
    let mut sa: Vec<usize> = (0..codes.len()).collect();
    sa.sort_by(|&a, &b| codes[a..].cmp(&codes[b..]));
    sa
}

#[test]
fn test_banana_ranks() {
    let tree = crate::build(b"banana").unwrap();
    let sa = tree.suffix_array();
    // $ < a$ < ana$ < anana$ < banana$ < na$ < nana$
    assert_eq!(sa, vec![6, 5, 3, 1, 0, 4, 2]);
    let rm = ranks(&tree);
    assert_eq!(rm.rank(0), Ok(5));
    assert_eq!(rm.rank(5), Ok(2));
    assert_eq!(rm.rank(6), Ok(1));
    assert_eq!(rm.rank_of_offset(1), Ok(5));
    assert_eq!(rm.ranks_of_offsets(&[1, 6, 7]), Ok(vec![5, 2, 1]));
}

#[test]
fn test_mississippi() {
    let tree = crate::build(b"mississippi").unwrap();
    assert_eq!(
        tree.suffix_array(),
        vec![11, 10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]
    );
}

#[test]
fn test_terminator_only() {
    let rm = ranks(&crate::build(b"").unwrap());
    assert_eq!(rm.len(), 1);
    assert_eq!(rm.rank(0), Ok(1));
}

#[test]
fn test_identical_symbols_sort_by_length() {
    let tree = crate::build(b"aaaa").unwrap();
    assert_eq!(tree.suffix_array(), vec![4, 3, 2, 1, 0]);
    let rm = ranks(&tree);
    assert_eq!(rm.as_slice(), &[5, 4, 3, 2, 1]);
}

#[test]
fn test_invalid_queries() {
    let rm = ranks(&crate::build(b"banana").unwrap());
    assert_eq!(
        rm.rank(7),
        Err(Error::InvalidQueryPosition {
            position: 7,
            len: 7
        })
    );
    assert_eq!(
        rm.rank_of_offset(0),
        Err(Error::InvalidQueryPosition {
            position: 0,
            len: 7
        })
    );
    assert!(rm.rank_of_offset(8).is_err());
    assert!(rm.ranks_of_offsets(&[1, 2, 99]).is_err());
    // lookups do not disturb the map
    assert_eq!(rm.rank(0), Ok(5));
}

#[test]
fn test_rebuild_is_idempotent() {
    let text = b"the quick brown fox jumps over the lazy dog";
    let a = ranks(&crate::build(text).unwrap());
    let b = ranks(&crate::build(text).unwrap());
    assert_eq!(a, b);
}

#[test]
fn test_words_match_naive_sort() {
    for k in 0..10 {
        for s in [
            crate::words::fibonacci(k),
            crate::words::fibonacci_plus(k),
            crate::words::thue_morse(k),
            crate::words::period_doubling(k),
        ] {
            let tree = SuffixTree::new(&s).unwrap();
            assert_eq!(tree.suffix_array(), naive_suffix_array(&s));
        }
    }
}

#[test]
fn test_all_ternary_strings_match_naive_sort() {
    for len in 0..=6 {
        for s in crate::words::enumerate_all(b"abc", len) {
            let tree = SuffixTree::new(&s).unwrap();
            assert_eq!(tree.suffix_array(), naive_suffix_array(&s), "{:?}", s);
        }
    }
}

#[test]
fn test_dump() {
    let tree = crate::build(b"aa").unwrap();
    let mut out = Vec::new();
    tree.dump(&mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out, "(root)\n  $ [2]\n  a\n    $ [1]\n    a$ [0]\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn suffix_array_is_sorted_permutation(text in "[ -~]{0,80}") {
            let tree = crate::build(text.as_bytes()).unwrap();
            let sa = tree.suffix_array();
            prop_assert_eq!(&sa, &naive_suffix_array(text.as_bytes()));
            let codes = tree.text();
            for w in sa.windows(2) {
                prop_assert!(codes[w[0]..] < codes[w[1]..]);
            }
        }

        #[test]
        fn ranks_are_a_bijection(text in "[a-d]{0,60}") {
            let rm = ranks(&crate::build(text.as_bytes()).unwrap());
            prop_assert_eq!(rm.len(), text.len() + 1);
            let mut seen = vec![false; rm.len()];
            for (_, r) in rm.iter() {
                prop_assert!(r >= 1 && r <= rm.len());
                prop_assert!(!seen[r - 1]);
                seen[r - 1] = true;
            }
        }

        #[test]
        fn control_characters_are_rejected(prefix in "[a-z]{0,10}", c in 0u8..0x20) {
            let mut text = prefix.clone().into_bytes();
            text.push(c);
            prop_assert_eq!(
                crate::build(&text).unwrap_err(),
                Error::UnsupportedSymbol { symbol: c, position: prefix.len() }
            );
        }
    }
}
