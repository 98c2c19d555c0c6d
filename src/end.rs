/// Shared end of every open leaf edge.
///
/// Holds the number of text symbols processed so far, so an open leaf
/// starting at `s` spans `[s, value())`. Advancing it once per phase extends
/// every open leaf at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeEnd {
    value: usize,
}

impl EdgeEnd {
    pub fn new() -> Self {
        EdgeEnd { value: 0 }
    }

    pub fn value(&self) -> usize {
        self.value
    }

    pub(crate) fn advance(&mut self) {
        self.value += 1;
    }
}

#[test]
fn test_edge_end() {
    let mut end = EdgeEnd::new();
    assert_eq!(end.value(), 0);
    end.advance();
    end.advance();
    assert_eq!(end.value(), 2);
}
