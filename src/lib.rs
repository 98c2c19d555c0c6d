//! Suffix ranks through Ukkonen's online suffix tree construction.
//!
//! ```
//! let tree = sufrank::build(b"banana").unwrap();
//! let ranks = sufrank::ranks(&tree);
//! assert_eq!(ranks.rank(0), Ok(5));
//! assert_eq!(ranks.rank_of_offset(6), Ok(2));
//! ```

pub mod alphabet;
pub mod builder;
pub mod collect;
pub mod end;
pub mod error;
pub mod node;
pub mod sa;
pub mod words;

pub use builder::{build, SuffixTree};
pub use collect::{ranks, RankMap};
pub use error::{Error, Result};
