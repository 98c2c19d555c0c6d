use std::fmt;

/// Errors surfaced to callers of the library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A text byte lies outside the supported alphabet.
    UnsupportedSymbol { symbol: u8, position: usize },
    /// A queried position names no suffix of the text.
    /// `len` is the number of suffixes, terminator-only suffix included.
    InvalidQueryPosition { position: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedSymbol { symbol, position } => write!(
                f,
                "unsupported symbol {:#04x} at position {}",
                symbol, position
            ),
            Error::InvalidQueryPosition { position, len } => write!(
                f,
                "query position {} is out of range (text has {} suffixes)",
                position, len
            ),
        }
    }
}

impl std::error::Error for Error {}

#[test]
fn test_error_display() {
    let e = Error::UnsupportedSymbol {
        symbol: b'\n',
        position: 3,
    };
    assert_eq!(e.to_string(), "unsupported symbol 0x0a at position 3");
    let e = Error::InvalidQueryPosition {
        position: 9,
        len: 7,
    };
    assert_eq!(
        e.to_string(),
        "query position 9 is out of range (text has 7 suffixes)"
    );
}
