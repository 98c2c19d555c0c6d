// alphabet codec: printable ASCII plus a terminator that sorts first

use crate::error::{Error, Result};

/// code of the end-of-text terminator; never produced by `encode`
pub const TERMINATOR: u8 = 0;

/// smallest and largest supported text byte
pub const FIRST: u8 = b' ';
pub const LAST: u8 = b'~';

/// number of child slots per node: terminator + printable ASCII
pub const SIGMA: usize = (LAST - FIRST) as usize + 2;

/// map a text byte to its dense code in `1..SIGMA`
pub fn code_of(symbol: u8) -> Option<u8> {
    if (FIRST..=LAST).contains(&symbol) {
        Some(symbol - FIRST + 1)
    } else {
        None
    }
}

/// like `code_of`, failing with the byte and its text position
pub fn encode(symbol: u8, position: usize) -> Result<u8> {
    code_of(symbol).ok_or(Error::UnsupportedSymbol { symbol, position })
}

/// inverse of `code_of`; the terminator has no byte
pub fn decode(code: u8) -> Option<u8> {
    if code == TERMINATOR || code as usize >= SIGMA {
        None
    } else {
        Some(code - 1 + FIRST)
    }
}

/// printable form of a code, `$` for the terminator
pub fn display(code: u8) -> char {
    decode(code).map_or('$', char::from)
}

/// encode a whole text and append the terminator
pub fn encode_text(text: &[u8]) -> Result<Vec<u8>> {
    let mut codes = Vec::with_capacity(text.len() + 1);
    for (position, &symbol) in text.iter().enumerate() {
        codes.push(encode(symbol, position)?);
    }
    codes.push(TERMINATOR);
    Ok(codes)
}

#[test]
fn test_encode_decode() {
    assert_eq!(SIGMA, 96);
    assert_eq!(code_of(b' '), Some(1));
    assert_eq!(code_of(b'~'), Some(95));
    assert_eq!(code_of(b'\n'), None);
    assert_eq!(code_of(0x7f), None);
    assert_eq!(
        encode(0x7f, 4),
        Err(Error::UnsupportedSymbol {
            symbol: 0x7f,
            position: 4
        })
    );
    for b in FIRST..=LAST {
        assert_eq!(decode(code_of(b).unwrap()), Some(b));
    }
    assert_eq!(decode(TERMINATOR), None);
    assert_eq!(display(TERMINATOR), '$');
    assert_eq!(display(code_of(b'$').unwrap()), '$');
}

#[test]
fn test_encode_preserves_order() {
    // the tree orders children by code, so codes must order like bytes
    let mut prev = TERMINATOR;
    for b in FIRST..=LAST {
        let c = code_of(b).unwrap();
        assert!(c > prev);
        prev = c;
    }
}

#[test]
fn test_encode_text() {
    let codes = encode_text(b"ab").unwrap();
    assert_eq!(codes, vec![code_of(b'a').unwrap(), code_of(b'b').unwrap(), TERMINATOR]);
    assert_eq!(encode_text(b"").unwrap(), vec![TERMINATOR]);
    assert_eq!(
        encode_text(b"ab\x07c"),
        Err(Error::UnsupportedSymbol {
            symbol: 0x07,
            position: 2
        })
    );
}
