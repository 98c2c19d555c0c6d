// highly repetitive words, handy for stressing suffix links
//
// Fibonacci words
// 0 : b
// 1 : a
// 2 : ab
// 3 : aba
// 4:  abaab
// k : f(k-1) f(k-2)

pub fn fibonacci(k: usize) -> Vec<u8> {
    let (mut prev, mut cur) = (b"b".to_vec(), b"a".to_vec());
    if k == 0 {
        return prev;
    }
    for _ in 1..k {
        let next = [cur.as_slice(), prev.as_slice()].concat();
        prev = std::mem::replace(&mut cur, next);
    }
    cur
}

// f(k) and one more letter: b for even k, a for odd k
pub fn fibonacci_plus(k: usize) -> Vec<u8> {
    let mut res = fibonacci(k);
    res.push(if k % 2 == 0 { b'b' } else { b'a' });
    res
}

// apply a morphism k times starting from "a"
fn iterate(k: usize, image: impl Fn(u8) -> &'static [u8]) -> Vec<u8> {
    let mut w = vec![b'a'];
    for _ in 0..k {
        w = w.iter().flat_map(|&c| image(c).iter().copied()).collect();
    }
    w
}

// Thue-Morse: a -> ab, b -> ba
// 0: a, 1: ab, 2: abba
pub fn thue_morse(k: usize) -> Vec<u8> {
    iterate(k, |c| if c == b'a' { &b"ab"[..] } else { &b"ba"[..] })
}

// period doubling: a -> ab, b -> aa
pub fn period_doubling(k: usize) -> Vec<u8> {
    iterate(k, |c| if c == b'a' { &b"ab"[..] } else { &b"aa"[..] })
}

/// all strings of length `len` over `alphabet`, in lexicographic order of
/// the alphabet as given
pub fn enumerate_all(alphabet: &[u8], len: usize) -> Vec<Vec<u8>> {
    if alphabet.is_empty() {
        return if len == 0 { vec![Vec::new()] } else { Vec::new() };
    }
    let mut res = Vec::new();
    let mut digits = vec![0; len];
    loop {
        res.push(digits.iter().map(|&d| alphabet[d]).collect());
        // odometer increment from the right
        let mut i = len;
        loop {
            if i == 0 {
                return res;
            }
            i -= 1;
            digits[i] += 1;
            if digits[i] < alphabet.len() {
                break;
            }
            digits[i] = 0;
        }
    }
}

#[test]
fn test_fibonacci() {
    assert_eq!(fibonacci(0), b"b".to_vec());
    assert_eq!(fibonacci(1), b"a".to_vec());
    assert_eq!(fibonacci(2), b"ab".to_vec());
    assert_eq!(fibonacci(3), b"aba".to_vec());
    assert_eq!(
        fibonacci(10),
        b"abaababaabaababaababaabaababaabaababaababaabaababaababaabaababaabaababaababaabaababaabaab"
            .to_vec()
    );
    assert_eq!(
        fibonacci_plus(8),
        b"abaababaabaababaababaabaababaabaabb".to_vec()
    )
}

#[test]
fn test_thue_morse() {
    assert_eq!(thue_morse(0), b"a".to_vec());
    assert_eq!(thue_morse(5), b"abbabaabbaababbabaababbaabbabaab".to_vec());
}

#[test]
fn test_period_doubling() {
    assert_eq!(period_doubling(1), b"ab".to_vec());
    assert_eq!(period_doubling(3), b"abaaabab".to_vec());
    assert_eq!(period_doubling(4), b"abaaabababaaabaa".to_vec())
}

#[test]
fn test_enumerate_all() {
    let all = enumerate_all(b"ab", 2);
    assert_eq!(all, vec![b"aa".to_vec(), b"ab".to_vec(), b"ba".to_vec(), b"bb".to_vec()]);
    assert_eq!(enumerate_all(b"abc", 0), vec![Vec::<u8>::new()]);
    assert_eq!(enumerate_all(b"abc", 4).len(), 81);
    assert!(enumerate_all(b"", 3).is_empty());
}
