// reference suffix array, for cross-checking the tree

/// suffix array of an encoded text computed by divsufsort
pub fn reference_suffix_array(codes: &[u8]) -> Vec<usize> {
    assert!(codes.len() <= i32::MAX as usize);
    let mut sa = vec![0_i32; codes.len()];
    cdivsufsort::sort_in_place(codes, &mut sa);
    sa.into_iter().map(|p| p as usize).collect()
}

#[test]
fn test_reference_banana() {
    let codes = crate::alphabet::encode_text(b"banana").unwrap();
    assert_eq!(reference_suffix_array(&codes), vec![6, 5, 3, 1, 0, 4, 2]);
}

#[test]
fn test_reference_matches_tree() {
    for k in 0..12 {
        for s in [
            crate::words::fibonacci(k),
            crate::words::thue_morse(k.min(9)),
            crate::words::period_doubling(k.min(9)),
        ] {
            let tree = crate::SuffixTree::new(&s).unwrap();
            assert_eq!(tree.suffix_array(), reference_suffix_array(tree.text()));
        }
    }
    let tree = crate::build(b"It was the best of times, it was the worst of times.").unwrap();
    assert_eq!(tree.suffix_array(), reference_suffix_array(tree.text()));
}
