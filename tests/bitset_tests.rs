use wordle_search::BitSet;

#[test]
fn test_full_clears_unused_bits() {
    let full = BitSet::full(70);
    assert_eq!(full.count(), 70);
    assert!(full.contains(69));
    assert!(!full.contains(70));
    assert_eq!(full, BitSet::from_indices(70, 0..70));
}

#[test]
fn test_insert_remove_contains() {
    let mut set = BitSet::new(130);
    assert!(set.is_empty());
    set.insert(0);
    set.insert(64);
    set.insert(129);
    assert_eq!(set.count(), 3);
    assert!(set.contains(64));
    set.remove(64);
    assert!(!set.contains(64));
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 129]);
}

#[test]
fn test_set_algebra() {
    let a = BitSet::from_indices(100, [1, 5, 63, 64, 99]);
    let b = BitSet::from_indices(100, [5, 64, 70]);

    assert_eq!(a.intersection(&b), BitSet::from_indices(100, [5, 64]));
    assert_eq!(a.intersection_count(&b), 2);

    let mut d = a.clone();
    d.difference_with(&b);
    assert_eq!(d, BitSet::from_indices(100, [1, 63, 99]));
}

#[test]
fn test_next_set() {
    let set = BitSet::from_indices(200, [3, 130, 199]);
    assert_eq!(set.first(), Some(3));
    assert_eq!(set.next_set(3), Some(3));
    assert_eq!(set.next_set(4), Some(130));
    assert_eq!(set.next_set(131), Some(199));
    assert_eq!(set.next_set(200), None);
    assert_eq!(BitSet::new(10).first(), None);
}

#[test]
fn test_equal_content_hashes_equal() {
    use std::collections::HashSet;

    let mut a = BitSet::full(65);
    a.difference_with(&BitSet::from_indices(65, [64]));
    let b = BitSet::from_indices(65, 0..64);
    assert_eq!(a, b);

    let mut seen = HashSet::new();
    seen.insert(a);
    assert!(seen.contains(&b));
}
