//! Unit tests for the public Set API and the free set-algebra functions.

use rstest::rstest;
use sets::{Set, copy, difference, intersection, set, union};

// =============================================================================
// Construction
// =============================================================================

#[rstest]
#[case::empty(vec![], 0)]
#[case::distinct(vec![1, 2, 3], 3)]
#[case::duplicates(vec![1, 2, 2, 3], 3)]
#[case::all_equal(vec![7, 7, 7, 7], 1)]
fn test_collect_collapses_duplicates(#[case] elements: Vec<i32>, #[case] expected: usize) {
    let set: Set<i32> = elements.iter().copied().collect();
    assert_eq!(set.len(), expected);
    for element in &elements {
        assert!(set.contains(element));
    }
}

#[rstest]
fn test_macro_and_from_agree() {
    assert_eq!(set![1, 2, 2, 3], Set::from([3, 2, 1]));
    assert_eq!(set![1, 2, 3,], set![1, 2, 3]);
}

#[rstest]
fn test_new_and_default_are_empty() {
    let new: Set<i32> = Set::new();
    let default: Set<i32> = Set::default();
    let empty: Set<i32> = set![];

    assert!(new.is_empty());
    assert_eq!(new, default);
    assert_eq!(new, empty);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(100)]
fn test_with_cap(#[case] cap: usize) {
    let set: Set<String> = Set::with_cap(cap);
    assert!(set.is_empty());
    assert!(set.cap() >= cap);
}

// =============================================================================
// Queries and mutation
// =============================================================================

#[rstest]
fn test_insert_then_remove() {
    let mut set = Set::new();
    assert!(!set.contains(&5));

    set.insert(5);
    assert!(set.contains(&5));
    assert_eq!(set.len(), 1);

    assert_eq!(set.remove(&5), Some(5));
    assert!(!set.contains(&5));
    assert!(set.is_empty());
}

#[rstest]
fn test_insert_is_idempotent() {
    let mut once = Set::new();
    once.insert("x");

    let mut twice = Set::new();
    assert!(twice.insert("x"));
    assert!(!twice.insert("x"));

    assert_eq!(once, twice);
    assert_eq!(twice.len(), 1);
}

#[rstest]
fn test_remove_absent_is_noop() {
    let mut set = set![1, 2, 3];
    assert_eq!(set.remove(&4), None);
    assert_eq!(set, set![1, 2, 3]);
}

#[rstest]
fn test_borrowed_lookup() {
    let mut set: Set<String> = ["alpha", "beta"].iter().map(|s| s.to_string()).collect();
    assert!(set.contains("alpha"));
    assert_eq!(set.get("beta").map(String::as_str), Some("beta"));
    assert_eq!(set.remove("alpha").as_deref(), Some("alpha"));
    assert!(!set.contains("alpha"));
}

#[rstest]
fn test_retain_and_clear() {
    let mut set: Set<i32> = (0..10).collect();
    set.retain(|i| i % 2 == 0);
    assert_eq!(set, set![0, 2, 4, 6, 8]);

    set.clear();
    assert!(set.is_empty());
}

#[rstest]
fn test_extend_by_reference() {
    let mut set = set![1];
    set.extend(&[2, 3, 3]);
    assert_eq!(set, set![1, 2, 3]);
}

// =============================================================================
// Subset and equality
// =============================================================================

#[rstest]
#[case::proper(set![1, 2], set![1, 2, 3], true)]
#[case::missing(set![1, 4], set![1, 2, 3], false)]
#[case::equal(set![1, 2, 3], set![3, 2, 1], true)]
#[case::empty_of_any(set![], set![1], true)]
#[case::empty_of_empty(set![], set![], true)]
#[case::larger(set![1, 2, 3], set![1, 2], false)]
fn test_is_subset(#[case] a: Set<i32>, #[case] b: Set<i32>, #[case] expected: bool) {
    assert_eq!(a.is_subset(&b), expected);
    assert_eq!(b.is_superset(&a), expected);
}

#[rstest]
#[case::same(set![1, 2, 3], set![3, 1, 2], true)]
#[case::different_sizes(set![1, 2], set![1, 2, 3], false)]
#[case::same_size(set![1, 2, 3], set![1, 2, 4], false)]
#[case::empty(set![], set![], true)]
fn test_equality(#[case] a: Set<i32>, #[case] b: Set<i32>, #[case] expected: bool) {
    assert_eq!(a == b, expected);
    assert_eq!(b == a, expected);
}

#[rstest]
fn test_is_disjoint() {
    assert!(set![1, 2].is_disjoint(&set![3, 4]));
    assert!(!set![1, 2].is_disjoint(&set![2, 3]));
    assert!(Set::<i32>::new().is_disjoint(&Set::new()));
}

// =============================================================================
// Free functions
// =============================================================================

#[rstest]
fn test_copy_is_independent() {
    let original = set![1, 2, 3];
    let mut copied = copy(&original);
    assert_eq!(copied, original);

    copied.insert(4);
    copied.remove(&1);
    assert!(original.contains(&1));
    assert!(!original.contains(&4));
    assert_eq!(original.len(), 3);
}

#[rstest]
fn test_union() {
    assert_eq!(union([&set![1, 2], &set![2, 3]]), set![1, 2, 3]);
    assert_eq!(union([&set![1], &set![2], &set![3], &set![1]]), set![1, 2, 3]);
    assert_eq!(union(Vec::<&Set<i32>>::new()), set![]);
}

#[rstest]
fn test_union_of_one_is_a_copy() {
    let original = set![1, 2];
    let mut result = union([&original]);
    assert_eq!(result, original);

    result.insert(3);
    assert_eq!(original, set![1, 2]);
}

#[rstest]
fn test_intersection() {
    assert_eq!(
        intersection([&set![1, 2, 3], &set![2, 3, 4], &set![3, 4, 5]]),
        set![3]
    );
    assert_eq!(intersection([&set![1, 2], &set![3, 4]]), set![]);
    assert_eq!(intersection([&set![1, 2], &set![], &set![1]]), set![]);
}

#[rstest]
fn test_intersection_of_none_is_empty() {
    assert_eq!(intersection(Vec::<&Set<i32>>::new()), Set::new());
}

#[rstest]
fn test_intersection_of_one_is_a_copy() {
    let original = set!["a", "b"];
    let mut result = intersection([&original]);
    assert_eq!(result, original);

    result.remove("a");
    assert!(original.contains("a"));
}

#[rstest]
#[case(set![1, 2, 3], set![2, 3], set![1])]
#[case(set![1, 2, 3], set![], set![1, 2, 3])]
#[case(set![], set![1, 2], set![])]
#[case(set![1, 2], set![1, 2], set![])]
fn test_difference(#[case] a: Set<i32>, #[case] b: Set<i32>, #[case] expected: Set<i32>) {
    assert_eq!(difference(&a, &b), expected);
}

// =============================================================================
// Operators
// =============================================================================

#[rstest]
fn test_operators() {
    let a = set![1, 2, 3];
    let b = set![2, 3, 4];

    assert_eq!(&a | &b, set![1, 2, 3, 4]);
    assert_eq!(&a & &b, set![2, 3]);
    assert_eq!(&a - &b, set![1]);
    assert_eq!(&a ^ &b, set![1, 4]);
}

#[rstest]
fn test_assigning_operators() {
    let b = set![2, 3, 4];

    let mut or = set![1, 2, 3];
    or |= b.clone();
    assert_eq!(or, set![1, 2, 3, 4]);

    let mut and = set![1, 2, 3];
    and &= &b;
    assert_eq!(and, set![2, 3]);

    let mut sub = set![1, 2, 3];
    sub -= &b;
    assert_eq!(sub, set![1]);

    let mut xor = set![1, 2, 3];
    xor ^= b;
    assert_eq!(xor, set![1, 4]);
}

// =============================================================================
// Display
// =============================================================================

#[rstest]
#[case::empty(set![], "set{}")]
#[case::singleton(set![1], "set{1}")]
#[case::duplicates(set![1, 1], "set{1}")]
fn test_display(#[case] set: Set<i32>, #[case] expected: &str) {
    assert_eq!(set.to_string(), expected);
}

#[rstest]
fn test_display_is_a_permutation() {
    let rendered = set![1, 2, 3].to_string();
    let permutations = [
        "set{1, 2, 3}",
        "set{1, 3, 2}",
        "set{2, 1, 3}",
        "set{2, 3, 1}",
        "set{3, 1, 2}",
        "set{3, 2, 1}",
    ];
    assert!(permutations.contains(&rendered.as_str()), "got {rendered}");
}
