use finlang::elem::Elem;
use finlang::error::Error;
use finlang::finite_set::{alphabet, empty_set, vocab, FiniteSet};
use finlang::sequence::seq;

#[test]
fn test_vocab_from_string() {
    let v = vocab("cat dog").unwrap();
    assert_eq!(v, FiniteSet::from_elems(["cat", "dog"]));

    let deduped = vocab("cat dog cat").unwrap();
    assert_eq!(deduped.len(), 2, "duplicate words should collapse");
    assert_eq!(deduped, v);
}

#[test]
fn test_vocab_and_alphabet_accept_vec_literals() {
    assert_eq!(vocab(vec!["cat", "dog"]).unwrap(), vocab("cat dog").unwrap());
    assert_eq!(alphabet(vec!['a', 'b']).unwrap(), alphabet("ab").unwrap());
}

#[test]
fn test_vocab_rejects_whitespace_elements() {
    let result = vocab(seq(["cat", "big dog"]));
    assert!(
        matches!(result, Err(Error::Validation(_))),
        "a vocabulary element containing a space should be rejected"
    );
}

#[test]
fn test_vocab_rejects_non_collections() {
    assert!(matches!(vocab(3), Err(Error::Validation(_))));
}

#[test]
fn test_alphabet_from_string() {
    let a = alphabet("ab").unwrap();
    assert_eq!(a, FiniteSet::from_elems(["a", "b"]));
}

#[test]
fn test_alphabet_rejects_multi_character_elements() {
    let result = alphabet(seq(["a", "xy"]));
    assert!(
        matches!(result, Err(Error::Validation(_))),
        "an alphabet element must be exactly one character"
    );
}

#[test]
fn test_union_laws() {
    let a = vocab("x y").unwrap();
    let b = vocab("y z").unwrap();
    let c = vocab("w").unwrap();

    assert_eq!(&a | &b, &b | &a, "union should be commutative");
    assert_eq!(&(&a | &b) | &c, &a | &(&b | &c), "union should be associative");
    assert_eq!(&a | &a, a, "union should be idempotent");
    assert_eq!(&a | &empty_set(), a, "the empty set is the union identity");
}

#[test]
fn test_intersection_laws() {
    let a = vocab("x y").unwrap();
    let b = vocab("y z").unwrap();

    assert_eq!(&a & &b, &b & &a, "intersection should be commutative");
    assert_eq!(&a & &a, a, "intersection should be idempotent");
    assert_eq!(
        &a & &empty_set(),
        empty_set(),
        "the empty set is absorbing for intersection"
    );
    assert_eq!(&a & &b, vocab("y").unwrap());
}

#[test]
fn test_difference_and_subset() {
    let a = vocab("x y z").unwrap();
    let b = vocab("y").unwrap();

    assert_eq!(&a - &b, vocab("x z").unwrap());
    assert!(b.is_subset(a.clone()).unwrap());
    assert!(!a.is_subset(b).unwrap());
    assert!(empty_set().is_subset(a).unwrap());
}

#[test]
fn test_coercing_operations_fail_without_a_rule() {
    let a = vocab("x").unwrap();
    assert!(
        matches!(a.union(3.14), Err(Error::Coercion { .. })),
        "no numeric-to-set rule is registered"
    );
    assert!(!a.equals(3.14), "equality falls back to false");
}

#[test]
fn test_cross_product_concatenates_languages() {
    let a = vocab("a b").unwrap();
    let b = vocab("c").unwrap();
    let product = a.cross(b).unwrap();

    assert_eq!(
        product,
        FiniteSet::from_elems([Elem::Seq(seq(["a", "c"])), Elem::Seq(seq(["b", "c"]))])
    );
}

#[test]
fn test_cross_product_with_sequence_operand() {
    let a = vocab("a b").unwrap();
    let product = a.cross(seq(["c", "d"])).unwrap();

    assert_eq!(
        product,
        FiniteSet::from_elems([
            Elem::Seq(seq(["a", "c", "d"])),
            Elem::Seq(seq(["b", "c", "d"])),
        ])
    );
}

#[test]
fn test_cross_product_distributes_over_union() {
    let a = vocab("a b").unwrap();
    let b = vocab("c").unwrap();
    let c = vocab("d e").unwrap();

    let left = a.cross(&b | &c).unwrap();
    let right = &a.cross(b).unwrap() | &a.cross(c).unwrap();
    assert_eq!(left, right, "A*(B+C) should equal (A*B)+(A*C)");
}

#[test]
fn test_display_is_canonical() {
    assert_eq!(empty_set().to_string(), "\u{2205}");
    let v = vocab("b a c").unwrap();
    assert_eq!(v.to_string(), "{a, b, c}", "rendering sorts members");
}
