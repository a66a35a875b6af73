use finlang::error::Error;
use finlang::sequence::{epsilon, letters, seq, words};

#[test]
fn test_concatenation_is_associative() {
    let a = seq(["a", "b"]);
    let b = seq(["c"]);
    let c = seq(["d", "e"]);

    assert_eq!(
        (a.clone() * b.clone()) * c.clone(),
        a.clone() * (b.clone() * c.clone()),
        "concatenation should be associative"
    );
}

#[test]
fn test_epsilon_is_the_identity() {
    let a = seq(["x", "y"]);

    assert_eq!(a.clone() * epsilon(), a, "epsilon should be a right identity");
    assert_eq!(epsilon() * a.clone(), a, "epsilon should be a left identity");
    assert_eq!(epsilon() * epsilon(), epsilon());
}

#[test]
fn test_power_is_repeated_concatenation() {
    assert_eq!(seq(["a"]).pow(3), seq(["a", "a", "a"]));
    assert_eq!(seq(["a", "b"]).pow(2), seq(["a", "b", "a", "b"]));
    assert_eq!(seq(["a"]).pow(0), epsilon(), "power zero should be epsilon");
}

#[test]
fn test_display() {
    assert_eq!(epsilon().to_string(), "\u{03b5}");
    assert_eq!(seq(["a", "b"]).to_string(), "<a, b>");
    assert_eq!(seq([1, 2, 3]).to_string(), "<1, 2, 3>");
}

#[test]
fn test_letters_splits_per_character() {
    assert_eq!(letters("abc"), seq(["a", "b", "c"]));
    assert_eq!(letters(""), epsilon());
}

#[test]
fn test_words_splits_per_token() {
    assert_eq!(words("cat dog"), seq(["cat", "dog"]));
    assert_eq!(words("  cat   dog  "), seq(["cat", "dog"]));
    assert_eq!(words(""), epsilon());
}

#[test]
fn test_ordering_is_lexicographic() {
    assert!(seq(["a"]) < seq(["b"]));
    assert!(seq(["a"]) < seq(["a", "a"]), "a prefix sorts first");
    assert!(epsilon() < seq(["a"]));
}

#[test]
fn test_indexing_is_bounds_checked() {
    let s = seq(["a", "b"]);
    assert_eq!(s.get(1).unwrap().to_string(), "b");
    assert!(
        matches!(s.get(2), Err(Error::Validation(_))),
        "out-of-range access should fail"
    );
}

#[test]
fn test_concatenation_coerces_its_operand() {
    // A bare symbol becomes a singleton sequence before concatenation.
    assert_eq!(
        seq(["a", "b"]).concat_with("c").unwrap(),
        seq(["a", "b", "c"])
    );
    assert_eq!(seq(["a", "b"]) * "c", seq(["a", "b", "c"]));
    assert!(seq(["a"]).concat_with(finlang::finite_set::empty_set()).is_err());
}

#[test]
fn test_structural_equality() {
    assert_eq!(seq(["a", "b"]), letters("ab"));
    assert_ne!(seq(["a", "b"]), seq(["b", "a"]));
    assert_ne!(seq(["ab"]), seq(["a", "b"]));
}
