use finlang::coerce::{coerce, to_atom, to_regex, to_sequence, to_set, Kind, Value};
use finlang::elem::Elem;
use finlang::error::Error;
use finlang::finite_set::{vocab, FiniteSet};
use finlang::regex::Op;
use finlang::sequence::seq;

#[test]
fn test_already_target_kind_is_returned_unchanged() {
    let s = seq(["a", "b"]);
    assert_eq!(to_sequence(s.clone()).unwrap(), s);

    let v = vocab("x").unwrap();
    assert_eq!(to_set(v.clone()).unwrap(), v);
}

#[test]
fn test_symbol_coerces_to_singleton_sequence() {
    assert_eq!(to_sequence("cat").unwrap(), seq(["cat"]));
    assert_eq!(to_sequence(7).unwrap(), seq([7]));
}

#[test]
fn test_sequence_coerces_to_set() {
    let s = to_set(seq(["a", "b", "a"])).unwrap();
    assert_eq!(s, FiniteSet::from_elems(["a", "b"]));
}

#[test]
fn test_no_numeric_to_set_rule() {
    let result = coerce(Value::from(3.14), Kind::Set);
    assert!(
        matches!(result, Err(Error::Coercion { .. })),
        "3.14 should not coerce to a finite set"
    );
}

#[test]
fn test_text_coerces_to_atom() {
    let r = to_regex("a").unwrap();
    assert!(matches!(r.op, Op::Atom(_)));
    assert_eq!(r.to_string(), "/a/");
}

#[test]
fn test_numeric_symbols_do_not_coerce_to_regex() {
    // The regex rule table only registers text atoms; numeric atoms must be
    // built explicitly with `sym`.
    assert!(matches!(to_regex(3), Err(Error::Coercion { .. })));
}

#[test]
fn test_sequence_coerces_to_concatenation() {
    let r = to_regex(seq(["a", "b"])).unwrap();
    assert!(matches!(r.op, Op::Concat(_)));

    let language = r.lang().unwrap();
    assert_eq!(language, FiniteSet::from_elems([Elem::Seq(seq(["a", "b"]))]));
}

#[test]
fn test_set_coerces_to_union() {
    let r = to_regex(vocab("x y").unwrap()).unwrap();
    assert!(matches!(r.op, Op::Union(_)));

    let language = r.lang().unwrap();
    assert_eq!(
        language,
        FiniteSet::from_elems([Elem::Seq(seq(["x"])), Elem::Seq(seq(["y"]))])
    );
}

#[test]
fn test_pair_coerces_to_transducer_atom() {
    let r = to_atom(("a", "b")).unwrap();
    assert!(r.is_transducer);
    assert_eq!(r.to_string(), "/a:b/");
}

#[test]
fn test_regex_does_not_coerce_to_sequence() {
    let r = to_regex("a").unwrap();
    assert!(matches!(
        to_sequence(r),
        Err(Error::Coercion { .. })
    ));
}
