use cypher_builder::{node, relation, BuilderError, Clause, Direction};
use serde_json::json;

#[test]
fn test_pattern_symmetry() {
    let pattern = node!("p", ["A", "B"], {"x": 1}).unwrap();
    assert_eq!(pattern.build(), "(p:A:B { x: $x })");

    assert_eq!(
        relation!(Direction::Out, "r", "T").unwrap().build(),
        "-[r:T]->"
    );
    assert_eq!(
        relation!(Direction::Either, [3, 5]).unwrap().build(),
        "-[*3..5]-"
    );
}

#[test]
fn test_relation_forms() {
    assert_eq!(relation!(Direction::In).unwrap().build(), "<--");
    assert_eq!(
        relation!(Direction::In, ["FriendsWith", "RelatedTo"])
            .unwrap()
            .build(),
        "<-[:FriendsWith|RelatedTo]-"
    );
    assert_eq!(
        relation!(Direction::Out, "r", "T", {"since": 2000}, [2, null])
            .unwrap()
            .build(),
        "-[r:T*2.. { since: $since }]->"
    );
    assert_eq!(
        relation!(Direction::Either, "r", [null, 4]).unwrap().build(),
        "-[r*..4]-"
    );
    assert_eq!(
        relation!(Direction::Either, "r", "*").unwrap().build(),
        "-[r*]-"
    );
}

#[test]
fn test_direction_aliases() {
    let left: Direction = "left".parse().unwrap();
    let right: Direction = "right".parse().unwrap();
    assert_eq!(relation!(left).unwrap().build(), "<--");
    assert_eq!(relation!(right).unwrap().build(), "-->");
}

#[test]
fn test_conditions_mode_switch() {
    let mut pattern = node!("p", "Person", {"name": "Ali", "age": 30}).unwrap();
    assert_eq!(pattern.params().len(), 2);

    pattern.set_expanded_conditions(false);
    let params = pattern.params();
    assert_eq!(params.len(), 1);
    assert!(params.contains_key("conditions"));
    assert!(!params.contains_key("name"));
    assert!(!params.contains_key("age"));
    assert_eq!(pattern.build(), "(p:Person $conditions)");
}

#[test]
fn test_argument_errors() {
    assert!(matches!(
        node!(5),
        Err(BuilderError::TypeMismatch { slot: "name", .. })
    ));
    assert!(matches!(
        node!("p", "A", "B"),
        Err(BuilderError::TypeMismatch { slot: "conditions", .. })
    ));
    assert!(matches!(
        relation!(Direction::Out, [1, 2], {"a": 1}),
        Err(BuilderError::ArgumentShape(_))
    ));
    assert!(matches!(
        relation!(Direction::Out, "r", "T", {}, "long"),
        Err(BuilderError::TypeMismatch { slot: "length", .. })
    ));
}

#[test]
fn test_function_constructors_match_macros() {
    let from_fn = cypher_builder::patterns::node(&[json!("n"), json!(["L"])]).unwrap();
    let from_macro = node!("n", ["L"]).unwrap();
    assert_eq!(from_fn.build(), from_macro.build());
}
