use cypher_builder::conditions::{
    and, between, compile, exists, has_label, in_array, is_null, not, or, regexp, starts_with,
    xor, Condition,
};
use cypher_builder::{conditions, ParameterTable};
use regex::Regex;
use serde_json::json;

fn render(condition: impl Into<Condition>) -> String {
    let mut table = ParameterTable::new();
    compile(&condition.into(), &mut table).to_string()
}

#[test]
fn test_singleton_non_escalation() {
    assert_eq!(render(or([json!({"a": 1})])), render(json!({"a": 1})));
    assert_eq!(render(xor([json!({"a": 1})])), "a = $a");
    assert_eq!(render(json!([{"a": 1}])), "a = $a");
}

#[test]
fn test_xor_of_and_group() {
    let tree = xor([and([("a", 1i64), ("b", 2i64)]), json!({"c": 3}).into()]);
    // AND binds tighter than XOR, so the group needs no parentheses
    assert_eq!(render(tree), "a = $a AND b = $b XOR c = $c");
}

#[test]
fn test_xor_nested_under_and_is_parenthesized() {
    let tree = conditions! {
        "" => xor([and([("a", 1i64), ("b", 2i64)]), json!({"c": 3}).into()]),
        "d" => 4i64,
    };
    assert_eq!(render(tree), "(a = $a AND b = $b XOR c = $c) AND d = $d");
}

#[test]
fn test_or_under_xor_is_parenthesized() {
    let tree = xor([
        Condition::from(json!({"a": [1, 2]})),
        Condition::from(json!({"b": 3})),
    ]);
    assert_eq!(render(tree), "(a = $a OR a = $a2) XOR b = $b");
}

#[test]
fn test_not_of_array_is_negated_or() {
    assert_eq!(
        render(not(json!([{"a": 1}, {"b": 2}]))),
        "NOT (a = $a OR b = $b)"
    );
    assert_eq!(
        render(not(json!({"a": 1, "b": 2}))),
        "NOT (a = $a AND b = $b)"
    );
}

#[test]
fn test_nested_entity_conditions() {
    let mut table = ParameterTable::new();
    let condition = Condition::from(json!({
        "person": {"name": "Ali", "age": [30, 31]},
        "pet": {"name": "Rex"}
    }));
    let text = compile(&condition, &mut table).to_string();
    assert_eq!(
        text,
        "person.name = $name AND (person.age = $age OR person.age = $age2) AND pet.name = $name2"
    );
    assert_eq!(
        table.export_values(),
        *json!({"name": "Ali", "age": 30, "age2": 31, "name2": "Rex"})
            .as_object()
            .unwrap()
    );
}

#[test]
fn test_comparator_leaves() {
    let tree = conditions! {
        "person" => conditions! {
            "name" => starts_with("A"),
            "email" => exists(),
            "nickname" => is_null(),
            "age" => between(18, 65).inclusive(true, false),
        },
        "pet" => has_label("Dog"),
        "tags" => in_array(json!(["a", "b"])),
    };
    assert_eq!(
        render(tree),
        "person.name STARTS WITH $name AND exists(person.email) AND person.nickname IS NULL \
         AND person.age >= $lowerPersonAge AND person.age < $upperPersonAge \
         AND pet:Dog AND tags IN $tags"
    );
}

#[test]
fn test_regex_leaf_and_regexp_comparator() {
    let mut table = ParameterTable::new();
    let tree = conditions! {
        "name" => Regex::new("^Al.*").unwrap(),
        "email" => regexp(".*@example\\.com", true),
    };
    let text = compile(&tree, &mut table).to_string();
    assert_eq!(text, "name =~ $name AND email =~ $email");
    let values = table.export_values();
    assert_eq!(values["name"], json!("^Al.*"));
    assert_eq!(values["email"], json!("(?i).*@example\\.com"));
}

#[test]
fn test_negated_range_keeps_both_bounds() {
    let tree = not(conditions! {
        "person" => conditions! { "age" => between(18, 65).inclusive(false, false) },
    });
    assert_eq!(
        render(tree),
        "NOT (person.age > $lowerPersonAge AND person.age < $upperPersonAge)"
    );
}
