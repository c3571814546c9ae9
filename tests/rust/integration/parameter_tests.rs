use cypher_builder::ParameterTable;
use serde_json::json;
use test_case::test_case;

#[test_case(&[], "age", "age" ; "empty table")]
#[test_case(&["age"], "age", "age2" ; "bare name taken")]
#[test_case(&["age", "age2"], "age", "age3" ; "first two taken")]
#[test_case(&["age", "age3"], "age", "age2" ; "gap is reused")]
#[test_case(&["age2"], "age", "age" ; "bare name still free")]
#[test_case(&["age", "age2"], "age2", "age3" ; "requested suffix taken")]
#[test_case(&[], "age5", "age5" ; "requested suffix free")]
#[test_case(&["personAge"], "person_age", "personAge2" ; "hint is camel cased")]
fn test_suffix_minimality(existing: &[&str], hint: &str, expected: &str) {
    let mut table = ParameterTable::new();
    for name in existing {
        table.add_param(json!(null), Some(name));
    }
    assert_eq!(table.add_param(json!(1), Some(hint)).name(), expected);
}

#[test]
fn test_names_are_pairwise_distinct() {
    let hints = [
        "age", "age", "Age", "age2", "age_2", "AGE", "", "p", "p2", "name", "name1", "name",
        "person.age", "personAge", "person_age", "2", "x9", "x", "x9",
    ];
    let mut table = ParameterTable::new();
    for (index, hint) in hints.iter().enumerate() {
        table.add_param(json!(index), Some(hint));
    }
    table.add_param(json!("anonymous"), None);

    let mut names = table.names();
    let total = names.len();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn test_merge_idempotence() {
    let mut a = ParameterTable::new();
    a.add_param(json!(1), Some("name"));
    a.add_param(json!(2), Some("limitCount"));

    let mut b = ParameterTable::new();
    let name = b.add_param(json!("x"), Some("name"));
    b.add_param(json!(3), Some("skipCount"));

    a.import_from(&b);
    let once = a.names();
    let values_once = a.export_values();
    a.import_from(&b);

    assert_eq!(a.names(), once);
    assert_eq!(a.export_values(), values_once);
    assert_eq!(name.to_string(), "$name2");
}

#[test]
fn test_rename_is_visible_through_every_handle() {
    let mut child = ParameterTable::new();
    let param = child.add_param(json!(5), Some("age"));
    let copy = param.clone();

    let mut parent = ParameterTable::new();
    parent.add_param(json!(1), Some("age"));
    parent.import_from(&child);

    assert_eq!(copy.name(), "age2");
    assert!(parent.get_param("age2").is_some_and(|p| p.same_as(&param)));
    assert_eq!(parent.export_values()["age2"], json!(5));
}
