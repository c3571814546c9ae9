use cypher_builder::clauses::{OrderDirection, Remove, SetOptions, SetProperties, Term};
use cypher_builder::conditions::{greater_than, not};
use cypher_builder::{conditions, node, relation, Clause, Direction, Pattern, Query};
use serde_json::json;

#[test]
fn test_term_rendering() {
    let query = Query::new().return_(
        Term::try_from(json!({"people": [{"name": "personName"}, "age"]})).unwrap(),
    );
    assert_eq!(query.build(), "RETURN people.name AS personName, people.age;");
}

#[test]
fn test_interpolation_boundary_tokens() {
    let query = Query::new()
        .raw(
            "RETURN $name AS a, $name2 AS b",
            Some(json!({"name": "first", "name2": "second"})),
        )
        .unwrap();
    assert_eq!(
        query.interpolate(),
        "RETURN 'first' AS a, 'second' AS b;"
    );
}

#[test]
fn test_read_query() {
    let path: Vec<Pattern> = vec![
        node!("person", "Person").unwrap().into(),
        relation!(Direction::Out, ["Owns"]).unwrap().into(),
        node!("pet", "Pet", {"species": "cat"}).unwrap().into(),
    ];
    let query = Query::new()
        .match_(path)
        .where_(conditions! {
            "person.age" => greater_than(30),
            "" => not(json!({"pet": {"name": "Tom"}})),
        })
        .with(Term::try_from(json!(["person", {"pet": "cat"}])).unwrap())
        .return_distinct(Term::try_from(json!({"person": ["name"], "cat": ["name"]})).unwrap())
        .order_by([("person.name", OrderDirection::Ascending)])
        .skip(10)
        .limit(5);

    let object = query.build_query_object();
    assert_eq!(
        object.text,
        "MATCH (person:Person)-[:Owns]->(pet:Pet { species: $species })\n\
         WHERE person.age > $age AND NOT pet.name = $name\n\
         WITH person, pet AS cat\n\
         RETURN DISTINCT person.name, cat.name\n\
         ORDER BY person.name\n\
         SKIP $skipCount\n\
         LIMIT $limitCount;"
    );
    assert_eq!(
        object.parameters,
        *json!({
            "species": "cat",
            "age": 30,
            "name": "Tom",
            "skipCount": 10,
            "limitCount": 5
        })
        .as_object()
        .unwrap()
    );
}

#[test]
fn test_write_query() {
    let query = Query::new()
        .create(node!("p", "Person", {"name": "Ali", "age": 30}).unwrap())
        .merge(node!("c", "City", {"name": "Oslo"}).unwrap())
        .on_create_set(
            SetProperties::new().value("population", 700000),
            SetOptions::default(),
        )
        .create(vec![
            Pattern::from(node!("p").unwrap()),
            relation!(Direction::Out, ["LivesIn"]).unwrap().into(),
            node!("c").unwrap().into(),
        ])
        .set(
            SetProperties::new()
                .label("p", vec!["Resident".to_string()])
                .value("p", json!({"verified": true})),
            SetOptions { merge: true },
        )
        .remove(Remove::new().properties("p", vec!["temp".to_string()]))
        .unwind(json!([1, 2]), "n")
        .detach_delete(["x"]);

    assert_eq!(
        query.build(),
        "CREATE (p:Person $conditions)\n\
         MERGE (c:City { name: $name })\n\
         ON CREATE SET population = $population\n\
         CREATE (p)-[:LivesIn]->(c)\n\
         SET p:Resident, p += $p\n\
         REMOVE p.temp\n\
         UNWIND $list AS n\n\
         DETACH DELETE x;"
    );
    let params = query.params();
    assert_eq!(params["conditions"], json!({"name": "Ali", "age": 30}));
    assert_eq!(params["name"], json!("Oslo"));
    assert_eq!(params["p"], json!({"verified": true}));
    assert_eq!(params.len(), 5);
}

#[test]
fn test_same_names_across_clauses_are_renamed() {
    let query = Query::new()
        .match_(node!("a", {"name": "x"}).unwrap())
        .where_(json!({"b": {"name": "y"}}))
        .raw("SET a.name = $name", Some(json!({"name": "z"})))
        .unwrap()
        .limit(1)
        .limit(2);
    assert_eq!(
        query.build(),
        "MATCH (a { name: $name })\n\
         WHERE b.name = $name2\n\
         SET a.name = $name3\n\
         LIMIT $limitCount\n\
         LIMIT $limitCount2;"
    );
    assert_eq!(
        query.interpolate(),
        "MATCH (a { name: 'x' })\n\
         WHERE b.name = 'y'\n\
         SET a.name = 'z'\n\
         LIMIT 1\n\
         LIMIT 2;"
    );
}

#[test]
fn test_union_of_two_parts() {
    let query = Query::new()
        .match_(node!("p", "Person").unwrap())
        .return_(Term::try_from(json!({"p": [{"name": "name"}]})).unwrap())
        .union()
        .match_(node!("d", "Department").unwrap())
        .return_(Term::try_from(json!({"d": [{"name": "name"}]})).unwrap());
    assert_eq!(
        query.build(),
        "MATCH (p:Person)\nRETURN p.name AS name\nUNION\nMATCH (d:Department)\nRETURN d.name AS name;"
    );
}

#[test]
fn test_tagged_raw() {
    let query = Query::new()
        .match_(node!("n").unwrap())
        .raw_tagged(&["WHERE n.a = ", " AND n.b = ", ""], vec![json!(1), json!(2)]);
    assert_eq!(query.build(), "MATCH (n)\nWHERE n.a = $p AND n.b = $p2;");
}

#[test]
fn test_query_object_serializes() {
    let query = Query::new().skip(3);
    let value = serde_json::to_value(query.build_query_object()).unwrap();
    assert_eq!(
        value,
        json!({"text": "SKIP $skipCount;", "parameters": {"skipCount": 3}})
    );
}

#[test]
fn test_non_ascii_names_interpolate_their_own_values() {
    let query = Query::new().where_(json!({"n": 1, "né": 2, "m²": 3}));
    assert_eq!(query.build(), "WHERE n = $n AND né = $né AND m² = $m²;");
    assert_eq!(query.interpolate(), "WHERE n = 1 AND né = 2 AND m² = 3;");
}
