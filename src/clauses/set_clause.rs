//! `SET`, `ON CREATE SET` and `ON MATCH SET`.

use serde_json::Value;

use crate::clauses::Clause;
use crate::parameters::{ParamRef, ParamScope, SharedTable};
use crate::patterns::path_length::labels_text;

/// A variable assignment: either `n = expr` or per-property `n.prop = expr`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetVariable {
    Whole(String),
    Properties(Vec<(String, String)>),
}

/// What a `SET` clause assigns, rendered labels first, then values, then variables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetProperties {
    /// `n:Label:Other`
    pub labels: Vec<(String, Vec<String>)>,
    /// `n = $n` (or `+=` for maps when merging)
    pub values: Vec<(String, Value)>,
    /// Raw expressions, inserted as written
    pub variables: Vec<(String, SetVariable)>,
}

impl SetProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, variable: impl Into<String>, labels: Vec<String>) -> Self {
        self.labels.push((variable.into(), labels));
        self
    }

    pub fn value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.push((key.into(), value.into()));
        self
    }

    pub fn variable(mut self, key: impl Into<String>, expression: impl Into<String>) -> Self {
        self.variables
            .push((key.into(), SetVariable::Whole(expression.into())));
        self
    }

    pub fn variable_properties(
        mut self,
        key: impl Into<String>,
        properties: Vec<(String, String)>,
    ) -> Self {
        self.variables
            .push((key.into(), SetVariable::Properties(properties)));
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetOptions {
    /// Use `+=` so maps are merged into existing properties
    pub merge: bool,
}

#[derive(Debug)]
pub struct Set {
    scope: ParamScope,
    labels: Vec<(String, Vec<String>)>,
    values: Vec<(String, ParamRef)>,
    variables: Vec<(String, SetVariable)>,
    merge: bool,
}

impl Set {
    pub fn new(properties: SetProperties, options: SetOptions) -> Self {
        let scope = ParamScope::new();
        let values = properties
            .values
            .into_iter()
            .map(|(key, value)| {
                let param = scope.add_param(value, Some(&key));
                (key, param)
            })
            .collect();
        Set {
            scope,
            labels: properties.labels,
            values,
            variables: properties.variables,
            merge: options.merge,
        }
    }

    fn statements(&self) -> Vec<String> {
        let assign = if self.merge { " += " } else { " = " };
        let labels = self
            .labels
            .iter()
            .map(|(key, labels)| format!("{}{}", key, labels_text(labels, false)));
        let values = self.values.iter().map(|(key, param)| {
            let op = if self.merge && param.value().is_object() {
                " += "
            } else {
                " = "
            };
            format!("{}{}{}", key, op, param)
        });
        let variables = self.variables.iter().map(|(key, variable)| match variable {
            SetVariable::Whole(expression) => format!("{}{}{}", key, assign, expression),
            SetVariable::Properties(properties) => properties
                .iter()
                .map(|(prop, expression)| format!("{}.{}{}{}", key, prop, assign, expression))
                .collect::<Vec<_>>()
                .join(", "),
        });
        labels.chain(values).chain(variables).collect()
    }
}

impl Clause for Set {
    fn build(&self) -> String {
        format!("SET {}", self.statements().join(", "))
    }

    fn scope(&self) -> &ParamScope {
        &self.scope
    }

    fn scope_mut(&mut self) -> &mut ParamScope {
        &mut self.scope
    }
}

/// `ON CREATE SET ...` following a `MERGE`
#[derive(Debug)]
pub struct OnCreate {
    clause: Set,
}

impl OnCreate {
    pub fn new(clause: Set) -> Self {
        OnCreate { clause }
    }
}

impl Clause for OnCreate {
    fn build(&self) -> String {
        format!("ON CREATE {}", self.clause.build())
    }

    fn scope(&self) -> &ParamScope {
        self.clause.scope()
    }

    fn scope_mut(&mut self) -> &mut ParamScope {
        self.clause.scope_mut()
    }

    fn use_table(&mut self, table: SharedTable) {
        self.clause.use_table(table);
    }
}

/// `ON MATCH SET ...` following a `MERGE`
#[derive(Debug)]
pub struct OnMatch {
    clause: Set,
}

impl OnMatch {
    pub fn new(clause: Set) -> Self {
        OnMatch { clause }
    }
}

impl Clause for OnMatch {
    fn build(&self) -> String {
        format!("ON MATCH {}", self.clause.build())
    }

    fn scope(&self) -> &ParamScope {
        self.clause.scope()
    }

    fn scope_mut(&mut self) -> &mut ParamScope {
        self.clause.scope_mut()
    }

    fn use_table(&mut self, table: SharedTable) {
        self.clause.use_table(table);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_set_order_is_labels_values_variables() {
        let clause = Set::new(
            SetProperties::new()
                .variable("p.age", "p.age + 1")
                .value("name", "Ali")
                .label("p", labels(&["Active", "Verified"])),
            SetOptions::default(),
        );
        assert_eq!(
            clause.build(),
            "SET p:Active:Verified, name = $name, p.age = p.age + 1"
        );
        assert_eq!(clause.params(), *json!({"name": "Ali"}).as_object().unwrap());
    }

    #[test]
    fn test_set_merge_only_merges_maps() {
        let clause = Set::new(
            SetProperties::new()
                .value("p", json!({"age": 3}))
                .value("count", 2),
            SetOptions { merge: true },
        );
        assert_eq!(clause.build(), "SET p += $p, count = $count");
    }

    #[test]
    fn test_set_variable_properties() {
        let properties = vec![
            ("name".to_string(), "other.name".to_string()),
            ("age".to_string(), "other.age".to_string()),
        ];
        let plain = Set::new(
            SetProperties::new().variable_properties("p", properties.clone()),
            SetOptions::default(),
        );
        assert_eq!(plain.build(), "SET p.name = other.name, p.age = other.age");

        let merged = Set::new(
            SetProperties::new().variable("p", "other"),
            SetOptions { merge: true },
        );
        assert_eq!(merged.build(), "SET p += other");
    }

    #[test]
    fn test_on_create_and_on_match() {
        let on_create = OnCreate::new(Set::new(
            SetProperties::new().value("created", true),
            SetOptions::default(),
        ));
        assert_eq!(on_create.build(), "ON CREATE SET created = $created");
        assert_eq!(on_create.params().len(), 1);

        let on_match = OnMatch::new(Set::new(
            SetProperties::new().label("p", labels(&["Seen"])),
            SetOptions::default(),
        ));
        assert_eq!(on_match.build(), "ON MATCH SET p:Seen");
    }
}
