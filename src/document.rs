//! Query documents: a YAML or JSON description of a query, clause by clause.
//!
//! ```yaml
//! clauses:
//!   - match:
//!       - node: [p, Person, { name: Ali }]
//!       - relation: { direction: out, args: [[KNOWS]] }
//!       - node: [f]
//!   - where: { f: { age: 30 } }
//!   - return: [p, { f: friend }]
//!   - order_by: { fields: [[friend.name, DESC]] }
//!   - limit: 10
//! ```

use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;
use thiserror::Error;

use crate::clauses::{OrderBy, Remove, SetOptions, SetProperties, Term};
use crate::errors::{describe_value, BuilderError};
use crate::patterns::{node, relation, Direction, Pattern, PatternCollection};
use crate::query::Query;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read query document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML query document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON query document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to build query: {0}")]
    Builder(#[from] BuilderError),
}

/// One node or relationship pattern
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PatternDef {
    /// Positional node arguments
    Node(Vec<Value>),
    Relation {
        #[serde(default)]
        direction: Direction,
        #[serde(default)]
        args: Vec<Value>,
    },
}

impl PatternDef {
    fn to_pattern(&self) -> Result<Pattern, BuilderError> {
        Ok(match self {
            PatternDef::Node(args) => node(args)?.into(),
            PatternDef::Relation { direction, args } => relation(*direction, args)?.into(),
        })
    }
}

/// A single pattern, one path, or several comma separated paths
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PatternsDef {
    Single(PatternDef),
    Path(Vec<PatternDef>),
    Paths(Vec<Vec<PatternDef>>),
}

impl PatternsDef {
    fn to_patterns(&self) -> Result<PatternCollection, BuilderError> {
        let path = |defs: &[PatternDef]| {
            defs
                .iter()
                .map(PatternDef::to_pattern)
                .collect::<Result<Vec<_>, _>>()
        };
        Ok(match self {
            PatternsDef::Single(def) => def.to_pattern()?.into(),
            PatternsDef::Path(defs) => path(defs)?.into(),
            PatternsDef::Paths(paths) => paths
                .iter()
                .map(|defs| path(defs))
                .collect::<Result<Vec<_>, _>>()?
                .into(),
        })
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OrderByDef {
    pub fields: Value,
    #[serde(default)]
    pub direction: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UnwindDef {
    pub list: Value,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SetDef {
    /// variable → label or labels
    #[serde(default)]
    pub labels: Map<String, Value>,
    /// key → value, each bound as a parameter
    #[serde(default)]
    pub values: Map<String, Value>,
    /// variable → expression, or variable → { property: expression }
    #[serde(default)]
    pub variables: Map<String, Value>,
    #[serde(default)]
    pub merge: bool,
}

fn string_list(value: &Value, slot: &'static str) -> Result<Vec<String>, BuilderError> {
    let invalid = || BuilderError::type_mismatch(slot, "a string or an array of strings");
    match value {
        Value::String(s) => Ok(vec![s.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
            .collect(),
        _ => Err(invalid()),
    }
}

impl SetDef {
    fn to_properties(&self) -> Result<(SetProperties, SetOptions), BuilderError> {
        let mut properties = SetProperties::new();
        for (variable, labels) in &self.labels {
            properties = properties.label(variable.clone(), string_list(labels, "labels")?);
        }
        for (key, value) in &self.values {
            properties = properties.value(key.clone(), value.clone());
        }
        for (key, variable) in &self.variables {
            properties = match variable {
                Value::String(expression) => properties.variable(key.clone(), expression.clone()),
                Value::Object(map) => {
                    let pairs = map
                        .iter()
                        .map(|(prop, expression)| match expression {
                            Value::String(expression) => Ok((prop.clone(), expression.clone())),
                            _ => Err(BuilderError::type_mismatch("variables", "a string")),
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    properties.variable_properties(key.clone(), pairs)
                }
                other => {
                    log::debug!("set variable '{}' is {}", key, describe_value(other));
                    return Err(BuilderError::type_mismatch(
                        "variables",
                        "a string or an object of strings",
                    ));
                }
            };
        }
        Ok((properties, SetOptions { merge: self.merge }))
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RemoveDef {
    #[serde(default)]
    pub labels: Map<String, Value>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl RemoveDef {
    fn to_clause(&self) -> Result<Remove, BuilderError> {
        let mut remove = Remove::new();
        for (variable, labels) in &self.labels {
            remove = remove.labels(variable.clone(), string_list(labels, "labels")?);
        }
        for (variable, properties) in &self.properties {
            remove = remove.properties(variable.clone(), string_list(properties, "properties")?);
        }
        Ok(remove)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawDef {
    pub template: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// One clause of a query document
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ClauseDef {
    Match(PatternsDef),
    OptionalMatch(PatternsDef),
    Create(PatternsDef),
    CreateUnique(PatternsDef),
    Merge(PatternsDef),
    Where(Value),
    Return(Value),
    ReturnDistinct(Value),
    With(Value),
    OrderBy(OrderByDef),
    Skip(Value),
    Limit(Value),
    Unwind(UnwindDef),
    Delete(Vec<String>),
    DetachDelete(Vec<String>),
    Set(SetDef),
    OnCreateSet(SetDef),
    OnMatchSet(SetDef),
    Remove(RemoveDef),
    Union,
    UnionAll,
    Raw(RawDef),
}

impl ClauseDef {
    fn apply(&self, query: Query) -> Result<Query, BuilderError> {
        Ok(match self {
            ClauseDef::Match(patterns) => query.match_(patterns.to_patterns()?),
            ClauseDef::OptionalMatch(patterns) => query.optional_match(patterns.to_patterns()?),
            ClauseDef::Create(patterns) => query.create(patterns.to_patterns()?),
            ClauseDef::CreateUnique(patterns) => query.create_unique(patterns.to_patterns()?),
            ClauseDef::Merge(patterns) => query.merge(patterns.to_patterns()?),
            ClauseDef::Where(condition) => query.where_(condition.clone()),
            ClauseDef::Return(terms) => query.return_(Term::try_from(terms.clone())?),
            ClauseDef::ReturnDistinct(terms) => {
                query.return_distinct(Term::try_from(terms.clone())?)
            }
            ClauseDef::With(terms) => query.with(Term::try_from(terms.clone())?),
            ClauseDef::OrderBy(def) => {
                query.add_clause(OrderBy::from_value(&def.fields, def.direction.as_ref())?)
            }
            ClauseDef::Skip(amount) => query.skip(amount.clone()),
            ClauseDef::Limit(amount) => query.limit(amount.clone()),
            ClauseDef::Unwind(def) => query.unwind(def.list.clone(), def.name.clone()),
            ClauseDef::Delete(variables) => query.delete(variables.iter().cloned()),
            ClauseDef::DetachDelete(variables) => query.detach_delete(variables.iter().cloned()),
            ClauseDef::Set(def) => {
                let (properties, options) = def.to_properties()?;
                query.set(properties, options)
            }
            ClauseDef::OnCreateSet(def) => {
                let (properties, options) = def.to_properties()?;
                query.on_create_set(properties, options)
            }
            ClauseDef::OnMatchSet(def) => {
                let (properties, options) = def.to_properties()?;
                query.on_match_set(properties, options)
            }
            ClauseDef::Remove(def) => query.remove(def.to_clause()?),
            ClauseDef::Union => query.union(),
            ClauseDef::UnionAll => query.union_all(),
            ClauseDef::Raw(def) => query.raw(&def.template, def.params.clone())?,
        })
    }
}

/// An ordered list of clauses
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct QueryDocument {
    pub clauses: Vec<ClauseDef>,
}

impl QueryDocument {
    pub fn from_yaml_str(content: &str) -> Result<Self, DocumentError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read a document, parsed as JSON when the file ends in `.json` and as YAML otherwise
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        log::debug!(
            "loading query document {} as {}",
            path.display(),
            if is_json { "JSON" } else { "YAML" }
        );
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Build the described query, clause by clause
    pub fn to_query(&self) -> Result<Query, BuilderError> {
        self.clauses
            .iter()
            .try_fold(Query::new(), |query, clause| clause.apply(query))
    }
}
