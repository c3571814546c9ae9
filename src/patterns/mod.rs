//! Node and relationship patterns.

pub mod arguments;
mod node_pattern;
pub mod path_length;
mod relation_pattern;

pub use arguments::{
    is_conditions_shape, is_path_length_shape, resolve_node_args, resolve_relation_args,
    RawPatternArgs, ResolvedPattern,
};
pub use node_pattern::NodePattern;
pub use path_length::PathLength;
pub use relation_pattern::{Direction, RelationPattern};

use serde_json::{Map, Value};

use crate::clauses::Clause;
use crate::errors::BuilderError;
use crate::parameters::{ParamRef, ParamScope, SharedTable};

/// Create a node pattern from positional arguments.
///
/// ```text
/// node([])                                 ()
/// node(["parent"])                         (parent)
/// node(["parent", "Person"])               (parent:Person)
/// node([["Person"]])                       (:Person)
/// node([{"name": "Gwenn"}])                ({ name: $name })
/// node(["parent", "Person", {"name": ..}]) (parent:Person { name: $name })
/// ```
pub fn node(args: &[Value]) -> Result<NodePattern, BuilderError> {
    let raw = RawPatternArgs::from_positional(args, 3)?;
    Ok(NodePattern::from_resolved(resolve_node_args(raw)?))
}

/// Create a relationship pattern from a direction and positional arguments.
///
/// ```text
/// relation(Either, [])                              --
/// relation(Out, ["rel", "FriendsWith"])             -[rel:FriendsWith]->
/// relation(In, [["FriendsWith", "RelatedTo"]])      <-[:FriendsWith|RelatedTo]-
/// relation(In, [[4, 10]])                           <-[*4..10]-
/// relation(Either, ["r", "T", {"active": ..}, 3])   -[r:T*3 { active: $active }]-
/// ```
pub fn relation(direction: Direction, args: &[Value]) -> Result<RelationPattern, BuilderError> {
    let raw = RawPatternArgs::from_positional(args, 4)?;
    Ok(RelationPattern::from_resolved(
        direction,
        resolve_relation_args(raw)?,
    ))
}

/// How a pattern's property conditions are currently bound
#[derive(Debug, Clone)]
enum BoundConditions {
    None,
    /// One parameter per key, kept in key order
    Expanded(Vec<(String, ParamRef)>),
    /// The whole map as a single `conditions` parameter
    Collapsed(ParamRef),
}

/// State shared by node and relationship patterns
#[derive(Debug)]
pub(crate) struct PatternCore {
    scope: ParamScope,
    name: String,
    labels: Vec<String>,
    conditions: Map<String, Value>,
    expanded: Option<bool>,
    bound: BoundConditions,
}

impl PatternCore {
    fn new(resolved: ResolvedPattern) -> Self {
        let mut core = PatternCore {
            scope: ParamScope::new(),
            name: resolved.name,
            labels: resolved.labels,
            conditions: resolved.conditions,
            expanded: None,
            bound: BoundConditions::None,
        };
        core.set_expanded_conditions(true);
        core
    }

    pub(crate) fn set_expanded_conditions(&mut self, expanded: bool) {
        if self.expanded != Some(expanded) {
            self.expanded = Some(expanded);
            self.rebind_conditions();
        }
    }

    fn rebind_conditions(&mut self) {
        match std::mem::replace(&mut self.bound, BoundConditions::None) {
            BoundConditions::None => {}
            BoundConditions::Expanded(params) => {
                for (_, param) in &params {
                    self.scope.delete_param(param);
                }
            }
            BoundConditions::Collapsed(param) => self.scope.delete_param(&param),
        }

        if self.conditions.is_empty() {
            return;
        }

        self.bound = if self.expanded == Some(true) {
            BoundConditions::Expanded(
                self.conditions
                    .iter()
                    .map(|(key, value)| (key.clone(), self.scope.add_param(value.clone(), Some(key))))
                    .collect(),
            )
        } else {
            BoundConditions::Collapsed(
                self.scope
                    .add_param(Value::Object(self.conditions.clone()), Some("conditions")),
            )
        };
    }

    fn conditions_text(&self) -> String {
        match &self.bound {
            BoundConditions::None => String::new(),
            BoundConditions::Expanded(params) => {
                let pairs: Vec<String> = params
                    .iter()
                    .map(|(key, param)| format!("{}: {}", key, param))
                    .collect();
                format!("{{ {} }}", pairs.join(", "))
            }
            BoundConditions::Collapsed(param) => param.to_string(),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn labels(&self) -> &[String] {
        &self.labels
    }

    pub(crate) fn conditions(&self) -> &Map<String, Value> {
        &self.conditions
    }

    pub(crate) fn uses_expanded_conditions(&self) -> bool {
        self.expanded == Some(true)
    }
}

/// Either kind of pattern, as accepted by pattern clauses
#[derive(Debug)]
pub enum Pattern {
    Node(NodePattern),
    Relation(RelationPattern),
}

impl Pattern {
    pub fn set_expanded_conditions(&mut self, expanded: bool) {
        match self {
            Pattern::Node(node) => node.set_expanded_conditions(expanded),
            Pattern::Relation(relation) => relation.set_expanded_conditions(expanded),
        }
    }

    pub fn build(&self) -> String {
        match self {
            Pattern::Node(node) => node.build(),
            Pattern::Relation(relation) => relation.build(),
        }
    }

    pub fn use_table(&mut self, table: SharedTable) {
        match self {
            Pattern::Node(node) => node.use_table(table),
            Pattern::Relation(relation) => relation.use_table(table),
        }
    }
}

impl From<NodePattern> for Pattern {
    fn from(node: NodePattern) -> Self {
        Pattern::Node(node)
    }
}

impl From<RelationPattern> for Pattern {
    fn from(relation: RelationPattern) -> Self {
        Pattern::Relation(relation)
    }
}

/// Comma separated paths, each a chain of patterns rendered back to back
#[derive(Debug, Default)]
pub struct PatternCollection(pub Vec<Vec<Pattern>>);

impl From<Pattern> for PatternCollection {
    fn from(pattern: Pattern) -> Self {
        PatternCollection(vec![vec![pattern]])
    }
}

impl From<NodePattern> for PatternCollection {
    fn from(node: NodePattern) -> Self {
        Pattern::from(node).into()
    }
}

impl From<RelationPattern> for PatternCollection {
    fn from(relation: RelationPattern) -> Self {
        Pattern::from(relation).into()
    }
}

impl From<Vec<Pattern>> for PatternCollection {
    fn from(path: Vec<Pattern>) -> Self {
        PatternCollection(vec![path])
    }
}

impl From<Vec<Vec<Pattern>>> for PatternCollection {
    fn from(paths: Vec<Vec<Pattern>>) -> Self {
        PatternCollection(paths)
    }
}
