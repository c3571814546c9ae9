//! Fluent query assembly.
//!
//! ```
//! use cypher_builder::{node, Clause, Query};
//!
//! # fn main() -> Result<(), cypher_builder::BuilderError> {
//! let query = Query::new()
//!     .match_(node!("p", "Person", {"name": "Ali"})?)
//!     .return_("p")
//!     .limit(1);
//! assert_eq!(
//!     query.build(),
//!     "MATCH (p:Person { name: $name })\nRETURN p\nLIMIT $limitCount;"
//! );
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clauses::{
    Clause, Create, Delete, Limit, Match, Merge, OnCreate, OnMatch, OrderBy, OrderDirection, Raw,
    Remove, Return, Set, SetOptions, SetProperties, Skip, Term, Union, Unwind, Where, With,
};
use crate::conditions::Condition;
use crate::errors::BuilderError;
use crate::parameters::{ParamScope, SharedTable};
use crate::patterns::PatternCollection;

/// Query text plus the parameter values it references
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryObject {
    pub text: String,
    pub parameters: Map<String, Value>,
}

/// An ordered list of clauses sharing one parameter table
#[derive(Debug, Default)]
pub struct Query {
    scope: ParamScope,
    clauses: Vec<Box<dyn Clause>>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a clause, folding its parameters into the query's table
    pub fn push_clause(&mut self, mut clause: Box<dyn Clause>) {
        clause.use_table(self.scope.table());
        log::debug!(
            "attached clause #{}: {}",
            self.clauses.len() + 1,
            clause.build()
        );
        self.clauses.push(clause);
    }

    pub fn add_clause(mut self, clause: impl Clause + 'static) -> Self {
        self.push_clause(Box::new(clause));
        self
    }

    pub fn clauses(&self) -> &[Box<dyn Clause>] {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn match_(self, patterns: impl Into<PatternCollection>) -> Self {
        self.add_clause(Match::new(patterns))
    }

    pub fn optional_match(self, patterns: impl Into<PatternCollection>) -> Self {
        self.add_clause(Match::new(patterns).optional())
    }

    pub fn create(self, patterns: impl Into<PatternCollection>) -> Self {
        self.add_clause(Create::new(patterns))
    }

    pub fn create_unique(self, patterns: impl Into<PatternCollection>) -> Self {
        self.add_clause(Create::new(patterns).unique())
    }

    pub fn merge(self, patterns: impl Into<PatternCollection>) -> Self {
        self.add_clause(Merge::new(patterns))
    }

    pub fn where_(self, condition: impl Into<Condition>) -> Self {
        self.add_clause(Where::new(condition))
    }

    pub fn return_(self, terms: impl Into<Term>) -> Self {
        self.add_clause(Return::new(terms))
    }

    pub fn return_distinct(self, terms: impl Into<Term>) -> Self {
        self.add_clause(Return::new(terms).distinct())
    }

    pub fn with(self, terms: impl Into<Term>) -> Self {
        self.add_clause(With::new(terms))
    }

    pub fn order_by<S: Into<String>>(
        self,
        constraints: impl IntoIterator<Item = (S, OrderDirection)>,
    ) -> Self {
        self.add_clause(OrderBy::new(constraints))
    }

    /// `ORDER BY` from loosely typed fields, see [`OrderBy::from_value`]
    pub fn order_by_value(
        self,
        fields: &Value,
        direction: Option<&Value>,
    ) -> Result<Self, BuilderError> {
        Ok(self.add_clause(OrderBy::from_value(fields, direction)?))
    }

    pub fn skip(self, amount: impl Into<Value>) -> Self {
        self.add_clause(Skip::new(amount))
    }

    pub fn limit(self, amount: impl Into<Value>) -> Self {
        self.add_clause(Limit::new(amount))
    }

    pub fn unwind(self, list: impl Into<Value>, name: impl Into<String>) -> Self {
        self.add_clause(Unwind::new(list, name))
    }

    pub fn delete<S: Into<String>>(self, variables: impl IntoIterator<Item = S>) -> Self {
        self.add_clause(Delete::new(variables))
    }

    pub fn detach_delete<S: Into<String>>(self, variables: impl IntoIterator<Item = S>) -> Self {
        self.add_clause(Delete::new(variables).detach())
    }

    pub fn set(self, properties: SetProperties, options: SetOptions) -> Self {
        self.add_clause(Set::new(properties, options))
    }

    pub fn on_create_set(self, properties: SetProperties, options: SetOptions) -> Self {
        self.add_clause(OnCreate::new(Set::new(properties, options)))
    }

    pub fn on_match_set(self, properties: SetProperties, options: SetOptions) -> Self {
        self.add_clause(OnMatch::new(Set::new(properties, options)))
    }

    pub fn remove(self, remove: Remove) -> Self {
        self.add_clause(remove)
    }

    pub fn union(self) -> Self {
        self.add_clause(Union::new(false))
    }

    pub fn union_all(self) -> Self {
        self.add_clause(Union::new(true))
    }

    pub fn raw(self, template: &str, params: Option<Value>) -> Result<Self, BuilderError> {
        Ok(self.add_clause(Raw::new(template, params)?))
    }

    pub fn raw_tagged<S: AsRef<str>>(self, pieces: &[S], values: Vec<Value>) -> Self {
        self.add_clause(Raw::tagged(pieces, values))
    }
}

impl Clause for Query {
    /// Clause texts joined by newlines, terminated by `;`
    fn build(&self) -> String {
        let clauses: Vec<String> = self.clauses.iter().map(|clause| clause.build()).collect();
        format!("{};", clauses.join("\n"))
    }

    fn scope(&self) -> &ParamScope {
        &self.scope
    }

    fn scope_mut(&mut self) -> &mut ParamScope {
        &mut self.scope
    }

    fn use_table(&mut self, table: SharedTable) {
        self.scope.use_table(table.clone());
        for clause in &mut self.clauses {
            clause.use_table(table.clone());
        }
    }
}
