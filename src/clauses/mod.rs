//! Clause types and the [`Clause`] capability they share.

mod delete_clause;
mod order_by_clause;
mod paging;
mod pattern_clause;
mod raw_clause;
mod remove_clause;
mod set_clause;
mod term_list;
mod union_clause;
mod unwind_clause;
mod where_clause;

pub use delete_clause::Delete;
pub use order_by_clause::{OrderBy, OrderDirection};
pub use paging::{Limit, Skip};
pub use pattern_clause::{Create, Match, Merge};
pub use raw_clause::Raw;
pub use remove_clause::Remove;
pub use set_clause::{OnCreate, OnMatch, Set, SetOptions, SetProperties, SetVariable};
pub use term_list::{PropertyTerm, Return, Term, With};
pub use union_clause::Union;
pub use unwind_clause::Unwind;
pub use where_clause::Where;

use serde_json::{Map, Value};
use std::fmt;

use crate::parameters::{ParamScope, SharedTable};
use crate::query::QueryObject;

/// Anything that renders a piece of query text against a parameter table.
///
/// Every clause starts with a private table. Attaching it to a query calls
/// [`Clause::use_table`], which folds the private parameters into the query's
/// table and renames them where needed.
pub trait Clause: fmt::Debug {
    /// Render this clause's text
    fn build(&self) -> String;

    fn scope(&self) -> &ParamScope;

    fn scope_mut(&mut self) -> &mut ParamScope;

    /// Move this clause (and anything it owns) onto another table
    fn use_table(&mut self, table: SharedTable) {
        self.scope_mut().use_table(table);
    }

    /// Current parameter values by name
    fn params(&self) -> Map<String, Value> {
        self.scope().export_values()
    }

    fn build_query_object(&self) -> QueryObject {
        QueryObject {
            text: self.build(),
            parameters: self.params(),
        }
    }

    /// Debug only: the text with every parameter replaced by its literal value
    fn interpolate(&self) -> String {
        crate::interpolate::interpolate(&self.build(), &self.params())
    }
}
