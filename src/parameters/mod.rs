//! Named query parameters.
//!
//! A [`ParameterTable`] owns the namespace of one query. Clauses are built
//! against their own table and folded into the query's shared table when they
//! are attached; folding renames colliding parameters in place, so every
//! [`ParamRef`] held by already rendered fragments follows the rename.

mod fragment;

pub use fragment::Fragment;

use serde_json::{Map, Value};
use std::{cell::RefCell, fmt, rc::Rc};

use crate::utils::identifier_case::{unique_name, DEFAULT_PARAM_NAME};

/// A single bound value
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub value: Value,
}

/// Shared handle to a [`Parameter`].
///
/// Displays as `$name` using the parameter's current name.
#[derive(Debug, Clone)]
pub struct ParamRef(Rc<RefCell<Parameter>>);

impl ParamRef {
    fn new(name: String, value: Value) -> Self {
        ParamRef(Rc::new(RefCell::new(Parameter { name, value })))
    }

    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    pub fn value(&self) -> Value {
        self.0.borrow().value.clone()
    }

    /// True when both handles point at the same parameter
    pub fn same_as(&self, other: &ParamRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn rename(&self, name: String) {
        self.0.borrow_mut().name = name;
    }
}

impl fmt::Display for ParamRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0.borrow().name)
    }
}

/// The parameters of one query (or of one clause before it is attached).
///
/// Names are unique at all times and insertion order is preserved.
#[derive(Debug, Default)]
pub struct ParameterTable {
    params: Vec<ParamRef>,
}

/// A table shared by every clause of a query
pub type SharedTable = Rc<RefCell<ParameterTable>>;

impl ParameterTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedTable {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Compute a free name derived from `hint` (`"p"` when absent)
    pub fn unique_name(&self, hint: Option<&str>) -> String {
        let names: Vec<String> = self.params.iter().map(ParamRef::name).collect();
        unique_name(
            hint.unwrap_or(DEFAULT_PARAM_NAME),
            names.iter().map(String::as_str),
        )
    }

    /// Register a new parameter and return its handle
    pub fn add_param(&mut self, value: Value, hint: Option<&str>) -> ParamRef {
        let name = self.unique_name(hint);
        let param = ParamRef::new(name, value);
        self.params.push(param.clone());
        param
    }

    /// Register an existing parameter, renaming it if its name is taken.
    ///
    /// Adding a parameter this table already holds is a no-op.
    pub fn add_existing_param(&mut self, param: &ParamRef) -> ParamRef {
        if self.params.iter().any(|p| p.same_as(param)) {
            return param.clone();
        }
        let current = param.name();
        let name = self.unique_name(Some(&current));
        if name != current {
            log::trace!("renaming parameter ${} to ${} on merge", current, name);
            param.rename(name);
        }
        self.params.push(param.clone());
        param.clone()
    }

    pub fn get_param(&self, name: &str) -> Option<ParamRef> {
        self.params.iter().find(|p| p.name() == name).cloned()
    }

    pub fn delete_param(&mut self, name: &str) {
        self.params.retain(|p| p.name() != name);
    }

    /// Fold every parameter of `other` into this table, keeping identities
    pub fn import_from(&mut self, other: &ParameterTable) {
        for param in &other.params {
            self.add_existing_param(param);
        }
    }

    /// Name → value map, in registration order
    pub fn export_values(&self) -> Map<String, Value> {
        self.params
            .iter()
            .map(|p| {
                let param = p.0.borrow();
                (param.name.clone(), param.value.clone())
            })
            .collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.params.iter().map(ParamRef::name).collect()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// The table a builder object currently registers its parameters in.
///
/// Starts out private; [`ParamScope::use_table`] moves everything registered so
/// far into another table and switches to it.
#[derive(Debug, Clone)]
pub struct ParamScope {
    table: SharedTable,
}

impl Default for ParamScope {
    fn default() -> Self {
        Self {
            table: ParameterTable::shared(),
        }
    }
}

impl ParamScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self) -> SharedTable {
        self.table.clone()
    }

    pub fn add_param(&self, value: Value, hint: Option<&str>) -> ParamRef {
        self.table.borrow_mut().add_param(value, hint)
    }

    pub fn delete_param(&self, param: &ParamRef) {
        self.table.borrow_mut().delete_param(&param.name());
    }

    pub fn export_values(&self) -> Map<String, Value> {
        self.table.borrow().export_values()
    }

    pub fn use_table(&mut self, table: SharedTable) {
        if Rc::ptr_eq(&self.table, &table) {
            return;
        }
        table.borrow_mut().import_from(&self.table.borrow());
        self.table = table;
    }
}
