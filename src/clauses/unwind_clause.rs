use serde_json::Value;

use crate::clauses::Clause;
use crate::parameters::{ParamRef, ParamScope};

/// `UNWIND $list AS name`
#[derive(Debug)]
pub struct Unwind {
    scope: ParamScope,
    list: ParamRef,
    name: String,
}

impl Unwind {
    pub fn new(list: impl Into<Value>, name: impl Into<String>) -> Self {
        let scope = ParamScope::new();
        let list = scope.add_param(list.into(), Some("list"));
        Unwind {
            scope,
            list,
            name: name.into(),
        }
    }
}

impl Clause for Unwind {
    fn build(&self) -> String {
        format!("UNWIND {} AS {}", self.list, self.name)
    }

    fn scope(&self) -> &ParamScope {
        &self.scope
    }

    fn scope_mut(&mut self) -> &mut ParamScope {
        &mut self.scope
    }
}
