use crate::clauses::Clause;
use crate::conditions::{compile, Condition};
use crate::parameters::{Fragment, ParamScope};

/// `WHERE condition`
///
/// The condition tree is compiled once, registering its parameters, when the
/// clause is created.
#[derive(Debug)]
pub struct Where {
    scope: ParamScope,
    condition: Fragment,
}

impl Where {
    pub fn new(condition: impl Into<Condition>) -> Self {
        let scope = ParamScope::new();
        let condition = compile(&condition.into(), &mut scope.table().borrow_mut());
        Where { scope, condition }
    }
}

impl Clause for Where {
    fn build(&self) -> String {
        format!("WHERE {}", self.condition)
    }

    fn scope(&self) -> &ParamScope {
        &self.scope
    }

    fn scope_mut(&mut self) -> &mut ParamScope {
        &mut self.scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::{and, greater_than, not, or};
    use serde_json::json;

    #[test]
    fn test_where_object() {
        let clause = Where::new(json!({"person": {"name": "Alan", "age": 54}}));
        assert_eq!(
            clause.build(),
            "WHERE person.name = $name AND person.age = $age"
        );
        assert_eq!(
            clause.params(),
            *json!({"name": "Alan", "age": 54}).as_object().unwrap()
        );
    }

    #[test]
    fn test_where_operators() {
        let clause = Where::new(or([
            and([("age", greater_than(65))]),
            not(json!({"retired": false})),
        ]));
        assert_eq!(clause.build(), "WHERE age > $age OR NOT retired = $retired");
    }

    #[test]
    fn test_build_is_repeatable() {
        let clause = Where::new(json!({"a": 1}));
        assert_eq!(clause.build(), clause.build());
        assert_eq!(clause.params().len(), 1);
    }
}
