use serde_json::Value;

use crate::clauses::Clause;
use crate::parameters::{ParamRef, ParamScope};

/// `SKIP $skipCount`
#[derive(Debug)]
pub struct Skip {
    scope: ParamScope,
    amount: ParamRef,
}

impl Skip {
    pub fn new(amount: impl Into<Value>) -> Self {
        let scope = ParamScope::new();
        let amount = scope.add_param(amount.into(), Some("skipCount"));
        Skip { scope, amount }
    }
}

impl Clause for Skip {
    fn build(&self) -> String {
        format!("SKIP {}", self.amount)
    }

    fn scope(&self) -> &ParamScope {
        &self.scope
    }

    fn scope_mut(&mut self) -> &mut ParamScope {
        &mut self.scope
    }
}

/// `LIMIT $limitCount`
#[derive(Debug)]
pub struct Limit {
    scope: ParamScope,
    amount: ParamRef,
}

impl Limit {
    pub fn new(amount: impl Into<Value>) -> Self {
        let scope = ParamScope::new();
        let amount = scope.add_param(amount.into(), Some("limitCount"));
        Limit { scope, amount }
    }
}

impl Clause for Limit {
    fn build(&self) -> String {
        format!("LIMIT {}", self.amount)
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
    use serde_json::json;

    #[test]
    fn test_skip_and_limit() {
        let skip = Skip::new(10);
        assert_eq!(skip.build(), "SKIP $skipCount");
        assert_eq!(skip.params(), *json!({"skipCount": 10}).as_object().unwrap());

        let limit = Limit::new(5);
        assert_eq!(limit.build(), "LIMIT $limitCount");
        assert_eq!(limit.interpolate(), "LIMIT 5");
    }
}
