use serde_json::Value;

use crate::clauses::Clause;
use crate::errors::{describe_value, BuilderError};
use crate::interpolate::PARAM_TOKEN;
use crate::parameters::{Fragment, ParamRef, ParamScope};

/// Literal query text with optional bound values
#[derive(Debug)]
pub struct Raw {
    scope: ParamScope,
    text: Fragment,
}

impl Raw {
    /// A template string plus an object of values bound under their keys.
    ///
    /// `$key` tokens in the template that name one of the bound keys keep
    /// pointing at that value even if its parameter is renamed later.
    pub fn new(template: &str, params: Option<Value>) -> Result<Self, BuilderError> {
        let scope = ParamScope::new();
        let bound: Vec<(String, ParamRef)> = match params {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Object(map)) => map
                .into_iter()
                .map(|(key, value)| {
                    let param = scope.add_param(value, Some(&key));
                    (key, param)
                })
                .collect(),
            Some(other) => {
                return Err(BuilderError::RawClauseArgument(
                    describe_value(&other).to_string(),
                ))
            }
        };

        let mut text = Fragment::new();
        let mut last = 0;
        for caps in PARAM_TOKEN.captures_iter(template) {
            let (Some(token), Some(key)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if let Some((_, param)) = bound.iter().find(|(name, _)| name == key.as_str()) {
                text.push_str(&template[last..token.start()]);
                text.push_param(param.clone());
                last = token.end();
            }
        }
        text.push_str(&template[last..]);

        Ok(Raw { scope, text })
    }

    /// Text pieces interleaved with values, each bound as an anonymous parameter
    /// (`$p`, `$p2`, ...)
    pub fn tagged<S: AsRef<str>>(pieces: &[S], values: Vec<Value>) -> Self {
        let scope = ParamScope::new();
        let mut text = Fragment::new();
        let mut values = values.into_iter();
        for piece in pieces {
            text.push_str(piece.as_ref());
            if let Some(value) = values.next() {
                text.push_param(scope.add_param(value, None));
            }
        }
        for value in values {
            text.push_param(scope.add_param(value, None));
        }
        Raw { scope, text }
    }
}

impl Clause for Raw {
    fn build(&self) -> String {
        self.text.to_string()
    }

    fn scope(&self) -> &ParamScope {
        &self.scope
    }

    fn scope_mut(&mut self) -> &mut ParamScope {
        &mut self.scope
    }
}
