//! Comparison leaves of a condition tree.
//!
//! A comparator renders one comparison against the field path it is found
//! under, registering its operand as a parameter unless it was marked as a
//! query variable.

use serde_json::Value;
use std::fmt;

use crate::parameters::{Fragment, ParameterTable};
use crate::utils::identifier_case::capitalize;

/// Renders `field <op> operand` for the field path it is compiled under
pub trait Comparator: fmt::Debug {
    fn compile(&self, table: &mut ParameterTable, field: &str) -> Fragment;

    /// True when the rendered text joins several comparisons with `AND`
    fn is_compound(&self) -> bool {
        false
    }
}

/// Last segment of a dotted field path, used as the parameter name hint
pub(crate) fn last_segment(field: &str) -> &str {
    field.rsplit('.').next().unwrap_or(field)
}

fn variable_text(operand: &Value) -> String {
    match operand {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A binary comparison such as `age >= $age`
#[derive(Debug, Clone, PartialEq)]
pub struct Compare {
    operator: &'static str,
    operand: Value,
    variable: bool,
    param_name: Option<String>,
}

impl Compare {
    pub fn new(operator: &'static str, operand: impl Into<Value>) -> Self {
        Compare {
            operator,
            operand: operand.into(),
            variable: false,
            param_name: None,
        }
    }

    /// Insert the operand verbatim as a query variable (`age > other.age`)
    pub fn as_variable(mut self) -> Self {
        self.variable = true;
        self
    }

    /// Override the parameter name hint (defaults to the last field segment)
    pub fn with_param_name(mut self, name: impl Into<String>) -> Self {
        self.param_name = Some(name.into());
        self
    }

    pub fn operator(&self) -> &str {
        self.operator
    }
}

impl Comparator for Compare {
    fn compile(&self, table: &mut ParameterTable, field: &str) -> Fragment {
        let mut fragment = Fragment::text(format!("{} {} ", field, self.operator));
        if self.variable {
            fragment.push_str(variable_text(&self.operand));
        } else {
            let hint = self
                .param_name
                .as_deref()
                .unwrap_or_else(|| last_segment(field));
            fragment.push_param(table.add_param(self.operand.clone(), Some(hint)));
        }
        fragment
    }
}

pub fn equals(value: impl Into<Value>) -> Compare {
    Compare::new("=", value)
}

pub fn greater_than(value: impl Into<Value>) -> Compare {
    Compare::new(">", value)
}

pub fn greater_equal_to(value: impl Into<Value>) -> Compare {
    Compare::new(">=", value)
}

pub fn less_than(value: impl Into<Value>) -> Compare {
    Compare::new("<", value)
}

pub fn less_equal_to(value: impl Into<Value>) -> Compare {
    Compare::new("<=", value)
}

pub fn starts_with(value: impl Into<Value>) -> Compare {
    Compare::new("STARTS WITH", value)
}

pub fn ends_with(value: impl Into<Value>) -> Compare {
    Compare::new("ENDS WITH", value)
}

pub fn contains(value: impl Into<Value>) -> Compare {
    Compare::new("CONTAINS", value)
}

pub fn in_array(value: impl Into<Value>) -> Compare {
    Compare::new("IN", value)
}

/// `field =~ $field`; `insensitive` prefixes the expression with `(?i)`
pub fn regexp(pattern: &str, insensitive: bool) -> Compare {
    let expression = if insensitive {
        format!("(?i){}", pattern)
    } else {
        pattern.to_string()
    };
    Compare::new("=~", expression)
}

/// `field >= $lowerField AND field <= $upperField`
#[derive(Debug, Clone, PartialEq)]
pub struct Between {
    lower: Value,
    upper: Value,
    lower_inclusive: bool,
    upper_inclusive: bool,
    variable: bool,
}

impl Between {
    /// Choose strict (`>` / `<`) or inclusive bounds
    pub fn inclusive(mut self, lower: bool, upper: bool) -> Self {
        self.lower_inclusive = lower;
        self.upper_inclusive = upper;
        self
    }

    pub fn as_variable(mut self) -> Self {
        self.variable = true;
        self
    }
}

impl Comparator for Between {
    fn compile(&self, table: &mut ParameterTable, field: &str) -> Fragment {
        let suffix = capitalize(field);
        let lower_op = if self.lower_inclusive { ">=" } else { ">" };
        let upper_op = if self.upper_inclusive { "<=" } else { "<" };

        let mut lower = Compare::new(lower_op, self.lower.clone())
            .with_param_name(format!("lower{}", suffix));
        let mut upper = Compare::new(upper_op, self.upper.clone())
            .with_param_name(format!("upper{}", suffix));
        if self.variable {
            lower = lower.as_variable();
            upper = upper.as_variable();
        }

        let mut fragment = lower.compile(table, field);
        fragment.push_str(" AND ");
        fragment.append(upper.compile(table, field));
        fragment
    }

    fn is_compound(&self) -> bool {
        true
    }
}

pub fn between(lower: impl Into<Value>, upper: impl Into<Value>) -> Between {
    Between {
        lower: lower.into(),
        upper: upper.into(),
        lower_inclusive: true,
        upper_inclusive: true,
        variable: false,
    }
}

/// `field IS NULL`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsNull;

impl Comparator for IsNull {
    fn compile(&self, _table: &mut ParameterTable, field: &str) -> Fragment {
        Fragment::text(format!("{} IS NULL", field))
    }
}

pub fn is_null() -> IsNull {
    IsNull
}

/// `field:Label`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasLabel(pub String);

impl Comparator for HasLabel {
    fn compile(&self, _table: &mut ParameterTable, field: &str) -> Fragment {
        Fragment::text(format!("{}:{}", field, self.0))
    }
}

pub fn has_label(label: impl Into<String>) -> HasLabel {
    HasLabel(label.into())
}

/// `exists(field)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exists;

impl Comparator for Exists {
    fn compile(&self, _table: &mut ParameterTable, field: &str) -> Fragment {
        Fragment::text(format!("exists({})", field))
    }
}

pub fn exists() -> Exists {
    Exists
}
