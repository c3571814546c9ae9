use super::comparators::{last_segment, regexp, Comparator, Compare};
use super::Condition;
use crate::parameters::{Fragment, ParameterTable};

/// Binding strength of the boolean operators, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    None = 0,
    Or = 1,
    Xor = 2,
    And = 3,
    Not = 4,
}

/// Compile a condition tree at the top level
pub fn compile(condition: &Condition, table: &mut ParameterTable) -> Fragment {
    compile_at(condition, table, Precedence::None, "")
}

/// Compile a condition tree found under `field` inside an operator of `precedence`
pub fn compile_at(
    condition: &Condition,
    table: &mut ParameterTable,
    precedence: Precedence,
    field: &str,
) -> Fragment {
    match condition {
        Condition::Literal(value) => Compare::new("=", value.clone())
            .with_param_name(last_segment(field))
            .compile(table, field),
        Condition::Pattern(pattern) => regexp(pattern.as_str(), false).compile(table, field),
        Condition::Compare(comparator) => {
            let fragment = comparator.compile(table, field);
            if comparator.is_compound() && needs_parentheses(precedence, Precedence::And) {
                fragment.parenthesized()
            } else {
                fragment
            }
        }
        Condition::And(entries) => {
            let children = entries
                .iter()
                .map(|(key, child)| (extend_path(field, key), child))
                .collect();
            combine(children, table, precedence, Precedence::And, " AND ")
        }
        Condition::Or(items) => {
            let children = items.iter().map(|child| (field.to_string(), child)).collect();
            combine(children, table, precedence, Precedence::Or, " OR ")
        }
        Condition::Xor(items) => {
            let children = items.iter().map(|child| (field.to_string(), child)).collect();
            combine(children, table, precedence, Precedence::Xor, " XOR ")
        }
        Condition::Not(child) => {
            let mut fragment = Fragment::text("NOT ");
            fragment.append(compile_at(child, table, Precedence::Not, field));
            if needs_parentheses(precedence, Precedence::Not) {
                fragment.parenthesized()
            } else {
                fragment
            }
        }
    }
}

fn extend_path(field: &str, key: &str) -> String {
    match (field.is_empty(), key.is_empty()) {
        (_, true) => field.to_string(),
        (true, false) => key.to_string(),
        (false, false) => format!("{}.{}", field, key),
    }
}

fn needs_parentheses(parent: Precedence, own: Precedence) -> bool {
    parent != Precedence::None && parent > own
}

fn combine(
    children: Vec<(String, &Condition)>,
    table: &mut ParameterTable,
    precedence: Precedence,
    operator: Precedence,
    keyword: &str,
) -> Fragment {
    // A single child introduces no operator, so it keeps the parent's precedence
    let own = if children.len() < 2 {
        precedence
    } else {
        operator
    };

    let mut parts = Vec::with_capacity(children.len());
    for (field, child) in children {
        parts.push(compile_at(child, table, own, &field));
    }

    let joined = Fragment::join(parts, keyword);
    if needs_parentheses(precedence, own) {
        joined.parenthesized()
    } else {
        joined
    }
}
