use serde_json::{Map, Value};

use super::arguments::ResolvedPattern;
use super::path_length::labels_text;
use super::PatternCore;
use crate::clauses::Clause;
use crate::parameters::ParamScope;

/// `(name:Label { key: $key })`
#[derive(Debug)]
pub struct NodePattern {
    core: PatternCore,
}

impl NodePattern {
    pub(crate) fn from_resolved(resolved: ResolvedPattern) -> Self {
        NodePattern {
            core: PatternCore::new(resolved),
        }
    }

    /// Switch between one parameter per condition key and a single
    /// `$conditions` parameter
    pub fn set_expanded_conditions(&mut self, expanded: bool) {
        self.core.set_expanded_conditions(expanded);
    }

    pub fn name(&self) -> &str {
        self.core.name()
    }

    pub fn labels(&self) -> &[String] {
        self.core.labels()
    }

    pub fn conditions(&self) -> &Map<String, Value> {
        self.core.conditions()
    }

    pub fn uses_expanded_conditions(&self) -> bool {
        self.core.uses_expanded_conditions()
    }
}

impl Clause for NodePattern {
    fn build(&self) -> String {
        let inner = format!(
            "{}{} {}",
            self.core.name(),
            labels_text(self.core.labels(), false),
            self.core.conditions_text()
        );
        format!("({})", inner.trim())
    }

    fn scope(&self) -> &ParamScope {
        &self.core.scope
    }

    fn scope_mut(&mut self) -> &mut ParamScope {
        &mut self.core.scope
    }
}
