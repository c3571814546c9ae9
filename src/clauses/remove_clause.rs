use crate::clauses::Clause;
use crate::parameters::ParamScope;
use crate::patterns::path_length::labels_text;

/// `REMOVE n:Label, n.prop`
#[derive(Debug, Default)]
pub struct Remove {
    scope: ParamScope,
    labels: Vec<(String, Vec<String>)>,
    properties: Vec<(String, Vec<String>)>,
}

impl Remove {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labels(mut self, variable: impl Into<String>, labels: Vec<String>) -> Self {
        self.labels.push((variable.into(), labels));
        self
    }

    pub fn properties(mut self, variable: impl Into<String>, properties: Vec<String>) -> Self {
        self.properties.push((variable.into(), properties));
        self
    }
}

impl Clause for Remove {
    fn build(&self) -> String {
        let labels = self
            .labels
            .iter()
            .map(|(variable, labels)| format!("{}{}", variable, labels_text(labels, false)));
        let properties = self.properties.iter().flat_map(|(variable, properties)| {
            properties
                .iter()
                .map(move |property| format!("{}.{}", variable, property))
        });
        let items: Vec<String> = labels.chain(properties).collect();
        format!("REMOVE {}", items.join(", "))
    }

    fn scope(&self) -> &ParamScope {
        &self.scope
    }

    fn scope_mut(&mut self) -> &mut ParamScope {
        &mut self.scope
    }
}
