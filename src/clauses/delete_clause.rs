use crate::clauses::Clause;
use crate::parameters::ParamScope;

/// `[DETACH] DELETE a, b`
#[derive(Debug)]
pub struct Delete {
    scope: ParamScope,
    variables: Vec<String>,
    detach: bool,
}

impl Delete {
    pub fn new<S: Into<String>>(variables: impl IntoIterator<Item = S>) -> Self {
        Delete {
            scope: ParamScope::new(),
            variables: variables.into_iter().map(Into::into).collect(),
            detach: false,
        }
    }

    pub fn detach(mut self) -> Self {
        self.detach = true;
        self
    }
}

impl Clause for Delete {
    fn build(&self) -> String {
        let keyword = if self.detach { "DETACH DELETE" } else { "DELETE" };
        format!("{} {}", keyword, self.variables.join(", "))
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

    #[test]
    fn test_delete() {
        assert_eq!(Delete::new(["p"]).build(), "DELETE p");
        assert_eq!(
            Delete::new(vec!["p", "r"]).detach().build(),
            "DETACH DELETE p, r"
        );
    }
}
