use crate::clauses::Clause;
use crate::parameters::ParamScope;

/// `UNION` / `UNION ALL`
#[derive(Debug, Default)]
pub struct Union {
    scope: ParamScope,
    all: bool,
}

impl Union {
    pub fn new(all: bool) -> Self {
        Union {
            scope: ParamScope::new(),
            all,
        }
    }
}

impl Clause for Union {
    fn build(&self) -> String {
        if self.all {
            "UNION ALL".to_string()
        } else {
            "UNION".to_string()
        }
    }

    fn scope(&self) -> &ParamScope {
        &self.scope
    }

    fn scope_mut(&mut self) -> &mut ParamScope {
        &mut self.scope
    }
}
