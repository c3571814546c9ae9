use crate::clauses::Clause;
use crate::parameters::{ParamScope, SharedTable};
use crate::patterns::{Pattern, PatternCollection};

/// Paths of patterns sharing the clause's parameter table
#[derive(Debug)]
struct PatternList {
    scope: ParamScope,
    paths: Vec<Vec<Pattern>>,
}

impl PatternList {
    fn new(patterns: PatternCollection, expanded_conditions: bool) -> Self {
        let scope = ParamScope::new();
        let mut paths = patterns.0;
        for pattern in paths.iter_mut().flatten() {
            pattern.set_expanded_conditions(expanded_conditions);
            pattern.use_table(scope.table());
        }
        PatternList { scope, paths }
    }

    fn build(&self) -> String {
        self.paths
            .iter()
            .map(|path| path.iter().map(Pattern::build).collect::<String>())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn use_table(&mut self, table: SharedTable) {
        self.scope.use_table(table.clone());
        for pattern in self.paths.iter_mut().flatten() {
            pattern.use_table(table.clone());
        }
    }
}

/// `MATCH` / `OPTIONAL MATCH`; property conditions are expanded
#[derive(Debug)]
pub struct Match {
    patterns: PatternList,
    optional: bool,
}

impl Match {
    pub fn new(patterns: impl Into<PatternCollection>) -> Self {
        Match {
            patterns: PatternList::new(patterns.into(), true),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

impl Clause for Match {
    fn build(&self) -> String {
        let keyword = if self.optional { "OPTIONAL MATCH" } else { "MATCH" };
        format!("{} {}", keyword, self.patterns.build())
    }

    fn scope(&self) -> &ParamScope {
        &self.patterns.scope
    }

    fn scope_mut(&mut self) -> &mut ParamScope {
        &mut self.patterns.scope
    }

    fn use_table(&mut self, table: SharedTable) {
        self.patterns.use_table(table);
    }
}

/// `CREATE` / `CREATE UNIQUE`; property conditions are bound as one map
#[derive(Debug)]
pub struct Create {
    patterns: PatternList,
    unique: bool,
}

impl Create {
    pub fn new(patterns: impl Into<PatternCollection>) -> Self {
        Create {
            patterns: PatternList::new(patterns.into(), false),
            unique: false,
        }
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

impl Clause for Create {
    fn build(&self) -> String {
        let keyword = if self.unique { "CREATE UNIQUE" } else { "CREATE" };
        format!("{} {}", keyword, self.patterns.build())
    }

    fn scope(&self) -> &ParamScope {
        &self.patterns.scope
    }

    fn scope_mut(&mut self) -> &mut ParamScope {
        &mut self.patterns.scope
    }

    fn use_table(&mut self, table: SharedTable) {
        self.patterns.use_table(table);
    }
}

/// `MERGE`; property conditions are expanded
#[derive(Debug)]
pub struct Merge {
    patterns: PatternList,
}

impl Merge {
    pub fn new(patterns: impl Into<PatternCollection>) -> Self {
        Merge {
            patterns: PatternList::new(patterns.into(), true),
        }
    }
}

impl Clause for Merge {
    fn build(&self) -> String {
        format!("MERGE {}", self.patterns.build())
    }

    fn scope(&self) -> &ParamScope {
        &self.patterns.scope
    }

    fn scope_mut(&mut self) -> &mut ParamScope {
        &mut self.patterns.scope
    }

    fn use_table(&mut self, table: SharedTable) {
        self.patterns.use_table(table);
    }
}
