use serde::Deserialize;
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};

use super::arguments::ResolvedPattern;
use super::path_length::{labels_text, PathLength};
use super::PatternCore;
use crate::clauses::Clause;
use crate::errors::BuilderError;
use crate::parameters::ParamScope;

/// Which way a relationship arrow points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `<-[...]-`
    #[serde(alias = "left")]
    In,
    /// `-[...]->`
    #[serde(alias = "right")]
    Out,
    /// `-[...]-`
    #[default]
    Either,
}

impl FromStr for Direction {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in" | "left" => Ok(Direction::In),
            "out" | "right" => Ok(Direction::Out),
            "either" => Ok(Direction::Either),
            _ => Err(BuilderError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::In => write!(f, "in"),
            Direction::Out => write!(f, "out"),
            Direction::Either => write!(f, "either"),
        }
    }
}

/// `-[name:TYPE*min..max { key: $key }]->`
#[derive(Debug)]
pub struct RelationPattern {
    core: PatternCore,
    direction: Direction,
    length: Option<PathLength>,
}

impl RelationPattern {
    pub(crate) fn from_resolved(direction: Direction, mut resolved: ResolvedPattern) -> Self {
        let length = resolved.length.take();
        RelationPattern {
            core: PatternCore::new(resolved),
            direction,
            length,
        }
    }

    pub fn set_expanded_conditions(&mut self, expanded: bool) {
        self.core.set_expanded_conditions(expanded);
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn length(&self) -> Option<&PathLength> {
        self.length.as_ref()
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
}

impl Clause for RelationPattern {
    fn build(&self) -> String {
        let length = self
            .length
            .as_ref()
            .map(PathLength::to_string)
            .unwrap_or_default();
        let core = format!(
            "{}{}{} {}",
            self.core.name(),
            labels_text(self.core.labels(), true),
            length,
            self.core.conditions_text()
        );
        let core = core.trim();
        let body = if core.is_empty() {
            String::new()
        } else {
            format!("[{}]", core)
        };

        match self.direction {
            Direction::In => format!("<-{}-", body),
            Direction::Out => format!("-{}->", body),
            Direction::Either => format!("-{}-", body),
        }
    }

    fn scope(&self) -> &ParamScope {
        &self.core.scope
    }

    fn scope_mut(&mut self) -> &mut ParamScope {
        &mut self.core.scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::relation;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(Direction::Either, "--" ; "either")]
    #[test_case(Direction::Out, "-->" ; "out")]
    #[test_case(Direction::In, "<--" ; "in")]
    fn test_bare_relation(direction: Direction, expected: &str) {
        assert_eq!(relation(direction, &[]).unwrap().build(), expected);
    }

    #[test]
    fn test_named_relation() {
        let pattern = relation(Direction::Out, &[json!("r"), json!("T")]).unwrap();
        assert_eq!(pattern.build(), "-[r:T]->");
    }

    #[test]
    fn test_label_alternation() {
        let pattern =
            relation(Direction::In, &[json!(["FriendsWith", "RelatedTo"])]).unwrap();
        assert_eq!(pattern.build(), "<-[:FriendsWith|RelatedTo]-");
    }

    #[test]
    fn test_path_lengths() {
        let range = relation(Direction::Either, &[json!([3, 5])]).unwrap();
        assert_eq!(range.build(), "-[*3..5]-");

        let unbounded = relation(Direction::Out, &[json!("r"), json!("*")]).unwrap();
        assert_eq!(unbounded.build(), "-[r*]->");

        let open_ended = relation(Direction::Either, &[json!("r"), json!([2, null])]).unwrap();
        assert_eq!(open_ended.build(), "-[r*2..]-");
    }

    #[test]
    fn test_relation_with_conditions_and_length() {
        let pattern = relation(
            Direction::Either,
            &[json!("r"), json!("T"), json!({"active": true}), json!(3)],
        )
        .unwrap();
        assert_eq!(pattern.build(), "-[r:T*3 { active: $active }]-");
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("left".parse::<Direction>().unwrap(), Direction::In);
        assert_eq!("OUT".parse::<Direction>().unwrap(), Direction::Out);
        assert_eq!("either".parse::<Direction>().unwrap(), Direction::Either);
        assert_eq!(
            "sideways".parse::<Direction>(),
            Err(BuilderError::InvalidDirection("sideways".to_string()))
        );
    }
}
