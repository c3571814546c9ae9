use std::fmt;

use super::ParamRef;

#[derive(Debug, Clone)]
enum Part {
    Text(String),
    Param(ParamRef),
}

/// A piece of query text whose parameter references are resolved at render time.
///
/// Parameters are kept as handles rather than `$name` strings so a fragment
/// rendered before its clause was merged into a query still prints the final
/// parameter names.
#[derive(Debug, Clone, Default)]
pub struct Fragment {
    parts: Vec<Part>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>) -> Self {
        let mut fragment = Self::new();
        fragment.push_str(text);
        fragment
    }

    pub fn param(param: ParamRef) -> Self {
        let mut fragment = Self::new();
        fragment.push_param(param);
        fragment
    }

    pub fn push_str(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        match self.parts.last_mut() {
            Some(Part::Text(last)) => last.push_str(&text),
            _ => self.parts.push(Part::Text(text)),
        }
    }

    pub fn push_param(&mut self, param: ParamRef) {
        self.parts.push(Part::Param(param));
    }

    pub fn append(&mut self, other: Fragment) {
        for part in other.parts {
            match part {
                Part::Text(text) => self.push_str(text),
                Part::Param(param) => self.push_param(param),
            }
        }
    }

    /// Join fragments with a separator
    pub fn join(fragments: impl IntoIterator<Item = Fragment>, separator: &str) -> Fragment {
        let mut joined = Fragment::new();
        for (index, fragment) in fragments.into_iter().enumerate() {
            if index > 0 {
                joined.push_str(separator);
            }
            joined.append(fragment);
        }
        joined
    }

    /// Wrap in parentheses
    pub fn parenthesized(self) -> Fragment {
        let mut wrapped = Fragment::text("(");
        wrapped.append(self);
        wrapped.push_str(")");
        wrapped
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Parameters referenced by this fragment, in order of appearance
    pub fn params(&self) -> impl Iterator<Item = &ParamRef> {
        self.parts.iter().filter_map(|part| match part {
            Part::Param(param) => Some(param),
            Part::Text(_) => None,
        })
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match part {
                Part::Text(text) => f.write_str(text)?,
                Part::Param(param) => write!(f, "{}", param)?,
            }
        }
        Ok(())
    }
}
