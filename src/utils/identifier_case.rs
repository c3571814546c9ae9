//! Identifier folding for parameter names.
//!
//! Parameter names are derived from arbitrary hints (property keys, field
//! paths like `person.age`, user supplied names). They are folded to
//! lower camel case and then given the smallest free numeric suffix.
//!
//! ## Naming Convention
//! - `"person_age"` → `"personAge"`
//! - `"lowerPerson.age"` → `"lowerPersonAge"`
//! - `"age"` with `{age, age2}` taken → `"age3"`
//! - a suffix of `1` is never written: the bare base name stands for it

use std::collections::HashSet;

/// Base name used when a hint folds to nothing
pub const DEFAULT_PARAM_NAME: &str = "p";

/// Split a string into words.
///
/// Separators are any non-alphanumeric characters. Inside alphanumeric runs a
/// new word starts at a lower→upper transition, at the last capital of an
/// acronym that is followed by lowercase letters (`XMLHttp` → `XML`, `Http`)
/// and at letter/digit boundaries.
fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if !c.is_alphanumeric() {
            i += 1;
            continue;
        }

        let start = i;
        if c.is_numeric() {
            while i < chars.len() && chars[i].is_numeric() {
                i += 1;
            }
        } else if c.is_uppercase() {
            let mut j = i;
            while j < chars.len() && chars[j].is_uppercase() {
                j += 1;
            }
            let followed_by_lower = j < chars.len() && is_lower_letter(chars[j]);
            if j - i > 1 && followed_by_lower {
                // The last capital starts the next word
                i = j - 1;
            } else if followed_by_lower {
                i = j;
                while i < chars.len() && is_lower_letter(chars[i]) {
                    i += 1;
                }
            } else {
                i = j;
            }
        } else {
            while i < chars.len() && is_lower_letter(chars[i]) {
                i += 1;
            }
        }
        // Alphanumerics outside every class above form a word of their own
        if i == start {
            i += 1;
        }

        words.push(chars[start..i].iter().collect());
    }

    words
}

fn is_lower_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_uppercase()
}

/// Fold an arbitrary string to lower camel case.
///
/// # Examples
/// ```
/// use cypher_builder::utils::identifier_case::camel_case;
///
/// assert_eq!(camel_case("person_age"), "personAge");
/// assert_eq!(camel_case("skipCount"), "skipCount");
/// assert_eq!(camel_case("FOO-BAR"), "fooBar");
/// ```
pub fn camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (index, word) in split_words(input).iter().enumerate() {
        if index == 0 {
            out.push_str(&word.to_lowercase());
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out
}

/// Uppercase the first character and lowercase the rest (`"person.Age"` → `"Person.age"`)
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

/// Split a trailing run of digits off a name. A zero suffix counts as no suffix.
fn split_numeric_suffix(name: &str) -> (&str, Option<u64>) {
    let digits = name.len() - name.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return (name, None);
    }
    let (base, suffix) = name.split_at(name.len() - digits);
    match suffix.parse::<u64>() {
        Ok(0) => (base, None),
        Ok(n) => (base, Some(n)),
        // Too long to be a counter, keep it as part of the base
        Err(_) => (name, None),
    }
}

/// Produce a camel cased name from `hint` that does not collide with `existing`.
///
/// The suffix used is the first free count starting at the hint's own suffix
/// (or at 1 when it has none); a suffix of 1 is omitted.
///
/// # Examples
/// ```
/// use cypher_builder::utils::identifier_case::unique_name;
///
/// assert_eq!(unique_name("age", ["age", "age2"]), "age3");
/// assert_eq!(unique_name("age", ["age"]), "age2");
/// assert_eq!(unique_name("age", Vec::<&str>::new()), "age");
/// ```
pub fn unique_name<'a, I>(hint: &str, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let camel = camel_case(hint);
    let (base, requested) = split_numeric_suffix(&camel);
    let base = if base.is_empty() { DEFAULT_PARAM_NAME } else { base };

    let taken: HashSet<u64> = existing
        .into_iter()
        .filter_map(|name| {
            let rest = name.strip_prefix(base)?;
            if rest.is_empty() {
                Some(1)
            } else if rest.chars().all(|c| c.is_ascii_digit()) {
                rest.parse().ok()
            } else {
                None
            }
        })
        .collect();

    let mut count = requested.unwrap_or(1);
    while taken.contains(&count) {
        count += 1;
    }

    if count == 1 {
        base.to_string()
    } else {
        format!("{}{}", base, count)
    }
}
