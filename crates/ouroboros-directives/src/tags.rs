//! Struct tag annotations
//!
//! Hosts that attach metadata to fields as a single string use the
//! conventional `key:"value" key2:"value2"` layout. [`StructTag`] stores that
//! string and looks values up by key, so a `validate:"min:3"` entry can sit
//! next to unrelated annotations such as `json:"name"`.

use once_cell::sync::Lazy;
use regex::Regex;

/// One `key:"value"` pair at the start of the remaining input
static TAG_PAIR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^ *([^\x00-\x20:"\x7f]+):"((?:[^"\\]|\\.)*)""#).expect("tag pair regex is valid")
});

/// Raw field annotation string
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructTag(String);

impl StructTag {
    /// Wrap a raw annotation string
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw annotation text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value stored under `key`, unescaped
    ///
    /// Scanning stops at the first malformed pair; the first matching key
    /// wins.
    ///
    /// # Example
    ///
    /// ```
    /// use ouroboros_directives::tags::StructTag;
    ///
    /// let tag = StructTag::new(r#"json:"name" validate:"in:a,b""#);
    /// assert_eq!(tag.lookup("validate").as_deref(), Some("in:a,b"));
    /// assert_eq!(tag.lookup("xml"), None);
    /// ```
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.pairs()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| unescape(v))
    }

    /// Keys in order of appearance
    pub fn keys(&self) -> Vec<&str> {
        self.pairs().map(|(k, _)| k).collect()
    }

    fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        let mut rest = self.0.as_str();
        std::iter::from_fn(move || {
            let caps = TAG_PAIR_REGEX.captures(rest)?;
            let whole = caps.get(0)?;
            let key = caps.get(1)?.as_str();
            let value = caps.get(2)?.as_str();
            rest = &rest[whole.end()..];
            Some((key, value))
        })
    }
}

impl From<&str> for StructTag {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

fn unescape(quoted: &str) -> String {
    let mut out = String::with_capacity(quoted.len());
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
