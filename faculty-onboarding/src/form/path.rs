//! Field paths addressing one location inside a [`Record`](super::Record)
//!
//! Accepted spellings:
//! - `personalSchema.firstName`
//! - `educationSchema.0.class` (numeric dot segment)
//! - `dependentsSchema.children[1].name` (bracket index)
//!
//! Paths are displayed with bracket indices, so
//! `educationSchema.0.class` prints as `educationSchema[0].class`.

use anyhow::{Result, bail};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One step into the record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Field(String),
    Index(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// Parse a path string
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            bail!("Field path cannot be empty");
        }

        let mut segments = Vec::new();
        for part in s.split('.') {
            if part.is_empty() {
                bail!("Invalid field path '{}': empty segment", s);
            }
            parse_part(s, part, &mut segments)?;
        }

        Ok(Self { segments })
    }

    /// Build a path from literal dot-separated field names (no indices)
    pub fn simple(dotted: &str) -> Self {
        Self {
            segments: dotted
                .split('.')
                .map(|name| Segment::Field(name.to_string()))
                .collect(),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// New path with a field name appended
    pub fn field(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Field(name.to_string()));
        Self { segments }
    }

    /// New path with a list index appended
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(index));
        Self { segments }
    }

    /// Whether `other` is this path or lies underneath it
    ///
    /// `educationSchema` covers `educationSchema[2].usn`;
    /// `personalSchema.pan` covers only itself.
    pub fn covers(&self, other: &FieldPath) -> bool {
        other.segments.len() >= self.segments.len()
            && other.segments[..self.segments.len()] == self.segments[..]
    }

    /// If this path lies under `list` at some index, return that index
    pub fn index_under(&self, list: &FieldPath) -> Option<usize> {
        if !list.covers(self) {
            return None;
        }
        match self.segments.get(list.segments.len()) {
            Some(Segment::Index(i)) => Some(*i),
            _ => None,
        }
    }

    /// Replace the index that directly follows `list` in this path
    pub(crate) fn with_index_under(&self, list: &FieldPath, index: usize) -> Self {
        let mut segments = self.segments.clone();
        if let Some(slot) = segments.get_mut(list.segments.len()) {
            *slot = Segment::Index(index);
        }
        Self { segments }
    }
}

fn parse_part(full: &str, part: &str, segments: &mut Vec<Segment>) -> Result<()> {
    if let Ok(index) = part.parse::<usize>() {
        segments.push(Segment::Index(index));
        return Ok(());
    }

    let (name, mut rest) = match part.find('[') {
        Some(pos) => (&part[..pos], &part[pos..]),
        None => (part, ""),
    };

    if name.is_empty() {
        bail!("Invalid field path '{}': index without a field name", full);
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        bail!("Invalid field path '{}': bad field name '{}'", full, name);
    }
    segments.push(Segment::Field(name.to_string()));

    while !rest.is_empty() {
        let Some(close) = rest.find(']') else {
            bail!("Invalid field path '{}': unclosed '['", full);
        };
        let inner = &rest[1..close];
        let index = inner
            .parse::<usize>()
            .map_err(|_| anyhow::anyhow!("Invalid field path '{}': bad index '{}'", full, inner))?;
        segments.push(Segment::Index(index));
        rest = &rest[close + 1..];
        if !rest.is_empty() && !rest.starts_with('[') {
            bail!("Invalid field path '{}': unexpected '{}'", full, rest);
        }
    }

    Ok(())
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Field(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

impl FromStr for FieldPath {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_path() {
        let path = FieldPath::parse("personalSchema.firstName").unwrap();
        assert_eq!(
            path.segments(),
            &[
                Segment::Field("personalSchema".into()),
                Segment::Field("firstName".into())
            ]
        );
        assert_eq!(path, FieldPath::simple("personalSchema.firstName"));
    }

    #[test]
    fn test_dot_and_bracket_indices_are_equivalent() {
        let dotted = FieldPath::parse("educationSchema.0.class").unwrap();
        let bracketed = FieldPath::parse("educationSchema[0].class").unwrap();
        assert_eq!(dotted, bracketed);
        assert_eq!(dotted.to_string(), "educationSchema[0].class");
    }

    #[test]
    fn test_parse_nested_bracket_path() {
        let path = FieldPath::parse("dependentsSchema.children[12].dob").unwrap();
        assert_eq!(path.segments()[2], Segment::Index(12));
        assert_eq!(path.to_string(), "dependentsSchema.children[12].dob");
    }

    #[test]
    fn test_parse_rejects_malformed_paths() {
        assert!(FieldPath::parse("").is_err());
        assert!(FieldPath::parse("a..b").is_err());
        assert!(FieldPath::parse("children[x]").is_err());
        assert!(FieldPath::parse("children[1").is_err());
        assert!(FieldPath::parse("[1].name").is_err());
        assert!(FieldPath::parse("first name").is_err());
    }

    #[test]
    fn test_covers() {
        let list = FieldPath::simple("educationSchema");
        let inner = FieldPath::parse("educationSchema[2].usn").unwrap();
        assert!(list.covers(&inner));
        assert!(list.covers(&list));
        assert!(!inner.covers(&list));

        let pan = FieldPath::simple("personalSchema.pan");
        assert!(!pan.covers(&FieldPath::simple("personalSchema.panNumber")));
    }

    #[test]
    fn test_index_under() {
        let list = FieldPath::simple("dependentsSchema.children");
        let path = FieldPath::parse("dependentsSchema.children[3].name").unwrap();
        assert_eq!(path.index_under(&list), Some(3));
        assert_eq!(list.index_under(&list), None);
        assert_eq!(
            path.with_index_under(&list, 1).to_string(),
            "dependentsSchema.children[1].name"
        );
    }
}
