//! Path expressions: `a.b.array[2]`, `name.[0]`, `[1].x`.

use std::fmt;

/// The raw form a path arrives in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathInput {
    /// One string, split on the configured separator.
    Text(String),
    /// Already split; each element is one segment.
    Segments(Vec<String>),
}

impl From<&str> for PathInput {
    fn from(s: &str) -> Self {
        PathInput::Text(s.to_string())
    }
}

impl From<String> for PathInput {
    fn from(s: String) -> Self {
        PathInput::Text(s)
    }
}

impl From<Vec<String>> for PathInput {
    fn from(v: Vec<String>) -> Self {
        PathInput::Segments(v)
    }
}

impl From<Vec<&str>> for PathInput {
    fn from(v: Vec<&str>) -> Self {
        PathInput::Segments(v.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for PathInput {
    fn from(v: &[&str]) -> Self {
        PathInput::Segments(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PathInput {
    fn from(v: [&str; N]) -> Self {
        PathInput::Segments(v.iter().map(|s| s.to_string()).collect())
    }
}

/// One step of a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// A member key.
    Name(String),
    /// `name[index]` or `name.[index]`: the member `name` holds a list.
    Indexed { name: String, index: String },
    /// `[index]` applied to whatever the previous segment produced.
    Index(String),
}

impl Segment {
    /// Classify a raw segment.
    ///
    /// A segment ending in `]` that contains a `[` is indexed; the last `[`
    /// wins. Everything else, malformed brackets included, is a plain name.
    pub fn parse(raw: &str) -> Segment {
        let Some(body) = raw.strip_suffix(']') else {
            return Segment::Name(raw.to_string());
        };
        match body.rfind('[') {
            None => Segment::Name(raw.to_string()),
            Some(0) => Segment::Index(body[1..].to_string()),
            Some(i) => {
                let name = &body[..i];
                Segment::Indexed {
                    name: name.strip_suffix('.').unwrap_or(name).to_string(),
                    index: body[i + 1..].to_string(),
                }
            }
        }
    }

    /// `true` for a bare `[index]`.
    pub fn is_index(&self) -> bool {
        matches!(self, Segment::Index(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Name(name) => f.write_str(name),
            Segment::Indexed { name, index } => write!(f, "{}[{}]", name, index),
            Segment::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// A parsed path.
///
/// Parsing never fails: an empty input gives an empty path, which addresses
/// the starting object itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    pub segments: Vec<Segment>,
}

impl Path {
    /// Parse a path, splitting text input on `separator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objpath_accessor::{Path, Segment};
    ///
    /// let path = Path::parse("a.b.array[2]", ".");
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path[2], Segment::Indexed { name: "array".into(), index: "2".into() });
    ///
    /// // Pre-split input is taken as-is.
    /// let path = Path::parse(vec!["a", "array.[0]"], ".");
    /// assert_eq!(path.to_string(), "a.array[0]");
    /// ```
    pub fn parse(input: impl Into<PathInput>, separator: &str) -> Self {
        let segments = match input.into() {
            PathInput::Text(text) if text.is_empty() => Vec::new(),
            PathInput::Text(text) if separator.is_empty() => vec![Segment::parse(&text)],
            PathInput::Text(text) => text.split(separator).map(Segment::parse).collect(),
            PathInput::Segments(raw) => raw.iter().map(|s| Segment::parse(s)).collect(),
        };
        Path { segments }
    }

    /// Check if this path is empty.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Get the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Iterate over segments.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                f.write_str(".")?;
            }
            first = false;
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl std::ops::Index<usize> for Path {
    type Output = Segment;

    fn index(&self, i: usize) -> &Self::Output {
        &self.segments[i]
    }
}

/// Join two qualified-name parts with `.`, skipping an empty head.
pub(crate) fn qualify(head: &str, tail: &str) -> String {
    if head.is_empty() {
        tail.to_string()
    } else {
        format!("{}.{}", head, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Segment {
        Segment::Name(s.to_string())
    }

    fn indexed(n: &str, i: &str) -> Segment {
        Segment::Indexed {
            name: n.to_string(),
            index: i.to_string(),
        }
    }

    #[test]
    fn parse_basic_paths() {
        assert_eq!(Path::parse("", ".").len(), 0);
        assert_eq!(Path::parse("foo", ".").len(), 1);
        assert_eq!(Path::parse("foo.bar", ".").len(), 2);
        assert_eq!(Path::parse("foo.bar.baz", ".").len(), 3);
    }

    #[test]
    fn empty_segment_list() {
        assert!(Path::parse(Vec::<String>::new(), ".").is_empty());
    }

    #[test]
    fn custom_separator() {
        let p = Path::parse("a/b/c", "/");
        assert_eq!(p.segments, vec![name("a"), name("b"), name("c")]);

        // The default separator has no meaning under a custom one.
        let p = Path::parse("a.b/c", "/");
        assert_eq!(p.segments, vec![name("a.b"), name("c")]);
    }

    #[test]
    fn empty_separator_does_not_split() {
        assert_eq!(Path::parse("a.b", "").segments, vec![name("a.b")]);
    }

    #[test]
    fn empty_components_are_kept() {
        let p = Path::parse("a..b", ".");
        assert_eq!(p.segments, vec![name("a"), name(""), name("b")]);
    }

    #[test]
    fn indexed_segment() {
        assert_eq!(Segment::parse("array[0]"), indexed("array", "0"));
        assert_eq!(Segment::parse("array.[0]"), indexed("array", "0"));
        assert_eq!(Segment::parse("m[key]"), indexed("m", "key"));
    }

    #[test]
    fn bare_index_segment() {
        assert_eq!(Segment::parse("[3]"), Segment::Index("3".to_string()));
        assert_eq!(Segment::parse("[]"), Segment::Index(String::new()));
        assert!(Segment::parse("[3]").is_index());
        assert!(!Segment::parse("a[3]").is_index());
    }

    #[test]
    fn last_bracket_wins() {
        assert_eq!(Segment::parse("a[1][2]"), indexed("a[1]", "2"));
    }

    #[test]
    fn malformed_brackets_are_names() {
        assert_eq!(Segment::parse("]"), name("]"));
        assert_eq!(Segment::parse("a]"), name("a]"));
        assert_eq!(Segment::parse("a[0"), name("a[0"));
        assert_eq!(Segment::parse("a[0]b"), name("a[0]b"));
    }

    #[test]
    fn dotted_bracket_splits_in_text() {
        let p = Path::parse("a.b.array.[0]", ".");
        assert_eq!(
            p.segments,
            vec![
                name("a"),
                name("b"),
                name("array"),
                Segment::Index("0".to_string())
            ]
        );
    }

    #[test]
    fn segments_are_verbatim() {
        let p = Path::parse(["a.b", "array.[0]"], ".");
        assert_eq!(p.segments, vec![name("a.b"), indexed("array", "0")]);
    }

    #[test]
    fn display_is_canonical() {
        let p = Path::parse(vec!["a", "array.[0]", "[1]"], ".");
        assert_eq!(p.to_string(), "a.array[0].[1]");
        assert_eq!(Path::default().to_string(), "");
    }

    #[test]
    fn index_trait() {
        let p = Path::parse("foo.bar", ".");
        assert_eq!(p[0], name("foo"));
        assert_eq!(p[1], name("bar"));
    }

    #[test]
    fn qualify_skips_empty_head() {
        assert_eq!(qualify("", "a"), "a");
        assert_eq!(qualify("a.b", "c[0]"), "a.b.c[0]");
    }

    #[test]
    fn input_conversions() {
        let slice: &[&str] = &["a", "b"];
        assert_eq!(
            PathInput::from(slice),
            PathInput::Segments(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(PathInput::from("a.b"), PathInput::Text("a.b".to_string()));
        assert_eq!(
            PathInput::from(String::from("x")),
            PathInput::Text("x".to_string())
        );
    }
}
