use std::fmt;

use memchr::memmem::find_iter;
use regex::Regex;

/// The reserved marker substring meaning "match any sequence of characters".
pub const WILDCARD: &str = "*";

/// A wildcard query compiled into a reusable full-string matcher.
///
/// A query is an ordinary string in which every occurrence of [`WILDCARD`]
/// matches any sequence of zero or more characters and every other character
/// matches only itself, even characters that have special meaning to the
/// regular expression engine.
///
/// # Examples
///
/// ```
/// use wildre::Pattern;
///
/// let pattern = Pattern::new("hello*world");
/// assert!(pattern.matches("helloXYZworld"));
/// assert!(pattern.matches("helloworld"));
/// assert!(!pattern.matches("helloXYZplanet"));
///
/// let pattern = Pattern::new("log.(1)");
/// assert!(pattern.matches("log.(1)"));
/// assert!(!pattern.matches("logX(1)"));
/// ```
///
/// - The match is always against the entire candidate string, never a substring
/// - Patterns can be displayed back to their source query via the `Display` trait
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    source: String,
}

impl Pattern {
    /// Compiles a query string using the conventional [`WILDCARD`] marker.
    ///
    /// This function is infallible; all input strings are valid queries.
    /// A query without any marker occurrence matches exactly itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildre::Pattern;
    ///
    /// let pattern = Pattern::new("hello*");
    /// assert!(pattern.matches("hello world"));
    ///
    /// let pattern = Pattern::new("exact");
    /// assert!(pattern.matches("exact"));
    /// assert!(!pattern.matches("exactly"));
    ///
    /// // A query of just the marker matches anything, including nothing
    /// let pattern = Pattern::new("*");
    /// assert!(pattern.matches(""));
    /// ```
    pub fn new(query: impl AsRef<str>) -> Self {
        Self::with_marker(query, WILDCARD)
    }

    /// Compiles a query string using a custom wildcard marker.
    ///
    /// The marker is located by plain substring search, so it may contain
    /// characters that are special to the regular expression engine. An empty
    /// marker has no occurrences and leaves the whole query literal.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildre::Pattern;
    ///
    /// let pattern = Pattern::with_marker("hello%world", "%");
    /// assert!(pattern.matches("hello, world"));
    ///
    /// // With another marker, `*` is just a literal character
    /// let pattern = Pattern::with_marker("a*b", "%");
    /// assert!(pattern.matches("a*b"));
    /// assert!(!pattern.matches("aXb"));
    /// ```
    pub fn with_marker(query: impl AsRef<str>, marker: impl AsRef<str>) -> Self {
        Compiler::new(marker.as_ref()).compile(query.as_ref())
    }

    /// Tests whether the pattern matches the given candidate string.
    ///
    /// The entire candidate must match; literal fragments are anchored by
    /// construction, so there is no substring search.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildre::Pattern;
    ///
    /// let pattern = Pattern::new("job-*");
    /// assert!(pattern.matches("job-42"));
    /// assert!(!pattern.matches("cron-job-42"));
    /// ```
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Returns the original query string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the underlying compiled regular expression.
    ///
    /// The expression is anchored on both ends and matches whole candidates
    /// only.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildre::Pattern;
    ///
    /// let pattern = Pattern::new("a.b*");
    /// assert_eq!(pattern.regex().as_str(), r"^a\.b(?s:.*)$");
    /// ```
    #[inline]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::new("")
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.regex.as_str() == other.regex.as_str()
    }
}

impl Eq for Pattern {}

#[derive(Debug, PartialEq, Clone, Copy)]
enum Segment<'a> {
    Literal(&'a str),
    Wildcard,
}

struct Compiler<'a> {
    marker: &'a str,
}

impl<'a> Compiler<'a> {
    fn new(marker: &'a str) -> Self {
        Self { marker }
    }

    fn compile(&self, query: &str) -> Pattern {
        let expr = build(&self.scan(query));
        // Escaped literals and fixed wildcard fragments always form a valid
        // expression.
        let regex = Regex::new(&expr).expect("built expression must compile");
        Pattern {
            regex,
            source: query.to_owned(),
        }
    }

    /// Splits the query into ordered segments by scanning for non-overlapping
    /// marker occurrences, left to right. Empty literal stretches between or
    /// around occurrences are skipped.
    fn scan<'q>(&self, query: &'q str) -> Vec<Segment<'q>> {
        let mut segments = Vec::new();

        if self.marker.is_empty() {
            segments.push(Segment::Literal(query));
            return segments;
        }

        let mut pos = 0;
        for start in find_iter(query.as_bytes(), self.marker.as_bytes()) {
            if start > pos {
                segments.push(Segment::Literal(&query[pos..start]));
            }
            segments.push(Segment::Wildcard);
            pos = start + self.marker.len();
        }

        if pos < query.len() || segments.is_empty() {
            segments.push(Segment::Literal(&query[pos..]));
        }

        segments
    }
}

/// Folds the segments into a single anchored expression matching whole
/// candidate strings only.
fn build(segments: &[Segment<'_>]) -> String {
    let mut expr = String::from("^");
    for segment in segments {
        match segment {
            Segment::Literal(text) => expr.push_str(&regex::escape(text)),
            Segment::Wildcard => expr.push_str("(?s:.*)"),
        }
    }
    expr.push('$');
    expr
}
