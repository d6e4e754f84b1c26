// std imports
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

// local imports
use crate::matcher::matches;
use crate::policy::Policy;

/// A wildcard pattern prepared for repeated matching.
///
/// Patterns are created from strings containing wildcard characters:
/// - `*` matches zero or more code points
/// - `?` matches exactly one code point
///
/// There is no escape character, every other code point is literal.
///
/// # Examples
///
/// ```
/// use wildcard::Pattern;
///
/// let pattern = Pattern::new("*.txt");
/// assert!(pattern.matches("readme.txt"));
/// assert!(!pattern.matches("readme.md"));
///
/// let pattern = Pattern::new("test?.log").ignore_case();
/// assert!(pattern.matches("TEST1.LOG"));
/// assert!(!pattern.matches("test.log"));
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Pattern {
    raw: String,
    kind: Kind,
    policy: Policy,
}

impl Pattern {
    /// Creates a new pattern from a string.
    ///
    /// This function is infallible; all input strings are valid patterns.
    /// Runs of `*` are collapsed into one, which does not change what the pattern matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("hello***");
    /// assert!(pattern.matches("hello world"));
    /// assert_eq!(pattern.to_string(), "hello*");
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Self {
        Compiler::new().compile(raw.as_ref())
    }

    /// Returns the same pattern with the given comparison policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the same pattern matching case-insensitively.
    pub fn ignore_case(self) -> Self {
        self.with_policy(Policy::IgnoreCase)
    }

    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Returns the normalized pattern string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns `true` if the pattern has no wildcards at all.
    #[inline]
    pub fn is_literal(&self) -> bool {
        self.kind == Kind::Literal
    }

    /// Returns `true` if the pattern matches any text.
    #[inline]
    pub fn is_any(&self) -> bool {
        self.kind == Kind::Any
    }

    #[inline]
    /// Tests whether the pattern matches the given text.
    ///
    /// Returns `true` if the entire text matches the pattern, `false` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("*.rs");
    /// assert!(pattern.matches("main.rs"));
    /// assert!(!pattern.matches("main.txt"));
    ///
    /// // Code point matching
    /// let pattern = Pattern::new("??");
    /// assert!(pattern.matches("ab"));
    /// assert!(pattern.matches("🦀🎉"));
    /// assert!(!pattern.matches("a"));
    ///
    /// // Backtracking
    /// let pattern = Pattern::new("*test*");
    /// assert!(pattern.matches("this is a test case"));
    /// assert!(!pattern.matches("no match here"));
    /// ```
    pub fn matches(&self, text: &str) -> bool {
        match (self.kind, self.policy) {
            (Kind::Any, _) => true,
            (Kind::Literal, Policy::Exact) => self.raw == text,
            _ => matches(&self.raw, text, self.policy),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Pattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl FromStr for Pattern {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(raw))
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
enum Kind {
    #[default]
    Literal,
    Any,
    Wild,
}

#[derive(Default)]
struct Compiler {
    raw: String,
    any: bool,
    one: bool,
    literal: bool,
}

impl Compiler {
    fn new() -> Self {
        Self::default()
    }

    fn compile(mut self, raw: &str) -> Pattern {
        self.raw.reserve(raw.len());
        for ch in raw.chars() {
            match ch {
                '*' => {
                    if self.raw.ends_with('*') {
                        continue;
                    }
                    self.any = true;
                }
                '?' => self.one = true,
                _ => self.literal = true,
            }
            self.raw.push(ch);
        }

        let kind = match (self.any, self.one, self.literal) {
            (false, false, _) => Kind::Literal,
            (true, false, false) => Kind::Any,
            _ => Kind::Wild,
        };

        Pattern {
            raw: self.raw,
            kind,
            policy: Policy::default(),
        }
    }
}
