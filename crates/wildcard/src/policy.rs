// std imports
use std::fmt;
use std::str::FromStr;

// third-party imports
use memchr::{memchr, memmem};

/// Decides whether two code points are equal for matching purposes.
///
/// Implementations must be pure: the result depends only on the two code points.
/// Wildcards are never passed here, the matcher handles them before asking.
pub trait Equivalence: Copy {
    /// Returns `true` if the pattern code point `a` matches the text code point `b`.
    fn equivalent(self, a: char, b: char) -> bool;

    /// Returns the byte offset of the first code point at or after `from` in `haystack`
    /// that is equivalent to `needle`.
    ///
    /// `from` must lie on a code point boundary, offsets past the end yield `None`.
    #[inline]
    fn find(self, needle: char, haystack: &str, from: usize) -> Option<usize> {
        haystack
            .get(from..)?
            .char_indices()
            .find_map(|(i, ch)| self.equivalent(needle, ch).then_some(from + i))
    }
}

// ---

/// Code point identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Exact;

impl Equivalence for Exact {
    #[inline(always)]
    fn equivalent(self, a: char, b: char) -> bool {
        a == b
    }

    #[inline]
    fn find(self, needle: char, haystack: &str, from: usize) -> Option<usize> {
        let tail = haystack.as_bytes().get(from..)?;
        // An encoded code point can only be found at a code point boundary.
        let pos = if needle.is_ascii() {
            memchr(needle as u8, tail)
        } else {
            let mut buf = [0; 4];
            memmem::find(tail, needle.encode_utf8(&mut buf).as_bytes())
        };
        pos.map(|i| from + i)
    }
}

// ---

/// Code point identity after lowercasing each operand on its own.
///
/// This is simple per-code-point case conversion, not locale-aware collation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IgnoreCase;

impl Equivalence for IgnoreCase {
    #[inline]
    fn equivalent(self, a: char, b: char) -> bool {
        if a == b {
            return true;
        }
        if a.is_ascii() && b.is_ascii() {
            return a.eq_ignore_ascii_case(&b);
        }
        a.to_lowercase().eq(b.to_lowercase())
    }
}

// ---

/// Comparison policy selected at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Policy {
    #[default]
    Exact,
    IgnoreCase,
}

impl Policy {
    pub const ALL: [Policy; 2] = [Policy::Exact, Policy::IgnoreCase];

    #[inline]
    pub fn from_ignore_case(ignore_case: bool) -> Self {
        if ignore_case { Self::IgnoreCase } else { Self::Exact }
    }

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::IgnoreCase => "ignore-case",
        }
    }

    #[inline]
    pub fn equivalent(self, a: char, b: char) -> bool {
        match self {
            Self::Exact => Exact.equivalent(a, b),
            Self::IgnoreCase => IgnoreCase.equivalent(a, b),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParsePolicyError(s.to_owned()))
    }
}

/// Returned when a string does not name a known [`Policy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePolicyError(String);

impl fmt::Display for ParsePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown policy {:?}, use any of {:?}", self.0, Policy::ALL.map(|p| p.as_str()))
    }
}

impl std::error::Error for ParsePolicyError {}
