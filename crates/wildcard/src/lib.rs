//! Wildcard matching over Unicode text.
//!
//! A pattern may contain `*` (zero or more code points) and `?` (exactly one code
//! point); every other code point is literal and there is no escape character.
//! Matching is done by a single forward scan that keeps a bookmark at the most
//! recent `*` and retries from there on mismatch, so it needs no recursion, no
//! allocation and stays far from exponential on repetitive input.
//!
//! # Comparison policies
//!
//! - [`Policy::Exact`] compares code points for identity
//! - [`Policy::IgnoreCase`] lowercases each code point on its own before comparing
//!
//! Custom comparisons can be plugged in through the [`Equivalence`] trait and
//! [`matches_by`].
//!
//! # Examples
//!
//! ```
//! use wildcard::{Pattern, Policy, matches};
//!
//! assert!(matches("a*b*c", "axbc", Policy::Exact));
//! assert!(matches("", "", Policy::Exact));
//! assert!(!matches("", "a", Policy::Exact));
//!
//! let pattern = Pattern::new("*issip*PI").ignore_case();
//! assert!(pattern.matches("mississippi"));
//! ```
//!
//! # Code points
//!
//! The `?` wildcard matches exactly one code point, not one byte and not one
//! grapheme cluster:
//!
//! ```
//! use wildcard::{Policy, matches};
//!
//! assert!(matches("???", "🦀🎉🌟", Policy::Exact));
//! assert!(!matches("?", "e\u{301}", Policy::Exact)); // 'e' followed by a combining accent
//! ```

mod matcher;
mod pattern;
mod policy;
mod utf8;

pub use matcher::{matches, matches_by};
pub use pattern::Pattern;
pub use policy::{Equivalence, Exact, IgnoreCase, ParsePolicyError, Policy};
