// local imports
use crate::policy::{Equivalence, Exact, IgnoreCase, Policy};
use crate::utf8::utf8_char_width;

// Both metacharacters are ASCII, so they never occur inside a multi-byte encoding
// and can be tested on raw bytes at code point boundaries.
const ANY: u8 = b'*';
const ONE: u8 = b'?';

/// Tests whether `text` matches `pattern` under the given comparison policy.
///
/// - `*` matches any sequence of code points, including the empty one
/// - `?` matches exactly one code point
/// - any other code point matches a text code point equivalent under `policy`
///
/// The whole text must be matched. The function is total: every input, including
/// empty strings, yields a result.
///
/// # Examples
///
/// ```
/// use wildcard::{Policy, matches};
///
/// assert!(matches("a*b*c", "axbxc", Policy::Exact));
/// assert!(matches("*issip*PI", "mississippi", Policy::IgnoreCase));
/// assert!(!matches("*issip*PI", "mississippi", Policy::Exact));
/// assert!(!matches("??", "a", Policy::Exact));
/// ```
#[inline]
pub fn matches(pattern: &str, text: &str, policy: Policy) -> bool {
    match policy {
        Policy::Exact => matches_by(pattern, text, Exact),
        Policy::IgnoreCase => matches_by(pattern, text, IgnoreCase),
    }
}

/// Tests whether `text` matches `pattern` using a caller supplied [`Equivalence`].
///
/// The scan keeps four cursors: the current positions in pattern and text and a
/// bookmark pair recorded at the most recent `*`. A mismatch after a `*` rewinds the
/// pattern to its bookmark and retries one code point further into the text, so no
/// recursion or extra storage is needed. Each retry strictly advances the text
/// bookmark, which bounds the number of retries by the text length.
///
/// # Examples
///
/// ```
/// use wildcard::{IgnoreCase, matches_by};
///
/// assert!(matches_by("?b*??", "ABCD", IgnoreCase));
/// ```
pub fn matches_by<E: Equivalence>(pattern: &str, text: &str, eq: E) -> bool {
    let wild = Scan(pattern);
    let tame = Scan(text);

    let mut w = 0;
    let mut t = 0;

    // Match everything up to the first `*`, no backtracking is possible there.
    let (mut wb, mut tb) = loop {
        let Some(tc) = tame.at(t) else {
            return wild.skip_any(w) == wild.end();
        };
        match wild.byte(w) {
            None => return false,
            Some(ANY) => {
                w = wild.skip_any(w);
                if w == wild.end() {
                    return true;
                }
                match seek(wild, w, text, t, eq) {
                    Some(pos) => t = pos,
                    None => return false,
                }
                break (w, t);
            }
            Some(ONE) => {}
            Some(_) => {
                if !wild.at(w).is_some_and(|wc| eq.equivalent(wc, tc)) {
                    return false;
                }
            }
        }
        w = wild.step(w);
        t = tame.step(t);
    };

    loop {
        if wild.byte(w) == Some(ANY) {
            w = wild.skip_any(w);
            if w == wild.end() {
                return true;
            }
            if t == tame.end() {
                return false;
            }
            match seek(wild, w, text, t, eq) {
                Some(pos) => t = pos,
                None => return false,
            }
            wb = w;
            tb = t;
        } else {
            let Some(tc) = tame.at(t) else {
                return w == wild.end();
            };
            let mismatch = match wild.byte(w) {
                None => true,
                Some(ONE) => false,
                Some(_) => !wild.at(w).is_some_and(|wc| eq.equivalent(wc, tc)),
            };
            if mismatch {
                // Each `?` right after the bookmark has already consumed a code point,
                // so the bookmark moves past it for good.
                while wild.byte(wb) == Some(ONE) {
                    wb = wild.step(wb);
                    tb = tame.step(tb);
                }
                w = wb;

                // Retry one code point further, but never from the same place again.
                let Some(wc) = wild.at(w) else {
                    return true;
                };
                match eq.find(wc, text, tame.step(tb)) {
                    Some(pos) => {
                        tb = pos;
                        t = pos;
                    }
                    None => return false,
                }
            }
        }

        if t == tame.end() {
            return w == wild.end();
        }
        w = wild.step(w);
        t = tame.step(t);
    }
}

/// Positions the text cursor at the first code point that may start a match of the
/// pattern token at `w`, which must not be `*` or the end of the pattern.
#[inline]
fn seek<E: Equivalence>(wild: Scan<'_>, w: usize, text: &str, t: usize, eq: E) -> Option<usize> {
    match wild.byte(w) {
        Some(ONE) => Some(t),
        _ => eq.find(wild.at(w)?, text, t),
    }
}

// ---

/// Byte offset navigation over a string, offsets always sit on code point boundaries.
#[derive(Clone, Copy)]
struct Scan<'a>(&'a str);

impl Scan<'_> {
    #[inline(always)]
    fn end(self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    fn byte(self, i: usize) -> Option<u8> {
        self.0.as_bytes().get(i).copied()
    }

    #[inline(always)]
    fn at(self, i: usize) -> Option<char> {
        self.0.get(i..)?.chars().next()
    }

    #[inline(always)]
    fn step(self, i: usize) -> usize {
        match self.byte(i) {
            Some(b) => i + utf8_char_width(b),
            None => self.end(),
        }
    }

    #[inline]
    fn skip_any(self, mut i: usize) -> usize {
        while self.byte(i) == Some(ANY) {
            i += 1;
        }
        i
    }
}
