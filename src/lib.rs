//! Glob-style wildcard matching for strings.
//!
//! Two wildcard characters are supported:
//! - `*` matches zero or more characters
//! - `?` matches exactly one character
//!
//! There are two ways to use this crate, depending on the input data. If the
//! pattern changes frequently, use the one-shot form:
//!
//! ```
//! assert!(wildglob::match_found("a*b", "ab"));
//! ```
//!
//! If the same pattern is checked against many strings, parse it once and
//! reuse it, so the pattern is not parsed repeatedly:
//!
//! ```
//! use wildglob::Pattern;
//!
//! let pattern = Pattern::new("*a*b*");
//! assert!(pattern.matches("abc"));
//! assert!(pattern.matches("xaybz"));
//! assert!(!pattern.matches("ba"));
//! ```
//!
//! Matching is total: there are no error conditions. An empty pattern matches
//! any text, and a non-empty pattern never matches empty text. Matching uses
//! naive backtracking over the wildcard positions, which can degrade badly on
//! adversarial patterns with many repeated literals; patterns are expected to
//! be small and trusted.

// modules
mod pattern;

// public re-exports
pub use pattern::Pattern;

/// Tests whether `target` matches the wildcard `pattern`, case-sensitively.
///
/// This is the one-shot form: the pattern is parsed on every call. Use
/// [`Pattern`] to parse once and match many times.
///
/// # Examples
///
/// ```
/// assert!(wildglob::match_found("po*l", "portal"));
/// assert!(!wildglob::match_found("po?l", "portal"));
/// assert!(wildglob::match_found("", "anything"));
/// ```
#[inline]
pub fn match_found(pattern: &str, target: &str) -> bool {
    Pattern::new(pattern).matches(target)
}

/// Tests whether `target` matches the wildcard `pattern`, ignoring case.
///
/// Both the pattern's literal parts and the target are upper-cased before
/// comparison; `?` placeholders are unaffected.
///
/// # Examples
///
/// ```
/// assert!(wildglob::match_found_ignore_case("ABC", "abc"));
/// assert!(!wildglob::match_found("ABC", "abc"));
/// ```
#[inline]
pub fn match_found_ignore_case(pattern: &str, target: &str) -> bool {
    Pattern::new_ignore_case(pattern).matches(target)
}
