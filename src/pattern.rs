use std::fmt;

use memchr::memmem;

/// A wildcard pattern for matching text strings.
///
/// Patterns are created from strings containing wildcard characters:
/// - `*` matches zero or more characters
/// - `?` matches exactly one character
///
/// An empty pattern is a special case that matches any text, including
/// the empty string. A non-empty pattern never matches the empty string.
///
/// # Examples
///
/// ```
/// use wildglob::Pattern;
///
/// let pattern = Pattern::new("po*l");
/// assert!(pattern.matches("portal"));
/// assert!(!pattern.matches("port"));
///
/// let pattern = Pattern::new("p?li*");
/// assert!(pattern.matches("pelican"));
/// assert!(!pattern.matches("plier"));
/// ```
///
/// - Patterns can be displayed back to their canonical source text via the `Display` trait
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Pattern {
    segments: Vec<Segment>,
    ignore_case: bool,
}

impl Pattern {
    /// Creates a new case-sensitive pattern from a string.
    ///
    /// This function is infallible; all input strings are valid patterns.
    /// Runs of consecutive `*` characters collapse into a single wildcard.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildglob::Pattern;
    ///
    /// let pattern = Pattern::new("hello*");
    /// assert!(pattern.matches("hello world"));
    ///
    /// // Consecutive asterisks collapse
    /// let pattern = Pattern::new("a***b");
    /// assert!(pattern.matches("ab"));
    /// assert!(pattern.matches("a and b"));
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self::parse(raw.as_ref(), false)
    }

    /// Creates a new case-insensitive pattern from a string.
    ///
    /// Literal parts of the pattern are upper-cased when parsed, and the
    /// candidate text is upper-cased on each [`matches`](Self::matches)
    /// call. `?` placeholders are unaffected.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildglob::Pattern;
    ///
    /// let pattern = Pattern::new_ignore_case("READ*");
    /// assert!(pattern.matches("readme.txt"));
    /// assert!(pattern.matches("Readme.txt"));
    /// ```
    pub fn new_ignore_case(raw: impl AsRef<str>) -> Self {
        Self::parse(raw.as_ref(), true)
    }

    fn parse(raw: &str, ignore_case: bool) -> Self {
        let mut segments = Vec::new();

        if raw.is_empty() {
            return Self { segments, ignore_case };
        }

        if raw.starts_with('*') {
            segments.push(Segment::Wildcard);
        }

        // Runs of `*` act as a single delimiter, so empty chunks are dropped.
        for chunk in raw.split('*').filter(|chunk| !chunk.is_empty()) {
            let text = if ignore_case {
                chunk.to_uppercase()
            } else {
                chunk.to_owned()
            };
            segments.push(Segment::Literal(text));
        }

        // A pattern of nothing but `*` stays a single wildcard marker.
        if raw.ends_with('*') && segments.iter().any(|s| matches!(s, Segment::Literal(_))) {
            segments.push(Segment::Wildcard);
        }

        Self { segments, ignore_case }
    }

    /// Returns `true` if the pattern is empty and therefore matches any text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns `true` if the pattern was created with case-insensitive matching.
    #[inline]
    pub fn ignores_case(&self) -> bool {
        self.ignore_case
    }

    /// Tests whether the pattern matches the given text.
    ///
    /// Returns `true` if the entire text matches the pattern, `false` otherwise.
    /// An empty pattern matches any text; a non-empty pattern never matches
    /// empty text.
    ///
    /// Matching does not mutate the pattern, so a parsed pattern can be shared
    /// across threads and matched against many candidates concurrently.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildglob::Pattern;
    ///
    /// let pattern = Pattern::new("*a*b*");
    /// assert!(pattern.matches("abcd"));
    /// assert!(pattern.matches("abbcd"));
    /// assert!(!pattern.matches("ba"));
    ///
    /// assert!(Pattern::new("").matches("anything"));
    /// assert!(!Pattern::new("*").matches(""));
    /// ```
    pub fn matches(&self, text: &str) -> bool {
        let found = if self.segments.is_empty() {
            true
        } else if text.is_empty() {
            false
        } else if self.ignore_case {
            self.match_normalized(&text.to_uppercase())
        } else {
            self.match_normalized(text)
        };
        log::trace!("match of pattern '{self}' against {text:?}: {found}");
        found
    }

    // Assumes a non-empty sequence against non-empty, case-normalized text.
    fn match_normalized(&self, text: &str) -> bool {
        match self.segments.as_slice() {
            [Segment::Wildcard] => true,
            [Segment::Literal(lit)] => equals_wild(text, lit),
            _ => find_match(&self.segments, 0, text, 0),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Wildcards between adjacent literals are implicit in the sequence
        // and have to be restored when rendering.
        let mut prev_literal = false;
        for segment in &self.segments {
            match segment {
                Segment::Wildcard => {
                    f.write_str("*")?;
                    prev_literal = false;
                }
                Segment::Literal(text) => {
                    if prev_literal {
                        f.write_str("*")?;
                    }
                    f.write_str(text)?;
                    prev_literal = true;
                }
            }
        }
        Ok(())
    }
}

/// A single element of a parsed pattern.
///
/// Wildcard markers appear only at the first and/or last position of the
/// sequence; a `*` between two literals is implied by their adjacency.
#[derive(Debug, PartialEq, Eq, Clone)]
enum Segment {
    /// A literal chunk, possibly containing `?` placeholders, never `*`.
    Literal(String),
    /// A position occupied by a run of one or more `*` characters.
    Wildcard,
}

/// Checks whether `text[pos..]` can be decomposed to satisfy `segments[seg..]`.
///
/// `pos` is a byte offset and is always located on a character boundary.
fn find_match(segments: &[Segment], seg: usize, text: &str, pos: usize) -> bool {
    let Some(segment) = segments.get(seg) else {
        // Normally unreachable: the last element terminates the recursion below.
        return true;
    };

    if pos >= text.len() {
        // Nothing left of the target; only a trailing `*` can absorb that.
        return matches!(segment, Segment::Wildcard);
    }

    match segment {
        Segment::Wildcard => {
            if seg == 0 {
                // A leading `*` consumes nothing by itself; the next literal
                // may be found anywhere in the target.
                find_match(segments, 1, text, 0)
            } else {
                // Markers occur only at the boundaries, so this is the
                // trailing `*` absorbing the rest of the target.
                true
            }
        }
        Segment::Literal(lit) => {
            if seg == segments.len() - 1 {
                // The final literal must align with the tail of what remains.
                return ends_with_wild(&text[pos..], lit);
            }

            let mut from = pos;
            while let Some((start, end)) = index_of_wild(text, lit, from) {
                if seg == 0 && start > pos {
                    // No leading `*`: the first literal must sit at the very start.
                    return false;
                }
                if find_match(segments, seg + 1, text, end) {
                    return true;
                }
                from = start + 1;
            }

            false
        }
    }
}

/// Checks whether `text` equals `part`, with `?` in `part` matching any
/// single character.
fn equals_wild(text: &str, part: &str) -> bool {
    if !part.contains('?') {
        return text == part;
    }

    wild_prefix_len(text, part) == Some(text.len())
}

/// Checks whether `text` ends with `part`, with `?` in `part` matching any
/// single character.
fn ends_with_wild(text: &str, part: &str) -> bool {
    if !part.contains('?') {
        return text.ends_with(part);
    }

    let count = part.chars().count();
    let Some((start, _)) = text.char_indices().rev().nth(count - 1) else {
        return false;
    };

    equals_wild(&text[start..], part)
}

/// Finds the earliest occurrence of `part` in `text` at or after byte offset
/// `from`, with `?` in `part` matching any single character.
///
/// Returns the byte range of the occurrence; the end offset accounts for
/// multi-byte characters consumed by `?`. `from` does not have to lie on a
/// character boundary.
fn index_of_wild(text: &str, part: &str, from: usize) -> Option<(usize, usize)> {
    if from > text.len() {
        return None;
    }

    if !part.contains('?') {
        // A match of valid UTF-8 within valid UTF-8 always starts on a
        // character boundary, so a plain byte search is enough.
        return memmem::find(&text.as_bytes()[from..], part.as_bytes())
            .map(|i| (from + i, from + i + part.len()));
    }

    for (start, _) in text.char_indices() {
        if start < from {
            continue;
        }
        if let Some(len) = wild_prefix_len(&text[start..], part) {
            return Some((start, start + len));
        }
    }

    None
}

/// Returns the byte length of the prefix of `text` matched by `part`, with
/// `?` matching any single character, or `None` if `part` does not match.
fn wild_prefix_len(text: &str, part: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    for p in part.chars() {
        match chars.next() {
            Some((_, c)) if p == '?' || p == c => {}
            _ => return None,
        }
    }
    Some(chars.next().map_or(text.len(), |(i, _)| i))
}
