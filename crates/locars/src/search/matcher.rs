// Byte-space fixed-pattern matcher
// One instance per distinct pattern, reused across subjects; setup costs
// (memmem finder tables, folded pattern codepoints) are paid once.

use memchr::memmem;

use crate::options::FixedOptions;

/// Stateful byte-space searcher bound to one fixed pattern.
///
/// All scan state lives in the instance and is overwritten by
/// [`reset`](Self::reset); the find calls never allocate. Within one scan
/// every call must receive the same `hay` buffer.
pub struct ByteSearchMatcher {
    // case-sensitive path: precomputed forward/reverse finders
    finder: Option<memmem::Finder<'static>>,
    rfinder: Option<memmem::FinderRev<'static>>,
    // case-insensitive path: pattern as folded codepoints
    folded: Vec<char>,
    pattern_len: usize,
    opts: FixedOptions,
    /// Byte span of the most recent match, if any.
    last: Option<(usize, usize)>,
}

impl ByteSearchMatcher {
    /// Build a matcher for a non-empty `pattern`. Empty patterns are a
    /// skip condition handled before any matcher exists.
    pub fn new(pattern: &str, opts: FixedOptions) -> Self {
        debug_assert!(!pattern.is_empty());
        let (finder, rfinder, folded) = if opts.case_insensitive {
            (None, None, pattern.chars().map(fold).collect())
        } else {
            (
                Some(memmem::Finder::new(pattern.as_bytes()).into_owned()),
                Some(memmem::FinderRev::new(pattern.as_bytes()).into_owned()),
                Vec::new(),
            )
        };
        Self {
            finder,
            rfinder,
            folded,
            pattern_len: pattern.len(),
            opts,
            last: None,
        }
    }

    /// Rebind to a new subject: O(1), clears scan state only.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Left-most accepted match.
    pub fn find_first(&mut self, hay: &str) -> Option<(usize, usize)> {
        self.find_from(hay, 0)
    }

    /// Next match after the previous one: resumes at its end, or one
    /// codepoint past its start when overlapping matches are requested.
    pub fn find_next(&mut self, hay: &str) -> Option<(usize, usize)> {
        let (start, end) = self.last?;
        let resume = if self.opts.overlap { start + 1 } else { end };
        self.find_from(hay, resume)
    }

    /// Right-most accepted match (highest start offset), independent of
    /// the overlap setting.
    pub fn find_last(&mut self, hay: &str) -> Option<(usize, usize)> {
        if !self.opts.case_insensitive && !self.opts.word_boundaries {
            // fast path: reverse finder
            let start = self.rfinder.as_ref()?.rfind(hay.as_bytes())?;
            self.last = Some((start, start + self.pattern_len));
            return self.last;
        }
        let mut best = None;
        let mut from = 0;
        while let Some((start, end)) = self.scan_forward(hay, from) {
            if self.accepts(hay, start, end) {
                best = Some((start, end));
            }
            from = start + 1;
        }
        self.last = best;
        best
    }

    /// Byte span of the most recent match. Valid only immediately after a
    /// successful find.
    pub fn matched(&self) -> Option<(usize, usize)> {
        self.last
    }

    /// Byte length of the most recent match (0 when there is none).
    pub fn matched_len(&self) -> usize {
        self.last.map_or(0, |(start, end)| end - start)
    }

    /// Left-most accepted match at byte offset `from` or later.
    fn find_from(&mut self, hay: &str, mut from: usize) -> Option<(usize, usize)> {
        loop {
            let Some((start, end)) = self.scan_forward(hay, from) else {
                self.last = None;
                return None;
            };
            if self.accepts(hay, start, end) {
                self.last = Some((start, end));
                return self.last;
            }
            from = start + 1;
        }
    }

    fn accepts(&self, hay: &str, start: usize, end: usize) -> bool {
        !self.opts.word_boundaries || word_bounded(hay, start, end)
    }

    /// Raw candidate search, no boundary filtering.
    fn scan_forward(&self, hay: &str, from: usize) -> Option<(usize, usize)> {
        if from > hay.len() {
            return None;
        }
        if self.opts.case_insensitive {
            return self.scan_forward_folded(hay, from);
        }
        // A match of a valid UTF-8 pattern inside valid UTF-8 text always
        // starts on a codepoint boundary (a continuation byte never equals
        // a lead byte), so searching from a mid-codepoint `from` is safe.
        let start = self.finder.as_ref()?.find(&hay.as_bytes()[from..])? + from;
        Some((start, start + self.pattern_len))
    }

    /// Codepoint-by-codepoint scan under simple lowercase folding. The
    /// matched byte span in `hay` may differ in length from the pattern.
    fn scan_forward_folded(&self, hay: &str, from: usize) -> Option<(usize, usize)> {
        let from = next_boundary(hay, from);
        let tail = &hay[from..];
        for (off, _) in tail.char_indices() {
            if let Some(len) = self.folded_match_len(&tail[off..]) {
                return Some((from + off, from + off + len));
            }
        }
        None
    }

    /// Bytes of `at` consumed by a folded match of the whole pattern
    /// anchored at its start.
    fn folded_match_len(&self, at: &str) -> Option<usize> {
        let mut consumed = 0;
        let mut chars = at.chars();
        for &p in &self.folded {
            let c = chars.next()?;
            if fold(c) != p {
                return None;
            }
            consumed += c.len_utf8();
        }
        Some(consumed)
    }
}

/// Simple (single-codepoint) lowercase folding; codepoints whose full
/// lowercase mapping expands are left as-is.
fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Both match edges must sit on a word/non-word transition (or the
/// subject edge).
fn word_bounded(hay: &str, start: usize, end: usize) -> bool {
    let start_ok = match (hay[..start].chars().next_back(), hay[start..].chars().next()) {
        (Some(before), Some(first)) => !(is_word(before) && is_word(first)),
        _ => true,
    };
    let end_ok = match (hay[..end].chars().next_back(), hay[end..].chars().next()) {
        (Some(last), Some(after)) => !(is_word(last) && is_word(after)),
        _ => true,
    };
    start_ok && end_ok
}

/// Smallest codepoint boundary at or after `i`.
fn next_boundary(hay: &str, mut i: usize) -> usize {
    while i < hay.len() && !hay.is_char_boundary(i) {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(pattern: &str, opts: FixedOptions) -> ByteSearchMatcher {
        ByteSearchMatcher::new(pattern, opts)
    }

    #[test]
    fn test_find_first_and_next_non_overlapping() {
        let mut m = matcher("bc", FixedOptions::default());
        assert_eq!(m.find_first("abcabc"), Some((1, 3)));
        assert_eq!(m.find_next("abcabc"), Some((4, 6)));
        assert_eq!(m.find_next("abcabc"), None);
        assert_eq!(m.matched(), None);
    }

    #[test]
    fn test_overlapping_matches() {
        let opts = FixedOptions {
            overlap: true,
            ..Default::default()
        };
        let mut m = matcher("aa", opts);
        assert_eq!(m.find_first("aaa"), Some((0, 2)));
        assert_eq!(m.find_next("aaa"), Some((1, 3)));
        assert_eq!(m.find_next("aaa"), None);
    }

    #[test]
    fn test_find_last_is_highest_start() {
        let mut m = matcher("aa", FixedOptions::default());
        assert_eq!(m.find_last("aaa"), Some((1, 3)));
        assert_eq!(m.matched_len(), 2);
    }

    #[test]
    fn test_case_insensitive_span_follows_subject() {
        let opts = FixedOptions {
            case_insensitive: true,
            ..Default::default()
        };
        let mut m = matcher("bc", opts);
        assert_eq!(m.find_first("aBC"), Some((1, 3)));
    }

    #[test]
    fn test_word_boundaries_reject_embedded_match() {
        let opts = FixedOptions {
            word_boundaries: true,
            ..Default::default()
        };
        let mut m = matcher("cat", opts);
        assert_eq!(m.find_first("concatenate cat"), Some((12, 15)));
        assert_eq!(m.find_last("concatenate cat"), Some((12, 15)));
    }

    #[test]
    fn test_reset_clears_scan_state() {
        let mut m = matcher("a", FixedOptions::default());
        assert_eq!(m.find_first("za"), Some((1, 2)));
        m.reset();
        assert_eq!(m.matched(), None);
        assert_eq!(m.find_next("za"), None); // no previous match to resume from
        assert_eq!(m.find_first("az"), Some((0, 1)));
    }
}
