// Pattern-side container
// Pattern vector with NA markers plus a pool of matchers keyed by
// physical pattern index. A matcher survives the whole vectorized loop
// and is reset, not rebuilt, between subjects. Not shareable across
// threads while a loop is running; parallel callers need their own pool.

mod matcher;

pub use matcher::ByteSearchMatcher;

use crate::error::{Error, LocateResult};
use crate::options::FixedOptions;

pub struct BoundPatterns<'a> {
    elems: &'a [Option<&'a str>],
    nrecycle: usize,
    opts: FixedOptions,
    matchers: Vec<Option<ByteSearchMatcher>>,
}

impl<'a> BoundPatterns<'a> {
    pub fn new(elems: &'a [Option<&'a str>], nrecycle: usize, opts: FixedOptions) -> Self {
        let mut matchers = Vec::new();
        matchers.resize_with(elems.len(), || None);
        Self {
            elems,
            nrecycle,
            opts,
            matchers,
        }
    }

    pub fn len(&self) -> usize {
        self.nrecycle
    }

    pub fn is_empty(&self) -> bool {
        self.nrecycle == 0
    }

    fn physical(&self, i: usize) -> LocateResult<usize> {
        if i >= self.nrecycle {
            return Err(Error::IndexOutOfBounds {
                index: i,
                len: self.nrecycle,
            });
        }
        Ok(i % self.elems.len())
    }

    pub fn is_na(&self, i: usize) -> LocateResult<bool> {
        Ok(self.elems[self.physical(i)?].is_none())
    }

    /// Zero-length patterns never match; they are a skip condition, not a
    /// zero-width match.
    pub fn is_empty_pattern(&self, i: usize) -> LocateResult<bool> {
        Ok(matches!(self.elems[self.physical(i)?], Some("")))
    }

    /// Matcher for the pattern at vectorized index `i`, built on first use
    /// of the physical pattern and reused afterwards. The caller must have
    /// ruled out NA and empty patterns via the skip check.
    pub fn matcher(&mut self, i: usize) -> LocateResult<&mut ByteSearchMatcher> {
        let phys = self.physical(i)?;
        let pattern = match self.elems[phys] {
            Some(p) if !p.is_empty() => p,
            _ => return Err(Error::MissingElement { index: i }),
        };
        let opts = self.opts;
        Ok(self.matchers[phys].get_or_insert_with(|| ByteSearchMatcher::new(pattern, opts)))
    }
}
