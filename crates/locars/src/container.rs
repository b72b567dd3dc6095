// Indexable string container
// Subject vector with NA markers, recycled indexing, and a lazy cache of
// byte->codepoint tables keyed by physical element.

use ahash::AHashMap;

use crate::error::{Error, LocateResult};
use crate::translate;

/// A borrowed vector of UTF-8 subjects (`None` = NA) addressed through the
/// vectorized index space `[0, nrecycle)`; element `i` resolves to the
/// physical element `i % n`.
///
/// The codepoint table for a physical element is built on first
/// translation request and reused across every vectorized position that
/// aliases to it. Elements are immutable for the container's lifetime, so
/// the cache is never evicted.
pub struct IndexableStrings<'a> {
    elems: &'a [Option<&'a str>],
    nrecycle: usize,
    tables: AHashMap<usize, Vec<u32>>,
}

impl<'a> IndexableStrings<'a> {
    pub fn new(elems: &'a [Option<&'a str>], nrecycle: usize) -> Self {
        Self {
            elems,
            nrecycle,
            tables: AHashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.nrecycle
    }

    pub fn is_empty(&self) -> bool {
        self.nrecycle == 0
    }

    /// Physical index for vectorized index `i`. Out-of-range indices are
    /// a programming error, not reachable via valid input.
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

    /// Subject bytes at vectorized index `i`. The caller must have ruled
    /// out NA via [`is_na`](Self::is_na) first.
    pub fn get(&self, i: usize) -> LocateResult<&'a str> {
        self.elems[self.physical(i)?].ok_or(Error::MissingElement { index: i })
    }

    /// Batch-translate the `starts` and `ends` byte-offset columns of one
    /// element into 1-based codepoint positions, each column ascending,
    /// using the cached codepoint table for `i % n`.
    pub fn translate(
        &mut self,
        i: usize,
        starts: &mut [u32],
        ends: &mut [u32],
    ) -> LocateResult<()> {
        let phys = self.physical(i)?;
        let text = self.elems[phys].ok_or(Error::MissingElement { index: i })?;
        let table = self
            .tables
            .entry(phys)
            .or_insert_with(|| translate::codepoint_starts(text));
        translate::byte_to_codepoint_batch(table, starts)?;
        translate::byte_to_codepoint_batch(table, ends)
    }
}
