// Locate orchestrator
// Drives the vectorized loop: skip check, matcher lookup, byte search,
// batch translation, output assembly.

use crate::container::IndexableStrings;
use crate::error::LocateResult;
use crate::options::FixedOptions;
use crate::search::BoundPatterns;
use crate::vectorize::recycling_rule;

/// One output row.
///
/// `None` is the missing-value (NA) sentinel. Otherwise the pair is
/// `(start, end)` in 1-based codepoint positions with `end` exclusive
/// (the position of the codepoint following the match), or
/// `(start, length)` when length reporting was requested, or `(-1, -1)`
/// as the no-match sentinel in length mode. `end` being an exclusive
/// boundary in one mode and a count in the other is a compatibility
/// requirement; callers must know which mode they asked for.
pub type LocateRow = Option<(i32, i32)>;

/// Per-element skip condition: missing inputs propagate NA, empty
/// patterns propagate the no-match sentinel.
enum Skip {
    Missing,
    EmptyPattern,
}

fn skip_state(
    subjects: &IndexableStrings<'_>,
    patterns: &BoundPatterns<'_>,
    i: usize,
) -> LocateResult<Option<Skip>> {
    if subjects.is_na(i)? || patterns.is_na(i)? {
        return Ok(Some(Skip::Missing));
    }
    if patterns.is_empty_pattern(i)? {
        log::warn!("empty search pattern is not supported");
        return Ok(Some(Skip::EmptyPattern));
    }
    Ok(None)
}

fn no_match_rows(omit_no_match: bool, get_length: bool) -> Vec<LocateRow> {
    if omit_no_match {
        Vec::new()
    } else if get_length {
        vec![Some((-1, -1))]
    } else {
        vec![None]
    }
}

fn locate_firstlast(
    subjects: &[Option<&str>],
    patterns: &[Option<&str>],
    opts: &FixedOptions,
    first: bool,
    get_length: bool,
) -> LocateResult<Vec<LocateRow>> {
    let nrecycle = recycling_rule(true, &[subjects.len(), patterns.len()]);
    let mut subjects = IndexableStrings::new(subjects, nrecycle);
    let mut patterns = BoundPatterns::new(patterns, nrecycle, *opts);

    let mut ret = Vec::with_capacity(nrecycle);
    for i in 0..nrecycle {
        match skip_state(&subjects, &patterns, i)? {
            Some(Skip::Missing) => {
                ret.push(None);
                continue;
            }
            Some(Skip::EmptyPattern) => {
                ret.push(if get_length { Some((-1, -1)) } else { None });
                continue;
            }
            None => {}
        }

        let hay = subjects.get(i)?;
        let matcher = patterns.matcher(i)?;
        matcher.reset();
        let found = if first {
            matcher.find_first(hay)
        } else {
            matcher.find_last(hay)
        };

        match found {
            Some((start, end)) => {
                let mut starts = [start as u32];
                let mut ends = [end as u32];
                subjects.translate(i, &mut starts, &mut ends)?;
                let (start, end) = (starts[0] as i32, ends[0] as i32);
                // length is computed post-translation: the byte length and
                // the codepoint length of a match generally differ
                ret.push(Some(if get_length {
                    (start, end - start)
                } else {
                    (start, end)
                }));
            }
            None => ret.push(if get_length { Some((-1, -1)) } else { None }),
        }
    }
    Ok(ret)
}

/// Locate the left-most occurrence of each (recycled) pattern in each
/// (recycled) subject. One row per vectorized element.
pub fn locate_first_fixed(
    subjects: &[Option<&str>],
    patterns: &[Option<&str>],
    opts: &FixedOptions,
    get_length: bool,
) -> LocateResult<Vec<LocateRow>> {
    locate_firstlast(subjects, patterns, opts, true, get_length)
}

/// Locate the right-most occurrence. Same output shape as
/// [`locate_first_fixed`].
pub fn locate_last_fixed(
    subjects: &[Option<&str>],
    patterns: &[Option<&str>],
    opts: &FixedOptions,
    get_length: bool,
) -> LocateResult<Vec<LocateRow>> {
    locate_firstlast(subjects, patterns, opts, false, get_length)
}

/// Locate every occurrence, in left-to-right discovery order, overlapping
/// when `opts.overlap` is set.
///
/// Per element: a list of match rows; zero rows when nothing matched and
/// `omit_no_match` is set, else one sentinel row. A missing subject or
/// pattern yields exactly one NA row regardless of `omit_no_match`.
pub fn locate_all_fixed(
    subjects: &[Option<&str>],
    patterns: &[Option<&str>],
    omit_no_match: bool,
    opts: &FixedOptions,
    get_length: bool,
) -> LocateResult<Vec<Vec<LocateRow>>> {
    let nrecycle = recycling_rule(true, &[subjects.len(), patterns.len()]);
    let mut subjects = IndexableStrings::new(subjects, nrecycle);
    let mut patterns = BoundPatterns::new(patterns, nrecycle, *opts);

    let mut ret = Vec::with_capacity(nrecycle);
    for i in 0..nrecycle {
        match skip_state(&subjects, &patterns, i)? {
            Some(Skip::Missing) => {
                ret.push(vec![None]);
                continue;
            }
            Some(Skip::EmptyPattern) => {
                ret.push(no_match_rows(omit_no_match, get_length));
                continue;
            }
            None => {}
        }

        let hay = subjects.get(i)?;
        let matcher = patterns.matcher(i)?;
        matcher.reset();

        let mut occurrences: Vec<(usize, usize)> = Vec::new();
        let mut found = matcher.find_first(hay);
        while let Some(span) = found {
            occurrences.push(span);
            found = matcher.find_next(hay);
        }
        if occurrences.is_empty() {
            ret.push(no_match_rows(omit_no_match, get_length));
            continue;
        }

        // translate the whole element's offsets in one container call so
        // the monotonic cursor is shared across occurrences
        let mut starts: Vec<u32> = occurrences.iter().map(|&(s, _)| s as u32).collect();
        let mut ends: Vec<u32> = occurrences.iter().map(|&(_, e)| e as u32).collect();
        subjects.translate(i, &mut starts, &mut ends)?;

        let rows = starts
            .iter()
            .zip(&ends)
            .map(|(&start, &end)| {
                let (start, end) = (start as i32, end as i32);
                Some(if get_length {
                    (start, end - start)
                } else {
                    (start, end)
                })
            })
            .collect();
        ret.push(rows);
    }
    Ok(ret)
}
