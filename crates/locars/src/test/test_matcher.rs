// Tests for the matcher pool and scan behavior across subjects
use crate::error::Error;
use crate::{BoundPatterns, ByteSearchMatcher, FixedOptions};

#[test]
fn test_matcher_reuse_across_subjects() {
    // one matcher per physical pattern, reset between subjects
    let mut m = ByteSearchMatcher::new("ab", FixedOptions::default());
    assert_eq!(m.find_first("xxab"), Some((2, 4)));
    m.reset();
    assert_eq!(m.find_first("ab"), Some((0, 2)));
    m.reset();
    assert_eq!(m.find_first("zzz"), None);
}

#[test]
fn test_pool_is_keyed_by_physical_index() {
    let pats = [Some("a"), Some("b")];
    let mut pool = BoundPatterns::new(&pats, 4, FixedOptions::default());
    // i = 1 and i = 3 alias to the "b" matcher
    assert_eq!(pool.matcher(1).unwrap().find_first("abab"), Some((1, 2)));
    assert_eq!(pool.matcher(3).unwrap().find_first("b"), Some((0, 1)));
    assert_eq!(pool.matcher(0).unwrap().find_first("ba"), Some((1, 2)));
}

#[test]
fn test_pool_rejects_out_of_range_index() {
    let pats = [Some("a")];
    let mut pool = BoundPatterns::new(&pats, 2, FixedOptions::default());
    assert!(matches!(
        pool.matcher(2),
        Err(Error::IndexOutOfBounds { index: 2, len: 2 })
    ));
}

#[test]
fn test_pool_flags_na_and_empty_patterns() {
    let pats = [Some("a"), None, Some("")];
    let pool = BoundPatterns::new(&pats, 3, FixedOptions::default());
    assert_eq!(pool.is_na(0), Ok(false));
    assert_eq!(pool.is_na(1), Ok(true));
    assert_eq!(pool.is_empty_pattern(2), Ok(true));
    assert_eq!(pool.is_empty_pattern(0), Ok(false));
}

#[test]
fn test_case_insensitive_multibyte() {
    let opts = FixedOptions {
        case_insensitive: true,
        ..Default::default()
    };
    // 'Σ' lowercases to 'σ' (both 2 bytes here)
    let mut m = ByteSearchMatcher::new("σβ", opts);
    assert_eq!(m.find_first("xΣβy"), Some((1, 5)));
    assert_eq!(m.matched_len(), 4);
}

#[test]
fn test_find_last_with_overlap_setting_is_unchanged() {
    let opts = FixedOptions {
        overlap: true,
        ..Default::default()
    };
    let mut m = ByteSearchMatcher::new("aa", opts);
    // right-most start, same answer as without overlap
    assert_eq!(m.find_last("aaaa"), Some((2, 4)));
}
