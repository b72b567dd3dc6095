// Recycling rule
// Computes the common vectorized length for inputs of mismatched lengths.

/// Common vectorized length for `lengths`.
///
/// Returns `0` when all lengths are zero, or — under `strict` — when any
/// length is zero while another is not (an empty result, not an error).
/// Otherwise returns the maximum; a non-dividing shorter length is
/// diagnostic-only and processing proceeds under modular indexing.
pub fn recycling_rule(strict: bool, lengths: &[usize]) -> usize {
    let nrecycle = lengths.iter().copied().max().unwrap_or(0);
    if nrecycle == 0 {
        return 0;
    }
    if strict && lengths.contains(&0) {
        return 0;
    }
    if lengths.iter().any(|&len| len > 0 && nrecycle % len != 0) {
        log::warn!("longer object length is not a multiple of shorter object length");
    }
    nrecycle
}
