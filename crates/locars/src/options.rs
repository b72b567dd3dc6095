/// Fixed-pattern matching configuration for one call.
///
/// Parsed once by the caller and threaded through every component; there
/// is no global matcher state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedOptions {
    /// Compare codepoints under simple lowercase folding.
    pub case_insensitive: bool,
    /// Let locate-all report overlapping occurrences. Ignored by the
    /// first/last operations.
    pub overlap: bool,
    /// Accept a match only when both of its edges sit on a word/non-word
    /// transition (alphanumeric or `_` counts as a word codepoint).
    pub word_boundaries: bool,
}
