// locars
// Vectorized fixed-pattern locating with Unicode codepoint indexing.
//
// Subjects and patterns are parallel collections recycled to a common
// length; the search itself runs in raw byte space, results are reported
// as 1-based codepoint positions.

#[cfg(test)]
mod test;

pub mod container;
pub mod error;
pub mod locate;
pub mod options;
pub mod search;
pub mod translate;
pub mod vectorize;

pub use container::IndexableStrings;
pub use error::{Error, LocateResult};
pub use locate::{LocateRow, locate_all_fixed, locate_first_fixed, locate_last_fixed};
pub use options::FixedOptions;
pub use search::{BoundPatterns, ByteSearchMatcher};
pub use vectorize::recycling_rule;
