/// Internal-invariant errors.
///
/// These mark contract violations between components, never data
/// conditions: missing or empty elements are handled per element and do
/// not raise. Any of these aborts the whole call with no partial output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Vectorized index outside `[0, vectorize_length)`.
    IndexOutOfBounds { index: usize, len: usize },
    /// Byte offset handed to the translator does not fall on a codepoint
    /// boundary. Offsets only ever come from the matcher, so this cannot
    /// be triggered by input data.
    MisalignedOffset { byte: usize },
    /// A missing (NA) or empty element was fetched without the skip check.
    MissingElement { index: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "vectorized index {index} out of bounds (length {len})")
            }
            Error::MisalignedOffset { byte } => {
                write!(f, "byte offset {byte} is not a codepoint boundary")
            }
            Error::MissingElement { index } => {
                write!(f, "element {index} is missing or empty")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type LocateResult<T> = Result<T, Error>;
