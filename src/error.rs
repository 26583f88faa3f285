//! Error types for polynomial storage and text input.

use thiserror::Error;

/// Errors that can occur while growing a polynomial or reading one from text.
///
/// Negative exponents are never an error: they are clamped, ignored or read
/// as zero depending on the operation.
#[derive(Debug, Error)]
pub enum PolyError {
    /// The coefficient buffer could not be grown. The polynomial is unchanged.
    #[error("cannot allocate storage for {requested} coefficients")]
    CapacityOverflow { requested: usize },

    /// A token in the input is not a valid `i32`.
    #[error("invalid integer token: {token:?}")]
    InvalidToken { token: String },

    /// The input ended after a coefficient without its exponent.
    #[error("coefficient {coefficient} has no matching exponent")]
    UnpairedToken { coefficient: i32 },

    /// The input ended before the `-1 -1` terminator.
    #[error("input ended before the -1 -1 terminator")]
    MissingSentinel,

    /// Input remained after the terminator where none was expected.
    #[error("unexpected token after terminator: {token:?}")]
    TrailingToken { token: String },

    /// The underlying reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
