//! Error types.

/// Alias for [`core::result::Result`] with the `base32-variants` crate's
/// [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input bytes were not supplied.
    #[error("input bytes must not be null")]
    NullInput,

    /// Invalid buffer or alphabet length.
    #[error("invalid length")]
    InvalidLength,

    /// Alphabet symbol is not printable ASCII, or is the `=` padding character.
    #[error("invalid alphabet symbol at index {index}")]
    InvalidSymbol {
        /// Position of the offending symbol in the alphabet.
        index: usize,
    },

    /// Unrecognized Base32 variant name.
    #[error("unknown Base32 variant")]
    UnknownVariant,

    /// Internal error.
    #[error("internal error")]
    Internal,
}
