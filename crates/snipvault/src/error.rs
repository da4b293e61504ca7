/// A result type defaulting to the crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors produced when validating or decoding identifiers.
///
/// Every variant is a client-input error: the offending identifier will never
/// become valid on retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A byte of a public identifier is not in the letter alphabet.
    ///
    /// Literal digits, punctuation, and the two excluded letters (`O`, `l`)
    /// all land here.
    #[error("invalid identifier: byte {byte:#04x} at index {index} is not in the encoding alphabet")]
    InvalidAlphabetByte { byte: u8, index: usize },

    /// A byte of a raw identifier is not an ASCII digit.
    #[error("invalid identifier: byte {byte:#04x} at index {index} is not an ascii digit")]
    InvalidDigit { byte: u8, index: usize },

    /// A raw identifier does not have the expected fixed width.
    #[error("invalid identifier: expected {expected} digits, found {len}")]
    InvalidLength { len: usize, expected: usize },
}
