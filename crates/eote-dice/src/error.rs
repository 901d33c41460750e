//! Error types for dice pool construction and rolling.

use crate::dice::DieKind;

/// Errors that can occur while building or rolling a dice pool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// A die code in a pool string is not one of the known die kinds.
    #[error("invalid die kind '{code}', expected one of: {valid}")]
    InvalidDieKind {
        /// The offending character.
        code: char,
        /// The full set of valid die codes.
        valid: String,
    },

    /// A symbol code in a symbol string is not one of the known symbols.
    #[error("invalid symbol '{code}', expected one of: {valid}")]
    InvalidSymbol {
        /// The offending character.
        code: char,
        /// The full set of valid symbol codes.
        valid: String,
    },

    /// A forced draw asked for a face the die does not have.
    #[error("face {index} out of range for {kind} die with {sides} sides")]
    FaceOutOfRange {
        /// The die kind that was drawn from.
        kind: DieKind,
        /// The requested face index.
        index: usize,
        /// How many faces the die actually has.
        sides: usize,
    },
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
