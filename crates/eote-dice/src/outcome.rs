//! Outcome vectors: the four-axis numeric summary of a face.

use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// One of the four axes of an [`OutcomeVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Count of triumphs.
    Triumph,
    /// Net success (negative means net failure).
    Success,
    /// Net advantage (negative means net threat).
    Advantage,
    /// Count of despairs.
    Despair,
}

impl Axis {
    /// All four axes in vector order.
    pub const ALL: [Axis; 4] = [Self::Triumph, Self::Success, Self::Advantage, Self::Despair];
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Triumph => write!(f, "triumph"),
            Self::Success => write!(f, "success"),
            Self::Advantage => write!(f, "advantage"),
            Self::Despair => write!(f, "despair"),
        }
    }
}

/// `(triumph, success, advantage, despair)` for a face or a sum of faces.
///
/// Unlike cancellation, this reduction counts a triumph as one extra success
/// and a despair as one extra failure on the success axis.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct OutcomeVector {
    /// Number of triumphs. Never negative.
    pub triumph: i32,
    /// Net success.
    pub success: i32,
    /// Net advantage.
    pub advantage: i32,
    /// Number of despairs. Never negative.
    pub despair: i32,
}

impl OutcomeVector {
    /// The all-zero vector.
    pub const ZERO: OutcomeVector = OutcomeVector::new(0, 0, 0, 0);

    /// Build a vector from its four components.
    pub const fn new(triumph: i32, success: i32, advantage: i32, despair: i32) -> Self {
        Self {
            triumph,
            success,
            advantage,
            despair,
        }
    }

    /// Reduce a multiset of symbols to its outcome vector.
    pub fn from_symbols(symbols: &[Symbol]) -> Self {
        symbols
            .iter()
            .map(|&symbol| match symbol {
                Symbol::Triumph => Self::new(1, 1, 0, 0),
                Symbol::Success => Self::new(0, 1, 0, 0),
                Symbol::Advantage => Self::new(0, 0, 1, 0),
                Symbol::Despair => Self::new(0, -1, 0, 1),
                Symbol::Failure => Self::new(0, -1, 0, 0),
                Symbol::Threat => Self::new(0, 0, -1, 0),
            })
            .fold(Self::ZERO, Add::add)
    }

    /// The value on one axis.
    pub fn get(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Triumph => self.triumph,
            Axis::Success => self.success,
            Axis::Advantage => self.advantage,
            Axis::Despair => self.despair,
        }
    }
}

impl Add for OutcomeVector {
    type Output = OutcomeVector;

    fn add(self, rhs: OutcomeVector) -> OutcomeVector {
        OutcomeVector {
            triumph: self.triumph + rhs.triumph,
            success: self.success + rhs.success,
            advantage: self.advantage + rhs.advantage,
            despair: self.despair + rhs.despair,
        }
    }
}

impl std::fmt::Display for OutcomeVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.triumph, self.success, self.advantage, self.despair
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_face_is_zero() {
        assert_eq!(OutcomeVector::from_symbols(&[]), OutcomeVector::ZERO);
    }

    #[test]
    fn triumph_counts_as_success() {
        let v = OutcomeVector::from_symbols(&[Symbol::Triumph]);
        assert_eq!(v, OutcomeVector::new(1, 1, 0, 0));
    }

    #[test]
    fn despair_counts_as_failure() {
        let v = OutcomeVector::from_symbols(&[Symbol::Despair]);
        assert_eq!(v, OutcomeVector::new(0, -1, 0, 1));
    }

    #[test]
    fn opposing_symbols_net_out() {
        let v = OutcomeVector::from_symbols(&[
            Symbol::Success,
            Symbol::Failure,
            Symbol::Failure,
            Symbol::Advantage,
            Symbol::Advantage,
            Symbol::Threat,
        ]);
        assert_eq!(v, OutcomeVector::new(0, -1, 1, 0));
    }

    #[test]
    fn order_does_not_matter() {
        let a = OutcomeVector::from_symbols(&[Symbol::Success, Symbol::Threat, Symbol::Triumph]);
        let b = OutcomeVector::from_symbols(&[Symbol::Triumph, Symbol::Success, Symbol::Threat]);
        assert_eq!(a, b);
    }

    #[test]
    fn add_is_componentwise() {
        let a = OutcomeVector::new(1, 2, -1, 0);
        let b = OutcomeVector::new(0, -3, 2, 1);
        assert_eq!(a + b, OutcomeVector::new(1, -1, 1, 1));
    }

    #[test]
    fn axis_access() {
        let v = OutcomeVector::new(1, 2, 3, 4);
        let values: Vec<i32> = Axis::ALL.iter().map(|&axis| v.get(axis)).collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn display() {
        assert_eq!(OutcomeVector::new(0, -1, 2, 0).to_string(), "(0, -1, 2, 0)");
    }
}
