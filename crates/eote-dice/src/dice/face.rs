//! A single die face.

use crate::outcome::OutcomeVector;
use crate::symbol::Symbol;

/// One side of a die: zero or more symbols. Order is insignificant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face {
    symbols: &'static [Symbol],
}

impl Face {
    /// Wrap a static symbol list as a face.
    pub const fn new(symbols: &'static [Symbol]) -> Self {
        Self { symbols }
    }

    /// The symbols printed on this face.
    pub fn symbols(&self) -> &'static [Symbol] {
        self.symbols
    }

    /// How many times `symbol` appears on this face.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.symbols.iter().filter(|&&s| s == symbol).count()
    }

    /// True for a blank face.
    pub fn is_blank(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The outcome vector this face contributes.
    pub fn outcome(&self) -> OutcomeVector {
        OutcomeVector::from_symbols(self.symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_symbol() {
        let face = Face::new(&[Symbol::Triumph, Symbol::Triumph, Symbol::Despair]);
        assert_eq!(face.count(Symbol::Triumph), 2);
        assert_eq!(face.count(Symbol::Despair), 1);
        assert_eq!(face.count(Symbol::Success), 0);
    }

    #[test]
    fn blank_face() {
        let face = Face::new(&[]);
        assert!(face.is_blank());
        assert_eq!(face.outcome(), OutcomeVector::ZERO);
    }

    #[test]
    fn outcome_of_mixed_face() {
        let face = Face::new(&[Symbol::Failure, Symbol::Threat]);
        assert_eq!(face.outcome(), OutcomeVector::new(0, -1, -1, 0));
    }
}
