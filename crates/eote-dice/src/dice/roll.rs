//! Raw roll results.

use serde::{Deserialize, Serialize};

use super::DieKind;
use crate::cancel::{NetResult, cancel};
use crate::outcome::OutcomeVector;
use crate::symbol::{Symbol, sort_canonical, symbols_to_string};

/// The face drawn for a single die.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolledFace {
    /// The die that was rolled.
    pub die: DieKind,
    /// Index of the face in the die's face table.
    pub index: usize,
    /// The symbols on that face.
    pub symbols: Vec<Symbol>,
}

/// The raw, uncancelled result of rolling a pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Per-die faces, in pool order.
    pub faces: Vec<RolledFace>,
}

impl RollResult {
    /// Every rolled symbol as one flat list, in pool order.
    pub fn symbols(&self) -> Vec<Symbol> {
        self.faces
            .iter()
            .flat_map(|face| face.symbols.iter().copied())
            .collect()
    }

    /// The rolled symbols sorted into canonical display order.
    pub fn canonical(&self) -> Vec<Symbol> {
        let mut symbols = self.symbols();
        sort_canonical(&mut symbols);
        symbols
    }

    /// Cancel opposing symbols.
    pub fn net(&self) -> NetResult {
        cancel(&self.symbols())
    }

    /// The outcome vector of this roll.
    pub fn outcome(&self) -> OutcomeVector {
        OutcomeVector::from_symbols(&self.symbols())
    }

    /// Number of dice rolled.
    pub fn count(&self) -> usize {
        self.faces.len()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", symbols_to_string(&self.canonical()))
    }
}
