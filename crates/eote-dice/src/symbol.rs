//! The six symbols that can appear on a die face.
//!
//! Symbols come in two polarity pairs (success/failure and advantage/threat)
//! plus two unpaired criticals (triumph and despair). Each symbol has a
//! single-character code used for parsing and plain-text display.

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// One atomic outcome printed on a die face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Critical positive. Never cancels.
    Triumph,
    /// Positive pole of the success axis.
    Success,
    /// Positive pole of the advantage axis.
    Advantage,
    /// Critical negative. Never cancels.
    Despair,
    /// Negative pole of the success axis.
    Failure,
    /// Negative pole of the advantage axis.
    Threat,
}

impl Symbol {
    /// Every symbol, in canonical display order.
    pub const ALL: [Symbol; 6] = [
        Self::Triumph,
        Self::Success,
        Self::Advantage,
        Self::Despair,
        Self::Failure,
        Self::Threat,
    ];

    /// The single-character code for this symbol.
    pub fn code(self) -> char {
        match self {
            Self::Triumph => 'T',
            Self::Success => 's',
            Self::Advantage => 'a',
            Self::Despair => 'D',
            Self::Failure => 'f',
            Self::Threat => 'r',
        }
    }

    /// Look up a symbol by its code. Codes are case-sensitive.
    pub fn from_code(code: char) -> DiceResult<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or_else(|| DiceError::InvalidSymbol {
                code,
                valid: valid_codes(),
            })
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Triumph => "triumph",
            Self::Success => "success",
            Self::Advantage => "advantage",
            Self::Despair => "despair",
            Self::Failure => "failure",
            Self::Threat => "threat",
        }
    }

    /// Position in the canonical display order (1-based).
    pub fn canonical_rank(self) -> u8 {
        match self {
            Self::Triumph => 1,
            Self::Success => 2,
            Self::Advantage => 3,
            Self::Despair => 4,
            Self::Failure => 5,
            Self::Threat => 6,
        }
    }

    /// Whether this symbol is one of the non-cancelling criticals.
    pub fn is_critical(self) -> bool {
        matches!(self, Self::Triumph | Self::Despair)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Sort symbols into canonical display order in place.
pub fn sort_canonical(symbols: &mut [Symbol]) {
    symbols.sort_by_key(|s| s.canonical_rank());
}

/// Parse a string of symbol codes such as `"ssfa"`. Whitespace is skipped.
pub fn parse_symbols(input: &str) -> DiceResult<Vec<Symbol>> {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(Symbol::from_code)
        .collect()
}

/// Render symbols as their codes, e.g. `"Tsa"`.
pub fn symbols_to_string(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.code()).collect()
}

fn valid_codes() -> String {
    Symbol::ALL
        .iter()
        .map(|s| s.code().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_code(symbol.code()), Ok(symbol));
        }
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert_eq!(Symbol::from_code('T'), Ok(Symbol::Triumph));
        assert!(Symbol::from_code('t').is_err());
        assert_eq!(Symbol::from_code('D'), Ok(Symbol::Despair));
        assert!(Symbol::from_code('d').is_err());
    }

    #[test]
    fn unknown_code_lists_valid_set() {
        let err = Symbol::from_code('x').unwrap_err();
        assert_eq!(
            err,
            DiceError::InvalidSymbol {
                code: 'x',
                valid: "T, s, a, D, f, r".to_string(),
            }
        );
    }

    #[test]
    fn canonical_order() {
        let mut symbols = vec![
            Symbol::Threat,
            Symbol::Failure,
            Symbol::Despair,
            Symbol::Advantage,
            Symbol::Success,
            Symbol::Triumph,
        ];
        sort_canonical(&mut symbols);
        assert_eq!(symbols, Symbol::ALL.to_vec());
    }

    #[test]
    fn criticals() {
        assert!(Symbol::Triumph.is_critical());
        assert!(Symbol::Despair.is_critical());
        assert!(!Symbol::Success.is_critical());
        assert!(!Symbol::Threat.is_critical());
    }

    #[test]
    fn parse_symbol_string() {
        let symbols = parse_symbols("s f a T").unwrap();
        assert_eq!(
            symbols,
            vec![
                Symbol::Success,
                Symbol::Failure,
                Symbol::Advantage,
                Symbol::Triumph
            ]
        );
        assert!(parse_symbols("ssq").is_err());
        assert!(parse_symbols("").unwrap().is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(Symbol::Threat.to_string(), "r");
        assert_eq!(
            symbols_to_string(&[Symbol::Triumph, Symbol::Success, Symbol::Advantage]),
            "Tsa"
        );
    }
}
