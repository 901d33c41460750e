//! Symbol cancellation.
//!
//! Each success cancels one failure and each advantage cancels one threat.
//! Triumph and despair never cancel and pass through untouched. Note that
//! this differs from [`OutcomeVector`](crate::OutcomeVector), which folds
//! criticals into the success axis for probability analysis.

use serde::{Deserialize, Serialize};

use crate::symbol::{Symbol, sort_canonical, symbols_to_string};

/// The net symbols left after cancellation.
///
/// Symbols are stored in cancellation order: the criticals as rolled, then
/// the success/failure group, then the advantage/threat group. Use
/// [`NetResult::canonical`] for display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetResult {
    symbols: Vec<Symbol>,
}

impl NetResult {
    /// The net symbols in cancellation order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// The net symbols in canonical display order.
    pub fn canonical(&self) -> Vec<Symbol> {
        let mut symbols = self.symbols.clone();
        sort_canonical(&mut symbols);
        symbols
    }

    /// Net successes; negative for net failures.
    pub fn net_success(&self) -> i32 {
        self.signed_count(Symbol::Success, Symbol::Failure)
    }

    /// Net advantage; negative for net threat.
    pub fn net_advantage(&self) -> i32 {
        self.signed_count(Symbol::Advantage, Symbol::Threat)
    }

    /// Number of triumphs.
    pub fn triumphs(&self) -> usize {
        self.count(Symbol::Triumph)
    }

    /// Number of despairs.
    pub fn despairs(&self) -> usize {
        self.count(Symbol::Despair)
    }

    /// A check passes with at least one uncancelled success.
    pub fn is_success(&self) -> bool {
        self.net_success() > 0
    }

    fn count(&self, symbol: Symbol) -> usize {
        self.symbols.iter().filter(|&&s| s == symbol).count()
    }

    fn signed_count(&self, positive: Symbol, negative: Symbol) -> i32 {
        self.count(positive) as i32 - self.count(negative) as i32
    }
}

impl std::fmt::Display for NetResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", symbols_to_string(&self.canonical()))
    }
}

/// Cancel opposing symbols in a roll.
///
/// Each success cancels one failure and each advantage cancels one threat.
/// Triumphs and despairs never cancel anything.
///
/// The returned symbols are ordered as follows: triumphs and despairs in the
/// order they were rolled, then the surviving successes or failures, then the
/// surviving advantages or threats. Use [`NetResult::canonical`] for display
/// order.
pub fn cancel(symbols: &[Symbol]) -> NetResult {
    let mut net_success: i32 = 0;
    let mut net_advantage: i32 = 0;
    let mut net = Vec::new();

    for &symbol in symbols {
        match symbol {
            Symbol::Success => net_success += 1,
            Symbol::Failure => net_success -= 1,
            Symbol::Advantage => net_advantage += 1,
            Symbol::Threat => net_advantage -= 1,
            Symbol::Triumph | Symbol::Despair => net.push(symbol),
        }
    }

    push_net(&mut net, net_success, Symbol::Success, Symbol::Failure);
    push_net(&mut net, net_advantage, Symbol::Advantage, Symbol::Threat);

    NetResult { symbols: net }
}

fn push_net(out: &mut Vec<Symbol>, net: i32, positive: Symbol, negative: Symbol) {
    let symbol = if net >= 0 { positive } else { negative };
    out.extend(std::iter::repeat_n(symbol, net.unsigned_abs() as usize));
}
