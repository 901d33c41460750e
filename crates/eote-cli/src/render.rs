//! Colored terminal rendering for dice and symbols.

use colored::{ColoredString, Colorize};
use eote_dice::{DicePool, DieKind, Symbol};

/// Largest number of decimal places printed for means and probabilities.
pub const MAX_PRECISION: usize = 6;

/// Color a single symbol code.
pub fn symbol(symbol: Symbol) -> ColoredString {
    let code = symbol.code().to_string();
    match symbol {
        Symbol::Triumph => code.yellow().bold(),
        Symbol::Success => code.green().bold(),
        Symbol::Advantage => code.cyan().bold(),
        Symbol::Despair => code.red().bold(),
        Symbol::Failure => code.magenta().bold(),
        Symbol::Threat => code.black().on_white(),
    }
}

/// Color a run of symbols, or a dimmed dash when empty.
pub fn symbols(symbols: &[Symbol]) -> String {
    if symbols.is_empty() {
        return "-".dimmed().to_string();
    }
    symbols.iter().map(|&s| symbol(s).to_string()).collect()
}

/// Color a single die code.
pub fn die(kind: DieKind) -> ColoredString {
    let code = kind.code().to_string();
    match kind {
        DieKind::Proficiency => code.yellow().bold(),
        DieKind::Ability => code.green().bold(),
        DieKind::Boost => code.cyan().bold(),
        DieKind::Challenge => code.red().bold(),
        DieKind::Difficulty => code.magenta().bold(),
        DieKind::Setback => code.black().on_white(),
    }
}

/// Color every die in a pool.
pub fn pool(pool: &DicePool) -> String {
    if pool.is_empty() {
        return "(empty)".dimmed().to_string();
    }
    pool.dice().iter().map(|&kind| die(kind).to_string()).collect()
}

/// Color a signed mean: green above zero, red below.
pub fn signed(value: f64, precision: usize) -> ColoredString {
    let text = format!("{value:.precision$}");
    if value > 0.0 {
        text.green()
    } else if value < 0.0 {
        text.red()
    } else {
        text.normal()
    }
}

/// Format a probability as a percentage.
pub fn percent(probability: f64, precision: usize) -> String {
    format!("{:.precision$}%", probability * 100.0)
}
