//! Exact analysis and rolling of narrative dice pools.
//!
//! Six die kinds carry faces printed with success, advantage, triumph,
//! failure, threat, and despair symbols. This crate computes the exact
//! outcome distribution of any pool by convolving per-die frequency tables,
//! and rolls pools and cancels opposing symbols to a net result.

pub mod cancel;
pub mod config;
pub mod dice;
pub mod distribution;
pub mod error;
pub mod outcome;
pub mod symbol;

pub use cancel::{NetResult, cancel};
pub use config::DiceConfig;
pub use dice::{DicePool, DieKind, Face, RollResult, RolledFace};
pub use distribution::{Distribution, Mean, Thresholds};
pub use error::{DiceError, DiceResult};
pub use outcome::{Axis, OutcomeVector};
pub use symbol::{Symbol, parse_symbols};
