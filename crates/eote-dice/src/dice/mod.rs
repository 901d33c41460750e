//! Die kinds, their face tables, pools, and rolling.
//!
//! There are six die kinds, each identified by a single-character color code.
//! Face tables are static: every die of a kind is face-for-face identical.

pub mod face;
pub mod pool;
pub mod roll;

pub use face::Face;
pub use pool::DicePool;
pub use roll::{RollResult, RolledFace};

use serde::{Deserialize, Serialize};

use crate::distribution::Distribution;
use crate::error::{DiceError, DiceResult};
use crate::symbol::Symbol::{
    Advantage as A, Despair as D, Failure as F, Success as S, Threat as R, Triumph as T,
};

/// One of the six narrative die kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DieKind {
    /// Blue d6, code `b`.
    Boost,
    /// Green d8, code `g`.
    Ability,
    /// Yellow d12, code `y`. Can roll a triumph.
    Proficiency,
    /// Black d6, code `k`.
    Setback,
    /// Purple d8, code `p`.
    Difficulty,
    /// Red d12, code `r`. Can roll a despair.
    Challenge,
}

const BOOST: [Face; 6] = [
    Face::new(&[]),
    Face::new(&[]),
    Face::new(&[A, A]),
    Face::new(&[A]),
    Face::new(&[S, A]),
    Face::new(&[S]),
];

const ABILITY: [Face; 8] = [
    Face::new(&[]),
    Face::new(&[S]),
    Face::new(&[S]),
    Face::new(&[S, S]),
    Face::new(&[A]),
    Face::new(&[A]),
    Face::new(&[S, A]),
    Face::new(&[A, A]),
];

const PROFICIENCY: [Face; 12] = [
    Face::new(&[]),
    Face::new(&[S]),
    Face::new(&[S]),
    Face::new(&[S, S]),
    Face::new(&[S, S]),
    Face::new(&[A]),
    Face::new(&[S, A]),
    Face::new(&[S, A]),
    Face::new(&[S, A]),
    Face::new(&[A, A]),
    Face::new(&[A, A]),
    Face::new(&[T]),
];

const SETBACK: [Face; 6] = [
    Face::new(&[]),
    Face::new(&[]),
    Face::new(&[F]),
    Face::new(&[F]),
    Face::new(&[R]),
    Face::new(&[R]),
];

const DIFFICULTY: [Face; 8] = [
    Face::new(&[]),
    Face::new(&[F]),
    Face::new(&[F, F]),
    Face::new(&[R]),
    Face::new(&[R]),
    Face::new(&[R]),
    Face::new(&[R, R]),
    Face::new(&[F, R]),
];

const CHALLENGE: [Face; 12] = [
    Face::new(&[]),
    Face::new(&[F]),
    Face::new(&[F]),
    Face::new(&[F, F]),
    Face::new(&[F, F]),
    Face::new(&[R]),
    Face::new(&[R]),
    Face::new(&[F, R]),
    Face::new(&[F, R]),
    Face::new(&[R, R]),
    Face::new(&[R, R]),
    Face::new(&[D]),
];

impl DieKind {
    /// Every die kind, in code-table order (`b g y k p r`).
    pub const ALL: [DieKind; 6] = [
        Self::Boost,
        Self::Ability,
        Self::Proficiency,
        Self::Setback,
        Self::Difficulty,
        Self::Challenge,
    ];

    /// The single-character code for this die.
    pub fn code(self) -> char {
        match self {
            Self::Boost => 'b',
            Self::Ability => 'g',
            Self::Proficiency => 'y',
            Self::Setback => 'k',
            Self::Difficulty => 'p',
            Self::Challenge => 'r',
        }
    }

    /// Look up a die kind by its code. Codes are case-sensitive.
    pub fn from_code(code: char) -> DiceResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| DiceError::InvalidDieKind {
                code,
                valid: Self::valid_codes(),
            })
    }

    /// The valid die codes, comma separated.
    pub fn valid_codes() -> String {
        Self::ALL
            .iter()
            .map(|kind| kind.code().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Boost => "boost",
            Self::Ability => "ability",
            Self::Proficiency => "proficiency",
            Self::Setback => "setback",
            Self::Difficulty => "difficulty",
            Self::Challenge => "challenge",
        }
    }

    /// The static face table for this kind.
    pub fn faces(self) -> &'static [Face] {
        match self {
            Self::Boost => &BOOST,
            Self::Ability => &ABILITY,
            Self::Proficiency => &PROFICIENCY,
            Self::Setback => &SETBACK,
            Self::Difficulty => &DIFFICULTY,
            Self::Challenge => &CHALLENGE,
        }
    }

    /// Number of faces on this die.
    pub fn sides(self) -> usize {
        self.faces().len()
    }

    /// The face at `index`, or an error if the die has no such face.
    pub fn face(self, index: usize) -> DiceResult<Face> {
        self.faces()
            .get(index)
            .copied()
            .ok_or_else(|| DiceError::FaceOutOfRange {
                kind: self,
                index,
                sides: self.sides(),
            })
    }

    /// Exact outcome distribution of a single die of this kind.
    pub fn distribution(self) -> Distribution {
        Distribution::from_outcomes(self.faces().iter().map(Face::outcome))
    }

    /// Position in the canonical display order (1-based): proficiency,
    /// ability, boost, challenge, difficulty, setback.
    pub fn canonical_rank(self) -> u8 {
        match self {
            Self::Proficiency => 1,
            Self::Ability => 2,
            Self::Boost => 3,
            Self::Challenge => 4,
            Self::Difficulty => 5,
            Self::Setback => 6,
        }
    }
}

impl std::fmt::Display for DieKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
