//! Dice pool construction, exact analysis, and rolling.

use rand::Rng;

use super::DieKind;
use super::roll::{RollResult, RolledFace};
use crate::cancel::NetResult;
use crate::distribution::{Distribution, frequency_overflow};
use crate::error::DiceResult;

/// A collection of dice analyzed or rolled together.
///
/// Dice are kept in canonical display order (proficiency, ability, boost,
/// challenge, difficulty, setback) regardless of how they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DicePool {
    dice: Vec<DieKind>,
}

impl DicePool {
    /// Create an empty dice pool.
    pub fn new() -> Self {
        Self { dice: Vec::new() }
    }

    /// Parse a pool from die codes such as `"yygbrppk"`.
    ///
    /// Fails on the first code that is not a known die kind.
    pub fn from_codes(codes: &str) -> DiceResult<Self> {
        let dice = codes
            .chars()
            .map(DieKind::from_code)
            .collect::<DiceResult<Vec<_>>>()?;
        let pool = Self::from_kinds(dice);
        tracing::debug!(pool = %pool, "parsed dice pool");
        Ok(pool)
    }

    /// Build a pool from die kinds in any order.
    pub fn from_kinds<I: IntoIterator<Item = DieKind>>(kinds: I) -> Self {
        let mut dice: Vec<DieKind> = kinds.into_iter().collect();
        dice.sort_by_key(|kind| kind.canonical_rank());
        Self { dice }
    }

    /// Add `count` dice of the given kind.
    pub fn add(mut self, kind: DieKind, count: u32) -> Self {
        self.dice.extend(std::iter::repeat_n(kind, count as usize));
        self.dice.sort_by_key(|kind| kind.canonical_rank());
        self
    }

    /// The dice in this pool, in canonical order.
    pub fn dice(&self) -> &[DieKind] {
        &self.dice
    }

    /// Returns how many dice are in the pool.
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Number of equally likely face combinations: the product of side counts.
    ///
    /// Panics if the product does not fit in `u128`.
    pub fn combinations(&self) -> u128 {
        self.dice
            .iter()
            .try_fold(1u128, |acc, kind| acc.checked_mul(kind.sides() as u128))
            .unwrap_or_else(|| frequency_overflow())
    }

    /// Exact outcome distribution of the whole pool.
    ///
    /// An empty pool yields the identity distribution.
    pub fn distribution(&self) -> Distribution {
        let per_die: Vec<Distribution> =
            self.dice.iter().map(|kind| kind.distribution()).collect();
        let distribution = Distribution::fold(&per_die);
        tracing::debug!(
            pool = %self,
            outcomes = distribution.outcome_count(),
            "computed pool distribution"
        );
        distribution
    }

    /// Roll every die once using the given RNG.
    pub fn roll<R: Rng>(&self, rng: &mut R) -> RollResult {
        let faces = self
            .dice
            .iter()
            .map(|&die| {
                let index = rng.random_range(0..die.sides());
                RolledFace {
                    die,
                    index,
                    symbols: die.faces()[index].symbols().to_vec(),
                }
            })
            .collect();
        let result = RollResult { faces };
        tracing::debug!(pool = %self, roll = %result, "rolled dice pool");
        result
    }

    /// Roll and cancel in one step.
    pub fn roll_with_net<R: Rng>(&self, rng: &mut R) -> (RollResult, NetResult) {
        let roll = self.roll(rng);
        let net = roll.net();
        (roll, net)
    }

    /// Roll with faces chosen by `pick` instead of at random.
    ///
    /// `pick` is called once per die, in pool order, and returns a face index.
    pub fn roll_with<F>(&self, mut pick: F) -> DiceResult<RollResult>
    where
        F: FnMut(DieKind) -> usize,
    {
        let faces = self
            .dice
            .iter()
            .map(|&die| {
                let index = pick(die);
                let face = die.face(index)?;
                Ok(RolledFace {
                    die,
                    index,
                    symbols: face.symbols().to_vec(),
                })
            })
            .collect::<DiceResult<Vec<_>>>()?;
        Ok(RollResult { faces })
    }
}

impl std::fmt::Display for DicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let codes: String = self.dice.iter().map(|kind| kind.code()).collect();
        write!(f, "{codes}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiceError;
    use crate::symbol::Symbol;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_pool() {
        let pool = DicePool::new();
        assert_eq!(pool.count(), 0);
        assert!(pool.is_empty());
        assert_eq!(pool.distribution(), Distribution::identity());
        assert!(pool.roll(&mut StdRng::seed_from_u64(1)).symbols().is_empty());
    }

    #[test]
    fn add_dice() {
        let pool = DicePool::new()
            .add(DieKind::Difficulty, 2)
            .add(DieKind::Ability, 3);
        assert_eq!(pool.count(), 5);
        assert_eq!(pool.dice()[0], DieKind::Ability);
        assert_eq!(pool.dice()[4], DieKind::Difficulty);
    }

    #[test]
    fn from_codes_sorts_canonically() {
        let pool = DicePool::from_codes("kpbgry").unwrap();
        assert_eq!(pool.to_string(), "ygbrpk");
    }

    #[test]
    fn from_codes_accepts_mixed_pool() {
        let pool = DicePool::from_codes("ygk").unwrap();
        assert_eq!(
            pool.dice(),
            &[DieKind::Proficiency, DieKind::Ability, DieKind::Setback]
        );
    }

    #[test]
    fn from_codes_rejects_unknown_kind() {
        let err = DicePool::from_codes("yyx").unwrap_err();
        assert_eq!(
            err,
            DiceError::InvalidDieKind {
                code: 'x',
                valid: "b, g, y, k, p, r".to_string(),
            }
        );
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn distribution_mass_is_product_of_sides() {
        let pool = DicePool::from_codes("bg").unwrap();
        assert_eq!(pool.distribution().total(), 48);
        assert_eq!(pool.combinations(), 48);

        let pool = DicePool::from_codes("yygbrppk").unwrap();
        assert_eq!(pool.distribution().total(), pool.combinations());
        assert_eq!(pool.combinations(), 12 * 12 * 8 * 6 * 12 * 8 * 8 * 6);
    }

    #[test]
    fn thirty_five_proficiency_dice_still_fit() {
        let pool = DicePool::new().add(DieKind::Proficiency, 35);
        assert_eq!(pool.combinations(), 12u128.pow(35));
    }

    #[test]
    #[should_panic(expected = "overflowed u128")]
    fn combinations_past_u128_panic() {
        DicePool::new().add(DieKind::Proficiency, 36).combinations();
    }

    #[test]
    #[should_panic(expected = "overflowed u128")]
    fn total_mass_past_u128_panics() {
        // Every entry of this table fits in u128; only the sum does not.
        let distribution = DicePool::new().add(DieKind::Proficiency, 36).distribution();
        distribution.total();
    }

    #[test]
    #[should_panic(expected = "overflowed u128")]
    fn mean_past_u128_panics() {
        DicePool::new()
            .add(DieKind::Proficiency, 36)
            .distribution()
            .mean();
    }

    #[test]
    fn distribution_ignores_insertion_order() {
        let kinds = [
            DieKind::Challenge,
            DieKind::Boost,
            DieKind::Proficiency,
            DieKind::Setback,
        ];
        let forward = Distribution::fold(&kinds.map(DieKind::distribution));
        let mut reversed = kinds;
        reversed.reverse();
        let backward = Distribution::fold(&reversed.map(DieKind::distribution));
        assert_eq!(forward, backward);
        assert_eq!(DicePool::from_kinds(kinds).distribution(), forward);
    }

    #[test]
    fn forced_boost_face_two() {
        let pool = DicePool::from_codes("b").unwrap();
        let roll = pool.roll_with(|_| 2).unwrap();
        assert_eq!(roll.symbols(), vec![Symbol::Advantage, Symbol::Advantage]);
        assert_eq!(roll.net().symbols(), &[Symbol::Advantage, Symbol::Advantage]);
    }

    #[test]
    fn forced_out_of_range_face() {
        let pool = DicePool::from_codes("yb").unwrap();
        let err = pool.roll_with(|_| 7).unwrap_err();
        assert_eq!(
            err,
            DiceError::FaceOutOfRange {
                kind: DieKind::Boost,
                index: 7,
                sides: 6,
            }
        );
    }

    #[test]
    fn roll_draws_one_face_per_die() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = DicePool::from_codes("yygbrppk").unwrap();
        let result = pool.roll(&mut rng);
        assert_eq!(result.count(), 8);
        for (face, &kind) in result.faces.iter().zip(pool.dice()) {
            assert_eq!(face.die, kind);
            assert!(face.index < kind.sides());
            assert_eq!(face.symbols, kind.faces()[face.index].symbols());
        }
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let pool = DicePool::from_codes("yyrrgp").unwrap();
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        assert_eq!(pool.roll(&mut rng1), pool.roll(&mut rng2));
    }

    #[test]
    fn roll_with_net_matches_cancellation() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = DicePool::from_codes("yygrpk").unwrap();
        for _ in 0..50 {
            let (roll, net) = pool.roll_with_net(&mut rng);
            assert_eq!(net, roll.net());
        }
    }

    #[test]
    fn roll_covers_every_face() {
        let mut rng = StdRng::seed_from_u64(3);
        let pool = DicePool::from_codes("y").unwrap();
        let mut seen = [false; 12];
        for _ in 0..2000 {
            seen[pool.roll(&mut rng).faces[0].index] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
