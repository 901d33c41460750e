//! Exact outcome distributions and their convolution.
//!
//! A [`Distribution`] is an unnormalized frequency table over
//! [`OutcomeVector`]s. Each frequency counts the equally likely face
//! combinations that produce the vector, so the total mass of a pool's
//! distribution is the product of its dice's side counts. All arithmetic is
//! integer; probabilities are only formed at query time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

use crate::outcome::{Axis, OutcomeVector};

/// Exact frequency table over outcome vectors.
///
/// Values are immutable once built: [`Distribution::combine`] always returns
/// a new table. Equality and hashing compare the full table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Distribution {
    table: BTreeMap<OutcomeVector, u128>,
}

impl Default for Distribution {
    fn default() -> Self {
        Self::identity()
    }
}

impl Distribution {
    /// The identity for [`combine`](Self::combine): `{(0,0,0,0): 1}`.
    pub fn identity() -> Self {
        Self {
            table: BTreeMap::from([(OutcomeVector::ZERO, 1)]),
        }
    }

    /// Build a distribution from equally likely outcomes, one per face.
    ///
    /// Returns the identity if `outcomes` is empty.
    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = OutcomeVector>,
    {
        let mut table = BTreeMap::new();
        for outcome in outcomes {
            *table.entry(outcome).or_insert(0) += 1;
        }
        if table.is_empty() {
            return Self::identity();
        }
        Self { table }
    }

    /// Convolve two distributions: the distribution of the sum of two
    /// independent outcome vectors.
    pub fn combine(&self, other: &Distribution) -> Distribution {
        let mut table = BTreeMap::new();
        for (&left, &left_freq) in &self.table {
            for (&right, &right_freq) in &other.table {
                let freq = left_freq
                    .checked_mul(right_freq)
                    .unwrap_or_else(|| frequency_overflow());
                let slot = table.entry(left + right).or_insert(0u128);
                *slot = slot.checked_add(freq).unwrap_or_else(|| frequency_overflow());
            }
        }
        tracing::trace!(
            left = self.table.len(),
            right = other.table.len(),
            result = table.len(),
            "convolved distributions"
        );
        Distribution { table }
    }

    /// Convolve every distribution in `items`, starting from the identity.
    pub fn fold<'a, I>(items: I) -> Distribution
    where
        I: IntoIterator<Item = &'a Distribution>,
    {
        items
            .into_iter()
            .fold(Self::identity(), |acc, next| acc.combine(next))
    }

    /// Total mass: the number of equally likely face combinations.
    ///
    /// Panics if the mass does not fit in `u128`.
    pub fn total(&self) -> u128 {
        self.table
            .values()
            .try_fold(0u128, |acc, &freq| acc.checked_add(freq))
            .unwrap_or_else(|| frequency_overflow())
    }

    /// Number of distinct outcome vectors in the table.
    pub fn outcome_count(&self) -> usize {
        self.table.len()
    }

    /// Frequency of one exact outcome, 0 if it cannot occur.
    pub fn frequency(&self, outcome: &OutcomeVector) -> u128 {
        self.table.get(outcome).copied().unwrap_or(0)
    }

    /// Probability of one exact outcome.
    pub fn probability_of(&self, outcome: &OutcomeVector) -> f64 {
        self.frequency(outcome) as f64 / self.checked_total() as f64
    }

    /// Iterate `(outcome, frequency)` pairs in ascending outcome order.
    pub fn iter(&self) -> impl Iterator<Item = (OutcomeVector, u128)> + '_ {
        self.table.iter().map(|(&outcome, &freq)| (outcome, freq))
    }

    /// Expected value on each axis.
    pub fn mean(&self) -> Mean {
        let total = self.checked_total() as f64;
        let mut sums = [0i128; 4];
        for (outcome, &freq) in &self.table {
            let freq = i128::try_from(freq).unwrap_or_else(|_| frequency_overflow());
            for (sum, axis) in sums.iter_mut().zip(Axis::ALL) {
                *sum = i128::from(outcome.get(axis))
                    .checked_mul(freq)
                    .and_then(|weighted| sum.checked_add(weighted))
                    .unwrap_or_else(|| frequency_overflow());
            }
        }
        Mean {
            triumph: sums[0] as f64 / total,
            success: sums[1] as f64 / total,
            advantage: sums[2] as f64 / total,
            despair: sums[3] as f64 / total,
        }
    }

    /// Probability that every constrained axis meets its minimum.
    ///
    /// The joint table is scanned once, so correlation between axes is kept.
    pub fn probability_at_least(&self, thresholds: &Thresholds) -> f64 {
        let hits: u128 = self
            .table
            .iter()
            .filter(|(outcome, _)| thresholds.is_satisfied_by(outcome))
            .map(|(_, &freq)| freq)
            .sum();
        hits as f64 / self.checked_total() as f64
    }

    /// Marginal frequency table of a single axis.
    pub fn marginal(&self, axis: Axis) -> BTreeMap<i32, u128> {
        let mut marginal = BTreeMap::new();
        for (outcome, &freq) in &self.table {
            *marginal.entry(outcome.get(axis)).or_insert(0) += freq;
        }
        marginal
    }

    fn checked_total(&self) -> u128 {
        let total = self.total();
        assert!(total > 0, "distribution has zero total mass");
        total
    }
}

pub(crate) fn frequency_overflow() -> ! {
    panic!("distribution frequency overflowed u128")
}

impl Serialize for Distribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry {
            outcome: OutcomeVector,
            frequency: u128,
        }

        serializer.collect_seq(
            self.iter()
                .map(|(outcome, frequency)| Entry { outcome, frequency }),
        )
    }
}

/// Expected value per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mean {
    /// Expected triumphs.
    pub triumph: f64,
    /// Expected net success.
    pub success: f64,
    /// Expected net advantage.
    pub advantage: f64,
    /// Expected despairs.
    pub despair: f64,
}

impl Mean {
    /// The mean on one axis.
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Triumph => self.triumph,
            Axis::Success => self.success,
            Axis::Advantage => self.advantage,
            Axis::Despair => self.despair,
        }
    }
}

/// Optional per-axis minimums for [`Distribution::probability_at_least`].
///
/// Absent constraints are always satisfied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Minimum triumphs.
    pub triumph: Option<i32>,
    /// Minimum net success.
    pub success: Option<i32>,
    /// Minimum net advantage.
    pub advantage: Option<i32>,
    /// Minimum despairs.
    pub despair: Option<i32>,
}

impl Thresholds {
    /// No constraints at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Require at least `min` on the given axis.
    pub fn at_least(mut self, axis: Axis, min: i32) -> Self {
        let slot = match axis {
            Axis::Triumph => &mut self.triumph,
            Axis::Success => &mut self.success,
            Axis::Advantage => &mut self.advantage,
            Axis::Despair => &mut self.despair,
        };
        *slot = Some(min);
        self
    }

    /// Require at least `min` triumphs.
    pub fn with_triumph(self, min: i32) -> Self {
        self.at_least(Axis::Triumph, min)
    }

    /// Require at least `min` net success.
    pub fn with_success(self, min: i32) -> Self {
        self.at_least(Axis::Success, min)
    }

    /// Require at least `min` net advantage.
    pub fn with_advantage(self, min: i32) -> Self {
        self.at_least(Axis::Advantage, min)
    }

    /// Require at least `min` despairs.
    pub fn with_despair(self, min: i32) -> Self {
        self.at_least(Axis::Despair, min)
    }

    /// The minimum on one axis, if any.
    pub fn get(&self, axis: Axis) -> Option<i32> {
        match axis {
            Axis::Triumph => self.triumph,
            Axis::Success => self.success,
            Axis::Advantage => self.advantage,
            Axis::Despair => self.despair,
        }
    }

    /// True if no axis is constrained.
    pub fn is_unconstrained(&self) -> bool {
        Axis::ALL.iter().all(|&axis| self.get(axis).is_none())
    }

    /// Whether `outcome` meets every present minimum.
    pub fn is_satisfied_by(&self, outcome: &OutcomeVector) -> bool {
        Axis::ALL
            .iter()
            .all(|&axis| self.get(axis).is_none_or(|min| outcome.get(axis) >= min))
    }
}
