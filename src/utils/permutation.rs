use crate::error::{Result, SequenceError};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// An ordering of `0..len` in which every value appears exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation(Vec<u32>);

impl Permutation {
    /// Fisher-Yates shuffle of `0..n`.
    pub fn generate(n: u32, rng: &mut impl Rng) -> Self {
        let mut values: Vec<u32> = (0..n).collect();
        values.shuffle(rng);
        Permutation(values)
    }

    pub fn identity(n: u32) -> Self {
        Permutation((0..n).collect())
    }

    /// Wraps `values` after checking that they cover `0..values.len()` once each.
    pub fn from_values(values: Vec<u32>) -> Result<Self> {
        let len = values.len();
        let mut seen = vec![false; len];
        for (position, &value) in values.iter().enumerate() {
            let slot = seen.get_mut(value as usize).ok_or_else(|| {
                SequenceError::NotAPermutation {
                    reason: format!(
                        "value {value} at position {position} is outside 0..{len}"
                    ),
                }
            })?;
            if *slot {
                return Err(SequenceError::NotAPermutation {
                    reason: format!("value {value} at position {position} appears twice"),
                });
            }
            *slot = true;
        }
        Ok(Permutation(values))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<u32> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Permutation {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

pub fn generate_permutation(n: u32, seed: Option<u64>) -> Permutation {
    match seed {
        Some(seed) => {
            debug!("shuffling {n} values with seed {seed}");
            let mut rng = StdRng::seed_from_u64(seed);
            Permutation::generate(n, &mut rng)
        }
        None => {
            debug!("shuffling {n} values with the thread rng");
            let mut rng = rand::rng();
            Permutation::generate(n, &mut rng)
        }
    }
}
