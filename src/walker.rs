//! Walker's Alias Method for O(1) sampling from a discrete distribution.

use std::collections::VecDeque;

use rand::Rng;

use crate::IndexSampler;
use crate::error::{AliasError, InputError};

/// Order in which the low/high worklists hand back indices during construction.
///
/// The discipline decides which bucket ends up aliasing which, never the
/// resulting sampling law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Worklist {
    /// Last in, first out.
    #[default]
    Stack,
    /// First in, first out.
    Queue,
}

impl Worklist {
    fn take(self, list: &mut VecDeque<usize>) -> Option<usize> {
        match self {
            Worklist::Stack => list.pop_back(),
            Worklist::Queue => list.pop_front(),
        }
    }
}

/// One unit-width column of the table.
///
/// The lower `height` of the column belongs to the bucket's own index, the
/// rest (if any) to `alias`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    height: f64,
    alias: Option<usize>,
}

impl Bucket {
    /// Share of the column kept by the bucket's own index, in `[0, 1]`.
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn alias(&self) -> Option<usize> {
        self.alias
    }

    /// `true` when the whole column belongs to the bucket's own index.
    pub fn is_full(&self) -> bool {
        self.alias.is_none()
    }
}

/// Configures and runs alias table construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct AliasBuilder {
    worklist: Worklist,
}

impl AliasBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the worklist discipline used while pairing buckets.
    pub fn worklist(mut self, worklist: Worklist) -> Self {
        self.worklist = worklist;
        self
    }

    /// Construct an alias table from non-negative weights. O(n).
    ///
    /// # Errors
    /// * [`AliasError::InvalidInput`] if `weights` is empty, holds a negative,
    ///   NaN or infinite value, or is all zero. Checked before any allocation.
    /// * [`AliasError::InternalInvariantViolation`] if the pairing loop ever
    ///   finds a bucket below height 1 on the high worklist.
    pub fn build(&self, weights: &[f64]) -> Result<AliasTable, AliasError> {
        let max = validate(weights)?;
        let n = weights.len();
        let nf = n as f64;

        // Relative to the largest weight every entry is in [0, 1] and the sum in
        // [1, n], so neither the total nor the heights can overflow.
        let relative: Vec<f64> = weights.iter().map(|&w| w / max).collect();
        let sum: f64 = relative.iter().sum();

        let probabilities: Vec<f64> = relative.iter().map(|&w| w / sum).collect();
        // Scale so average is 1.
        let mut buckets: Vec<Bucket> = relative
            .iter()
            .map(|&w| Bucket {
                height: w * nf / sum,
                alias: None,
            })
            .collect();

        let mut low = VecDeque::with_capacity(n);
        let mut high = VecDeque::with_capacity(n);
        for (i, bucket) in buckets.iter().enumerate() {
            if bucket.height < 1.0 {
                low.push_back(i);
            } else {
                high.push_back(i);
            }
        }

        let mut aliased = 0usize;
        while !low.is_empty() && !high.is_empty() {
            let (Some(l), Some(u)) = (self.worklist.take(&mut low), self.worklist.take(&mut high))
            else {
                break;
            };

            let upper = transfer(&mut buckets, l, u)?;
            aliased += 1;

            if upper < 1.0 {
                low.push_back(u);
            } else {
                high.push_back(u);
            }
        }

        // Whatever is left is ~1 up to rounding and owns its whole column.
        for i in low.into_iter().chain(high) {
            buckets[i] = Bucket {
                height: 1.0,
                alias: None,
            };
        }

        log::debug!(
            "alias build: n = {n}, aliased buckets = {aliased}, worklist = {:?}",
            self.worklist
        );

        Ok(AliasTable {
            probabilities,
            buckets,
        })
    }
}

/// Fill the deficit of bucket `l` from the surplus of bucket `u` and make `u`
/// its alias. Returns the new height of `u`.
///
/// `u` must come off the high worklist, so its height is at least 1.
fn transfer(buckets: &mut [Bucket], l: usize, u: usize) -> Result<f64, AliasError> {
    let upper = buckets[u].height;
    if upper < 1.0 {
        log::error!("alias build: bucket {u} popped from high worklist with height {upper}");
        return Err(AliasError::InternalInvariantViolation {
            index: u,
            height: upper,
        });
    }

    let deficit = 1.0 - buckets[l].height;
    buckets[l].alias = Some(u);
    buckets[u].height = upper - deficit;
    log::trace!("bucket {l} borrows {deficit:.6} from bucket {u}");
    Ok(buckets[u].height)
}

/// Returns the largest weight once every weight is known to be usable.
fn validate(weights: &[f64]) -> Result<f64, InputError> {
    if weights.is_empty() {
        return Err(InputError::Empty);
    }

    let mut max = 0.0f64;
    for (index, &value) in weights.iter().enumerate() {
        if value.is_nan() {
            return Err(InputError::NotANumber { index });
        }
        // -0.0 compares equal to 0.0 and is accepted.
        if value < 0.0 {
            return Err(InputError::Negative { index, value });
        }
        if value.is_infinite() {
            return Err(InputError::Infinite { index });
        }
        max = max.max(value);
    }

    if max <= 0.0 {
        return Err(InputError::ZeroSum);
    }
    Ok(max)
}

/// Construct an alias table with the default builder.
pub fn build(weights: &[f64]) -> Result<AliasTable, AliasError> {
    AliasBuilder::new().build(weights)
}

/// Alias table for discrete distribution sampling.
///
/// Immutable once built: queries never mutate it, so a table can be shared
/// between threads freely. Rebuild from scratch when the weights change.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasTable {
    probabilities: Vec<f64>,
    buckets: Vec<Bucket>,
}

impl AliasTable {
    /// Construct an alias table from non-negative weights. O(n).
    ///
    /// See [`AliasBuilder::build`] for the error cases.
    pub fn new(weights: &[f64]) -> Result<Self, AliasError> {
        build(weights)
    }

    /// Normalized weight of outcome `i`.
    pub fn probability(&self, i: usize) -> Result<f64, AliasError> {
        self.probabilities
            .get(i)
            .copied()
            .ok_or_else(|| AliasError::IndexOutOfRange {
                index: i,
                len: self.len(),
            })
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn bucket(&self, i: usize) -> Result<&Bucket, AliasError> {
        self.buckets
            .get(i)
            .ok_or_else(|| AliasError::IndexOutOfRange {
                index: i,
                len: self.len(),
            })
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Map two uniform draws in `[0, 1)` to an outcome index in O(1).
    ///
    /// `u0` picks the column and `u1` decides between the column's own index
    /// and its alias. The two draws must be independent: feeding the same
    /// value (or correlated values) into both biases the result.
    ///
    /// `u0 == 1.0` is clamped to the last column.
    pub fn sample(&self, u0: f64, u1: f64) -> usize {
        let n = self.buckets.len();
        // Float to int casts saturate, so negative or NaN land on column 0.
        let column = ((u0 * n as f64) as usize).min(n - 1);
        let bucket = &self.buckets[column];
        match bucket.alias {
            Some(alias) if u1 >= bucket.height => alias,
            _ => column,
        }
    }

    /// Draw a single sample, taking both uniforms from `rng`.
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let u0: f64 = rng.random();
        let u1: f64 = rng.random();
        self.sample(u0, u1)
    }

    /// Draw `draws` samples, returning counts per index.
    pub fn histogram<R: Rng + ?Sized>(&self, rng: &mut R, draws: usize) -> Vec<usize> {
        let mut counts = vec![0usize; self.len()];
        for _ in 0..draws {
            counts[self.sample_with(rng)] += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl IndexSampler for AliasTable {
    #[inline]
    fn len(&self) -> usize {
        // call the inherent method explicitly to avoid trait-recursion
        AliasTable::len(self)
    }
    #[inline]
    fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.sample_with(rng)
    }
}
