//! # walker_alias
//!
//! Constant-time weighted discrete sampling.
//!
//! This crate is a compact implementation of
//! [Walker’s Alias Method](https://en.wikipedia.org/wiki/Alias_method):
//! given `n` non-negative weights it builds a table that reports the exact
//! normalized probability of every outcome and maps two uniform draws to an
//! outcome index in O(1).
//!
//! ## Quick start
//!
//! ```rust
//! use walker_alias::AliasTable;
//!
//! # fn main() -> Result<(), walker_alias::AliasError> {
//! let table = AliasTable::new(&[1.0 / 2.0, 1.0 / 3.0, 1.0 / 12.0, 1.0 / 12.0])?;
//! assert!((table.probability(0)? - 0.5).abs() < 1e-12);
//!
//! // Two independent uniforms in [0, 1) from any source.
//! let i = table.sample(0.42, 0.87);
//! assert!(i < table.len());
//!
//! // Or let a `rand` generator supply them.
//! let mut rng = rand::rng();
//! let j = table.sample_with(&mut rng);
//! # let _ = j;
//! # Ok(()) }
//! ```
//!
//! ## Sharing a table that changes
//!
//! Tables are immutable. When the weights change, build a new one and swap it
//! in with [`SharedTable::rebuild`]; readers holding the previous snapshot keep
//! sampling from it undisturbed.
//!
//! ## Performance
//! * **Build**: O(n) to construct an alias table from weights.
//! * **Sample**: O(1) per draw (2 random numbers, 1 branch).
//! * **Space**: 2 vectors of length `n` (probabilities + buckets).
//!
//! ## Gotchas
//! * Weights must be **non-negative** and not all zero; `NaN`/∞ are rejected.
//! * The two uniforms passed to [`AliasTable::sample`] must be independent.
//!   Reusing one draw for both halves biases the output.
//! * This is for *fixed* distributions. If you mutate weights, rebuild the table.
//!
//! ---
//!
//! `rand` integration uses the modern `Rng::random()` APIs

mod error;
mod shared;
mod walker;

/// A minimal interface for “index samplers”.
/// Implemented by [`AliasTable`].
#[allow(clippy::len_without_is_empty)]
pub trait IndexSampler {
    /// Number of outcomes; sampled indices are always below it.
    fn len(&self) -> usize;
    /// Draw one outcome index using randomness from `rng`.
    fn sample_index<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> usize;
}

pub use error::{AliasError, InputError};
pub use shared::SharedTable;
pub use walker::{AliasBuilder, AliasTable, Bucket, Worklist, build};
