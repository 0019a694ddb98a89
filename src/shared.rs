//! Publish-by-replacement holder for a table whose weights get edited.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::AliasError;
use crate::walker::{AliasBuilder, AliasTable};

/// The current [`AliasTable`], swapped wholesale on every weight change.
///
/// The lock only guards the pointer: building happens before it is taken and
/// sampling happens on a cloned snapshot after it is released.
#[derive(Debug)]
pub struct SharedTable {
    builder: AliasBuilder,
    current: RwLock<Arc<AliasTable>>,
}

impl SharedTable {
    pub fn new(table: AliasTable) -> Self {
        Self {
            builder: AliasBuilder::new(),
            current: RwLock::new(Arc::new(table)),
        }
    }

    /// Build the first table with `builder`, which is then reused by [`rebuild`](Self::rebuild).
    pub fn with_builder(builder: AliasBuilder, weights: &[f64]) -> Result<Self, AliasError> {
        let table = builder.build(weights)?;
        Ok(Self {
            builder,
            current: RwLock::new(Arc::new(table)),
        })
    }

    pub fn from_weights(weights: &[f64]) -> Result<Self, AliasError> {
        Self::with_builder(AliasBuilder::new(), weights)
    }

    /// Snapshot of the current table. Stays valid after later swaps.
    pub fn load(&self) -> Arc<AliasTable> {
        Arc::clone(&self.current.read())
    }

    /// Build a table from `weights` and publish it, returning the previous one.
    ///
    /// On error nothing is published and the current table stays in place.
    pub fn rebuild(&self, weights: &[f64]) -> Result<Arc<AliasTable>, AliasError> {
        let table = self.builder.build(weights)?;
        Ok(self.replace(table))
    }

    /// Publish `table`, returning the previous one.
    pub fn replace(&self, table: AliasTable) -> Arc<AliasTable> {
        let next = Arc::new(table);
        let len = next.len();
        let previous = std::mem::replace(&mut *self.current.write(), next);
        log::debug!("shared alias table swapped: {} -> {len} outcomes", previous.len());
        previous
    }
}
