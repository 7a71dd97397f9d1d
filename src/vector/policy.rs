//! Capacity growth and compaction policy

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Sizing policy for the slot buffer
///
/// Capacity is always rounded up to a multiple of `step`, so a reallocation
/// never leaves more than one step of slack beyond the requirement, and the
/// removal threshold bounds how large the tombstone fraction may grow before
/// a compaction is forced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPolicy {
    /// Capacity granularity in slots
    step: usize,
    /// Fraction of written slots that may be tombstoned
    removal_threshold: f32,
}

impl GrowthPolicy {
    pub const DEFAULT_STEP: usize = 15;
    pub const DEFAULT_REMOVAL_THRESHOLD: f32 = 0.15;

    /// Create a policy with explicit parameters
    ///
    /// `step` must be positive and `removal_threshold` must lie strictly
    /// between 0 and 1.
    pub fn new(step: usize, removal_threshold: f32) -> Result<Self> {
        if step == 0 {
            return Err(Error::InvalidConstruction(
                "growth step must be positive".to_string(),
            ));
        }
        if !(removal_threshold > 0.0 && removal_threshold < 1.0) {
            return Err(Error::InvalidConstruction(format!(
                "removal threshold {} outside (0, 1)",
                removal_threshold
            )));
        }

        Ok(Self {
            step,
            removal_threshold,
        })
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn removal_threshold(&self) -> f32 {
        self.removal_threshold
    }

    /// Round a slot count up to the next multiple of the step
    pub fn round_up(&self, slots: usize) -> usize {
        slots.div_ceil(self.step) * self.step
    }

    /// True once the tombstone fraction reaches the removal threshold
    pub fn should_compact(&self, deleted: usize, used: usize) -> bool {
        deleted > 0 && deleted as f32 >= used as f32 * self.removal_threshold
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            step: Self::DEFAULT_STEP,
            removal_threshold: Self::DEFAULT_REMOVAL_THRESHOLD,
        }
    }
}
