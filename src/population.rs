//! Memoized population-growth recurrence
//!
//! Models the rabbit-pair population P(n) = P(n-1) + k·P(n-2) with
//! P(1) = P(2) = 1, where k is the litter size. The stated problem domain
//! is n ≤ 40, k ≤ 5, which fits comfortably in u64; checked arithmetic
//! turns anything beyond that into an explicit error instead of a silent
//! wraparound.

use crate::error::{Result, RosalibError};

/// Memoized counter for the population recurrence
///
/// The memo is owned by the model instance and grows bottom-up, so the
/// first call for month n costs O(n) and repeat or smaller queries are
/// O(1). There is no shared state between instances; callers that want to
/// reuse one model across threads wrap it in a lock.
///
/// # Examples
///
/// ```
/// use rosalib::population::PopulationModel;
///
/// # fn main() -> rosalib::Result<()> {
/// let mut model = PopulationModel::new(3);
/// assert_eq!(model.population_after(5)?, 19);
/// assert_eq!(model.population_after(1)?, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PopulationModel {
    litter_size: u64,
    /// memo[i] holds P(i + 1); seeded with P(1) = P(2) = 1
    memo: Vec<u64>,
}

impl PopulationModel {
    /// Create a model for a fixed litter size k ≥ 0
    pub fn new(litter_size: u64) -> Self {
        Self {
            litter_size,
            memo: vec![1, 1],
        }
    }

    /// The litter size this model was built with
    pub fn litter_size(&self) -> u64 {
        self.litter_size
    }

    /// Population pair count after `months` months
    ///
    /// # Errors
    ///
    /// - [`RosalibError::InvalidArgument`] if `months` is 0
    /// - [`RosalibError::Overflow`] if the count exceeds u64 (cannot
    ///   happen within the stated n ≤ 40, k ≤ 5 domain)
    pub fn population_after(&mut self, months: u32) -> Result<u64> {
        if months < 1 {
            return Err(RosalibError::InvalidArgument(
                "months must be at least 1".to_string(),
            ));
        }

        let n = months as usize;
        while self.memo.len() < n {
            let month = self.memo.len() + 1;
            let prev = self.memo[month - 2];
            let grandprev = self.memo[month - 3];

            let litter = self
                .litter_size
                .checked_mul(grandprev)
                .ok_or(RosalibError::Overflow { months: month as u32 })?;
            let next = prev
                .checked_add(litter)
                .ok_or(RosalibError::Overflow { months: month as u32 })?;

            self.memo.push(next);
        }

        Ok(self.memo[n - 1])
    }
}
