#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::Serialize;
use tracing::debug;

use super::{
    category::Category,
    parse::{RawScore, clamp_score},
    results::{GradeResult, compute},
};
use crate::{
    constants::{PARCIALES_COUNT, PERMANENTES_COUNT},
    error::GradeError,
};

/// The scores of one student, always inside `[0, 20]`.
///
/// Fields are private so every write goes through clamping. Updates return a
/// new value instead of mutating in place; `GradeSet` is `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GradeSet {
    /// Continuous-assessment scores
    permanentes: [f64; PERMANENTES_COUNT],
    /// Exam scores
    parciales:   [f64; PARCIALES_COUNT],
}

impl GradeSet {
    /// An all-zero set, the state of a fresh form
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from raw values, clamping each one
    pub fn from_scores(
        permanentes: [f64; PERMANENTES_COUNT],
        parciales: [f64; PARCIALES_COUNT],
    ) -> Self {
        Self {
            permanentes: permanentes.map(clamp_score),
            parciales:   parciales.map(clamp_score),
        }
    }

    /// Scores of the permanentes category
    pub fn permanentes(&self) -> &[f64; PERMANENTES_COUNT] {
        &self.permanentes
    }

    /// Scores of the parciales category
    pub fn parciales(&self) -> &[f64; PARCIALES_COUNT] {
        &self.parciales
    }

    /// Scores of either category as a slice
    pub fn scores(&self, category: Category) -> &[f64] {
        match category {
            Category::Permanentes => &self.permanentes,
            Category::Parciales => &self.parciales,
        }
    }

    /// Score stored at `index` of `category`, if the slot exists
    pub fn score(&self, category: Category, index: usize) -> Option<f64> {
        self.scores(category).get(index).copied()
    }

    /// Returns a copy with slot `index` of `category` replaced by `raw`.
    ///
    /// * `category`: the group to update
    /// * `index`: 0-based slot inside the group
    /// * `raw`: text or number; unparseable text reads as 0, everything is
    ///   clamped into `[0, 20]`
    pub fn set_score<R: RawScore + ?Sized>(
        self,
        category: Category,
        index: usize,
        raw: &R,
    ) -> Result<Self, GradeError> {
        let mut next = self;
        let slots = match category {
            Category::Permanentes => &mut next.permanentes[..],
            Category::Parciales => &mut next.parciales[..],
        };
        let len = slots.len();
        let slot = slots.get_mut(index).ok_or(GradeError::IndexOutOfRange {
            category,
            index,
            len,
        })?;
        *slot = raw.to_score();

        debug!(%category, index, value = *slot, "score updated");
        Ok(next)
    }

    /// Writes `values` into the first slots of `category`, in order.
    ///
    /// Slots past the end of `values` keep their current score. Supplying more
    /// values than the category holds is an error and leaves nothing changed.
    pub fn fill<R: RawScore>(self, category: Category, values: &[R]) -> Result<Self, GradeError> {
        if values.len() > category.slots() {
            return Err(GradeError::TooManyScores {
                category,
                given: values.len(),
                max: category.slots(),
            });
        }

        values
            .iter()
            .enumerate()
            .try_fold(self, |set, (index, raw)| set.set_score(category, index, raw))
    }

    /// An all-zero set, discarding every score
    pub fn reset() -> Self {
        debug!("scores reset");
        Self::default()
    }

    /// Derives averages, final grade and status for this set
    pub fn compute(&self) -> GradeResult {
        compute(self)
    }
}
