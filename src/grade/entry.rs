#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::str::FromStr;

use super::{category::Category, set::GradeSet};
use crate::error::GradeError;

/// One slot assignment, eg. `parcial:2=15.5`.
///
/// The slot number counts from 1 like the form labels do. The score text is
/// kept raw and coerced when applied, so `p:1=-5` stores 0 rather than
/// failing.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    /// Category of the slot
    pub category: Category,
    /// 0-based slot index
    pub index:    usize,
    /// Score text as given
    pub raw:      String,
}

impl ScoreEntry {
    /// Writes this entry into `grades`
    pub fn apply(&self, grades: GradeSet) -> Result<GradeSet, GradeError> {
        grades.set_score(self.category, self.index, self.raw.as_str())
    }
}

impl FromStr for ScoreEntry {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || GradeError::MalformedEntry(s.to_string());

        let (slot, raw) = s.split_once('=').ok_or_else(malformed)?;
        let (category, number) = slot.split_once(':').ok_or_else(malformed)?;
        let index = number
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(malformed)?;

        Ok(ScoreEntry {
            category: category.parse()?,
            index,
            raw: raw.to_string(),
        })
    }
}
