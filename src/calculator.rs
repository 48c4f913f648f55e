#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::{
    error::GradeError,
    grade::{Category, GradeResult, GradeSet, RawScore, ScoreEntry},
};

/// Owns the scores being edited and keeps their result current.
///
/// Every mutation recomputes the [`GradeResult`] right away, so readers never
/// see a result that lags behind the scores.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeCalculator {
    /// Current scores
    grades: GradeSet,
    /// Result derived from `grades`
    result: GradeResult,
}

impl Default for GradeCalculator {
    fn default() -> Self {
        Self::with_grades(GradeSet::new())
    }
}

impl GradeCalculator {
    /// A calculator holding an all-zero set
    pub fn new() -> Self {
        Self::default()
    }

    /// A calculator seeded with `grades`
    pub fn with_grades(grades: GradeSet) -> Self {
        Self {
            grades,
            result: grades.compute(),
        }
    }

    /// The scores as currently entered
    pub fn grades(&self) -> &GradeSet {
        &self.grades
    }

    /// The result of the current scores
    pub fn result(&self) -> &GradeResult {
        &self.result
    }

    /// Writes `raw` into slot `index` of `category` and recomputes.
    ///
    /// Bad values never fail, they degrade to 0 or clamp into range. Only an
    /// index outside the category is rejected, in which case nothing changes.
    pub fn set_score<R: RawScore + ?Sized>(
        &mut self,
        category: Category,
        index: usize,
        raw: &R,
    ) -> Result<&GradeSet, GradeError> {
        self.replace(self.grades.set_score(category, index, raw)?);
        Ok(&self.grades)
    }

    /// Writes `values` into the leading slots of `category` and recomputes
    pub fn fill<R: RawScore>(
        &mut self,
        category: Category,
        values: &[R],
    ) -> Result<&GradeSet, GradeError> {
        self.replace(self.grades.fill(category, values)?);
        Ok(&self.grades)
    }

    /// Applies a `CATEGORY:N=NOTA` entry and recomputes
    pub fn apply(&mut self, entry: &ScoreEntry) -> Result<&GradeSet, GradeError> {
        self.replace(entry.apply(self.grades)?);
        Ok(&self.grades)
    }

    /// Zeroes every score and recomputes
    pub fn reset(&mut self) -> &GradeSet {
        self.replace(GradeSet::reset());
        &self.grades
    }

    /// Swaps in a new set and refreshes the result
    fn replace(&mut self, grades: GradeSet) {
        self.grades = grades;
        self.result = grades.compute();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grade::Status;

    #[test]
    fn result_tracks_every_update() {
        let mut calc = GradeCalculator::new();
        assert_eq!(calc.result().status, Status::Failed);

        calc.fill(Category::Permanentes, &["10", "10", "10", "10"]).unwrap();
        assert_eq!(calc.result().permanentes_average, 10.0);
        assert_eq!(calc.result().final_grade, 4.0);

        calc.set_score(Category::Parciales, 0, "11").unwrap();
        calc.set_score(Category::Parciales, 1, &11.0).unwrap();
        assert_eq!(calc.result().parciales_average, 11.0);
        assert!(calc.result().is_passing);
        assert_eq!(calc.result().status, Status::Passed);
    }

    #[test]
    fn failed_update_changes_nothing() {
        let mut calc = GradeCalculator::with_grades(GradeSet::from_scores([5.0; 4], [5.0; 2]));
        let before = calc.clone();
        assert!(calc.set_score(Category::Permanentes, 4, "20").is_err());
        assert!(calc.fill(Category::Parciales, &[1, 2, 3]).is_err());
        assert_eq!(calc, before);
    }

    #[test]
    fn entries_update_the_result() {
        let mut calc = GradeCalculator::new();
        calc.apply(&"parciales:1=20".parse().unwrap()).unwrap();
        assert_eq!(calc.result().parciales_average, 10.0);
        assert_eq!(calc.result().final_grade, 6.0);

        let before = calc.clone();
        assert!(calc.apply(&"p:5=20".parse().unwrap()).is_err());
        assert_eq!(calc, before);
    }

    #[test]
    fn reset_zeroes_scores_and_result() {
        let mut calc = GradeCalculator::with_grades(GradeSet::from_scores([18.0; 4], [19.0; 2]));
        assert_eq!(calc.result().status, Status::Excellent);

        calc.reset();
        calc.reset();
        assert_eq!(calc, GradeCalculator::new());
        assert_eq!(calc.result().final_grade, 0.0);
    }
}
