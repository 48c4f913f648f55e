#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{category::Category, set::GradeSet};
use crate::constants::{
    EXCELLENT_THRESHOLD, MAX_SCORE, PARCIALES_COUNT, PARCIALES_WEIGHT, PASSING_THRESHOLD,
    PERMANENTES_COUNT, PERMANENTES_WEIGHT, VERY_GOOD_THRESHOLD,
};

/// Descriptive band of a grade on the 0-20 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// 16 and above
    #[serde(rename = "Excelente")]
    Excellent,
    /// 14 up to 16
    #[serde(rename = "Muy Bueno")]
    VeryGood,
    /// 10.5 up to 14
    #[serde(rename = "Aprobado")]
    Passed,
    /// below 10.5
    #[serde(rename = "Reprobado")]
    Failed,
}

impl Status {
    /// Every band, best first
    pub const ALL: [Status; 4] =
        [Status::Excellent, Status::VeryGood, Status::Passed, Status::Failed];

    /// Classifies a grade. Lower bounds are inclusive, so a grade sitting
    /// exactly on a boundary belongs to the higher band.
    pub fn classify(grade: f64) -> Self {
        if grade >= EXCELLENT_THRESHOLD {
            Status::Excellent
        } else if grade >= VERY_GOOD_THRESHOLD {
            Status::VeryGood
        } else if grade >= PASSING_THRESHOLD {
            Status::Passed
        } else {
            Status::Failed
        }
    }

    /// The label shown to students
    pub fn label(self) -> &'static str {
        match self {
            Status::Excellent => "Excelente",
            Status::VeryGood => "Muy Bueno",
            Status::Passed => "Aprobado",
            Status::Failed => "Reprobado",
        }
    }

    /// Range of the band as printed in the legend
    pub fn range_label(self) -> &'static str {
        match self {
            Status::Excellent => "16 - 20",
            Status::VeryGood => "14 - 15.9",
            Status::Passed => "10.5 - 13.9",
            Status::Failed => "0 - 10.4",
        }
    }

    /// Color of the band, as a name both `colored` and `ratatui` parse
    pub fn color_name(self) -> &'static str {
        match self {
            Status::Excellent => "green",
            Status::VeryGood => "blue",
            Status::Passed => "yellow",
            Status::Failed => "red",
        }
    }

    /// Whether the band counts as a pass
    pub fn is_passing(self) -> bool {
        !matches!(self, Status::Failed)
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything derived from a [`GradeSet`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeResult {
    /// Mean of the permanentes, always over all 4 slots
    pub permanentes_average: f64,
    /// Mean of the parciales, always over both slots
    pub parciales_average:   f64,
    /// Weighted sum of the two averages
    pub final_grade:         f64,
    /// `final_grade >= 10.5`
    pub is_passing:          bool,
    /// Band of the final grade
    pub status:              Status,
}

impl GradeResult {
    /// Average of one category
    pub fn average(&self, category: Category) -> f64 {
        match category {
            Category::Permanentes => self.permanentes_average,
            Category::Parciales => self.parciales_average,
        }
    }

    /// Points a category contributes to the final grade
    pub fn points(&self, category: Category) -> f64 {
        self.average(category) * category.weight()
    }

    /// Band of a category average
    pub fn category_status(&self, category: Category) -> Status {
        Status::classify(self.average(category))
    }

    /// Percentage of the way to the passing threshold, capped at 100
    pub fn passing_progress(&self) -> f64 {
        (self.final_grade / PASSING_THRESHOLD * 100.0).min(100.0)
    }

    /// Final grade as a percentage of the full scale, capped at 100
    pub fn scale_progress(&self) -> f64 {
        (self.final_grade / MAX_SCORE * 100.0).min(100.0)
    }
}

/// Computes averages, the weighted final grade and its band.
///
/// Averages divide by the fixed slot counts, so an empty slot counts as a
/// zero. The function is total: both denominators are non-zero constants.
#[allow(clippy::cast_precision_loss)]
pub fn compute(grades: &GradeSet) -> GradeResult {
    let permanentes_average =
        grades.permanentes().iter().sum::<f64>() / PERMANENTES_COUNT as f64;
    let parciales_average = grades.parciales().iter().sum::<f64>() / PARCIALES_COUNT as f64;
    let final_grade =
        permanentes_average * PERMANENTES_WEIGHT + parciales_average * PARCIALES_WEIGHT;

    trace!(permanentes_average, parciales_average, final_grade, "grade recomputed");

    GradeResult {
        permanentes_average,
        parciales_average,
        final_grade,
        is_passing: final_grade >= PASSING_THRESHOLD,
        status: Status::classify(final_grade),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_the_higher_band() {
        assert_eq!(Status::classify(16.0), Status::Excellent);
        assert_eq!(Status::classify(15.999), Status::VeryGood);
        assert_eq!(Status::classify(14.0), Status::VeryGood);
        assert_eq!(Status::classify(13.999), Status::Passed);
        assert_eq!(Status::classify(10.5), Status::Passed);
        assert_eq!(Status::classify(10.499), Status::Failed);
        assert_eq!(Status::classify(0.0), Status::Failed);
    }

    #[test]
    fn zero_set_fails() {
        let result = compute(&GradeSet::new());
        assert_eq!(result.final_grade, 0.0);
        assert_eq!(result.status, Status::Failed);
        assert!(!result.is_passing);
        assert_eq!(result.passing_progress(), 0.0);
    }

    #[test]
    fn averages_use_fixed_denominators() {
        let result = compute(&GradeSet::from_scores([20.0, 0.0, 0.0, 0.0], [20.0, 0.0]));
        assert_eq!(result.permanentes_average, 5.0);
        assert_eq!(result.parciales_average, 10.0);
        assert_eq!(result.final_grade, 8.0);
    }

    #[test]
    fn points_and_progress() {
        let result = compute(&GradeSet::from_scores([20.0; 4], [20.0; 2]));
        assert_eq!(result.points(Category::Permanentes), 8.0);
        assert_eq!(result.points(Category::Parciales), 12.0);
        assert_eq!(result.passing_progress(), 100.0);
        assert_eq!(result.scale_progress(), 100.0);

        let half = compute(&GradeSet::from_scores([10.0; 4], [10.0; 2]));
        assert_eq!(half.scale_progress(), 50.0);
        assert!(half.passing_progress() > 95.0 && half.passing_progress() < 96.0);
    }

    #[test]
    fn status_serializes_as_its_label() {
        assert_eq!(serde_json::to_string(&Status::VeryGood).unwrap(), "\"Muy Bueno\"");
        for status in Status::ALL {
            assert_eq!(
                serde_json::to_string(&status).unwrap(),
                format!("\"{}\"", status.label())
            );
        }
    }
}
