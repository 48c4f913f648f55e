#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{PARCIALES_COUNT, PARCIALES_WEIGHT, PERMANENTES_COUNT, PERMANENTES_WEIGHT},
    error::GradeError,
};

/// One of the two weighted groups of evaluations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Continuous-assessment scores, 4 slots worth 40%
    Permanentes,
    /// Exam scores, 2 slots worth 60%
    Parciales,
}

impl Category {
    /// Both categories, in display order
    pub const ALL: [Category; 2] = [Category::Permanentes, Category::Parciales];

    /// Number of slots in this category
    pub fn slots(self) -> usize {
        match self {
            Category::Permanentes => PERMANENTES_COUNT,
            Category::Parciales => PARCIALES_COUNT,
        }
    }

    /// Share of the final grade carried by this category's average
    pub fn weight(self) -> f64 {
        match self {
            Category::Permanentes => PERMANENTES_WEIGHT,
            Category::Parciales => PARCIALES_WEIGHT,
        }
    }

    /// Title shown on cards and table rows
    pub fn label(self) -> &'static str {
        match self {
            Category::Permanentes => "Permanentes",
            Category::Parciales => "Parciales",
        }
    }

    /// Label of a single slot, 0-based `index`, eg. `Permanente 3`
    pub fn slot_label(self, index: usize) -> String {
        match self {
            Category::Permanentes => format!("Permanente {}", index + 1),
            Category::Parciales => format!("Parcial {}", index + 1),
        }
    }

    /// Plural noun for the evaluations in this category
    pub fn noun(self) -> &'static str {
        match self {
            Category::Permanentes => "evaluaciones",
            Category::Parciales => "exámenes",
        }
    }

    /// Short description shown under the card title
    pub fn description(self) -> String {
        format!("{} {} • {:.0}% del total", self.slots(), self.noun(), self.weight() * 100.0)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "permanentes" | "permanente" | "perm" | "p" => Ok(Category::Permanentes),
            "parciales" | "parcial" | "parc" | "x" => Ok(Category::Parciales),
            _ => Err(GradeError::UnknownCategory(s.to_string())),
        }
    }
}
