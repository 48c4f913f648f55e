//! # trackgrades
//!
//! A grade calculator for a course scored on a 0 to 20 scale. Four
//! *permanentes* evaluations make up 40% of the final grade and two
//! *parciales* exams make up the remaining 60%; a final grade of 10.5 or more
//! passes.
//!
//! Scores are forgiving: anything that doesn't parse counts as 0 and anything
//! outside the scale is clamped onto it.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Stateful calculator that keeps its result in step with its scores
pub mod calculator;
/// Runtime configuration read from the environment
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// Errors raised by score operations
pub mod error;
/// Scores, categories, bands and the grade computation
pub mod grade;
/// Table, summary and JSON renderings of a result
pub mod report;
/// Interactive terminal form
pub mod tui;

pub use calculator::GradeCalculator;
pub use error::GradeError;
pub use grade::{Category, GradeResult, GradeSet, ScoreEntry, Status, compute};
pub use report::GradeReport;
