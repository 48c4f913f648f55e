#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Lowest score a single evaluation can hold
pub const MIN_SCORE: f64 = 0.0;

/// Highest score a single evaluation can hold, also the top of the final scale
pub const MAX_SCORE: f64 = 20.0;

/// Number of permanentes evaluations
pub const PERMANENTES_COUNT: usize = 4;

/// Number of parciales exams
pub const PARCIALES_COUNT: usize = 2;

/// Share of the final grade taken by the permanentes average
pub const PERMANENTES_WEIGHT: f64 = 0.4;

/// Share of the final grade taken by the parciales average
pub const PARCIALES_WEIGHT: f64 = 0.6;

/// Inclusive lower bound of a passing final grade
pub const PASSING_THRESHOLD: f64 = 10.5;

/// Inclusive lower bound of the "Excelente" band
pub const EXCELLENT_THRESHOLD: f64 = 16.0;

/// Inclusive lower bound of the "Muy Bueno" band
pub const VERY_GOOD_THRESHOLD: f64 = 14.0;

/// Name shown in headers and the form title
pub const APP_TITLE: &str = "TrackGrades";

/// Default TUI tick interval, in milliseconds
pub const DEFAULT_TICK_MS: u64 = 100;
