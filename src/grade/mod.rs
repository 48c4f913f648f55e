#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// The two weighted evaluation categories.
pub mod category;
/// Single-slot assignments written as `CATEGORY:N=NOTA`.
pub mod entry;
/// Lenient score parsing and clamping.
pub mod parse;
/// Derived results and status bands.
pub mod results;
/// The clamped score collections.
pub mod set;

pub use category::Category;
pub use entry::ScoreEntry;
pub use parse::{RawScore, clamp_score, parse_score};
pub use results::{GradeResult, Status, compute};
pub use set::GradeSet;
