#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::grade::Category;

/// Errors raised by the typed grade API.
///
/// Malformed or out-of-range score values never end up here, they are coerced
/// into the valid range instead. These variants cover caller mistakes only.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GradeError {
    /// The text did not name a known category.
    #[error("Unknown category `{0}`, expected `permanentes` or `parciales`.")]
    UnknownCategory(String),
    /// A score assignment was not written as `CATEGORY:N=NOTA`.
    #[error("Expected `CATEGORY:N=NOTA` with N counting from 1, got `{0}`.")]
    MalformedEntry(String),
    /// The index does not address a slot of the category.
    #[error("{category} has {len} slots, index {index} is out of range.")]
    IndexOutOfRange {
        /// category that was addressed
        category: Category,
        /// index that was requested
        index:    usize,
        /// number of slots in the category
        len:      usize,
    },
    /// More values were supplied than the category has slots.
    #[error("{category} takes at most {max} scores, {given} were given.")]
    TooManyScores {
        /// category being filled
        category: Category,
        /// number of values supplied
        given:    usize,
        /// number of slots in the category
        max:      usize,
    },
}
