#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Terminal form
//!
//! A full-screen ratatui form with one input per score slot, recomputing the
//! result cards on every keystroke.

pub mod app;
pub mod events;
pub mod input;
pub mod ui;

pub use app::{App, ScoreField, TuiRunner};
pub use events::{AppEvent, EventHandler, KeyAction};
