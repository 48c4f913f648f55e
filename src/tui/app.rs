#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Form state and key handling

use std::{
    io::{self, Stdout},
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::{
    calculator::GradeCalculator,
    grade::{Category, GradeResult, GradeSet},
    tui::{
        events::{AppEvent, EventHandler, KeyAction},
        input::InputState,
    },
};

/// One editable slot of the form
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreField {
    /// Category the slot belongs to
    pub category: Category,
    /// Position inside the category
    pub index:    usize,
    /// Raw text being edited
    pub input:    InputState,
}

/// Text shown for a stored score; zero shows as empty so the placeholder
/// is visible.
pub fn display_score(score: f64) -> String {
    if score == 0.0 { String::new() } else { score.to_string() }
}

/// Form state: the calculator plus one input per score slot
#[derive(Debug, Clone)]
pub struct App {
    /// Scores and their live result
    calculator:      GradeCalculator,
    /// Permanentes first, then parciales
    fields:          Vec<ScoreField>,
    /// Index of the focused field
    focus:           usize,
    /// Set once the user asks to leave
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        let fields: Vec<ScoreField> = Category::ALL
            .iter()
            .flat_map(|&category| {
                (0..category.slots()).map(move |index| ScoreField {
                    category,
                    index,
                    input: InputState::new(&category.slot_label(index)),
                })
            })
            .collect();

        let mut app = Self {
            calculator: GradeCalculator::new(),
            fields,
            focus: 0,
            should_quit: false,
        };
        app.set_focus(0);
        app
    }
}

impl App {
    /// A blank form with the first field focused
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores as stored, clamped
    pub fn grades(&self) -> &GradeSet {
        self.calculator.grades()
    }

    /// Result of the stored scores
    pub fn result(&self) -> &GradeResult {
        self.calculator.result()
    }

    /// Every field, in focus order
    pub fn fields(&self) -> &[ScoreField] {
        &self.fields
    }

    /// Fields of one category, in slot order
    pub fn category_fields(&self, category: Category) -> impl Iterator<Item = &ScoreField> {
        self.fields.iter().filter(move |f| f.category == category)
    }

    /// Index into [`App::fields`] of the focused field
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Handle one key press
    pub fn handle_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Reset => self.reset(),
            KeyAction::Next => self.set_focus((self.focus + 1) % self.fields.len()),
            KeyAction::Previous => {
                self.set_focus((self.focus + self.fields.len() - 1) % self.fields.len())
            }
            KeyAction::Left => self.focused_input().move_left(),
            KeyAction::Right => self.focused_input().move_right(),
            KeyAction::Home => self.focused_input().move_home(),
            KeyAction::End => self.focused_input().move_end(),
            KeyAction::Char(c) => {
                if self.focused_input().insert(c) {
                    self.commit();
                }
            }
            KeyAction::Backspace => {
                if self.focused_input().delete_backward() {
                    self.commit();
                }
            }
            KeyAction::Delete => {
                if self.focused_input().delete_forward() {
                    self.commit();
                }
            }
            KeyAction::None => {}
        }
    }

    /// Input of the focused field
    fn focused_input(&mut self) -> &mut InputState {
        &mut self.fields[self.focus].input
    }

    /// Pushes the focused field's text into the calculator
    fn commit(&mut self) {
        let field = &self.fields[self.focus];
        if let Err(e) =
            self.calculator
                .set_score(field.category, field.index, field.input.value.as_str())
        {
            warn!("ignored edit: {e}");
        }
    }

    /// Moves focus, rewriting the field being left with its stored value
    fn set_focus(&mut self, focus: usize) {
        let grades = *self.calculator.grades();
        if let Some(old) = self.fields.get_mut(self.focus) {
            old.input.focused = false;
            let stored = grades.score(old.category, old.index).unwrap_or_default();
            old.input.set_value(&display_score(stored));
        }

        self.focus = focus;
        if let Some(new) = self.fields.get_mut(focus) {
            new.input.focused = true;
            new.input.move_end();
        }
    }

    /// Zeroes every score and clears every field
    fn reset(&mut self) {
        self.calculator.reset();
        for field in &mut self.fields {
            field.input.clear();
        }
    }
}

/// Runs `setup`, calling `undo` before handing back any error
fn rollback_on_error<T>(setup: impl FnOnce() -> Result<T>, undo: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|_| undo())
}

/// Owns the terminal while the form is on screen
pub struct TuiRunner {
    /// Terminal in raw mode
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Source of key and tick events
    events:   EventHandler,
    /// Form state
    app:      App,
}

impl TuiRunner {
    /// Switches the terminal to raw mode on the alternate screen
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode().context("Could not enable raw mode")?;
        let terminal = rollback_on_error(
            || {
                let mut stdout = io::stdout();
                execute!(stdout, EnterAlternateScreen)
                    .context("Could not enter alternate screen")?;
                Terminal::new(CrosstermBackend::new(stdout)).context("Could not set up terminal")
            },
            || {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
            },
        )?;

        Ok(Self {
            terminal,
            events: EventHandler::new(tick_rate),
            app: App::new(),
        })
    }

    /// Draw and handle events until the user quits; returns the final state
    pub async fn run(mut self) -> Result<App> {
        info!("form started");

        loop {
            self.terminal
                .draw(|f| crate::tui::ui::draw(f, &self.app))
                .context("Could not draw the form")?;

            match self.events.next().await {
                Some(AppEvent::Key(key)) => self.app.handle_key(KeyAction::from(key)),
                Some(AppEvent::Tick | AppEvent::Resize(..)) => {}
                None => break,
            }

            if self.app.should_quit {
                break;
            }
        }

        info!(final_grade = self.app.result().final_grade, "form closed");
        Ok(self.app.clone())
    }
}

impl Drop for TuiRunner {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
