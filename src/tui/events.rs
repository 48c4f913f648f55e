#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Event handling for the form

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tracing::warn;

/// Application events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input
    Key(KeyEvent),
    /// Nothing happened during one tick
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
}

/// Polls the terminal on a blocking task and forwards events over a channel
pub struct EventHandler {
    /// Receiving end fed by the polling task
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    /// Starts polling with the given tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::task::spawn_blocking(move || {
            loop {
                let app_event = match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            AppEvent::Key(key)
                        }
                        Ok(Event::Resize(w, h)) => AppEvent::Resize(w, h),
                        Ok(_) => continue,
                        Err(e) => {
                            warn!("failed to read terminal event: {e}");
                            continue;
                        }
                    },
                    Ok(false) => AppEvent::Tick,
                    Err(e) => {
                        warn!("failed to poll terminal: {e}");
                        break;
                    }
                };
                if tx.send(app_event).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }

    /// Get the next event, `None` once the poller has stopped
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

/// What a key press means to the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Leave the form
    Quit,
    /// Zero every score
    Reset,
    /// Focus the next field
    Next,
    /// Focus the previous field
    Previous,
    /// Cursor left
    Left,
    /// Cursor right
    Right,
    /// Cursor to start
    Home,
    /// Cursor to end
    End,
    /// Typed character
    Char(char),
    /// Delete before the cursor
    Backspace,
    /// Delete under the cursor
    Delete,
    /// Ignored key
    None,
}

impl KeyAction {
    /// Maps a key event while a score field has focus; every printable
    /// character is passed through for the field to accept or ignore.
    pub fn from_input(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyAction::Reset
            }
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => KeyAction::Next,
            KeyCode::BackTab | KeyCode::Up => KeyAction::Previous,
            KeyCode::Left => KeyAction::Left,
            KeyCode::Right => KeyAction::Right,
            KeyCode::Home => KeyAction::Home,
            KeyCode::End => KeyAction::End,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Delete => KeyAction::Delete,
            KeyCode::Char(c) => KeyAction::Char(c),
            _ => KeyAction::None,
        }
    }
}

impl From<KeyEvent> for KeyAction {
    fn from(key: KeyEvent) -> Self {
        Self::from_input(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn control_keys() {
        assert_eq!(
            KeyAction::from(key(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            KeyAction::Reset
        );
        assert_eq!(
            KeyAction::from(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
        assert_eq!(KeyAction::from(key(KeyCode::Esc, KeyModifiers::NONE)), KeyAction::Quit);
    }

    #[test]
    fn navigation_and_text() {
        assert_eq!(KeyAction::from(key(KeyCode::Enter, KeyModifiers::NONE)), KeyAction::Next);
        assert_eq!(
            KeyAction::from(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            KeyAction::Previous
        );
        assert_eq!(
            KeyAction::from(key(KeyCode::Char('r'), KeyModifiers::NONE)),
            KeyAction::Char('r')
        );
        assert_eq!(KeyAction::from(key(KeyCode::F(1), KeyModifiers::NONE)), KeyAction::None);
    }
}
