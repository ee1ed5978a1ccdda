//! Render fault guard.
//!
//! Wraps a view and catches both `Err` results and panics from it. Once
//! tripped the wrapped view is never called again and every frame shows
//! `Error: <message>`.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Instant;

use crossterm::event::{Event, KeyCode};

use super::{EventOutcome, View};
use crate::error::FolioError;
use crate::log_buffer::panic_message;
use crate::theme;
use crate::ui::UiFrame;

pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

#[derive(Debug)]
pub struct ErrorBoundary<V> {
    inner: V,
    failure: Option<String>,
}

impl<V: View> ErrorBoundary<V> {
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            failure: None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    fn trip(&mut self, message: String) {
        let message = if message.trim().is_empty() {
            DEFAULT_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        tracing::error!(error = %message, "view failed; showing fallback");
        self.failure = Some(message);
    }

    /// Run `f` against the inner view, tripping on `Err` or panic.
    fn guard<T>(&mut self, f: impl FnOnce(&mut V) -> Result<T, FolioError>) -> Option<T> {
        let inner = &mut self.inner;
        match catch_unwind(AssertUnwindSafe(|| f(inner))) {
            Ok(Ok(value)) => Some(value),
            Ok(Err(err)) => {
                self.trip(err.to_string());
                None
            }
            Err(payload) => {
                self.trip(panic_message(payload.as_ref()));
                None
            }
        }
    }

    fn render_fallback(&self, frame: &mut UiFrame<'_>) {
        let area = frame.area();
        frame.fill(area, ratatui::style::Style::default());
        let message = self.failure.as_deref().unwrap_or(DEFAULT_ERROR_MESSAGE);
        let text = format!("Error: {message}");
        frame.set_string(area, area.x, area.y, &text, theme::error_text());
    }
}

impl<V: View> View for ErrorBoundary<V> {
    fn render(&mut self, frame: &mut UiFrame<'_>) -> Result<(), FolioError> {
        if self.failure.is_none() {
            self.guard(|view| view.render(frame));
        }
        if self.failure.is_some() {
            self.render_fallback(frame);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: &Event, now: Instant) -> Result<EventOutcome, FolioError> {
        if self.failure.is_some() {
            return Ok(match event {
                Event::Key(key) if key.code == KeyCode::Char('q') => EventOutcome::Quit,
                _ => EventOutcome::Ignored,
            });
        }
        Ok(self
            .guard(|view| view.handle_event(event, now))
            .unwrap_or(EventOutcome::Handled))
    }

    fn tick(&mut self, now: Instant) {
        if self.failure.is_none() {
            self.guard(|view| {
                view.tick(now);
                Ok(())
            });
        }
    }
}
