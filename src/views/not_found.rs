use std::time::Instant;

use crossterm::event::{Event, KeyCode};
use ratatui::style::Modifier;

use super::{EventOutcome, View};
use crate::error::FolioError;
use crate::theme;
use crate::ui::{UiFrame, centered_rect, truncate_to_width};

/// Shown for any unknown route.
#[derive(Debug, Clone)]
pub struct NotFoundView {
    path: String,
}

impl NotFoundView {
    pub fn new(path: &str) -> Self {
        tracing::warn!(path, "no view for route");
        Self {
            path: path.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl View for NotFoundView {
    fn render(&mut self, frame: &mut UiFrame<'_>) -> Result<(), FolioError> {
        let area = frame.area();
        frame.fill(area, theme::wallpaper());
        let lines = [
            "404".to_string(),
            "Oops! Page not found".to_string(),
            format!("No route for {}", self.path),
            "Press q to quit".to_string(),
        ];
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
        let rect = centered_rect(area, width, lines.len() as u16);
        for (idx, line) in lines.iter().enumerate() {
            let line = truncate_to_width(line, rect.width as usize);
            let x = rect.x + (rect.width.saturating_sub(line.chars().count() as u16)) / 2;
            let style = if idx == 0 {
                theme::wallpaper().add_modifier(Modifier::BOLD)
            } else {
                theme::wallpaper()
            };
            frame.set_string(rect, x, rect.y + idx as u16, &line, style);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: &Event, _now: Instant) -> Result<EventOutcome, FolioError> {
        Ok(match event {
            Event::Key(key) if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) => {
                EventOutcome::Quit
            }
            _ => EventOutcome::Ignored,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    #[test]
    fn shows_the_missing_path() {
        let mut view = NotFoundView::new("/nowhere");
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        view.render(&mut UiFrame::from_parts(area, &mut buf)).unwrap();
        let screen: String = (0..8)
            .map(|y| (0..40).map(|x| buf[(x, y)].symbol().to_string()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(screen.contains("404"));
        assert!(screen.contains("No route for /nowhere"));
        assert_eq!(view.path(), "/nowhere");
    }
}
