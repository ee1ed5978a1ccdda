use crossterm::event::{Event, KeyCode, KeyEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::ui::UiFrame;

/// Vertical scroll position over `total` lines of which `view` are visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollView {
    offset: usize,
    total: usize,
    view: usize,
}

impl ScrollView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.view)
    }

    /// Record the latest content and viewport heights and clamp the offset.
    pub fn update(&mut self, total: usize, view: usize) {
        self.total = total;
        self.view = view;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset.min(self.max_offset());
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let next = if delta < 0 {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta as usize)
        };
        self.set_offset(next);
    }

    pub fn at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let page = self.view.max(1) as isize;
        match key.code {
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::PageDown => self.scroll_by(page),
            KeyCode::Home => self.set_offset(0),
            KeyCode::End => self.set_offset(usize::MAX),
            _ => return false,
        }
        true
    }

    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => {
                    self.scroll_by(-3);
                    true
                }
                MouseEventKind::ScrollDown => {
                    self.scroll_by(3);
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }

    /// Draw a scrollbar on the right edge of `area` when content overflows.
    pub fn render_scrollbar(&self, frame: &mut UiFrame<'_>, area: Rect) {
        if self.total <= self.view || area.height == 0 {
            return;
        }
        let mut state = ScrollbarState::new(self.max_offset()).position(self.offset);
        let bar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None);
        frame.render_stateful_widget(bar, area, &mut state);
    }
}
