//! UiFrame: a thin wrapper around `ratatui::Frame` that clips every draw call
//! to the visible area.
//!
//! Windows are dragged partly off-screen and the viewport can shrink between
//! frames, so rectangles computed from tracker positions regularly overhang the
//! buffer. Drawing through `UiFrame` keeps those writes inside the buffer.
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{StatefulWidget, Widget};

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Build a frame over a bare buffer (offscreen rendering and tests).
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }

    pub fn render_stateful_widget<W>(&mut self, widget: W, area: Rect, state: &mut W::State)
    where
        W: StatefulWidget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer, state);
        }
    }

    /// Blank `area` and paint it with `style`.
    pub fn fill(&mut self, area: Rect, style: Style) {
        let Some(clipped) = self.clip_rect(area) else {
            return;
        };
        for y in clipped.y..clipped.y.saturating_add(clipped.height) {
            for x in clipped.x..clipped.x.saturating_add(clipped.width) {
                if let Some(cell) = self.buffer.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_symbol(" ");
                    cell.set_style(style);
                }
            }
        }
    }

    /// Write `text` at (x, y), truncated at the right edge of `bounds` and of
    /// the frame.
    pub fn set_string(&mut self, bounds: Rect, x: u16, y: u16, text: &str, style: Style) {
        if let Some(clipped) = self.clip_rect(bounds) {
            safe_set_string(self.buffer, clipped, x, y, text, style);
        }
    }
}

pub fn safe_set_string(buffer: &mut Buffer, bounds: Rect, x: u16, y: u16, text: &str, style: Style) {
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }
    let max_x = bounds.x.saturating_add(bounds.width);
    let max_y = bounds.y.saturating_add(bounds.height);
    if x < bounds.x || x >= max_x || y < bounds.y || y >= max_y {
        return;
    }
    let available = max_x.saturating_sub(x);
    let text = truncate_to_width(text, available as usize);
    buffer.set_string(x, y, text, style);
}

pub fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

/// Rect of `width` x `height` centred in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_to_width_short_and_long() {
        assert_eq!(truncate_to_width("abc", 5), "abc");
        assert_eq!(truncate_to_width("abcdef", 3), "abc");
    }

    #[test]
    fn safe_set_string_ignores_out_of_bounds() {
        let bounds = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(bounds);
        safe_set_string(&mut buf, bounds, 1, 0, "hello", Style::default());
        assert_eq!(buf.cell((1, 0)).unwrap().symbol(), "h");
        safe_set_string(&mut buf, bounds, 100, 0, "x", Style::default());
        safe_set_string(&mut buf, bounds, 0, 5, "x", Style::default());
    }

    #[test]
    fn set_string_clips_to_frame_and_bounds() {
        let area = Rect::new(0, 0, 6, 2);
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);
        ui.set_string(Rect::new(2, 0, 20, 1), 2, 0, "overflowing", Style::default());
        assert_eq!(buf.cell((5, 0)).unwrap().symbol(), "r");
        assert_eq!(buf.cell((1, 0)).unwrap().symbol(), " ");
    }

    #[test]
    fn fill_clips_to_frame() {
        let area = Rect::new(0, 0, 4, 3);
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);
        let style = Style::default().bg(ratatui::style::Color::Blue);
        ui.fill(Rect::new(2, 1, 10, 10), style);
        assert_eq!(buf.cell((3, 2)).unwrap().bg, ratatui::style::Color::Blue);
        assert_eq!(buf.cell((1, 1)).unwrap().bg, ratatui::style::Color::Reset);
    }

    #[test]
    fn centered_rect_shrinks_to_area() {
        let r = centered_rect(Rect::new(0, 0, 10, 4), 20, 2);
        assert_eq!(r, Rect::new(0, 1, 10, 2));
    }
}
