use ratatui::layout::Rect;

use crate::desktop::NavButton;
use crate::theme;
use crate::ui::{UiFrame, truncate_to_width};

const BRAND: &str = " rakshith.dev";
const BUTTONS: [(NavButton, &str); 2] = [(NavButton::Contact, "CONTACT"), (NavButton::Resume, "RESUME")];

/// Top row of the desktop: brand on the left, buttons in the middle and a
/// clock on the right.
#[derive(Debug, Clone, Default)]
pub struct NavBar {
    clock: String,
}

impl NavBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_clock<T: Into<String>>(&mut self, value: T) {
        self.clock = value.into();
    }

    /// Refresh the clock from local time.
    pub fn update_clock(&mut self) {
        self.clock = chrono::Local::now().format("%a %b %e  %H:%M").to_string();
    }

    /// Button rectangles for a bar drawn in `area`. Buttons that don't fit
    /// are left out.
    pub fn button_rects(&self, area: Rect) -> Vec<(NavButton, Rect)> {
        let total: u16 = BUTTONS.iter().map(|(_, l)| l.len() as u16 + 4).sum();
        let mut x = area.x + area.width.saturating_sub(total) / 2;
        let brand_end = area.x + BRAND.len() as u16 + 1;
        x = x.max(brand_end);
        let mut out = Vec::new();
        for (button, label) in BUTTONS {
            let width = label.len() as u16 + 2;
            if x + width > area.x + area.width {
                break;
            }
            out.push((button, Rect::new(x, area.y, width, 1)));
            x += width + 2;
        }
        out
    }

    pub fn render(&self, frame: &mut UiFrame<'_>, area: Rect) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let row = Rect { height: 1, ..area };
        let style = theme::nav_bar();
        frame.fill(row, style);
        frame.set_string(row, row.x, row.y, BRAND, theme::nav_button());

        for (button, rect) in self.button_rects(row) {
            let label = BUTTONS
                .iter()
                .find(|(b, _)| *b == button)
                .map(|(_, l)| *l)
                .unwrap_or_default();
            frame.set_string(row, rect.x, rect.y, &format!(" {label} "), theme::nav_button());
        }

        let width = row.width as usize;
        if !self.clock.is_empty() {
            let right = truncate_to_width(&format!("{} ", self.clock), width);
            let right_width = right.chars().count();
            if right_width < width {
                let start_x = row.x.saturating_add((width - right_width) as u16);
                frame.set_string(row, start_x, row.y, &right, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn renders_brand_buttons_and_clock() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        let mut bar = NavBar::new();
        bar.set_clock("Fri 12:00");
        bar.render(&mut UiFrame::from_parts(area, &mut buf), area);
        let text = row_text(&buf, 80);
        assert!(text.starts_with(" rakshith.dev"));
        assert!(text.contains("CONTACT"));
        assert!(text.contains("RESUME"));
        assert!(text.trim_end().ends_with("Fri 12:00"));
    }

    #[test]
    fn button_rects_do_not_overlap_the_brand() {
        let bar = NavBar::new();
        let rects = bar.button_rects(Rect::new(0, 0, 30, 1));
        assert!(rects.iter().all(|(_, r)| r.x > BRAND.len() as u16));
        assert!(rects.iter().all(|(_, r)| r.x + r.width <= 30));
    }

    #[test]
    fn narrow_bar_drops_buttons() {
        let bar = NavBar::new();
        assert!(bar.button_rects(Rect::new(0, 0, 16, 1)).is_empty());
    }
}
