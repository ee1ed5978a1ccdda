use ratatui::layout::Rect;
use ratatui::symbols::border;

use crate::theme;
use crate::ui::{UiFrame, truncate_to_width};

/// Regions of a decorated window, computed from its outer rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowChrome {
    pub outer: Rect,
    pub header: Option<Rect>,
    pub close: Option<Rect>,
    pub body: Rect,
}

pub trait WindowDecorator: std::fmt::Debug {
    fn layout(&self, outer: Rect, show_header: bool) -> WindowChrome;

    fn render(&self, frame: &mut UiFrame<'_>, chrome: &WindowChrome, title: &str, focused: bool);
}

/// Title row with three "traffic light" dots on the left, thin border around
/// the body.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacDecorator;

impl MacDecorator {
    const LIGHTS: &'static str = "●";
}

impl WindowDecorator for MacDecorator {
    fn layout(&self, outer: Rect, show_header: bool) -> WindowChrome {
        let body = Rect {
            x: outer.x.saturating_add(1),
            y: outer.y.saturating_add(1),
            width: outer.width.saturating_sub(2),
            height: outer.height.saturating_sub(2),
        };
        let (header, close) = if show_header && outer.height > 0 {
            let header = Rect {
                height: 1,
                ..outer
            };
            let close = (outer.width >= 3).then(|| Rect {
                x: outer.x + 1,
                y: outer.y,
                width: 1,
                height: 1,
            });
            (Some(header), close)
        } else {
            (None, None)
        };
        WindowChrome {
            outer,
            header,
            close,
            body,
        }
    }

    fn render(&self, frame: &mut UiFrame<'_>, chrome: &WindowChrome, title: &str, focused: bool) {
        let outer = chrome.outer;
        if outer.width < 2 || outer.height < 2 {
            return;
        }
        frame.fill(outer, theme::window_body());

        let border_style = theme::window_border(focused);
        let set = border::ROUNDED;
        let right = outer.x + outer.width - 1;
        let bottom = outer.y + outer.height - 1;
        for x in outer.x..=right {
            let (top_sym, bottom_sym) = if x == outer.x {
                (set.top_left, set.bottom_left)
            } else if x == right {
                (set.top_right, set.bottom_right)
            } else {
                (set.horizontal_top, set.horizontal_bottom)
            };
            frame.set_string(outer, x, outer.y, top_sym, border_style);
            frame.set_string(outer, x, bottom, bottom_sym, border_style);
        }
        for y in outer.y + 1..bottom {
            frame.set_string(outer, outer.x, y, set.vertical_left, border_style);
            frame.set_string(outer, right, y, set.vertical_right, border_style);
        }

        let Some(header) = chrome.header else {
            return;
        };
        let header_style = theme::window_header(focused);
        frame.fill(header, header_style);
        let lights = [
            theme::traffic_light_close(),
            theme::traffic_light_minimize(),
            theme::traffic_light_zoom(),
        ];
        for (idx, color) in lights.into_iter().enumerate() {
            let x = header.x + 1 + idx as u16 * 2;
            frame.set_string(header, x, header.y, Self::LIGHTS, header_style.fg(color));
        }
        let reserved = 8u16;
        let room = header.width.saturating_sub(reserved * 2) as usize;
        let title = truncate_to_width(title, room);
        let title_len = title.chars().count() as u16;
        if title_len > 0 {
            let x = header.x + (header.width.saturating_sub(title_len)) / 2;
            frame.set_string(header, x.max(header.x + reserved), header.y, &title, header_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    #[test]
    fn header_layout_places_close_dot_on_the_title_row() {
        let chrome = MacDecorator.layout(Rect::new(10, 5, 30, 8), true);
        assert_eq!(chrome.header, Some(Rect::new(10, 5, 30, 1)));
        assert_eq!(chrome.close, Some(Rect::new(11, 5, 1, 1)));
        assert_eq!(chrome.body, Rect::new(11, 6, 28, 6));
    }

    #[test]
    fn headerless_window_has_no_header_regions() {
        let chrome = MacDecorator.layout(Rect::new(0, 0, 20, 6), false);
        assert!(chrome.header.is_none());
        assert!(chrome.close.is_none());
    }

    #[test]
    fn renders_title_and_lights() {
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);
        let chrome = MacDecorator.layout(area, true);
        MacDecorator.render(&mut ui, &chrome, "Sticky Note", true);
        let header: String = (0..40).map(|x| buf.cell((x, 0)).unwrap().symbol().to_string()).collect();
        assert!(header.contains("Sticky Note"));
        assert_eq!(buf.cell((1, 0)).unwrap().symbol(), "●");
        assert_eq!(buf.cell((0, 5)).unwrap().symbol(), "╰");
    }
}
