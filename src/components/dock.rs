use ratatui::layout::Rect;

use crate::desktop::{DockAppId, DockState};
use crate::theme;
use crate::ui::UiFrame;

const SLOT_WIDTH: u16 = 5;
const SLOT_GAP: u16 = 1;

/// Where the dock and each of its apps land inside a strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockLayout {
    pub bar: Rect,
    pub apps: Vec<(DockAppId, Rect)>,
}

/// Centre the dock in `area`. Apps that don't fit are dropped from the right.
pub fn layout(state: &DockState, area: Rect) -> DockLayout {
    let fits = ((area.width.saturating_sub(2) + SLOT_GAP) / (SLOT_WIDTH + SLOT_GAP)) as usize;
    let apps: Vec<DockAppId> = state.apps().iter().copied().take(fits).collect();
    let count = apps.len() as u16;
    if count == 0 || area.height == 0 {
        return DockLayout {
            bar: Rect::new(area.x, area.y, 0, 0),
            apps: Vec::new(),
        };
    }
    let inner = count * SLOT_WIDTH + (count - 1) * SLOT_GAP;
    let bar_width = inner + 2;
    let bar = Rect::new(
        area.x + (area.width - bar_width) / 2,
        area.y,
        bar_width,
        area.height,
    );
    let apps = apps
        .into_iter()
        .enumerate()
        .map(|(i, id)| {
            let x = bar.x + 1 + i as u16 * (SLOT_WIDTH + SLOT_GAP);
            (id, Rect::new(x, bar.y, SLOT_WIDTH, bar.height))
        })
        .collect();
    DockLayout { bar, apps }
}

/// Glyph on the middle row, running dot underneath.
pub fn render(frame: &mut UiFrame<'_>, state: &DockState, layout: &DockLayout) {
    if layout.bar.width == 0 {
        return;
    }
    frame.fill(layout.bar, theme::dock());
    for (id, rect) in &layout.apps {
        let glyph = id.app().glyph;
        let glyph_width = glyph.chars().count() as u16;
        let gx = rect.x + rect.width.saturating_sub(glyph_width) / 2;
        let gy = rect.y + rect.height.saturating_sub(1).min(1);
        frame.set_string(*rect, gx, gy, glyph, theme::dock());
        if state.is_running(*id) && rect.height > 2 {
            frame.set_string(
                *rect,
                rect.x + rect.width / 2,
                rect.y + 2,
                "•",
                theme::dock_running_dot(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    #[test]
    fn layout_centres_all_apps() {
        let state = DockState::default();
        let layout = layout(&state, Rect::new(0, 33, 120, 3));
        assert_eq!(layout.apps.len(), 9);
        assert_eq!(layout.bar.width, 9 * 5 + 8 + 2);
        assert_eq!(layout.bar.x, (120 - layout.bar.width) / 2);
        let (first, rect) = layout.apps[0];
        assert_eq!(first, DockAppId::Finder);
        assert_eq!(rect.x, layout.bar.x + 1);
    }

    #[test]
    fn narrow_area_drops_trailing_apps() {
        let state = DockState::default();
        let layout = layout(&state, Rect::new(0, 0, 20, 3));
        assert_eq!(layout.apps.len(), 3);
        assert!(layout.bar.width <= 20);
    }

    #[test]
    fn running_apps_get_a_dot() {
        let state = DockState::default();
        let area = Rect::new(0, 0, 60, 3);
        let layout = layout(&state, area);
        let mut buf = Buffer::empty(area);
        render(&mut UiFrame::from_parts(area, &mut buf), &state, &layout);
        let finder = layout.apps[0].1;
        let calculator = layout.apps[1].1;
        assert_eq!(buf[(finder.x + 2, 2)].symbol(), "•");
        assert_eq!(buf[(calculator.x + 2, 2)].symbol(), " ");
        assert_eq!(buf[(finder.x + 1, 1)].symbol(), "[");
    }
}
