//! The `/dock-demo` route: the dock alone, centred. Clicking an app only
//! flips its running dot.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};
use ratatui::layout::Rect;

use super::{EventOutcome, View};
use crate::components::dock::{self, DockLayout};
use crate::constants::DOCK_HEIGHT;
use crate::desktop::{DockAppId, DockState};
use crate::error::FolioError;
use crate::geometry::rect_contains;
use crate::keybindings::{Action, KeyBindings};
use crate::theme;
use crate::ui::UiFrame;

#[derive(Debug)]
pub struct DockDemoView {
    dock: DockState,
    selected: usize,
    layout: Option<DockLayout>,
    keys: KeyBindings,
}

impl Default for DockDemoView {
    fn default() -> Self {
        Self::new()
    }
}

impl DockDemoView {
    pub fn new() -> Self {
        Self {
            dock: DockState::default(),
            selected: 0,
            layout: None,
            keys: KeyBindings::default(),
        }
    }

    pub fn dock(&self) -> &DockState {
        &self.dock
    }

    pub fn selected(&self) -> Option<DockAppId> {
        self.dock.apps().get(self.selected).copied()
    }

    fn click(&mut self, app: DockAppId) {
        let running = self.dock.toggle_indicator(app);
        tracing::info!(app = app.as_str(), running, "dock demo click");
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.dock.apps().len() as isize;
        if len == 0 {
            return;
        }
        self.selected = (self.selected as isize + delta).rem_euclid(len) as usize;
    }
}

impl View for DockDemoView {
    fn render(&mut self, frame: &mut UiFrame<'_>) -> Result<(), FolioError> {
        let area = frame.area();
        frame.fill(area, theme::wallpaper());
        let y = area.y + area.height.saturating_sub(DOCK_HEIGHT) / 2;
        let strip = Rect::new(area.x, y, area.width, DOCK_HEIGHT.min(area.height));
        let layout = dock::layout(&self.dock, strip);
        dock::render(frame, &self.dock, &layout);

        if let Some((app, rect)) = layout.apps.get(self.selected) {
            let name = app.app().name;
            let label_y = strip.y + strip.height;
            let x = (rect.x + rect.width / 2).saturating_sub(name.chars().count() as u16 / 2);
            frame.set_string(area, x, label_y, name, theme::icon_selected());
        }
        let hint = format!(
            "click or Enter toggles an app  ·  {} quit",
            self.keys.combos_for(Action::Quit).join("/")
        );
        let bottom = area.y + area.height.saturating_sub(1);
        frame.set_string(area, area.x + 1, bottom, &hint, theme::wallpaper());
        self.layout = Some(layout);
        Ok(())
    }

    fn handle_event(&mut self, event: &Event, _now: Instant) -> Result<EventOutcome, FolioError> {
        let outcome = match event {
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let hit = self.layout.as_ref().and_then(|layout| {
                    layout
                        .apps
                        .iter()
                        .position(|(_, rect)| rect_contains(*rect, mouse.column, mouse.row))
                        .map(|idx| (idx, layout.apps[idx].0))
                });
                match hit {
                    Some((idx, app)) => {
                        self.selected = idx;
                        self.click(app);
                        EventOutcome::Handled
                    }
                    None => EventOutcome::Ignored,
                }
            }
            Event::Key(key) => match self.keys.action_for_key(key) {
                Some(Action::Quit) => EventOutcome::Quit,
                Some(Action::SelectNextIcon) => {
                    self.move_selection(1);
                    EventOutcome::Handled
                }
                Some(Action::SelectPrevIcon) => {
                    self.move_selection(-1);
                    EventOutcome::Handled
                }
                Some(Action::OpenSelected) => {
                    if let Some(app) = self.selected() {
                        self.click(app);
                    }
                    EventOutcome::Handled
                }
                _ if key.code == KeyCode::Char(' ') => {
                    if let Some(app) = self.selected() {
                        self.click(app);
                    }
                    EventOutcome::Handled
                }
                _ => EventOutcome::Ignored,
            },
            _ => EventOutcome::Ignored,
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};
    use ratatui::buffer::Buffer;

    fn render(view: &mut DockDemoView) {
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        view.render(&mut UiFrame::from_parts(area, &mut buf)).unwrap();
    }

    #[test]
    fn clicking_an_app_toggles_its_dot() {
        let mut view = DockDemoView::new();
        render(&mut view);
        let rect = view.layout.as_ref().map(|l| l.apps[2].1).unwrap();
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x + 1,
            row: rect.y + 1,
            modifiers: KeyModifiers::NONE,
        });
        assert!(!view.dock().is_running(DockAppId::Terminal));
        let outcome = view.handle_event(&click, Instant::now()).unwrap();
        assert_eq!(outcome, EventOutcome::Handled);
        assert!(view.dock().is_running(DockAppId::Terminal));
        assert_eq!(view.selected(), Some(DockAppId::Terminal));
    }

    #[test]
    fn keyboard_toggles_selected_app() {
        let mut view = DockDemoView::new();
        let key = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
        view.handle_event(&key(KeyCode::Left), Instant::now()).unwrap();
        assert_eq!(view.selected(), Some(DockAppId::Spotify));
        view.handle_event(&key(KeyCode::Enter), Instant::now()).unwrap();
        assert!(view.dock().is_running(DockAppId::Spotify));
        view.handle_event(&key(KeyCode::Right), Instant::now()).unwrap();
        view.handle_event(&key(KeyCode::Char(' ')), Instant::now()).unwrap();
        assert!(!view.dock().is_running(DockAppId::Finder));
        assert_eq!(
            view.handle_event(&key(KeyCode::Char('q')), Instant::now()).unwrap(),
            EventOutcome::Quit
        );
    }
}
