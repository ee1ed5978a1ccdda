use std::time::Duration;

use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::ui::UiFrame;

pub mod dock;
pub mod markdown_viewer;
pub mod media_player;
pub mod nav_bar;
pub mod scroll_view;
pub mod terminal;

pub use markdown_viewer::MarkdownViewerComponent;
pub use media_player::{AudioSink, MediaPlayer, PlaybackError, SimulatedSink, Track};
pub use nav_bar::NavBar;
pub use scroll_view::ScrollView;
pub use terminal::{CommandOutcome, TerminalComponent};

/// What a body needs to know about its window while drawing or taking input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComponentContext {
    focused: bool,
}

impl ComponentContext {
    pub const fn new(focused: bool) -> Self {
        Self { focused }
    }

    /// The body's window is the topmost one.
    pub const fn focused(&self) -> bool {
        self.focused
    }
}

/// A window body: draws into the area it is given and consumes input.
pub trait Component {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext);

    fn handle_event(&mut self, _event: &Event, _ctx: &ComponentContext) -> bool {
        false
    }

    /// Idle tick with the time since the previous one.
    fn tick(&mut self, _elapsed: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    struct DummyComp;
    impl Component for DummyComp {
        fn render(&mut self, _frame: &mut UiFrame<'_>, _area: Rect, _ctx: &ComponentContext) {}
    }

    #[test]
    fn default_handle_event_returns_false() {
        let mut d = DummyComp;
        assert!(!d.handle_event(
            &Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)),
            &ComponentContext::default()
        ));
        d.tick(Duration::from_millis(16));
        assert!(!ComponentContext::default().focused());
        assert!(ComponentContext::new(true).focused());
    }
}
