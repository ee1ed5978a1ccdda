//! Top-level screens selected by the route.

use std::time::Instant;

use crossterm::event::Event;

use crate::config::{Config, Route};
use crate::error::FolioError;
use crate::links::LinkOpener;
use crate::ui::UiFrame;

pub mod desktop;
pub mod dock_demo;
pub mod error_boundary;
pub mod not_found;

pub use desktop::DesktopView;
pub use dock_demo::DockDemoView;
pub use error_boundary::ErrorBoundary;
pub use not_found::NotFoundView;

/// Result of offering an input event to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Ignored,
    Handled,
    Quit,
}

pub trait View {
    fn render(&mut self, frame: &mut UiFrame<'_>) -> Result<(), FolioError>;

    fn handle_event(&mut self, event: &Event, now: Instant) -> Result<EventOutcome, FolioError>;

    /// Idle tick; advances clocks.
    fn tick(&mut self, _now: Instant) {}
}

/// The view for one route.
#[derive(Debug)]
pub enum RoutedView {
    Desktop(Box<DesktopView>),
    DockDemo(DockDemoView),
    NotFound(NotFoundView),
}

impl RoutedView {
    pub fn new(config: &Config, links: Box<dyn LinkOpener>) -> Self {
        match &config.route {
            Route::Desktop => {
                let mut view = DesktopView::new(links);
                view.set_double_click_interval(config.double_click);
                RoutedView::Desktop(Box::new(view))
            }
            Route::DockDemo => RoutedView::DockDemo(DockDemoView::new()),
            Route::NotFound(path) => RoutedView::NotFound(NotFoundView::new(path)),
        }
    }

    fn as_view(&mut self) -> &mut dyn View {
        match self {
            RoutedView::Desktop(view) => view.as_mut(),
            RoutedView::DockDemo(view) => view,
            RoutedView::NotFound(view) => view,
        }
    }
}

impl View for RoutedView {
    fn render(&mut self, frame: &mut UiFrame<'_>) -> Result<(), FolioError> {
        self.as_view().render(frame)
    }

    fn handle_event(&mut self, event: &Event, now: Instant) -> Result<EventOutcome, FolioError> {
        self.as_view().handle_event(event, now)
    }

    fn tick(&mut self, now: Instant) {
        self.as_view().tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::RecordingLinkOpener;

    fn config(path: &str) -> Config {
        Config {
            route: Route::parse(path),
            ..Config::default()
        }
    }

    #[test]
    fn routes_pick_their_view() {
        let links = || Box::new(RecordingLinkOpener::default());
        assert!(matches!(RoutedView::new(&config("/"), links()), RoutedView::Desktop(_)));
        assert!(matches!(
            RoutedView::new(&config("/dock-demo"), links()),
            RoutedView::DockDemo(_)
        ));
        assert!(matches!(
            RoutedView::new(&config("/nope"), links()),
            RoutedView::NotFound(_)
        ));
    }
}
