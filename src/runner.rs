use std::io;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::config::Config;
use crate::drivers::{InputDriver, OutputDriver};
use crate::event_loop::{ControlFlow, EventLoop, LoopEvent};
use crate::links::LinkOpener;
use crate::views::{ErrorBoundary, EventOutcome, RoutedView, View};

/// The view for `config.route`, wrapped in the render fault guard.
pub fn build_view(config: &Config, links: Box<dyn LinkOpener>) -> ErrorBoundary<RoutedView> {
    tracing::info!(route = %config.route, "starting view");
    ErrorBoundary::new(RoutedView::new(config, links))
}

fn is_hard_quit(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(key)
            if key.kind == KeyEventKind::Press
                && key.code == KeyCode::Char('q')
                && key.modifiers.contains(KeyModifiers::CONTROL)
    )
}

/// Pump input into `view` and redraw it on every tick until it (or Ctrl+Q)
/// asks to quit.
pub fn run_view<O, D, V>(
    output: &mut O,
    driver: &mut D,
    view: &mut V,
    poll_interval: Duration,
    mouse_capture: bool,
) -> io::Result<()>
where
    O: OutputDriver,
    D: InputDriver,
    V: View,
{
    let mut event_loop = EventLoop::new(driver, poll_interval);
    event_loop.driver().set_mouse_capture(mouse_capture)?;

    event_loop.run(|_driver, event| match event {
        LoopEvent::Tick(now) => {
            view.tick(now);
            let mut rendered = Ok(());
            output.draw(|frame| rendered = view.render(frame))?;
            rendered?;
            Ok(ControlFlow::Continue)
        }
        LoopEvent::Input(event, now) => {
            if is_hard_quit(&event) {
                return Ok(ControlFlow::Quit);
            }
            if matches!(event, Event::Resize(..)) {
                return Ok(ControlFlow::Continue);
            }
            match view.handle_event(&event, now)? {
                EventOutcome::Quit => Ok(ControlFlow::Quit),
                EventOutcome::Handled | EventOutcome::Ignored => Ok(ControlFlow::Continue),
            }
        }
    })
}
