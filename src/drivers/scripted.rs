use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::Event;

use super::InputDriver;

/// Replays a fixed list of events. Once the script runs dry `poll` reports
/// nothing pending and `read` fails with `UnexpectedEof`.
#[derive(Debug, Default)]
pub struct ScriptedInputDriver {
    events: VecDeque<Event>,
    mouse_capture: Option<bool>,
}

impl ScriptedInputDriver {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
            mouse_capture: None,
        }
    }

    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }

    /// Last value passed to `set_mouse_capture`.
    pub fn mouse_capture(&self) -> Option<bool> {
        self.mouse_capture
    }
}

impl InputDriver for ScriptedInputDriver {
    fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> io::Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        self.mouse_capture = Some(enabled);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_in_order_then_runs_dry() {
        let mut driver = ScriptedInputDriver::new([Event::FocusGained, Event::FocusLost]);
        assert!(driver.poll(Duration::ZERO).unwrap());
        assert_eq!(driver.read().unwrap(), Event::FocusGained);
        assert_eq!(driver.read().unwrap(), Event::FocusLost);
        assert!(!driver.poll(Duration::ZERO).unwrap());
        assert!(driver.read().is_err());
    }

    #[test]
    fn blanket_impl_for_mut_ref_works() {
        fn disable<D: InputDriver>(mut driver: D) {
            driver.set_mouse_capture(false).unwrap();
        }
        let mut driver = ScriptedInputDriver::default();
        disable(&mut driver);
        assert_eq!(driver.mouse_capture(), Some(false));
    }
}
