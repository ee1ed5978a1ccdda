use std::io;
use std::time::{Duration, Instant};

use crossterm::event::Event;

use crate::drivers::InputDriver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// What the loop hands to its handler on each turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopEvent {
    /// An input event, stamped with the time it was read.
    Input(Event, Instant),
    /// The poll interval elapsed or the queue was drained; redraw and advance
    /// clocks.
    Tick(Instant),
}

/// Single-threaded message pump.
///
/// The loop is the only caller of `driver.poll()` / `driver.read()`. Each turn
/// it emits a tick, then drains every queued input event so bursts of mouse
/// drag events are applied in order before the next redraw.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, LoopEvent) -> io::Result<ControlFlow>,
    {
        loop {
            if handler(&mut self.driver, LoopEvent::Tick(Instant::now()))? == ControlFlow::Quit {
                return Ok(());
            }
            if !self.driver.poll(self.poll_interval)? {
                continue;
            }
            loop {
                let event = self.driver.read()?;
                let flow = handler(&mut self.driver, LoopEvent::Input(event, Instant::now()))?;
                if flow == ControlFlow::Quit {
                    return Ok(());
                }
                if !self.driver.poll(Duration::ZERO)? {
                    break;
                }
            }
        }
    }
}
