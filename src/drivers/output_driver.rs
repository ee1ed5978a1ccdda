use std::io;

use crate::ui::UiFrame;

/// Owns the terminal surface: entering/leaving the alternate screen and
/// drawing whole frames.
pub trait OutputDriver {
    fn enter(&mut self) -> io::Result<()>;
    fn exit(&mut self) -> io::Result<()>;

    fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut UiFrame<'_>);
}

/// Draws into an in-memory `TestBackend`; used by headless runs and tests.
pub struct BufferOutputDriver {
    terminal: ratatui::Terminal<ratatui::backend::TestBackend>,
}

impl BufferOutputDriver {
    pub fn new(width: u16, height: u16) -> io::Result<Self> {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let terminal = ratatui::Terminal::new(backend).map_err(|e| io::Error::other(e.to_string()))?;
        Ok(Self { terminal })
    }

    pub fn buffer(&self) -> &ratatui::buffer::Buffer {
        self.terminal.backend().buffer()
    }

    /// Whole screen as text, one string per row.
    pub fn lines(&self) -> Vec<String> {
        let buffer = self.buffer();
        let area = buffer.area;
        (area.y..area.y + area.height)
            .map(|y| {
                (area.x..area.x + area.width)
                    .map(|x| buffer.cell((x, y)).map_or(" ", |c| c.symbol()))
                    .collect()
            })
            .collect()
    }

    pub fn resize(&mut self, width: u16, height: u16) -> io::Result<()> {
        self.terminal.backend_mut().resize(width, height);
        self.terminal
            .resize(ratatui::layout::Rect::new(0, 0, width, height))
            .map_err(|e| io::Error::other(e.to_string()))
    }
}

impl OutputDriver for BufferOutputDriver {
    fn enter(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn exit(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut UiFrame<'_>),
    {
        self.terminal
            .draw(move |frame| {
                let mut wrapper = UiFrame::new(frame);
                f(&mut wrapper);
            })
            .map(|_| ())
            .map_err(|err| io::Error::other(err.to_string()))
    }
}
