//! The "Terminal" window: a tiny command interpreter with history.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

use crate::components::markdown_viewer::wrap_line;
use crate::components::scroll_view::ScrollView;
use crate::components::{Component, ComponentContext};
use crate::log_buffer::{LogHandle, global_log};
use crate::theme;
use crate::ui::UiFrame;

pub const DEFAULT_USER: &str = "rakshith";

const WELCOME: &str = "Welcome to Terminal. Type 'help' for available commands.";

const COMMANDS: [&str; 7] = [
    "help          - List available commands",
    "about         - Display info about the portfolio owner",
    "whoami        - Display current user",
    "date          - Display current date and time",
    "clear         - Clear the terminal screen",
    "exit          - Close the terminal",
    "log           - Show recent log lines",
];

const ABOUT_TEXT: &str = indoc! {"
    Hi, I'm Rakshith R, a creative mind who loves building websites and landing pages
    with clean design, cool UI, and smooth animations. I'm also exploring AI SaaS,
    cybersecurity, and a touch of design, always learning and experimenting to push
    ideas into reality.

    Education: Pursuing BCA at Gopalan College in Bangalore.
    Long-term goal: Build something big or work remotely in NYC while exploring the world."};

const LOG_TAIL: usize = 12;

pub const DEFAULT_SCROLLBACK: usize = 1000;
const MAX_HISTORY: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Command,
    Output,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLine {
    pub kind: LineKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Exit,
}

#[derive(Debug)]
pub struct TerminalComponent {
    user: String,
    host: String,
    lines: Vec<TerminalLine>,
    max_lines: usize,
    input: String,
    history: Vec<String>,
    history_index: Option<usize>,
    exit_requested: bool,
    scroll: ScrollView,
    follow_tail: bool,
    log: Option<LogHandle>,
}

impl Default for TerminalComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalComponent {
    pub fn new() -> Self {
        let host = hostname::get()
            .ok()
            .and_then(|name| name.into_string().ok())
            .unwrap_or_else(|| "localhost".to_string());
        Self::with_identity(DEFAULT_USER, &host)
    }

    pub fn with_identity(user: &str, host: &str) -> Self {
        Self {
            user: user.to_string(),
            host: host.to_string(),
            lines: vec![TerminalLine {
                kind: LineKind::Output,
                text: WELCOME.to_string(),
            }],
            max_lines: DEFAULT_SCROLLBACK,
            input: String::new(),
            history: Vec::new(),
            history_index: None,
            exit_requested: false,
            scroll: ScrollView::new(),
            follow_tail: true,
            log: global_log(),
        }
    }

    /// Keep at most `max_lines` lines of scrollback (at least one).
    pub fn with_scrollback(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines.max(1);
        self.trim_scrollback();
        self
    }

    pub fn with_log(mut self, log: LogHandle) -> Self {
        self.log = Some(log);
        self
    }

    pub fn prompt(&self) -> String {
        format!("{}@{} ~ %", self.user, self.host)
    }

    pub fn lines(&self) -> &[TerminalLine] {
        &self.lines
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// True once `exit` ran; cleared by the read.
    pub fn take_exit_request(&mut self) -> bool {
        std::mem::take(&mut self.exit_requested)
    }

    fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(TerminalLine {
            kind,
            text: text.into(),
        });
        self.trim_scrollback();
    }

    fn trim_scrollback(&mut self) {
        let excess = self.lines.len().saturating_sub(self.max_lines);
        if excess > 0 {
            self.lines.drain(..excess);
        }
    }

    /// Run one command line. Blank input is ignored and not recorded.
    pub fn execute(&mut self, raw: &str) -> CommandOutcome {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CommandOutcome::Continue;
        }
        self.history.push(trimmed.to_string());
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
        }
        self.history_index = None;
        self.follow_tail = true;
        let echo = format!("{} {}", self.prompt(), trimmed);
        self.push(LineKind::Command, echo);

        let words = match shell_words::split(&trimmed.to_lowercase()) {
            Ok(words) => words,
            Err(err) => {
                self.push(LineKind::Error, format!("zsh: parse error: {err}"));
                return CommandOutcome::Continue;
            }
        };
        let Some(command) = words.first() else {
            return CommandOutcome::Continue;
        };
        tracing::debug!(command = %command, args = words.len() - 1, "terminal command");

        match command.as_str() {
            "help" => {
                self.push(LineKind::Output, "");
                for line in COMMANDS {
                    self.push(LineKind::Output, line);
                }
            }
            "about" => {
                for line in ABOUT_TEXT.lines() {
                    self.push(LineKind::Output, line);
                }
            }
            "whoami" => {
                let user = self.user.clone();
                self.push(LineKind::Output, user);
            }
            "date" => {
                let now = chrono::Local::now();
                self.push(
                    LineKind::Output,
                    now.format("%a %b %e %H:%M:%S %Y").to_string(),
                );
            }
            "clear" => self.lines.clear(),
            "exit" => {
                self.exit_requested = true;
                return CommandOutcome::Exit;
            }
            "log" => match &self.log {
                Some(log) => {
                    let tail = log.tail(LOG_TAIL);
                    if tail.is_empty() {
                        self.push(LineKind::Output, "(log is empty)");
                    }
                    for line in tail {
                        self.push(LineKind::Output, line);
                    }
                }
                None => self.push(LineKind::Error, "log: no log buffer installed"),
            },
            other => {
                let other = other.to_string();
                self.push(LineKind::Error, format!("zsh: command not found: {other}"));
                self.push(LineKind::Output, "Type 'help' for available commands.");
            }
        }
        CommandOutcome::Continue
    }

    fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_index {
            None => self.history.len() - 1,
            Some(idx) => idx.saturating_sub(1),
        };
        self.history_index = Some(idx);
        self.input = self.history[idx].clone();
    }

    fn history_down(&mut self) {
        let Some(idx) = self.history_index else {
            return;
        };
        let next = idx + 1;
        if next >= self.history.len() {
            self.history_index = None;
            self.input.clear();
        } else {
            self.history_index = Some(next);
            self.input = self.history[next].clone();
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                let echo = format!("{} {}^C", self.prompt(), self.input);
                self.push(LineKind::Command, echo);
                self.input.clear();
                self.history_index = None;
            }
            KeyCode::Char('l') if ctrl => self.lines.clear(),
            KeyCode::Char(_) if ctrl => return false,
            KeyCode::Char(c) => {
                self.input.push(c);
                self.follow_tail = true;
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.input);
                self.execute(&line);
            }
            KeyCode::Up => self.history_up(),
            KeyCode::Down => self.history_down(),
            KeyCode::PageUp | KeyCode::PageDown => {
                self.scroll.handle_key(key);
                self.follow_tail = self.scroll.at_bottom();
            }
            _ => return false,
        }
        true
    }

    fn styled_lines(&self, width: usize, focused: bool) -> Vec<Line<'static>> {
        let mut out: Vec<Line<'static>> = Vec::new();
        for line in &self.lines {
            let style = match line.kind {
                LineKind::Command => theme::terminal_prompt(),
                LineKind::Output => theme::terminal_body(),
                LineKind::Error => theme::terminal_error(),
            };
            out.extend(wrap_line(&Line::from(Span::styled(line.text.clone(), style)), width));
        }
        let cursor = if focused { "█" } else { "" };
        let input = Line::from(vec![
            Span::styled(format!("{} ", self.prompt()), theme::terminal_prompt()),
            Span::styled(format!("{}{cursor}", self.input), theme::terminal_body()),
        ]);
        out.extend(wrap_line(&input, width));
        out
    }
}

impl Component for TerminalComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        if area.width < 2 || area.height == 0 {
            return;
        }
        frame.fill(area, theme::terminal_body());
        let text_area = Rect {
            width: area.width - 1,
            ..area
        };
        let lines = self.styled_lines(text_area.width as usize, ctx.focused());
        self.scroll.update(lines.len(), text_area.height as usize);
        if self.follow_tail {
            self.scroll.set_offset(usize::MAX);
        }
        let visible: Vec<Line<'static>> = lines
            .into_iter()
            .skip(self.scroll.offset())
            .take(text_area.height as usize)
            .collect();
        frame.render_widget(
            Paragraph::new(Text::from(visible)).style(theme::terminal_body()),
            text_area,
        );
        self.scroll.render_scrollbar(frame, area);
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Paste(text) => {
                self.input.push_str(text.lines().next().unwrap_or_default());
                true
            }
            Event::Mouse(_) => {
                let handled = self.scroll.handle_event(event);
                if handled {
                    self.follow_tail = self.scroll.at_bottom();
                }
                handled
            }
            _ => false,
        }
    }
}
