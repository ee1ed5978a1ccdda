use crossterm::event::{Event, KeyCode};
use pulldown_cmark::{Event as MdEvent, Options, Parser, Tag, TagEnd};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

use crate::components::scroll_view::ScrollView;
use crate::components::{Component, ComponentContext};
use crate::theme;
use crate::ui::UiFrame;

/// Scrollable, word-wrapped view of a markdown document.
#[derive(Debug, Default)]
pub struct MarkdownViewerComponent {
    lines: Vec<Line<'static>>,
    wrapped: Vec<Line<'static>>,
    wrapped_width: usize,
    scroll: ScrollView,
}

impl MarkdownViewerComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_markdown(raw: &str) -> Self {
        let mut viewer = Self::new();
        viewer.set_markdown(raw);
        viewer
    }

    pub fn set_markdown(&mut self, raw: &str) {
        self.lines = markdown_to_lines(raw);
        self.wrapped.clear();
        self.wrapped_width = 0;
        self.scroll.set_offset(0);
    }

    pub fn scroll(&self) -> &ScrollView {
        &self.scroll
    }

    /// Unwrapped lines as plain text.
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines.iter().map(line_text).collect()
    }

    fn rewrap(&mut self, width: usize) {
        if width == self.wrapped_width && !self.wrapped.is_empty() {
            return;
        }
        self.wrapped = self
            .lines
            .iter()
            .flat_map(|line| wrap_line(line, width))
            .collect();
        self.wrapped_width = width;
    }
}

impl Component for MarkdownViewerComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ComponentContext) {
        if area.width < 2 || area.height == 0 {
            return;
        }
        let text_area = Rect {
            width: area.width - 1,
            ..area
        };
        self.rewrap(text_area.width as usize);
        self.scroll
            .update(self.wrapped.len(), text_area.height as usize);
        let visible: Vec<Line<'static>> = self
            .wrapped
            .iter()
            .skip(self.scroll.offset())
            .take(text_area.height as usize)
            .cloned()
            .collect();
        frame.render_widget(
            Paragraph::new(Text::from(visible)).style(theme::window_body()),
            text_area,
        );
        self.scroll.render_scrollbar(frame, area);
    }

    /// Page keys and the wheel scroll; arrows stay with the desktop.
    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        match event {
            Event::Key(key) if matches!(key.code, KeyCode::Up | KeyCode::Down) => false,
            _ => self.scroll.handle_event(event),
        }
    }
}

pub(crate) fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[derive(Debug, Clone, Copy)]
enum Block {
    Heading,
    Paragraph,
    Item,
    List,
    Quote,
    Code,
    Other,
}

fn markdown_to_lines(raw: &str) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut stack: Vec<Block> = Vec::new();
    let mut list_numbers: Vec<Option<u64>> = Vec::new();
    let mut style = Style::default();
    let mut style_stack: Vec<Style> = Vec::new();

    let flush = |current: &mut Vec<Span<'static>>, lines: &mut Vec<Line<'static>>| {
        if !current.is_empty() {
            lines.push(Line::from(std::mem::take(current)));
        }
    };
    let in_item = |stack: &[Block]| stack.iter().any(|b| matches!(b, Block::Item));
    let quote_prefix = |stack: &[Block], current: &mut Vec<Span<'static>>| {
        if current.is_empty() && stack.iter().any(|b| matches!(b, Block::Quote)) {
            current.push(Span::styled("│ ", Style::default().fg(Color::DarkGray)));
        }
    };

    for event in Parser::new_ext(raw, Options::all()) {
        match event {
            MdEvent::Start(tag) => match tag {
                Tag::Heading { .. } => {
                    stack.push(Block::Heading);
                    style_stack.push(style);
                    style = style.fg(theme::accent()).add_modifier(Modifier::BOLD);
                }
                Tag::Paragraph => stack.push(Block::Paragraph),
                Tag::List(start) => {
                    flush(&mut current, &mut lines);
                    stack.push(Block::List);
                    list_numbers.push(start);
                }
                Tag::Item => {
                    stack.push(Block::Item);
                    let indent = "  ".repeat(list_numbers.len().saturating_sub(1));
                    let bullet = match list_numbers.last_mut() {
                        Some(Some(n)) => {
                            let label = format!("{indent}{n}. ");
                            *n += 1;
                            label
                        }
                        _ => format!("{indent}• "),
                    };
                    current.push(Span::raw(bullet));
                }
                Tag::BlockQuote(_) => stack.push(Block::Quote),
                Tag::CodeBlock(_) => {
                    stack.push(Block::Code);
                    style_stack.push(style);
                    style = Style::default().fg(Color::Yellow);
                }
                Tag::Strong => {
                    style_stack.push(style);
                    style = style.add_modifier(Modifier::BOLD);
                }
                Tag::Emphasis => {
                    style_stack.push(style);
                    style = style.add_modifier(Modifier::ITALIC);
                }
                Tag::Strikethrough => {
                    style_stack.push(style);
                    style = style.add_modifier(Modifier::CROSSED_OUT | Modifier::DIM);
                }
                Tag::Link { .. } => {
                    style_stack.push(style);
                    style = style.patch(theme::link());
                }
                _ => stack.push(Block::Other),
            },
            MdEvent::End(end) => match end {
                TagEnd::Strong | TagEnd::Emphasis | TagEnd::Strikethrough | TagEnd::Link => {
                    style = style_stack.pop().unwrap_or_default();
                }
                _ => {
                    let Some(block) = stack.pop() else { continue };
                    match block {
                        Block::Heading => {
                            style = style_stack.pop().unwrap_or_default();
                            flush(&mut current, &mut lines);
                            lines.push(Line::default());
                        }
                        Block::Paragraph => {
                            flush(&mut current, &mut lines);
                            if !in_item(&stack) {
                                lines.push(Line::default());
                            }
                        }
                        Block::Item => flush(&mut current, &mut lines),
                        Block::List => {
                            list_numbers.pop();
                            if !in_item(&stack) {
                                lines.push(Line::default());
                            }
                        }
                        Block::Code => {
                            style = style_stack.pop().unwrap_or_default();
                            flush(&mut current, &mut lines);
                            lines.push(Line::default());
                        }
                        Block::Quote | Block::Other => {}
                    }
                }
            },
            MdEvent::Text(text) => {
                if matches!(stack.last(), Some(Block::Code)) {
                    for (idx, part) in text.split('\n').enumerate() {
                        if idx > 0 {
                            lines.push(Line::from(std::mem::take(&mut current)));
                        }
                        if !part.is_empty() {
                            current.push(Span::styled(format!("  {part}"), style));
                        }
                    }
                } else {
                    quote_prefix(&stack, &mut current);
                    current.push(Span::styled(text.to_string(), style));
                }
            }
            MdEvent::Code(text) => {
                current.push(Span::styled(text.to_string(), Style::default().fg(Color::Yellow)));
            }
            MdEvent::TaskListMarker(done) => {
                current.push(Span::raw(if done { "[x] " } else { "[ ] " }));
            }
            MdEvent::SoftBreak => current.push(Span::raw(" ")),
            MdEvent::HardBreak => {
                lines.push(Line::from(std::mem::take(&mut current)));
            }
            MdEvent::Rule => {
                lines.push(Line::styled("─".repeat(24), Style::default().fg(Color::DarkGray)));
            }
            _ => {}
        }
    }
    flush(&mut current, &mut lines);
    while lines.last().is_some_and(|l| l.spans.is_empty()) {
        lines.pop();
    }
    lines
}

/// Greedy word wrap that keeps span styles. Words longer than `width` are
/// split hard.
pub(crate) fn wrap_line(line: &Line<'static>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return Vec::new();
    }
    if line.spans.is_empty() {
        return vec![Line::default()];
    }
    let mut out = Vec::new();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;
    for span in &line.spans {
        for word in span.content.split_inclusive(' ') {
            let mut word: String = word.to_string();
            loop {
                let len = word.chars().count();
                if used + len <= width {
                    used += len;
                    row.push(Span::styled(word, span.style));
                    break;
                }
                let trimmed = word.trim_end().chars().count();
                if used + trimmed <= width && trimmed > 0 {
                    row.push(Span::styled(word.trim_end().to_string(), span.style));
                    out.push(finish_row(&mut row));
                    used = 0;
                    break;
                }
                if used > 0 {
                    out.push(finish_row(&mut row));
                    used = 0;
                    continue;
                }
                let head: String = word.chars().take(width).collect();
                let rest: String = word.chars().skip(width).collect();
                out.push(Line::from(vec![Span::styled(head, span.style)]));
                if rest.is_empty() {
                    break;
                }
                word = rest;
            }
        }
    }
    if !row.is_empty() {
        out.push(finish_row(&mut row));
    }
    out
}

fn finish_row(row: &mut Vec<Span<'static>>) -> Line<'static> {
    if let Some(last) = row.last_mut() {
        let trimmed = last.content.trim_end().to_string();
        last.content = trimmed.into();
    }
    Line::from(std::mem::take(row))
}
