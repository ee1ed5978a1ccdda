//! The `/` route: wallpaper, icons, windows, dock and navigation bar.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::{EventOutcome, View};
use crate::components::{
    Component, ComponentContext, MarkdownViewerComponent, MediaPlayer, NavBar, TerminalComponent,
    dock,
};
use crate::constants::{DOCK_HEIGHT, NAV_BAR_HEIGHT};
use crate::content::{BodyKind, body_for, links_for};
use crate::desktop::{Desktop, DesktopEffect, Hit, IconId, IconKind, PointerRoute, WindowId};
use crate::error::FolioError;
use crate::geometry::Viewport;
use crate::keybindings::{Action, KeyBindings};
use crate::links::{LinkOpener, open_link};
use crate::scene::{NodeId, SceneTree};
use crate::theme;
use crate::ui::{UiFrame, centered_rect, truncate_to_width};
use crate::window::{MacDecorator, WindowDecorator};

/// Reference layout the catalog positions were authored for.
const REFERENCE_WIDTH: f64 = 120.0;
const REFERENCE_HEIGHT: f64 = 36.0;

const MIN_WIDTH: u16 = 20;

const WELCOME_LINE: &str = "welcome to my";
const WELCOME_TITLE: &str = "p o r t f o l i o .";

/// Per-window component. Created when a window first renders, dropped when
/// it closes.
#[derive(Debug)]
enum WindowBody {
    Markdown(MarkdownViewerComponent),
    Terminal(TerminalComponent),
    Media(MediaPlayer),
}

impl WindowBody {
    fn for_window(id: WindowId) -> Self {
        match body_for(id) {
            BodyKind::Markdown(text) => {
                WindowBody::Markdown(MarkdownViewerComponent::from_markdown(text))
            }
            BodyKind::Terminal => WindowBody::Terminal(TerminalComponent::new()),
            BodyKind::MediaPlayer => WindowBody::Media(MediaPlayer::default()),
        }
    }

    fn component(&mut self) -> &mut dyn Component {
        match self {
            WindowBody::Markdown(c) => c,
            WindowBody::Terminal(c) => c,
            WindowBody::Media(c) => c,
        }
    }
}

#[derive(Debug)]
pub struct DesktopView {
    desktop: Desktop,
    /// Keyed by window, tagged with the mount serial it was created for.
    bodies: BTreeMap<WindowId, (u64, WindowBody)>,
    scene: SceneTree<Hit>,
    decorator: MacDecorator,
    nav_bar: NavBar,
    keys: KeyBindings,
    links: Box<dyn LinkOpener>,
    last_tick: Option<Instant>,
}

impl DesktopView {
    pub fn new(links: Box<dyn LinkOpener>) -> Self {
        let viewport = Viewport::new(
            REFERENCE_WIDTH,
            REFERENCE_HEIGHT - f64::from(DOCK_HEIGHT),
            f64::from(NAV_BAR_HEIGHT),
        );
        let mut nav_bar = NavBar::new();
        nav_bar.update_clock();
        Self {
            desktop: Desktop::new(viewport),
            bodies: BTreeMap::new(),
            scene: SceneTree::new(),
            decorator: MacDecorator,
            nav_bar,
            keys: KeyBindings::default(),
            links,
            last_tick: None,
        }
    }

    pub fn set_double_click_interval(&mut self, interval: Duration) {
        self.desktop.set_double_click_interval(interval);
    }

    pub fn desktop(&self) -> &Desktop {
        &self.desktop
    }

    pub fn desktop_mut(&mut self) -> &mut Desktop {
        &mut self.desktop
    }

    /// Hit regions registered by the last render.
    pub fn scene(&self) -> &SceneTree<Hit> {
        &self.scene
    }

    pub fn terminal_mut(&mut self) -> Option<&mut TerminalComponent> {
        self.sync_bodies();
        match self.bodies.get_mut(&WindowId::Terminal) {
            Some((_, WindowBody::Terminal(term))) => Some(term),
            _ => None,
        }
    }

    pub fn media_player_mut(&mut self) -> Option<&mut MediaPlayer> {
        self.sync_bodies();
        match self.bodies.get_mut(&WindowId::MediaPlayer) {
            Some((_, WindowBody::Media(player))) => Some(player),
            _ => None,
        }
    }

    /// Drop bodies of closed (or closed and reopened) windows, create bodies
    /// for newly opened ones.
    fn sync_bodies(&mut self) {
        let desktop = &self.desktop;
        self.bodies
            .retain(|id, (serial, _)| desktop.mount_serial(*id) == Some(*serial));
        for id in self.desktop.open_windows() {
            let Some(serial) = self.desktop.mount_serial(id) else {
                continue;
            };
            self.bodies
                .entry(id)
                .or_insert_with(|| (serial, WindowBody::for_window(id)));
        }
    }

    fn apply_effects(&mut self) {
        for effect in self.desktop.take_effects() {
            match effect {
                DesktopEffect::OpenLink(link) => open_link(self.links.as_mut(), link),
            }
        }
    }

    /// Offer `event` to the body of `id`. Handles the terminal's `exit`.
    fn forward_to_body(&mut self, id: WindowId, event: &Event) -> bool {
        self.sync_bodies();
        let focused = self.desktop.topmost() == Some(id);
        let Some((_, body)) = self.bodies.get_mut(&id) else {
            return false;
        };
        let handled = body
            .component()
            .handle_event(event, &ComponentContext::new(focused));
        if let WindowBody::Terminal(term) = body
            && term.take_exit_request()
        {
            self.desktop.close_window(id);
            self.sync_bodies();
        }
        handled
    }

    fn window_under(&self, column: u16, row: u16) -> Option<WindowId> {
        let node = self.scene.hit_test(column, row)?;
        self.scene.closest(node, |tag| match tag {
            Hit::Window(id) => Some(id),
            _ => None,
        })
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, event: &Event, now: Instant) -> EventOutcome {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let route = self.desktop.pointer_down(&self.scene, column, row, now);
                self.apply_effects();
                self.sync_bodies();
                match route {
                    PointerRoute::Handled => EventOutcome::Handled,
                    PointerRoute::Content(id) => {
                        self.forward_to_body(id, event);
                        EventOutcome::Handled
                    }
                    PointerRoute::Ignored => EventOutcome::Ignored,
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.desktop.pointer_drag(column, row) {
                    EventOutcome::Handled
                } else {
                    EventOutcome::Ignored
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.desktop.pointer_up() {
                    EventOutcome::Handled
                } else {
                    EventOutcome::Ignored
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                match self.window_under(column, row) {
                    Some(id) if self.forward_to_body(id, event) => EventOutcome::Handled,
                    _ => EventOutcome::Ignored,
                }
            }
            _ => EventOutcome::Ignored,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, event: &Event) -> EventOutcome {
        if key.code == KeyCode::Char('q')
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            return EventOutcome::Quit;
        }
        if let Some(top) = self.desktop.topmost()
            && self.forward_to_body(top, event)
        {
            return EventOutcome::Handled;
        }
        let Some(action) = self.keys.action_for_key(key) else {
            return EventOutcome::Ignored;
        };
        tracing::trace!(%action, "desktop shortcut");
        match action {
            Action::Quit => return EventOutcome::Quit,
            Action::CloseTopmost => {
                self.desktop.close_topmost();
            }
            Action::FocusNext => {
                self.desktop.cycle_focus(true);
            }
            Action::FocusPrev => {
                self.desktop.cycle_focus(false);
            }
            Action::SelectNextIcon => self.desktop.select_icon_offset(1),
            Action::SelectPrevIcon => self.desktop.select_icon_offset(-1),
            Action::OpenSelected => {
                self.desktop.open_selected_icon();
            }
        }
        self.sync_bodies();
        EventOutcome::Handled
    }

    fn render_icon(&self, frame: &mut UiFrame<'_>, id: IconId, rect: Rect) {
        let icon = id.icon();
        let glyph = match icon.kind {
            IconKind::File => "▤",
            IconKind::Folder => "▆▆",
            IconKind::App => "◉",
        };
        let selected = self.desktop.selected_icon() == Some(id);
        let center = |text: &str| {
            let len = text.chars().count() as u16;
            rect.x + rect.width.saturating_sub(len) / 2
        };
        let glyph_style = theme::wallpaper().patch(theme::icon_glyph(icon.kind));
        frame.set_string(rect, center(glyph), rect.y, glyph, glyph_style);
        let label_style = if selected {
            theme::icon_selected()
        } else {
            theme::wallpaper().patch(theme::icon_label())
        };
        for (offset, line) in icon.name.split('\n').take(2).enumerate() {
            let line = truncate_to_width(line, rect.width as usize);
            frame.set_string(rect, center(&line), rect.y + 1 + offset as u16, &line, label_style);
        }
    }

    /// Centred banner painted straight onto the wallpaper, beneath icons and
    /// windows. It registers no hit region.
    fn render_welcome(&self, frame: &mut UiFrame<'_>, area: Rect) {
        if area.height < 3 {
            return;
        }
        let banner = centered_rect(area, WELCOME_TITLE.chars().count() as u16, 3);
        let lines = [
            (banner.y, WELCOME_LINE, theme::welcome_line()),
            (banner.y + 2, WELCOME_TITLE, theme::welcome_title()),
        ];
        for (y, text, style) in lines {
            let text = truncate_to_width(text, area.width as usize);
            let x = area.x + area.width.saturating_sub(text.chars().count() as u16) / 2;
            frame.set_string(area, x, y, &text, style);
        }
    }

    fn render_window(&mut self, frame: &mut UiFrame<'_>, root: NodeId, id: WindowId, rect: Rect) {
        let spec = id.spec();
        let chrome = self.decorator.layout(rect, spec.show_header);
        let focused = self.desktop.topmost() == Some(id);

        let window = self.scene.insert(Some(root), rect, Hit::Window(id));
        if let Some(header) = chrome.header {
            self.scene.insert(Some(window), header, Hit::Header(id));
        }
        if let Some(close) = chrome.close {
            self.scene.insert(Some(window), close, Hit::CloseButton(id));
        }
        let content = self.scene.insert(Some(window), chrome.body, Hit::Content(id));

        self.decorator.render(frame, &chrome, spec.title, focused);

        let mut body_area = chrome.body;
        let links = links_for(id);
        if !links.is_empty() && body_area.height >= 2 {
            body_area.height -= 1;
            let row = body_area.y + body_area.height;
            let link_style = theme::window_body().patch(theme::link());
            let mut x = body_area.x + 1;
            for (link, label) in links {
                let text = format!("[ {label} ]");
                let width = text.chars().count() as u16;
                if x + width > chrome.body.x + chrome.body.width {
                    break;
                }
                frame.set_string(chrome.body, x, row, &text, link_style);
                self.scene
                    .insert(Some(content), Rect::new(x, row, width, 1), Hit::Link(*link));
                x += width + 2;
            }
        }

        if let Some((_, body)) = self.bodies.get_mut(&id) {
            body.component()
                .render(frame, body_area, &ComponentContext::new(focused));
        }
    }
}

impl View for DesktopView {
    fn render(&mut self, frame: &mut UiFrame<'_>) -> Result<(), FolioError> {
        let area = frame.area();
        self.scene.clear();
        if area.width < MIN_WIDTH || area.height < NAV_BAR_HEIGHT + DOCK_HEIGHT + 3 {
            frame.fill(area, theme::wallpaper());
            let msg = "Terminal too small";
            let rect = centered_rect(area, msg.len() as u16, 1);
            frame.set_string(rect, rect.x, rect.y, msg, theme::wallpaper());
            return Ok(());
        }

        let nav_area = Rect::new(area.x, area.y, area.width, NAV_BAR_HEIGHT);
        let dock_area = Rect::new(
            area.x,
            area.y + area.height - DOCK_HEIGHT,
            area.width,
            DOCK_HEIGHT,
        );
        let desktop_area = Rect::new(
            area.x,
            area.y + NAV_BAR_HEIGHT,
            area.width,
            area.height - NAV_BAR_HEIGHT - DOCK_HEIGHT,
        );
        self.desktop.set_viewport(Viewport::from_rect(desktop_area));
        self.sync_bodies();

        frame.fill(desktop_area, theme::wallpaper());
        frame.fill(dock_area, theme::wallpaper());
        self.render_welcome(frame, desktop_area);
        let root = self.scene.insert(None, desktop_area, Hit::Desktop);

        for id in IconId::ALL {
            if let Some(rect) = self.desktop.icon_rect(id) {
                self.render_icon(frame, id, rect);
                self.scene.insert(Some(root), rect, Hit::Icon(id));
            }
        }

        for id in self.desktop.draw_order() {
            if let Some(rect) = self.desktop.window_rect(id) {
                self.render_window(frame, root, id, rect);
            }
        }

        let dock_layout = dock::layout(self.desktop.dock(), dock_area);
        dock::render(frame, self.desktop.dock(), &dock_layout);
        let dock_node = self.scene.insert(None, dock_layout.bar, Hit::Dock);
        for (app, rect) in &dock_layout.apps {
            self.scene.insert(Some(dock_node), *rect, Hit::DockApp(*app));
        }

        self.nav_bar.render(frame, nav_area);
        let nav_node = self.scene.insert(None, nav_area, Hit::NavBar);
        for (button, rect) in self.nav_bar.button_rects(nav_area) {
            self.scene.insert(Some(nav_node), rect, Hit::NavButton(button));
        }
        Ok(())
    }

    fn handle_event(&mut self, event: &Event, now: Instant) -> Result<EventOutcome, FolioError> {
        let outcome = match event {
            Event::Mouse(mouse) => self.handle_mouse(mouse, event, now),
            Event::Key(key) => self.handle_key(key, event),
            Event::Paste(_) => match self.desktop.topmost() {
                Some(top) if self.forward_to_body(top, event) => EventOutcome::Handled,
                _ => EventOutcome::Ignored,
            },
            _ => EventOutcome::Ignored,
        };
        Ok(outcome)
    }

    fn tick(&mut self, now: Instant) {
        let elapsed = self
            .last_tick
            .map(|prev| now.saturating_duration_since(prev))
            .unwrap_or_default();
        self.last_tick = Some(now);
        self.nav_bar.update_clock();
        for (_, body) in self.bodies.values_mut() {
            body.component().tick(elapsed);
        }
    }
}
