use std::collections::{BTreeMap, BTreeSet};
use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use super::catalog::{IconId, Launch, WindowId};
use super::dismiss::{Hit, Link, NavButton, should_dismiss};
use super::dock::{DockAppId, DockEffect, DockState};
use crate::constants::{BASE_Z_INDEX, DEFAULT_DOUBLE_CLICK_MS, ICON_HEIGHT, ICON_WIDTH};
use crate::focus::ZOrder;
use crate::geometry::{Size, Viewport, to_cell};
use crate::scene::SceneTree;
use crate::tracker::TrackerSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Icon(IconId),
    Window(WindowId),
}

#[derive(Debug, Clone, Copy)]
struct DragGesture {
    target: DragTarget,
    last_column: u16,
    last_row: u16,
}

/// Where a pointer-down ended up after the desktop handled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerRoute {
    /// Fully handled by the desktop.
    Handled,
    /// Landed in a window body; the window's component should see it too.
    Content(WindowId),
    /// Nothing interactive under the pointer.
    Ignored,
}

/// Requests the desktop cannot fulfil itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesktopEffect {
    OpenLink(Link),
}

/// Owns every piece of interaction state of the desktop view: icon and window
/// positions, the open-window map, the z-order counter and the dock.
#[derive(Debug)]
pub struct Desktop {
    viewport: Viewport,
    icons: TrackerSet<IconId>,
    windows: TrackerSet<WindowId>,
    z_order: ZOrder<WindowId>,
    dock: DockState,
    selected_icon: Option<IconId>,
    drag: Option<DragGesture>,
    last_icon_click: Option<(IconId, Instant)>,
    double_click: Duration,
    effects: Vec<DesktopEffect>,
    /// Bumped on every mount so a reopened window is distinguishable from
    /// the instance that was closed.
    mount_serials: BTreeMap<WindowId, u64>,
    next_serial: u64,
}

impl Desktop {
    pub fn new(viewport: Viewport) -> Self {
        let icon_size = Size::new(f64::from(ICON_WIDTH), f64::from(ICON_HEIGHT));
        let mut icons: TrackerSet<IconId> = IconId::ALL
            .into_iter()
            .map(|id| (id, id.icon().initial, Some(icon_size)))
            .collect();
        icons.clamp_all(&viewport);
        let mut desktop = Self {
            viewport,
            icons,
            windows: TrackerSet::new(),
            z_order: ZOrder::new(BASE_Z_INDEX),
            dock: DockState::default(),
            selected_icon: None,
            drag: None,
            last_icon_click: None,
            double_click: Duration::from_millis(DEFAULT_DOUBLE_CLICK_MS),
            effects: Vec::new(),
            mount_serials: BTreeMap::new(),
            next_serial: 0,
        };
        desktop.open_window(WindowId::Notes);
        desktop
    }

    pub fn set_double_click_interval(&mut self, interval: Duration) {
        self.double_click = interval;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Apply a new usable area and pull everything back inside it.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            "viewport changed"
        );
        self.viewport = viewport;
        let open: Vec<WindowId> = self.windows.ids().collect();
        for id in open {
            let size = self.fitted_size(id);
            if let Some(tracker) = self.windows.get_mut(id) {
                tracker.set_measured_size(size);
            }
        }
        self.icons.clamp_all(&self.viewport);
        self.windows.clamp_all(&self.viewport);
    }

    fn fitted_size(&self, id: WindowId) -> Size {
        let spec = id.spec().size;
        let avail_h = (self.viewport.height - self.viewport.top_margin).max(1.0);
        Size::new(
            spec.width.min(self.viewport.width.max(1.0)),
            spec.height.min(avail_h),
        )
    }

    // Open-window map

    pub fn is_open(&self, id: WindowId) -> bool {
        self.windows.contains(id)
    }

    pub fn open_windows(&self) -> Vec<WindowId> {
        self.windows.ids().collect()
    }

    /// Open windows bottom to top.
    pub fn draw_order(&self) -> Vec<WindowId> {
        self.z_order.draw_order()
    }

    pub fn topmost(&self) -> Option<WindowId> {
        self.z_order.topmost()
    }

    pub fn z_index(&self, id: WindowId) -> Option<u64> {
        self.z_order.z_index(id)
    }

    /// Identifies the current open instance of `id`.
    pub fn mount_serial(&self, id: WindowId) -> Option<u64> {
        self.mount_serials.get(&id).copied()
    }

    /// Open `id` (or raise it when already open).
    pub fn open_window(&mut self, id: WindowId) {
        if !self.windows.contains(id) {
            let size = self.fitted_size(id);
            let spec = id.spec();
            if self.windows.mount(id, spec.initial, Some(size)).is_ok()
                && let Some(tracker) = self.windows.get_mut(id)
            {
                tracker.clamp_to(&self.viewport);
            }
            self.next_serial += 1;
            self.mount_serials.insert(id, self.next_serial);
            tracing::debug!(window = %id, "opened window");
        }
        self.z_order.request_focus(id);
    }

    pub fn close_window(&mut self, id: WindowId) {
        if self.windows.unmount(id).is_none() {
            return;
        }
        self.z_order.remove(id);
        self.mount_serials.remove(&id);
        if matches!(self.drag, Some(drag) if drag.target == DragTarget::Window(id)) {
            self.drag = None;
        }
        tracing::debug!(window = %id, "closed window");
    }

    pub fn focus_window(&mut self, id: WindowId) -> Option<u64> {
        self.is_open(id).then(|| self.z_order.request_focus(id))
    }

    pub fn launch_icon(&mut self, icon: IconId) {
        tracing::info!(icon = %icon, "launch");
        match icon.launch() {
            Launch::AboutSet => {
                self.close_showcases(None);
                for id in WindowId::ABOUT_SET {
                    self.open_window(id);
                }
            }
            Launch::Showcase(id) => {
                self.close_showcases(Some(id));
                self.open_window(id);
            }
            Launch::Document(id) => self.open_window(id),
        }
    }

    fn close_showcases(&mut self, keep: Option<WindowId>) {
        for id in WindowId::SHOWCASES {
            if Some(id) != keep {
                self.close_window(id);
            }
        }
    }

    // Dock

    pub fn dock(&self) -> &DockState {
        &self.dock
    }

    pub fn click_dock_app(&mut self, app: DockAppId) {
        let open_before: BTreeSet<WindowId> = self.windows.ids().collect();
        self.dock_click_from(app, &open_before);
    }

    fn dock_click_from(&mut self, app: DockAppId, open_before: &BTreeSet<WindowId>) {
        let running = self.dock.toggle_indicator(app);
        tracing::debug!(app = app.as_str(), running, "dock click");
        match app.effect() {
            DockEffect::Toggle(id) => {
                if open_before.contains(&id) {
                    self.close_window(id);
                } else {
                    self.open_window(id);
                }
            }
            DockEffect::Open(id) => self.open_window(id),
            DockEffect::None => {}
        }
    }

    // Icons and layout

    pub fn selected_icon(&self) -> Option<IconId> {
        self.selected_icon
    }

    pub fn select_icon_offset(&mut self, delta: isize) {
        let len = IconId::ALL.len() as isize;
        let current = self
            .selected_icon
            .and_then(|id| IconId::ALL.iter().position(|i| *i == id))
            .map(|i| i as isize)
            .unwrap_or(if delta >= 0 { -1 } else { 0 });
        let next = (current + delta).rem_euclid(len) as usize;
        self.selected_icon = Some(IconId::ALL[next]);
    }

    pub fn open_selected_icon(&mut self) -> bool {
        match self.selected_icon {
            Some(icon) => {
                self.launch_icon(icon);
                true
            }
            None => false,
        }
    }

    pub fn icon_rect(&self, id: IconId) -> Option<Rect> {
        let tracker = self.icons.get(id)?;
        let pos = tracker.position();
        Some(Rect {
            x: to_cell(pos.x),
            y: to_cell(pos.y),
            width: ICON_WIDTH,
            height: ICON_HEIGHT,
        })
    }

    pub fn window_rect(&self, id: WindowId) -> Option<Rect> {
        let tracker = self.windows.get(id)?;
        let pos = tracker.position();
        let size = tracker.size();
        Some(Rect {
            x: to_cell(pos.x),
            y: to_cell(pos.y),
            width: to_cell(size.width),
            height: to_cell(size.height),
        })
    }

    pub fn icon_position(&self, id: IconId) -> Option<crate::geometry::Point> {
        self.icons.get(id).map(|t| t.position())
    }

    pub fn window_position(&self, id: WindowId) -> Option<crate::geometry::Point> {
        self.windows.get(id).map(|t| t.position())
    }

    pub fn dragging(&self) -> Option<DragTarget> {
        self.drag.map(|drag| drag.target)
    }

    // Keyboard

    pub fn close_topmost(&mut self) -> Option<WindowId> {
        let top = self.topmost()?;
        self.close_window(top);
        Some(top)
    }

    /// Forward raises the bottom-most window (rotating the stack); backward
    /// raises the window just below the top.
    pub fn cycle_focus(&mut self, forward: bool) -> Option<WindowId> {
        let order = self.draw_order();
        let pick = if forward {
            order.first().copied()
        } else if order.len() >= 2 {
            order.get(order.len() - 2).copied()
        } else {
            None
        }?;
        self.z_order.request_focus(pick);
        Some(pick)
    }

    // Pointer

    pub fn pointer_down(
        &mut self,
        scene: &SceneTree<Hit>,
        column: u16,
        row: u16,
        now: Instant,
    ) -> PointerRoute {
        let target = scene.hit_test(column, row);
        let open_before: BTreeSet<WindowId> = self.windows.ids().collect();

        for id in open_before.iter().copied() {
            if should_dismiss(scene, id, id.spec().dismiss, target) {
                tracing::debug!(window = %id, "dismissed by outside click");
                self.close_window(id);
            }
        }

        let Some(target) = target else {
            return PointerRoute::Ignored;
        };
        let Some(hit) = scene.tag(target) else {
            return PointerRoute::Ignored;
        };

        match hit {
            Hit::CloseButton(id) => {
                self.close_window(id);
                PointerRoute::Handled
            }
            Hit::Header(id) => {
                self.start_drag(DragTarget::Window(id), column, row);
                PointerRoute::Handled
            }
            Hit::Window(id) => {
                if id.spec().show_header {
                    self.focus_window(id);
                } else {
                    self.start_drag(DragTarget::Window(id), column, row);
                }
                PointerRoute::Handled
            }
            Hit::Content(id) => {
                self.focus_window(id);
                PointerRoute::Content(id)
            }
            Hit::Link(link) => {
                if let Some(id) = scene.closest(target, |tag| match tag {
                    Hit::Window(id) => Some(id),
                    _ => None,
                }) {
                    self.focus_window(id);
                }
                self.effects.push(DesktopEffect::OpenLink(link));
                PointerRoute::Handled
            }
            Hit::Icon(icon) => {
                self.selected_icon = Some(icon);
                let double = matches!(
                    self.last_icon_click,
                    Some((prev, at)) if prev == icon && now.saturating_duration_since(at) <= self.double_click
                );
                if double {
                    self.last_icon_click = None;
                    self.launch_icon(icon);
                } else {
                    self.last_icon_click = Some((icon, now));
                    self.start_drag(DragTarget::Icon(icon), column, row);
                }
                PointerRoute::Handled
            }
            Hit::DockApp(app) => {
                self.dock_click_from(app, &open_before);
                PointerRoute::Handled
            }
            Hit::NavButton(NavButton::Contact) => {
                self.open_window(WindowId::Contact);
                PointerRoute::Handled
            }
            Hit::NavButton(NavButton::Resume) => {
                self.open_window(WindowId::Resume);
                PointerRoute::Handled
            }
            Hit::Desktop => {
                self.selected_icon = None;
                PointerRoute::Handled
            }
            Hit::Dock | Hit::NavBar => PointerRoute::Ignored,
        }
    }

    fn start_drag(&mut self, target: DragTarget, column: u16, row: u16) {
        let tracker = match target {
            DragTarget::Icon(id) => self.icons.get_mut(id),
            DragTarget::Window(id) => {
                if !self.windows.contains(id) {
                    return;
                }
                self.z_order.request_focus(id);
                self.windows.get_mut(id)
            }
        };
        let Some(tracker) = tracker else {
            return;
        };
        tracker.begin_drag();
        tracing::trace!(?target, "drag start");
        self.drag = Some(DragGesture {
            target,
            last_column: column,
            last_row: row,
        });
    }

    /// Feed a pointer move while the button is held.
    pub fn pointer_drag(&mut self, column: u16, row: u16) -> bool {
        let Some(mut drag) = self.drag else {
            return false;
        };
        let dx = f64::from(column) - f64::from(drag.last_column);
        let dy = f64::from(row) - f64::from(drag.last_row);
        drag.last_column = column;
        drag.last_row = row;
        self.drag = Some(drag);
        self.apply_drag_delta(drag.target, dx, dy);
        true
    }

    /// Apply a raw delta to the dragged entity. Non-finite deltas count as zero.
    pub fn apply_drag_delta(&mut self, target: DragTarget, dx: f64, dy: f64) {
        let finite = |v: f64| if v.is_finite() { v } else { 0.0 };
        let viewport = self.viewport;
        let tracker = match target {
            DragTarget::Icon(id) => self.icons.get_mut(id),
            DragTarget::Window(id) => self.windows.get_mut(id),
        };
        if let Some(tracker) = tracker {
            tracker.apply_delta(finite(dx), finite(dy), &viewport);
        }
    }

    pub fn pointer_up(&mut self) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        let viewport = self.viewport;
        let tracker = match drag.target {
            DragTarget::Icon(id) => self.icons.get_mut(id),
            DragTarget::Window(id) => self.windows.get_mut(id),
        };
        if let Some(tracker) = tracker {
            let pos = tracker.end_drag(&viewport);
            tracing::trace!(target = ?drag.target, x = pos.x, y = pos.y, "drag end");
        }
        true
    }

    pub fn take_effects(&mut self) -> Vec<DesktopEffect> {
        std::mem::take(&mut self.effects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn desktop() -> Desktop {
        Desktop::new(Viewport::new(120.0, 33.0, 1.0))
    }

    #[test]
    fn notes_window_starts_open() {
        let d = desktop();
        assert!(d.is_open(WindowId::Notes));
        assert_eq!(d.topmost(), Some(WindowId::Notes));
    }

    #[test]
    fn about_launch_closes_showcases_and_puts_info_on_top() {
        let mut d = desktop();
        d.launch_icon(IconId::Project2);
        d.launch_icon(IconId::About);
        assert!(!d.is_open(WindowId::Project2));
        for id in WindowId::ABOUT_SET {
            assert!(d.is_open(id));
        }
        assert_eq!(d.topmost(), Some(WindowId::AboutInfo));
    }

    #[test]
    fn showcase_launch_keeps_about_windows() {
        let mut d = desktop();
        d.launch_icon(IconId::About);
        d.launch_icon(IconId::Project1);
        d.launch_icon(IconId::Profile);
        assert!(d.is_open(WindowId::AboutInfo));
        assert!(!d.is_open(WindowId::Project1));
        assert!(d.is_open(WindowId::DontLook));
    }

    #[test]
    fn dock_toggle_uses_state_before_the_click() {
        let mut d = desktop();
        d.click_dock_app(DockAppId::Spotify);
        assert!(d.is_open(WindowId::MediaPlayer));
        assert!(d.dock().is_running(DockAppId::Spotify));
        d.click_dock_app(DockAppId::Spotify);
        assert!(!d.is_open(WindowId::MediaPlayer));
        d.click_dock_app(DockAppId::Mail);
        d.click_dock_app(DockAppId::Mail);
        assert!(d.is_open(WindowId::Contact));
    }

    #[test]
    fn closing_mid_drag_cancels_the_gesture() {
        let mut d = desktop();
        d.open_window(WindowId::Photos);
        d.start_drag(DragTarget::Window(WindowId::Photos), 10, 5);
        assert_eq!(d.dragging(), Some(DragTarget::Window(WindowId::Photos)));
        d.close_window(WindowId::Photos);
        assert_eq!(d.dragging(), None);
        assert!(!d.pointer_drag(20, 5));
    }

    #[test]
    fn non_finite_delta_is_ignored() {
        let mut d = desktop();
        let before = d.icon_position(IconId::About).unwrap();
        d.apply_drag_delta(DragTarget::Icon(IconId::About), f64::NAN, f64::INFINITY);
        assert_eq!(d.icon_position(IconId::About), Some(before));
    }

    #[test]
    fn shrinking_viewport_refits_windows() {
        let mut d = desktop();
        d.open_window(WindowId::DontLook);
        d.set_viewport(Viewport::new(40.0, 15.0, 1.0));
        let rect = d.window_rect(WindowId::DontLook).unwrap();
        assert!(rect.width <= 40);
        assert!(rect.height <= 14);
        let pos = d.window_position(WindowId::DontLook).unwrap();
        assert_eq!(pos, Point::new(0.0, 1.0));
    }

    #[test]
    fn cycle_focus_rotates_stack() {
        let mut d = desktop();
        d.open_window(WindowId::Photos);
        d.open_window(WindowId::Finder);
        assert_eq!(d.cycle_focus(true), Some(WindowId::Notes));
        assert_eq!(d.topmost(), Some(WindowId::Notes));
        assert_eq!(d.cycle_focus(false), Some(WindowId::Finder));
        assert_eq!(d.topmost(), Some(WindowId::Finder));
    }

    #[test]
    fn keyboard_icon_selection_wraps() {
        let mut d = desktop();
        d.select_icon_offset(1);
        assert_eq!(d.selected_icon(), Some(IconId::Resume));
        d.select_icon_offset(-1);
        assert_eq!(d.selected_icon(), Some(IconId::Profile));
        assert!(d.open_selected_icon());
        assert!(d.is_open(WindowId::DontLook));
    }
}
