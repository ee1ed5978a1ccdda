//! Position tracking for draggable entities.
//!
//! A [`PositionTracker`] owns the on-screen coordinate of one icon or window.
//! Drag gestures feed it incremental deltas; every update is clamped against
//! the viewport so the entity never leaves the usable area.

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::error::FolioError;
use crate::geometry::{Point, Size, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Grab,
    Grabbing,
}

#[derive(Debug, Clone)]
pub struct PositionTracker {
    initial: Point,
    position: Point,
    size: Option<Size>,
    dragging: bool,
}

impl PositionTracker {
    pub fn new(initial: Point, size: Option<Size>) -> Self {
        Self {
            initial,
            position: initial,
            size,
            dragging: false,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn initial(&self) -> Point {
        self.initial
    }

    /// Measured size, or the fallback when the entity has not been laid out.
    pub fn size(&self) -> Size {
        Size::or_fallback(self.size)
    }

    pub fn set_measured_size(&mut self, size: Size) {
        self.size = Some(size);
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn cursor_hint(&self) -> CursorHint {
        if self.dragging {
            CursorHint::Grabbing
        } else {
            CursorHint::Grab
        }
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    pub fn apply_delta(&mut self, dx: f64, dy: f64, viewport: &Viewport) -> Point {
        let next = Point::new(self.position.x + dx, self.position.y + dy);
        self.position = viewport.clamp(next, self.size());
        self.position
    }

    /// Re-clamp in case the viewport changed during the drag.
    pub fn end_drag(&mut self, viewport: &Viewport) -> Point {
        self.position = viewport.clamp(self.position, self.size());
        self.dragging = false;
        self.position
    }

    /// Clamp without touching the drag flag.
    pub fn clamp_to(&mut self, viewport: &Viewport) -> Point {
        self.position = viewport.clamp(self.position, self.size());
        self.position
    }

    /// Snap back to the mount-time coordinate.
    pub fn reset(&mut self) {
        self.position = self.initial;
        self.dragging = false;
    }
}

/// Keyed set of trackers; at most one per entity id.
#[derive(Debug, Clone)]
pub struct TrackerSet<K: Copy + Ord + Debug> {
    trackers: BTreeMap<K, PositionTracker>,
}

impl<K: Copy + Ord + Debug> Default for TrackerSet<K> {
    fn default() -> Self {
        Self {
            trackers: BTreeMap::new(),
        }
    }
}

/// Builds a set in one go. A repeated id keeps its first entry.
impl<K: Copy + Ord + Debug> FromIterator<(K, Point, Option<Size>)> for TrackerSet<K> {
    fn from_iter<I: IntoIterator<Item = (K, Point, Option<Size>)>>(iter: I) -> Self {
        let mut trackers = BTreeMap::new();
        for (id, initial, size) in iter {
            trackers
                .entry(id)
                .or_insert_with(|| PositionTracker::new(initial, size));
        }
        Self { trackers }
    }
}

impl<K: Copy + Ord + Debug> TrackerSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, id: K, initial: Point, size: Option<Size>) -> Result<(), FolioError> {
        if self.trackers.contains_key(&id) {
            return Err(FolioError::DuplicateEntity(format!("{id:?}")));
        }
        tracing::trace!(entity = ?id, x = initial.x, y = initial.y, "mounted entity");
        self.trackers
            .insert(id, PositionTracker::new(initial, size));
        Ok(())
    }

    /// Drops the tracker; an in-flight drag ends with it.
    pub fn unmount(&mut self, id: K) -> Option<PositionTracker> {
        self.trackers.remove(&id)
    }

    pub fn get(&self, id: K) -> Option<&PositionTracker> {
        self.trackers.get(&id)
    }

    pub fn get_mut(&mut self, id: K) -> Option<&mut PositionTracker> {
        self.trackers.get_mut(&id)
    }

    pub fn contains(&self, id: K) -> bool {
        self.trackers.contains_key(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = K> + '_ {
        self.trackers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }

    /// Re-clamp every tracker, used after a terminal resize.
    pub fn clamp_all(&mut self, viewport: &Viewport) {
        for tracker in self.trackers.values_mut() {
            tracker.clamp_to(viewport);
        }
    }
}
