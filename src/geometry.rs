//! Unit-agnostic geometry for draggable entities.
//!
//! Positions and sizes are `f64` so the same arithmetic serves pixel-valued
//! layouts and the terminal front-end, which maps one unit to one cell.

use ratatui::layout::Rect;

use crate::constants::FALLBACK_ENTITY_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Substitute the fallback dimension for any axis that has not been laid
    /// out yet (zero, negative or non-finite).
    pub fn or_fallback(size: Option<Size>) -> Size {
        let pick = |value: f64| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                FALLBACK_ENTITY_SIZE
            }
        };
        match size {
            Some(size) => Size::new(pick(size.width), pick(size.height)),
            None => Size::new(FALLBACK_ENTITY_SIZE, FALLBACK_ENTITY_SIZE),
        }
    }
}

/// The area entities may occupy. `top_margin` is reserved for the navigation
/// bar; the bottom edge is `height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub top_margin: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64, top_margin: f64) -> Self {
        Self {
            width,
            height,
            top_margin,
        }
    }

    /// Viewport covering the desktop area of a terminal frame. Rows above
    /// `area.y` count as the reserved margin.
    pub fn from_rect(area: Rect) -> Self {
        Self {
            width: f64::from(area.x) + f64::from(area.width),
            height: f64::from(area.y) + f64::from(area.height),
            top_margin: f64::from(area.y),
        }
    }

    pub fn max_x(&self, size: Size) -> f64 {
        self.width - size.width
    }

    pub fn max_y(&self, size: Size) -> f64 {
        self.height - size.height
    }

    /// Clamp `pos` so an entity of `size` stays inside the viewport.
    pub fn clamp(&self, pos: Point, size: Size) -> Point {
        Point {
            x: clamp_axis(pos.x, 0.0, self.max_x(size)),
            y: clamp_axis(pos.y, self.top_margin, self.max_y(size)),
        }
    }

    /// Whether `pos` already satisfies the clamp invariant.
    pub fn contains(&self, pos: Point, size: Size) -> bool {
        self.clamp(pos, size) == pos
    }
}

/// `max(min, min(value, max))`. When the range is inverted (entity larger than
/// the viewport) the lower bound wins instead of panicking like `f64::clamp`.
pub fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Round a unit coordinate to a terminal cell, saturating at the `u16` range.
pub fn to_cell(value: f64) -> u16 {
    if !value.is_finite() || value <= 0.0 {
        0
    } else if value >= f64::from(u16::MAX) {
        u16::MAX
    } else {
        value.round() as u16
    }
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && row >= rect.y
        && column < rect.x.saturating_add(rect.width)
        && row < rect.y.saturating_add(rect.height)
}
