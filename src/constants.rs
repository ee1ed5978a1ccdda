//! Shared crate-wide constants.

/// Dimension substituted for an entity whose size has not been measured yet.
///
/// Units: the same units as the viewport (pixels in the original layout,
/// terminal cells in the front-end). Keeps clamp bounds well-formed before
/// the first layout pass.
pub const FALLBACK_ENTITY_SIZE: f64 = 80.0;

/// Rows reserved at the top of the screen for the navigation bar.
pub const NAV_BAR_HEIGHT: u16 = 1;

/// Rows reserved at the bottom of the screen for the dock.
pub const DOCK_HEIGHT: u16 = 3;

/// First value handed out by the z-order counter. Windows opened before any
/// focus request stack above icons and desktop chrome.
pub const BASE_Z_INDEX: u64 = 60;

/// Two pointer-downs on the same icon within this interval count as a
/// double-click.
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 500;

/// Idle tick used by the event loop for redraws and media clock updates.
pub const DEFAULT_POLL_MS: u64 = 16;

/// Cell footprint of a desktop icon (glyph row plus two label rows).
pub const ICON_WIDTH: u16 = 14;
pub const ICON_HEIGHT: u16 = 3;
