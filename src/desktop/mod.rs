//! Desktop model: catalog of icons and windows, the dock, outside-click
//! dismissal and the controller that owns all interaction state.

pub mod catalog;
pub mod controller;
pub mod dismiss;
pub mod dock;

pub use catalog::{DesktopIcon, DismissPolicy, IconId, IconKind, Launch, WindowId, WindowSpec};
pub use controller::{Desktop, DesktopEffect, DragTarget, PointerRoute};
pub use dismiss::{Hit, Link, NavButton, should_dismiss};
pub use dock::{DockApp, DockAppId, DockEffect, DockState};
