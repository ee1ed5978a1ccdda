//! Outside-click dismissal.
//!
//! A pointer-down is resolved against the frame's scene tree and each open
//! window's policy decides whether that target counts as "outside".

use super::catalog::{DismissPolicy, IconId, WindowId};
use super::dock::DockAppId;
use crate::scene::{NodeId, SceneTree};

/// Tags attached to scene nodes by the desktop view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Desktop,
    Icon(IconId),
    Window(WindowId),
    Header(WindowId),
    CloseButton(WindowId),
    Content(WindowId),
    Link(Link),
    Dock,
    DockApp(DockAppId),
    NavBar,
    NavButton(NavButton),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    Contact,
    Resume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    ResumePdf,
    Email,
    Github,
}

impl Link {
    pub fn url(self) -> &'static str {
        match self {
            Link::ResumePdf => "https://rakshith.dev/resume.pdf",
            Link::Email => "mailto:rakshith@example.com",
            Link::Github => "https://github.com/rakshith-r",
        }
    }
}

/// Whether a pointer-down on `target` should close `window`.
///
/// `target` is `None` when the pointer hit nothing that was painted.
pub fn should_dismiss(
    scene: &SceneTree<Hit>,
    window: WindowId,
    policy: DismissPolicy,
    target: Option<NodeId>,
) -> bool {
    let Some(root) = scene.find(Hit::Window(window)) else {
        return false;
    };
    match policy {
        DismissPolicy::Never => false,
        DismissPolicy::AnyOutside => match target {
            Some(target) => !scene.contains(root, target),
            None => true,
        },
        DismissPolicy::DesktopBackground => target.is_some_and(|t| on_background(scene, t)),
    }
}

/// True when the nearest meaningful ancestor of `target` is the desktop
/// itself rather than a window or an icon.
fn on_background(scene: &SceneTree<Hit>, target: NodeId) -> bool {
    scene
        .closest(target, |tag| match tag {
            Hit::Desktop => Some(true),
            Hit::Window(_) | Hit::Icon(_) => Some(false),
            _ => None,
        })
        .unwrap_or(false)
}
