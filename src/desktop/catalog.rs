//! Static description of everything that can appear on the desktop.

use std::fmt;

use crate::geometry::{Point, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IconId {
    Resume,
    About,
    Project1,
    Project2,
    Project3,
    Project4,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    File,
    Folder,
    App,
}

#[derive(Debug, Clone, Copy)]
pub struct DesktopIcon {
    pub id: IconId,
    pub name: &'static str,
    pub kind: IconKind,
    pub initial: Point,
}

impl IconId {
    pub const ALL: [IconId; 7] = [
        IconId::Resume,
        IconId::About,
        IconId::Project1,
        IconId::Project2,
        IconId::Project3,
        IconId::Project4,
        IconId::Profile,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IconId::Resume => "resume",
            IconId::About => "about",
            IconId::Project1 => "project1",
            IconId::Project2 => "project2",
            IconId::Project3 => "project3",
            IconId::Project4 => "project4",
            IconId::Profile => "profile",
        }
    }

    pub fn icon(self) -> DesktopIcon {
        let (name, kind, x, y) = match self {
            IconId::Resume => ("Resume.pdf", IconKind::File, 2.0, 25.0),
            IconId::About => ("About Me", IconKind::Folder, 2.0, 20.0),
            IconId::Project1 => ("Portfolio", IconKind::Folder, 84.0, 4.0),
            IconId::Project2 => ("Project 02\n(Lumiere)", IconKind::Folder, 89.0, 9.0),
            IconId::Project3 => ("Project 03\n(Leafpress)", IconKind::Folder, 104.0, 15.0),
            IconId::Project4 => ("Crazy Projects", IconKind::Folder, 84.0, 20.0),
            IconId::Profile => ("Don't Look", IconKind::App, 104.0, 25.0),
        };
        DesktopIcon {
            id: self,
            name,
            kind,
            initial: Point::new(x, y),
        }
    }

    /// Asset path of the icon image, kept opaque.
    pub fn asset_path(self) -> String {
        match self.icon().kind {
            IconKind::Folder if self != IconId::About => "/icons/folder.png".to_string(),
            IconKind::File | IconKind::Folder | IconKind::App => {
                format!("/icons/{}.png", self.as_str())
            }
        }
    }

    pub fn launch(self) -> Launch {
        match self {
            IconId::About => Launch::AboutSet,
            IconId::Resume => Launch::Document(WindowId::Resume),
            IconId::Project1 => Launch::Showcase(WindowId::Project1),
            IconId::Project2 => Launch::Showcase(WindowId::Project2),
            IconId::Project3 => Launch::Showcase(WindowId::Project3),
            IconId::Project4 => Launch::Showcase(WindowId::Project4),
            IconId::Profile => Launch::Showcase(WindowId::DontLook),
        }
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What double-clicking an icon does to the open-window set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    /// Opens the four About windows and closes every showcase.
    AboutSet,
    /// Opens one showcase and closes the others.
    Showcase(WindowId),
    /// Opens a window without touching the rest.
    Document(WindowId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WindowId {
    AboutInfo,
    AboutPhotoRight,
    AboutPhotoLeft,
    AboutSong,
    Resume,
    Project1,
    Project2,
    Project3,
    Project4,
    DontLook,
    Terminal,
    Finder,
    Photos,
    MediaPlayer,
    Contact,
    Notes,
}

/// When a pointer-down elsewhere closes the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissPolicy {
    /// Any pointer-down outside the window's subtree.
    AnyOutside,
    /// A pointer-down on bare desktop background (not a window or icon).
    DesktopBackground,
    /// Only the close button.
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSpec {
    pub title: &'static str,
    pub initial: Point,
    pub size: Size,
    pub show_header: bool,
    pub dismiss: DismissPolicy,
}

impl WindowId {
    pub const ALL: [WindowId; 16] = [
        WindowId::AboutInfo,
        WindowId::AboutPhotoRight,
        WindowId::AboutPhotoLeft,
        WindowId::AboutSong,
        WindowId::Resume,
        WindowId::Project1,
        WindowId::Project2,
        WindowId::Project3,
        WindowId::Project4,
        WindowId::DontLook,
        WindowId::Terminal,
        WindowId::Finder,
        WindowId::Photos,
        WindowId::MediaPlayer,
        WindowId::Contact,
        WindowId::Notes,
    ];

    /// The About windows, in the order they are opened.
    pub const ABOUT_SET: [WindowId; 4] = [
        WindowId::AboutPhotoRight,
        WindowId::AboutPhotoLeft,
        WindowId::AboutSong,
        WindowId::AboutInfo,
    ];

    pub const SHOWCASES: [WindowId; 5] = [
        WindowId::Project1,
        WindowId::Project2,
        WindowId::Project3,
        WindowId::Project4,
        WindowId::DontLook,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WindowId::AboutInfo => "about",
            WindowId::AboutPhotoRight => "about-photo-right",
            WindowId::AboutPhotoLeft => "about-photo-left",
            WindowId::AboutSong => "about-song",
            WindowId::Resume => "resume",
            WindowId::Project1 => "project1",
            WindowId::Project2 => "project2",
            WindowId::Project3 => "project3",
            WindowId::Project4 => "project4",
            WindowId::DontLook => "dont-look",
            WindowId::Terminal => "terminal",
            WindowId::Finder => "finder",
            WindowId::Photos => "photos",
            WindowId::MediaPlayer => "media-player",
            WindowId::Contact => "contact",
            WindowId::Notes => "notes",
        }
    }

    pub fn is_showcase(self) -> bool {
        Self::SHOWCASES.contains(&self)
    }

    pub fn spec(self) -> WindowSpec {
        use DismissPolicy::*;
        let (title, x, y, w, h, show_header, dismiss) = match self {
            WindowId::AboutInfo => ("aboutme.txt", 32.0, 6.0, 56.0, 16.0, true, DesktopBackground),
            WindowId::AboutPhotoRight => ("IMG_0001.heic", 90.0, 2.0, 26.0, 10.0, true, DesktopBackground),
            WindowId::AboutPhotoLeft => ("IMG_0002.heic", 4.0, 19.0, 26.0, 10.0, true, DesktopBackground),
            WindowId::AboutSong => ("", 78.0, 23.0, 38.0, 7.0, false, DesktopBackground),
            WindowId::Resume => ("Resume.pdf", 24.0, 8.0, 46.0, 11.0, true, DesktopBackground),
            WindowId::Project1 => ("Portfolio", 18.0, 4.0, 66.0, 20.0, true, AnyOutside),
            WindowId::Project2 => ("Project 02 - Simplinno", 20.0, 5.0, 62.0, 18.0, true, AnyOutside),
            WindowId::Project3 => ("Project 03 - Leafpress", 22.0, 6.0, 62.0, 18.0, true, AnyOutside),
            WindowId::Project4 => ("Crazy Projects", 20.0, 4.0, 66.0, 20.0, true, AnyOutside),
            WindowId::DontLook => ("Don't Look", 16.0, 3.0, 70.0, 22.0, true, AnyOutside),
            WindowId::Terminal => ("Terminal - zsh", 24.0, 5.0, 72.0, 18.0, true, AnyOutside),
            WindowId::Finder => ("Finder - Profile", 28.0, 6.0, 60.0, 16.0, true, AnyOutside),
            WindowId::Photos => ("Photos", 4.0, 4.0, 40.0, 14.0, true, AnyOutside),
            WindowId::MediaPlayer => ("Now Playing", 72.0, 17.0, 44.0, 11.0, true, AnyOutside),
            WindowId::Contact => ("Contact", 40.0, 8.0, 40.0, 11.0, true, AnyOutside),
            WindowId::Notes => ("Sticky Note", 50.0, 2.0, 30.0, 8.0, true, Never),
        };
        WindowSpec {
            title,
            initial: Point::new(x, y),
            size: Size::new(w, h),
            show_header,
            dismiss,
        }
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_glyphs_cover_every_kind() {
        let kinds: Vec<IconKind> = IconId::ALL.iter().map(|id| id.icon().kind).collect();
        assert!(kinds.contains(&IconKind::File));
        assert!(kinds.contains(&IconKind::Folder));
        assert!(kinds.contains(&IconKind::App));
    }

    #[test]
    fn folder_icons_share_a_generic_asset_except_about() {
        assert_eq!(IconId::Project2.asset_path(), "/icons/folder.png");
        assert_eq!(IconId::About.asset_path(), "/icons/about.png");
        assert_eq!(IconId::Profile.asset_path(), "/icons/profile.png");
    }

    #[test]
    fn only_the_sticky_note_ignores_outside_clicks() {
        let never: Vec<WindowId> = WindowId::ALL
            .into_iter()
            .filter(|id| id.spec().dismiss == DismissPolicy::Never)
            .collect();
        assert_eq!(never, vec![WindowId::Notes]);
        for id in WindowId::SHOWCASES {
            assert_eq!(id.spec().dismiss, DismissPolicy::AnyOutside, "{id}");
        }
        for id in WindowId::ABOUT_SET {
            assert_eq!(id.spec().dismiss, DismissPolicy::DesktopBackground, "{id}");
        }
    }

    #[test]
    fn showcase_launches_are_showcases() {
        for icon in IconId::ALL {
            if let Launch::Showcase(window) = icon.launch() {
                assert!(window.is_showcase(), "{icon} launches a non-showcase");
            }
        }
    }
}
