//! Static window contents.

use indoc::indoc;

use crate::desktop::{Link, WindowId};

/// What fills a window's body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Markdown(&'static str),
    Terminal,
    MediaPlayer,
}

pub fn body_for(id: WindowId) -> BodyKind {
    match id {
        WindowId::Terminal => BodyKind::Terminal,
        WindowId::MediaPlayer => BodyKind::MediaPlayer,
        WindowId::AboutInfo => BodyKind::Markdown(ABOUT),
        WindowId::AboutPhotoRight => BodyKind::Markdown(PHOTO_RIGHT),
        WindowId::AboutPhotoLeft => BodyKind::Markdown(PHOTO_LEFT),
        WindowId::AboutSong => BodyKind::Markdown(SONG_CARD),
        WindowId::Resume => BodyKind::Markdown(RESUME),
        WindowId::Project1 => BodyKind::Markdown(PROJECT1),
        WindowId::Project2 => BodyKind::Markdown(PROJECT2),
        WindowId::Project3 => BodyKind::Markdown(PROJECT3),
        WindowId::Project4 => BodyKind::Markdown(PROJECT4),
        WindowId::DontLook => BodyKind::Markdown(DONT_LOOK),
        WindowId::Finder => BodyKind::Markdown(FINDER),
        WindowId::Photos => BodyKind::Markdown(PHOTOS),
        WindowId::Contact => BodyKind::Markdown(CONTACT),
        WindowId::Notes => BodyKind::Markdown(NOTES),
    }
}

/// Clickable link buttons drawn along the bottom of a window body.
pub fn links_for(id: WindowId) -> &'static [(Link, &'static str)] {
    match id {
        WindowId::Resume => &[(Link::ResumePdf, "Download PDF")],
        WindowId::Contact => &[(Link::Email, "Email"), (Link::Github, "GitHub")],
        _ => &[],
    }
}

const ABOUT: &str = indoc! {"
    # About Me

    Hi, I'm **Rakshith R**, a creative mind who loves building websites and
    landing pages with clean design, cool UI and smooth animations.

    I'm also exploring AI SaaS, cybersecurity and a touch of design, always
    learning and experimenting to push ideas into reality.

    - Pursuing BCA at Gopalan College, Bangalore
    - Long-term goal: build something big, or work remotely in NYC while
      exploring the world

    > Design is not just what it looks like and feels like. Design is how it works.
"};

const PHOTO_RIGHT: &str = indoc! {"
    ```
      .--------.
      | (o)  * |
      |  \\__/  |
      '--------'
    ```
    *Somewhere in Bangalore*
"};

const PHOTO_LEFT: &str = indoc! {"
    ```
       /\\    /\\
      /  \\  /  \\
     /____\\/____\\
    ```
    *Weekend hike*
"};

const SONG_CARD: &str = indoc! {"
    **Sweater Weather**
    The Neighbourhood

    ━━━━━━━━━━───────── 2:14
"};

const RESUME: &str = indoc! {"
    # Rakshith R

    UX Designer & Developer

    ## Education
    - BCA, Gopalan College, Bangalore

    ## Skills
    - Web design, landing pages, UI animation
    - React, TypeScript, Tailwind
    - Exploring AI SaaS and cybersecurity
"};

const PROJECT1: &str = indoc! {"
    # Personal Portfolio

    Portfolio site inspired by the Inika portfolio, with my own modifications.
    A modern, interactive showcase of my work and skills.

    - macOS-style desktop with draggable windows
    - Dock, sticky notes and a terminal easter egg
    - Smooth open and close animations
"};

const PROJECT2: &str = indoc! {"
    # Simplinno

    🚧 **Coming Soon**

    This project is still under construction. Check back later.
"};

const PROJECT3: &str = indoc! {"
    # Leafpress

    A clean publishing site for short essays and notes.

    - Minimal reading layout
    - Light and dark themes
"};

const PROJECT4: &str = indoc! {"
    # Crazy Projects

    1. **Amazon**: a storefront clone
    2. **Scroll Animations**: experiments with scroll-driven motion
    3. **Project Showcase**: a 3D card gallery
"};

const DONT_LOOK: &str = indoc! {"
    # Don't Look

    ## Series
    - **Breaking Bad**: crime drama, 5 seasons, IMDb 9.5
    - **Game of Thrones**: fantasy drama, 8 seasons, IMDb 9.2
    - **Stranger Things**: supernatural horror, 4 seasons, IMDb 8.7
    - **The Office**: mockumentary comedy, 9 seasons, IMDb 8.9

    ## Anime
    - **Attack on Titan**: action fantasy, 4 seasons, IMDb 9.0
    - **Jujutsu Kaisen**: supernatural action, 3 seasons, IMDb 8.7
    - **One Piece**: adventure shounen, 20+ seasons, IMDb 9.0
    - **Naruto**: ninja adventure, 9 seasons
"};

const FINDER: &str = indoc! {"
    # Profile

    **Rakshith R**, UX Designer & Developer

    Passionate about creating beautiful and functional digital experiences.
    I love bringing ideas to life through thoughtful design and clean code.
"};

const PHOTOS: &str = indoc! {"
    # Photos

    - IMG_0001.heic
    - IMG_0002.heic
    - IMG_0003.heic
"};

const CONTACT: &str = indoc! {"
    # Rakshith, R

    UX Designer & Developer

    - Phone: +1 (555) 123-4567
    - Mail: rakshith@example.com
"};

const NOTES: &str = indoc! {"
    - [ ] Drink water
    - [ ] Stop doom scrolling
    - [ ] Finish grad school without losing my mind
    - [ ] Build that banger spotify playlist
    - [ ] World domination
    - [ ] Get really good at making pasta
    - [x] ~~Travel somewhere new every year~~
"};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stateful_bodies() {
        assert_eq!(body_for(WindowId::Terminal), BodyKind::Terminal);
        assert_eq!(body_for(WindowId::MediaPlayer), BodyKind::MediaPlayer);
        assert!(matches!(body_for(WindowId::Notes), BodyKind::Markdown(_)));
    }

    #[test]
    fn only_resume_and_contact_carry_links() {
        assert_eq!(links_for(WindowId::Resume).len(), 1);
        assert_eq!(links_for(WindowId::Contact).len(), 2);
        assert!(links_for(WindowId::Project1).is_empty());
    }

    #[test]
    fn project2_is_coming_soon() {
        let BodyKind::Markdown(text) = body_for(WindowId::Project2) else {
            panic!("project2 should be markdown");
        };
        assert!(text.contains("Coming Soon"));
    }
}
