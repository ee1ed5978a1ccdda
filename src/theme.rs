use ratatui::style::{Color, Modifier, Style};

// Centralized theme colours. RGB values go through `term_color` so they
// degrade to the 256-colour palette on terminals without truecolor.

pub const ACCENT_RGB: (u8, u8, u8) = (59, 130, 246);
pub const WALLPAPER_RGB: (u8, u8, u8) = (24, 32, 56);
pub const CLOSE_RGB: (u8, u8, u8) = (239, 68, 68);
pub const MINIMIZE_RGB: (u8, u8, u8) = (234, 179, 8);
pub const ZOOM_RGB: (u8, u8, u8) = (34, 197, 94);
pub const TERMINAL_BG_RGB: (u8, u8, u8) = (30, 30, 30);

pub fn rgb_to_color(rgb: (u8, u8, u8)) -> Color {
    crate::term_color::map_rgb_to_color(rgb.0, rgb.1, rgb.2)
}

pub fn accent() -> Color {
    rgb_to_color(ACCENT_RGB)
}

// Desktop
pub fn wallpaper() -> Style {
    Style::default().bg(rgb_to_color(WALLPAPER_RGB)).fg(Color::Gray)
}
pub fn icon_label() -> Style {
    Style::default().fg(Color::White)
}
pub fn icon_selected() -> Style {
    Style::default()
        .bg(accent())
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}
pub fn welcome_line() -> Style {
    wallpaper().fg(Color::Gray)
}
pub fn welcome_title() -> Style {
    wallpaper()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD | Modifier::ITALIC)
}
pub fn icon_glyph(kind: crate::desktop::IconKind) -> Style {
    use crate::desktop::IconKind;
    let fg = match kind {
        IconKind::File => Color::White,
        IconKind::Folder => Color::LightBlue,
        IconKind::App => Color::LightMagenta,
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

// Navigation bar
pub fn nav_bar() -> Style {
    Style::default().bg(Color::Black).fg(Color::White)
}
pub fn nav_button() -> Style {
    nav_bar().add_modifier(Modifier::BOLD)
}

// Dock
pub fn dock() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}
pub fn dock_running_dot() -> Style {
    dock().fg(Color::White).add_modifier(Modifier::BOLD)
}

// Window chrome
pub fn window_body() -> Style {
    Style::default().bg(Color::Black).fg(Color::White)
}
pub fn window_border(focused: bool) -> Style {
    let fg = if focused { accent() } else { Color::DarkGray };
    Style::default().fg(fg).bg(Color::Black)
}
pub fn window_header(focused: bool) -> Style {
    if focused {
        Style::default()
            .bg(Color::Gray)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(Color::DarkGray).fg(Color::Gray)
    }
}
pub fn traffic_light_close() -> Color {
    rgb_to_color(CLOSE_RGB)
}
pub fn traffic_light_minimize() -> Color {
    rgb_to_color(MINIMIZE_RGB)
}
pub fn traffic_light_zoom() -> Color {
    rgb_to_color(ZOOM_RGB)
}
pub fn link() -> Style {
    Style::default()
        .fg(accent())
        .add_modifier(Modifier::UNDERLINED)
}

// Terminal window
pub fn terminal_body() -> Style {
    Style::default()
        .bg(rgb_to_color(TERMINAL_BG_RGB))
        .fg(Color::Gray)
}
pub fn terminal_prompt() -> Style {
    terminal_body().fg(Color::LightGreen)
}
pub fn terminal_error() -> Style {
    terminal_body().fg(Color::LightRed)
}

// Error boundary fallback
pub fn error_text() -> Style {
    Style::default().fg(Color::LightRed)
}
