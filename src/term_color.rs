use std::sync::OnceLock;

use ratatui::style::Color;

static TRUECOLOR: OnceLock<bool> = OnceLock::new();

/// `COLORTERM` advertises 24-bit colour. Read once per process.
pub fn truecolor_supported() -> bool {
    *TRUECOLOR.get_or_init(|| {
        std::env::var("COLORTERM")
            .map(|v| {
                let v = v.to_ascii_lowercase();
                v.contains("truecolor") || v.contains("24bit")
            })
            .unwrap_or(false)
    })
}

/// Map an RGB triple to the richest colour the terminal supports.
pub fn map_rgb_to_color(r: u8, g: u8, b: u8) -> Color {
    map_rgb(r, g, b, truecolor_supported())
}

pub fn map_rgb(r: u8, g: u8, b: u8, truecolor: bool) -> Color {
    if truecolor {
        Color::Rgb(r, g, b)
    } else {
        Color::Indexed(xterm_index(r, g, b))
    }
}

/// Nearest entry of the xterm-256 palette, searching both the 6x6x6 cube
/// (16..=231) and the grey ramp (232..=255).
fn xterm_index(r: u8, g: u8, b: u8) -> u8 {
    let (r6, g6, b6) = (to_cube(r), to_cube(g), to_cube(b));
    let cube = (cube_level(r6), cube_level(g6), cube_level(b6));
    let cube_index = 16 + 36 * r6 + 6 * g6 + b6;

    let avg = (u16::from(r) + u16::from(g) + u16::from(b)) / 3;
    let grey_step = ((avg.saturating_sub(8)) / 10).min(23) as u8;
    let grey = 8 + grey_step * 10;

    if distance((r, g, b), (grey, grey, grey)) < distance((r, g, b), cube) {
        232 + grey_step
    } else {
        cube_index
    }
}

fn to_cube(v: u8) -> u8 {
    match v {
        0..=47 => 0,
        48..=114 => 1,
        _ => ((u16::from(v) - 35) / 40) as u8,
    }
}

fn cube_level(step: u8) -> u8 {
    if step == 0 { 0 } else { 55 + step * 40 }
}

fn distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let d = |x: u8, y: u8| {
        let v = i32::from(x) - i32::from(y);
        (v * v) as u32
    };
    d(a.0, b.0) + d(a.1, b.1) + d(a.2, b.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truecolor_passes_rgb_through() {
        assert_eq!(map_rgb(1, 2, 3, true), Color::Rgb(1, 2, 3));
    }

    #[test]
    fn cube_corners_map_exactly() {
        assert_eq!(map_rgb(255, 0, 0, false), Color::Indexed(196));
        assert_eq!(map_rgb(0, 0, 255, false), Color::Indexed(21));
        assert_eq!(map_rgb(255, 255, 255, false), Color::Indexed(231));
    }

    #[test]
    fn mid_greys_use_the_ramp() {
        assert_eq!(map_rgb(128, 128, 128, false), Color::Indexed(244));
    }
}
