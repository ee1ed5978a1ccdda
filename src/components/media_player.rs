//! "Now Playing" window: a four-track playlist with a simulated clock.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use thiserror::Error;

use crate::components::{Component, ComponentContext};
use crate::theme;
use crate::ui::UiFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub title: &'static str,
    pub artist: &'static str,
    pub duration: Duration,
    pub source: &'static str,
}

pub const PLAYLIST: [Track; 4] = [
    Track {
        title: "Sweater Weather",
        artist: "The Neighbourhood",
        duration: Duration::from_secs(240),
        source: "/songs/song4.mp3",
    },
    Track {
        title: "Sunflower",
        artist: "Post Malone, Swae Lee",
        duration: Duration::from_secs(180),
        source: "/songs/song1.mp3",
    },
    Track {
        title: "End of Beginning",
        artist: "Joe Keery",
        duration: Duration::from_secs(210),
        source: "/songs/song2.mp3",
    },
    Track {
        title: "I Can't Fit In",
        artist: "Marino",
        duration: Duration::from_secs(185),
        source: "/songs/song3.mp3",
    },
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("audio source {0} is unavailable")]
    Unavailable(String),
    #[error("audio output rejected playback: {0}")]
    Rejected(String),
}

/// Audio output. Loading happens on `play`; the player owns the clock.
pub trait AudioSink: std::fmt::Debug {
    fn play(&mut self, track: &Track, from: Duration) -> Result<(), PlaybackError>;
    fn pause(&mut self);
}

/// Silent sink that accepts every track.
#[derive(Debug, Default)]
pub struct SimulatedSink {
    playing: Option<&'static str>,
}

impl SimulatedSink {
    pub fn playing(&self) -> Option<&'static str> {
        self.playing
    }
}

impl AudioSink for SimulatedSink {
    fn play(&mut self, track: &Track, _from: Duration) -> Result<(), PlaybackError> {
        self.playing = Some(track.source);
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = None;
    }
}

#[derive(Debug)]
pub struct MediaPlayer {
    tracks: Vec<Track>,
    current: usize,
    elapsed: Duration,
    playing: bool,
    sink: Box<dyn AudioSink>,
}

impl Default for MediaPlayer {
    fn default() -> Self {
        Self::new(Box::new(SimulatedSink::default()))
    }
}

impl MediaPlayer {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self::with_tracks(PLAYLIST.to_vec(), sink)
    }

    pub fn with_tracks(tracks: Vec<Track>, sink: Box<dyn AudioSink>) -> Self {
        Self {
            tracks,
            current: 0,
            elapsed: Duration::ZERO,
            playing: false,
            sink,
        }
    }

    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Start playback. A sink failure leaves the player paused.
    pub fn play(&mut self) {
        let Some(track) = self.tracks.get(self.current).copied() else {
            return;
        };
        match self.sink.play(&track, self.elapsed) {
            Ok(()) => {
                self.playing = true;
                tracing::info!(track = track.title, "playback started");
            }
            Err(err) => {
                tracing::debug!(track = track.title, error = %err, "playback failed");
            }
        }
    }

    pub fn pause(&mut self) {
        if self.playing {
            self.sink.pause();
            self.playing = false;
            tracing::info!("playback paused");
        }
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn next(&mut self) {
        self.select((self.current + 1) % self.tracks.len().max(1));
    }

    pub fn previous(&mut self) {
        let len = self.tracks.len().max(1);
        self.select((self.current + len - 1) % len);
    }

    /// Load another track. Playback stops and the clock rewinds.
    fn select(&mut self, index: usize) {
        self.pause();
        self.current = index;
        self.elapsed = Duration::ZERO;
        tracing::debug!(track = ?self.current().map(|t| t.title), "track selected");
    }

    /// Jump to `position`, capped at the track length. While playing the sink
    /// is restarted from there; a refusal is logged and the player stays in
    /// its current play state.
    pub fn seek(&mut self, position: Duration) {
        let Some(track) = self.current().copied() else {
            return;
        };
        self.elapsed = position.min(track.duration);
        if self.playing
            && let Err(err) = self.sink.play(&track, self.elapsed)
        {
            tracing::debug!(track = track.title, error = %err, "seek restart failed");
        }
    }

    pub fn seek_by(&mut self, delta: i64) {
        let secs = self.elapsed.as_secs() as i64 + delta;
        self.seek(Duration::from_secs(secs.max(0) as u64));
    }

    /// Advance the clock. Reaching the end of a track loads the next one,
    /// paused.
    pub fn tick(&mut self, elapsed: Duration) {
        if !self.playing {
            return;
        }
        let Some(track) = self.current().copied() else {
            return;
        };
        self.elapsed += elapsed;
        if self.elapsed >= track.duration {
            tracing::debug!(track = track.title, "track finished");
            self.next();
        }
    }

    fn progress_bar(&self, width: usize) -> String {
        let Some(track) = self.current() else {
            return String::new();
        };
        let total = track.duration.as_secs_f64().max(1.0);
        let filled = ((self.elapsed.as_secs_f64() / total) * width as f64).round() as usize;
        let filled = filled.min(width);
        format!("{}{}", "━".repeat(filled), "─".repeat(width - filled))
    }
}

pub fn format_clock(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

impl Component for MediaPlayer {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ComponentContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let body = theme::window_body();
        frame.fill(area, body);
        let Some(track) = self.current().copied() else {
            return;
        };
        let x = area.x + 1;
        let inner = area.width.saturating_sub(2);
        let mut y = area.y;
        frame.set_string(
            area,
            x,
            y,
            track.title,
            body.add_modifier(Modifier::BOLD),
        );
        y += 1;
        frame.set_string(area, x, y, track.artist, body.fg(Color::Gray));
        y += 2;

        let elapsed = format_clock(self.elapsed);
        let total = format_clock(track.duration);
        let bar_width = (inner as usize).saturating_sub(elapsed.len() + total.len() + 2);
        let line = format!("{elapsed} {} {total}", self.progress_bar(bar_width));
        frame.set_string(area, x, y, &line, body.fg(theme::accent()));
        y += 2;

        let toggle = if self.playing { "❚❚" } else { "▶" };
        let controls = format!("⏮   {toggle}   ⏭");
        let cx = area.x + area.width.saturating_sub(controls.chars().count() as u16) / 2;
        frame.set_string(area, cx, y, &controls, body.add_modifier(Modifier::BOLD));
        y += 2;
        frame.set_string(
            area,
            x,
            y,
            "space play/pause  n/p track  ←/→ seek",
            Style::default().fg(Color::DarkGray).bg(Color::Black),
        );
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char(' ') => self.toggle(),
            KeyCode::Char('n') => self.next(),
            KeyCode::Char('p') => self.previous(),
            KeyCode::Left => self.seek_by(-10),
            KeyCode::Right => self.seek_by(10),
            _ => return false,
        }
        true
    }

    fn tick(&mut self, elapsed: Duration) {
        MediaPlayer::tick(self, elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct BrokenSink;

    impl AudioSink for BrokenSink {
        fn play(&mut self, track: &Track, _from: Duration) -> Result<(), PlaybackError> {
            Err(PlaybackError::Unavailable(track.source.to_string()))
        }
        fn pause(&mut self) {}
    }

    #[test]
    fn starts_paused_on_first_track() {
        let player = MediaPlayer::default();
        assert!(!player.is_playing());
        assert_eq!(player.current().map(|t| t.title), Some("Sweater Weather"));
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut player = MediaPlayer::default();
        player.previous();
        assert_eq!(player.current_index(), 3);
        player.next();
        assert_eq!(player.current_index(), 0);
    }

    /// Accepts the first `successes` play calls, then refuses.
    #[derive(Debug)]
    struct FlakySink {
        successes: usize,
    }

    impl AudioSink for FlakySink {
        fn play(&mut self, track: &Track, _from: Duration) -> Result<(), PlaybackError> {
            if self.successes == 0 {
                return Err(PlaybackError::Rejected(track.title.to_string()));
            }
            self.successes -= 1;
            Ok(())
        }
        fn pause(&mut self) {}
    }

    #[test]
    fn failed_play_keeps_state() {
        let mut player = MediaPlayer::new(Box::new(BrokenSink));
        player.toggle();
        assert!(!player.is_playing());
    }

    #[test]
    fn failed_restart_on_seek_keeps_playing_state() {
        let mut player = MediaPlayer::new(Box::new(FlakySink { successes: 1 }));
        player.play();
        assert!(player.is_playing());
        player.seek(Duration::from_secs(30));
        assert!(player.is_playing());
        assert_eq!(player.elapsed(), Duration::from_secs(30));
    }

    #[test]
    fn changing_tracks_stops_playback() {
        let mut player = MediaPlayer::default();
        player.play();
        player.next();
        assert!(!player.is_playing());
        assert_eq!(player.current_index(), 1);

        player.play();
        player.previous();
        assert!(!player.is_playing());
        assert_eq!(player.current_index(), 0);
    }

    #[test]
    fn tick_only_advances_while_playing() {
        let mut player = MediaPlayer::default();
        player.tick(Duration::from_secs(5));
        assert_eq!(player.elapsed(), Duration::ZERO);
        player.play();
        player.tick(Duration::from_secs(5));
        assert_eq!(player.elapsed(), Duration::from_secs(5));
    }

    #[test]
    fn track_end_moves_to_next() {
        let mut player = MediaPlayer::default();
        player.play();
        player.seek(Duration::from_secs(239));
        player.tick(Duration::from_secs(2));
        assert_eq!(player.current_index(), 1);
        assert_eq!(player.elapsed(), Duration::ZERO);
        assert!(!player.is_playing());
        player.tick(Duration::from_secs(5));
        assert_eq!(player.elapsed(), Duration::ZERO);
    }

    #[test]
    fn seek_is_capped_at_track_length() {
        let mut player = MediaPlayer::default();
        player.seek(Duration::from_secs(10_000));
        assert_eq!(player.elapsed(), Duration::from_secs(240));
        player.seek_by(-500);
        assert_eq!(player.elapsed(), Duration::ZERO);
    }

    #[test]
    fn clock_format() {
        assert_eq!(format_clock(Duration::from_secs(185)), "3:05");
    }

    #[test]
    fn render_shows_title() {
        use ratatui::buffer::Buffer;
        let area = Rect::new(0, 0, 40, 9);
        let mut buf = Buffer::empty(area);
        let mut player = MediaPlayer::default();
        player.render(&mut UiFrame::from_parts(area, &mut buf), area, &ComponentContext::default());
        let row: String = (0..40).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(row.contains("Sweater Weather"));
    }
}
