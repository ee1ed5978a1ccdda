pub mod components;
pub mod config;
pub mod constants;
pub mod content;
pub mod desktop;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod focus;
pub mod geometry;
pub mod keybindings;
pub mod links;
pub mod log_buffer;
pub mod runner;
pub mod scene;
pub mod term_color;
pub mod theme;
pub mod tracing_sub;
pub mod tracker;
pub mod ui;
pub mod views;
pub mod window;

pub use error::FolioError;
