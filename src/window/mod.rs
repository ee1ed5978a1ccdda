pub mod decorator;

pub use decorator::{MacDecorator, WindowChrome, WindowDecorator};
