//! Terminal user interface for ttop.
//!
//! Views draw into a [`Screen`]; layouts place views; the [`Updater`]
//! samples and redraws; [`App`] owns the terminal and the two threads.

mod app;
mod event;
mod input;
pub mod layout;
mod screen;
mod style;
mod updater;
pub mod widgets;

pub use app::App;
pub use input::{KeyAction, handle_key};
pub use layout::{Layout, build_layout};
pub use screen::{BufferScreen, DrawError, Screen};
pub use style::Theme;
pub use updater::Updater;
