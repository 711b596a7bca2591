//! Layout policies.
//!
//! A layout owns its views and, on every draw, partitions the current
//! screen among them. Each layout also declares the extent it needs on the
//! axis it does not fill, so a new pane can be sized before drawing starts.
//!
//! | Density | Horizontal | Vertical |
//! |---------|------------|----------|
//! | minimal | CPU and MEM side by side, info below | CPU over MEM, 3 wide |
//! | normal  | CPU, one row per two cores, MEM, SWP | one column per gauge |
//! | stack   | CPU and MEM history side by side | CPU history over MEM history |

mod minimal;
mod normal;
mod stacked;

pub use minimal::{HorizontalMinimalLayout, VerticalMinimalLayout};
pub use normal::{HorizontalDefaultLayout, VerticalDefaultLayout};
pub use stacked::{HorizontalStackedLayout, VerticalStackedLayout};

use crate::config::{Density, Orientation};
use crate::model::SystemStatus;
use crate::tui::screen::{DrawError, Screen};
use crate::tui::style::Theme;

/// Spatial arrangement of views on the screen.
pub trait Layout: Send {
    /// Draws every view into the current screen size.
    fn draw(&mut self, status: &SystemStatus, screen: &mut dyn Screen) -> Result<(), DrawError>;

    /// Minimum width, or `None` to fill whatever is available.
    fn required_width(&self) -> Option<u16> {
        None
    }

    /// Minimum height, or `None` to fill whatever is available.
    fn required_height(&self) -> Option<u16> {
        None
    }
}

/// Builds the layout for a density and orientation pair.
pub fn build_layout(
    density: Density,
    orientation: Orientation,
    core_count: usize,
    theme: Theme,
) -> Box<dyn Layout> {
    match (density, orientation) {
        (Density::Minimal, Orientation::Horizontal) => Box::new(HorizontalMinimalLayout::new(theme)),
        (Density::Minimal, Orientation::Vertical) => Box::new(VerticalMinimalLayout::new(theme)),
        (Density::Normal, Orientation::Horizontal) => {
            Box::new(HorizontalDefaultLayout::new(core_count, theme))
        }
        (Density::Normal, Orientation::Vertical) => {
            Box::new(VerticalDefaultLayout::new(core_count, theme))
        }
        (Density::Stack, Orientation::Horizontal) => Box::new(HorizontalStackedLayout::new(theme)),
        (Density::Stack, Orientation::Vertical) => Box::new(VerticalStackedLayout::new(theme)),
    }
}

/// Rows (or columns) used by `core_count` per-core gauges, two per line.
pub(crate) fn core_lines(core_count: usize) -> u16 {
    u16::try_from(core_count.div_ceil(2)).unwrap_or(u16::MAX)
}

/// Splits `len` into a first half and the remainder.
pub(crate) fn halves(len: u16) -> (u16, u16) {
    let first = len / 2;
    (first, len - first)
}

#[cfg(test)]
pub(crate) mod test_util {
    use std::time::Duration;

    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    use super::Layout;
    use crate::collector::fixture::FixedSource;
    use crate::model::SystemStatus;
    use crate::tui::screen::BufferScreen;
    use crate::tui::screen::test_util::rows;

    pub fn status(cores: usize) -> SystemStatus {
        let mut source = FixedSource::four_cores();
        source.cores = cores;
        let mut status = SystemStatus::new(Box::new(source), Duration::ZERO).unwrap();
        status.sample().unwrap();
        status
    }

    /// Draws `layout` once onto a `width` x `height` screen.
    pub fn draw(
        layout: &mut dyn Layout,
        status: &SystemStatus,
        width: u16,
        height: u16,
    ) -> Vec<String> {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        let mut screen = BufferScreen::new(&mut buf);
        layout.draw(status, &mut screen).unwrap();
        rows(&buf)
    }
}
