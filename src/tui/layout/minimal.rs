use ratatui::layout::Rect;

use crate::model::SystemStatus;
use crate::tui::screen::{DrawError, Screen};
use crate::tui::style::Theme;
use crate::tui::widgets::{HorizontalGauge, InfoLine, Resource, ResourceView, VerticalGauge};

use super::{Layout, halves};

/// ```text
/// CPU[||     30%] MEM[|||||  50%]
/// Uptime 0:5:9, Load average ...
/// ```
pub struct HorizontalMinimalLayout {
    cpu: HorizontalGauge,
    memory: HorizontalGauge,
    info: InfoLine,
}

impl HorizontalMinimalLayout {
    pub const HEIGHT: u16 = 2;

    pub fn new(theme: Theme) -> Self {
        Self {
            cpu: HorizontalGauge::new("CPU", Resource::Cpu, theme),
            memory: HorizontalGauge::new("MEM", Resource::Memory, theme),
            info: InfoLine::new(theme),
        }
    }
}

impl Layout for HorizontalMinimalLayout {
    fn draw(&mut self, status: &SystemStatus, screen: &mut dyn Screen) -> Result<(), DrawError> {
        let size = screen.size();
        let (left, right) = halves(size.width);
        self.cpu
            .draw(status, screen, Rect::new(size.x, size.y, left, 1))?;
        self.memory
            .draw(status, screen, Rect::new(size.x + left, size.y, right, 1))?;
        self.info.draw(
            status,
            screen,
            Rect::new(size.x, size.y.saturating_add(1), size.width, 1),
        )
    }

    fn required_height(&self) -> Option<u16> {
        Some(Self::HEIGHT)
    }
}

/// CPU gauge over MEM gauge in one 3-wide column, info on the last row.
pub struct VerticalMinimalLayout {
    cpu: VerticalGauge,
    memory: VerticalGauge,
    info: InfoLine,
}

impl VerticalMinimalLayout {
    pub fn new(theme: Theme) -> Self {
        Self {
            cpu: VerticalGauge::new("CPU", Resource::Cpu, theme),
            memory: VerticalGauge::new("MEM", Resource::Memory, theme),
            info: InfoLine::new(theme),
        }
    }
}

impl Layout for VerticalMinimalLayout {
    fn draw(&mut self, status: &SystemStatus, screen: &mut dyn Screen) -> Result<(), DrawError> {
        let size = screen.size();
        if size.is_empty() {
            return Ok(());
        }
        let gauges = size.height - 1;
        let (top, bottom) = halves(gauges);
        let width = VerticalGauge::WIDTH;
        self.cpu
            .draw(status, screen, Rect::new(size.x, size.y, width, top))?;
        self.memory
            .draw(status, screen, Rect::new(size.x, size.y + top, width, bottom))?;
        self.info.draw(
            status,
            screen,
            Rect::new(size.x, size.y + gauges, size.width, 1),
        )
    }

    fn required_width(&self) -> Option<u16> {
        Some(VerticalGauge::WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::{draw, status};
    use super::*;

    #[test]
    fn test_horizontal_minimal() {
        let status = status(4);
        let mut layout = HorizontalMinimalLayout::new(Theme::mono());
        let rows = draw(&mut layout, &status, 60, 3);
        assert_eq!(&rows[0][..30], "CPU[|||||||              30%] ");
        assert_eq!(&rows[0][30..], "MEM[|||||||||4096M/8192M 50%] ");
        assert!(rows[1].starts_with("Uptime "));
        assert_eq!(rows[2].trim(), "");
    }

    #[test]
    fn test_vertical_minimal() {
        let status = status(4);
        let mut layout = VerticalMinimalLayout::new(Theme::mono());
        let rows = draw(&mut layout, &status, 3, 13);
        assert_eq!(rows[0], "CPU");
        assert_eq!(rows[1], "/=\\");
        assert_eq!(rows[2], "30%");
        assert_eq!(rows[5], "\\=/");
        assert_eq!(rows[6], "MEM");
        assert_eq!(rows[8], "50%");
        assert_eq!(rows[11], "\\=/");
        assert_eq!(rows[12], "Upt");
    }
}
