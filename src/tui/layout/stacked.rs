use ratatui::layout::Rect;

use crate::model::SystemStatus;
use crate::tui::screen::{DrawError, Screen};
use crate::tui::style::Theme;
use crate::tui::widgets::{InfoLine, LabelAlign, Resource, ResourceView, StackedChart};

use super::{Layout, halves};

/// CPU and MEM history charts side by side above the info line.
pub struct HorizontalStackedLayout {
    cpu: StackedChart,
    memory: StackedChart,
    info: InfoLine,
}

impl HorizontalStackedLayout {
    pub const HEIGHT: u16 = 10;

    pub fn new(theme: Theme) -> Self {
        Self {
            cpu: StackedChart::new("CPU", Resource::Cpu, LabelAlign::Left, theme),
            memory: StackedChart::new("MEM", Resource::Memory, LabelAlign::Left, theme),
            info: InfoLine::new(theme),
        }
    }
}

impl Layout for HorizontalStackedLayout {
    fn draw(&mut self, status: &SystemStatus, screen: &mut dyn Screen) -> Result<(), DrawError> {
        let size = screen.size();
        if size.is_empty() {
            return Ok(());
        }
        let charts = size.height - 1;
        let (left, right) = halves(size.width);
        self.cpu
            .draw(status, screen, Rect::new(size.x, size.y, left, charts))?;
        self.memory
            .draw(status, screen, Rect::new(size.x + left, size.y, right, charts))?;
        self.info.draw(
            status,
            screen,
            Rect::new(size.x, size.y + charts, size.width, 1),
        )
    }

    fn required_height(&self) -> Option<u16> {
        Some(Self::HEIGHT)
    }
}

/// CPU history chart over MEM history chart above the info line.
pub struct VerticalStackedLayout {
    cpu: StackedChart,
    memory: StackedChart,
    info: InfoLine,
}

impl VerticalStackedLayout {
    pub const WIDTH: u16 = 30;

    pub fn new(theme: Theme) -> Self {
        Self {
            cpu: StackedChart::new("CPU", Resource::Cpu, LabelAlign::Center, theme),
            memory: StackedChart::new("MEM", Resource::Memory, LabelAlign::Center, theme),
            info: InfoLine::new(theme),
        }
    }
}

impl Layout for VerticalStackedLayout {
    fn draw(&mut self, status: &SystemStatus, screen: &mut dyn Screen) -> Result<(), DrawError> {
        let size = screen.size();
        if size.is_empty() {
            return Ok(());
        }
        let charts = size.height - 1;
        let (top, bottom) = halves(charts);
        self.cpu
            .draw(status, screen, Rect::new(size.x, size.y, size.width, top))?;
        self.memory
            .draw(status, screen, Rect::new(size.x, size.y + top, size.width, bottom))?;
        self.info.draw(
            status,
            screen,
            Rect::new(size.x, size.y + charts, size.width, 1),
        )
    }

    fn required_width(&self) -> Option<u16> {
        Some(Self::WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::{draw, status};
    use super::*;

    #[test]
    fn test_horizontal_stacked() {
        let status = status(4);
        let mut layout = HorizontalStackedLayout::new(Theme::mono());
        let rows = draw(&mut layout, &status, 40, 5);

        assert_eq!(&rows[0][..4], "CPU|");
        assert!(rows[0][..20].ends_with("30%"));
        assert_eq!(&rows[0][20..24], "MEM|");
        assert!(rows[0].ends_with("4096M/8192M 50%"));
        assert_eq!(&rows[3][..4], "   |");
        // newest CPU column at the right edge of the left half
        assert_eq!(&rows[3][19..20], "|");
        assert_eq!(&rows[3][18..19], " ");
        assert!(rows[4].starts_with("Uptime "));
    }

    #[test]
    fn test_vertical_stacked() {
        let status = status(4);
        let mut layout = VerticalStackedLayout::new(Theme::mono());
        let rows = draw(&mut layout, &status, 30, 9);

        assert_eq!(&rows[0][..4], "CPU|");
        assert!(rows[0].ends_with("30%"));
        assert_eq!(&rows[3][..4], "   |");
        assert_eq!(&rows[4][..4], "MEM|");
        assert!(rows[4].ends_with("4096M/8192M 50%"));
        assert_eq!(&rows[7][29..], "|");
        assert!(rows[8].starts_with("Uptime "));
    }

    #[test]
    fn test_stacked_history_accumulates() {
        let status = status(4);
        let mut layout = HorizontalStackedLayout::new(Theme::mono());
        draw(&mut layout, &status, 40, 5);
        let rows = draw(&mut layout, &status, 40, 5);
        assert_eq!(&rows[3][18..20], "||");
        assert_eq!(&rows[3][17..18], " ");
    }
}
