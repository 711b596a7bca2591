use ratatui::layout::Rect;

use crate::model::SystemStatus;
use crate::tui::screen::{DrawError, Screen};
use crate::tui::style::Theme;
use crate::tui::widgets::{HorizontalGauge, InfoLine, Resource, ResourceView, VerticalGauge};

use super::{Layout, core_lines, halves};

/// Gap between vertical gauge columns.
const COLUMN_GAP: u16 = 1;

fn core_gauges<G>(core_count: usize, make: impl Fn(String, Resource) -> G) -> Vec<G> {
    (0..core_count)
        .map(|index| make((index + 1).to_string(), Resource::Core(index)))
        .collect()
}

/// Full-width CPU gauge, per-core gauges two per row, then MEM, SWP and
/// the info line.
///
/// Core `i` sits on row `1 + i / 2`, in the left half when `i` is even
/// and the right half when odd.
pub struct HorizontalDefaultLayout {
    cpu: HorizontalGauge,
    cores: Vec<HorizontalGauge>,
    memory: HorizontalGauge,
    swap: HorizontalGauge,
    info: InfoLine,
}

impl HorizontalDefaultLayout {
    pub fn new(core_count: usize, theme: Theme) -> Self {
        Self {
            cpu: HorizontalGauge::new("CPU", Resource::Cpu, theme),
            cores: core_gauges(core_count, |label, resource| {
                HorizontalGauge::new(label, resource, theme)
            }),
            memory: HorizontalGauge::new("MEM", Resource::Memory, theme),
            swap: HorizontalGauge::new("SWP", Resource::Swap, theme),
            info: InfoLine::new(theme),
        }
    }

    fn core_rows(&self) -> u16 {
        core_lines(self.cores.len())
    }
}

impl Layout for HorizontalDefaultLayout {
    fn draw(&mut self, status: &SystemStatus, screen: &mut dyn Screen) -> Result<(), DrawError> {
        let size = screen.size();
        let (left, right) = halves(size.width);
        let row = |offset: u16| size.y.saturating_add(offset);

        self.cpu
            .draw(status, screen, Rect::new(size.x, size.y, size.width, 1))?;
        for (index, gauge) in self.cores.iter_mut().enumerate() {
            let y = row(1 + (index / 2) as u16);
            let area = if index % 2 == 0 {
                Rect::new(size.x, y, left, 1)
            } else {
                Rect::new(size.x + left, y, right, 1)
            };
            gauge.draw(status, screen, area)?;
        }

        let below = 1 + self.core_rows();
        self.memory
            .draw(status, screen, Rect::new(size.x, row(below), size.width, 1))?;
        self.swap
            .draw(status, screen, Rect::new(size.x, row(below + 1), size.width, 1))?;
        self.info
            .draw(status, screen, Rect::new(size.x, row(below + 2), size.width, 1))
    }

    fn required_height(&self) -> Option<u16> {
        Some(self.core_rows().saturating_add(4))
    }
}

/// One 3-wide column per gauge: CPU, per-core columns holding two cores
/// each, MEM, SWP. The info line takes the last row.
///
/// Core `i` sits in column `1 + i / 2`, in the top half when `i` is even
/// and the bottom half when odd.
pub struct VerticalDefaultLayout {
    cpu: VerticalGauge,
    cores: Vec<VerticalGauge>,
    memory: VerticalGauge,
    swap: VerticalGauge,
    info: InfoLine,
}

impl VerticalDefaultLayout {
    pub fn new(core_count: usize, theme: Theme) -> Self {
        Self {
            cpu: VerticalGauge::new("CPU", Resource::Cpu, theme),
            cores: core_gauges(core_count, |label, resource| {
                VerticalGauge::new(label, resource, theme)
            }),
            memory: VerticalGauge::new("MEM", Resource::Memory, theme),
            swap: VerticalGauge::new("SWP", Resource::Swap, theme),
            info: InfoLine::new(theme),
        }
    }

    fn core_columns(&self) -> u16 {
        core_lines(self.cores.len())
    }

    fn column_x(origin: u16, column: u16) -> u16 {
        origin.saturating_add(column.saturating_mul(VerticalGauge::WIDTH + COLUMN_GAP))
    }
}

impl Layout for VerticalDefaultLayout {
    fn draw(&mut self, status: &SystemStatus, screen: &mut dyn Screen) -> Result<(), DrawError> {
        let size = screen.size();
        if size.is_empty() {
            return Ok(());
        }
        let gauges = size.height - 1;
        let (top, bottom) = halves(gauges);
        let width = VerticalGauge::WIDTH;
        let column = |index: u16| Rect::new(Self::column_x(size.x, index), size.y, width, gauges);

        self.cpu.draw(status, screen, column(0))?;
        for (index, gauge) in self.cores.iter_mut().enumerate() {
            let x = Self::column_x(size.x, 1 + (index / 2) as u16);
            let area = if index % 2 == 0 {
                Rect::new(x, size.y, width, top)
            } else {
                Rect::new(x, size.y + top, width, bottom)
            };
            gauge.draw(status, screen, area)?;
        }

        let after = 1 + self.core_columns();
        self.memory.draw(status, screen, column(after))?;
        self.swap.draw(status, screen, column(after + 1))?;
        self.info.draw(
            status,
            screen,
            Rect::new(size.x, size.y + gauges, size.width, 1),
        )
    }

    fn required_width(&self) -> Option<u16> {
        let columns = self.core_columns().saturating_add(3);
        Some(
            columns
                .saturating_mul(VerticalGauge::WIDTH + COLUMN_GAP)
                .saturating_sub(COLUMN_GAP),
        )
    }
}
