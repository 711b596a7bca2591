//! Scrolling history chart.
//!
//! One column per past sample, newest at the right edge:
//!
//! ```text
//! CPU|  30%
//!    |   |
//!    | |||
//! ```

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::model::{CpuReading, MemoryReading, ResourceHistory, SystemStatus};
use crate::tui::screen::{DrawError, Screen};
use crate::tui::style::Theme;

use super::view::{
    LABEL_WIDTH, LabelAlign, Reading, Resource, ResourceView, fill_cells, insert_clipped,
    write_clipped,
};

const FRAME: &str = "|";
const GAUGE: &str = "|";
const BLANK: &str = " ";

/// Past readings of the charted resource.
#[derive(Debug, Clone)]
enum ChartHistory {
    Cpu(ResourceHistory<CpuReading>),
    Memory(ResourceHistory<MemoryReading>),
}

impl ChartHistory {
    fn for_resource(resource: Resource) -> Self {
        if resource.is_cpu() {
            ChartHistory::Cpu(ResourceHistory::new())
        } else {
            ChartHistory::Memory(ResourceHistory::new())
        }
    }

    /// Resizes to `width` samples and appends a copy of `reading`.
    fn record(&mut self, reading: Reading<'_>, width: usize) {
        match (self, reading) {
            (ChartHistory::Cpu(history), Reading::Cpu(cpu)) => {
                history.pack(width);
                history.push(cpu, width);
            }
            (ChartHistory::Memory(history), Reading::Memory(mem)) => {
                history.pack(width);
                history.push(mem, width);
            }
            _ => {}
        }
    }

    fn columns(&self) -> Vec<Reading<'_>> {
        match self {
            ChartHistory::Cpu(history) => history.iter().map(Reading::Cpu).collect(),
            ChartHistory::Memory(history) => history.iter().map(Reading::Memory).collect(),
        }
    }
}

/// Label and `|` frame on the left, history columns filling the rest.
pub struct StackedChart {
    label: String,
    resource: Resource,
    align: LabelAlign,
    theme: Theme,
    history: ChartHistory,
}

impl StackedChart {
    pub fn new(
        label: impl Into<String>,
        resource: Resource,
        align: LabelAlign,
        theme: Theme,
    ) -> Self {
        Self {
            label: label.into(),
            resource,
            align,
            theme,
            history: ChartHistory::for_resource(resource),
        }
    }
}

impl ResourceView for StackedChart {
    fn draw_label(&self, screen: &mut dyn Screen, area: Rect) -> Result<(), DrawError> {
        let label = self.align.apply(&self.label);
        write_clipped(screen, area, area.y, area.x, &label, self.theme.label)
    }

    fn draw_frame(&self, screen: &mut dyn Screen, area: Rect) -> Result<(), DrawError> {
        let col = area.x.saturating_add(LABEL_WIDTH);
        for row in area.top()..area.bottom() {
            write_clipped(screen, area, row, col, FRAME, self.theme.frame)?;
        }
        Ok(())
    }

    fn calc_resource_area(&self, area: Rect) -> Rect {
        let frame = LABEL_WIDTH + FRAME.len() as u16;
        Rect {
            x: area.x.saturating_add(frame),
            y: area.y,
            width: area.width.saturating_sub(frame),
            height: area.height,
        }
    }

    fn draw_resource(
        &mut self,
        status: &SystemStatus,
        screen: &mut dyn Screen,
        area: Rect,
    ) -> Result<(), DrawError> {
        let Some(reading) = self.resource.resolve(status) else {
            return Ok(());
        };
        self.history.record(reading, area.width as usize);

        for (offset, column) in self.history.columns().into_iter().enumerate() {
            let col = area.x + offset as u16;
            let cells = fill_cells(&column.bands(&self.theme), area.height as usize);
            for (depth, cell) in cells.into_iter().enumerate() {
                let row = area.bottom() - 1 - depth as u16;
                match cell {
                    Some(style) => insert_clipped(screen, area, row, col, GAUGE, style),
                    None => insert_clipped(screen, area, row, col, BLANK, Style::default()),
                }
            }
        }
        Ok(())
    }

    fn info_string(&self, status: &SystemStatus) -> Option<String> {
        self.resource.resolve(status).map(|reading| reading.info())
    }

    fn info_style(&self) -> Style {
        self.theme.percent
    }
}
