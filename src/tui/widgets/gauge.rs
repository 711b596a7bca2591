//! One-line and one-column bar gauges.
//!
//! ```text
//! CPU[|||||      30%]
//! ```

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::model::SystemStatus;
use crate::tui::screen::{DrawError, Screen};
use crate::tui::style::Theme;

use super::view::{
    LABEL_WIDTH, LabelAlign, Resource, ResourceView, fill_cells, insert_clipped, write_clipped,
};

const GAUGE: &str = "|";
const BLANK: &str = " ";
const LEFT: &str = "[";
const RIGHT: &str = "] ";

/// Label, `[`, fill, `] ` on a single row.
pub struct HorizontalGauge {
    label: String,
    resource: Resource,
    theme: Theme,
}

impl HorizontalGauge {
    pub fn new(label: impl Into<String>, resource: Resource, theme: Theme) -> Self {
        Self {
            label: label.into(),
            resource,
            theme,
        }
    }

    /// Fill length for a gauge `width` columns wide.
    pub fn resource_len(width: u16) -> u16 {
        width.saturating_sub(LABEL_WIDTH + (LEFT.len() + RIGHT.len()) as u16)
    }
}

impl ResourceView for HorizontalGauge {
    fn draw_label(&self, screen: &mut dyn Screen, area: Rect) -> Result<(), DrawError> {
        let label = LabelAlign::Left.apply(&self.label);
        write_clipped(screen, area, area.y, area.x, &label, self.theme.label)
    }

    fn draw_frame(&self, screen: &mut dyn Screen, area: Rect) -> Result<(), DrawError> {
        let left = area.x.saturating_add(LABEL_WIDTH);
        write_clipped(screen, area, area.y, left, LEFT, self.theme.frame)?;
        let right = left
            .saturating_add(LEFT.len() as u16)
            .saturating_add(Self::resource_len(area.width));
        write_clipped(screen, area, area.y, right, RIGHT, self.theme.frame)
    }

    fn calc_resource_area(&self, area: Rect) -> Rect {
        Rect {
            x: area.x.saturating_add(LABEL_WIDTH + LEFT.len() as u16),
            y: area.y,
            width: Self::resource_len(area.width),
            height: 1,
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
        let cells = fill_cells(&reading.bands(&self.theme), area.width as usize);
        for (offset, cell) in cells.into_iter().enumerate() {
            let col = area.x + offset as u16;
            match cell {
                Some(style) => write_clipped(screen, area, area.y, col, GAUGE, style)?,
                None => write_clipped(screen, area, area.y, col, BLANK, Style::default())?,
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

const V_WIDTH: u16 = 3;
const V_TOP: &str = "/=\\";
const V_BOTTOM: &str = "\\=/";
const V_GAUGE: &str = "|=|";
const V_BLANK: &str = "   ";

/// Three-column gauge filled bottom-up.
///
/// ```text
///  1
/// /=\
/// 30%
/// |=|
/// \=/
/// ```
pub struct VerticalGauge {
    label: String,
    resource: Resource,
    theme: Theme,
}

impl VerticalGauge {
    pub fn new(label: impl Into<String>, resource: Resource, theme: Theme) -> Self {
        Self {
            label: label.into(),
            resource,
            theme,
        }
    }

    pub const WIDTH: u16 = V_WIDTH;
}

impl ResourceView for VerticalGauge {
    fn draw_label(&self, screen: &mut dyn Screen, area: Rect) -> Result<(), DrawError> {
        let label = LabelAlign::Center.apply(&self.label);
        write_clipped(screen, area, area.y, area.x, &label, self.theme.label)
    }

    fn draw_frame(&self, screen: &mut dyn Screen, area: Rect) -> Result<(), DrawError> {
        if area.height >= 2 {
            write_clipped(screen, area, area.y + 1, area.x, V_TOP, self.theme.frame)?;
        }
        if area.height >= 3 {
            write_clipped(
                screen,
                area,
                area.bottom() - 1,
                area.x,
                V_BOTTOM,
                self.theme.frame,
            )?;
        }
        Ok(())
    }

    fn calc_resource_area(&self, area: Rect) -> Rect {
        Rect {
            x: area.x,
            y: area.y.saturating_add(2),
            width: area.width.min(V_WIDTH),
            height: area.height.saturating_sub(3),
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
        let cells = fill_cells(&reading.bands(&self.theme), area.height as usize);
        for (offset, cell) in cells.into_iter().enumerate() {
            let row = area.bottom() - 1 - offset as u16;
            match cell {
                Some(style) => insert_clipped(screen, area, row, area.x, V_GAUGE, style),
                None => insert_clipped(screen, area, row, area.x, V_BLANK, Style::default()),
            }
        }
        Ok(())
    }

    fn info_string(&self, status: &SystemStatus) -> Option<String> {
        let text = self.resource.resolve(status)?.percent_text();
        let cut: String = text.chars().take(V_WIDTH as usize).collect();
        Some(format!("{:>3}", cut))
    }

    fn info_style(&self) -> Style {
        self.theme.percent
    }
}
