//! Uptime, load average and process count on one line.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::model::SystemStatus;
use crate::tui::screen::{DrawError, Screen};
use crate::tui::style::Theme;

use super::view::write_clipped;

pub struct InfoLine {
    theme: Theme,
}

impl InfoLine {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Text pieces in display order, each with its own style.
    pub fn segments(&self, status: &SystemStatus) -> Vec<(String, Style)> {
        let theme = &self.theme;
        let [avg1, avg5, avg15] = status.load_average().parts();
        vec![
            ("Uptime ".to_string(), theme.label),
            (status.uptime().to_string(), theme.uptime),
            (", Load average ".to_string(), theme.label),
            (avg1, theme.loadavg1),
            (" ".to_string(), theme.label),
            (avg5, theme.loadavg5),
            (" ".to_string(), theme.label),
            (avg15, theme.loadavg15),
            (", Processes ".to_string(), theme.label),
            (status.process_count().to_string(), theme.procs),
        ]
    }

    /// Writes the segments left to right on the top row of `area`, cut at
    /// its right edge.
    pub fn draw(
        &self,
        status: &SystemStatus,
        screen: &mut dyn Screen,
        area: Rect,
    ) -> Result<(), DrawError> {
        let area = area.intersection(screen.size());
        if area.is_empty() {
            return Ok(());
        }
        let mut col = area.x;
        for (text, style) in self.segments(status) {
            if col >= area.right() {
                break;
            }
            write_clipped(screen, area, area.y, col, &text, style)?;
            col = col.saturating_add(text.chars().count() as u16);
        }
        Ok(())
    }
}
