//! Draw protocol shared by every resource view.
//!
//! A view renders one reading into a rectangle in four phases: label,
//! frame, resource fill, info text. Every write is clipped to the
//! rectangle, so a view never touches cells outside it and never fails
//! because the rectangle is too small.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::model::{CpuReading, MemoryReading, SystemStatus};
use crate::tui::screen::{DrawError, Screen};
use crate::tui::style::Theme;

/// Fixed width of a view label.
pub const LABEL_WIDTH: u16 = 3;

/// Placement of the label inside its 3 columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAlign {
    Left,
    Center,
}

impl LabelAlign {
    /// Cuts `label` to the label width and pads it.
    pub fn apply(self, label: &str) -> String {
        let cut: String = label.chars().take(LABEL_WIDTH as usize).collect();
        match self {
            LabelAlign::Left => format!("{:<3}", cut),
            LabelAlign::Center => format!("{:^3}", cut),
        }
    }
}

/// Which reading of [`SystemStatus`] a view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Cpu,
    Core(usize),
    Memory,
    Swap,
}

impl Resource {
    pub fn resolve(self, status: &SystemStatus) -> Option<Reading<'_>> {
        match self {
            Resource::Cpu => Some(Reading::Cpu(status.cpu())),
            Resource::Core(index) => status.cores().get(index).map(Reading::Cpu),
            Resource::Memory => Some(Reading::Memory(status.memory())),
            Resource::Swap => Some(Reading::Memory(status.swap())),
        }
    }

    pub fn is_cpu(self) -> bool {
        matches!(self, Resource::Cpu | Resource::Core(_))
    }
}

/// Borrowed reading, valid for one draw.
#[derive(Debug, Clone, Copy)]
pub enum Reading<'a> {
    Cpu(&'a CpuReading),
    Memory(&'a MemoryReading),
}

impl Reading<'_> {
    /// Fill bands as `(ratio, style)`, starting at the gauge baseline.
    ///
    /// CPU: user then system. Memory: used.
    pub fn bands(&self, theme: &Theme) -> Vec<(f64, Style)> {
        match self {
            Reading::Cpu(cpu) => vec![
                (cpu.user().ratio(), theme.cpu_user),
                (cpu.system().ratio(), theme.cpu_system),
            ],
            Reading::Memory(mem) => vec![(mem.percent().ratio(), theme.mem_used)],
        }
    }

    /// Full info text: `"30%"` for CPU, `"4096M/8192M 50%"` for memory.
    pub fn info(&self) -> String {
        match self {
            Reading::Cpu(cpu) => cpu.used().to_string(),
            Reading::Memory(mem) => mem.to_string(),
        }
    }

    /// Percent text only.
    pub fn percent_text(&self) -> String {
        match self {
            Reading::Cpu(cpu) => cpu.used().to_string(),
            Reading::Memory(mem) => mem.percent().to_string(),
        }
    }
}

/// Number of cells for each band of a gauge `len` cells long.
///
/// Each band is rounded half-up, then clamped so the running total stays
/// within `0..=len`.
pub fn band_cells(ratios: &[f64], len: usize) -> Vec<usize> {
    let mut remaining = len;
    ratios
        .iter()
        .map(|ratio| {
            let scaled = (ratio * len as f64 + 0.5).floor();
            let cells = if scaled.is_finite() && scaled > 0.0 {
                (scaled as usize).min(remaining)
            } else {
                0
            };
            remaining -= cells;
            cells
        })
        .collect()
}

/// Style of each cell of a gauge, baseline first. `None` is blank.
pub fn fill_cells(bands: &[(f64, Style)], len: usize) -> Vec<Option<Style>> {
    let ratios: Vec<f64> = bands.iter().map(|(ratio, _)| *ratio).collect();
    let mut cells = Vec::with_capacity(len);
    for (count, (_, style)) in band_cells(&ratios, len).into_iter().zip(bands) {
        cells.extend(std::iter::repeat_n(Some(*style), count));
    }
    cells.resize(len, None);
    cells
}

/// Part of `text` starting at `col` that lies inside `area` columns.
fn clip<'t>(area: Rect, row: u16, col: u16, text: &'t str) -> Option<(u16, &'t str)> {
    if row < area.top() || row >= area.bottom() || col >= area.right() {
        return None;
    }
    let skip = area.left().saturating_sub(col) as usize;
    let start = col.max(area.left());
    let room = (area.right() - start) as usize;
    let begin = text.char_indices().nth(skip).map(|(i, _)| i)?;
    let rest = &text[begin..];
    let end = rest
        .char_indices()
        .nth(room)
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    Some((start, &rest[..end]))
}

/// Overwrites the part of `text` that falls inside `area`.
pub fn write_clipped(
    screen: &mut dyn Screen,
    area: Rect,
    row: u16,
    col: u16,
    text: &str,
    style: Style,
) -> Result<(), DrawError> {
    match clip(area, row, col, text) {
        Some((start, shown)) => screen.write_at(row, start, shown, style),
        None => Ok(()),
    }
}

/// Inserts the part of `text` that falls inside `area`.
pub fn insert_clipped(
    screen: &mut dyn Screen,
    area: Rect,
    row: u16,
    col: u16,
    text: &str,
    style: Style,
) {
    if let Some((start, shown)) = clip(area, row, col, text) {
        screen.insert_at(row, start, shown, style);
    }
}

/// A view of one resource inside an allotted rectangle.
pub trait ResourceView {
    fn draw_label(&self, screen: &mut dyn Screen, area: Rect) -> Result<(), DrawError>;

    fn draw_frame(&self, screen: &mut dyn Screen, area: Rect) -> Result<(), DrawError>;

    /// The fill region left after label and frame. May be empty.
    fn calc_resource_area(&self, area: Rect) -> Rect;

    fn draw_resource(
        &mut self,
        status: &SystemStatus,
        screen: &mut dyn Screen,
        area: Rect,
    ) -> Result<(), DrawError>;

    fn info_string(&self, status: &SystemStatus) -> Option<String>;

    fn info_style(&self) -> Style;

    /// Writes the info text right-aligned on the top row of `area`, cut to
    /// the area width.
    fn draw_info(
        &self,
        status: &SystemStatus,
        screen: &mut dyn Screen,
        area: Rect,
    ) -> Result<(), DrawError> {
        let Some(text) = self.info_string(status) else {
            return Ok(());
        };
        let shown: String = text.chars().take(area.width as usize).collect();
        if shown.is_empty() {
            return Ok(());
        }
        let col = area.right() - shown.chars().count() as u16;
        write_clipped(screen, area, area.top(), col, &shown, self.info_style())
    }

    /// Runs the four phases inside `area` clipped to the screen.
    fn draw(
        &mut self,
        status: &SystemStatus,
        screen: &mut dyn Screen,
        area: Rect,
    ) -> Result<(), DrawError> {
        let area = area.intersection(screen.size());
        if area.is_empty() {
            return Ok(());
        }
        self.draw_label(screen, area)?;
        self.draw_frame(screen, area)?;
        let inner = self.calc_resource_area(area);
        if inner.is_empty() {
            return Ok(());
        }
        self.draw_resource(status, screen, inner)?;
        self.draw_info(status, screen, inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::style::Color;

    use crate::tui::screen::BufferScreen;
    use crate::tui::screen::test_util::rows;

    #[test]
    fn test_label_align() {
        assert_eq!(LabelAlign::Left.apply("1"), "1  ");
        assert_eq!(LabelAlign::Center.apply("1"), " 1 ");
        assert_eq!(LabelAlign::Center.apply("MEMORY"), "MEM");
        assert_eq!(LabelAlign::Left.apply(""), "   ");
    }

    #[test]
    fn test_band_cells_round_half_up() {
        assert_eq!(band_cells(&[0.25, 0.05], 14), vec![4, 1]);
        assert_eq!(band_cells(&[0.5], 3), vec![2]);
        assert_eq!(band_cells(&[0.0, 0.0], 10), vec![0, 0]);
    }

    #[test]
    fn test_band_cells_never_exceed_len() {
        for len in 0..40 {
            for step in 0..=24 {
                let user = step as f64 * 0.05;
                let cells = band_cells(&[user, 1.2 - user], len);
                assert!(cells.iter().sum::<usize>() <= len);
            }
        }
        assert_eq!(band_cells(&[-0.5, f64::NAN, 3.0], 5), vec![0, 0, 5]);
    }

    #[test]
    fn test_fill_cells_order() {
        let user = Style::default().fg(Color::Green);
        let system = Style::default().fg(Color::Red);
        let cells = fill_cells(&[(0.5, user), (0.25, system)], 4);
        assert_eq!(cells, vec![Some(user), Some(user), Some(system), None]);
    }

    #[test]
    fn test_write_clipped_stays_inside() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 2));
        let mut screen = BufferScreen::new(&mut buf);
        let area = Rect::new(2, 0, 4, 1);
        write_clipped(&mut screen, area, 0, 0, "abcdefgh", Style::default()).unwrap();
        write_clipped(&mut screen, area, 1, 2, "zzz", Style::default()).unwrap();
        insert_clipped(&mut screen, area, 0, 5, "XY", Style::default());
        assert_eq!(rows(&buf), vec!["  cdeX    ", "          "]);
    }
}
