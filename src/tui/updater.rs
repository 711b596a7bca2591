//! Sample-then-render cycle.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::{debug, error};

use crate::error::MonitorError;
use crate::model::SystemStatus;

use super::layout::Layout;
use super::screen::{BufferScreen, DrawError, Screen};

/// Owns the status and layout; drives one cycle per [`update`](Self::update).
pub struct Updater {
    status: SystemStatus,
    layout: Box<dyn Layout>,
}

impl Updater {
    pub fn new(status: SystemStatus, layout: Box<dyn Layout>) -> Self {
        Self { status, layout }
    }

    pub fn status(&self) -> &SystemStatus {
        &self.status
    }

    /// One cycle: sample (blocking for the interval), then render.
    pub fn update<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), MonitorError> {
        self.sample()?;
        self.render(terminal)
    }

    fn sample(&mut self) -> Result<(), MonitorError> {
        self.status.sample().map_err(|e| {
            error!(error = %e, "sampling failed");
            MonitorError::from(e)
        })
    }

    /// Erases, draws the layout and flushes.
    ///
    /// A write cut off on the last row is dropped and the frame is still
    /// flushed; any other draw error is returned.
    pub fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), MonitorError> {
        let status = &self.status;
        let layout = &mut self.layout;
        let mut outcome: Result<(), DrawError> = Ok(());
        terminal.draw(|frame| {
            let area = frame.area();
            let mut screen = BufferScreen::new(frame.buffer_mut());
            screen.erase();
            if let Err(e) = layout.draw(status, &mut screen) {
                if e.is_terminal_edge(area) {
                    debug!(error = %e, "ignoring write at terminal edge");
                } else {
                    outcome = Err(e);
                }
            }
        })?;
        outcome?;
        debug!(
            cpu = %self.status.cpu(),
            memory = %self.status.memory(),
            "frame drawn"
        );
        Ok(())
    }

    /// Repeats sample and render until `stop` is raised or a cycle fails.
    /// The sampling window is the only pacing.
    ///
    /// Every frame is drawn while holding `gate`. Whoever raises `stop` and
    /// then takes `gate` is guaranteed that no further frame reaches the
    /// terminal.
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        stop: &AtomicBool,
        gate: &Mutex<()>,
    ) -> Result<(), MonitorError> {
        while !stop.load(Ordering::Relaxed) {
            self.sample()?;
            let _frame = gate.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            if stop.load(Ordering::Relaxed) {
                break;
            }
            self.render(terminal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Duration;

    use ratatui::backend::TestBackend;
    use ratatui::style::Style;

    use super::*;
    use crate::collector::fixture::FixedSource;
    use crate::tui::layout::HorizontalDefaultLayout;
    use crate::tui::screen::test_util::rows;
    use crate::tui::style::Theme;

    fn status(source: FixedSource) -> SystemStatus {
        SystemStatus::new(Box::new(source), Duration::ZERO).unwrap()
    }

    /// Writes `text` at a fixed position, bypassing view clipping.
    struct RawWrite {
        row_from_bottom: u16,
        col_from_right: u16,
        text: &'static str,
    }

    impl Layout for RawWrite {
        fn draw(&mut self, _: &SystemStatus, screen: &mut dyn Screen) -> Result<(), DrawError> {
            let size = screen.size();
            screen.write_at(
                size.bottom() - 1 - self.row_from_bottom,
                size.right() - 1 - self.col_from_right,
                self.text,
                Style::default(),
            )
        }
    }

    #[test]
    fn test_update_draws_layout() {
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        let layout = HorizontalDefaultLayout::new(4, Theme::mono());
        let mut updater = Updater::new(status(FixedSource::four_cores()), Box::new(layout));

        updater.update(&mut terminal).unwrap();
        let rows = rows(terminal.backend().buffer());
        assert!(rows[0].starts_with("CPU["));
        assert!(rows[0].ends_with("30%] "));
        assert!(rows[3].starts_with("MEM["));
        assert!(rows[5].starts_with("Uptime "));
        assert_eq!(updater.status().process_count().0, 321);
    }

    #[test]
    fn test_terminal_edge_error_is_swallowed() {
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        let edge = RawWrite {
            row_from_bottom: 0,
            col_from_right: 0,
            text: "xy",
        };
        let mut updater = Updater::new(status(FixedSource::four_cores()), Box::new(edge));
        updater.update(&mut terminal).unwrap();
        assert_eq!(rows(terminal.backend().buffer())[2], "         x");
    }

    #[test]
    fn test_other_draw_errors_propagate() {
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        let overflow = RawWrite {
            row_from_bottom: 1,
            col_from_right: 0,
            text: "xy",
        };
        let mut updater = Updater::new(status(FixedSource::four_cores()), Box::new(overflow));
        let err = updater.update(&mut terminal).unwrap_err();
        assert!(matches!(
            err,
            MonitorError::Draw(DrawError::Truncated { row: 1, .. })
        ));
    }

    #[test]
    fn test_source_failure_ends_cycle() {
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        let mut source = FixedSource::four_cores();
        source.fail_memory = true;
        let layout = HorizontalDefaultLayout::new(4, Theme::mono());
        let mut updater = Updater::new(status(source), Box::new(layout));
        let stop = AtomicBool::new(false);
        let err = updater
            .run(&mut terminal, &stop, &Mutex::new(()))
            .unwrap_err();
        assert!(matches!(err, MonitorError::Source(_)));
    }

    #[test]
    fn test_run_honors_stop_flag() {
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        let layout = HorizontalDefaultLayout::new(4, Theme::mono());
        let mut updater = Updater::new(status(FixedSource::four_cores()), Box::new(layout));
        let stop = AtomicBool::new(true);
        updater.run(&mut terminal, &stop, &Mutex::new(())).unwrap();
        assert_eq!(updater.status().process_count().0, 0);
    }

    #[test]
    fn test_no_frame_after_teardown_takes_gate() {
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        let layout = HorizontalDefaultLayout::new(4, Theme::mono());
        let mut updater = Updater::new(status(FixedSource::four_cores()), Box::new(layout));
        let stop = AtomicBool::new(false);
        let gate = Mutex::new(());

        let teardown = gate.lock().unwrap();
        thread::scope(|s| {
            let render = s.spawn(|| updater.run(&mut terminal, &stop, &gate));
            // Let the loop finish sampling and block on the gate.
            thread::sleep(Duration::from_millis(50));
            stop.store(true, Ordering::Relaxed);
            drop(teardown);
            render.join().unwrap().unwrap();
        });

        assert!(rows(terminal.backend().buffer()).iter().all(|r| r.trim().is_empty()));
    }
}
