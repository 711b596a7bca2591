//! Color themes.

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeName;

/// Base palette shared by the themes.
struct Palette;

impl Palette {
    fn plain() -> Style {
        Style::default()
    }

    fn fg(color: Color) -> Style {
        Style::default().fg(color)
    }

    fn bold(color: Color) -> Style {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Bold black, rendered as gray by most terminals.
    fn gray() -> Style {
        Self::bold(Color::DarkGray)
    }
}

/// Style for every themed element. Passed by value to each view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub label: Style,
    pub frame: Style,
    pub percent: Style,
    pub cpu_user: Style,
    pub cpu_system: Style,
    pub mem_used: Style,
    pub uptime: Style,
    pub loadavg1: Style,
    pub loadavg5: Style,
    pub loadavg15: Style,
    pub procs: Style,
}

impl Theme {
    /// Terminal default colors everywhere.
    pub fn mono() -> Self {
        let plain = Palette::plain();
        Self {
            label: plain,
            frame: plain,
            percent: plain,
            cpu_user: plain,
            cpu_system: plain,
            mem_used: plain,
            uptime: plain,
            loadavg1: plain,
            loadavg5: plain,
            loadavg15: plain,
            procs: plain,
        }
    }

    pub fn standard() -> Self {
        Self {
            percent: Palette::gray(),
            cpu_user: Palette::fg(Color::Green),
            cpu_system: Palette::fg(Color::Red),
            mem_used: Palette::fg(Color::Green),
            uptime: Palette::fg(Color::Green),
            loadavg1: Palette::gray(),
            loadavg5: Palette::fg(Color::Gray),
            loadavg15: Palette::bold(Color::White),
            procs: Palette::fg(Color::Green),
            ..Self::mono()
        }
    }

    pub fn bright() -> Self {
        Self {
            label: Palette::fg(Color::Gray),
            percent: Palette::bold(Color::White),
            cpu_user: Palette::bold(Color::Green),
            cpu_system: Palette::bold(Color::Red),
            mem_used: Palette::bold(Color::Green),
            uptime: Palette::fg(Color::Yellow),
            loadavg1: Palette::gray(),
            loadavg5: Palette::fg(Color::Gray),
            loadavg15: Palette::bold(Color::White),
            procs: Palette::fg(Color::Yellow),
            ..Self::mono()
        }
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Mono => Self::mono(),
            ThemeName::Default => Self::standard(),
            ThemeName::Bright => Self::bright(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mono_is_plain() {
        let theme = Theme::mono();
        assert_eq!(theme.cpu_user, Style::default());
        assert_eq!(theme.cpu_user, theme.cpu_system);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name(ThemeName::Mono), Theme::mono());
        let standard = Theme::from_name(ThemeName::Default);
        assert_eq!(standard.cpu_user.fg, Some(Color::Green));
        assert_eq!(standard.cpu_system.fg, Some(Color::Red));
        assert_eq!(standard.label, Style::default());
        let bright = Theme::from_name(ThemeName::Bright);
        assert!(bright.cpu_user.add_modifier.contains(Modifier::BOLD));
        assert_eq!(bright.procs.fg, Some(Color::Yellow));
    }
}
