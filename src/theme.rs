use ratatui::style::{Color, Modifier, Style};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

#[derive(Clone, Debug)]
pub struct Theme {
    #[allow(dead_code)]
    pub mode: ThemeMode,
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub selected: Color,
    pub success: Color,
    pub muted: Color,
}

impl Theme {
    pub fn slate_dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            bg: Color::Rgb(18, 20, 24),
            fg: Color::White,
            accent: Color::Rgb(97, 175, 239),
            selected: Color::Rgb(230, 150, 40),
            success: Color::Green,
            muted: Color::DarkGray,
        }
    }

    pub fn slate_light() -> Self {
        Self {
            mode: ThemeMode::Light,
            bg: Color::Rgb(246, 246, 248),
            fg: Color::Rgb(22, 24, 28),
            accent: Color::Rgb(30, 110, 200),
            selected: Color::Rgb(200, 110, 0),
            success: Color::Rgb(0, 140, 0),
            muted: Color::Rgb(120, 124, 132),
        }
    }

    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::slate_dark(),
            ThemeMode::Light => Self::slate_light(),
        }
    }

    /// Resolve a settings string; anything but "light" is the dark theme.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(n) if n.eq_ignore_ascii_case("light") => Self::from_mode(ThemeMode::Light),
            _ => Self::from_mode(ThemeMode::Dark),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate_dark()
    }
}

// Style helpers that use the theme
impl Theme {
    pub fn base_style(&self) -> Style {
        Style::default().bg(self.bg).fg(self.fg)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.selected)
    }

    pub fn border_unfocused(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn text_active_bold(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_editing_bold(&self) -> Style {
        Style::default()
            .fg(self.selected)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn list_cursor_style(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.selected)
            .add_modifier(Modifier::BOLD)
    }
}
