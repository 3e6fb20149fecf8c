//! Dark and light palettes plus color utilities.

use crate::notifications::NotificationLevel;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggle(&self) -> ThemeMode {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub bg_highlight: Color,
    pub accent: Color,
    pub accent_dim: Color,
    pub text: Color,
    pub text_dim: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_focus: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(16, 18, 24),
            bg_highlight: Color::Rgb(38, 42, 54),
            accent: Color::Rgb(122, 162, 247),
            accent_dim: Color::Rgb(68, 92, 142),
            text: Color::Rgb(220, 223, 228),
            text_dim: Color::Rgb(140, 146, 160),
            text_muted: Color::Rgb(88, 92, 104),
            border: Color::Rgb(64, 68, 82),
            border_focus: Color::Rgb(122, 162, 247),
            success: Color::Rgb(152, 195, 121),
            warning: Color::Rgb(229, 192, 123),
            error: Color::Rgb(224, 108, 117),
            info: Color::Rgb(97, 175, 239),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(250, 250, 248),
            bg_highlight: Color::Rgb(228, 230, 236),
            accent: Color::Rgb(52, 84, 160),
            accent_dim: Color::Rgb(122, 142, 190),
            text: Color::Rgb(40, 44, 52),
            text_dim: Color::Rgb(110, 116, 128),
            text_muted: Color::Rgb(160, 164, 176),
            border: Color::Rgb(190, 194, 204),
            border_focus: Color::Rgb(52, 84, 160),
            success: Color::Rgb(64, 130, 60),
            warning: Color::Rgb(176, 128, 32),
            error: Color::Rgb(186, 60, 70),
            info: Color::Rgb(30, 110, 190),
        }
    }
}

pub fn notification_color(level: NotificationLevel, theme: &Theme) -> Color {
    match level {
        NotificationLevel::Info => theme.info,
        NotificationLevel::Warning => theme.warning,
        NotificationLevel::Error => theme.error,
        NotificationLevel::Success => theme.success,
    }
}
