//! Color definitions for vimdrill themes.

use ratatui::style::Color;

/// Defines all colors used in a vimdrill theme.
///
/// ANSI colors are used in the dark theme so the UI adapts to the user's
/// terminal palette; the light theme pins RGB values instead.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // UI colors
    /// Main background color.
    pub background: Color,
    /// Main foreground/text color.
    pub foreground: Color,
    /// Background of the cell under the cursor.
    pub cursor: Color,
    /// Background color for the status line.
    pub status_line_bg: Color,
    /// Foreground/text color for the status line.
    pub status_line_fg: Color,
    /// Color for the challenge hint line.
    pub hint: Color,
    /// Fill color for the progress gauge.
    pub gauge: Color,

    // Semantic colors
    /// Color for rejected-movement messages.
    pub error: Color,
    /// Color for informational messages.
    pub info: Color,
    /// Color for learned-motion and completion messages.
    pub success: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    pub fn default_dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Reset,
            cursor: Color::LightYellow,
            status_line_bg: Color::Blue,
            status_line_fg: Color::White,
            hint: Color::Cyan,
            gauge: Color::Green,
            error: Color::LightRed,
            info: Color::LightBlue,
            success: Color::LightGreen,
        }
    }

    /// Returns the default light color scheme.
    pub fn default_light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(40, 40, 40),
            cursor: Color::Rgb(255, 220, 120),
            status_line_bg: Color::Rgb(60, 110, 180),
            status_line_fg: Color::Rgb(250, 250, 250),
            hint: Color::Rgb(0, 120, 140),
            gauge: Color::Rgb(60, 150, 60),
            error: Color::Rgb(190, 40, 40),
            info: Color::Rgb(40, 80, 190),
            success: Color::Rgb(30, 140, 60),
        }
    }
}
