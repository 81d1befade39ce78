//! Theme system for vimdrill.
//!
//! # Built-in Themes
//!
//! - `"default-dark"`: ANSI dark theme, adapts to the terminal palette
//! - `"default-light"`: light theme for well-lit environments
//!
//! # Examples
//!
//! ```
//! use vimdrill::theme::get_builtin_theme;
//!
//! let theme = get_builtin_theme("default-dark").unwrap();
//! assert_eq!(theme.name, "default-dark");
//! ```

pub mod colors;

use colors::ThemeColors;

/// A color theme for the vimdrill terminal UI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name as used in config and on the command line.
    pub name: String,
    /// The color palette.
    pub colors: ThemeColors,
}

/// Loads a built-in theme by name, or `None` if the name is unknown.
pub fn get_builtin_theme(name: &str) -> Option<Theme> {
    let colors = match name {
        "default-dark" => ThemeColors::default_dark(),
        "default-light" => ThemeColors::default_light(),
        _ => return None,
    };
    Some(Theme {
        name: name.to_string(),
        colors,
    })
}

/// Names of all built-in themes.
pub fn builtin_theme_names() -> &'static [&'static str] {
    &["default-dark", "default-light"]
}
