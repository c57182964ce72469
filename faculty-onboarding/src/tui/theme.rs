use ratatui::style::Color;

/// Colors used by the wizard view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent_primary: Color,
    pub accent_success: Color,
    pub accent_error: Color,
    pub accent_info: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    pub border_primary: Color,
    pub border_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent_primary: Color::Rgb(137, 180, 250),
            accent_success: Color::Rgb(166, 227, 161),
            accent_error: Color::Rgb(243, 139, 168),
            accent_info: Color::Rgb(148, 226, 213),
            text_primary: Color::Rgb(205, 214, 244),
            text_secondary: Color::Rgb(166, 173, 200),
            text_tertiary: Color::Rgb(108, 112, 134),
            border_primary: Color::Rgb(137, 180, 250),
            border_secondary: Color::Rgb(69, 71, 90),
        }
    }
}
