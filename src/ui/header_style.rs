use ratatui::style::{Color, Modifier, Style};

use crate::config::config::{DisplayConfig, ThemeConfig};
use crate::dnd::controller::HeaderDragState;

/// How the header being dragged is faded out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeMode {
    Dim,
    Italic,
    Reversed,
}

impl From<&str> for FadeMode {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "italic" => FadeMode::Italic,
            "reversed" | "reverse" => FadeMode::Reversed,
            _ => FadeMode::Dim,
        }
    }
}

/// Styles header cells according to their drag state
#[derive(Debug, Clone)]
pub struct HeaderStyler {
    header_color: Color,
    drop_target_color: Color,
    border_color: Color,
    fade: FadeMode,
    handle: &'static str,
}

impl HeaderStyler {
    pub fn new(theme: &ThemeConfig, display: &DisplayConfig) -> Self {
        Self {
            header_color: parse_color(&theme.header_color),
            drop_target_color: parse_color(&theme.drop_target_color),
            border_color: parse_color(&theme.border_color),
            fade: FadeMode::from(theme.dragging_style.as_str()),
            handle: if display.use_glyphs { "⠿ " } else { ":: " },
        }
    }

    /// Drag handle drawn in front of every header label
    pub fn handle(&self) -> &'static str {
        self.handle
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border_color)
    }

    /// Style for a header. `opacity` below 1.0 means the header is the
    /// active drag source; terminals can only approximate that.
    pub fn header_style(&self, state: HeaderDragState, opacity: f32) -> Style {
        let mut style = Style::default()
            .fg(self.header_color)
            .add_modifier(Modifier::BOLD);

        if state == HeaderDragState::DropArmed {
            style = style
                .fg(self.drop_target_color)
                .add_modifier(Modifier::UNDERLINED);
        }

        if opacity < 1.0 {
            style = match self.fade {
                FadeMode::Dim => style.add_modifier(Modifier::DIM).remove_modifier(Modifier::BOLD),
                FadeMode::Italic => style.add_modifier(Modifier::ITALIC | Modifier::DIM),
                FadeMode::Reversed => style.add_modifier(Modifier::REVERSED),
            };
        }

        style
    }

    /// Style of the floating label that follows the pointer
    pub fn preview_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.header_color)
            .add_modifier(Modifier::BOLD)
    }
}

/// Parse a color name from the config file
pub fn parse_color(color_str: &str) -> Color {
    match color_str.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" => Color::DarkGray,
        "light_red" | "bright_red" => Color::LightRed,
        "light_green" | "bright_green" => Color::LightGreen,
        "light_yellow" | "bright_yellow" => Color::LightYellow,
        "light_blue" | "bright_blue" => Color::LightBlue,
        "light_magenta" | "bright_magenta" => Color::LightMagenta,
        "light_cyan" | "bright_cyan" => Color::LightCyan,
        "white" => Color::White,
        "orange" => Color::Rgb(255, 165, 0),
        "purple" => Color::Rgb(128, 0, 128),
        "teal" => Color::Rgb(0, 128, 128),
        "pink" => Color::Rgb(255, 192, 203),
        _ => Color::Cyan, // Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn styler() -> HeaderStyler {
        let config = Config::default();
        HeaderStyler::new(&config.theme, &config.display)
    }

    #[test]
    fn test_idle_header_is_bold() {
        let style = styler().header_style(HeaderDragState::Idle, 1.0);
        assert_eq!(style.fg, Some(Color::Cyan));
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert!(!style.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_dragging_header_is_faded() {
        let style = styler().header_style(HeaderDragState::Dragging, 0.5);
        assert!(style.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_drop_target_highlight() {
        let style = styler().header_style(HeaderDragState::DropArmed, 1.0);
        assert_eq!(style.fg, Some(Color::Yellow));
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_color_parsing() {
        assert_eq!(parse_color("orange"), Color::Rgb(255, 165, 0));
        assert_eq!(parse_color("Dark_Gray"), Color::DarkGray);
        assert_eq!(parse_color("nonsense"), Color::Cyan);
    }

    #[test]
    fn test_ascii_handle() {
        let mut config = Config::default();
        config.display.use_glyphs = false;
        let styler = HeaderStyler::new(&config.theme, &config.display);
        assert_eq!(styler.handle(), ":: ");
    }
}
