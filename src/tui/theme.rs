//! Styling constants, built once at startup and passed around by reference.

use log::warn;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Padding;

use crate::core::config::{ConfigError, DEFAULT_HEADER_COLOR, ResolvedConfig};

/// Space the list leaves to the outer frame: `(terminal - inset)` is what
/// the list widget gets on every resize and screen change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inset {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub header: Style,
    pub status: Style,
    pub selected: Style,
    pub normal: Style,
    pub help: Style,
    pub filter_prompt: Style,
    pub frame_padding: Padding,
    pub list_inset: Inset,
    pub show_help: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ResolvedConfig::default())
    }
}

impl Theme {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let header_color = parse_color(&config.header_color).unwrap_or_else(|e| {
            warn!("Ignoring {}, using {}", e, DEFAULT_HEADER_COLOR);
            DEFAULT_COLOR
        });
        Self {
            header: Style::default().fg(header_color).add_modifier(Modifier::BOLD),
            status: Style::default().fg(Color::DarkGray),
            selected: Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            normal: Style::default(),
            help: Style::default().fg(Color::DarkGray),
            filter_prompt: Style::default().fg(header_color),
            frame_padding: Padding::symmetric(2, 1),
            list_inset: Inset {
                width: 4,
                height: 6,
            },
            show_help: config.show_help,
        }
    }

    /// The area left for the list once the outer padding is taken off.
    pub fn inner(&self, area: Rect) -> Rect {
        let p = self.frame_padding;
        let width = area.width.saturating_sub(p.left + p.right);
        let height = area.height.saturating_sub(p.top + p.bottom);
        Rect::new(area.x + p.left.min(area.width), area.y + p.top.min(area.height), width, height)
    }
}

const DEFAULT_COLOR: Color = Color::Rgb(0x04, 0xB5, 0x75);

/// Named colors (`"yellow"`) or `#RRGGBB`.
pub fn parse_color(raw: &str) -> Result<Color, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidColor(raw.to_string()))
}
