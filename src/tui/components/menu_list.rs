//! # Menu List Component
//!
//! A scrollable, filterable list with a single cursor. Generic over any
//! entry that can describe itself through [`ListEntry`].
//!
//! Layout, top to bottom (cut to the viewport height):
//!
//! ```text
//! CozyCode                          ← title, or "Filter: …" while typing
//! 3 items                           ← status
//!
//! │ Start prompting and building    ← cursor row
//!   Add API keys for new agents
//!   Exit (See ya)
//!
//! ↑/k up • ↓/j down • / filter      ← help (omitted when empty)
//! ```
//!
//! Every operation tolerates an empty list and a zero-sized viewport.
//! The scroll offset is kept in sync by the mutating methods so that
//! rendering stays a pure function of the state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::menu::Item;
use crate::tui::keymap::KeyAction;
use crate::tui::theme::Theme;

/// Anything the list can show.
pub trait ListEntry {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn filter_value(&self) -> &str;
}

impl ListEntry for Item {
    fn title(&self) -> &str {
        Item::title(self)
    }

    fn description(&self) -> &str {
        Item::description(self)
    }

    fn filter_value(&self) -> &str {
        Item::filter_value(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Filter {
    text: String,
    /// True while the user is still typing the filter.
    editing: bool,
}

/// Title + status + blank line above the rows.
const HEADER_LINES: usize = 3;
/// Blank line + help line below the rows.
const FOOTER_LINES: usize = 2;

#[derive(Debug, Clone)]
pub struct MenuList<T> {
    title: String,
    items: Vec<T>,
    /// Indices into `items` that pass the current filter.
    visible: Vec<usize>,
    /// Index into `visible`.
    cursor: Option<usize>,
    offset: usize,
    width: u16,
    height: u16,
    filter: Option<Filter>,
    help: Vec<(&'static str, &'static str)>,
}

impl<T: ListEntry> MenuList<T> {
    pub fn new(title: impl Into<String>, items: Vec<T>, width: i32, height: i32) -> Self {
        let mut list = Self {
            title: title.into(),
            visible: (0..items.len()).collect(),
            cursor: (!items.is_empty()).then_some(0),
            items,
            offset: 0,
            width: 0,
            height: 0,
            filter: None,
            help: Vec::new(),
        };
        list.resize(width, height);
        list
    }

    /// Key hints for the footer. The list adds its own filter hint.
    /// An empty slice hides the footer entirely.
    pub fn with_help(mut self, help: Vec<(&'static str, &'static str)>) -> Self {
        if !help.is_empty() {
            let quit_at = help.len().saturating_sub(1);
            self.help = help;
            self.help.insert(quit_at, ("/", "filter"));
        }
        self.sync_offset();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Entries that pass the current filter, in order.
    pub fn visible_items(&self) -> impl Iterator<Item = &T> + '_ {
        self.visible.iter().map(|&index| &self.items[index])
    }

    /// Cursor position among the visible entries.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn filter_text(&self) -> Option<&str> {
        self.filter.as_ref().map(|filter| filter.text.as_str())
    }

    pub fn is_editing_filter(&self) -> bool {
        self.filter.as_ref().is_some_and(|filter| filter.editing)
    }

    pub fn selected_item(&self) -> Option<&T> {
        let index = *self.visible.get(self.cursor?)?;
        self.items.get(index)
    }

    /// Negative sizes collapse to zero.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = clamp_dimension(width);
        self.height = clamp_dimension(height);
        self.sync_offset();
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        let Some(cursor) = self.cursor else {
            return;
        };
        let last = self.visible.len().saturating_sub(1);
        self.cursor = Some(match direction {
            Direction::Up => cursor.saturating_sub(1),
            Direction::Down => (cursor + 1).min(last),
        });
        self.sync_offset();
    }

    /// Default handling for keys the navigator did not consume.
    pub fn handle_key(&mut self, key: &KeyEvent, action: Option<KeyAction>) {
        if self.is_editing_filter() {
            self.handle_filter_key(key);
            return;
        }

        match (action, key.code) {
            (Some(KeyAction::MoveUp), _) => self.move_cursor(Direction::Up),
            (Some(KeyAction::MoveDown), _) => self.move_cursor(Direction::Down),
            (None, KeyCode::Char('/')) if !has_command_modifier(key) => self.start_filter(),
            (None, KeyCode::Esc) => self.clear_filter(),
            _ => {}
        }
    }

    fn handle_filter_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Esc => self.clear_filter(),
            KeyCode::Enter => self.commit_filter(),
            KeyCode::Up => self.move_cursor(Direction::Up),
            KeyCode::Down => self.move_cursor(Direction::Down),
            KeyCode::Backspace => {
                if let Some(filter) = self.filter.as_mut() {
                    filter.text.pop();
                }
                self.refilter();
            }
            KeyCode::Char(c) if !has_command_modifier(key) => {
                if let Some(filter) = self.filter.as_mut() {
                    filter.text.push(c);
                }
                self.refilter();
            }
            _ => {}
        }
    }

    pub fn start_filter(&mut self) {
        self.filter = Some(Filter {
            text: String::new(),
            editing: true,
        });
        self.refilter();
    }

    /// Stop editing. An empty filter is dropped altogether.
    pub fn commit_filter(&mut self) {
        let Some(filter) = self.filter.as_mut() else {
            return;
        };
        if filter.text.is_empty() {
            self.clear_filter();
        } else {
            filter.editing = false;
        }
    }

    pub fn clear_filter(&mut self) {
        if self.filter.take().is_some() {
            self.refilter();
        }
    }

    fn refilter(&mut self) {
        let needle = self
            .filter
            .as_ref()
            .map(|filter| filter.text.to_lowercase())
            .unwrap_or_default();
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.filter_value().to_lowercase().contains(&needle))
            .map(|(index, _)| index)
            .collect();
        self.cursor = (!self.visible.is_empty()).then_some(0);
        self.offset = 0;
        self.sync_offset();
    }

    /// Rows available for entries once header and footer are drawn.
    fn capacity(&self) -> usize {
        let chrome = HEADER_LINES + if self.help.is_empty() { 0 } else { FOOTER_LINES };
        usize::from(self.height).saturating_sub(chrome)
    }

    /// Keep the cursor inside the scrolled window.
    fn sync_offset(&mut self) {
        let Some(cursor) = self.cursor else {
            self.offset = 0;
            return;
        };
        let capacity = self.capacity();
        if capacity == 0 {
            self.offset = cursor;
            return;
        }
        self.offset = self.offset.min(self.visible.len().saturating_sub(capacity));
        if cursor < self.offset {
            self.offset = cursor;
        } else if cursor >= self.offset + capacity {
            self.offset = cursor + 1 - capacity;
        }
    }

    /// Render as styled lines. Each call starts a fresh, finite iterator over
    /// the same state, so the output can be consumed any number of times.
    pub fn lines<'a>(&'a self, theme: &'a Theme) -> impl Iterator<Item = Line<'a>> + 'a {
        let width = usize::from(self.width);
        let capacity = self.capacity();

        let header = std::iter::once_with(move || self.header_line(theme))
            .chain(std::iter::once_with(move || {
                Line::from(Span::styled(self.status_text(), theme.status))
            }))
            .chain(std::iter::once(Line::default()));

        let rows = self
            .visible
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(capacity)
            .map(move |(position, &index)| {
                self.row_line(&self.items[index], self.cursor == Some(position), theme)
            });

        let footer = (!self.help.is_empty())
            .then(|| {
                std::iter::once(Line::default())
                    .chain(std::iter::once_with(move || self.help_line(theme)))
            })
            .into_iter()
            .flatten();

        header
            .chain(rows)
            .chain(footer)
            .take(usize::from(self.height))
            .map(move |line| fit_line(line, width))
    }

    /// Plain-text rendering, one line per row.
    pub fn render_text(&self, theme: &Theme) -> String {
        self.lines(theme)
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn header_line<'a>(&'a self, theme: &Theme) -> Line<'a> {
        match &self.filter {
            Some(filter) if filter.editing => Line::from(vec![
                Span::styled("Filter: ", theme.filter_prompt),
                Span::raw(filter.text.as_str()),
            ]),
            _ => Line::from(Span::styled(self.title.as_str(), theme.header)),
        }
    }

    fn status_text(&self) -> String {
        let total = self.items.len();
        let noun = |n: usize| if n == 1 { "item" } else { "items" };
        match &self.filter {
            Some(filter) if !filter.text.is_empty() => {
                format!("{} of {} {}", self.visible.len(), total, noun(total))
            }
            _ if total == 0 => "No items.".to_string(),
            _ => format!("{} {}", total, noun(total)),
        }
    }

    fn row_line<'a>(&self, item: &'a T, selected: bool, theme: &Theme) -> Line<'a> {
        let (marker, style) = if selected {
            ("│ ", theme.selected)
        } else {
            ("  ", theme.normal)
        };
        let mut spans = vec![Span::styled(marker, style), Span::styled(item.title(), style)];
        if !item.description().is_empty() {
            spans.push(Span::styled(format!("  {}", item.description()), theme.status));
        }
        Line::from(spans)
    }

    fn help_line<'a>(&'a self, theme: &Theme) -> Line<'a> {
        let text = self
            .help
            .iter()
            .map(|(key, desc)| format!("{key} {desc}"))
            .collect::<Vec<_>>()
            .join(" • ");
        Line::from(Span::styled(text, theme.help))
    }
}

fn has_command_modifier(key: &KeyEvent) -> bool {
    key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn clamp_dimension(value: i32) -> u16 {
    u16::try_from(value.max(0)).unwrap_or(u16::MAX)
}

/// Cut a line to `width` display columns, keeping span styles.
fn fit_line(line: Line<'_>, width: usize) -> Line<'_> {
    if line.width() <= width {
        return line;
    }
    let mut remaining = width;
    let mut spans = Vec::with_capacity(line.spans.len());
    for span in line.spans {
        if remaining == 0 {
            break;
        }
        let text = truncate_to_width(&span.content, remaining);
        remaining -= text.width();
        spans.push(Span::styled(text, span.style));
    }
    Line::from(spans).style(line.style)
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= max_width
        })
        .collect()
}
