use ratatui::Frame;
use ratatui::widgets::Paragraph;

use crate::tui::navigation::Navigator;
use crate::tui::theme::Theme;

/// Draw the active list inside the outer padding.
pub fn draw_ui(frame: &mut Frame, nav: &Navigator, theme: &Theme) {
    let area = theme.inner(frame.area());
    let lines: Vec<_> = nav.list().lines(theme).collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// The same frame as plain text, one `\n`-terminated row per list line,
/// wrapped in the outer padding. Lets scenario tests compare frames
/// without a terminal.
pub fn frame_text(nav: &Navigator, theme: &Theme) -> String {
    let padding = theme.frame_padding;
    let left = " ".repeat(usize::from(padding.left));
    let mut out = String::new();
    for _ in 0..padding.top {
        out.push('\n');
    }
    for line in nav.list().lines(theme) {
        out.push_str(&left);
        for span in &line.spans {
            out.push_str(&span.content);
        }
        out.push('\n');
    }
    for _ in 0..padding.bottom {
        out.push('\n');
    }
    out
}
