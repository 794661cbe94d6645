//! Block components for UI rendering

use ratatui::{
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders},
};

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    Block::default().borders(Borders::ALL).title(title)
}

/// Create a bordered block with a colored border (used for open forms)
pub fn highlighted_block<'a>(title: Line<'a>, color: Color) -> Block<'a> {
    bordered_block(title).border_style(Style::default().fg(color))
}

/// Create a bordered block with an optional notification in the title bar
///
/// The notification is appended after the title on the same line.
pub fn bordered_block_with_notification<'a>(
    title: Line<'a>,
    notification: Option<Line<'a>>,
) -> Block<'a> {
    let Some(notification) = notification else {
        return bordered_block(title);
    };

    let mut spans = title.spans;
    spans.extend(notification.spans);
    bordered_block(Line::from(spans))
}
