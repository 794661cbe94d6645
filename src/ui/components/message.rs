//! Notification message component

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Build a notification line for title bar display
///
/// If `max_width` is provided and the notification is too long,
/// it will be truncated with "…" at the end. Returns an empty line when
/// there is no room at all.
pub fn build_notification_title(
    notification: &Notification,
    max_width: Option<usize>,
) -> Line<'static> {
    let (label, color) = match notification.kind {
        NotificationKind::Success => ("✓", Color::Green),
        NotificationKind::Info => ("i", Color::Cyan),
    };

    // " | " + label + " " + message + " "
    let fixed_width = 3 + label.chars().count() + 1;
    let message_width = notification.message.chars().count() + 1;

    let message = match max_width {
        Some(max) if fixed_width + message_width > max => {
            let available = max.saturating_sub(fixed_width + 2);
            if available == 0 {
                return Line::from(vec![]);
            }
            let truncated: String = notification.message.chars().take(available).collect();
            format!("{}… ", truncated)
        }
        _ => format!("{} ", notification.message),
    };

    Line::from(vec![
        Span::raw(" | "),
        Span::styled(
            format!("{} ", label),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message, Style::default().fg(color)),
    ])
}
