//! Form field rendering
//!
//! A field is one line: a fixed-width label followed by its value. The
//! focused field gets a highlighted label and a caret after the value.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::{symbols, theme};

/// Width reserved for field labels
pub const LABEL_WIDTH: usize = 18;

/// Build an editable text field line
pub fn text_field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let mut spans = vec![label_span(label, focused), Span::raw(value.to_string())];
    if focused {
        spans.push(Span::raw(symbols::fields::CARET.to_string()));
    }
    Line::from(spans)
}

/// Build a read-only field line (value shown dimmed, never focused)
pub fn read_only_field_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        label_span(label, false),
        Span::styled(
            value.to_string(),
            Style::default().fg(theme::form::READ_ONLY),
        ),
    ])
}

/// Build a two-option choice line, e.g. `● You  ○ Sarah`
pub fn choice_field_line(
    label: &str,
    options: [&str; 2],
    chosen: usize,
    focused: bool,
) -> Line<'static> {
    let mut spans = vec![label_span(label, focused)];
    for (i, option) in options.iter().enumerate() {
        let (marker, style) = if i == chosen {
            (
                symbols::fields::CHOSEN,
                Style::default().add_modifier(Modifier::BOLD),
            )
        } else {
            (symbols::fields::NOT_CHOSEN, Style::default())
        };
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("{} {}", marker, option), style));
    }
    Line::from(spans)
}

fn label_span(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(theme::form::FOCUSED_LABEL)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::form::LABEL)
    };
    Span::styled(format!("{:width$}", label, width = LABEL_WIDTH), style)
}
