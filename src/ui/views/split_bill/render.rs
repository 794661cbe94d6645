//! Rendering for SplitBillView

use ratatui::{Frame, layout::Rect, style::Stylize, text::Line, widgets::Paragraph};

use crate::model::{Payer, format_amount};
use crate::ui::{components, theme};

use super::{SplitBillView, SplitField};

impl SplitBillView {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let title = Line::from(format!(" Split a bill with {} ", self.friend_name)).bold();
        let block = components::highlighted_block(title, theme::form::BORDER);

        let friend_expense = self
            .split
            .friend_expense()
            .map(format_amount)
            .unwrap_or_default();
        let chosen = match self.split.payer() {
            Payer::User => 0,
            Payer::Friend => 1,
        };

        let lines = vec![
            Line::from(""),
            components::text_field_line(
                "Bill amount",
                &self.bill_input,
                self.field == SplitField::Bill,
            ),
            components::text_field_line(
                "Your expense",
                &self.expense_input,
                self.field == SplitField::UserExpense,
            ),
            components::read_only_field_line(
                &format!("{}'s expense", self.friend_name),
                &friend_expense,
            ),
            Line::from(""),
            components::choice_field_line(
                "Who is paying?",
                ["You", self.friend_name.as_str()],
                chosen,
                self.field == SplitField::Payer,
            ),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
