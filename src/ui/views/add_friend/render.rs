//! Rendering for AddFriendView

use ratatui::{Frame, layout::Rect, style::Stylize, text::Line, widgets::Paragraph};

use crate::ui::{components, theme};

use super::{AddFriendField, AddFriendView};

impl AddFriendView {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let title = Line::from(" Add friend ").bold();
        let block = components::highlighted_block(title, theme::form::BORDER);

        let lines = vec![
            components::text_field_line(
                "Friend name",
                &self.name,
                self.field == AddFriendField::Name,
            ),
            components::text_field_line(
                "Image URL",
                &self.image,
                self.field == AddFriendField::Image,
            ),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
