//! Rendering logic for the application

use ratatui::{Frame, prelude::*};

use super::state::{App, View};
use crate::keys;
use crate::ui::components;
use crate::ui::symbols;
use crate::ui::views::AddFriendView;
use crate::ui::widgets::{render_help_panel, render_status_bar};

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.current_view {
            View::Ledger => self.render_ledger_view(frame),
            View::Help => render_help_panel(frame, area),
        }
    }

    fn render_ledger_view(&self, frame: &mut Frame) {
        let area = frame.area();

        // Reserve space for status bar at bottom
        let main_area = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(main_area);

        self.render_sidebar(frame, left);
        self.render_split_pane(frame, right);

        render_status_bar(frame, keys::current_hints(self.ledger.mode()));
    }

    /// Friend list, with the add-friend form under it while the panel is open
    fn render_sidebar(&self, frame: &mut Frame, area: Rect) {
        let notification = self.notification.as_ref().filter(|n| !n.is_expired());

        let list_area = match &self.add_friend_view {
            Some(form) => {
                let [list_area, form_area] = Layout::vertical([
                    Constraint::Min(3),
                    Constraint::Length(AddFriendView::HEIGHT),
                ])
                .areas(area);
                form.render(frame, form_area);
                list_area
            }
            None => area,
        };

        self.friends_view.render(
            frame,
            list_area,
            self.ledger.friends(),
            self.ledger.selected_friend_id(),
            notification,
        );
    }

    fn render_split_pane(&self, frame: &mut Frame, area: Rect) {
        if let Some(form) = &self.split_view {
            form.render(frame, area);
            return;
        }

        let title = Line::from(" Split bill ").bold().dark_gray();
        let placeholder = components::empty_state(
            symbols::empty::NO_SELECTION,
            Some(symbols::empty::NO_SELECTION_HINT),
        )
        .block(components::bordered_block(title));
        frame.render_widget(placeholder, area);
    }
}
