//! Rendering for FriendsView

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{BalanceStatus, Friend, FriendId, Notification};
use crate::ui::{components, symbols, theme};

use super::FriendsView;

/// Width of the name column
const NAME_WIDTH: usize = 12;

impl FriendsView {
    /// Render the friend list with optional notification in title bar
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        friends: &[Friend],
        split_target: Option<&FriendId>,
        notification: Option<&Notification>,
    ) {
        let title = Line::from(" Friends ")
            .style(
                Style::default()
                    .fg(theme::friend_list::TITLE)
                    .add_modifier(Modifier::BOLD),
            )
            .centered();

        let title_width = title.width();
        let available_for_notif = area.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        let block = components::bordered_block_with_notification(title, notif_line);

        if friends.is_empty() {
            let content = components::empty_state(
                symbols::empty::NO_FRIENDS,
                Some(symbols::empty::NO_FRIENDS_HINT),
            )
            .block(block);
            frame.render_widget(content, area);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        let offset = self.scroll_offset(inner_height);

        let lines: Vec<Line> = friends
            .iter()
            .enumerate()
            .skip(offset)
            .take(inner_height)
            .map(|(idx, friend)| {
                build_friend_line(
                    friend,
                    idx == self.cursor,
                    split_target == Some(&friend.id),
                )
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// One row: cursor, split marker, name, balance status
pub(crate) fn build_friend_line(
    friend: &Friend,
    at_cursor: bool,
    is_target: bool,
) -> Line<'static> {
    let status = friend.status();
    let status_color = match status {
        BalanceStatus::FriendOwesYou(_) => theme::friend_list::OWES_YOU,
        BalanceStatus::YouOweFriend(_) => theme::friend_list::YOU_OWE,
        BalanceStatus::Even => theme::friend_list::EVEN,
    };

    let cursor = if at_cursor {
        symbols::markers::CURSOR
    } else {
        ' '
    };
    let marker = if is_target {
        symbols::markers::SPLIT_TARGET
    } else {
        ' '
    };

    let name_style = if is_target {
        Style::default()
            .fg(theme::friend_list::SPLIT_TARGET)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let line = Line::from(vec![
        Span::raw(format!("{}{} ", cursor, marker)),
        Span::styled(
            format!("{:width$} ", friend.name, width = NAME_WIDTH),
            name_style,
        ),
        Span::styled(
            status.describe(&friend.name),
            Style::default().fg(status_color),
        ),
    ]);

    if at_cursor {
        line.style(Style::default().bg(theme::friend_list::CURSOR_BG))
    } else {
        line
    }
}
