//! Screen tests for the add-friend panel and the split-bill form

use crossterm::event::KeyCode;

use super::common::{press, render_rows, screen_contains, seeded_app, type_text};

#[test]
fn test_add_friend_panel() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Dana");
    let rows = render_rows(&app, 100, 20);

    assert!(screen_contains(&rows, "Add friend"));
    assert!(screen_contains(&rows, "Friend name"));
    assert!(screen_contains(&rows, "Dana"));
    assert!(screen_contains(&rows, "https://i.pravatar.cc/48"));
    assert!(rows.last().unwrap().contains("[Esc] Close"));
}

#[test]
fn test_split_form_shows_friend_expense() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "100");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "60");
    let rows = render_rows(&app, 120, 20);

    assert!(screen_contains(&rows, "Split a bill with Sarah"));
    assert!(screen_contains(&rows, "Bill amount"));
    assert!(screen_contains(&rows, "Sarah's expense"));
    assert!(screen_contains(&rows, "40"));
    assert!(screen_contains(&rows, "Who is paying?"));
    assert!(rows.last().unwrap().contains("[Space] Who pays"));
}

#[test]
fn test_split_form_payer_choice() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::Char(' '));
    let rows = render_rows(&app, 120, 20);

    let payer = rows.iter().find(|r| r.contains("Who is paying?")).unwrap();
    assert!(payer.contains("○ You"));
    assert!(payer.contains("● Clark"));
}
