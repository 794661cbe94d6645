//! Screen tests for the friend list

use crossterm::event::KeyCode;

use super::common::{press, render_rows, screen_contains, seeded_app};

#[test]
fn test_friend_list_shows_balances() {
    let app = seeded_app();
    let rows = render_rows(&app, 100, 20);

    assert!(screen_contains(&rows, "Friends"));
    assert!(screen_contains(&rows, "You owe Clark 7€"));
    assert!(screen_contains(&rows, "Sarah owes you 20€"));
    assert!(screen_contains(&rows, "You and Anthony are even"));
}

#[test]
fn test_idle_screen_has_placeholder_and_hints() {
    let app = seeded_app();
    let rows = render_rows(&app, 100, 20);

    assert!(screen_contains(&rows, "Select a friend to split a bill."));
    let status = rows.last().unwrap();
    assert!(status.contains("[Enter] Split bill"));
    assert!(status.contains("[a] Add friend"));
}

#[test]
fn test_cursor_and_split_marker() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);
    let rows = render_rows(&app, 100, 20);

    let sarah = rows.iter().find(|r| r.contains("Sarah owes you")).unwrap();
    assert!(sarah.contains("›▶"));
    let clark = rows.iter().find(|r| r.contains("You owe Clark")).unwrap();
    assert!(!clark.contains('▶'));
}

#[test]
fn test_notification_in_title_after_add() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('a'));
    for c in "Dana".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);
    let rows = render_rows(&app, 100, 20);

    assert!(rows[0].contains("Added Dana"));
    assert!(screen_contains(&rows, "You and Dana are even"));
}

#[test]
fn test_empty_friend_list() {
    use splitbill::app::App;
    use splitbill::ledger::{Ledger, SequentialIds};

    let ledger = Ledger::with_friends(Vec::new(), SequentialIds::default()).unwrap();
    let app = App::with_ledger(ledger, "https://i.pravatar.cc/48");
    let rows = render_rows(&app, 100, 20);

    assert!(screen_contains(&rows, "No friends yet."));
    assert!(screen_contains(&rows, "Press 'a' to add one"));
}
