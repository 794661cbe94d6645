//! Screen tests for the help panel

use crossterm::event::KeyCode;

use super::common::{press, render_rows, screen_contains, seeded_app};

#[test]
fn test_help_panel_full() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('?'));
    let rows = render_rows(&app, 80, 30);

    assert!(rows[0].contains("splitbill - Help"));
    assert!(screen_contains(&rows, "Global:"));
    assert!(screen_contains(&rows, "Friends:"));
    assert!(screen_contains(&rows, "Forms:"));
    assert!(screen_contains(&rows, "Switch who pays the bill"));
}

#[test]
fn test_help_closes_with_esc() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('?'));
    press(&mut app, KeyCode::Esc);
    let rows = render_rows(&app, 80, 30);

    assert!(screen_contains(&rows, "Friends"));
    assert!(!screen_contains(&rows, "splitbill - Help"));
}
