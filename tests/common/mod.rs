//! Shared helpers for integration tests

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use rust_decimal::Decimal;

use splitbill::app::App;
use splitbill::ledger::{DEFAULT_AVATAR_URL, Ledger, SequentialIds, default_friends};
use splitbill::model::FriendId;

/// App with the default seed friends and deterministic ids (1, 2, ...)
pub fn seeded_app() -> App {
    let ledger = Ledger::with_friends(default_friends(), SequentialIds::default())
        .expect("seed friends are unique");
    App::with_ledger(ledger, DEFAULT_AVATAR_URL)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn press(app: &mut App, code: KeyCode) {
    app.on_key_event(key(code));
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

pub fn balance(app: &App, name: &str) -> Decimal {
    app.ledger
        .friends()
        .iter()
        .find(|f| f.name == name)
        .map(|f| f.balance)
        .unwrap_or_else(|| panic!("no friend named {name}"))
}

pub fn id_of(app: &App, name: &str) -> FriendId {
    app.ledger
        .friends()
        .iter()
        .find(|f| f.name == name)
        .map(|f| f.id.clone())
        .unwrap_or_else(|| panic!("no friend named {name}"))
}

/// Render the app and return the screen as one string per row
pub fn render_rows(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

pub fn screen_contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}
