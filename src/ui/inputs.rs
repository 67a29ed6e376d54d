use super::controller::BrowserEvent;
use super::viewport::Movement;
use super::CHROME_LINES;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Convert a raw `KeyEvent` from crossterm into a [`BrowserEvent`].
/// Returns `None` for keys that are not handled by the UI.
pub fn key_event_to_action(ev: &KeyEvent) -> Option<BrowserEvent> {
    use KeyCode::*;
    if ev.kind == KeyEventKind::Release {
        return None;
    }
    if ev.modifiers.contains(KeyModifiers::CONTROL) && ev.code == Char('c') {
        return Some(BrowserEvent::Quit);
    }
    match ev.code {
        Char('x') | Char('q') => Some(BrowserEvent::Quit),
        Up | Char('k') => Some(BrowserEvent::Move(Movement::Up)),
        Down | Char('j') => Some(BrowserEvent::Move(Movement::Down)),
        PageUp => Some(BrowserEvent::Move(Movement::PageUp)),
        PageDown => Some(BrowserEvent::Move(Movement::PageDown)),
        Tab => Some(BrowserEvent::ToggleFocus),
        _ => None,
    }
}

/// Convert any terminal event. Resizes report the pane height, i.e. the terminal
/// height minus the header and footer lines.
pub fn event_to_browser_event(ev: &Event) -> Option<BrowserEvent> {
    match ev {
        Event::Key(key) => key_event_to_action(key),
        Event::Resize(_, rows) => Some(BrowserEvent::Resize(pane_height(*rows))),
        _ => None,
    }
}

/// Lines left for the panes on a terminal `rows` tall.
pub fn pane_height(rows: u16) -> u16 {
    rows.saturating_sub(CHROME_LINES)
}
