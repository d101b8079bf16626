use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;

use crate::config::matches_binding;

use super::{Mode, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

pub fn handle_event<R: Rng>(session: &mut Session<R>, event: Event) -> Action {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(session, key),
        _ => Action::Continue,
    }
}

fn handle_key<R: Rng>(session: &mut Session<R>, key: KeyEvent) -> Action {
    // Ctrl-C always leaves, whatever the mode.
    if matches_binding("Ctrl-c", &key) {
        return Action::Quit;
    }

    match session.mode() {
        Mode::Normal => handle_normal(session, key),
        Mode::Entry => handle_entry(session, key),
    }
}

fn handle_normal<R: Rng>(session: &mut Session<R>, key: KeyEvent) -> Action {
    let bindings = &session.config().key_bindings;

    if matches_binding(&bindings.quit, &key) {
        return Action::Quit;
    }
    if matches_binding(&bindings.edit, &key) {
        session.begin_entry();
    }
    Action::Continue
}

fn handle_entry<R: Rng>(session: &mut Session<R>, key: KeyEvent) -> Action {
    let bindings = &session.config().key_bindings;

    if matches_binding(&bindings.cancel, &key) {
        session.cancel_entry();
    } else if matches_binding(&bindings.commit, &key) {
        session.commit_entry();
    } else if matches_binding(&bindings.delete, &key) {
        session.pop_char();
    } else if let KeyCode::Char(c) = key.code {
        if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            session.push_char(c);
        }
    }
    Action::Continue
}
