//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextTab,
    PrevTab,
    SwitchTab(usize),
    NextPage,
    PrevPage,
    ScrollUp,
    ScrollDown,
    CycleSort,
    OpenSearch,
    ToggleTheme,
    Refresh,
    Confirm,
    Cancel,
}

/// Normal-mode bindings. While the search bar is open, keys feed the input
/// buffer instead and only Enter/Esc are interpreted (see the event loop).
pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent {
        code, modifiers, ..
    } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Refresh),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('/') => Some(Action::OpenSearch),
        KeyCode::Char('s') => Some(Action::CycleSort),
        KeyCode::Char('d') => Some(Action::ToggleTheme),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab => Some(Action::NextTab),
        KeyCode::BackTab => Some(Action::PrevTab),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevPage),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::NextPage),
        KeyCode::Char(c @ '1'..='4') => {
            Some(Action::SwitchTab(c as usize - '1' as usize))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_map_to_tab_indices() {
        for (c, index) in [('1', 0), ('2', 1), ('3', 2), ('4', 3)] {
            assert_eq!(map_key(key(KeyCode::Char(c))), Some(Action::SwitchTab(index)));
        }
        assert_eq!(map_key(key(KeyCode::Char('5'))), None);
        assert_eq!(map_key(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn vim_and_arrow_keys_agree() {
        assert_eq!(map_key(key(KeyCode::Left)), map_key(key(KeyCode::Char('h'))));
        assert_eq!(map_key(key(KeyCode::Right)), map_key(key(KeyCode::Char('l'))));
        assert_eq!(map_key(key(KeyCode::Up)), map_key(key(KeyCode::Char('k'))));
        assert_eq!(map_key(key(KeyCode::Down)), map_key(key(KeyCode::Char('j'))));
    }

    #[test]
    fn control_chords() {
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_r), Some(Action::Refresh));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Some(Action::Quit));
    }
}
