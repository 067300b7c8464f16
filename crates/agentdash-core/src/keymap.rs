//! Keyboard shortcuts
//!
//! Keys are expressed in a terminal-neutral [`Key`] so the mapping can be
//! tested without a terminal. The CLI converts crossterm events into `Key`.

use crate::dashboard::Action;
use crate::page::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Tab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
}

/// Which keys are live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// A modal is open; only confirm/cancel are read
    Modal,
    /// The search prompt is open; characters edit the query
    Search,
}

pub fn map_key(key: Key, mode: InputMode) -> Option<Action> {
    match mode {
        InputMode::Modal => match key {
            Key::Enter | Key::Char('y') => Some(Action::ConfirmModal),
            Key::Esc | Key::Char('n') => Some(Action::CancelModal),
            _ => None,
        },
        InputMode::Search => match key {
            Key::Enter => Some(Action::SubmitSearch),
            Key::Esc => Some(Action::CancelSearch),
            Key::Backspace => Some(Action::SearchBackspace),
            Key::Char(c) if !c.is_control() => Some(Action::SearchInput(c)),
            _ => None,
        },
        InputMode::Normal => match key {
            Key::Char('q') => Some(Action::Quit),
            Key::Char('/') => Some(Action::OpenSearch),
            Key::Char('n') => Some(Action::NewAgent),
            Key::Char('e') => Some(Action::Export),
            Key::Char('p') => Some(Action::TogglePauseSelected),
            Key::Char('d') | Key::Delete => Some(Action::RequestDeleteSelected),
            Key::Char('j') | Key::Down => Some(Action::SelectNext),
            Key::Char('k') | Key::Up => Some(Action::SelectPrevious),
            Key::Char(c) if c.is_ascii_digit() => Page::from_digit(c).map(Action::NavigateTo),
            Key::Right => Some(Action::NextPage),
            Key::Left => Some(Action::PreviousPage),
            Key::Tab => Some(Action::FocusNextControl),
            Key::Enter => Some(Action::ActivateFocused),
            _ => None,
        },
    }
}

/// Help text shown in the footer, one entry per binding group
pub const HELP: &[(&str, &str)] = &[
    ("1-7", "pages"),
    ("/", "search"),
    ("n", "new agent"),
    ("p", "pause"),
    ("d", "delete"),
    ("Tab/Enter", "controls"),
    ("e", "export"),
    ("q", "quit"),
];
