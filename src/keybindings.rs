use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    CloseTopmost,
    FocusNext,
    FocusPrev,
    SelectNextIcon,
    SelectPrevIcon,
    OpenSelected,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Quit => "Quit",
            Action::CloseTopmost => "Close top window",
            Action::FocusNext => "Raise next window",
            Action::FocusPrev => "Raise previous window",
            Action::SelectNextIcon => "Select next icon",
            Action::SelectPrevIcon => "Select previous icon",
            Action::OpenSelected => "Open selected icon",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.mods
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        let code = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) if self.mods.is_empty() => c.to_string(),
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            _ => format!("{:?}", self.code),
        };
        parts.push(code);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Desktop-level shortcuts. Each combo maps to at most one action.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<Action, Vec<KeyCombo>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use Action::*;
        let mut kb = Self::new();
        kb.add(Quit, KeyCombo::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        kb.add(Quit, KeyCombo::plain(KeyCode::Char('q')));
        kb.add(CloseTopmost, KeyCombo::plain(KeyCode::Esc));
        kb.add(FocusNext, KeyCombo::plain(KeyCode::Tab));
        kb.add(FocusPrev, KeyCombo::plain(KeyCode::BackTab));
        // Some terminals report BackTab with SHIFT set.
        kb.add(FocusPrev, KeyCombo::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        kb.add(SelectNextIcon, KeyCombo::plain(KeyCode::Right));
        kb.add(SelectNextIcon, KeyCombo::plain(KeyCode::Down));
        kb.add(SelectPrevIcon, KeyCombo::plain(KeyCode::Left));
        kb.add(SelectPrevIcon, KeyCombo::plain(KeyCode::Up));
        kb.add(OpenSelected, KeyCombo::plain(KeyCode::Enter));
        kb
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn add(&mut self, action: Action, combo: KeyCombo) {
        self.map.entry(action).or_default().push(combo);
    }

    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        self.map
            .get(&action)
            .is_some_and(|list| list.iter().any(|c| c.matches(key)))
    }

    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        self.map
            .iter()
            .find(|(_, list)| list.iter().any(|c| c.matches(key)))
            .map(|(act, _)| *act)
    }

    /// Display strings for all combos mapped to `action`.
    pub fn combos_for(&self, action: Action) -> Vec<String> {
        self.map
            .get(&action)
            .map(|list| list.iter().map(|c| c.display()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_quit() {
        let kb = KeyBindings::default();
        let ev = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(kb.matches(Action::Quit, &ev));
        let plain = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(kb.action_for_key(&plain), Some(Action::Quit));
    }

    #[test]
    fn arrows_move_the_icon_selection() {
        let kb = KeyBindings::default();
        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(kb.action_for_key(&right), Some(Action::SelectNextIcon));
        assert_eq!(kb.action_for_key(&up), Some(Action::SelectPrevIcon));
    }

    #[test]
    fn no_combo_is_bound_twice() {
        let kb = KeyBindings::default();
        let mut seen = Vec::new();
        for list in kb.map.values() {
            for combo in list {
                assert!(!seen.contains(combo), "{combo} bound twice");
                seen.push(combo.clone());
            }
        }
    }

    #[test]
    fn combo_display() {
        assert_eq!(KeyCombo::new(KeyCode::Char('q'), KeyModifiers::CONTROL).display(), "Ctrl+Q");
        assert_eq!(KeyCombo::plain(KeyCode::Char(' ')).display(), "Space");
        let kb = KeyBindings::default();
        assert_eq!(kb.combos_for(Action::CloseTopmost), vec!["Esc".to_string()]);
    }
}
