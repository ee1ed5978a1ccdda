use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

/// Smooths over platform differences in raw key events: Shift+Tab becomes
/// BackTab, releases are dropped, and on Windows repeats and a held Esc are
/// collapsed into a single press.
#[derive(Debug, Default)]
pub struct KeyboardNormalizer {
    esc_down: bool,
}

impl KeyboardNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn normalize(&mut self, evt: Event) -> Option<Event> {
        let Event::Key(mut key) = evt else {
            return Some(evt);
        };
        if key.code == KeyCode::Tab && key.modifiers.contains(KeyModifiers::SHIFT) {
            key.code = KeyCode::BackTab;
            key.modifiers.remove(KeyModifiers::SHIFT);
        }
        if key.code == KeyCode::BackTab {
            key.modifiers.remove(KeyModifiers::SHIFT);
        }
        match key.kind {
            KeyEventKind::Release => {
                if key.code == KeyCode::Esc {
                    self.esc_down = false;
                }
                return None;
            }
            KeyEventKind::Repeat if cfg!(windows) => return None,
            KeyEventKind::Repeat | KeyEventKind::Press => {}
        }
        if cfg!(windows) {
            if key.code == KeyCode::Esc {
                if self.esc_down {
                    return None;
                }
                self.esc_down = true;
            } else {
                self.esc_down = false;
            }
        }
        Some(Event::Key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn shift_tab_becomes_backtab() {
        let mut norm = KeyboardNormalizer::new();
        let out = norm.normalize(Event::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)));
        let Some(Event::Key(k)) = out else {
            panic!("expected key event");
        };
        assert_eq!(k.code, KeyCode::BackTab);
        assert!(!k.modifiers.contains(KeyModifiers::SHIFT));
    }

    #[test]
    fn releases_are_dropped() {
        let mut norm = KeyboardNormalizer::new();
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(norm.normalize(Event::Key(key)).is_none());
    }

    #[test]
    fn non_key_events_pass_through() {
        let mut norm = KeyboardNormalizer::new();
        assert_eq!(norm.normalize(Event::Resize(10, 20)), Some(Event::Resize(10, 20)));
    }
}
