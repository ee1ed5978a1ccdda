use std::collections::BTreeSet;

use super::catalog::WindowId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DockAppId {
    Finder,
    Calculator,
    Terminal,
    Mail,
    Notes,
    Safari,
    Photos,
    Netflix,
    Spotify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockApp {
    pub id: DockAppId,
    pub name: &'static str,
    pub glyph: &'static str,
}

/// Window side effect of clicking a dock app, on top of the indicator toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockEffect {
    Toggle(WindowId),
    Open(WindowId),
    None,
}

impl DockAppId {
    pub const ALL: [DockAppId; 9] = [
        DockAppId::Finder,
        DockAppId::Calculator,
        DockAppId::Terminal,
        DockAppId::Mail,
        DockAppId::Notes,
        DockAppId::Safari,
        DockAppId::Photos,
        DockAppId::Netflix,
        DockAppId::Spotify,
    ];

    pub fn app(self) -> DockApp {
        let (name, glyph) = match self {
            DockAppId::Finder => ("Finder", "[F]"),
            DockAppId::Calculator => ("Calculator", "[=]"),
            DockAppId::Terminal => ("Terminal", "[>_"),
            DockAppId::Mail => ("Contact", "[@]"),
            DockAppId::Notes => ("Notes", "[N]"),
            DockAppId::Safari => ("Safari", "[S]"),
            DockAppId::Photos => ("Photos", "[P]"),
            DockAppId::Netflix => ("Netflix", "[X]"),
            DockAppId::Spotify => ("Spotify", "[♪]"),
        };
        DockApp {
            id: self,
            name,
            glyph,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DockAppId::Finder => "finder",
            DockAppId::Calculator => "calculator",
            DockAppId::Terminal => "terminal",
            DockAppId::Mail => "mail",
            DockAppId::Notes => "notes",
            DockAppId::Safari => "safari",
            DockAppId::Photos => "photos",
            DockAppId::Netflix => "netflix",
            DockAppId::Spotify => "spotify",
        }
    }

    pub fn effect(self) -> DockEffect {
        match self {
            DockAppId::Finder => DockEffect::Toggle(WindowId::Finder),
            DockAppId::Terminal => DockEffect::Toggle(WindowId::Terminal),
            DockAppId::Mail => DockEffect::Open(WindowId::Contact),
            DockAppId::Notes => DockEffect::Toggle(WindowId::Notes),
            DockAppId::Photos => DockEffect::Toggle(WindowId::Photos),
            DockAppId::Spotify => DockEffect::Toggle(WindowId::MediaPlayer),
            DockAppId::Calculator | DockAppId::Safari | DockAppId::Netflix => DockEffect::None,
        }
    }
}

/// Dock contents plus the "running" indicator dots.
#[derive(Debug, Clone)]
pub struct DockState {
    apps: Vec<DockAppId>,
    running: BTreeSet<DockAppId>,
}

impl Default for DockState {
    fn default() -> Self {
        Self::new(DockAppId::ALL.to_vec())
    }
}

impl DockState {
    pub fn new(apps: Vec<DockAppId>) -> Self {
        let running = [DockAppId::Finder, DockAppId::Safari]
            .into_iter()
            .filter(|id| apps.contains(id))
            .collect();
        Self { apps, running }
    }

    pub fn apps(&self) -> &[DockAppId] {
        &self.apps
    }

    pub fn is_running(&self, id: DockAppId) -> bool {
        self.running.contains(&id)
    }

    /// Flip the indicator and report the new state.
    pub fn toggle_indicator(&mut self, id: DockAppId) -> bool {
        if self.running.remove(&id) {
            false
        } else {
            self.running.insert(id);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finder_and_safari_start_running() {
        let dock = DockState::default();
        assert!(dock.is_running(DockAppId::Finder));
        assert!(dock.is_running(DockAppId::Safari));
        assert!(!dock.is_running(DockAppId::Spotify));
    }

    #[test]
    fn indicator_toggles() {
        let mut dock = DockState::default();
        assert!(dock.toggle_indicator(DockAppId::Spotify));
        assert!(!dock.toggle_indicator(DockAppId::Spotify));
        assert!(!dock.toggle_indicator(DockAppId::Finder));
    }

    #[test]
    fn reduced_dock_only_marks_present_apps() {
        let dock = DockState::new(vec![DockAppId::Terminal, DockAppId::Safari]);
        assert!(dock.is_running(DockAppId::Safari));
        assert!(!dock.is_running(DockAppId::Finder));
    }
}
