use std::{fmt, str::FromStr};

use thiserror::Error;

/// One of the mutually exclusive resume panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Experience,
    Education,
    Skills,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown tab: {0}")]
pub struct UnknownTab(pub String);

impl Tab {
    /// Tabs in the order the tab bar shows them.
    pub const ALL: [Tab; 3] = [Tab::Experience, Tab::Education, Tab::Skills];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Experience => "experience",
            Tab::Education => "education",
            Tab::Skills => "skills",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Experience => "Experience",
            Tab::Education => "Education",
            Tab::Skills => "Skills",
        }
    }
}

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Last pointer position, in client coordinates, exactly as reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub x: i32,
    pub y: i32,
}

/// Everything the page renders from besides the static profile.
///
/// Lives for one page load. Nothing here is persisted: a reload starts again
/// from [`ViewState::default`] and the mount transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    active_tab: Tab,
    is_dark_mode: bool,
    is_loaded: bool,
    cursor: Option<CursorPosition>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn is_dark_mode(&self) -> bool {
        self.is_dark_mode
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    pub fn cursor(&self) -> Option<CursorPosition> {
        self.cursor
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active_tab == tab
    }

    pub fn select(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Selects the tab with the given id. Unknown ids are ignored.
    pub fn select_tab(&mut self, id: &str) {
        if let Ok(tab) = id.parse::<Tab>() {
            self.select(tab);
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.is_dark_mode = !self.is_dark_mode;
    }

    pub fn mark_loaded(&mut self) {
        self.is_loaded = true;
    }

    pub fn update_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Some(CursorPosition { x, y });
    }

    /// First-mount transition: start entrance animations and adopt the
    /// OS colour scheme. `None` means the preference couldn't be queried,
    /// which gives light mode.
    pub fn mount(&mut self, prefers_dark: Option<bool>) {
        self.mark_loaded();
        self.is_dark_mode = prefers_dark.unwrap_or(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = ViewState::new();
        assert_eq!(state.active_tab(), Tab::Experience);
        assert!(!state.is_dark_mode());
        assert!(!state.is_loaded());
        assert_eq!(state.cursor(), None);
    }

    #[test]
    fn test_select_tab_by_id() {
        let mut state = ViewState::new();
        for tab in Tab::ALL {
            state.select_tab(tab.id());
            assert_eq!(state.active_tab(), tab);
            // exactly one tab reports active
            let active = Tab::ALL.iter().filter(|t| state.is_active(**t)).count();
            assert_eq!(active, 1);
        }
    }

    #[test]
    fn test_select_unknown_tab_is_ignored() {
        let mut state = ViewState::new();
        state.select(Tab::Education);
        state.select_tab("projects");
        assert_eq!(state.active_tab(), Tab::Education);
        state.select_tab("");
        assert_eq!(state.active_tab(), Tab::Education);
        // ids are case sensitive
        state.select_tab("Skills");
        assert_eq!(state.active_tab(), Tab::Education);
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!("skills".parse::<Tab>(), Ok(Tab::Skills));
        assert_eq!(
            "resume".parse::<Tab>(),
            Err(UnknownTab("resume".to_string()))
        );
        assert_eq!(Tab::Education.to_string(), "education");
    }

    #[test]
    fn test_toggle_dark_mode_twice_restores() {
        for start in [false, true] {
            let mut state = ViewState::new();
            state.mount(Some(start));
            state.toggle_dark_mode();
            assert_eq!(state.is_dark_mode(), !start);
            state.toggle_dark_mode();
            assert_eq!(state.is_dark_mode(), start);
        }
    }

    #[test]
    fn test_mark_loaded_idempotent() {
        let mut state = ViewState::new();
        state.mark_loaded();
        let once = state;
        state.mark_loaded();
        assert!(state.is_loaded());
        assert_eq!(state, once);
    }

    #[test]
    fn test_update_cursor_stores_raw_values() {
        let mut state = ViewState::new();
        state.update_cursor(-12, 40_000);
        assert_eq!(state.cursor(), Some(CursorPosition { x: -12, y: 40_000 }));
        state.update_cursor(3, 4);
        assert_eq!(state.cursor(), Some(CursorPosition { x: 3, y: 4 }));
        assert_eq!(state.active_tab(), Tab::Experience);
    }

    #[test]
    fn test_mount_adopts_preference() {
        let mut state = ViewState::new();
        state.mount(Some(true));
        assert!(state.is_loaded());
        assert!(state.is_dark_mode());
        let mut light = ViewState::new();
        light.mount(Some(false));
        assert!(!light.is_dark_mode());
        assert_eq!(light.active_tab(), Tab::Experience);
    }

    #[test]
    fn test_mount_without_preference_is_light() {
        let mut state = ViewState::new();
        state.toggle_dark_mode();
        state.mount(None);
        assert!(state.is_loaded());
        assert!(!state.is_dark_mode());
    }

    #[test]
    fn test_page_scenario() {
        let mut state = ViewState::new();
        state.mount(Some(false));
        assert_eq!(
            (state.active_tab(), state.is_dark_mode(), state.is_loaded()),
            (Tab::Experience, false, true)
        );
        state.select_tab("skills");
        assert_eq!(state.active_tab(), Tab::Skills);
        state.toggle_dark_mode();
        assert!(state.is_dark_mode());
        state.toggle_dark_mode();
        assert!(!state.is_dark_mode());
        assert_eq!(state.active_tab(), Tab::Skills);
        assert!(state.is_loaded());
    }
}
