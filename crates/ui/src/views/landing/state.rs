use dioxus::prelude::*;
use tradequest_core::model::LandingTab;

/// Transient view state owned by the landing page. The two signals are
/// independent: writing one never touches the other.
#[derive(Clone, Copy, PartialEq)]
pub struct LandingState {
    pub search: Signal<String>,
    pub active_tab: Signal<LandingTab>,
}

impl LandingState {
    #[must_use]
    pub fn search(&self) -> String {
        self.search.cloned()
    }

    #[must_use]
    pub fn active_tab(&self) -> LandingTab {
        *self.active_tab.read()
    }

    pub fn set_search(&self, value: String) {
        tracing::trace!(len = value.len(), "lesson search updated");
        let mut search = self.search;
        search.set(value);
    }

    pub fn select_tab(&self, tab: LandingTab) {
        if self.active_tab() == tab {
            return;
        }
        tracing::debug!(%tab, "landing tab selected");
        let mut active_tab = self.active_tab;
        active_tab.set(tab);
    }
}

pub fn use_landing_state(initial_tab: LandingTab) -> LandingState {
    let search = use_signal(String::new);
    let active_tab = use_signal(|| initial_tab);
    LandingState { search, active_tab }
}
