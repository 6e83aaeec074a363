use std::sync::Arc;

use tradequest_core::Catalog;
use tradequest_core::model::{LandingTab, LessonId};

/// Inert buttons on the page. Handled by [`LandingApp::call_to_action`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallToAction {
    /// Hero "Get Started".
    GetStarted,
    /// Closing section "Start Learning".
    StartLearning,
}

/// What the composition root plugs into the page.
///
/// The handlers default to logging only; navigation to real lesson pages is
/// left to implementors.
pub trait LandingApp: Send + Sync {
    fn catalog(&self) -> Catalog {
        Catalog::builtin()
    }

    fn initial_tab(&self) -> LandingTab {
        LandingTab::default()
    }

    fn start_lesson(&self, lesson_id: LessonId) {
        tracing::debug!(%lesson_id, "start lesson requested");
    }

    fn call_to_action(&self, action: CallToAction) {
        tracing::debug!(?action, "call to action pressed");
    }
}

/// Built-in content with placeholder handlers.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticLanding;

impl LandingApp for StaticLanding {}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn LandingApp>,
    catalog: Catalog,
    initial_tab: LandingTab,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn LandingApp>) -> Self {
        Self {
            app: Arc::clone(app),
            catalog: app.catalog(),
            initial_tab: app.initial_tab(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    #[must_use]
    pub fn initial_tab(&self) -> LandingTab {
        self.initial_tab
    }

    pub fn start_lesson(&self, lesson_id: LessonId) {
        self.app.start_lesson(lesson_id);
    }

    pub fn call_to_action(&self, action: CallToAction) {
        self.app.call_to_action(action);
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn LandingApp>) -> AppContext {
    AppContext::new(app)
}
