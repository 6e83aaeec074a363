use std::sync::{Arc, Mutex};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use tradequest_core::Catalog;
use tradequest_core::model::{LandingTab, LessonId};

use crate::context::{CallToAction, LandingApp, build_app_context};
use crate::views::{LandingState, LandingView};

use super::landing::LandingTestHandles;

#[derive(Default)]
pub struct TestApp {
    pub catalog: Option<Catalog>,
    pub initial_tab: LandingTab,
    pub started: Mutex<Vec<LessonId>>,
    pub actions: Mutex<Vec<CallToAction>>,
}

impl LandingApp for TestApp {
    fn catalog(&self) -> Catalog {
        self.catalog.unwrap_or_default()
    }

    fn initial_tab(&self) -> LandingTab {
        self.initial_tab
    }

    fn start_lesson(&self, lesson_id: LessonId) {
        self.started.lock().unwrap().push(lesson_id);
    }

    fn call_to_action(&self, action: CallToAction) {
        self.actions.lock().unwrap().push(action);
    }
}

#[derive(Props, Clone)]
struct LandingHarnessProps {
    app: Arc<TestApp>,
    handles: LandingTestHandles,
}

impl PartialEq for LandingHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn LandingHarness(props: LandingHarnessProps) -> Element {
    let app: Arc<dyn LandingApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { LandingView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub app: Arc<TestApp>,
    handles: LandingTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn state(&self) -> LandingState {
        self.handles.state()
    }

    /// Runs `f` against the page state inside the runtime, then re-renders.
    pub fn update(&mut self, f: impl FnOnce(LandingState)) {
        let state = self.handles.state();
        self.dom.in_runtime(|| f(state));
        drive_dom(&mut self.dom);
    }

    pub fn start_lesson(&mut self, lesson_id: LessonId) {
        let start = self.handles.start_lesson();
        self.dom.in_runtime(|| start.call(lesson_id));
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_landing_harness(app: TestApp) -> ViewHarness {
    let app = Arc::new(app);
    let handles = LandingTestHandles::default();
    let dom = VirtualDom::new_with_props(
        LandingHarness,
        LandingHarnessProps {
            app: Arc::clone(&app),
            handles: handles.clone(),
        },
    );
    let mut harness = ViewHarness { dom, app, handles };
    harness.rebuild();
    harness
}
