mod sections;
mod state;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use tradequest_core::model::LessonId;

use crate::context::{AppContext, CallToAction};
use crate::vm::map_testimonial_cards;

use sections::{
    BetaNotice, CallToActionSection, FaqSection, HeroSection, LearningPathSection,
    TestimonialsSection,
};
pub use state::{LandingState, use_landing_state};

/// The whole landing page. Owns the search text and active tab; everything
/// below it receives state explicitly.
#[component]
pub fn LandingView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let state = use_landing_state(ctx.initial_tab());

    let start_ctx = ctx.clone();
    let start_lesson = use_callback(move |lesson_id: LessonId| start_ctx.start_lesson(lesson_id));
    let cta_ctx = ctx.clone();
    let call_to_action =
        use_callback(move |action: CallToAction| cta_ctx.call_to_action(action));

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<LandingTestHandles>() {
                handles.register(state, start_lesson);
            }
        }
    }

    rsx! {
        main { class: "landing",
            HeroSection { on_action: call_to_action }
            LearningPathSection { state, catalog, on_start: start_lesson }
            TestimonialsSection { testimonials: map_testimonial_cards(catalog.testimonials) }
            FaqSection { entries: catalog.faq.to_vec() }
            CallToActionSection { on_action: call_to_action }
            BetaNotice {}
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LandingTestHandles {
    state: Rc<RefCell<Option<LandingState>>>,
    start_lesson: Rc<RefCell<Option<Callback<LessonId>>>>,
}

#[cfg(test)]
impl LandingTestHandles {
    pub(crate) fn register(&self, state: LandingState, start_lesson: Callback<LessonId>) {
        *self.state.borrow_mut() = Some(state);
        *self.start_lesson.borrow_mut() = Some(start_lesson);
    }

    pub(crate) fn state(&self) -> LandingState {
        (*self.state.borrow()).expect("landing state registered")
    }

    pub(crate) fn start_lesson(&self) -> Callback<LessonId> {
        (*self.start_lesson.borrow()).expect("start callback registered")
    }
}
