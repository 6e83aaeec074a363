use dioxus::prelude::*;
use tradequest_core::Catalog;
use tradequest_core::filter::filter_lessons;
use tradequest_core::model::{Badge, FaqEntry, Glyph, LandingTab, LessonId};

use crate::components::{
    Alert, Card, FaqAccordion, GlyphIcon, LessonCard, Pill, PillVariant, ProgressBar, TabList,
    TestimonialCard, badge_tone,
};
use crate::context::CallToAction;
use crate::vm::{
    LessonCardVm, ProgressPanelVm, TestimonialCardVm, map_lesson_cards, map_progress_panel,
};

use super::state::LandingState;

#[component]
pub(super) fn HeroSection(on_action: EventHandler<CallToAction>) -> Element {
    rsx! {
        section { class: "section hero",
            div { class: "container hero-inner reveal",
                Pill { variant: PillVariant::Outline, icon: Glyph::Rocket, "New for 2024" }
                h1 { class: "hero-title",
                    "Level Up Your Trading"
                    br {}
                    span { class: "text-primary", "Duolingo Style." }
                }
                p { class: "hero-lead",
                    "Learn the stock market step by step, unlock new lessons, and earn badges as you go. Trading education has never been this fun and interactive."
                }
                button {
                    class: "btn btn-primary btn-lg",
                    r#type: "button",
                    onclick: move |_| on_action.call(CallToAction::GetStarted),
                    "Get Started"
                    GlyphIcon { glyph: Glyph::ArrowRight, size: 18 }
                }
            }
        }
    }
}

#[component]
pub(super) fn LearningPathSection(
    state: LandingState,
    catalog: Catalog,
    on_start: EventHandler<LessonId>,
) -> Element {
    let search = state.search();
    let active_tab = state.active_tab();

    let panel = match active_tab {
        LandingTab::Stages => {
            let lessons = map_lesson_cards(&filter_lessons(catalog.lessons, &search));
            rsx! { LessonGrid { lessons, on_start } }
        }
        LandingTab::Badges => rsx! {
            BadgesPanel { badges: catalog.badges.to_vec() }
        },
        LandingTab::Progress => rsx! {
            ProgressPanel { progress: map_progress_panel(catalog.lessons) }
        },
    };

    rsx! {
        section { class: "section learning-path",
            div { class: "container stack",
                header { class: "section-header",
                    div {
                        h2 { class: "section-title", "Your Learning Path" }
                        p { class: "text-muted",
                            "Progress through lessons, unlock new topics, and master trading concepts one stage at a time."
                        }
                    }
                    div { class: "landing-search",
                        input {
                            class: "input landing-search-input",
                            r#type: "text",
                            placeholder: "Search lessons...",
                            value: "{search}",
                            oninput: move |evt| state.set_search(evt.value()),
                        }
                    }
                }
                div { class: "tabs",
                    TabList {
                        active: active_tab,
                        on_select: move |tab| state.select_tab(tab),
                    }
                    div {
                        class: "tabs-content",
                        role: "tabpanel",
                        aria_labelledby: "tab-{active_tab}",
                        "data-tab": "{active_tab}",
                        {panel}
                    }
                }
            }
        }
    }
}

#[component]
fn LessonGrid(lessons: Vec<LessonCardVm>, on_start: EventHandler<LessonId>) -> Element {
    let empty = lessons.is_empty();
    rsx! {
        div { class: "lesson-grid",
            if empty {
                p { class: "lesson-grid-empty", "No lessons match that search." }
            }
            for card in lessons {
                LessonCard { key: "{card.id}", card, on_start }
            }
        }
    }
}

#[component]
fn BadgesPanel(badges: Vec<Badge>) -> Element {
    rsx! {
        div { class: "badge-grid",
            for badge in badges {
                Card { key: "{badge.name()}", class: "badge-card",
                    GlyphIcon { glyph: badge.icon(), size: 40, class: "{badge_tone(badge.icon())}" }
                    div { class: "badge-name", "{badge.name()}" }
                    Pill { variant: PillVariant::Secondary, "{badge.state().label()}" }
                }
            }
        }
    }
}

#[component]
fn ProgressPanel(progress: ProgressPanelVm) -> Element {
    rsx! {
        Card { class: "progress-card",
            div { class: "progress-card-header",
                GlyphIcon { glyph: Glyph::BarChart, size: 24, class: "tone-primary" }
                div { class: "progress-card-title", "Overall Progress" }
                span { class: "progress-card-percent", "{progress.percent_label}" }
            }
            ProgressBar { value: progress.percent, class: "progress--lg" }
            div { class: "text-muted", "{progress.summary}" }
        }
    }
}

#[component]
pub(super) fn TestimonialsSection(testimonials: Vec<TestimonialCardVm>) -> Element {
    rsx! {
        section { class: "section testimonials",
            div { class: "container",
                div { class: "section-intro reveal",
                    h2 { class: "section-title", "Hear From Our Learners" }
                    p { class: "text-muted",
                        "Join thousands of aspiring traders who are mastering the stock market, one lesson at a time."
                    }
                }
                div { class: "testimonial-grid",
                    for (index, testimonial) in testimonials.into_iter().enumerate() {
                        TestimonialCard { key: "{index}", testimonial }
                    }
                }
            }
        }
    }
}

#[component]
pub(super) fn FaqSection(entries: Vec<FaqEntry>) -> Element {
    rsx! {
        section { class: "section faq",
            div { class: "container container--narrow",
                div { class: "section-intro reveal",
                    h2 { class: "section-title", "Frequently Asked Questions" }
                }
                FaqAccordion { entries }
            }
        }
    }
}

#[component]
pub(super) fn CallToActionSection(on_action: EventHandler<CallToAction>) -> Element {
    rsx! {
        section { class: "section cta",
            div { class: "container section-intro reveal",
                h2 { class: "cta-title", "Ready to start your trading journey?" }
                p { class: "text-muted",
                    "Sign up now and unlock your first lesson today. No experience required."
                }
                button {
                    class: "btn btn-primary btn-lg",
                    r#type: "button",
                    onclick: move |_| on_action.call(CallToAction::StartLearning),
                    "Start Learning"
                    GlyphIcon { glyph: Glyph::Rocket, size: 18 }
                }
            }
        }
    }
}

#[component]
pub(super) fn BetaNotice() -> Element {
    rsx! {
        div { class: "beta-notice",
            Alert { icon: Glyph::BarChart, title: "Beta Release",
                "This app is in early access. Your feedback helps us improve!"
            }
        }
    }
}
