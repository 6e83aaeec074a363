use tradequest_core::Catalog;
use tradequest_core::model::{Glyph, LandingTab, Lesson, LessonId, Testimonial};

use super::test_harness::{TestApp, setup_landing_harness};

static CONFLICTED_LESSONS: [Lesson; 1] = [Lesson::new(
    7,
    "Options Basics",
    "Calls and puts.",
    Glyph::Rocket,
    true,
    true,
)];

static NO_AVATAR_TESTIMONIALS: [Testimonial; 1] =
    [Testimonial::new("Quinn Park", "", "Great app.", 130)];

fn lesson_card_count(html: &str) -> usize {
    html.matches("class=\"card lesson-card ").count()
}

#[test]
fn landing_smoke_renders_all_sections() {
    let harness = setup_landing_harness(TestApp::default());
    let html = harness.render();
    for expected in [
        "New for 2024",
        "Duolingo Style.",
        "Get Started",
        "Your Learning Path",
        "Hear From Our Learners",
        "Frequently Asked Questions",
        "Ready to start your trading journey?",
        "Start Learning",
        "Beta Release",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[test]
fn landing_smoke_lists_all_lessons_for_empty_search() {
    let harness = setup_landing_harness(TestApp::default());
    let html = harness.render();
    assert_eq!(harness.state().search(), "");
    assert_eq!(harness.state().active_tab(), LandingTab::Stages);
    assert_eq!(lesson_card_count(&html), 5, "{html}");
    assert_eq!(html.matches("lesson-card--completed").count(), 2);
    assert_eq!(html.matches("lesson-card--locked").count(), 2);
    assert_eq!(html.matches("lesson-card--available").count(), 1);
    assert_eq!(html.matches("Start Lesson").count(), 1);
    assert!(html.contains("Complete previous lessons to unlock."));
    assert!(html.contains("Lesson completed!"));
    assert!(html.contains("Start this lesson."));
}

#[test]
fn landing_smoke_filters_lessons_case_insensitively() {
    let mut harness = setup_landing_harness(TestApp::default());
    harness.update(|state| state.set_search("CHART".to_string()));
    let html = harness.render();
    assert_eq!(lesson_card_count(&html), 1, "{html}");
    assert!(html.contains("Reading Stock Charts"));
    assert!(!html.contains("Risk Management"));
}

#[test]
fn landing_smoke_renders_empty_grid_for_unmatched_search() {
    let mut harness = setup_landing_harness(TestApp::default());
    harness.update(|state| state.set_search("crypto".to_string()));
    let html = harness.render();
    assert_eq!(lesson_card_count(&html), 0);
    assert!(html.contains("No lessons match that search."), "{html}");
}

#[test]
fn landing_smoke_tab_and_search_are_independent() {
    let mut harness = setup_landing_harness(TestApp::default());
    harness.update(|state| state.set_search("risk".to_string()));
    harness.update(|state| state.select_tab(LandingTab::Badges));

    assert_eq!(harness.state().search(), "risk");
    let html = harness.render();
    assert!(html.contains("Beginner Trader"), "{html}");
    assert!(html.contains("Earned"));
    assert_eq!(lesson_card_count(&html), 0);

    harness.update(|state| state.select_tab(LandingTab::Stages));
    assert_eq!(harness.state().search(), "risk");
    let html = harness.render();
    assert_eq!(lesson_card_count(&html), 1);
    assert!(html.contains("Risk Management"));

    harness.update(|state| state.set_search(String::new()));
    assert_eq!(harness.state().active_tab(), LandingTab::Stages);
    assert_eq!(lesson_card_count(&harness.render()), 5);
}

#[test]
fn landing_smoke_progress_panel_shows_forty_percent() {
    let mut harness = setup_landing_harness(TestApp::default());
    harness.update(|state| state.select_tab(LandingTab::Progress));
    let html = harness.render();
    assert!(html.contains("Overall Progress"), "{html}");
    assert!(html.contains("40%"));
    assert!(html.contains("width: 40%;"));
    assert!(html.contains("2 of 5 lessons completed"));
}

#[test]
fn landing_smoke_opens_on_configured_tab() {
    let harness = setup_landing_harness(TestApp {
        initial_tab: LandingTab::Badges,
        ..TestApp::default()
    });
    let html = harness.render();
    assert!(html.contains("Market Explorer"), "{html}");
    assert_eq!(lesson_card_count(&html), 0);
}

#[test]
fn landing_smoke_start_callback_reaches_app() {
    let mut harness = setup_landing_harness(TestApp::default());
    harness.start_lesson(LessonId::new(3));
    assert_eq!(*harness.app.started.lock().unwrap(), vec![LessonId::new(3)]);
    assert!(harness.app.actions.lock().unwrap().is_empty());
}

#[test]
fn landing_smoke_locked_and_completed_lesson_has_no_start_control() {
    let catalog = Catalog {
        lessons: &CONFLICTED_LESSONS,
        ..Catalog::builtin()
    };
    let harness = setup_landing_harness(TestApp {
        catalog: Some(catalog),
        ..TestApp::default()
    });
    let html = harness.render();
    assert_eq!(lesson_card_count(&html), 1);
    assert!(html.contains("lesson-card--locked"));
    assert!(!html.contains("Start Lesson"));
    assert!(!html.contains(">Completed<"));
}

#[test]
fn landing_smoke_testimonials_render_avatars_and_progress() {
    let harness = setup_landing_harness(TestApp::default());
    let html = harness.render();
    assert!(html.contains("alt=\"Alex Chen"), "{html}");
    assert!(html.contains("/avatars/morgan.png"));
    assert!(html.contains("width: 95%;"));
}

#[test]
fn landing_smoke_testimonial_without_avatar_shows_initial() {
    let catalog = Catalog {
        testimonials: &NO_AVATAR_TESTIMONIALS,
        ..Catalog::builtin()
    };
    let harness = setup_landing_harness(TestApp {
        catalog: Some(catalog),
        ..TestApp::default()
    });
    let html = harness.render();
    assert!(html.contains("avatar-fallback"), "{html}");
    assert!(html.contains(">Q<"));
    // 130 is clamped.
    assert!(html.contains("width: 100%;"));
}

#[test]
fn landing_smoke_faq_starts_collapsed() {
    let harness = setup_landing_harness(TestApp::default());
    let html = harness.render();
    assert!(html.contains("Is this app free to use?"));
    assert!(html.contains("Can I track my progress?"));
    assert!(!html.contains("We may offer advanced features"));
}
