//! Built-in page content.
//!
//! Every table is a process-wide constant. Views receive a [`Catalog`] instead
//! of reaching for the constants directly, so tests can swap in their own data.

use serde::Serialize;

use crate::model::{Badge, BadgeState, FaqEntry, Glyph, Lesson, LessonId, Testimonial};

pub const LESSONS: [Lesson; 5] = [
    Lesson::new(
        1,
        "Stock Market Basics",
        "Understand what stocks are and how trading works.",
        Glyph::Award,
        true,
        false,
    ),
    Lesson::new(
        2,
        "Types of Orders",
        "Learn about market, limit, and stop orders.",
        Glyph::BarChart,
        true,
        false,
    ),
    Lesson::new(
        3,
        "Reading Stock Charts",
        "Analyze trends and price movement.",
        Glyph::Calendar,
        false,
        false,
    ),
    Lesson::new(
        4,
        "Risk Management",
        "Protect your portfolio and manage losses.",
        Glyph::Users,
        false,
        true,
    ),
    Lesson::new(
        5,
        "Developing a Strategy",
        "Build and test your trading approach.",
        Glyph::Rocket,
        false,
        true,
    ),
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial::new(
        "Alex Chen",
        "/avatars/alex.png",
        "I never thought I'd understand trading. This app made learning the stock market fun and achievable!",
        80,
    ),
    Testimonial::new(
        "Morgan Lee",
        "/avatars/morgan.png",
        "The lesson stages keep me motivated every day. It's the Duolingo of investing!",
        60,
    ),
    Testimonial::new(
        "Jordan Smith",
        "/avatars/jordan.png",
        "I love earning badges as I level up my trading knowledge. Highly recommend!",
        95,
    ),
];

pub const BADGES: [Badge; 3] = [
    Badge::new("Beginner Trader", Glyph::Award, BadgeState::Earned),
    Badge::new("Chart Reader", Glyph::BarChart, BadgeState::Locked),
    Badge::new("Market Explorer", Glyph::Rocket, BadgeState::Locked),
];

pub const FAQ: [FaqEntry; 4] = [
    FaqEntry::new(
        "Is this app free to use?",
        "Yes! You can access all the core lessons for free. We may offer advanced features in the future.",
    ),
    FaqEntry::new(
        "Do I need prior trading experience?",
        "No prior experience is needed. We start with the basics and guide you through each concept step by step.",
    ),
    FaqEntry::new(
        "How are lessons structured?",
        "Lessons are grouped into stages. Complete each stage to unlock the next, just like Duolingo!",
    ),
    FaqEntry::new(
        "Can I track my progress?",
        "Absolutely! Your progress is visualized after each lesson and in the progress tab.",
    ),
];

/// Borrowed view over one set of content tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub lessons: &'static [Lesson],
    pub testimonials: &'static [Testimonial],
    pub badges: &'static [Badge],
    pub faq: &'static [FaqEntry],
}

impl Catalog {
    /// The content shipped with the page.
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            lessons: &LESSONS,
            testimonials: &TESTIMONIALS,
            badges: &BADGES,
            faq: &FAQ,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A lesson whose flags contradict the order implied by earlier lessons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockOrderWarning {
    /// Marked completed while an earlier lesson is still locked.
    CompletedAfterLocked { lesson: LessonId, locked: LessonId },
    /// Unlocked while an earlier lesson is still locked.
    UnlockedAfterLocked { lesson: LessonId, locked: LessonId },
}

impl std::fmt::Display for LockOrderWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LockOrderWarning::CompletedAfterLocked { lesson, locked } => write!(
                f,
                "lesson {lesson} is completed but earlier lesson {locked} is locked"
            ),
            LockOrderWarning::UnlockedAfterLocked { lesson, locked } => write!(
                f,
                "lesson {lesson} is unlocked but earlier lesson {locked} is locked"
            ),
        }
    }
}

/// Reports lessons that break monotonic lock order. Report only: rendering
/// never consults this and nothing is rejected.
#[must_use]
pub fn lock_order_warnings(lessons: &[Lesson]) -> Vec<LockOrderWarning> {
    let mut ordered: Vec<&Lesson> = lessons.iter().collect();
    ordered.sort_by_key(|lesson| lesson.id());

    let mut first_locked: Option<LessonId> = None;
    let mut warnings = Vec::new();
    for lesson in ordered {
        match first_locked {
            None if lesson.is_locked() => first_locked = Some(lesson.id()),
            None => {}
            Some(locked) if lesson.is_completed() => {
                warnings.push(LockOrderWarning::CompletedAfterLocked {
                    lesson: lesson.id(),
                    locked,
                });
            }
            Some(locked) if !lesson.is_locked() => {
                warnings.push(LockOrderWarning::UnlockedAfterLocked {
                    lesson: lesson.id(),
                    locked,
                });
            }
            Some(_) => {}
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_expected_sizes() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.lessons.len(), 5);
        assert_eq!(catalog.testimonials.len(), 3);
        assert_eq!(catalog.badges.len(), 3);
        assert_eq!(catalog.faq.len(), 4);
    }

    #[test]
    fn builtin_lesson_ids_are_unique_and_ordered() {
        let ids: Vec<u32> = LESSONS.iter().map(|lesson| lesson.id().value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn builtin_lessons_follow_lock_order() {
        assert!(lock_order_warnings(&LESSONS).is_empty());
    }

    #[test]
    fn reports_completed_lesson_after_locked_one() {
        let lessons = [
            Lesson::new(1, "A", "a", Glyph::Award, false, true),
            Lesson::new(2, "B", "b", Glyph::Award, true, true),
        ];
        assert_eq!(
            lock_order_warnings(&lessons),
            vec![LockOrderWarning::CompletedAfterLocked {
                lesson: LessonId::new(2),
                locked: LessonId::new(1),
            }]
        );
    }

    #[test]
    fn reports_unlocked_lesson_after_locked_one() {
        let lessons = [
            Lesson::new(2, "B", "b", Glyph::Award, false, false),
            Lesson::new(1, "A", "a", Glyph::Award, false, true),
        ];
        let warnings = lock_order_warnings(&lessons);
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].to_string(),
            "lesson 2 is unlocked but earlier lesson 1 is locked"
        );
    }

    #[test]
    fn catalog_serializes_content_tables() {
        let json = serde_json::to_value(Catalog::builtin()).unwrap();
        assert_eq!(json["lessons"][0]["title"], "Stock Market Basics");
        assert_eq!(json["lessons"][0]["icon"], "award");
        assert_eq!(json["badges"][0]["state"], "earned");
        assert_eq!(json["testimonials"][2]["progress"], 95);
    }
}
