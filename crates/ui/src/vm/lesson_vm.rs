use tradequest_core::model::{Glyph, Lesson, LessonId, LessonStatus};

/// UI-ready representation of one lesson stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCardVm {
    pub id: LessonId,
    pub title: String,
    pub description: String,
    pub icon: Glyph,
    pub status: LessonStatus,
    pub tooltip: &'static str,
    pub animation_delay_ms: u32,
}

impl LessonCardVm {
    /// The lesson to start when the card's control is activated, if it has one.
    #[must_use]
    pub fn start_target(&self) -> Option<LessonId> {
        self.status.is_startable().then_some(self.id)
    }

    #[must_use]
    pub fn card_class(&self) -> &'static str {
        match self.status {
            LessonStatus::Locked => "lesson-card lesson-card--locked",
            LessonStatus::Completed => "lesson-card lesson-card--completed",
            LessonStatus::Available => "lesson-card lesson-card--available",
        }
    }
}

#[must_use]
pub fn lesson_tooltip(status: LessonStatus) -> &'static str {
    match status {
        LessonStatus::Locked => "Complete previous lessons to unlock.",
        LessonStatus::Completed => "Lesson completed!",
        LessonStatus::Available => "Start this lesson.",
    }
}

#[must_use]
pub fn map_lesson_card(lesson: &Lesson) -> LessonCardVm {
    let status = lesson.status();
    LessonCardVm {
        id: lesson.id(),
        title: lesson.title().to_owned(),
        description: lesson.description().to_owned(),
        icon: lesson.icon(),
        status,
        tooltip: lesson_tooltip(status),
        animation_delay_ms: lesson.id().value().saturating_mul(100),
    }
}

#[must_use]
pub fn map_lesson_cards(lessons: &[&Lesson]) -> Vec<LessonCardVm> {
    lessons.iter().map(|lesson| map_lesson_card(lesson)).collect()
}

/// Runs `on_start` once if the card is startable. Returns whether it ran.
pub fn activate_start(card: &LessonCardVm, on_start: impl FnOnce(LessonId)) -> bool {
    match card.start_target() {
        Some(lesson_id) => {
            on_start(lesson_id);
            true
        }
        None => false,
    }
}
