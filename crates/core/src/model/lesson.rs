use serde::Serialize;

use crate::model::{Glyph, LessonId};

/// One stage of the learning path.
///
/// The completed/locked flags are authored data. Nothing checks that they
/// progress monotonically along `id`; see [`crate::catalog::lock_order_warnings`]
/// for a report-only check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Lesson {
    id: LessonId,
    title: &'static str,
    description: &'static str,
    icon: Glyph,
    completed: bool,
    locked: bool,
}

impl Lesson {
    #[must_use]
    pub const fn new(
        id: u32,
        title: &'static str,
        description: &'static str,
        icon: Glyph,
        completed: bool,
        locked: bool,
    ) -> Self {
        Self {
            id: LessonId::new(id),
            title,
            description,
            icon,
            completed,
            locked,
        }
    }

    #[must_use]
    pub fn id(&self) -> LessonId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    #[must_use]
    pub fn icon(&self) -> Glyph {
        self.icon
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Resolves the display status. `locked` wins over `completed`.
    #[must_use]
    pub fn status(&self) -> LessonStatus {
        if self.locked {
            LessonStatus::Locked
        } else if self.completed {
            LessonStatus::Completed
        } else {
            LessonStatus::Available
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonStatus {
    Locked,
    Completed,
    Available,
}

impl LessonStatus {
    /// Only available lessons can be started.
    #[must_use]
    pub fn is_startable(self) -> bool {
        matches!(self, LessonStatus::Available)
    }
}
