use crate::model::Lesson;

/// Aggregate completion across a lesson list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverallProgress {
    pub completed: usize,
    pub total: usize,
}

impl OverallProgress {
    #[must_use]
    pub fn from_lessons(lessons: &[Lesson]) -> Self {
        Self {
            completed: lessons.iter().filter(|lesson| lesson.is_completed()).count(),
            total: lessons.len(),
        }
    }

    /// `completed / total * 100`. Zero lessons means zero percent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 * 100.0 / self.total as f64
    }
}
