use tradequest_core::model::Lesson;
use tradequest_core::progress::OverallProgress;

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressPanelVm {
    pub percent: f64,
    pub percent_label: String,
    pub summary: String,
}

/// Recomputed from `lessons` on every call.
#[must_use]
pub fn map_progress_panel(lessons: &[Lesson]) -> ProgressPanelVm {
    let progress = OverallProgress::from_lessons(lessons);
    let percent = progress.percent();
    ProgressPanelVm {
        percent,
        percent_label: format!("{percent:.0}%"),
        summary: format!(
            "{} of {} lessons completed",
            progress.completed, progress.total
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradequest_core::catalog::LESSONS;

    #[test]
    fn builtin_progress_panel_reads_forty_percent() {
        let vm = map_progress_panel(&LESSONS);
        assert!((vm.percent - 40.0).abs() < f64::EPSILON);
        assert_eq!(vm.percent_label, "40%");
        assert_eq!(vm.summary, "2 of 5 lessons completed");
    }

    #[test]
    fn empty_lessons_read_zero() {
        let vm = map_progress_panel(&[]);
        assert_eq!(vm.percent_label, "0%");
        assert_eq!(vm.summary, "0 of 0 lessons completed");
    }
}
