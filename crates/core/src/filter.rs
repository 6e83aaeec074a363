use crate::model::Lesson;

/// True if `query` appears, ignoring case, in the lesson's title or
/// description. An empty query matches everything.
#[must_use]
pub fn lesson_matches(lesson: &Lesson, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    lesson.title().to_lowercase().contains(&query)
        || lesson.description().to_lowercase().contains(&query)
}

/// Lessons matching `query`, in their original order.
#[must_use]
pub fn filter_lessons<'a>(lessons: &'a [Lesson], query: &str) -> Vec<&'a Lesson> {
    lessons
        .iter()
        .filter(|lesson| lesson_matches(lesson, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LESSONS;

    fn titles(query: &str) -> Vec<&'static str> {
        filter_lessons(&LESSONS, query)
            .into_iter()
            .map(Lesson::title)
            .collect()
    }

    #[test]
    fn empty_query_keeps_all_lessons() {
        assert_eq!(filter_lessons(&LESSONS, "").len(), 5);
    }

    #[test]
    fn matches_title_ignoring_case() {
        assert_eq!(titles("RISK"), vec!["Risk Management"]);
        assert_eq!(titles("stock"), vec!["Stock Market Basics", "Reading Stock Charts"]);
    }

    #[test]
    fn matches_description_substring() {
        // "limit" only appears in the description of lesson 2.
        assert_eq!(titles("LiMiT"), vec!["Types of Orders"]);
        // Mid-word substring, not just prefixes.
        assert_eq!(titles("ortfol"), vec!["Risk Management"]);
    }

    #[test]
    fn no_match_returns_empty_list() {
        assert!(filter_lessons(&LESSONS, "crypto").is_empty());
    }

    #[test]
    fn query_is_not_trimmed() {
        assert!(filter_lessons(&LESSONS, " basics ").is_empty());
        assert_eq!(titles(" basics"), vec!["Stock Market Basics"]);
    }

    #[test]
    fn keeps_input_order() {
        let ids: Vec<u32> = filter_lessons(&LESSONS, "e")
            .into_iter()
            .map(|lesson| lesson.id().value())
            .collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
