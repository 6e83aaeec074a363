use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    question: &'static str,
    answer: &'static str,
}

impl FaqEntry {
    #[must_use]
    pub const fn new(question: &'static str, answer: &'static str) -> Self {
        Self { question, answer }
    }

    #[must_use]
    pub fn question(&self) -> &'static str {
        self.question
    }

    #[must_use]
    pub fn answer(&self) -> &'static str {
        self.answer
    }
}
