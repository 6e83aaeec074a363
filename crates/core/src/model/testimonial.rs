use serde::Serialize;

/// A learner quote shown on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    name: &'static str,
    avatar: &'static str,
    text: &'static str,
    progress: i32,
}

impl Testimonial {
    #[must_use]
    pub const fn new(
        name: &'static str,
        avatar: &'static str,
        text: &'static str,
        progress: i32,
    ) -> Self {
        Self {
            name,
            avatar,
            text,
            progress,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Image path. May be empty or point at a missing file.
    #[must_use]
    pub fn avatar(&self) -> &'static str {
        self.avatar
    }

    #[must_use]
    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Stored progress, unvalidated.
    #[must_use]
    pub fn progress(&self) -> i32 {
        self.progress
    }

    /// Progress clamped to `0..=100`.
    #[must_use]
    pub fn clamped_progress(&self) -> u8 {
        // Clamped to 0..=100 so the cast is lossless.
        self.progress.clamp(0, 100) as u8
    }

    /// First character of the name, used when the avatar image is unavailable.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map_or_else(|| "?".to_string(), |ch| ch.to_string())
    }
}
