mod badge;
mod faq;
mod glyph;
mod ids;
mod lesson;
mod tab;
mod testimonial;

pub use ids::{LessonId, ParseIdError};

pub use badge::{Badge, BadgeState};
pub use faq::FaqEntry;
pub use glyph::Glyph;
pub use lesson::{Lesson, LessonStatus};
pub use tab::{LandingTab, ParseTabError};
pub use testimonial::Testimonial;
