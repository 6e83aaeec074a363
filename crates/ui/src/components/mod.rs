mod accordion;
mod icon;
mod lesson_card;
mod primitives;
mod tabs;
mod testimonial_card;

pub use accordion::{FaqAccordion, toggle_item};
pub use icon::{GlyphIcon, badge_tone, lesson_tone};
pub use lesson_card::LessonCard;
pub use primitives::{Alert, Avatar, Card, Pill, PillVariant, ProgressBar, Tooltip, clamp_percent};
pub use tabs::TabList;
pub use testimonial_card::TestimonialCard;
