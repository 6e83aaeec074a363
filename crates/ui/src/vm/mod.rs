mod lesson_vm;
mod progress_vm;
mod testimonial_vm;

pub use lesson_vm::{LessonCardVm, activate_start, lesson_tooltip, map_lesson_card, map_lesson_cards};
pub use progress_vm::{ProgressPanelVm, map_progress_panel};
pub use testimonial_vm::{TestimonialCardVm, map_testimonial_card, map_testimonial_cards};
