use dioxus::prelude::*;
use tradequest_core::model::{Glyph, LessonId, LessonStatus};

use crate::vm::{LessonCardVm, activate_start};

use super::icon::{GlyphIcon, lesson_tone};
use super::primitives::{Pill, PillVariant, Tooltip};

#[component]
pub fn LessonCard(card: LessonCardVm, on_start: EventHandler<LessonId>) -> Element {
    let locked = card.status == LessonStatus::Locked;
    let footer = match card.status {
        LessonStatus::Locked => rsx! {
            Pill { variant: PillVariant::Secondary, icon: Glyph::XCircle, "Locked" }
        },
        LessonStatus::Completed => rsx! {
            Pill { variant: PillVariant::Success, icon: Glyph::CheckCircle, "Completed" }
        },
        LessonStatus::Available => {
            let target = card.clone();
            rsx! {
                button {
                    class: "btn btn-primary btn-sm",
                    r#type: "button",
                    onclick: move |_| {
                        activate_start(&target, |lesson_id| on_start.call(lesson_id));
                    },
                    "Start Lesson"
                }
            }
        }
    };

    rsx! {
        div {
            class: "lesson-stage",
            style: "animation-delay: {card.animation_delay_ms}ms;",
            Tooltip { text: "{card.tooltip}",
                div {
                    class: "card {card.card_class()}",
                    aria_disabled: if locked { "true" } else { "false" },
                    div { class: "card-header",
                        GlyphIcon { glyph: card.icon, size: 28, class: "{lesson_tone(card.icon)}" }
                        h3 { class: "card-title", "{card.title}" }
                        p { class: "card-description", "{card.description}" }
                    }
                    div { class: "card-footer",
                        {footer}
                    }
                }
            }
        }
    }
}
