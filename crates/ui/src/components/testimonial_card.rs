use dioxus::prelude::*;

use crate::vm::TestimonialCardVm;

use super::primitives::{Avatar, Card, ProgressBar};

#[component]
pub fn TestimonialCard(testimonial: TestimonialCardVm) -> Element {
    rsx! {
        div { class: "testimonial",
            Card { class: "testimonial-card",
                div { class: "testimonial-header",
                    Avatar {
                        src: testimonial.avatar_src.clone(),
                        alt: testimonial.avatar_alt.clone(),
                        fallback: testimonial.initial.clone(),
                    }
                    div {
                        div { class: "testimonial-name", "{testimonial.name}" }
                        ProgressBar {
                            value: f64::from(testimonial.progress),
                            class: "testimonial-progress",
                        }
                    }
                }
                blockquote { class: "testimonial-quote", "\" {testimonial.quote} \"" }
            }
        }
    }
}
