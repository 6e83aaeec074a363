use dioxus::prelude::*;
use tradequest_core::model::FaqEntry;

/// Single-open, collapsible: opening an item closes the others and clicking
/// the open item closes it.
#[must_use]
pub fn toggle_item(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) { None } else { Some(index) }
}

#[component]
pub fn FaqAccordion(entries: Vec<FaqEntry>) -> Element {
    let open = use_signal(|| None::<usize>);
    rsx! {
        div { class: "accordion",
            for (index, entry) in entries.into_iter().enumerate() {
                FaqItem {
                    key: "{index}",
                    index,
                    entry,
                    expanded: open() == Some(index),
                    open,
                }
            }
        }
    }
}

#[component]
fn FaqItem(index: usize, entry: FaqEntry, expanded: bool, open: Signal<Option<usize>>) -> Element {
    rsx! {
        div { class: "accordion-item",
            button {
                class: if expanded {
                    "accordion-trigger accordion-trigger--open"
                } else {
                    "accordion-trigger"
                },
                r#type: "button",
                aria_expanded: if expanded { "true" } else { "false" },
                onclick: move |_| {
                    let mut open = open;
                    let next = toggle_item(open(), index);
                    open.set(next);
                },
                span { "{entry.question()}" }
                span { class: "accordion-caret" }
            }
            if expanded {
                div { class: "accordion-content",
                    "{entry.answer()}"
                }
            }
        }
    }
}
