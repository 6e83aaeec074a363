use dioxus::prelude::*;
use tradequest_core::model::LandingTab;

#[component]
pub fn TabList(active: LandingTab, on_select: EventHandler<LandingTab>) -> Element {
    rsx! {
        div { class: "tabs-list", role: "tablist",
            for tab in LandingTab::ALL {
                TabTrigger { key: "{tab}", tab, active, on_select }
            }
        }
    }
}

#[component]
fn TabTrigger(tab: LandingTab, active: LandingTab, on_select: EventHandler<LandingTab>) -> Element {
    let is_active = tab == active;
    rsx! {
        button {
            class: if is_active { "tabs-trigger tabs-trigger--active" } else { "tabs-trigger" },
            r#type: "button",
            role: "tab",
            id: "tab-{tab}",
            aria_selected: if is_active { "true" } else { "false" },
            onclick: move |_| on_select.call(tab),
            "{tab.label()}"
        }
    }
}
