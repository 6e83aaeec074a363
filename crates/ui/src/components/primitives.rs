//! Small presentational building blocks shared by the landing sections.

use dioxus::prelude::*;
use tradequest_core::model::Glyph;

use super::icon::GlyphIcon;

#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card {class}",
            {children}
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PillVariant {
    Success,
    Secondary,
    Outline,
}

impl PillVariant {
    fn class(self) -> &'static str {
        match self {
            PillVariant::Success => "pill pill--success",
            PillVariant::Secondary => "pill pill--secondary",
            PillVariant::Outline => "pill pill--outline",
        }
    }
}

/// Inline status label (the "badge" primitive).
#[component]
pub fn Pill(variant: PillVariant, icon: Option<Glyph>, children: Element) -> Element {
    rsx! {
        span { class: variant.class(),
            if let Some(glyph) = icon {
                GlyphIcon { glyph, size: 16 }
            }
            {children}
        }
    }
}

/// Clamps a percentage into `0..=100`. NaN renders as empty.
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

#[component]
pub fn ProgressBar(value: f64, #[props(default)] class: String) -> Element {
    let value = clamp_percent(value);
    rsx! {
        div {
            class: "progress {class}",
            role: "progressbar",
            aria_valuemin: "0",
            aria_valuemax: "100",
            aria_valuenow: "{value}",
            div { class: "progress-fill", style: "width: {value}%;" }
        }
    }
}

/// Hover hint around arbitrary content.
#[component]
pub fn Tooltip(text: String, children: Element) -> Element {
    rsx! {
        div { class: "tooltip", title: "{text}",
            {children}
            span { class: "tooltip-content", role: "tooltip", "{text}" }
        }
    }
}

/// Image avatar that falls back to `fallback` when there is no source or the
/// image fails to load.
#[component]
pub fn Avatar(src: Option<String>, alt: String, fallback: String) -> Element {
    let mut failed = use_signal(|| false);
    let show_image = src.is_some() && !failed();
    rsx! {
        span { class: "avatar",
            if show_image {
                if let Some(src) = src.as_ref() {
                    img {
                        class: "avatar-image",
                        src: "{src}",
                        alt: "{alt}",
                        onerror: move |_| {
                            tracing::debug!("avatar image failed to load, showing initial");
                            failed.set(true);
                        },
                    }
                }
            } else {
                span { class: "avatar-fallback", "{fallback}" }
            }
        }
    }
}

#[component]
pub fn Alert(icon: Glyph, title: String, children: Element) -> Element {
    rsx! {
        div { class: "alert", role: "alert",
            GlyphIcon { glyph: icon, size: 20, class: "tone-primary" }
            div { class: "alert-body",
                h5 { class: "alert-title", "{title}" }
                div { class: "alert-description",
                    {children}
                }
            }
        }
    }
}
