use dioxus::prelude::*;
use tradequest_core::model::Glyph;

/// Stroke paths on a 24x24 grid.
fn glyph_paths(glyph: Glyph) -> &'static [&'static str] {
    match glyph {
        Glyph::Award => &[
            "M6 8a6 6 0 1 0 12 0a6 6 0 1 0 -12 0",
            "M15.48 12.89 17 22l-5-3-5 3 1.52-9.11",
        ],
        Glyph::BarChart => &["M18 20V10", "M12 20V4", "M6 20v-6"],
        Glyph::Calendar => &[
            "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "M16 2v4",
            "M8 2v4",
            "M3 10h18",
        ],
        Glyph::Users => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M5 7a4 4 0 1 0 8 0a4 4 0 1 0 -8 0",
            "M22 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        Glyph::Rocket => &[
            "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z",
            "M12 15l-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z",
            "M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0",
            "M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5",
        ],
        Glyph::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "M22 4 12 14.01l-3-3"],
        Glyph::XCircle => &[
            "M2 12a10 10 0 1 0 20 0a10 10 0 1 0 -20 0",
            "M15 9l-6 6",
            "M9 9l6 6",
        ],
        Glyph::ArrowRight => &["M5 12h14", "M12 5l7 7-7 7"],
    }
}

/// Colour applied to a glyph on a lesson card.
#[must_use]
pub fn lesson_tone(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Award => "tone-green",
        Glyph::BarChart => "tone-blue",
        Glyph::Calendar => "tone-purple",
        Glyph::Users => "tone-yellow",
        Glyph::Rocket => "tone-red",
        Glyph::CheckCircle | Glyph::XCircle | Glyph::ArrowRight => "tone-primary",
    }
}

/// Colour applied to a glyph in the badges panel.
#[must_use]
pub fn badge_tone(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Award => "tone-yellow",
        Glyph::BarChart => "tone-green",
        Glyph::Rocket => "tone-red",
        _ => "tone-primary",
    }
}

#[component]
pub fn GlyphIcon(
    glyph: Glyph,
    #[props(default = 24)] size: u32,
    #[props(default)] class: String,
) -> Element {
    let paths = glyph_paths(glyph);
    rsx! {
        svg {
            class: "icon icon-{glyph.name()} {class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in paths.iter() {
                path { d: "{d}" }
            }
        }
    }
}
