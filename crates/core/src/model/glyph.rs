use serde::Serialize;

/// Symbolic icon reference. Content records name a glyph; the UI decides how
/// it is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    Award,
    BarChart,
    Calendar,
    Users,
    Rocket,
    CheckCircle,
    XCircle,
    ArrowRight,
}

impl Glyph {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Glyph::Award => "award",
            Glyph::BarChart => "bar-chart",
            Glyph::Calendar => "calendar",
            Glyph::Users => "users",
            Glyph::Rocket => "rocket",
            Glyph::CheckCircle => "check-circle",
            Glyph::XCircle => "x-circle",
            Glyph::ArrowRight => "arrow-right",
        }
    }
}
