use serde::Serialize;

use crate::model::Glyph;

/// Static achievement indicator. Not derived from lesson progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Badge {
    name: &'static str,
    icon: Glyph,
    state: BadgeState,
}

impl Badge {
    #[must_use]
    pub const fn new(name: &'static str, icon: Glyph, state: BadgeState) -> Self {
        Self { name, icon, state }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn icon(&self) -> Glyph {
        self.icon
    }

    #[must_use]
    pub fn state(&self) -> BadgeState {
        self.state
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeState {
    Earned,
    Locked,
}

impl BadgeState {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BadgeState::Earned => "Earned",
            BadgeState::Locked => "Locked",
        }
    }
}
