use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Panels of the learning path section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LandingTab {
    #[default]
    Stages,
    Badges,
    Progress,
}

impl LandingTab {
    pub const ALL: [LandingTab; 3] = [LandingTab::Stages, LandingTab::Badges, LandingTab::Progress];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LandingTab::Stages => "stages",
            LandingTab::Badges => "badges",
            LandingTab::Progress => "progress",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LandingTab::Stages => "Lesson Stages",
            LandingTab::Badges => "Your Badges",
            LandingTab::Progress => "Progress",
        }
    }
}

impl fmt::Display for LandingTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown tab `{raw}` (expected stages, badges or progress)")]
pub struct ParseTabError {
    raw: String,
}

impl FromStr for LandingTab {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LandingTab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| ParseTabError { raw: s.to_string() })
    }
}
