//! Named pages of the app and the preset angle buttons.
//!
//! Pages are addressed by URL fragment (`#comparison`). Two of them host a
//! diagram; the rest are static content the host shows or hides.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DiagramError;
use crate::scene::DiagramKind;

/// Angles offered as one-click presets on the unit-circle page, in degrees.
pub const PRESET_ANGLES: [f64; 11] = [0.0, 30.0, 45.0, 60.0, 90.0, 120.0, 135.0, 150.0, 180.0, 270.0, 360.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    /// Sine/cosine/tangent comparison with the triangle slider.
    Comparison,
    Identities,
    /// Unit circle with preset angles.
    SpecialAngles,
    Rules,
    WorkedExamples,
}

impl Page {
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Comparison,
        Self::Identities,
        Self::SpecialAngles,
        Self::Rules,
        Self::WorkedExamples,
    ];

    /// Fragment identifier without the leading `#`.
    #[must_use]
    pub fn fragment(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Comparison => "comparison",
            Self::Identities => "identities",
            Self::SpecialAngles => "special-angles",
            Self::Rules => "rules",
            Self::WorkedExamples => "worked-examples",
        }
    }

    /// Resolve a location fragment. A leading `#` is optional; anything
    /// unrecognized lands on [`Page::Home`].
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Self {
        fragment.parse().unwrap_or_default()
    }

    /// The diagram shown on this page, if any.
    #[must_use]
    pub fn diagram(self) -> Option<DiagramKind> {
        match self {
            Self::Comparison => Some(DiagramKind::Triangle),
            Self::SpecialAngles => Some(DiagramKind::UnitCircle),
            _ => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fragment())
    }
}

impl FromStr for Page {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_prefix('#').unwrap_or(name);
        Self::ALL
            .into_iter()
            .find(|page| page.fragment() == name)
            .ok_or_else(|| DiagramError::UnknownPage(name.to_owned()))
    }
}

/// Whether `angle` is one of [`PRESET_ANGLES`].
#[must_use]
pub fn is_preset(angle: f64) -> bool {
    PRESET_ANGLES.contains(&angle)
}
