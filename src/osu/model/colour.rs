//! `[Colours]` section.

use crate::{osu::command::graphics::Rgb, util::StrExtension};

/// Which element a colour applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColourName {
    /// `ComboN`, the `N`th combo colour counted from 1.
    Combo(u32),
    /// `SliderTrackOverride`
    SliderTrackOverride,
    /// `SliderBorder`
    SliderBorder,
}

impl ColourName {
    /// Reads the name, ignoring ASCII case. `Combo0` is rejected.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("SliderTrackOverride") {
            return Some(Self::SliderTrackOverride);
        }
        if name.eq_ignore_ascii_case("SliderBorder") {
            return Some(Self::SliderBorder);
        }
        let number = name.strip_prefix_ignore_case("Combo")?;
        match number.parse() {
            Ok(0) | Err(_) => None,
            Ok(n) => Some(Self::Combo(n)),
        }
    }

    /// Whether this is one of the combo colours.
    #[must_use]
    pub const fn is_combo(self) -> bool {
        matches!(self, Self::Combo(_))
    }
}

impl std::fmt::Display for ColourName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Combo(n) => write!(f, "Combo{n}"),
            Self::SliderTrackOverride => f.write_str("SliderTrackOverride"),
            Self::SliderBorder => f.write_str("SliderBorder"),
        }
    }
}

/// A named colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Colour {
    /// What is coloured.
    pub name: ColourName,
    /// The colour.
    pub colour: Rgb,
}
