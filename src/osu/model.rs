//! The decoded beatmap aggregate and its parts.

/// Defines a scalar section key table: an enum with its names in file order.
macro_rules! define_keys {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $text:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $($(#[$variant_meta])* $variant,)*
        }

        impl $name {
            /// Every key, in the order they are written.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// The key as written in the file.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)*
                }
            }

            /// Looks the key up by its name, ignoring ASCII case.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|key| key.name().eq_ignore_ascii_case(name))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

pub mod colour;
pub mod difficulty;
pub mod editor;
pub mod event;
pub mod general;
pub mod hit_object;
pub mod metadata;
pub mod timing;

use crate::osu::command::GameMode;

use self::{
    colour::Colour, difficulty::Difficulty, editor::Editor, event::Event, general::General,
    hit_object::HitObject, metadata::Metadata, timing::TimingPoint,
};

/// The version written by [`BeatMap::default`].
pub const LATEST_FORMAT_VERSION: u32 = 14;

/// A whole `.osu` beatmap.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeatMap {
    /// The `N` of `osu file format vN`.
    pub format_version: u32,
    /// `[General]`
    pub general: General,
    /// `[Editor]`
    pub editor: Editor,
    /// `[Metadata]`
    pub metadata: Metadata,
    /// `[Difficulty]`
    pub difficulty: Difficulty,
    /// `[Events]`, storyboard commands excluded.
    pub events: Vec<Event>,
    /// `[TimingPoints]` in source order.
    pub timing_points: Vec<TimingPoint>,
    /// `[Colours]` in source order.
    pub colours: Vec<Colour>,
    /// `[HitObjects]` in source order.
    pub hit_objects: Vec<HitObject>,
}

impl Default for BeatMap {
    fn default() -> Self {
        Self {
            format_version: LATEST_FORMAT_VERSION,
            general: General::default(),
            editor: Editor::default(),
            metadata: Metadata::default(),
            difficulty: Difficulty::default(),
            events: Vec::new(),
            timing_points: Vec::new(),
            colours: Vec::new(),
            hit_objects: Vec::new(),
        }
    }
}

impl BeatMap {
    /// Iterates the timing points which define a tempo.
    pub fn uninherited_timing_points(&self) -> impl Iterator<Item = &TimingPoint> {
        self.timing_points.iter().filter(|point| point.uninherited)
    }

    /// Iterates the combo colours in source order.
    pub fn combo_colours(&self) -> impl Iterator<Item = &Colour> {
        self.colours.iter().filter(|colour| colour.name.is_combo())
    }

    /// The osu!mania key count, which is the circle size rounded to the nearest integer.
    ///
    /// `None` unless the mode is osu!mania and the rounded size is positive.
    #[must_use]
    pub fn mania_key_count(&self) -> Option<u32> {
        if self.general.mode != GameMode::Mania {
            return None;
        }
        let keys = self.difficulty.circle_size.round();
        (1.0..=f64::from(u32::MAX))
            .contains(&keys)
            .then_some(keys as u32)
    }

    /// Pairs each hit object with its osu!mania column.
    ///
    /// Empty unless [`BeatMap::mania_key_count`] is known.
    pub fn mania_columns(&self) -> impl Iterator<Item = (&HitObject, u32)> {
        let key_count = self.mania_key_count().unwrap_or(0);
        self.hit_objects
            .iter()
            .filter_map(move |object| Some((object, object.mania_column(key_count)?)))
    }
}
