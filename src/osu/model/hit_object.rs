//! `[HitObjects]` section.

use crate::osu::command::{CurveKind, HitObjectFlags, HitSoundType, SampleBank, Volume};

/// Width of the playfield in osu! pixels.
pub const PLAYFIELD_WIDTH: i32 = 512;

/// A hit object: a shape placed on the timeline plus the combo modifiers beside it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitObject {
    /// Horizontal position in osu! pixels.
    pub x: i32,
    /// Vertical position in osu! pixels.
    pub y: i32,
    /// When the object is hit in milliseconds.
    pub time: i32,
    /// Whether the object starts a new combo.
    pub new_combo: bool,
    /// Number of combo colours to skip, `0..=7`.
    pub combo_skip: u8,
    /// Sounds played when the object is hit.
    pub hit_sample: HitSample,
    /// The shape and its data.
    pub kind: HitObjectKind,
}

impl HitObject {
    /// The type byte as written in the file: the shape bit with the modifier bits.
    #[must_use]
    pub fn type_flags(&self) -> HitObjectFlags {
        self.kind.shape_flag() | HitObjectFlags::modifiers(self.new_combo, self.combo_skip)
    }

    /// The end time of spinners and hold notes, which carry one.
    #[must_use]
    pub const fn explicit_end_time(&self) -> Option<i32> {
        match self.kind {
            HitObjectKind::Spinner { end_time } | HitObjectKind::ManiaHold { end_time } => {
                Some(end_time)
            }
            HitObjectKind::Circle | HitObjectKind::Slider(_) => None,
        }
    }

    /// The osu!mania column of the object, `x * key_count / 512`.
    ///
    /// Positions outside the playfield snap to the outermost columns. Returns `None` for no keys.
    #[must_use]
    pub fn mania_column(&self, key_count: u32) -> Option<u32> {
        if key_count == 0 {
            return None;
        }
        let x = i64::from(self.x.clamp(0, PLAYFIELD_WIDTH - 1));
        u32::try_from(x * i64::from(key_count) / i64::from(PLAYFIELD_WIDTH)).ok()
    }
}

/// The shape of a hit object.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitObjectKind {
    /// A hit circle.
    Circle,
    /// A slider.
    Slider(SliderData),
    /// A spinner, always centred on the playfield.
    Spinner {
        /// When the spinner ends in milliseconds.
        end_time: i32,
    },
    /// An osu!mania hold note.
    ManiaHold {
        /// When the note is released in milliseconds.
        end_time: i32,
    },
}

impl HitObjectKind {
    /// The shape bit of the type byte.
    #[must_use]
    pub const fn shape_flag(&self) -> HitObjectFlags {
        match self {
            Self::Circle => HitObjectFlags::CIRCLE,
            Self::Slider(_) => HitObjectFlags::SLIDER,
            Self::Spinner { .. } => HitObjectFlags::SPINNER,
            Self::ManiaHold { .. } => HitObjectFlags::MANIA_HOLD,
        }
    }

    /// The number of comma separated fields of a complete line of this shape.
    #[must_use]
    pub const fn expected_fields(&self) -> usize {
        match self {
            Self::Circle | Self::ManiaHold { .. } => 6,
            Self::Spinner { .. } => 7,
            Self::Slider(_) => 11,
        }
    }
}

/// The sound descriptor of a hit object.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitSample {
    /// Hit sound flags.
    pub sound_type: HitSoundType,
    /// Bank of the normal sound, [`SampleBank::None`] to inherit.
    pub normal_bank: SampleBank,
    /// Bank of the additions, [`SampleBank::None`] to use the normal bank.
    pub addition_bank: SampleBank,
    /// Custom sample index, `0` to inherit.
    pub index: i32,
    /// Volume, `0` to inherit from the timing point.
    pub volume: Volume,
    /// Custom sample file replacing the normal sound, may be empty.
    pub filename: String,
}

/// A control point of a slider path.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl CurvePoint {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The sample banks of one slider edge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeSet {
    /// Bank of the normal sound.
    pub normal_bank: SampleBank,
    /// Bank of the additions.
    pub addition_bank: SampleBank,
}

/// The path and the edge sounds of a slider.
///
/// `edge_sounds` and `edge_sets` both have one entry per edge, that is `slides + 1`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderData {
    /// How the path is drawn.
    pub curve: CurveKind,
    /// Control points after the head, which is the object position.
    pub control_points: Vec<CurvePoint>,
    /// Number of passes, `1` for no repeats.
    pub slides: u32,
    /// Visual length in osu! pixels.
    pub length: f64,
    /// Hit sounds of each edge.
    pub edge_sounds: Vec<HitSoundType>,
    /// Sample banks of each edge.
    pub edge_sets: Vec<EdgeSet>,
}

impl SliderData {
    /// Number of edges: the head, one per repeat, and the tail.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.slides as usize + 1
    }

    /// Creates slider data with default edge sounds for every edge.
    #[must_use]
    pub fn new(curve: CurveKind, control_points: Vec<CurvePoint>, slides: u32, length: f64) -> Self {
        let edges = slides as usize + 1;
        Self {
            curve,
            control_points,
            slides,
            length,
            edge_sounds: vec![HitSoundType::empty(); edges],
            edge_sets: vec![EdgeSet::default(); edges],
        }
    }
}
