//! Definitions of field value data.
//!
//! Structures in this module can be used in [Lex](super::lex) part, [Parse](super::parse) part, and the output models.

pub mod graphics;
pub mod mixin;

use bitflags::bitflags;

/// The countdown played before the first hit object.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CountdownType {
    /// No countdown.
    None = 0,
    /// Countdown at the normal speed.
    #[default]
    Normal = 1,
    /// Countdown at the half speed.
    Half = 2,
    /// Countdown at the double speed.
    Double = 3,
}

impl From<CountdownType> for u8 {
    fn from(countdown: CountdownType) -> u8 {
        countdown as u8
    }
}

impl TryFrom<i64> for CountdownType {
    type Error = i64;
    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::None,
            1 => Self::Normal,
            2 => Self::Half,
            3 => Self::Double,
            _ => return Err(value),
        })
    }
}

/// The game mode the beatmap is made for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum GameMode {
    /// osu!standard.
    #[default]
    Osu = 0,
    /// osu!taiko.
    Taiko = 1,
    /// osu!catch.
    CatchTheBeat = 2,
    /// osu!mania.
    Mania = 3,
}

impl From<GameMode> for u8 {
    fn from(mode: GameMode) -> u8 {
        mode as u8
    }
}

impl TryFrom<i64> for GameMode {
    type Error = i64;
    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Osu,
            1 => Self::Taiko,
            2 => Self::CatchTheBeat,
            3 => Self::Mania,
            _ => return Err(value),
        })
    }
}

/// Draw order of hit circle overlays compared to hit numbers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum OverlayPosition {
    /// Use the skin setting.
    #[default]
    NoChange = 0,
    /// Draw overlays under numbers.
    Below = 1,
    /// Draw overlays on top of numbers.
    Above = 2,
}

impl OverlayPosition {
    /// Parses the textual name used by the game client, such as `NoChange`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::NoChange, Self::Below, Self::Above]
            .into_iter()
            .find(|position| position.name().eq_ignore_ascii_case(name))
    }

    /// The textual name of the position.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NoChange => "NoChange",
            Self::Below => "Below",
            Self::Above => "Above",
        }
    }
}

impl From<OverlayPosition> for u8 {
    fn from(position: OverlayPosition) -> u8 {
        position as u8
    }
}

impl TryFrom<i64> for OverlayPosition {
    type Error = i64;
    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::NoChange,
            1 => Self::Below,
            2 => Self::Above,
            _ => return Err(value),
        })
    }
}

/// A sample bank that hit sounds are picked from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SampleBank {
    /// Inherit the bank from the context (timing point or normal bank).
    #[default]
    None = 0,
    /// The `normal` bank.
    Normal = 1,
    /// The `soft` bank.
    Soft = 2,
    /// The `drum` bank.
    Drum = 3,
}

impl From<SampleBank> for u8 {
    fn from(bank: SampleBank) -> u8 {
        bank as u8
    }
}

impl TryFrom<i64> for SampleBank {
    type Error = i64;
    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::None,
            1 => Self::Normal,
            2 => Self::Soft,
            3 => Self::Drum,
            _ => return Err(value),
        })
    }
}

/// The kind of curve a slider path follows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveKind {
    /// Bézier curve, tagged `B`.
    Bezier,
    /// Centripetal Catmull-Rom curve, tagged `C`.
    Centripetal,
    /// Linear segments, tagged `L`. Unrecognized tags fall back to this.
    #[default]
    Linear,
    /// Perfect circle arc, tagged `P`.
    PerfectCircle,
}

impl CurveKind {
    /// Selects the curve by its tag character, falling back to [`CurveKind::Linear`].
    #[must_use]
    pub const fn from_tag(tag: char) -> Self {
        match tag {
            'B' => Self::Bezier,
            'C' => Self::Centripetal,
            'P' => Self::PerfectCircle,
            _ => Self::Linear,
        }
    }

    /// The tag character of the curve.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Bezier => 'B',
            Self::Centripetal => 'C',
            Self::Linear => 'L',
            Self::PerfectCircle => 'P',
        }
    }
}

/// A sample volume in percent. Every way of constructing it clamps into `0..=100`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Volume(u8);

impl Volume {
    /// The loudest volume.
    pub const MAX: Self = Self(100);

    /// Creates a volume, clamping `percent` into `0..=100`.
    #[must_use]
    pub fn new(percent: i64) -> Self {
        Self(percent.clamp(0, 100) as u8)
    }

    /// Returns the percentage.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Overwrites the percentage, clamping `percent` into `0..=100`.
    pub fn set(&mut self, percent: i64) {
        *self = Self::new(percent);
    }
}

impl From<i64> for Volume {
    fn from(percent: i64) -> Self {
        Self::new(percent)
    }
}

impl From<Volume> for u8 {
    fn from(volume: Volume) -> Self {
        volume.0
    }
}

impl std::fmt::Display for Volume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

bitflags! {
    /// Sounds played on a hit object or one edge of a slider.
    ///
    /// Unknown bits are retained so that they survive re-encoding.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct HitSoundType: u8 {
        /// The normal hit sound.
        const NORMAL = 1 << 0;
        /// The whistle addition.
        const WHISTLE = 1 << 1;
        /// The finish addition.
        const FINISH = 1 << 2;
        /// The clap addition.
        const CLAP = 1 << 3;
    }
}

bitflags! {
    /// Effects toggled by a timing point.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TimingEffects: u8 {
        /// Kiai time is enabled.
        const KIAI = 1 << 0;
        /// The first bar line of the measure is not drawn (osu!taiko and osu!mania).
        const OMIT_FIRST_BAR_LINE = 1 << 3;
    }
}

/// How the effects field of a timing point is written as an integer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectsEncoding {
    /// The two-value code: `1` is kiai, `3` omits the first bar line, anything else is no effect.
    ///
    /// Kiai combined with an omitted bar line has no code here and is written as `3`.
    #[default]
    Legacy,
    /// The bit set: bit 0 is kiai and bit 3 omits the first bar line.
    BitFlags,
}

impl EffectsEncoding {
    /// Decodes an effects code.
    #[must_use]
    pub fn decode(self, code: i64) -> TimingEffects {
        match self {
            Self::Legacy => match code {
                1 => TimingEffects::KIAI,
                3 => TimingEffects::OMIT_FIRST_BAR_LINE,
                _ => TimingEffects::empty(),
            },
            Self::BitFlags => u8::try_from(code).map_or_else(
                |_| {
                    log::warn!("effects code {code} is out of range, read as no effect");
                    TimingEffects::empty()
                },
                TimingEffects::from_bits_truncate,
            ),
        }
    }

    /// Encodes effects into a code.
    ///
    /// [`EffectsEncoding::Legacy`] cannot express kiai together with an omitted bar line, so kiai
    /// is lost there.
    #[must_use]
    pub fn encode(self, effects: TimingEffects) -> u8 {
        match self {
            Self::Legacy if effects.contains(TimingEffects::all()) => {
                log::warn!("legacy effects code cannot keep kiai with an omitted bar line");
                3
            }
            Self::Legacy if effects.contains(TimingEffects::OMIT_FIRST_BAR_LINE) => 3,
            Self::Legacy if effects.contains(TimingEffects::KIAI) => 1,
            Self::Legacy => 0,
            Self::BitFlags => effects.bits(),
        }
    }
}

bitflags! {
    /// The type byte of a hit object.
    ///
    /// Exactly one of the shape bits (`CIRCLE`, `SLIDER`, `SPINNER`, `MANIA_HOLD`) is expected;
    /// the other bits are modifiers that do not change the shape.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HitObjectFlags: u8 {
        /// A hit circle.
        const CIRCLE = 1 << 0;
        /// A slider.
        const SLIDER = 1 << 1;
        /// Starts a new combo.
        const NEW_COMBO = 1 << 2;
        /// A spinner.
        const SPINNER = 1 << 3;
        /// Number of combo colours to skip, a 3-bit integer.
        const COMBO_SKIP = 0b0111_0000;
        /// An osu!mania hold note.
        const MANIA_HOLD = 1 << 7;
    }
}

impl HitObjectFlags {
    const COMBO_SKIP_SHIFT: u8 = 4;

    /// The number of combo colours to skip, `0..=7`.
    #[must_use]
    pub const fn combo_skip(self) -> u8 {
        (self.bits() & Self::COMBO_SKIP.bits()) >> Self::COMBO_SKIP_SHIFT
    }

    /// Builds the modifier bits from the new combo flag and the colour skip count.
    #[must_use]
    pub fn modifiers(new_combo: bool, combo_skip: u8) -> Self {
        let skip_bits = (combo_skip << Self::COMBO_SKIP_SHIFT) & Self::COMBO_SKIP.bits();
        let mut flags = Self::from_bits_truncate(skip_bits);
        flags.set(Self::NEW_COMBO, new_combo);
        flags
    }
}
