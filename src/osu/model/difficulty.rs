//! `[Difficulty]` section.

define_keys! {
    /// A key of the `[Difficulty]` section.
    DifficultyKey {
        /// [`Difficulty::hp_drain_rate`]
        HpDrainRate => "HPDrainRate",
        /// [`Difficulty::circle_size`]
        CircleSize => "CircleSize",
        /// [`Difficulty::overall_difficulty`]
        OverallDifficulty => "OverallDifficulty",
        /// [`Difficulty::approach_rate`]
        ApproachRate => "ApproachRate",
        /// [`Difficulty::slider_multiplier`]
        SliderMultiplier => "SliderMultiplier",
        /// [`Difficulty::slider_tick_rate`]
        SliderTickRate => "SliderTickRate",
    }
}

/// Difficulty settings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Difficulty {
    /// HP drain, `0..=10`.
    pub hp_drain_rate: f64,
    /// Circle size, `0..=10`.
    pub circle_size: f64,
    /// Hit window strictness, `0..=10`.
    pub overall_difficulty: f64,
    /// Approach speed, `0..=10`.
    pub approach_rate: f64,
    /// Base slider velocity in hundreds of osu! pixels per beat.
    pub slider_multiplier: f64,
    /// Slider ticks per beat.
    pub slider_tick_rate: f64,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            hp_drain_rate: 5.0,
            circle_size: 5.0,
            overall_difficulty: 5.0,
            approach_rate: 5.0,
            slider_multiplier: 1.4,
            slider_tick_rate: 1.0,
        }
    }
}
