//! `[TimingPoints]` section.

use crate::osu::command::{SampleBank, TimingEffects, Volume};

/// A change of tempo, slider velocity or sample settings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingPoint {
    /// When the point takes effect in milliseconds.
    pub offset: i32,
    /// Milliseconds per beat for an uninherited point. For an inherited point this is a negative inverse slider velocity percentage.
    pub beat_length: f64,
    /// Beats per measure.
    pub meter: i32,
    /// Default sample bank of the objects under this point.
    pub sample_bank: SampleBank,
    /// Custom sample index, `0` for the skin's default.
    pub sample_index: i32,
    /// Sample volume.
    pub volume: Volume,
    /// Whether this point defines a new tempo.
    pub uninherited: bool,
    /// Extra effects.
    pub effects: TimingEffects,
}

impl Default for TimingPoint {
    fn default() -> Self {
        Self {
            offset: 0,
            beat_length: 500.0,
            meter: 4,
            sample_bank: SampleBank::None,
            sample_index: 0,
            volume: Volume::MAX,
            uninherited: true,
            effects: TimingEffects::empty(),
        }
    }
}

impl TimingPoint {
    /// Beats per minute of an uninherited point with a positive beat length.
    #[must_use]
    pub fn bpm(&self) -> Option<f64> {
        (self.uninherited && self.beat_length > 0.0).then(|| 60_000.0 / self.beat_length)
    }

    /// Slider velocity multiplier of an inherited point with a negative beat length.
    ///
    /// `-50` means twice as fast, `-200` half as fast.
    #[must_use]
    pub fn slider_velocity(&self) -> Option<f64> {
        (!self.uninherited && self.beat_length < 0.0).then(|| -100.0 / self.beat_length)
    }

    /// Whether kiai time is on.
    #[must_use]
    pub fn is_kiai(&self) -> bool {
        self.effects.contains(TimingEffects::KIAI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bpm_and_velocity() {
        let red = TimingPoint {
            beat_length: 500.0,
            ..TimingPoint::default()
        };
        assert_eq!(red.bpm(), Some(120.0));
        assert_eq!(red.slider_velocity(), None);

        let green = TimingPoint {
            beat_length: -50.0,
            uninherited: false,
            ..TimingPoint::default()
        };
        assert_eq!(green.bpm(), None);
        assert_eq!(green.slider_velocity(), Some(2.0));
    }
}
