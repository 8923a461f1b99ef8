//! This module handles the `[TimingPoints]` section.
//!
//! A line is `time,beatLength,meter,sampleSet,sampleIndex,volume,uninherited,effects`.

use super::{SectionProcessor, split_fields};
use crate::osu::{
    command::{EffectsEncoding, Volume},
    lex::Section,
    model::timing::TimingPoint,
    parse::{
        ParseError, ProcessContext, Result, expect_fields, parse_bool, parse_code, parse_number,
    },
    prompt::Prompter,
};

/// It processes the `[TimingPoints]` section into a list of [`TimingPoint`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimingPointsProcessor {
    /// How the effects field is decoded.
    pub effects: EffectsEncoding,
}

impl SectionProcessor for TimingPointsProcessor {
    type Output = Vec<TimingPoint>;
    const SECTION: Section = Section::TimingPoints;

    fn process<P: Prompter>(
        &self,
        ctx: &mut ProcessContext<'_, '_, P>,
    ) -> core::result::Result<Self::Output, ParseError> {
        let points = ctx.all_records(|line| self.on_line(line));
        log::debug!("[{}]: {} timing points", Self::SECTION, points.len());
        Ok(points)
    }
}

impl TimingPointsProcessor {
    fn on_line(self, line: &str) -> Result<TimingPoint> {
        let fields = split_fields(line);
        expect_fields(&fields, 8)?;
        Ok(TimingPoint {
            offset: parse_number("time", fields[0])?,
            beat_length: parse_number("beatLength", fields[1])?,
            meter: parse_number("meter", fields[2])?,
            sample_bank: parse_code("sampleSet", fields[3])?,
            sample_index: parse_number("sampleIndex", fields[4])?,
            volume: Volume::new(parse_number("volume", fields[5])?),
            uninherited: parse_bool("uninherited", fields[6])?,
            effects: self.effects.decode(parse_number("effects", fields[7])?),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::osu::{
        command::{SampleBank, TimingEffects},
        parse::ParseWarning,
        prompt::AlwaysUseNewer,
    };

    const LINES: [&str; 5] = [
        "0,500,4,2,1,60,1,0",
        "1000,-50,4,1,0,150,0,1",
        "2000,-100,4,3,0,-5,0,3",
        "3000,500,4,2,1,60",
        "4000,500,4,2,1,60,1,9",
    ];

    #[test]
    fn test_timing_points() {
        let mut ctx = ProcessContext::new(&LINES, 0..LINES.len(), &AlwaysUseNewer);
        let points = TimingPointsProcessor::default().process(&mut ctx).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(
            points[0],
            TimingPoint {
                offset: 0,
                beat_length: 500.0,
                meter: 4,
                sample_bank: SampleBank::Soft,
                sample_index: 1,
                volume: Volume::new(60),
                uninherited: true,
                effects: TimingEffects::empty(),
            }
        );
        assert_eq!(points[1].volume.get(), 100);
        assert_eq!(points[1].effects, TimingEffects::KIAI);
        assert_eq!(points[1].slider_velocity(), Some(2.0));
        assert_eq!(points[2].volume.get(), 0);
        assert_eq!(points[2].effects, TimingEffects::OMIT_FIRST_BAR_LINE);
        // 9 has no legacy code
        assert_eq!(points[3].effects, TimingEffects::empty());

        let (_, warnings) = ctx.into_warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].line(), 4);
        assert_eq!(
            warnings[0].content(),
            &ParseWarning::InvalidFieldCount {
                expected: "8".to_owned(),
                found: 6,
            }
        );
    }

    #[test]
    fn test_bit_flag_effects() {
        let mut ctx = ProcessContext::new(&LINES, 0..LINES.len(), &AlwaysUseNewer);
        let processor = TimingPointsProcessor {
            effects: EffectsEncoding::BitFlags,
        };
        let points = processor.process(&mut ctx).unwrap();
        assert_eq!(points[2].effects, TimingEffects::KIAI);
        assert_eq!(
            points[3].effects,
            TimingEffects::KIAI | TimingEffects::OMIT_FIRST_BAR_LINE
        );
    }
}
