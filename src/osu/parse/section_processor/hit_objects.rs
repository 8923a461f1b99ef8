//! This module handles the `[HitObjects]` section.
//!
//! A line is `x,y,time,type,hitSound,objectParams...,hitSample`. The type byte selects the shape:
//!
//! - `1` - Circle: `x,y,time,type,hitSound,hitSample`
//! - `2` - Slider: `x,y,time,type,hitSound,curveType|curvePoints,slides,length,edgeSounds,edgeSets,hitSample`
//! - `8` - Spinner: `x,y,time,type,hitSound,endTime,hitSample`
//! - `128` - osu!mania hold: `x,y,time,type,hitSound,endTime:hitSample`
//!
//! `hitSample` is `normalSet:additionSet:index:volume:filename` and may be omitted.

use super::{SectionProcessor, split_fields};
use crate::osu::{
    command::{CurveKind, HitObjectFlags, HitSoundType, Volume},
    lex::Section,
    model::hit_object::{CurvePoint, EdgeSet, HitObject, HitObjectKind, HitSample, SliderData},
    parse::{
        ParseError, ParseWarning, ProcessContext, Result, parse_code, parse_number, parse_ranged,
    },
    prompt::Prompter,
};

/// Upper bound of slider passes, above which the line is rejected.
pub const MAX_SLIDES: u32 = 9000;

/// It processes the `[HitObjects]` section into a list of [`HitObject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HitObjectsProcessor;

impl SectionProcessor for HitObjectsProcessor {
    type Output = Vec<HitObject>;
    const SECTION: Section = Section::HitObjects;

    fn process<P: Prompter>(
        &self,
        ctx: &mut ProcessContext<'_, '_, P>,
    ) -> core::result::Result<Self::Output, ParseError> {
        let objects = ctx.all_records(|line| self.on_line(line));
        log::debug!("[{}]: {} hit objects", Self::SECTION, objects.len());
        Ok(objects)
    }
}

impl HitObjectsProcessor {
    fn on_line(self, line: &str) -> Result<HitObject> {
        let fields = split_fields(line);
        if fields.len() < 6 {
            return Err(ParseWarning::InvalidFieldCount {
                expected: "at least 6".to_owned(),
                found: fields.len(),
            });
        }
        let x = parse_number("x", fields[0])?;
        let y = parse_number("y", fields[1])?;
        let time = parse_number("time", fields[2])?;
        let flags = HitObjectFlags::from_bits_retain(parse_ranged("type", fields[3])?);
        let sound_type = HitSoundType::from_bits_retain(parse_ranged("hitSound", fields[4])?);
        let mut hit_sample = HitSample {
            sound_type,
            ..HitSample::default()
        };

        let kind = if flags.contains(HitObjectFlags::CIRCLE) {
            HitObjectKind::Circle
        } else if flags.contains(HitObjectFlags::SLIDER) {
            HitObjectKind::Slider(parse_slider(&fields)?)
        } else if flags.contains(HitObjectFlags::SPINNER) {
            HitObjectKind::Spinner {
                end_time: parse_number("endTime", fields[5])?,
            }
        } else if flags.contains(HitObjectFlags::MANIA_HOLD) {
            let (end_time, extras) = match fields[5].split_once(':') {
                Some((end_time, extras)) => (end_time, Some(extras)),
                None => (fields[5], None),
            };
            if let Some(extras) = extras {
                read_hit_sample(extras, &mut hit_sample)?;
            }
            HitObjectKind::ManiaHold {
                end_time: parse_number("endTime", end_time)?,
            }
        } else {
            return Err(ParseWarning::UnknownHitObjectType(flags.bits()));
        };

        let has_trailing_sample = !matches!(kind, HitObjectKind::ManiaHold { .. })
            && fields.len() == kind.expected_fields();
        if let Some(extras) = fields.last().filter(|_| has_trailing_sample) {
            read_hit_sample(extras, &mut hit_sample)?;
        }

        Ok(HitObject {
            x,
            y,
            time,
            new_combo: flags.contains(HitObjectFlags::NEW_COMBO),
            combo_skip: flags.combo_skip(),
            hit_sample,
            kind,
        })
    }
}

/// Reads `normalSet:additionSet:index:volume:filename` into `hit_sample`. Missing trailing parts keep their defaults.
fn read_hit_sample(extras: &str, hit_sample: &mut HitSample) -> Result<()> {
    if extras.trim().is_empty() {
        return Ok(());
    }
    let mut parts = extras.splitn(5, ':');
    if let Some(normal) = parts.next() {
        hit_sample.normal_bank = parse_code("normalSet", normal)?;
    }
    if let Some(addition) = parts.next() {
        hit_sample.addition_bank = parse_code("additionSet", addition)?;
    }
    if let Some(index) = parts.next() {
        hit_sample.index = parse_number("index", index)?;
    }
    if let Some(volume) = parts.next() {
        hit_sample.volume = Volume::new(parse_number("volume", volume)?);
    }
    if let Some(filename) = parts.next() {
        hit_sample.filename = filename.trim().to_owned();
    }
    Ok(())
}

fn parse_slider(fields: &[&str]) -> Result<SliderData> {
    if fields.len() < 8 {
        return Err(ParseWarning::InvalidFieldCount {
            expected: "at least 8".to_owned(),
            found: fields.len(),
        });
    }
    let mut path = fields[5].split('|');
    let curve = path
        .next()
        .and_then(|tag| tag.trim().chars().next())
        .map_or(CurveKind::Linear, CurveKind::from_tag);
    let control_points = path.map(parse_curve_point).collect::<Result<Vec<_>>>()?;
    let slides: u32 = parse_number("slides", fields[6])?;
    if slides > MAX_SLIDES {
        return Err(ParseWarning::OutOfRange {
            field: "slides".to_owned(),
            value: i64::from(slides),
        });
    }
    let length = parse_number("length", fields[7])?;
    let mut slider = SliderData::new(curve, control_points, slides, length);
    let edges = slider.edge_count();

    if let Some(sounds) = fields.get(8).filter(|sounds| !sounds.is_empty()) {
        let edge_sounds = sounds
            .split('|')
            .map(|sound| parse_ranged("edgeSounds", sound).map(HitSoundType::from_bits_retain))
            .collect::<Result<Vec<_>>>()?;
        check_edge_count("edgeSounds", edges, edge_sounds.len())?;
        slider.edge_sounds = edge_sounds;
    }
    if let Some(sets) = fields.get(9).filter(|sets| !sets.is_empty()) {
        let edge_sets = sets.split('|').map(parse_edge_set).collect::<Result<Vec<_>>>()?;
        check_edge_count("edgeSets", edges, edge_sets.len())?;
        slider.edge_sets = edge_sets;
    }
    Ok(slider)
}

fn parse_curve_point(point: &str) -> Result<CurvePoint> {
    let (x, y) = point
        .split_once(':')
        .ok_or_else(|| ParseWarning::InvalidNumber {
            field: "curvePoints".to_owned(),
            value: point.to_owned(),
        })?;
    Ok(CurvePoint::new(
        parse_number("curvePoints", x)?,
        parse_number("curvePoints", y)?,
    ))
}

fn parse_edge_set(set: &str) -> Result<EdgeSet> {
    let (normal, addition) = set
        .split_once(':')
        .ok_or_else(|| ParseWarning::InvalidNumber {
            field: "edgeSets".to_owned(),
            value: set.to_owned(),
        })?;
    Ok(EdgeSet {
        normal_bank: parse_code("edgeSets", normal)?,
        addition_bank: parse_code("edgeSets", addition)?,
    })
}

fn check_edge_count(field: &str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        return Ok(());
    }
    Err(ParseWarning::EdgeCountMismatch {
        field: field.to_owned(),
        expected,
        found,
    })
}
