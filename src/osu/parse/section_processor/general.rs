//! This module handles the `[General]` section, such as:
//!
//! - `AudioFilename: audio.mp3` - Audio file of the song.
//! - `AudioLeadIn: 1000` - Silence before the audio in milliseconds.
//! - `Countdown: 1` - Countdown speed code.
//! - `Mode: 3` - Game mode code.
//! - `OverlayPosition: Above` - Overlay draw order, by code or by name.

use super::{SectionProcessor, all_scalars};
use crate::osu::{
    command::OverlayPosition,
    lex::Section,
    model::general::{General, GeneralKey},
    parse::{ParseError, ProcessContext, Result, parse_bool, parse_code, parse_number},
    prompt::Prompter,
};

/// It processes the `[General]` section into [`General`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneralProcessor;

impl SectionProcessor for GeneralProcessor {
    type Output = General;
    const SECTION: Section = Section::General;

    fn process<P: Prompter>(
        &self,
        ctx: &mut ProcessContext<'_, '_, P>,
    ) -> core::result::Result<Self::Output, ParseError> {
        let mut general = General::default();
        all_scalars(ctx, Self::SECTION, GeneralKey::from_name, |key, value| {
            self.on_value(key, value, &mut general)
        })?;
        Ok(general)
    }
}

impl GeneralProcessor {
    fn on_value(self, key: GeneralKey, value: &str, general: &mut General) -> Result<()> {
        let field = key.name();
        match key {
            GeneralKey::AudioFilename => general.audio_filename = value.to_owned(),
            GeneralKey::AudioLeadIn => general.audio_lead_in = parse_number(field, value)?,
            GeneralKey::AudioHash => general.audio_hash = value.to_owned(),
            GeneralKey::PreviewTime => general.preview_time = parse_number(field, value)?,
            GeneralKey::Countdown => general.countdown = parse_code(field, value)?,
            GeneralKey::SampleSet => general.sample_set = value.to_owned(),
            GeneralKey::StackLeniency => general.stack_leniency = parse_number(field, value)?,
            GeneralKey::Mode => general.mode = parse_code(field, value)?,
            GeneralKey::LetterboxInBreaks => {
                general.letterbox_in_breaks = parse_bool(field, value)?;
            }
            GeneralKey::StoryFireInFront => {
                general.story_fire_in_front = parse_bool(field, value)?;
            }
            GeneralKey::UseSkinSprites => general.use_skin_sprites = parse_bool(field, value)?,
            GeneralKey::AlwaysShowPlayfield => {
                general.always_show_playfield = parse_bool(field, value)?;
            }
            GeneralKey::OverlayPosition => {
                general.overlay_position = match OverlayPosition::from_name(value) {
                    Some(position) => position,
                    None => parse_code(field, value)?,
                };
            }
            GeneralKey::SkinPreference => general.skin_preference = value.to_owned(),
            GeneralKey::EpilepsyWarning => general.epilepsy_warning = parse_bool(field, value)?,
            GeneralKey::CountdownOffset => general.countdown_offset = parse_number(field, value)?,
            GeneralKey::SpecialStyle => general.special_style = parse_bool(field, value)?,
            GeneralKey::WidescreenStoryboard => {
                general.widescreen_storyboard = parse_bool(field, value)?;
            }
            GeneralKey::SamplesMatchPlaybackRate => {
                general.samples_match_playback_rate = parse_bool(field, value)?;
            }
        }
        Ok(())
    }
}
