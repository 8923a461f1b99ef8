//! Unparse [`BeatMap`] back into `.osu` lines, using the same key tables as the parser.

use itertools::Itertools;

use super::{
    VERSION_PREFIX,
    command::EffectsEncoding,
    lex::Section,
    model::{
        BeatMap,
        colour::Colour,
        difficulty::{Difficulty, DifficultyKey},
        editor::{Editor, EditorKey},
        event::Event,
        general::{General, GeneralKey},
        hit_object::{CurvePoint, HitObject, HitObjectKind, HitSample, SliderData},
        metadata::{Metadata, MetadataKey},
        timing::TimingPoint,
    },
};
use crate::util::format_decimal;

/// The line terminator used by [`BeatMap::to_osu_string_with`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineEnding {
    /// `\r\n`, what the game writes.
    #[default]
    CrLf,
    /// `\n`
    Lf,
}

impl LineEnding {
    /// The terminator string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CrLf => "\r\n",
            Self::Lf => "\n",
        }
    }
}

/// Settings of the encoder.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnparseConfig {
    /// How the effects field of timing points is encoded.
    pub effects: EffectsEncoding,
    /// The line terminator of the joined text.
    pub line_ending: LineEnding,
}

impl BeatMap {
    /// Converts the beatmap into `.osu` lines with the default settings.
    #[must_use]
    pub fn unparse(&self) -> Vec<String> {
        self.unparse_with(&UnparseConfig::default())
    }

    /// Converts the beatmap into `.osu` lines, in the order: version, `[General]`, `[Editor]`, `[Metadata]`, `[Difficulty]`, `[Events]`, `[TimingPoints]`, `[Colours]` and `[HitObjects]`.
    #[must_use]
    pub fn unparse_with(&self, config: &UnparseConfig) -> Vec<String> {
        let mut lines = vec![format!("{VERSION_PREFIX}{}", self.format_version)];

        push_header(&mut lines, Section::General);
        lines.extend(
            GeneralKey::ALL
                .iter()
                .map(|&key| format!("{key}: {}", general_value(&self.general, key))),
        );
        push_header(&mut lines, Section::Editor);
        lines.extend(
            EditorKey::ALL
                .iter()
                .map(|&key| format!("{key}: {}", editor_value(&self.editor, key))),
        );
        push_header(&mut lines, Section::Metadata);
        lines.extend(
            MetadataKey::ALL
                .iter()
                .map(|&key| format!("{key}:{}", metadata_value(&self.metadata, key))),
        );
        push_header(&mut lines, Section::Difficulty);
        lines.extend(
            DifficultyKey::ALL
                .iter()
                .map(|&key| format!("{key}:{}", difficulty_value(&self.difficulty, key))),
        );

        push_header(&mut lines, Section::Events);
        lines.extend(self.events.iter().map(event_line));
        push_header(&mut lines, Section::TimingPoints);
        lines.extend(
            self.timing_points
                .iter()
                .map(|point| timing_point_line(point, config.effects)),
        );
        push_header(&mut lines, Section::Colours);
        lines.extend(self.colours.iter().map(colour_line));
        push_header(&mut lines, Section::HitObjects);
        lines.extend(self.hit_objects.iter().map(hit_object_line));
        lines
    }

    /// Converts the beatmap into `.osu` text with CRLF line endings.
    #[must_use]
    pub fn to_osu_string(&self) -> String {
        self.to_osu_string_with(&UnparseConfig::default())
    }

    /// Converts the beatmap into `.osu` text. Every line, including the last, is terminated.
    #[must_use]
    pub fn to_osu_string_with(&self, config: &UnparseConfig) -> String {
        let ending = config.line_ending.as_str();
        self.unparse_with(config)
            .into_iter()
            .map(|line| line + ending)
            .collect()
    }
}

fn push_header(lines: &mut Vec<String>, section: Section) {
    lines.push(String::new());
    lines.push(section.header().to_owned());
}

const fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

fn general_value(general: &General, key: GeneralKey) -> String {
    match key {
        GeneralKey::AudioFilename => general.audio_filename.clone(),
        GeneralKey::AudioLeadIn => general.audio_lead_in.to_string(),
        GeneralKey::AudioHash => general.audio_hash.clone(),
        GeneralKey::PreviewTime => general.preview_time.to_string(),
        GeneralKey::Countdown => u8::from(general.countdown).to_string(),
        GeneralKey::SampleSet => general.sample_set.clone(),
        GeneralKey::StackLeniency => format_decimal(general.stack_leniency),
        GeneralKey::Mode => u8::from(general.mode).to_string(),
        GeneralKey::LetterboxInBreaks => flag(general.letterbox_in_breaks).to_owned(),
        GeneralKey::StoryFireInFront => flag(general.story_fire_in_front).to_owned(),
        GeneralKey::UseSkinSprites => flag(general.use_skin_sprites).to_owned(),
        GeneralKey::AlwaysShowPlayfield => flag(general.always_show_playfield).to_owned(),
        GeneralKey::OverlayPosition => u8::from(general.overlay_position).to_string(),
        GeneralKey::SkinPreference => general.skin_preference.clone(),
        GeneralKey::EpilepsyWarning => flag(general.epilepsy_warning).to_owned(),
        GeneralKey::CountdownOffset => general.countdown_offset.to_string(),
        GeneralKey::SpecialStyle => flag(general.special_style).to_owned(),
        GeneralKey::WidescreenStoryboard => flag(general.widescreen_storyboard).to_owned(),
        GeneralKey::SamplesMatchPlaybackRate => {
            flag(general.samples_match_playback_rate).to_owned()
        }
    }
}

fn editor_value(editor: &Editor, key: EditorKey) -> String {
    match key {
        EditorKey::Bookmarks => editor.bookmarks.iter().join(","),
        EditorKey::DistanceSpacing => format_decimal(editor.distance_spacing),
        EditorKey::BeatDivisor => editor.beat_divisor.to_string(),
        EditorKey::GridSize => editor.grid_size.to_string(),
        EditorKey::TimelineZoom => format_decimal(editor.timeline_zoom),
    }
}

fn metadata_value(metadata: &Metadata, key: MetadataKey) -> String {
    let text = match key {
        MetadataKey::Title => &metadata.title,
        MetadataKey::TitleUnicode => &metadata.title_unicode,
        MetadataKey::Artist => &metadata.artist,
        MetadataKey::ArtistUnicode => &metadata.artist_unicode,
        MetadataKey::Creator => &metadata.creator,
        MetadataKey::Version => &metadata.version,
        MetadataKey::Source => &metadata.source,
        MetadataKey::Tags => {
            for tag in &metadata.tags {
                if tag.is_empty() || !reads_back(tag, char::is_whitespace) {
                    log::warn!("tag {tag:?} does not read back as one tag");
                }
            }
            return metadata.tags.join(" ");
        }
        MetadataKey::BeatmapId => return metadata.beatmap_id.to_string(),
        MetadataKey::BeatmapSetId => return metadata.beatmap_set_id.to_string(),
    };
    if !reads_back(text, |_| false) {
        log::warn!("{key} {text:?} does not read back as written");
    }
    text.clone()
}

fn difficulty_value(difficulty: &Difficulty, key: DifficultyKey) -> String {
    format_decimal(match key {
        DifficultyKey::HpDrainRate => difficulty.hp_drain_rate,
        DifficultyKey::CircleSize => difficulty.circle_size,
        DifficultyKey::OverallDifficulty => difficulty.overall_difficulty,
        DifficultyKey::ApproachRate => difficulty.approach_rate,
        DifficultyKey::SliderMultiplier => difficulty.slider_multiplier,
        DifficultyKey::SliderTickRate => difficulty.slider_tick_rate,
    })
}

fn event_line(event: &Event) -> String {
    let code = event.kind().code();
    match event {
        Event::Background {
            start_time,
            filename,
            offset,
        }
        | Event::Video {
            start_time,
            filename,
            offset,
        } => {
            if !reads_back(filename, |c| matches!(c, ',' | '"')) {
                log::warn!("event file {filename:?} does not read back as written");
            }
            format!(
                "{code},{start_time},\"{filename}\",{},{}",
                offset.x, offset.y
            )
        }
        Event::Break {
            start_time,
            end_time,
        } => format!("{code},{start_time},{end_time}"),
    }
}

fn timing_point_line(point: &TimingPoint, effects: EffectsEncoding) -> String {
    format!(
        "{},{},{},{},{},{},{},{}",
        point.offset,
        format_decimal(point.beat_length),
        point.meter,
        u8::from(point.sample_bank),
        point.sample_index,
        point.volume.get(),
        flag(point.uninherited),
        effects.encode(point.effects),
    )
}

fn colour_line(colour: &Colour) -> String {
    format!("{} : {}", colour.name, colour.colour)
}

fn hit_object_line(object: &HitObject) -> String {
    let head = format!(
        "{},{},{},{},{}",
        object.x,
        object.y,
        object.time,
        object.type_flags().bits(),
        object.hit_sample.sound_type.bits(),
    );
    let extras = hit_sample_extras(&object.hit_sample);
    match &object.kind {
        HitObjectKind::Circle => format!("{head},{extras}"),
        HitObjectKind::Slider(slider) => format!("{head},{},{extras}", slider_fields(slider)),
        HitObjectKind::Spinner { end_time } => format!("{head},{end_time},{extras}"),
        HitObjectKind::ManiaHold { end_time } => format!("{head},{end_time}:{extras}"),
    }
}

fn hit_sample_extras(sample: &HitSample) -> String {
    if !reads_back(&sample.filename, |c| c == ',') {
        log::warn!(
            "sample file {:?} does not read back as written",
            sample.filename
        );
    }
    format!(
        "{}:{}:{}:{}:{}",
        u8::from(sample.normal_bank),
        u8::from(sample.addition_bank),
        sample.index,
        sample.volume.get(),
        sample.filename,
    )
}

/// Whether `text` is read back unchanged: no surrounding spaces, no line breaks, no `separator`.
fn reads_back(text: &str, separator: impl Fn(char) -> bool) -> bool {
    text.trim() == text && !text.chars().any(|c| c == '\r' || c == '\n' || separator(c))
}

/// `curveType|points,slides,length,edgeSounds,edgeSets`
fn slider_fields(slider: &SliderData) -> String {
    let path = std::iter::once(slider.curve.tag().to_string())
        .chain(slider.control_points.iter().map(curve_point))
        .join("|");
    let edge_sounds = slider.edge_sounds.iter().map(|sound| sound.bits()).join("|");
    let edge_sets = slider
        .edge_sets
        .iter()
        .map(|set| {
            format!(
                "{}:{}",
                u8::from(set.normal_bank),
                u8::from(set.addition_bank)
            )
        })
        .join("|");
    format!(
        "{path},{},{},{edge_sounds},{edge_sets}",
        slider.slides,
        format_decimal(slider.length),
    )
}

fn curve_point(point: &CurvePoint) -> String {
    format!("{}:{}", format_decimal(point.x), format_decimal(point.y))
}
