//! The decoder and encoder of the `.osu` beatmap format.
//!
//! This module consists of two phases: lexical analyzing and section parsing.
//!
//! `lex` module finds the sections in the line sequence and splits `Key: Value` lines of the scalar sections into ordered pairs.
//!
//! `parse` module converts each section into its typed part of [`BeatMap`] with one processor per section. Those parts are merged by [`parse_osu`].
//!
//! `unparse` module writes a [`BeatMap`] back into canonical `.osu` text.
//!
//! In detail, our policies are:
//!
//! - Support only UTF-8 (as required `&str` to input).
//! - A broken line of a list section is dropped with a warning, never the whole file.
//! - A broken value of a mandatory scalar section makes the whole file unreadable.
//! - Comments and formatting are not preserved, only the decoded values.
//! - Storyboard commands in `[Events]` are not supported.

pub mod command;
pub mod lex;
pub mod model;
pub mod parse;
pub mod prelude;
pub mod prompt;
pub mod unparse;

use thiserror::Error;

use self::{
    command::EffectsEncoding,
    lex::{
        LexWarningWithLine,
        cursor::is_section_header,
        section::{SectionRange, locate},
    },
    model::BeatMap,
    parse::{
        ParseError, ParseWarningWithLine, ProcessContext,
        section_processor::{
            ColoursProcessor, DifficultyProcessor, EditorProcessor, EventsProcessor,
            GeneralProcessor, HitObjectsProcessor, MetadataProcessor, SectionProcessor,
            TimingPointsProcessor,
        },
    },
    prompt::{AlwaysUseNewer, Prompter},
};

/// The prefix of the version line.
pub const VERSION_PREFIX: &str = "osu file format v";

/// A warning occurred when parsing the `.osu` file. The beatmap is still produced.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OsuWarning {
    /// A warning comes from the key/value extractor.
    #[error("Warn: lex: {0}")]
    Lex(#[from] LexWarningWithLine),
    /// A warning comes from a section processor.
    #[error("Warn: parse: {0}")]
    Parse(#[from] ParseWarningWithLine),
}

impl OsuWarning {
    /// 1-based line number of the warning.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(warning) => warning.line(),
            Self::Parse(warning) => warning.line(),
        }
    }
}

/// Output of parsing a `.osu` file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct OsuOutput {
    /// The parsed beatmap, or the reason it could not be read.
    pub beatmap: Result<BeatMap, ParseError>,
    /// Warnings that occurred during parsing, sorted by line.
    pub warnings: Vec<OsuWarning>,
}

/// Settings of [`parse_osu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseConfig<P> {
    /// Decides duplicated keys in scalar sections.
    pub prompter: P,
    /// How the effects field of timing points is decoded.
    pub effects: EffectsEncoding,
}

impl<P> ParseConfig<P> {
    /// Replaces the prompter.
    pub fn prompter<P2: Prompter>(self, prompter: P2) -> ParseConfig<P2> {
        ParseConfig {
            prompter,
            effects: self.effects,
        }
    }

    /// Replaces the effects encoding.
    #[must_use]
    pub fn effects(mut self, effects: EffectsEncoding) -> Self {
        self.effects = effects;
        self
    }
}

/// The default settings: later duplicated keys win and effects use the legacy codes.
#[must_use]
pub const fn default_config() -> ParseConfig<AlwaysUseNewer> {
    ParseConfig {
        prompter: AlwaysUseNewer,
        effects: EffectsEncoding::Legacy,
    }
}

/// Parse a `.osu` file from its lines.
///
/// # Example
///
/// ```
/// use osu_rs::osu::{OsuOutput, default_config, parse_osu};
///
/// let lines = [
///     "osu file format v14",
///     "[General]",
///     "Mode: 1",
///     "[Metadata]",
///     "Title:Song",
///     "[Difficulty]",
///     "[TimingPoints]",
///     "0,500,4,1,0,100,1,0",
///     "[HitObjects]",
/// ];
/// let OsuOutput { beatmap, warnings } = parse_osu(&lines, default_config());
/// let beatmap = beatmap.unwrap();
/// assert_eq!(beatmap.metadata.title, "Song");
/// assert_eq!(beatmap.timing_points.len(), 1);
/// assert!(warnings.is_empty());
/// ```
pub fn parse_osu<P: Prompter>(lines: &[impl AsRef<str>], config: ParseConfig<P>) -> OsuOutput {
    let lines: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();
    let mut warnings = Vec::new();
    let beatmap = parse_beatmap(&lines, &config, &mut warnings);
    warnings.sort_by_key(OsuWarning::line);
    OsuOutput { beatmap, warnings }
}

/// Parse a `.osu` file from its whole text. The text is split with [`str::lines`] and a leading byte order mark is removed.
pub fn parse_osu_str<P: Prompter>(source: &str, config: ParseConfig<P>) -> OsuOutput {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let lines: Vec<&str> = source.lines().collect();
    parse_osu(&lines, config)
}

fn parse_beatmap<P: Prompter>(
    lines: &[&str],
    config: &ParseConfig<P>,
    warnings: &mut Vec<OsuWarning>,
) -> Result<BeatMap, ParseError> {
    let format_version = parse_version(lines)?;
    log::debug!("osu file format v{format_version}");
    let prompter = &config.prompter;
    Ok(BeatMap {
        format_version,
        general: run_processor(&GeneralProcessor, lines, prompter, warnings)?,
        editor: run_processor(&EditorProcessor, lines, prompter, warnings)?,
        metadata: run_processor(&MetadataProcessor, lines, prompter, warnings)?,
        difficulty: run_processor(&DifficultyProcessor, lines, prompter, warnings)?,
        events: run_processor(&EventsProcessor, lines, prompter, warnings)?,
        timing_points: run_processor(
            &TimingPointsProcessor {
                effects: config.effects,
            },
            lines,
            prompter,
            warnings,
        )?,
        colours: run_processor(&ColoursProcessor, lines, prompter, warnings)?,
        hit_objects: run_processor(&HitObjectsProcessor, lines, prompter, warnings)?,
    })
}

/// Runs `processor` on its section. An absent optional section yields the default output.
fn run_processor<S, P>(
    processor: &S,
    lines: &[&str],
    prompter: &P,
    warnings: &mut Vec<OsuWarning>,
) -> Result<S::Output, ParseError>
where
    S: SectionProcessor,
    S::Output: Default,
    P: Prompter,
{
    let Some(SectionRange { body, .. }) = locate(lines, S::SECTION) else {
        if S::SECTION.is_mandatory() {
            return Err(ParseError::MissingSection(S::SECTION));
        }
        log::info!("optional section [{}] is absent", S::SECTION);
        return Ok(S::Output::default());
    };
    let mut ctx = ProcessContext::new(lines, body, prompter);
    let output = processor.process(&mut ctx);
    let (lex_warnings, parse_warnings) = ctx.into_warnings();
    warnings.extend(lex_warnings.into_iter().map(OsuWarning::Lex));
    warnings.extend(parse_warnings.into_iter().map(OsuWarning::Parse));
    output
}

/// Reads `N` of the `osu file format vN` line preceding the first section.
fn parse_version(lines: &[&str]) -> Result<u32, ParseError> {
    let (index, version) = lines
        .iter()
        .take_while(|line| !is_section_header(line))
        .enumerate()
        .find_map(|(index, line)| {
            line.trim_start_matches('\u{feff}')
                .trim()
                .strip_prefix(VERSION_PREFIX)
                .map(|version| (index, version.trim()))
        })
        .ok_or(ParseError::MissingVersion)?;
    version.parse().map_err(|_| ParseError::InvalidVersion {
        version: version.to_owned(),
        line: index + 1,
    })
}
