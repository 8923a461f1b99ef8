//! Prelude module for the `.osu` decoder and encoder.
//!
//! This module re-exports all public types from the `osu` module for convenient access.
//! You can use `use osu_rs::osu::prelude::*;` to import all of them at once.

// Re-export diagnostics from osu level
#[cfg(feature = "diagnostics")]
pub use crate::diagnostics::{SimpleSource, ToAriadne, collect_osu_reports, emit_osu_warnings};

pub use super::{
    OsuOutput, OsuWarning, ParseConfig, VERSION_PREFIX,
    command::{
        CountdownType, CurveKind, EffectsEncoding, GameMode, HitObjectFlags, HitSoundType,
        OverlayPosition, SampleBank, TimingEffects, Volume,
        graphics::{PixelOffset, Rgb},
        mixin::{SourceLineMixin, SourceLineMixinExt},
    },
    default_config,
    lex::{LexWarning, LexWarningWithLine, Section},
    model::{
        BeatMap, LATEST_FORMAT_VERSION,
        colour::{Colour, ColourName},
        difficulty::{Difficulty, DifficultyKey},
        editor::{Editor, EditorKey},
        event::{Event, EventKind},
        general::{General, GeneralKey},
        hit_object::{
            CurvePoint, EdgeSet, HitObject, HitObjectKind, HitSample, PLAYFIELD_WIDTH, SliderData,
        },
        metadata::{Metadata, MetadataKey},
        timing::TimingPoint,
    },
    parse::{
        ParseError, ParseWarning, ParseWarningWithLine,
        section_processor::{SectionProcessor, hit_objects::MAX_SLIDES},
    },
    parse_osu, parse_osu_str,
    prompt::{
        AlwaysUseNewer, AlwaysUseOlder, AlwaysWarnAndUseNewer, AlwaysWarnAndUseOlder,
        DuplicationWorkaround, KeyDuplication, Prompter,
    },
    unparse::{LineEnding, UnparseConfig},
};
