//! Processors of each section.
//!
//! A processor owns the semantics of exactly one section. It receives the section body through a [`ProcessContext`] and returns its own part of the beatmap.

pub mod colours;
pub mod difficulty;
pub mod editor;
pub mod events;
pub mod general;
pub mod hit_objects;
pub mod metadata;
pub mod timing_points;

use super::{ParseError, ParseWarning, ProcessContext, Result};
use crate::osu::{command::mixin::SourceLineMixinExt, lex::Section, prompt::Prompter};

pub use self::{
    colours::ColoursProcessor, difficulty::DifficultyProcessor, editor::EditorProcessor,
    events::EventsProcessor, general::GeneralProcessor, hit_objects::HitObjectsProcessor,
    metadata::MetadataProcessor, timing_points::TimingPointsProcessor,
};

/// A processor of one section of the `.osu` format.
pub trait SectionProcessor {
    /// The part of the beatmap this processor produces.
    type Output;

    /// The section this processor reads.
    const SECTION: Section;

    /// Processes the section body. Line level problems go to the context as warnings.
    fn process<P: Prompter>(
        &self,
        ctx: &mut ProcessContext<'_, '_, P>,
    ) -> core::result::Result<Self::Output, ParseError>;
}

/// Feeds every `Key: Value` pair of the body whose key is known to `on_value`.
///
/// Unknown keys are warned. A value rejected by `on_value` is fatal in a mandatory section and warned in an optional one.
pub(crate) fn all_scalars<P: Prompter, K: Copy + std::fmt::Display>(
    ctx: &mut ProcessContext<'_, '_, P>,
    section: Section,
    from_name: impl Fn(&str) -> Option<K>,
    mut on_value: impl FnMut(K, &str) -> Result<()>,
) -> core::result::Result<(), ParseError> {
    let key_values = ctx.key_values();
    for entry in &key_values {
        let Some(key) = from_name(entry.key) else {
            ctx.warn(
                ParseWarning::UnknownKey {
                    section,
                    key: entry.key.to_owned(),
                }
                .into_wrapper_line(entry.line),
            );
            continue;
        };
        let Err(reason) = on_value(key, entry.value) else {
            continue;
        };
        if section.is_mandatory() {
            return Err(ParseError::InvalidValue {
                section,
                key: key.to_string(),
                value: entry.value.to_owned(),
                line: entry.line,
                reason,
            });
        }
        ctx.warn(reason.into_wrapper_line(entry.line));
    }
    log::debug!("[{section}]: {} entries", key_values.len());
    Ok(())
}

/// Splits a record line into its comma separated fields.
pub(crate) fn split_fields(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}
