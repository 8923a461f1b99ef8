//! This module handles the `[Editor]` section. The section is optional and its broken values only warn.

use super::{SectionProcessor, all_scalars};
use crate::osu::{
    lex::Section,
    model::editor::{Editor, EditorKey},
    parse::{ParseError, ProcessContext, Result, parse_number},
    prompt::Prompter,
};

/// It processes the `[Editor]` section into [`Editor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditorProcessor;

impl SectionProcessor for EditorProcessor {
    type Output = Editor;
    const SECTION: Section = Section::Editor;

    fn process<P: Prompter>(
        &self,
        ctx: &mut ProcessContext<'_, '_, P>,
    ) -> core::result::Result<Self::Output, ParseError> {
        let mut editor = Editor::default();
        all_scalars(ctx, Self::SECTION, EditorKey::from_name, |key, value| {
            self.on_value(key, value, &mut editor)
        })?;
        Ok(editor)
    }
}

impl EditorProcessor {
    fn on_value(self, key: EditorKey, value: &str, editor: &mut Editor) -> Result<()> {
        let field = key.name();
        match key {
            EditorKey::Bookmarks => {
                editor.bookmarks = value
                    .split(',')
                    .map(str::trim)
                    .filter(|bookmark| !bookmark.is_empty())
                    .map(|bookmark| parse_number(field, bookmark))
                    .collect::<Result<_>>()?;
            }
            EditorKey::DistanceSpacing => editor.distance_spacing = parse_number(field, value)?,
            EditorKey::BeatDivisor => editor.beat_divisor = parse_number(field, value)?,
            EditorKey::GridSize => editor.grid_size = parse_number(field, value)?,
            EditorKey::TimelineZoom => editor.timeline_zoom = parse_number(field, value)?,
        }
        Ok(())
    }
}
