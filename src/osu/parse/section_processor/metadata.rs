//! This module handles the `[Metadata]` section: titles, artists, the creator, tags and IDs.

use super::{SectionProcessor, all_scalars};
use crate::osu::{
    lex::Section,
    model::metadata::{Metadata, MetadataKey},
    parse::{ParseError, ProcessContext, Result, parse_number},
    prompt::Prompter,
};

/// It processes the `[Metadata]` section into [`Metadata`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetadataProcessor;

impl SectionProcessor for MetadataProcessor {
    type Output = Metadata;
    const SECTION: Section = Section::Metadata;

    fn process<P: Prompter>(
        &self,
        ctx: &mut ProcessContext<'_, '_, P>,
    ) -> core::result::Result<Self::Output, ParseError> {
        let mut metadata = Metadata::default();
        all_scalars(ctx, Self::SECTION, MetadataKey::from_name, |key, value| {
            self.on_value(key, value, &mut metadata)
        })?;
        Ok(metadata)
    }
}

impl MetadataProcessor {
    fn on_value(self, key: MetadataKey, value: &str, metadata: &mut Metadata) -> Result<()> {
        match key {
            MetadataKey::Title => metadata.title = value.to_owned(),
            MetadataKey::TitleUnicode => metadata.title_unicode = value.to_owned(),
            MetadataKey::Artist => metadata.artist = value.to_owned(),
            MetadataKey::ArtistUnicode => metadata.artist_unicode = value.to_owned(),
            MetadataKey::Creator => metadata.creator = value.to_owned(),
            MetadataKey::Version => metadata.version = value.to_owned(),
            MetadataKey::Source => metadata.source = value.to_owned(),
            MetadataKey::Tags => {
                metadata.tags = value.split_whitespace().map(str::to_owned).collect();
            }
            MetadataKey::BeatmapId => metadata.beatmap_id = parse_number(key.name(), value)?,
            MetadataKey::BeatmapSetId => {
                metadata.beatmap_set_id = parse_number(key.name(), value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::osu::prompt::AlwaysUseNewer;

    #[test]
    fn test_values() {
        let lines = [
            "Title:Song: Remix",
            "TitleUnicode:曲",
            "Creator:mapper",
            "Tags:jpop  anime vocal",
            "BeatmapID:123",
            "BeatmapSetID:-1",
        ];
        let mut ctx = ProcessContext::new(&lines, 0..lines.len(), &AlwaysUseNewer);
        let metadata = MetadataProcessor.process(&mut ctx).unwrap();
        assert_eq!(metadata.title, "Song: Remix");
        assert_eq!(metadata.title_unicode, "曲");
        assert_eq!(metadata.creator, "mapper");
        assert_eq!(metadata.tags, vec!["jpop", "anime", "vocal"]);
        assert!(metadata.has_tag("ANIME"));
        assert_eq!(metadata.beatmap_id, 123);
        assert_eq!(metadata.beatmap_set_id, -1);
    }

    #[test]
    fn test_bad_id_is_fatal() {
        let lines = ["BeatmapID: abc"];
        let mut ctx = ProcessContext::new(&lines, 0..1, &AlwaysUseNewer);
        let err = MetadataProcessor.process(&mut ctx).unwrap_err();
        assert_eq!(err.line(), Some(1));
    }
}
