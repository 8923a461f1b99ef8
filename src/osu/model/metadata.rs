//! `[Metadata]` section.

define_keys! {
    /// A key of the `[Metadata]` section.
    MetadataKey {
        /// [`Metadata::title`]
        Title => "Title",
        /// [`Metadata::title_unicode`]
        TitleUnicode => "TitleUnicode",
        /// [`Metadata::artist`]
        Artist => "Artist",
        /// [`Metadata::artist_unicode`]
        ArtistUnicode => "ArtistUnicode",
        /// [`Metadata::creator`]
        Creator => "Creator",
        /// [`Metadata::version`]
        Version => "Version",
        /// [`Metadata::source`]
        Source => "Source",
        /// [`Metadata::tags`]
        Tags => "Tags",
        /// [`Metadata::beatmap_id`]
        BeatmapId => "BeatmapID",
        /// [`Metadata::beatmap_set_id`]
        BeatmapSetId => "BeatmapSetID",
    }
}

/// Information used to identify the beatmap.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Romanised song title.
    pub title: String,
    /// Song title in its original script.
    pub title_unicode: String,
    /// Romanised artist.
    pub artist: String,
    /// Artist in its original script.
    pub artist_unicode: String,
    /// The mapper.
    pub creator: String,
    /// Difficulty name.
    pub version: String,
    /// Original media the song comes from.
    pub source: String,
    /// Search terms, written space separated.
    pub tags: Vec<String>,
    /// Difficulty ID.
    pub beatmap_id: i32,
    /// Beatmap set ID.
    pub beatmap_set_id: i32,
}

impl Metadata {
    /// Whether any tag equals `tag`, ignoring ASCII case.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
