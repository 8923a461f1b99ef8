//! `[Editor]` section. Only the beatmap editor reads these values.

define_keys! {
    /// A key of the `[Editor]` section.
    EditorKey {
        /// [`Editor::bookmarks`]
        Bookmarks => "Bookmarks",
        /// [`Editor::distance_spacing`]
        DistanceSpacing => "DistanceSpacing",
        /// [`Editor::beat_divisor`]
        BeatDivisor => "BeatDivisor",
        /// [`Editor::grid_size`]
        GridSize => "GridSize",
        /// [`Editor::timeline_zoom`]
        TimelineZoom => "TimelineZoom",
    }
}

/// Saved editor state.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Editor {
    /// Bookmark times in milliseconds, written comma separated.
    pub bookmarks: Vec<i32>,
    /// Distance snap multiplier.
    pub distance_spacing: f64,
    /// Beat snap divisor.
    pub beat_divisor: i32,
    /// Grid size.
    pub grid_size: i32,
    /// Scale factor of the timeline.
    pub timeline_zoom: f64,
}
