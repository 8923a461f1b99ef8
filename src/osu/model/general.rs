//! `[General]` section.

use crate::osu::command::{CountdownType, GameMode, OverlayPosition};

define_keys! {
    /// A key of the `[General]` section.
    GeneralKey {
        /// [`General::audio_filename`]
        AudioFilename => "AudioFilename",
        /// [`General::audio_lead_in`]
        AudioLeadIn => "AudioLeadIn",
        /// [`General::audio_hash`]
        AudioHash => "AudioHash",
        /// [`General::preview_time`]
        PreviewTime => "PreviewTime",
        /// [`General::countdown`]
        Countdown => "Countdown",
        /// [`General::sample_set`]
        SampleSet => "SampleSet",
        /// [`General::stack_leniency`]
        StackLeniency => "StackLeniency",
        /// [`General::mode`]
        Mode => "Mode",
        /// [`General::letterbox_in_breaks`]
        LetterboxInBreaks => "LetterboxInBreaks",
        /// [`General::story_fire_in_front`]
        StoryFireInFront => "StoryFireInFront",
        /// [`General::use_skin_sprites`]
        UseSkinSprites => "UseSkinSprites",
        /// [`General::always_show_playfield`]
        AlwaysShowPlayfield => "AlwaysShowPlayfield",
        /// [`General::overlay_position`]
        OverlayPosition => "OverlayPosition",
        /// [`General::skin_preference`]
        SkinPreference => "SkinPreference",
        /// [`General::epilepsy_warning`]
        EpilepsyWarning => "EpilepsyWarning",
        /// [`General::countdown_offset`]
        CountdownOffset => "CountdownOffset",
        /// [`General::special_style`]
        SpecialStyle => "SpecialStyle",
        /// [`General::widescreen_storyboard`]
        WidescreenStoryboard => "WidescreenStoryboard",
        /// [`General::samples_match_playback_rate`]
        SamplesMatchPlaybackRate => "SamplesMatchPlaybackRate",
    }
}

/// General information about the beatmap.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct General {
    /// Audio file path relative to the beatmap folder.
    pub audio_filename: String,
    /// Milliseconds of silence before the audio starts.
    pub audio_lead_in: i32,
    /// Deprecated.
    pub audio_hash: String,
    /// Where the song preview starts in milliseconds, `-1` for the default.
    pub preview_time: i32,
    /// Speed of the countdown before the first object.
    pub countdown: CountdownType,
    /// Sample set used when timing points do not override it, such as `Normal` or `Soft`.
    pub sample_set: String,
    /// How often close objects are stacked.
    pub stack_leniency: f64,
    /// The game mode.
    pub mode: GameMode,
    /// Whether breaks are letterboxed.
    pub letterbox_in_breaks: bool,
    /// Deprecated.
    pub story_fire_in_front: bool,
    /// Whether the storyboard may use skin sprites.
    pub use_skin_sprites: bool,
    /// Deprecated.
    pub always_show_playfield: bool,
    /// Draw order of hit circle overlays.
    pub overlay_position: OverlayPosition,
    /// Preferred skin name.
    pub skin_preference: String,
    /// Whether to show a flashing colours warning.
    pub epilepsy_warning: bool,
    /// Beats to wait before the countdown starts.
    pub countdown_offset: i32,
    /// Whether osu!mania uses the N+1 style key layout.
    pub special_style: bool,
    /// Whether the storyboard allows widescreen viewing.
    pub widescreen_storyboard: bool,
    /// Whether samples change pitch with rate changing mods.
    pub samples_match_playback_rate: bool,
}

impl Default for General {
    fn default() -> Self {
        Self {
            audio_filename: String::new(),
            audio_lead_in: 0,
            audio_hash: String::new(),
            preview_time: -1,
            countdown: CountdownType::Normal,
            sample_set: "Normal".to_owned(),
            stack_leniency: 0.7,
            mode: GameMode::Osu,
            letterbox_in_breaks: false,
            story_fire_in_front: true,
            use_skin_sprites: false,
            always_show_playfield: false,
            overlay_position: OverlayPosition::NoChange,
            skin_preference: String::new(),
            epilepsy_warning: false,
            countdown_offset: 0,
            special_style: false,
            widescreen_storyboard: false,
            samples_match_playback_rate: false,
        }
    }
}
