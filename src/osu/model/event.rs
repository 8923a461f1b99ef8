//! `[Events]` section: backgrounds, videos and breaks.

use crate::osu::command::graphics::PixelOffset;

/// The kind tag of an event line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum EventKind {
    /// `0` or `Background`.
    Background = 0,
    /// `1` or `Video`.
    Video = 1,
    /// `2` or `Break`.
    Break = 2,
}

impl EventKind {
    const ALL: [Self; 3] = [Self::Background, Self::Video, Self::Break];

    /// Reads the tag, which may be the numeric code or the name.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL.into_iter().find(|kind| {
            tag == kind.code().to_string() || kind.name().eq_ignore_ascii_case(tag)
        })
    }

    /// The numeric code, which the encoder writes.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// The textual tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Background => "Background",
            Self::Video => "Video",
            Self::Break => "Break",
        }
    }
}

/// An event of the beatmap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A background image.
    Background {
        /// Usually `0`.
        start_time: i32,
        /// Image path relative to the beatmap folder, unquoted.
        filename: String,
        /// Offset from the centre of the screen.
        offset: PixelOffset,
    },
    /// A background video.
    Video {
        /// When the video starts in milliseconds.
        start_time: i32,
        /// Video path relative to the beatmap folder, unquoted.
        filename: String,
        /// Offset from the centre of the screen.
        offset: PixelOffset,
    },
    /// A break period.
    Break {
        /// When the break starts in milliseconds.
        start_time: i32,
        /// When the break ends in milliseconds.
        end_time: i32,
    },
}

impl Event {
    /// The kind tag of the event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Background { .. } => EventKind::Background,
            Self::Video { .. } => EventKind::Video,
            Self::Break { .. } => EventKind::Break,
        }
    }

    /// When the event starts in milliseconds.
    #[must_use]
    pub const fn start_time(&self) -> i32 {
        match self {
            Self::Background { start_time, .. }
            | Self::Video { start_time, .. }
            | Self::Break { start_time, .. } => *start_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(EventKind::from_tag("0"), Some(EventKind::Background));
        assert_eq!(EventKind::from_tag("Video"), Some(EventKind::Video));
        assert_eq!(EventKind::from_tag("break"), Some(EventKind::Break));
        assert_eq!(EventKind::from_tag("2"), Some(EventKind::Break));
        assert_eq!(EventKind::from_tag("Sprite"), None);
        assert_eq!(EventKind::from_tag("3"), None);
    }

    #[test]
    fn test_start_time_and_offset() {
        let video = Event::Video {
            start_time: 500,
            filename: "intro.mp4".to_owned(),
            offset: PixelOffset::new(0, -16),
        };
        let pause = Event::Break {
            start_time: 12000,
            end_time: 15000,
        };
        assert_eq!(video.start_time(), 500);
        assert_eq!(pause.start_time(), 12000);
        assert_eq!(pause.kind(), EventKind::Break);
        let Event::Video { offset, .. } = video else {
            panic!("expected a video");
        };
        assert!(!offset.is_zero());
        assert!(PixelOffset::default().is_zero());
        assert_eq!(<(i32, i32)>::from(offset), (0, -16));
    }
}
