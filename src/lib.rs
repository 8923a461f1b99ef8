//! The `.osu` beatmap format decoder and encoder.
//!
//! A `.osu` file describes one difficulty of a beatmap: playback settings, editor state, song
//! metadata, difficulty parameters, background/break events, timing points, combo colours and the
//! timeline of hit objects. It is a line-oriented text format split into `[Section]` blocks, where
//! the scalar sections are `Key: Value` lists and the list sections are comma separated records.
//!
//! # Usage
//!
//! ```
//! use osu_rs::osu::prelude::*;
//!
//! let source = "osu file format v14\n\
//!     [General]\nAudioFilename: audio.mp3\nAudioLeadIn: 1000\n\
//!     [Metadata]\nTitle:Example\n\
//!     [Difficulty]\nCircleSize:4\n\
//!     [TimingPoints]\n0,500,4,2,0,100,1,0\n\
//!     [HitObjects]\n256,192,1000,1,0,0:0:0:0:\n";
//! let OsuOutput { beatmap, warnings } = parse_osu_str(source, default_config());
//! let beatmap = beatmap.unwrap();
//! assert!(warnings.is_empty());
//! assert_eq!(beatmap.general.audio_lead_in, 1000);
//! assert_eq!(beatmap.hit_objects.len(), 1);
//! ```
//!
//! Decoding never aborts because of a single malformed data line: such lines are skipped and
//! reported in [`osu::OsuOutput::warnings`] with their line number. Only structural problems
//! (missing version line, missing mandatory section, unparsable mandatory value) fail the decode.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod diagnostics;
pub mod osu;
pub(crate) mod util;
