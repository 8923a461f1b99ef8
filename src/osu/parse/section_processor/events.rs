//! This module handles the `[Events]` section:
//!
//! - `0,0,"bg.jpg",0,0` - Background image with an optional offset.
//! - `Video,-200,"intro.avi"` - Background video with an optional offset.
//! - `2,10000,15000` - Break period.
//!
//! Storyboard lines are not supported and are dropped with a warning.

use super::{SectionProcessor, split_fields};
use crate::osu::{
    command::graphics::PixelOffset,
    lex::Section,
    model::event::{Event, EventKind},
    parse::{ParseError, ParseWarning, ProcessContext, Result, parse_number},
    prompt::Prompter,
};

/// It processes the `[Events]` section into a list of [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventsProcessor;

impl SectionProcessor for EventsProcessor {
    type Output = Vec<Event>;
    const SECTION: Section = Section::Events;

    fn process<P: Prompter>(
        &self,
        ctx: &mut ProcessContext<'_, '_, P>,
    ) -> core::result::Result<Self::Output, ParseError> {
        let events = ctx.all_records(|line| self.on_line(line));
        log::debug!("[{}]: {} events", Self::SECTION, events.len());
        Ok(events)
    }
}

impl EventsProcessor {
    fn on_line(self, line: &str) -> Result<Event> {
        let fields = split_fields(line);
        let kind = EventKind::from_tag(fields[0])
            .ok_or_else(|| ParseWarning::UnknownEventType(fields[0].to_owned()))?;
        if fields.len() < 3 {
            return Err(ParseWarning::InvalidFieldCount {
                expected: "at least 3".to_owned(),
                found: fields.len(),
            });
        }
        let start_time = parse_number("startTime", fields[1])?;
        Ok(match kind {
            EventKind::Background | EventKind::Video => {
                let filename = unquote(fields[2]).to_owned();
                let offset = PixelOffset::new(
                    optional_offset("xOffset", fields.get(3))?,
                    optional_offset("yOffset", fields.get(4))?,
                );
                if kind == EventKind::Background {
                    Event::Background {
                        start_time,
                        filename,
                        offset,
                    }
                } else {
                    Event::Video {
                        start_time,
                        filename,
                        offset,
                    }
                }
            }
            EventKind::Break => Event::Break {
                start_time,
                end_time: parse_number("endTime", fields[2])?,
            },
        })
    }
}

fn unquote(filename: &str) -> &str {
    filename
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(filename)
}

fn optional_offset(field: &str, value: Option<&&str>) -> Result<i32> {
    match value {
        Some(value) if !value.is_empty() => parse_number(field, value),
        _ => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::osu::prompt::AlwaysUseNewer;

    #[test]
    fn test_events() {
        let lines = [
            "//Background and Video events",
            "0,0,\"bg.jpg\",0,0",
            "Video,-200,\"intro.avi\",10,-20",
            "//Break Periods",
            "2,10000,15000",
            "//Storyboard Layer 0 (Background)",
            "Sprite,Background,Centre,\"sb.png\",320,240",
            " F,0,1000,2000,0,1",
            "0,0,bare.png",
        ];
        let mut ctx = ProcessContext::new(&lines, 0..lines.len(), &AlwaysUseNewer);
        let events = EventsProcessor.process(&mut ctx).unwrap();
        assert_eq!(
            events,
            vec![
                Event::Background {
                    start_time: 0,
                    filename: "bg.jpg".to_owned(),
                    offset: PixelOffset::default(),
                },
                Event::Video {
                    start_time: -200,
                    filename: "intro.avi".to_owned(),
                    offset: PixelOffset::new(10, -20),
                },
                Event::Break {
                    start_time: 10000,
                    end_time: 15000,
                },
                Event::Background {
                    start_time: 0,
                    filename: "bare.png".to_owned(),
                    offset: PixelOffset::default(),
                },
            ]
        );

        let (_, warnings) = ctx.into_warnings();
        assert_eq!(
            warnings
                .iter()
                .map(|warning| warning.line())
                .collect::<Vec<_>>(),
            vec![7, 8]
        );
        assert_eq!(
            warnings[0].content(),
            &ParseWarning::UnknownEventType("Sprite".to_owned())
        );
    }

    #[test]
    fn test_short_break_is_dropped() {
        let lines = ["2,10000"];
        let mut ctx = ProcessContext::new(&lines, 0..1, &AlwaysUseNewer);
        assert!(EventsProcessor.process(&mut ctx).unwrap().is_empty());
        let (_, warnings) = ctx.into_warnings();
        assert_eq!(
            warnings[0].content(),
            &ParseWarning::InvalidFieldCount {
                expected: "at least 3".to_owned(),
                found: 2,
            }
        );
    }
}
