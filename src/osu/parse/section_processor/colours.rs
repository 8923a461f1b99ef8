//! This module handles the `[Colours]` section, lines like `Combo1 : 255,128,0`.
//!
//! Channels outside `0..=255` are not clamped; the line is dropped.

use super::{SectionProcessor, split_fields};
use crate::osu::{
    command::graphics::Rgb,
    lex::Section,
    model::colour::{Colour, ColourName},
    parse::{ParseError, ParseWarning, ProcessContext, Result, expect_fields, parse_ranged},
    prompt::Prompter,
};

/// It processes the `[Colours]` section into a list of [`Colour`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColoursProcessor;

impl SectionProcessor for ColoursProcessor {
    type Output = Vec<Colour>;
    const SECTION: Section = Section::Colours;

    fn process<P: Prompter>(
        &self,
        ctx: &mut ProcessContext<'_, '_, P>,
    ) -> core::result::Result<Self::Output, ParseError> {
        let colours = ctx.all_records(|line| self.on_line(line));
        log::debug!("[{}]: {} colours", Self::SECTION, colours.len());
        Ok(colours)
    }
}

impl ColoursProcessor {
    fn on_line(self, line: &str) -> Result<Colour> {
        let (name, rgb) = line
            .split_once(':')
            .ok_or_else(|| ParseWarning::InvalidFieldCount {
                expected: "2".to_owned(),
                found: 1,
            })?;
        let name = ColourName::from_name(name)
            .ok_or_else(|| ParseWarning::UnknownColourName(name.trim().to_owned()))?;
        let channels = split_fields(rgb);
        expect_fields(&channels, 3)?;
        let colour = Rgb::new(
            parse_ranged("red", channels[0])?,
            parse_ranged("green", channels[1])?,
            parse_ranged("blue", channels[2])?,
        );
        Ok(Colour { name, colour })
    }
}
