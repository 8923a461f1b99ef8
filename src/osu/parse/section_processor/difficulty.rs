//! This module handles the `[Difficulty]` section.

use super::{SectionProcessor, all_scalars};
use crate::osu::{
    lex::Section,
    model::difficulty::{Difficulty, DifficultyKey},
    parse::{ParseError, ProcessContext, parse_number},
    prompt::Prompter,
};

/// It processes the `[Difficulty]` section into [`Difficulty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DifficultyProcessor;

impl SectionProcessor for DifficultyProcessor {
    type Output = Difficulty;
    const SECTION: Section = Section::Difficulty;

    fn process<P: Prompter>(
        &self,
        ctx: &mut ProcessContext<'_, '_, P>,
    ) -> core::result::Result<Self::Output, ParseError> {
        let mut difficulty = Difficulty::default();
        all_scalars(ctx, Self::SECTION, DifficultyKey::from_name, |key, value| {
            let number: f64 = parse_number(key.name(), value)?;
            *self.field_mut(key, &mut difficulty) = number;
            Ok(())
        })?;
        Ok(difficulty)
    }
}

impl DifficultyProcessor {
    fn field_mut(self, key: DifficultyKey, difficulty: &mut Difficulty) -> &mut f64 {
        match key {
            DifficultyKey::HpDrainRate => &mut difficulty.hp_drain_rate,
            DifficultyKey::CircleSize => &mut difficulty.circle_size,
            DifficultyKey::OverallDifficulty => &mut difficulty.overall_difficulty,
            DifficultyKey::ApproachRate => &mut difficulty.approach_rate,
            DifficultyKey::SliderMultiplier => &mut difficulty.slider_multiplier,
            DifficultyKey::SliderTickRate => &mut difficulty.slider_tick_rate,
        }
    }
}
