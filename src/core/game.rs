//! Game model - the Game screen's level collections and per-game presentation
//!
//! Wraps the plain scoring levels with the per-challenge presentation each
//! game flavor reseeds in lockstep with every new challenge: the Counting
//! game rerolls its object skin and grouping and alternates representation,
//! the Subitize game regenerates its point pattern.

use crate::core::level::{AnswerOutcome, GameLevel};
use crate::core::rng::SimpleRng;
use crate::core::subitize::Subitizer;
use crate::types::{
    CountingObjectKind, GameType, Representation, GAME_LEVELS_PER_TYPE, SUBITIZER_MAX_COUNT,
};

/// A Counting game level with its presentation state
#[derive(Debug, Clone)]
pub struct CountingLevel {
    level: GameLevel,
    object_kind: CountingObjectKind,
    grouped: bool,
    representation: Representation,
    rng: SimpleRng,
}

impl CountingLevel {
    pub fn new(level_number: u32, seed: u32) -> Self {
        let mut counting = Self {
            level: GameLevel::new(level_number, GameType::Counting.level_width(), seed),
            object_kind: CountingObjectKind::Dog,
            grouped: false,
            representation: Representation::Objects,
            rng: SimpleRng::new(seed.wrapping_mul(31).wrapping_add(level_number)),
        };
        counting.reseed_presentation();
        counting
    }

    pub fn level(&self) -> &GameLevel {
        &self.level
    }

    pub fn object_kind(&self) -> CountingObjectKind {
        self.object_kind
    }

    /// Whether this challenge presents its objects grouped into tens
    pub fn grouped(&self) -> bool {
        self.grouped
    }

    pub fn representation(&self) -> Representation {
        self.representation
    }

    pub fn submit_answer(&mut self, value: u32) -> AnswerOutcome {
        self.level.submit_answer(value)
    }

    pub fn new_challenge(&mut self) -> u32 {
        let challenge = self.level.new_challenge();
        self.reseed_presentation();
        challenge
    }

    pub fn reset_level(&mut self) {
        self.level.reset_level();
        self.reseed_presentation();
    }

    /// Reroll the skin and grouping, flip the representation
    ///
    /// The representation alternates rather than being drawn, so consecutive
    /// challenges always switch between the ten frame and loose objects.
    fn reseed_presentation(&mut self) {
        let idx = self.rng.next_range(CountingObjectKind::ALL.len() as u32) as usize;
        self.object_kind = CountingObjectKind::ALL[idx];
        self.grouped = self.rng.next_bool();
        self.representation = self.representation.toggled();
    }
}

/// A Subitize game level with its pattern generator
#[derive(Debug, Clone)]
pub struct SubitizeLevel {
    level: GameLevel,
    subitizer: Subitizer,
}

impl SubitizeLevel {
    pub fn new(level_number: u32, seed: u32) -> Self {
        let mut subitize = Self {
            level: GameLevel::new(level_number, GameType::Subitize.level_width(), seed),
            subitizer: Subitizer::new(seed.wrapping_mul(131).wrapping_add(level_number)),
        };
        subitize.sync_pattern();
        subitize
    }

    pub fn level(&self) -> &GameLevel {
        &self.level
    }

    pub fn subitizer(&self) -> &Subitizer {
        &self.subitizer
    }

    pub fn subitizer_mut(&mut self) -> &mut Subitizer {
        &mut self.subitizer
    }

    /// Whether the current challenge is shown as a point pattern
    ///
    /// Level ranges above five (level 2 runs 6..=10) are presented on a ten
    /// frame instead; the pattern generator only covers 1..=5.
    pub fn uses_pattern(&self) -> bool {
        self.level.challenge_number() <= SUBITIZER_MAX_COUNT as u32
    }

    pub fn submit_answer(&mut self, value: u32) -> AnswerOutcome {
        self.level.submit_answer(value)
    }

    pub fn new_challenge(&mut self) -> u32 {
        let challenge = self.level.new_challenge();
        self.sync_pattern();
        challenge
    }

    pub fn reset_level(&mut self) {
        self.level.reset_level();
        self.sync_pattern();
    }

    fn sync_pattern(&mut self) {
        if self.uses_pattern() {
            self.subitizer.set_count(self.level.challenge_number());
        }
    }
}

/// The Game screen's model: both level sets and the current selection
#[derive(Debug, Clone)]
pub struct NumberPlayGameModel {
    counting_levels: Vec<CountingLevel>,
    subitize_levels: Vec<SubitizeLevel>,
    selection: Option<(GameType, usize)>,
}

impl NumberPlayGameModel {
    pub fn new(seed: u32) -> Self {
        let counting_levels = (1..=GAME_LEVELS_PER_TYPE)
            .map(|n| CountingLevel::new(n, seed.wrapping_add(n)))
            .collect();
        let subitize_levels = (1..=GAME_LEVELS_PER_TYPE)
            .map(|n| SubitizeLevel::new(n, seed.wrapping_add(100 + n)))
            .collect();

        Self {
            counting_levels,
            subitize_levels,
            selection: None,
        }
    }

    pub fn counting_levels(&self) -> &[CountingLevel] {
        &self.counting_levels
    }

    pub fn subitize_levels(&self) -> &[SubitizeLevel] {
        &self.subitize_levels
    }

    pub fn counting_level_mut(&mut self, index: usize) -> &mut CountingLevel {
        &mut self.counting_levels[index]
    }

    pub fn subitize_level_mut(&mut self, index: usize) -> &mut SubitizeLevel {
        &mut self.subitize_levels[index]
    }

    /// The level the player is currently in, if any
    pub fn selection(&self) -> Option<(GameType, usize)> {
        self.selection
    }

    /// Enter a level; refused for out-of-range indices
    pub fn select_level(&mut self, game_type: GameType, index: usize) -> bool {
        let count = match game_type {
            GameType::Counting => self.counting_levels.len(),
            GameType::Subitize => self.subitize_levels.len(),
        };
        if index >= count {
            return false;
        }
        self.selection = Some((game_type, index));
        true
    }

    /// Leave the current level, back to the level-selection state
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Reset every level and return to level selection
    pub fn reset(&mut self) {
        for level in &mut self.counting_levels {
            level.reset_level();
        }
        for level in &mut self.subitize_levels {
            level.reset_level();
        }
        self.selection = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_levels_cover_expected_ranges() {
        let model = NumberPlayGameModel::new(1);
        assert_eq!(model.counting_levels()[0].level().range(), (1, 10));
        assert_eq!(model.counting_levels()[1].level().range(), (11, 20));
        assert_eq!(model.subitize_levels()[0].level().range(), (1, 5));
        assert_eq!(model.subitize_levels()[1].level().range(), (6, 10));
    }

    #[test]
    fn test_counting_representation_alternates() {
        let mut level = CountingLevel::new(1, 5);
        let first = level.representation();
        level.new_challenge();
        assert_eq!(level.representation(), first.toggled());
        level.new_challenge();
        assert_eq!(level.representation(), first);
    }

    #[test]
    fn test_counting_presentation_reseeds_each_challenge() {
        let mut level = CountingLevel::new(1, 9);
        let mut kinds = std::collections::HashSet::new();
        for _ in 0..50 {
            kinds.insert(level.object_kind());
            level.new_challenge();
        }
        // Over fifty rerolls every skin should have appeared.
        assert_eq!(kinds.len(), CountingObjectKind::ALL.len());
    }

    #[test]
    fn test_subitize_pattern_follows_challenge() {
        let mut level = SubitizeLevel::new(1, 13);
        for _ in 0..20 {
            assert!(level.uses_pattern());
            let challenge = level.level().challenge_number();
            assert_eq!(level.subitizer().points().len(), challenge as usize);
            level.new_challenge();
        }
    }

    #[test]
    fn test_subitize_level_two_uses_ten_frame() {
        let level = SubitizeLevel::new(2, 13);
        // Level 2 challenges run 6..=10, past the pattern generator's range.
        assert!(!level.uses_pattern());
    }

    #[test]
    fn test_level_selection() {
        let mut model = NumberPlayGameModel::new(3);
        assert_eq!(model.selection(), None);

        assert!(model.select_level(GameType::Counting, 1));
        assert_eq!(model.selection(), Some((GameType::Counting, 1)));

        assert!(!model.select_level(GameType::Subitize, 5));
        assert_eq!(model.selection(), Some((GameType::Counting, 1)));

        model.clear_selection();
        assert_eq!(model.selection(), None);
    }

    #[test]
    fn test_game_reset_resets_all_levels() {
        let mut model = NumberPlayGameModel::new(8);
        model.select_level(GameType::Counting, 0);

        let answer = model.counting_levels()[0].level().challenge_number();
        model.counting_level_mut(0).submit_answer(answer);
        assert_eq!(model.counting_levels()[0].level().score(), 1);

        model.reset();

        assert_eq!(model.counting_levels()[0].level().score(), 0);
        assert_eq!(model.selection(), None);
    }
}
