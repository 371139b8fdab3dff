//! Level module - challenge ranges, challenge sequencing, and level scoring
//!
//! Each game level owns a disjoint slice of the game's challenge space and a
//! sequencer that draws the next target number from that slice. The sequencer
//! keeps two history slots so the same number is never drawn three times in a
//! row (an immediate repeat is fine, a third is not).

use log::debug;

use crate::core::rng::SimpleRng;
use crate::types::REWARD_SCORE;

/// Closed challenge interval for a 1-based level number
///
/// Partitions `1..=N*level_width` into contiguous equal-width blocks:
/// level 1 of width 10 gets [1, 10], level 2 gets [11, 20].
pub fn challenge_range(level_number: u32, level_width: u32) -> (u32, u32) {
    debug_assert!(level_number >= 1, "level numbers are 1-based");
    debug_assert!(level_width >= 1);
    let min = (level_number - 1) * level_width + 1;
    let max = level_number * level_width;
    (min, max)
}

/// Draws challenge numbers from a range, never three identical in a row
#[derive(Debug, Clone)]
pub struct ChallengeSequencer {
    min: u32,
    max: u32,
    challenge_number: u32,
    prior_challenge_number: Option<u32>,
    prior_prior_challenge_number: Option<u32>,
    rng: SimpleRng,
}

impl ChallengeSequencer {
    /// Create a sequencer over `[min, max]` and draw the initial challenge
    ///
    /// A single-value range would make the redraw loop spin forever, so it is
    /// rejected up front as a broken configuration.
    pub fn new(min: u32, max: u32, seed: u32) -> Self {
        assert!(
            min != max,
            "degenerate challenge range [{}, {}]",
            min,
            max
        );
        debug_assert!(min < max);

        let mut rng = SimpleRng::new(seed);
        let challenge_number = rng.int_between(min, max);
        Self {
            min,
            max,
            challenge_number,
            prior_challenge_number: None,
            prior_prior_challenge_number: None,
            rng,
        }
    }

    pub fn range(&self) -> (u32, u32) {
        (self.min, self.max)
    }

    pub fn challenge_number(&self) -> u32 {
        self.challenge_number
    }

    /// Draw the next challenge number
    ///
    /// Redraws while the candidate would be the third identical challenge in
    /// a row. Terminates because the range holds at least two values.
    pub fn next_challenge(&mut self) -> u32 {
        self.prior_prior_challenge_number = self.prior_challenge_number;
        self.prior_challenge_number = Some(self.challenge_number);

        let mut candidate = self.rng.int_between(self.min, self.max);
        while Some(candidate) == self.prior_challenge_number
            && Some(candidate) == self.prior_prior_challenge_number
        {
            debug!("redrawing challenge, {} would repeat three times", candidate);
            candidate = self.rng.int_between(self.min, self.max);
        }

        self.challenge_number = candidate;
        candidate
    }
}

/// What came of one answer submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnswerOutcome {
    /// The submitted value matched the challenge number
    pub correct: bool,
    /// The score went up (correct on the first attempt)
    pub scored: bool,
    /// The score just reached the reward threshold
    pub reward: bool,
}

/// Score, attempt, and solved state for one game level
///
/// Per-challenge lifecycle: unsolved until the right answer arrives, then
/// solved until `new_challenge` starts the next round.
#[derive(Debug, Clone)]
pub struct GameLevel {
    level_number: u32,
    range: (u32, u32),
    sequencer: ChallengeSequencer,
    score: u32,
    reward_threshold: u32,
    is_challenge_solved: bool,
    answer_attempt_count: u32,
}

impl GameLevel {
    /// Create level `level_number` (1-based) of a game with the given
    /// per-level challenge width
    pub fn new(level_number: u32, level_width: u32, seed: u32) -> Self {
        let range = challenge_range(level_number, level_width);
        Self {
            level_number,
            range,
            sequencer: ChallengeSequencer::new(range.0, range.1, seed),
            score: 0,
            reward_threshold: REWARD_SCORE,
            is_challenge_solved: false,
            answer_attempt_count: 0,
        }
    }

    pub fn level_number(&self) -> u32 {
        self.level_number
    }

    pub fn range(&self) -> (u32, u32) {
        self.range
    }

    pub fn challenge_number(&self) -> u32 {
        self.sequencer.challenge_number()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_challenge_solved(&self) -> bool {
        self.is_challenge_solved
    }

    pub fn answer_attempt_count(&self) -> u32 {
        self.answer_attempt_count
    }

    /// Check `value` against the current challenge
    ///
    /// Only a first-attempt correct answer scores. Submissions after the
    /// challenge is already solved are ignored.
    pub fn submit_answer(&mut self, value: u32) -> AnswerOutcome {
        if self.is_challenge_solved {
            return AnswerOutcome {
                correct: true,
                ..AnswerOutcome::default()
            };
        }

        self.answer_attempt_count += 1;

        if value != self.challenge_number() {
            return AnswerOutcome::default();
        }

        self.is_challenge_solved = true;
        let scored = self.answer_attempt_count == 1;
        let mut reward = false;
        if scored {
            self.score += 1;
            if self.score == self.reward_threshold {
                debug!("level {} reached the reward score", self.level_number);
                reward = true;
            }
        }

        AnswerOutcome {
            correct: true,
            scored,
            reward,
        }
    }

    /// Move on to a fresh challenge
    ///
    /// Not gated on the current challenge being solved; calling early simply
    /// abandons it.
    pub fn new_challenge(&mut self) -> u32 {
        self.is_challenge_solved = false;
        self.answer_attempt_count = 0;
        self.sequencer.next_challenge()
    }

    /// Clear the level's progress and draw a fresh challenge
    ///
    /// Deliberately draws a new random challenge instead of restoring the
    /// level's original one.
    pub fn reset_level(&mut self) {
        self.score = 0;
        self.new_challenge();
    }
}
