//! Snapshot module - plain serializable views of model state
//!
//! Snapshots are what the outside world (trace mode, tests, external tools)
//! sees; they carry no behavior and change shape deliberately rarely.

use serde::{Deserialize, Serialize};

use crate::core::game::{CountingLevel, SubitizeLevel};
use crate::core::level::GameLevel;
use crate::core::subitize::Subitizer;
use crate::types::GameType;

/// State of a `NumberPlayModel` at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub current_number: u32,
    pub ones_sum: u32,
    pub objects_sum: u32,
    pub max_sum: u32,
    pub is_resetting: bool,
    pub spoken_text: String,
}

/// State of one game level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub game_type: String,
    pub level_number: u32,
    pub range_min: u32,
    pub range_max: u32,
    pub challenge_number: u32,
    pub score: u32,
    pub is_challenge_solved: bool,
    pub answer_attempt_count: u32,
}

impl LevelSnapshot {
    pub fn from_level(game_type: GameType, level: &GameLevel) -> Self {
        let (range_min, range_max) = level.range();
        Self {
            game_type: game_type.as_str().to_string(),
            level_number: level.level_number(),
            range_min,
            range_max,
            challenge_number: level.challenge_number(),
            score: level.score(),
            is_challenge_solved: level.is_challenge_solved(),
            answer_attempt_count: level.answer_attempt_count(),
        }
    }

    pub fn from_counting(level: &CountingLevel) -> Self {
        Self::from_level(GameType::Counting, level.level())
    }

    pub fn from_subitize(level: &SubitizeLevel) -> Self {
        Self::from_level(GameType::Subitize, level.level())
    }
}

/// State of a subitizer pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubitizeSnapshot {
    pub count: u32,
    pub rotation: f64,
    pub points: Vec<(f64, f64)>,
    pub shape_visible: bool,
}

impl SubitizeSnapshot {
    pub fn from_subitizer(subitizer: &Subitizer) -> Self {
        Self {
            count: subitizer.count(),
            rotation: subitizer.rotation(),
            points: subitizer.points().to_vec(),
            shape_visible: subitizer.shape_visible(),
        }
    }
}
