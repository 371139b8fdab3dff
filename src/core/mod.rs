//! Core module - pure model logic with no UI dependencies
//!
//! Everything here is synchronous, deterministic for a given seed, and free
//! of I/O, so whole sessions can be driven and replayed from tests.
//!
//! - [`area`]: counting objects and the counting area's derived sum
//! - [`model`]: the dual-area reconciler behind the Ten and Twenty screens
//! - [`compare`]: the Compare screen's two independent areas
//! - [`level`]: challenge ranges, the no-triple-repeat sequencer, scoring
//! - [`game`]: the Game screen's level sets and per-challenge presentation
//! - [`subitize`]: arranged and random point patterns for counts 1 to 5
//! - [`rng`]: the seeded LCG every random decision draws from
//! - [`snapshot`]: serializable views for trace mode and tests

pub mod area;
pub mod compare;
pub mod game;
pub mod level;
pub mod model;
pub mod rng;
pub mod snapshot;
pub mod subitize;

pub use area::{CountingArea, CountingObject};
pub use compare::CompareModel;
pub use game::{CountingLevel, NumberPlayGameModel, SubitizeLevel};
pub use level::{challenge_range, AnswerOutcome, ChallengeSequencer, GameLevel};
pub use model::NumberPlayModel;
pub use rng::SimpleRng;
pub use snapshot::{LevelSnapshot, ModelSnapshot, SubitizeSnapshot};
pub use subitize::{PatternPoint, Subitizer};
