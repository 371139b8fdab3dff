//! Number Play - model core of an educational number-sense simulation.
//!
//! Two independently manipulable counting areas stay reconciled with one
//! shared "current number" (the Ten and Twenty screens), a challenge game
//! tracks per-level scoring and rewards (the Game screen), and a subitizer
//! lays out instant-recognition point patterns. The terminal front end and
//! the headless trace mode are thin surfaces over the same models.

pub mod core;
pub mod input;
pub mod speech;
pub mod term;
pub mod trace;
pub mod types;
