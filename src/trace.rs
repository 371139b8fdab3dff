//! Headless trace mode - scripted runs with machine-readable output
//!
//! Applies a seeded random action sequence to a `NumberPlayModel` and emits
//! one JSON snapshot line per step. Useful for piping model behavior into
//! external tools and for regression-checking the reconciler without a
//! terminal attached.

use std::io::Write;

use anyhow::{anyhow, Result};

use crate::core::rng::SimpleRng;
use crate::core::NumberPlayModel;
use crate::types::{AreaId, TWENTY_SCREEN_MAX_SUM};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceConfig {
    pub steps: u32,
    pub seed: u32,
    pub max_sum: u32,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            steps: 100,
            seed: 1,
            max_sum: TWENTY_SCREEN_MAX_SUM,
        }
    }
}

/// Parse `trace [--steps N] [--seed N]` from the CLI tail
///
/// Returns `Ok(None)` when the arguments are not a trace invocation at all.
pub fn parse_trace_args(args: &[String]) -> Result<Option<TraceConfig>> {
    if args.is_empty() || args[0] != "trace" {
        return Ok(None);
    }

    let mut config = TraceConfig::default();
    let mut i = 1usize;
    while i < args.len() {
        match args[i].as_str() {
            "--steps" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("trace: missing value for --steps"))?;
                config.steps = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("trace: invalid --steps value: {}", v))?;
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("trace: missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("trace: invalid --seed value: {}", v))?;
            }
            other => {
                return Err(anyhow!("trace: unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(Some(config))
}

/// Run the trace, writing one JSON snapshot line per step
pub fn run_trace(config: &TraceConfig, out: &mut dyn Write) -> Result<()> {
    let mut model = NumberPlayModel::new(config.max_sum);
    let mut rng = SimpleRng::new(config.seed);

    for _ in 0..config.steps {
        apply_random_action(&mut model, &mut rng);
        let line = serde_json::to_string(&model.snapshot())?;
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

fn apply_random_action(model: &mut NumberPlayModel, rng: &mut SimpleRng) {
    let area = if rng.next_bool() {
        AreaId::Ones
    } else {
        AreaId::Objects
    };

    match rng.next_range(10) {
        // Weighted toward adds so traces actually climb.
        0..=4 => {
            model.add_object(area);
        }
        5..=7 => {
            model.remove_object(area);
        }
        8 => {
            let n = rng.int_between(1, 3);
            model.return_objects(area, n.min(model.area(area).sum()));
        }
        _ => {
            model.reset();
        }
    }
}
