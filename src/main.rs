//! Number Play terminal runner (default binary).
//!
//! Picks a screen from the command line, then drives its model from key
//! presses in a raw-mode crossterm loop. The `trace` subcommand skips the
//! terminal entirely and streams JSON snapshots to stdout.

use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use number_play::core::{CompareModel, NumberPlayGameModel, NumberPlayModel};
use number_play::input::{map_key, should_quit};
use number_play::term::{view, TerminalScreen};
use number_play::trace::{parse_trace_args, run_trace};
use number_play::types::{
    AreaId, CompareSide, GameType, ScreenAction, ScreenKind, COMPARE_MAX_SUM,
    GAME_LEVELS_PER_TYPE, TEN_SCREEN_MAX_SUM, TWENTY_SCREEN_MAX_SUM,
};

#[derive(Debug, Clone, Copy)]
struct AppConfig {
    screen: ScreenKind,
    seed: u32,
}

/// Parse `[ten|twenty|compare|game] [--seed N]`
fn parse_args(args: &[String]) -> Result<AppConfig> {
    let mut screen = ScreenKind::Ten;
    let mut seed: u32 = 1;
    let mut i = 0usize;

    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            other => {
                screen = ScreenKind::from_str(other)
                    .ok_or_else(|| anyhow!("unknown screen: {}", other))?;
            }
        }
        i += 1;
    }

    Ok(AppConfig { screen, seed })
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some(config) = parse_trace_args(&args)? {
        let mut stdout = std::io::stdout();
        return run_trace(&config, &mut stdout);
    }

    let config = parse_args(&args)?;
    let mut term = TerminalScreen::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// The active screen and its transient UI state
enum App {
    Counting {
        model: NumberPlayModel,
        focused: AreaId,
        title: &'static str,
    },
    Compare {
        model: CompareModel,
        focused: CompareSide,
    },
    Game {
        model: NumberPlayGameModel,
        answer: String,
        status: String,
    },
}

impl App {
    fn new(config: AppConfig) -> Self {
        match config.screen {
            ScreenKind::Ten => App::Counting {
                model: NumberPlayModel::new(TEN_SCREEN_MAX_SUM),
                focused: AreaId::Ones,
                title: "ten",
            },
            ScreenKind::Twenty => App::Counting {
                model: NumberPlayModel::new(TWENTY_SCREEN_MAX_SUM),
                focused: AreaId::Ones,
                title: "twenty",
            },
            ScreenKind::Compare => App::Compare {
                model: CompareModel::new(COMPARE_MAX_SUM),
                focused: CompareSide::Left,
            },
            ScreenKind::Game => App::Game {
                model: NumberPlayGameModel::new(config.seed),
                answer: String::new(),
                status: String::new(),
            },
        }
    }

    fn lines(&self) -> Vec<String> {
        match self {
            App::Counting {
                model,
                focused,
                title,
            } => view::counting_screen_lines(model, *focused, title),
            App::Compare { model, focused } => view::compare_screen_lines(model, *focused),
            App::Game {
                model,
                answer,
                status,
            } => view::game_screen_lines(model, answer, status),
        }
    }

    /// Apply one action; returns false when the app should quit
    fn apply(&mut self, action: ScreenAction) -> bool {
        if action == ScreenAction::Quit {
            return false;
        }
        match self {
            App::Counting { model, focused, .. } => apply_counting(model, focused, action),
            App::Compare { model, focused } => apply_compare(model, focused, action),
            App::Game {
                model,
                answer,
                status,
            } => apply_game(model, answer, status, action),
        }
        true
    }
}

fn apply_counting(model: &mut NumberPlayModel, focused: &mut AreaId, action: ScreenAction) {
    match action {
        ScreenAction::Increment => {
            model.add_object(*focused);
        }
        ScreenAction::Decrement => {
            model.remove_object(*focused);
        }
        ScreenAction::ToggleFocus => *focused = focused.other(),
        ScreenAction::ToggleGrouping => {
            let enabled = model.area(*focused).grouping_enabled();
            model.set_grouping_enabled(*focused, !enabled);
        }
        ScreenAction::Reset => model.reset(),
        _ => {}
    }
}

fn apply_compare(model: &mut CompareModel, focused: &mut CompareSide, action: ScreenAction) {
    match action {
        ScreenAction::Increment => {
            model.add_object(*focused);
        }
        ScreenAction::Decrement => {
            model.remove_object(*focused);
        }
        ScreenAction::ToggleFocus => *focused = focused.other(),
        ScreenAction::Reset => model.reset(),
        _ => {}
    }
}

fn apply_game(
    model: &mut NumberPlayGameModel,
    answer: &mut String,
    status: &mut String,
    action: ScreenAction,
) {
    match action {
        ScreenAction::SelectLevel(slot) => {
            let per_type = GAME_LEVELS_PER_TYPE as u8;
            let (game_type, index) = if slot < per_type {
                (GameType::Counting, slot as usize)
            } else {
                (GameType::Subitize, (slot - per_type) as usize)
            };
            if model.select_level(game_type, index) {
                answer.clear();
                status.clear();
            }
        }
        ScreenAction::Digit(d) => {
            // Two digits cover the whole challenge space.
            if answer.len() < 2 {
                answer.push((b'0' + d) as char);
            }
        }
        ScreenAction::Back => {
            if !answer.is_empty() {
                answer.pop();
            } else {
                model.clear_selection();
                status.clear();
            }
        }
        ScreenAction::SubmitAnswer => {
            let Ok(value) = answer.parse::<u32>() else {
                return;
            };
            answer.clear();
            let outcome = match model.selection() {
                Some((GameType::Counting, index)) => {
                    model.counting_level_mut(index).submit_answer(value)
                }
                Some((GameType::Subitize, index)) => {
                    model.subitize_level_mut(index).submit_answer(value)
                }
                None => return,
            };
            *status = if outcome.reward {
                "correct - reward earned!".to_string()
            } else if outcome.correct {
                "correct! press n for the next challenge".to_string()
            } else {
                "not quite, try again".to_string()
            };
        }
        ScreenAction::NewChallenge => {
            match model.selection() {
                Some((GameType::Counting, index)) => {
                    model.counting_level_mut(index).new_challenge();
                }
                Some((GameType::Subitize, index)) => {
                    model.subitize_level_mut(index).new_challenge();
                }
                None => return,
            }
            answer.clear();
            status.clear();
        }
        ScreenAction::Reset => {
            match model.selection() {
                Some((GameType::Counting, index)) => {
                    model.counting_level_mut(index).reset_level();
                }
                Some((GameType::Subitize, index)) => {
                    model.subitize_level_mut(index).reset_level();
                }
                None => model.reset(),
            }
            answer.clear();
            status.clear();
        }
        _ => {}
    }
}

fn run(term: &mut TerminalScreen, config: AppConfig) -> Result<()> {
    let mut app = App::new(config);

    loop {
        term.draw(&app.lines())?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }

        if let Some(action) = map_key(key.code) {
            if !app.apply(action) {
                return Ok(());
            }
        }
    }
}
