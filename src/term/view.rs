//! View module - renders models into plain text lines

use crate::core::{CompareModel, CountingArea, NumberPlayGameModel, NumberPlayModel, Subitizer};
use crate::types::{
    AreaId, CompareSide, CountingObjectKind, GameType, SUBITIZER_GRID_X, SUBITIZER_GRID_Y,
};

/// One row of glyphs for an area's objects, groups shown as `[n]`
fn area_row(area: &CountingArea, glyph: char) -> String {
    let mut row = String::new();
    for object in area.objects() {
        if object.grouped() && object.group_size() > 1 {
            row.push_str(&format!("[{}]", object.group_size()));
        } else {
            row.push(glyph);
        }
        row.push(' ');
    }
    row
}

fn focus_marker(focused: bool) -> &'static str {
    if focused {
        ">"
    } else {
        " "
    }
}

/// Lines for the Ten/Twenty screens
pub fn counting_screen_lines(
    model: &NumberPlayModel,
    focused: AreaId,
    title: &str,
) -> Vec<String> {
    vec![
        format!("NUMBER PLAY - {}", title),
        String::new(),
        format!(
            "current number: {}  ({})",
            model.current_number(),
            model.speaker().text()
        ),
        String::new(),
        format!(
            "{} ones    [{:>2}]  {}",
            focus_marker(focused == AreaId::Ones),
            model.ones_sum(),
            area_row(model.area(AreaId::Ones), 'o')
        ),
        format!(
            "{} objects [{:>2}]  {}",
            focus_marker(focused == AreaId::Objects),
            model.objects_sum(),
            area_row(model.area(AreaId::Objects), CountingObjectKind::Dog.glyph())
        ),
        String::new(),
        "keys: +/- add/remove  tab focus  g grouping  r reset  q quit".to_string(),
    ]
}

/// Lines for the Compare screen
pub fn compare_screen_lines(model: &CompareModel, focused: CompareSide) -> Vec<String> {
    let relation = model.comparison();
    vec![
        "NUMBER PLAY - compare".to_string(),
        String::new(),
        format!(
            "{} {} {}",
            model.number(CompareSide::Left),
            relation.symbol(),
            model.number(CompareSide::Right)
        ),
        String::new(),
        format!(
            "{} left  [{:>2}]  {}",
            focus_marker(focused == CompareSide::Left),
            model.number(CompareSide::Left),
            area_row(model.area(CompareSide::Left), 'o')
        ),
        format!(
            "{} right [{:>2}]  {}",
            focus_marker(focused == CompareSide::Right),
            model.number(CompareSide::Right),
            area_row(model.area(CompareSide::Right), 'o')
        ),
        String::new(),
        "keys: +/- add/remove  tab side  r reset  q quit".to_string(),
    ]
}

/// Character grid for a subitize pattern
///
/// Pattern coordinates land on half-unit steps; cells are matched by nearest
/// grid point, which is exact for random patterns and approximate for the
/// arranged half-offset layouts.
pub fn pattern_lines(subitizer: &Subitizer) -> Vec<String> {
    let mut lines = Vec::new();
    for y in -SUBITIZER_GRID_Y..=SUBITIZER_GRID_Y {
        let mut row = String::new();
        for x in -SUBITIZER_GRID_X..=SUBITIZER_GRID_X {
            let hit = subitizer
                .points()
                .iter()
                .any(|&(px, py)| px.round() as i32 == x && py.round() as i32 == y);
            row.push(if hit { '*' } else { '.' });
            row.push(' ');
        }
        lines.push(row);
    }
    lines
}

/// Lines for the Game screen
pub fn game_screen_lines(
    model: &NumberPlayGameModel,
    answer_buffer: &str,
    status: &str,
) -> Vec<String> {
    let mut lines = vec!["NUMBER PLAY - game".to_string(), String::new()];

    match model.selection() {
        None => {
            lines.push("pick a level:".to_string());
            for (i, level) in model.counting_levels().iter().enumerate() {
                lines.push(format!(
                    "  F{}  counting level {}  score {}",
                    i + 1,
                    level.level().level_number(),
                    level.level().score()
                ));
            }
            for (i, level) in model.subitize_levels().iter().enumerate() {
                lines.push(format!(
                    "  F{}  subitize level {}  score {}",
                    i + 3,
                    level.level().level_number(),
                    level.level().score()
                ));
            }
        }
        Some((GameType::Counting, index)) => {
            let level = &model.counting_levels()[index];
            lines.push(format!(
                "counting level {}  score {}",
                level.level().level_number(),
                level.level().score()
            ));
            lines.push(format!(
                "count the {}s ({}, {})",
                level.object_kind().as_str(),
                level.representation().as_str(),
                if level.grouped() { "grouped" } else { "loose" }
            ));
            let glyph = level.object_kind().glyph();
            let row: String = (0..level.level().challenge_number())
                .flat_map(|_| [glyph, ' '])
                .collect();
            lines.push(row);
        }
        Some((GameType::Subitize, index)) => {
            let level = &model.subitize_levels()[index];
            lines.push(format!(
                "subitize level {}  score {}",
                level.level().level_number(),
                level.level().score()
            ));
            if level.uses_pattern() {
                lines.extend(pattern_lines(level.subitizer()));
            } else {
                lines.push(format!(
                    "(ten frame with {} dots)",
                    level.level().challenge_number()
                ));
            }
        }
    }

    lines.push(String::new());
    lines.push(format!("answer: {}_", answer_buffer));
    if !status.is_empty() {
        lines.push(status.to_string());
    }
    lines.push(String::new());
    lines.push("keys: digits answer  enter submit  n new  r reset  q quit".to_string());
    lines
}
