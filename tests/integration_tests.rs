//! Integration tests for the model core

use number_play::core::{
    challenge_range, CompareModel, NumberPlayGameModel, NumberPlayModel, SimpleRng, Subitizer,
};
use number_play::types::{
    AreaId, CompareSide, ComparisonRelation, GameType, REWARD_SCORE, TEN_SCREEN_MAX_SUM,
    TWENTY_SCREEN_MAX_SUM,
};

#[test]
fn test_single_user_add_reconciles_both_areas() {
    let mut model = NumberPlayModel::new(TEN_SCREEN_MAX_SUM);

    // User drops one unit into the ones area.
    assert!(model.add_object(AreaId::Ones));

    // The shared number and the other area follow, and the pass is over.
    assert_eq!(model.current_number(), 1);
    assert_eq!(model.ones_sum(), 1);
    assert_eq!(model.objects_sum(), 1);
    assert!(!model.is_leading(AreaId::Ones));
    assert!(!model.is_leading(AreaId::Objects));
}

#[test]
fn test_interleaved_manipulation_keeps_invariant() {
    let mut model = NumberPlayModel::new(TWENTY_SCREEN_MAX_SUM);
    let mut rng = SimpleRng::new(99);

    for _ in 0..1000 {
        let area = if rng.next_bool() {
            AreaId::Ones
        } else {
            AreaId::Objects
        };
        match rng.next_range(4) {
            0 | 1 => {
                model.add_object(area);
            }
            2 => {
                model.remove_object(area);
            }
            _ => {
                let sum = model.area(area).sum();
                if sum > 0 {
                    model.return_objects(area, rng.int_between(1, sum));
                }
            }
        }

        assert_eq!(model.current_number(), model.ones_sum());
        assert_eq!(model.current_number(), model.objects_sum());
        assert!(model.current_number() <= TWENTY_SCREEN_MAX_SUM);
    }
}

#[test]
fn test_counting_level_two_first_try_scenario() {
    // Find a seed whose level-2 challenge is 15 so the scenario reads
    // exactly like the product description.
    let mut model = (1..)
        .map(NumberPlayGameModel::new)
        .find(|m| m.counting_levels()[1].level().challenge_number() == 15)
        .unwrap();

    assert_eq!(model.counting_levels()[1].level().range(), (11, 20));

    let outcome = model.counting_level_mut(1).submit_answer(15);

    assert!(outcome.correct);
    let level = model.counting_levels()[1].level();
    assert!(level.is_challenge_solved());
    assert_eq!(level.score(), 1);
    assert_eq!(level.answer_attempt_count(), 1);
}

#[test]
fn test_reward_comes_exactly_at_threshold() {
    let mut model = NumberPlayGameModel::new(17);
    let mut reward_rounds = Vec::new();

    for round in 1..=15u32 {
        let answer = model.subitize_levels()[0].level().challenge_number();
        let outcome = model.subitize_level_mut(0).submit_answer(answer);
        if outcome.reward {
            reward_rounds.push(round);
        }
        model.subitize_level_mut(0).new_challenge();
    }

    assert_eq!(reward_rounds, vec![REWARD_SCORE]);
}

#[test]
fn test_challenge_ranges_do_not_overlap_across_levels() {
    for game_type in [GameType::Counting, GameType::Subitize] {
        let width = game_type.level_width();
        let mut covered = Vec::new();
        for level in 1..=4 {
            let (min, max) = challenge_range(level, width);
            for n in min..=max {
                assert!(!covered.contains(&n), "{} covered twice", n);
                covered.push(n);
            }
        }
        assert_eq!(covered.len() as u32, 4 * width);
        assert_eq!(covered[0], 1);
    }
}

#[test]
fn test_no_triple_repeat_across_a_long_session() {
    let mut model = NumberPlayGameModel::new(4);
    let mut draws = vec![model.subitize_levels()[0].level().challenge_number()];

    for _ in 0..500 {
        draws.push(model.subitize_level_mut(0).new_challenge());
    }

    for window in draws.windows(3) {
        assert!(!(window[0] == window[1] && window[1] == window[2]));
    }
}

#[test]
fn test_subitizer_cardinality_for_all_counts() {
    let mut subitizer = Subitizer::new(55);
    for count in 1..=5u32 {
        for _ in 0..20 {
            subitizer.set_count(count);
            assert_eq!(subitizer.points().len(), count as usize);
        }
    }
}

#[test]
fn test_compare_screen_relation_follows_user_actions() {
    let mut model = CompareModel::new(20);

    model.add_object(CompareSide::Left);
    model.add_object(CompareSide::Left);
    model.add_object(CompareSide::Right);
    assert_eq!(model.comparison(), ComparisonRelation::GreaterThan);

    model.remove_object(CompareSide::Left);
    assert_eq!(model.comparison(), ComparisonRelation::Equal);
}

#[test]
fn test_level_reset_does_not_leak_into_siblings() {
    let mut model = NumberPlayGameModel::new(12);

    let answer = model.counting_levels()[0].level().challenge_number();
    model.counting_level_mut(0).submit_answer(answer);
    let answer = model.subitize_levels()[1].level().challenge_number();
    model.subitize_level_mut(1).submit_answer(answer);

    model.counting_level_mut(0).reset_level();

    assert_eq!(model.counting_levels()[0].level().score(), 0);
    assert_eq!(model.subitize_levels()[1].level().score(), 1);
}

#[test]
fn test_speech_text_follows_shared_number() {
    let mut model = NumberPlayModel::new(TWENTY_SCREEN_MAX_SUM);
    assert_eq!(model.speaker().text(), "zero");

    for _ in 0..12 {
        model.add_object(AreaId::Objects);
    }
    assert_eq!(model.speaker().text(), "twelve");

    model.reset();
    assert_eq!(model.speaker().text(), "zero");
}
