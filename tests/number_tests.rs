//! Number game integration tests.
//!
//! These tests play full rounds through the public API and the
//! `RulesEngine` trait with injected secrets.

use guess_games::core::{DifficultyTier, GameConfig, GameRng, ScriptedSource};
use guess_games::games::number::{Direction, GuessOutcome, InvalidGuess, NumberGame, RoundPhase};
use guess_games::rules::{GameResult, RulesEngine};

// =============================================================================
// Scenarios
// =============================================================================

/// Tier {25, 7}, secret 10: low hint, invalid input, then a win.
#[test]
fn test_hint_invalid_then_win() {
    let mut game = NumberGame::new(ScriptedSource::new([10]));
    let mut round = game.start(DifficultyTier::new(25, 7));

    assert_eq!(
        round.submit_guess("5"),
        Some(GuessOutcome::Hint {
            direction: Direction::TooLow,
            lives_remaining: 6
        })
    );
    assert_eq!(round.lives_remaining(), 6);

    assert_eq!(
        round.submit_guess("abc"),
        Some(GuessOutcome::Invalid(InvalidGuess::NotANumber))
    );
    assert_eq!(round.lives_remaining(), 6);

    assert_eq!(round.submit_guess("10"), Some(GuessOutcome::Won { attempts: 2 }));
    assert!(!round.is_active());
    assert_eq!(round.history().iter().copied().collect::<Vec<_>>(), vec![5, 10]);
}

/// Tier {25, 1}, secret 10: one wrong guess loses and reveals the secret.
#[test]
fn test_single_life_loss() {
    let mut game = NumberGame::new(ScriptedSource::new([10]));
    let mut round = game.start(DifficultyTier::new(25, 1));

    assert_eq!(round.submit_guess("1"), Some(GuessOutcome::Lost { secret: 10 }));
    assert_eq!(round.lives_remaining(), 0);
    assert_eq!(round.phase(), RoundPhase::Lost);
    assert_eq!(game.answer(&round).as_deref(), Some("10"));
}

/// Spending every life with hints along the way.
#[test]
fn test_full_losing_round() {
    let mut game = NumberGame::new(ScriptedSource::new([50]));
    let mut round = game.start(DifficultyTier::new(100, 4));

    let outcomes = game.apply_all(&mut round, ["10", "90", "40", "60", "50"]);

    assert_eq!(
        outcomes,
        vec![
            GuessOutcome::Hint {
                direction: Direction::TooLow,
                lives_remaining: 3
            },
            GuessOutcome::Hint {
                direction: Direction::TooHigh,
                lives_remaining: 2
            },
            GuessOutcome::Hint {
                direction: Direction::TooLow,
                lives_remaining: 1
            },
            GuessOutcome::Lost { secret: 50 },
        ]
    );
    assert_eq!(game.is_terminal(&round), Some(GameResult::Lost));
    // The fifth guess never landed
    assert_eq!(round.history().len(), 4);
}

/// Binary search always wins the default tiers.
#[test]
fn test_binary_search_wins_default_tiers() {
    let config = GameConfig::default();
    let mut game = NumberGame::new(GameRng::new(2024));

    for name in ["easy", "medium", "hard"] {
        let tier = config.tier(name).unwrap();
        for _ in 0..50 {
            let mut round = game.start(tier);
            let (mut low, mut high) = (1, tier.upper_bound);

            loop {
                let guess = low + (high - low) / 2;
                match round.submit_guess(&guess.to_string()) {
                    Some(GuessOutcome::Hint {
                        direction: Direction::TooLow,
                        ..
                    }) => low = guess + 1,
                    Some(GuessOutcome::Hint {
                        direction: Direction::TooHigh,
                        ..
                    }) => high = guess - 1,
                    Some(GuessOutcome::Won { .. }) => break,
                    other => panic!("tier {name}: unexpected outcome {other:?}"),
                }
            }

            assert_eq!(game.is_terminal(&round), Some(GameResult::Won));
        }
    }
}

// =============================================================================
// Edge Cases
// =============================================================================

/// Out-of-range guesses report the accepted range.
#[test]
fn test_out_of_range_reports_bounds() {
    let mut game = NumberGame::new(ScriptedSource::new([7]));
    let mut round = game.start(DifficultyTier::new(200, 12));

    assert_eq!(
        round.submit_guess("201"),
        Some(GuessOutcome::Invalid(InvalidGuess::OutOfRange { min: 1, max: 200 }))
    );
    assert!(round.history().is_empty());
}

/// Trailing text after a number is ignored; leading text is not.
#[test]
fn test_leading_number_prefix() {
    let mut game = NumberGame::new(ScriptedSource::new([4]));
    let mut round = game.start(DifficultyTier::new(25, 7));

    assert_eq!(
        round.submit_guess("12abc"),
        Some(GuessOutcome::Hint {
            direction: Direction::TooHigh,
            lives_remaining: 6
        })
    );
    assert_eq!(
        round.submit_guess("abc12"),
        Some(GuessOutcome::Invalid(InvalidGuess::NotANumber))
    );
    assert_eq!(round.submit_guess("4.5"), Some(GuessOutcome::Won { attempts: 2 }));
}

/// A tier with a single possible value is always won on the first guess.
#[test]
fn test_single_value_tier() {
    let mut game = NumberGame::new(GameRng::new(1));
    let mut round = game.start(DifficultyTier::new(1, 1));

    assert_eq!(round.secret(), 1);
    assert_eq!(round.submit_guess("1"), Some(GuessOutcome::Won { attempts: 1 }));
}

/// Nothing happens after the round ends.
#[test]
fn test_terminal_round_is_frozen() {
    let mut game = NumberGame::new(ScriptedSource::new([3]));
    let mut round = game.start(DifficultyTier::new(25, 7));
    round.submit_guess("3");

    let before = round.snapshot();
    for text in ["3", "4", "abc", "0"] {
        assert_eq!(game.apply(&mut round, text), None);
    }
    assert_eq!(round.snapshot(), before);
}

/// Same seed, same secrets.
#[test]
fn test_seeded_rounds_replay() {
    let tier = DifficultyTier::new(100, 10);
    let mut a = NumberGame::new(GameRng::new(77));
    let mut b = NumberGame::new(GameRng::new(77));

    for _ in 0..20 {
        assert_eq!(a.start(tier).secret(), b.start(tier).secret());
    }
}
