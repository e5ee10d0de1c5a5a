use std::collections::HashSet;

use proptest::prelude::*;
use timed_snake::config::GameConfig;
use timed_snake::direction::Direction;
use timed_snake::game::{GameController, GameStatus, TickOutcome};
use timed_snake::grid::Cell;
use timed_snake::snake::INITIAL_SNAKE_LENGTH;

#[derive(Debug, Clone, Copy)]
enum Action {
    Turn(Direction),
    Move,
    Food,
    Restart,
}

fn small_config() -> GameConfig {
    GameConfig {
        width: 10,
        height: 8,
        min_food: 2,
        max_food: 4,
        max_total_food: 8,
        ..GameConfig::default()
    }
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => prop::sample::select(Direction::ALL.to_vec()).prop_map(Action::Turn),
        6 => Just(Action::Move),
        2 => Just(Action::Food),
        1 => Just(Action::Restart),
    ]
}

fn assert_board_consistent(game: &GameController, max_total: usize) {
    let snake: HashSet<Cell> = game.snake().segments().copied().collect();
    let food: HashSet<Cell> = game.food().cells().iter().copied().collect();

    assert_eq!(food.len(), game.food().len(), "food cells must be distinct");
    assert!(food.is_disjoint(&snake), "food must never sit under the snake");
    assert!(game.food().len() <= max_total);
    assert!(game.snake().len() <= game.grid().capacity());
}

proptest! {
    #[test]
    fn tick_invariants_hold(
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 1..300),
    ) {
        let config = small_config();
        let max_total = config.max_total_food;
        let mut game = GameController::new_with_seed(config, seed);
        assert_board_consistent(&game, max_total);

        for action in actions {
            match action {
                Action::Turn(direction) => game.request_direction(direction),
                Action::Move => {
                    let previous_heading = game.heading();
                    let previous_len = game.snake().len();
                    let was_playing = game.status() == GameStatus::Playing;

                    let outcome = game.on_movement_tick();

                    if was_playing {
                        prop_assert_ne!(game.heading(), previous_heading.opposite());
                        prop_assert!(game.snake().len() >= previous_len);
                    } else {
                        prop_assert_eq!(outcome, TickOutcome::Ignored);
                        prop_assert_eq!(game.snake().len(), previous_len);
                    }
                }
                Action::Food => {
                    let before = game.food().len();
                    let spawned = game.on_food_tick();
                    if spawned.is_some() {
                        prop_assert_eq!(game.food().len(), before + 1);
                    } else {
                        prop_assert_eq!(game.food().len(), before);
                    }
                }
                Action::Restart => {
                    if game.status() == GameStatus::GameOver {
                        game.restart();
                        prop_assert_eq!(game.snake().len(), INITIAL_SNAKE_LENGTH);
                        prop_assert_eq!(game.heading(), Direction::Right);
                    }
                }
            }

            prop_assert_eq!(
                game.snake().len(),
                INITIAL_SNAKE_LENGTH + game.score() as usize
            );
            assert_board_consistent(&game, max_total);
        }
    }

    #[test]
    fn food_ticks_never_exceed_cap(seed in any::<u64>(), ticks in 0usize..60) {
        let config = GameConfig::default();
        let cap = config.max_total_food;
        let mut game = GameController::new_with_seed(config, seed);

        for _ in 0..ticks {
            let _ = game.on_food_tick();
            prop_assert!(game.food().len() <= cap);
        }
    }
}

#[test]
fn food_ticks_saturate_at_cap() {
    let config = GameConfig::default();
    let cap = config.max_total_food;
    let mut game = GameController::new_with_seed(config, 17);

    for _ in 0..(cap * 2) {
        let _ = game.on_food_tick();
    }

    assert_eq!(game.food().len(), cap);
    assert_eq!(game.on_food_tick(), None);
}
