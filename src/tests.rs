#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::board::Board;
    use crate::deadlock;
    use crate::direction::Direction;
    use crate::heuristic::{self, ScoreCache};
    use crate::location::Location;
    use crate::parse::ParseError;
    use crate::solver::{Outcome, SolverOptions};
    use crate::state::State;

    const PUSH_ONTO_GOAL: &str = "\
#####
#@$.#
#####
";

    const WALK_THEN_PUSH: &str = "\
######
#@ $.#
######
";

    const CORNERED_BOX: &str = "\
#####
#$ .#
# @ #
#####
";

    const ALREADY_SOLVED: &str = "\
###
#*#
#@#
###
";

    const TWO_BOX: &str = "\
########
#@$  . #
#  $ . #
########
";

    const OVERFULL_ROOM: &str = "\
########
#@$$ . #
### ####
#  .   #
########
";

    const UNREACHABLE_LOWER_GOAL: &str = "\
#######
#@$ $.#
#   . #
#######
";

    const FROZEN_BLOCK: &str = "\
#######
#@....#
# $$  #
# $$  #
#######
";

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    fn solved_moves(text: &str) -> String {
        match board(text).solve(&SolverOptions::default()) {
            Outcome::Solved(moves) => moves,
            other => panic!("expected a solution, got {:?}", other),
        }
    }

    /// Replays `moves` under push physics and reports whether every box ends
    /// on a goal. Illegal moves panic.
    fn replay_solves(text: &str, moves: &str) -> bool {
        let board = board(text);
        let mut player = board.start_player;
        let mut boxes = board.start_boxes.clone();

        for ch in moves.chars() {
            let step = match ch {
                'u' => Direction::Up,
                'd' => Direction::Down,
                'l' => Direction::Left,
                'r' => Direction::Right,
                other => panic!("unexpected move character {:?}", other),
            };

            let next = step.attempt_from(player);
            assert!(!board.is_wall(next), "pusher walked into a wall");
            if let Some(slot) = boxes.iter().position(|&b| b == next) {
                let beyond = step.attempt_from(next);
                assert!(!board.is_wall(beyond), "box pushed into a wall");
                assert!(!boxes.contains(&beyond), "box pushed into a box");
                boxes[slot] = beyond;
            }
            player = next;
        }

        boxes.iter().all(|&b| board.is_goal(b))
    }

    #[test]
    fn rejects_missing_pusher() {
        assert_eq!("####\n#$.#\n####".parse::<Board>().unwrap_err(), ParseError::PusherCount(0));
    }

    #[test]
    fn rejects_multiple_pushers() {
        assert_eq!("#####\n#@@.#\n#####".parse::<Board>().unwrap_err(), ParseError::PusherCount(2));
    }

    #[test]
    fn rejects_box_goal_mismatch() {
        assert_eq!(
            "#####\n#@$ #\n#####".parse::<Board>().unwrap_err(),
            ParseError::BoxGoalMismatch { boxes: 1, goals: 0 }
        );
    }

    #[test]
    fn rejects_unknown_character() {
        assert_eq!(
            "#####\n#@x.#\n#####".parse::<Board>().unwrap_err(),
            ParseError::UnrecognizedCharacter('x', 2, 1)
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!("".parse::<Board>().unwrap_err(), ParseError::EmptyGrid);
        assert_eq!("\n\n".parse::<Board>().unwrap_err(), ParseError::EmptyGrid);
    }

    #[test]
    fn display_round_trips() {
        for text in [PUSH_ONTO_GOAL, WALK_THEN_PUSH, TWO_BOX, OVERFULL_ROOM, ALREADY_SOLVED] {
            assert_eq!(format!("{}", board(text)), text);
        }
    }

    #[test]
    fn corner_squares_are_dead() {
        let board = board(PUSH_ONTO_GOAL);
        // the cell beside the left wall can never be pushed out of
        assert!(board.is_dead(Location(1, 1)));
        assert!(!board.is_dead(Location(2, 1)));
        assert!(!board.is_dead(Location(3, 1)));
        // walls are not dead squares
        assert!(!board.is_dead(Location(0, 0)));
    }

    #[test]
    fn corridor_splits_rooms() {
        let board = board(OVERFULL_ROOM);

        // the one-wide passage belongs to no room
        assert_eq!(board.room_of(Location(3, 2)), None);

        let upper = board.room_of(Location(1, 1));
        let lower = board.room_of(Location(1, 3));
        assert!(upper.is_some() && lower.is_some());
        assert_ne!(upper, lower);
        assert_eq!(board.room_of(Location(6, 1)), upper);
        assert_eq!(board.room_of(Location(5, 3)), lower);

        // one goal on each side of the passage
        assert_eq!(board.room_goal_count, vec![1, 1]);
    }

    #[test]
    fn incremental_keys_match_recompute() {
        let board = board(TWO_BOX);
        let mut layer = vec![State::initial(&board)];

        for _ in 0..3 {
            let mut next = Vec::new();
            for state in &layer {
                for successor in state.successors(&board) {
                    assert_eq!(
                        successor.key,
                        State::full_key(&board, successor.player, &successor.boxes)
                    );
                    assert_eq!(successor.boxes.len(), board.box_count());
                    assert!(successor.boxes.windows(2).all(|pair| pair[0] < pair[1]));
                    assert!(successor.boxes.iter().all(|&b| !board.is_wall(b)));
                    next.push(successor);
                }
            }
            layer = next;
        }
    }

    #[test]
    fn walking_back_restores_key() {
        let board = board(WALK_THEN_PUSH);
        let initial = State::initial(&board);

        let stepped = initial
            .successors(&board)
            .into_iter()
            .find(|s| s.boxes == initial.boxes)
            .unwrap();
        let back = stepped
            .successors(&board)
            .into_iter()
            .find(|s| s.player == initial.player)
            .unwrap();

        assert_eq!(back.key, initial.key);
    }

    #[test]
    fn pushes_single_box_onto_goal() {
        assert_eq!(solved_moves(PUSH_ONTO_GOAL), "r");
    }

    #[test]
    fn walks_then_pushes() {
        assert_eq!(solved_moves(WALK_THEN_PUSH), "rr");
    }

    #[test]
    fn solves_single_row_puzzle() {
        assert_eq!(solved_moves("#@$.#"), "r");
    }

    #[test]
    fn solves_single_column_puzzle() {
        assert_eq!(solved_moves("#\n@\n$\n.\n#"), "d");
    }

    #[test]
    fn cornered_box_has_no_solution() {
        let outcome = board(CORNERED_BOX).solve(&SolverOptions::default());
        assert_eq!(outcome, Outcome::Exhausted);
        assert_eq!(outcome.moves(), "");
    }

    #[test]
    fn already_solved_emits_no_moves() {
        assert_eq!(board(ALREADY_SOLVED).solve(&SolverOptions::default()), Outcome::Solved(String::new()));
    }

    #[test]
    fn board_without_boxes_is_solved() {
        assert_eq!(board("###\n#@#\n###").solve(&SolverOptions::default()), Outcome::Solved(String::new()));
    }

    #[test]
    fn two_box_puzzle_replays_onto_goals() {
        let moves = solved_moves(TWO_BOX);
        assert!(!moves.is_empty());
        assert!(replay_solves(TWO_BOX, &moves));
    }

    #[test]
    fn overfull_room_has_no_solution() {
        assert_eq!(board(OVERFULL_ROOM).solve(&SolverOptions::default()), Outcome::Exhausted);
    }

    #[test]
    fn goal_behind_unpushable_row_has_no_solution() {
        // no pusher square exists above row one, so neither box can ever be
        // pushed down to the second goal
        assert_eq!(board(UNREACHABLE_LOWER_GOAL).solve(&SolverOptions::default()), Outcome::Exhausted);
    }

    #[test]
    fn block_of_four_is_frozen() {
        let board = board(FROZEN_BLOCK);
        assert!(deadlock::freezes_off_goal(&board, &board.start_boxes, Location(2, 2)));
        assert!(deadlock::freezes_off_goal(&board, &board.start_boxes, Location(3, 3)));
    }

    #[test]
    fn lone_box_is_not_frozen() {
        let board = board("#######\n#@$  .#\n#     #\n#######");
        assert!(!deadlock::freezes_off_goal(&board, &board.start_boxes, Location(2, 1)));
    }

    #[test]
    fn frozen_box_on_goal_is_acceptable() {
        let board = board("#####\n#*@.#\n# $ #\n#####");
        assert!(!deadlock::freezes_off_goal(&board, &board.start_boxes, Location(1, 1)));
    }

    #[test]
    fn nearest_goal_distances_sum() {
        let mut cache = ScoreCache::new();

        let simple = board(PUSH_ONTO_GOAL);
        assert_eq!(heuristic::score(&simple, &State::initial(&simple), &mut cache), 1);
        // second ask comes from the memo and must agree
        assert_eq!(heuristic::score(&simple, &State::initial(&simple), &mut cache), 1);

        let mut cache = ScoreCache::new();
        let solved = board(ALREADY_SOLVED);
        assert_eq!(heuristic::score(&solved, &State::initial(&solved), &mut cache), 0);

        let mut cache = ScoreCache::new();
        let two = board(TWO_BOX);
        assert_eq!(heuristic::score(&two, &State::initial(&two), &mut cache), 5);
    }

    #[test]
    fn identical_runs_emit_identical_moves() {
        assert_eq!(solved_moves(TWO_BOX), solved_moves(TWO_BOX));
    }

    #[test]
    fn zero_timeout_gives_up() {
        let options = SolverOptions { timeout: Some(Duration::ZERO) };
        let outcome = board(TWO_BOX).solve(&options);
        assert_eq!(outcome, Outcome::TimedOut);
        assert_eq!(outcome.moves(), "");
    }
}
