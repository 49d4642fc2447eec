use crate::board::Board;
use crate::direction::Direction;
use crate::location::Location;
use crate::state::State;

/// Score added for every box that currently cannot move on either axis and
/// is not on a goal.
const FROZEN_PENALTY: u32 = 30;

const CACHE_ENTRIES: usize = 1 << 20;
const VACANT: u64 = u64::MAX;

/// Direct-mapped memo of scores keyed by the box-multiset key. Entries are
/// overwritten on index collision, which keeps the table bounded.
pub(crate) struct ScoreCache {
    entries: Vec<(u64, u32)>,
}

impl ScoreCache {
    pub(crate) fn new() -> Self {
        Self {
            entries: vec![(VACANT, 0); CACHE_ENTRIES],
        }
    }

    fn probe(&self, key: u64) -> Option<u32> {
        let entry = self.entries[(key as usize) & (CACHE_ENTRIES - 1)];
        (entry.0 == key).then_some(entry.1)
    }

    fn store(&mut self, key: u64, score: u32) {
        self.entries[(key as usize) & (CACHE_ENTRIES - 1)] = (key, score);
    }
}

/// Greedy lower-bound score: each box takes its nearest goal by taxicab
/// distance, plus [`FROZEN_PENALTY`] per immobile box off its goal.
///
/// Zero iff every box sits on a goal. Smaller is better; the score ignores
/// path length entirely, so the search it drives is greedy rather than
/// optimal.
pub(crate) fn score(board: &Board, state: &State, cache: &mut ScoreCache) -> u32 {
    let key = state.box_key(board);
    if let Some(cached) = cache.probe(key) {
        return cached;
    }

    let mut total = 0u32;
    for &b in state.boxes.iter() {
        if board.is_goal(b) {
            continue;
        }

        let nearest = board.goals.iter().map(|&g| b.manhattan(g)).min().unwrap_or(0);
        total += nearest as u32;

        if immobile(board, &state.boxes, b) {
            total += FROZEN_PENALTY;
        }
    }

    cache.store(key, total);
    total
}

/// Cheap single-box mobility test: an obstacle on each axis right now.
/// Unlike the recursive freeze test, any neighboring box counts as an
/// obstacle, so this may flag boxes that are merely inconvenienced.
fn immobile(board: &Board, boxes: &[Location], subject: Location) -> bool {
    let blocked = |step: Direction| {
        let there = step.attempt_from(subject);
        board.is_wall(there) || boxes.binary_search(&there).is_ok()
    };

    (blocked(Direction::Up) || blocked(Direction::Down))
        && (blocked(Direction::Left) || blocked(Direction::Right))
}
