use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use log::debug;
use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::heuristic::{self, ScoreCache};
use crate::state::State;

/// Knobs for a single solve run.
#[derive(Clone, Copy, Debug, Default)]
pub struct SolverOptions {
    /// Give up once this much wall-clock time has elapsed. `None` leaves
    /// timeout enforcement entirely to the caller.
    pub timeout: Option<Duration>,
}

/// How a solve run ended.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// A move string whose replay puts every box on a goal. Empty when the
    /// start position was already solved.
    Solved(String),
    /// The reachable state space was exhausted without a solution.
    Exhausted,
    /// The optional deadline elapsed first.
    TimedOut,
}

impl Outcome {
    /// The move string, or the empty string when there is none to emit.
    pub fn moves(&self) -> &str {
        match self {
            Outcome::Solved(moves) => moves,
            Outcome::Exhausted | Outcome::TimedOut => "",
        }
    }
}

struct FrontierEntry {
    score: u32,
    depth: u32,
    seq: u64,
    state: State,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for FrontierEntry {
    // BinaryHeap is a max-heap; reversing yields pop-smallest on
    // (score, depth, seq), a total order since seq is unique
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.depth.cmp(&self.depth))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Greedy best-first search over box configurations.
///
/// States are deduplicated by their 64-bit keys alone; a key collision is
/// accepted as state equality, trading an astronomically small miss chance
/// for constant space per visited state.
pub(crate) fn solve(board: &Board, options: &SolverOptions) -> Outcome {
    let started = Instant::now();
    let deadline = options.timeout.map(|t| started + t);

    let mut cache = ScoreCache::new();
    let mut visited: FxHashSet<u64> =
        FxHashSet::with_capacity_and_hasher(1 << 16, Default::default());
    let mut frontier = BinaryHeap::with_capacity(1 << 12);
    let mut seq = 0u64;
    let mut popped = 0u64;

    let initial = State::initial(board);
    debug!(
        "searching {}x{} board with {} boxes",
        board.width(),
        board.height(),
        board.box_count()
    );
    frontier.push(FrontierEntry {
        score: heuristic::score(board, &initial, &mut cache),
        depth: 0,
        seq,
        state: initial,
    });

    while let Some(entry) = frontier.pop() {
        if popped & 0x3FF == 0 {
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    debug!("gave up after {} pops in {:?}", popped, started.elapsed());
                    return Outcome::TimedOut;
                }
            }
        }
        popped += 1;

        let state = entry.state;
        if state.is_solved(board) {
            debug!(
                "solved in {} moves after {} pops in {:?}",
                state.path.len(),
                popped,
                started.elapsed()
            );
            return Outcome::Solved(state.path.iter().map(|step| step.emit()).collect());
        }

        if !visited.insert(state.key) {
            continue;
        }

        for successor in state.successors(board) {
            if visited.contains(&successor.key) {
                continue;
            }

            seq += 1;
            frontier.push(FrontierEntry {
                score: heuristic::score(board, &successor, &mut cache),
                depth: successor.path.len() as u32,
                seq,
                state: successor,
            });
        }
    }

    debug!("exhausted {} states in {:?}", popped, started.elapsed());
    Outcome::Exhausted
}
