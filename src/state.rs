use smallvec::SmallVec;
use strum::VariantArray;

use crate::board::Board;
use crate::deadlock;
use crate::direction::Direction;
use crate::location::Location;

pub(crate) type BoxList = SmallVec<[Location; 16]>;
pub(crate) type MovePath = SmallVec<[Direction; 64]>;

/// One node of the search: pusher cell, box cells in canonical sorted order,
/// the running XOR-fold key over both, and the move path that produced it.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) player: Location,
    pub(crate) boxes: BoxList,
    pub(crate) key: u64,
    pub(crate) path: MovePath,
}

impl State {
    pub(crate) fn initial(board: &Board) -> Self {
        let boxes: BoxList = board.start_boxes.iter().copied().collect();
        let key = Self::full_key(board, board.start_player, &boxes);

        Self {
            player: board.start_player,
            boxes,
            key,
            path: MovePath::new(),
        }
    }

    /// Recomputes the key from scratch. Successors maintain theirs
    /// incrementally; the two must always agree.
    pub(crate) fn full_key(board: &Board, player: Location, boxes: &[Location]) -> u64 {
        let mut key = board.keys.player_key(board.flatten(player));
        for &b in boxes {
            key ^= board.keys.box_key(board.flatten(b));
        }
        key
    }

    /// Key of the box multiset alone, used to memoize heuristic scores.
    pub(crate) fn box_key(&self, board: &Board) -> u64 {
        self.key ^ board.keys.player_key(board.flatten(self.player))
    }

    pub(crate) fn is_solved(&self, board: &Board) -> bool {
        self.boxes.iter().all(|&b| board.is_goal(b))
    }

    pub(crate) fn has_box(&self, location: Location) -> bool {
        self.boxes.binary_search(&location).is_ok()
    }

    /// Legal successors of this state, one step in each direction.
    ///
    /// Pushes onto dead squares and hard deadlocks (a frozen box off its
    /// goal, an overloaded room) are filtered out here and never surface.
    pub(crate) fn successors(&self, board: &Board) -> Vec<State> {
        let mut out = Vec::with_capacity(Direction::VARIANTS.len());

        for &step in Direction::VARIANTS {
            let next = step.attempt_from(self.player);
            if board.is_wall(next) {
                continue;
            }

            let mut key = self.key;
            key ^= board.keys.player_key(board.flatten(self.player));
            key ^= board.keys.player_key(board.flatten(next));

            let boxes = if self.has_box(next) {
                let beyond = step.attempt_from(next);
                if board.is_wall(beyond) || self.has_box(beyond) || board.is_dead(beyond) {
                    continue;
                }

                let mut boxes = self.boxes.clone();
                // O(B) shift keeps the canonical order
                if let Ok(slot) = boxes.binary_search(&next) {
                    boxes.remove(slot);
                }
                match boxes.binary_search(&beyond) {
                    Err(slot) => boxes.insert(slot, beyond),
                    Ok(_) => continue,
                }

                if deadlock::freezes_off_goal(board, &boxes, beyond)
                    || deadlock::room_overloaded(board, &boxes)
                {
                    continue;
                }

                key ^= board.keys.box_key(board.flatten(next));
                key ^= board.keys.box_key(board.flatten(beyond));
                boxes
            } else {
                self.boxes.clone()
            };

            let mut path = self.path.clone();
            path.push(step);
            out.push(State { player: next, boxes, key, path });
        }

        out
    }
}
