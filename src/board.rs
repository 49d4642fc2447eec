use std::fmt::{Display, Formatter};

use ndarray::Array2;

use crate::analysis::RoomId;
use crate::cell::Tile;
use crate::location::Location;
use crate::solver::{self, Outcome, SolverOptions};
use crate::zobrist::KeyTable;

/// A parsed and preprocessed puzzle.
///
/// [`Board`]s are built from standard Sokoban text notation with
/// [`str::parse`]; parsing also runs the one-time analysis passes (dead
/// squares, room partition, key tables), so a board is immutable afterwards.
/// Call [`solve`](Board::solve) to search for a move string.
#[derive(Debug)]
pub struct Board {
    // width, height
    pub(crate) dims: (usize, usize),
    pub(crate) tiles: Array2<Tile>,
    pub(crate) goals: Vec<Location>,
    // non-goal cells no box can ever leave
    pub(crate) dead: Array2<bool>,
    pub(crate) rooms: Array2<Option<RoomId>>,
    pub(crate) room_goal_count: Vec<u32>,
    pub(crate) keys: KeyTable,
    pub(crate) start_player: Location,
    // sorted in canonical cell order
    pub(crate) start_boxes: Vec<Location>,
}

impl Board {
    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.dims.0
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.dims.1
    }

    /// Number of boxes, which always equals the number of goals.
    pub fn box_count(&self) -> usize {
        self.start_boxes.len()
    }

    /// Searches this board for a feasible solution with the crate's greedy
    /// best-first driver.
    ///
    /// Returns according to [`Outcome`]; the search itself is deterministic
    /// for a fixed board.
    pub fn solve(&self, options: &SolverOptions) -> Outcome {
        solver::solve(self, options)
    }

    pub(crate) fn flatten(&self, location: Location) -> usize {
        location.flatten(self.dims.0)
    }

    /// Out-of-bounds cells count as wall.
    pub(crate) fn is_wall(&self, location: Location) -> bool {
        match self.tiles.get(location.as_index()) {
            Some(tile) => tile.is_wall(),
            None => true,
        }
    }

    pub(crate) fn is_goal(&self, location: Location) -> bool {
        matches!(self.tiles.get(location.as_index()), Some(t) if t.is_goal())
    }

    pub(crate) fn is_dead(&self, location: Location) -> bool {
        self.dead.get(location.as_index()).copied().unwrap_or(false)
    }

    pub(crate) fn room_of(&self, location: Location) -> Option<RoomId> {
        self.rooms.get(location.as_index()).copied().flatten()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity((self.dims.0 + 1) * self.dims.1);

        for y in 0..self.dims.1 {
            for x in 0..self.dims.0 {
                let here = Location(x, y);
                let goal = self.is_goal(here);

                out.push(if self.is_wall(here) {
                    '#'
                } else if here == self.start_player {
                    if goal { '+' } else { '@' }
                } else if self.start_boxes.binary_search(&here).is_ok() {
                    if goal { '*' } else { '$' }
                } else if goal {
                    '.'
                } else {
                    ' '
                });
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
