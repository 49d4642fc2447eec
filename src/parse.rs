use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use ndarray::Array2;

use crate::analysis;
use crate::board::Board;
use crate::cell::Tile;
use crate::location::Location;
use crate::zobrist::KeyTable;

/// Reasons a puzzle text fails to describe a well-formed board.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The input contained no grid rows at all.
    EmptyGrid,
    /// A character outside standard notation, with the `(x, y)` cell it
    /// occupied.
    UnrecognizedCharacter(char, usize, usize),
    /// The grid held this many pushers where exactly one is required.
    PusherCount(usize),
    /// Box and goal counts differ, so no placement can cover every goal.
    BoxGoalMismatch {
        /// Boxes seen in the grid.
        boxes: usize,
        /// Goal squares seen in the grid.
        goals: usize,
    },
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            ParseError::EmptyGrid => write!(f, "empty grid"),
            ParseError::UnrecognizedCharacter(ch, x, y) => {
                write!(f, "unrecognized character {:?} at ({}, {})", ch, x, y)
            }
            ParseError::PusherCount(n) => write!(f, "expected exactly one pusher, found {}", n),
            ParseError::BoxGoalMismatch { boxes, goals } => {
                write!(f, "{} boxes cannot cover {} goals", boxes, goals)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl FromStr for Board {
    type Err = ParseError;

    /// Reads a grid in standard notation: `#` wall, ` ` floor, `.` goal,
    /// `$` box, `*` box on goal, `@` pusher, `+` pusher on goal.
    ///
    /// Width is the longest line; shorter lines are padded with floor.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s.lines().map(|line| line.trim_end_matches('\r')).collect_vec();
        let height = lines.len();
        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        if width == 0 {
            return Err(ParseError::EmptyGrid);
        }

        let mut tiles = Array2::from_elem((height, width), Tile::Floor);
        let mut goals = Vec::new();
        let mut boxes = Vec::new();
        let mut pushers = Vec::new();

        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let here = Location(x, y);
                tiles[here.as_index()] = match ch {
                    '#' => Tile::Wall,
                    ' ' | '$' | '@' => Tile::Floor,
                    '.' | '*' | '+' => Tile::Goal,
                    other => return Err(ParseError::UnrecognizedCharacter(other, x, y)),
                };

                if matches!(ch, '$' | '*') {
                    boxes.push(here);
                }
                if matches!(ch, '@' | '+') {
                    pushers.push(here);
                }
                if matches!(ch, '.' | '*' | '+') {
                    goals.push(here);
                }
            }
        }

        if pushers.len() != 1 {
            return Err(ParseError::PusherCount(pushers.len()));
        }
        if boxes.len() != goals.len() {
            return Err(ParseError::BoxGoalMismatch { boxes: boxes.len(), goals: goals.len() });
        }

        boxes.sort_unstable();

        let dead = analysis::dead_squares(&tiles, &goals);
        let (rooms, room_goal_count) = analysis::partition_rooms(&tiles);
        let keys = KeyTable::new(width * height);

        Ok(Board {
            dims: (width, height),
            tiles,
            goals,
            dead,
            rooms,
            room_goal_count,
            keys,
            start_player: pushers[0],
            start_boxes: boxes,
        })
    }
}
