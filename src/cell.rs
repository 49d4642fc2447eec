/// Static classification of one grid cell, fixed for the lifetime of a board.
///
/// Boxes and the pusher are not tiles; they live in the search state.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Tile {
    Wall,
    #[default]
    Floor,
    Goal,
}

impl Tile {
    pub(crate) fn is_wall(self) -> bool {
        matches!(self, Tile::Wall)
    }

    pub(crate) fn is_goal(self) -> bool {
        matches!(self, Tile::Goal)
    }
}
