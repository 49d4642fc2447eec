use std::collections::{HashMap, VecDeque};

use ndarray::Array2;
use petgraph::unionfind::UnionFind;
use strum::VariantArray;

use crate::cell::Tile;
use crate::direction::Direction;
use crate::location::Location;

/// Identifier of a room produced by [`partition_rooms`].
pub(crate) type RoomId = u16;

/// Marks every non-wall, non-goal cell from which a box can never reach any
/// goal, no matter what the pusher does.
///
/// Works backwards from the goals to a fixed point: a cell is live when a box
/// on it can be pushed one step toward some live neighbor, which requires the
/// square on the far side of the box to be standable.
pub(crate) fn dead_squares(tiles: &Array2<Tile>, goals: &[Location]) -> Array2<bool> {
    let mut live = Array2::from_elem(tiles.raw_dim(), false);
    let mut queue: VecDeque<Location> = VecDeque::with_capacity(goals.len() * 4);

    for &goal in goals {
        live[goal.as_index()] = true;
        queue.push_back(goal);
    }

    while let Some(target) = queue.pop_front() {
        for step in Direction::VARIANTS {
            let origin = step.attempt_from(target);
            let standing = step.attempt_from(origin);

            let open = |l: Location| matches!(tiles.get(l.as_index()), Some(t) if !t.is_wall());
            if open(origin) && open(standing) && !live[origin.as_index()] {
                live[origin.as_index()] = true;
                queue.push_back(origin);
            }
        }
    }

    Array2::from_shape_fn(tiles.raw_dim(), |ix| !tiles[ix].is_wall() && !live[ix])
}

/// A one-wide corridor cell: both horizontal or both vertical neighbors are
/// walls. The grid boundary counts as wall.
fn is_corridor(tiles: &Array2<Tile>, location: Location) -> bool {
    let blocked = |step: Direction| match tiles.get(step.attempt_from(location).as_index()) {
        Some(tile) => tile.is_wall(),
        None => true,
    };

    (blocked(Direction::Left) && blocked(Direction::Right))
        || (blocked(Direction::Up) && blocked(Direction::Down))
}

/// Partitions floor cells into rooms, splitting at one-wide corridor cells,
/// and counts the goals inside each room.
///
/// Corridor cells belong to no room and their goals are counted nowhere.
/// Room ids are dense and assigned in row-major discovery order.
pub(crate) fn partition_rooms(tiles: &Array2<Tile>) -> (Array2<Option<RoomId>>, Vec<u32>) {
    let (height, width) = tiles.dim();

    let roomable = Array2::from_shape_fn(tiles.raw_dim(), |ix| {
        !tiles[ix].is_wall() && !is_corridor(tiles, Location::from(ix))
    });

    let mut components = UnionFind::<usize>::new(width * height);
    for (ix, open) in roomable.indexed_iter() {
        if !*open {
            continue;
        }
        let here = Location::from(ix);
        for step in [Direction::Right, Direction::Down] {
            let neighbor = step.attempt_from(here);
            if roomable.get(neighbor.as_index()).copied().unwrap_or(false) {
                components.union(here.flatten(width), neighbor.flatten(width));
            }
        }
    }

    let labels = components.into_labeling();
    let mut ids: HashMap<usize, RoomId> = HashMap::new();
    let mut room_of = Array2::from_elem(tiles.raw_dim(), None);
    for (ix, open) in roomable.indexed_iter() {
        if *open {
            let here = Location::from(ix);
            let next = ids.len() as RoomId;
            room_of[ix] = Some(*ids.entry(labels[here.flatten(width)]).or_insert(next));
        }
    }

    let mut goal_counts = vec![0u32; ids.len()];
    for (ix, tile) in tiles.indexed_iter() {
        if tile.is_goal() {
            if let Some(id) = room_of[ix] {
                goal_counts[id as usize] += 1;
            }
        }
    }

    (room_of, goal_counts)
}
