use smallvec::SmallVec;

use crate::board::Board;
use crate::direction::Direction;
use crate::location::Location;

// cells treated as walls while freeze detection recurses through boxes
type WallOverlay = SmallVec<[Location; 8]>;

/// True when the box just pushed to `pushed` can never move again and is not
/// resting on a goal. Such a state is unsolvable and must not be enqueued.
pub(crate) fn freezes_off_goal(board: &Board, boxes: &[Location], pushed: Location) -> bool {
    !board.is_goal(pushed) && is_frozen(board, boxes, pushed, &mut WallOverlay::new())
}

/// True when some room currently holds more boxes than it has goals.
pub(crate) fn room_overloaded(board: &Board, boxes: &[Location]) -> bool {
    let mut counts: SmallVec<[u32; 8]> = SmallVec::new();
    counts.resize(board.room_goal_count.len(), 0);

    for &b in boxes {
        if let Some(id) = board.room_of(b) {
            counts[id as usize] += 1;
        }
    }

    counts.iter().zip(board.room_goal_count.iter()).any(|(have, cap)| have > cap)
}

/// Freeze test on both axes. A neighboring box only counts as blocking if it
/// is itself frozen, computed with `subject` treated as a wall so the
/// recursion cannot revisit it.
fn is_frozen(board: &Board, boxes: &[Location], subject: Location, overlay: &mut WallOverlay) -> bool {
    overlay.push(subject);
    let frozen = axis_blocked(board, boxes, subject, Direction::Left, overlay)
        && axis_blocked(board, boxes, subject, Direction::Up, overlay);
    overlay.pop();
    frozen
}

fn axis_blocked(
    board: &Board,
    boxes: &[Location],
    subject: Location,
    forward: Direction,
    overlay: &mut WallOverlay,
) -> bool {
    let a = forward.attempt_from(subject);
    let b = forward.invert().attempt_from(subject);

    if board.is_wall(a) || overlay.contains(&a) || board.is_wall(b) || overlay.contains(&b) {
        return true;
    }
    // both landing squares dead: no push along this axis ever helps
    if board.is_dead(a) && board.is_dead(b) {
        return true;
    }

    for side in [a, b] {
        if boxes.binary_search(&side).is_ok() && is_frozen(board, boxes, side, overlay) {
            return true;
        }
    }

    false
}
