/// Movement rules — truth-table driven.
///
/// Pure functions over a `RoomLayout`; no side effects. The step
/// function applies them once per tick.
///
/// ## Per-direction rule
///
/// Each of the four direction flags is evaluated independently and in
/// order (up, down, left, right), each against the position as updated
/// by the directions before it. A direction's tentative position is
/// `current ± step` on its axis only.
///
/// ┌─────────────────────────────────────────────┬───────┐
/// │ Condition                                    │ Move? │
/// ├─────────────────────────────────────────────┼───────┤
/// │ standing in exit zone while elevator open    │ DENY  │
/// │ tentative anchor outside room bounds         │ DENY  │
/// │ tentative 55×55 box overlaps the desk (if any)│ DENY │
/// │ otherwise                                    │ ALLOW │
/// └─────────────────────────────────────────────┴───────┘
///
/// The exit-zone check uses the CURRENT position: once the player stands
/// in an open doorway, boarding has begun and no direction may pull them
/// back out. Axis independence means a diagonal push into a desk corner
/// still slides along whichever axis stays clear.

use super::entity::{Facing, FrameInput};
use super::geometry;
use super::room::RoomLayout;

/// Is movement frozen because the player stands in an open doorway?
pub fn boarding(layout: &RoomLayout, elevator_open: bool, x: i32, y: i32) -> bool {
    elevator_open && layout.exit_zone.contains(x, y)
}

/// Does the player's box at (x, y) touch the desk?
/// Contact is what offers mini-game entry; it is queried on the
/// *attempted* position, so pressing into the desk counts even though
/// the move itself is denied.
pub fn desk_contact(layout: &RoomLayout, x: i32, y: i32) -> bool {
    match layout.desk {
        Some(desk) => geometry::player_box(x, y).overlaps(&desk),
        None => false,
    }
}

/// Is the player's anchor inside the room's exit zone?
pub fn in_exit_zone(layout: &RoomLayout, x: i32, y: i32) -> bool {
    layout.exit_zone.contains(x, y)
}

/// Outcome of one tick of movement resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Motion {
    pub x: i32,
    pub y: i32,
    /// Set when at least one direction was accepted.
    pub facing: Option<Facing>,
    /// A denied direction pressed into the desk this tick.
    pub bumped_desk: bool,
}

/// Resolve all four directions for one tick. See the truth table above.
pub fn resolve_motion(
    layout: &RoomLayout,
    elevator_open: bool,
    start_x: i32,
    start_y: i32,
    input: FrameInput,
    step: i32,
) -> Motion {
    let mut m = Motion { x: start_x, y: start_y, facing: None, bumped_desk: false };

    let dirs: [(bool, i32, i32, Facing); 4] = [
        (input.up, 0, -step, Facing::Up),
        (input.down, 0, step, Facing::Down),
        (input.left, -step, 0, Facing::Left),
        (input.right, step, 0, Facing::Right),
    ];

    for (active, dx, dy, facing) in dirs {
        if !active {
            continue;
        }
        if boarding(layout, elevator_open, m.x, m.y) {
            continue;
        }
        let (nx, ny) = (m.x + dx, m.y + dy);
        if !layout.bounds.contains(nx, ny) {
            continue;
        }
        if desk_contact(layout, nx, ny) {
            m.bumped_desk = true;
            continue;
        }
        m.x = nx;
        m.y = ny;
        m.facing = Some(facing);
    }

    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry;
    use crate::domain::room::{self, RoomLayout};

    const STEP: i32 = 4;

    fn with_desk() -> RoomLayout {
        room::MIDDLE_FLOOR
    }

    fn without_desk() -> RoomLayout {
        room::TOP_FLOOR
    }

    fn push(layout: &RoomLayout, open: bool, x: i32, y: i32, input: FrameInput) -> Motion {
        resolve_motion(layout, open, x, y, input, STEP)
    }

    // ── Desk collision ──

    #[test]
    fn desk_blocks_only_where_defined() {
        // Just left of the desk (desk at x=315, player box 55 wide):
        // stepping right would overlap.
        let x = 315 - geometry::PLAYER_SIZE;
        let y = 260;
        let input = FrameInput { right: true, ..Default::default() };

        let blocked = push(&with_desk(), false, x, y, input);
        assert_eq!((blocked.x, blocked.y), (x, y));
        assert!(blocked.bumped_desk);

        let free = push(&without_desk(), false, x, y, input);
        assert_eq!((free.x, free.y), (x + STEP, y));
        assert!(!free.bumped_desk);
    }

    #[test]
    fn corner_push_slides_on_open_axis() {
        // Below the desk's bottom edge (y = 230+135 = 365), pressing
        // up+right: up collides with the desk, right stays clear.
        let x = 340;
        let y = 367;
        let input = FrameInput { up: true, right: true, ..Default::default() };
        let m = push(&with_desk(), false, x, y, input);
        assert_eq!(m.y, y, "vertical axis blocked by desk");
        assert_eq!(m.x, x + STEP, "horizontal axis still slides");
        assert!(m.bumped_desk);
        assert_eq!(m.facing, Some(Facing::Right));
    }

    // ── Room bounds ──

    #[test]
    fn bounds_reject_tentative_moves() {
        let l = without_desk();
        let m = push(&l, false, l.bounds.min_x, 200, FrameInput { left: true, ..Default::default() });
        assert_eq!(m.x, l.bounds.min_x);
        assert!(m.facing.is_none());

        let m = push(&l, false, 200, l.bounds.max_y, FrameInput { down: true, ..Default::default() });
        assert_eq!(m.y, l.bounds.max_y);
    }

    #[test]
    fn interior_moves_accepted_all_axes() {
        let m = push(
            &without_desk(),
            false,
            400,
            300,
            FrameInput { down: true, left: true, ..Default::default() },
        );
        assert_eq!((m.x, m.y), (400 - STEP, 300 + STEP));
    }

    // ── Open-elevator freeze ──

    #[test]
    fn open_doorway_freezes_movement() {
        let l = without_desk();
        // (400, 45) is inside the top door zone.
        let input = FrameInput { down: true, ..Default::default() };
        let frozen = push(&l, true, 400, 45, input);
        assert_eq!((frozen.x, frozen.y), (400, 45));

        // Same spot with the elevator closed: free to walk away.
        let walking = push(&l, false, 400, 45, input);
        assert_eq!(walking.y, 45 + STEP);
    }

    #[test]
    fn closed_doorway_is_just_floor() {
        let l = with_desk();
        assert!(!boarding(&l, false, 400, 45));
        assert!(in_exit_zone(&l, 400, 45));
        assert!(!in_exit_zone(&l, 400, 200));
    }

    // ── Facing ──

    #[test]
    fn facing_follows_last_accepted_move() {
        let m = push(
            &without_desk(),
            false,
            400,
            300,
            FrameInput { up: true, right: true, ..Default::default() },
        );
        // Both accepted; right is evaluated last.
        assert_eq!(m.facing, Some(Facing::Right));

        let unmoved = push(&without_desk(), false, 400, 300, FrameInput::default());
        assert_eq!(unmoved.facing, None);
    }
}
