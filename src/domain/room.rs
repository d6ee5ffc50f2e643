/// Static room layouts: movement bounds, obstacles, exit zones, spawns.
///
/// One layout per walkable screen. The simulation picks the layout for
/// the current screen; the rules module only ever sees a `&RoomLayout`.

use super::geometry::Rect;

/// Where the room's exit door sits, for rendering and spawn logic.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DoorSide {
    Top,
    Bottom,
}

/// Movement bounds for the player's top-left corner.
///
/// The margins are asymmetric on purpose: the sprite hangs below and to
/// the right of its anchor, so the far edges stop earlier.
#[derive(Clone, Copy, Debug)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RoomLayout {
    pub bounds: Bounds,
    /// No-walk furniture zone; also the mini-game trigger where one is wired.
    pub desk: Option<Rect>,
    /// Stepping in here with the elevator open starts the fade-out.
    pub exit_zone: Rect,
    pub door: DoorSide,
    /// Player position on entering this room.
    pub spawn: (i32, i32),
}

const WALK_BOUNDS: Bounds = Bounds { min_x: 10, max_x: 740, min_y: 40, max_y: 510 };

const DESK: Rect = Rect::new(315, 230, 175, 135);

/// Elevator doors / shattered window at the top-center wall.
const TOP_DOOR: Rect = Rect::new(340, 0, 120, 51);
/// Street exit at the bottom of the lobby, narrower than the elevator.
const LOBBY_EXIT: Rect = Rect::new(360, 500, 80, 100);

/// Entering from below (stairwell side).
const SPAWN_LOW: (i32, i32) = (380, 520);
/// Entering from the elevator at the top wall.
const SPAWN_HIGH: (i32, i32) = (400, 50);

/// The boss's office: desk in the middle, broken window up top.
pub const BOSS_OFFICE: RoomLayout = RoomLayout {
    bounds: WALK_BOUNDS,
    desk: Some(DESK),
    exit_zone: TOP_DOOR,
    door: DoorSide::Top,
    spawn: SPAWN_LOW,
};

/// Top-floor corridor: no desk, elevator always open.
pub const TOP_FLOOR: RoomLayout = RoomLayout {
    bounds: WALK_BOUNDS,
    desk: None,
    exit_zone: TOP_DOOR,
    door: DoorSide::Top,
    spawn: SPAWN_LOW,
};

/// Middle office floor: desk gates the word puzzle.
pub const MIDDLE_FLOOR: RoomLayout = RoomLayout {
    bounds: WALK_BOUNDS,
    desk: Some(DESK),
    exit_zone: TOP_DOOR,
    door: DoorSide::Top,
    spawn: SPAWN_HIGH,
};

/// Lower office floor: desk gates the grouping game.
pub const LOWER_FLOOR: RoomLayout = RoomLayout {
    bounds: WALK_BOUNDS,
    desk: Some(DESK),
    exit_zone: TOP_DOOR,
    door: DoorSide::Top,
    spawn: SPAWN_HIGH,
};

/// Ground-floor lobby: desk is furniture only, exit at the bottom.
pub const GROUND_FLOOR: RoomLayout = RoomLayout {
    bounds: WALK_BOUNDS,
    desk: Some(DESK),
    exit_zone: LOBBY_EXIT,
    door: DoorSide::Bottom,
    spawn: SPAWN_HIGH,
};
