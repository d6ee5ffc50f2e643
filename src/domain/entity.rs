/// The player character and per-frame movement input.

/// Sprite orientation, derived from the last accepted move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

/// Frame input: one independent flag per axis direction, so holding
/// two keys moves diagonally and each axis resolves on its own.
#[derive(Clone, Copy, Default, Debug)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

#[derive(Clone, Debug)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub facing: Facing,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Player { x, y, facing: Facing::Down }
    }
}
