/// Screen flow: an explicit transition table plus per-transition
/// effects.
///
/// `next_screen` is the pure table — what follows what. `fire` looks a
/// trigger up, applies the switch and runs the attached effects (room
/// resets, timer start/freeze, puzzle starts, score recording). A
/// (screen, trigger) pair outside the table is a no-op.

use std::time::Instant;

use crate::domain::minigame::{ActivePuzzle, MiniGame};

use super::event::GameEvent;
use super::world::{GameState, Screen};

/// What just happened, as far as screen flow cares.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Trigger {
    /// Start button on the title screen.
    StartPressed,
    /// Confirm button on the desk popup.
    GateConfirmed,
    /// Fade-out reached full black.
    FadeOutDone,
    /// Win popup dismissed on a mini-game screen.
    PuzzleWonAck,
    /// Lose popup dismissed on a mini-game screen.
    PuzzleLostAck,
    /// Play-again button on the ending screen.
    PlayAgainPressed,
}

const TRANSITIONS: &[(Screen, Trigger, Screen)] = &[
    (Screen::Title, Trigger::StartPressed, Screen::BossOffice),
    (Screen::BossOffice, Trigger::FadeOutDone, Screen::SkyBridge),
    (Screen::SkyBridge, Trigger::PuzzleWonAck, Screen::TopFloor),
    (Screen::SkyBridge, Trigger::PuzzleLostAck, Screen::SkyBridge),
    (Screen::TopFloor, Trigger::FadeOutDone, Screen::MiddleFloor),
    (Screen::MiddleFloor, Trigger::GateConfirmed, Screen::WordPuzzle),
    (Screen::WordPuzzle, Trigger::PuzzleWonAck, Screen::MiddleFloor),
    (Screen::WordPuzzle, Trigger::PuzzleLostAck, Screen::WordPuzzle),
    (Screen::MiddleFloor, Trigger::FadeOutDone, Screen::LowerFloor),
    (Screen::LowerFloor, Trigger::GateConfirmed, Screen::Connections),
    (Screen::Connections, Trigger::PuzzleWonAck, Screen::LowerFloor),
    (Screen::Connections, Trigger::PuzzleLostAck, Screen::Connections),
    (Screen::LowerFloor, Trigger::FadeOutDone, Screen::GroundFloor),
    (Screen::GroundFloor, Trigger::FadeOutDone, Screen::Ending),
    (Screen::Ending, Trigger::PlayAgainPressed, Screen::Title),
];

/// The pure transition table.
pub fn next_screen(from: Screen, trigger: Trigger) -> Option<Screen> {
    TRANSITIONS
        .iter()
        .find(|(s, t, _)| *s == from && *t == trigger)
        .map(|&(_, _, to)| to)
}

/// The puzzle a mini-game screen runs.
fn puzzle_for(screen: Screen) -> Option<ActivePuzzle> {
    match screen {
        Screen::SkyBridge => Some(ActivePuzzle::bridge()),
        Screen::WordPuzzle => Some(ActivePuzzle::words()),
        Screen::Connections => Some(ActivePuzzle::groups()),
        _ => None,
    }
}

/// Apply `trigger` to the current screen. Returns whether a transition
/// happened; effects are pushed onto `events`.
pub fn fire(world: &mut GameState, trigger: Trigger, events: &mut Vec<GameEvent>) -> bool {
    let Some(to) = next_screen(world.screen, trigger) else {
        return false;
    };
    world.screen = to;

    match trigger {
        Trigger::StartPressed => {
            world.enter_room(to);
            world.run_start = Some(Instant::now());
            world.clock_secs = 0;
            world.clock_frozen = false;
        }
        Trigger::GateConfirmed => {
            // Leaving the room for its mini-game; popups must not
            // linger for the return trip.
            world.room.gate_open = false;
            world.room.info_open = false;
            start_puzzle(world, to);
        }
        Trigger::FadeOutDone => {
            if to == Screen::Ending {
                world.clock_frozen = true;
                world.room = Default::default();
                events.push(GameEvent::RunFinished { seconds: world.clock_secs });
            } else if to.is_minigame() {
                // No room to walk in; drop the fade and stale flags.
                world.room = Default::default();
                start_puzzle(world, to);
            } else {
                world.enter_room(to);
            }
        }
        Trigger::PuzzleWonAck => {
            if to.desk_gates_minigame() {
                // Back into the room that gated the puzzle: keep the
                // player where they were and mark the room beaten, so
                // the elevator opens and the desk goes quiet.
                world.room.win_open = false;
                world.room.puzzle_won = true;
            } else {
                // The bridge drops the player into the next corridor.
                world.enter_room(to);
            }
        }
        Trigger::PuzzleLostAck => {
            world.room.lose_open = false;
            start_puzzle(world, to);
        }
        Trigger::PlayAgainPressed => {
            let placed = world.board.record(world.clock_secs, world.difficulty);
            if placed {
                let rank = world
                    .board
                    .entries()
                    .iter()
                    .position(|e| e.seconds == world.clock_secs)
                    .unwrap_or(0);
                events.push(GameEvent::ScorePlaced { rank });
            } else {
                events.push(GameEvent::ScoreMissed);
            }
            world.run_start = None;
            world.room = Default::default();
        }
    }

    true
}

fn start_puzzle(world: &mut GameState, screen: Screen) {
    if let Some(mut puzzle) = puzzle_for(screen) {
        puzzle.start(world.difficulty);
        world.puzzle = puzzle;
        world.room.win_open = false;
        world.room.lose_open = false;
    }
}
