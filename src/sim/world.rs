/// GameState: the complete snapshot of a running game.
///
/// Screen number, popup booleans and player fields all live in one
/// aggregate owned by the sim. The screen controller mutates `screen`,
/// the step function mutates the rest, and the renderer only reads.

use std::time::Instant;

use crate::config::SpeedConfig;
use crate::domain::entity::Player;
use crate::domain::minigame::ActivePuzzle;
use crate::domain::room::{self, RoomLayout};
use crate::domain::wordgame::Difficulty;

use super::score::HighScoreBoard;

/// The ten stages of the escape, in story order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Screen {
    Title,
    BossOffice,
    /// Mini-game 1: crossing the sky bridge (placeholder).
    SkyBridge,
    /// Corridor: elevator already open, no obstacle.
    TopFloor,
    MiddleFloor,
    /// Mini-game 2: the word puzzle.
    WordPuzzle,
    LowerFloor,
    /// Mini-game 3: the grouping game (placeholder).
    Connections,
    /// Corridor: lobby with the street exit at the bottom.
    GroundFloor,
    Ending,
}

impl Screen {
    /// Layout for walkable room screens; `None` elsewhere.
    pub fn layout(self) -> Option<&'static RoomLayout> {
        match self {
            Screen::BossOffice => Some(&room::BOSS_OFFICE),
            Screen::TopFloor => Some(&room::TOP_FLOOR),
            Screen::MiddleFloor => Some(&room::MIDDLE_FLOOR),
            Screen::LowerFloor => Some(&room::LOWER_FLOOR),
            Screen::GroundFloor => Some(&room::GROUND_FLOOR),
            _ => None,
        }
    }

    pub fn is_room(self) -> bool {
        self.layout().is_some()
    }

    pub fn is_minigame(self) -> bool {
        matches!(self, Screen::SkyBridge | Screen::WordPuzzle | Screen::Connections)
    }

    /// The escape clock runs everywhere between the title and the ending.
    pub fn shows_clock(self) -> bool {
        !matches!(self, Screen::Title | Screen::Ending)
    }

    /// Does this room's desk gate a mini-game? Corridors and the boss
    /// office have desks as furniture only.
    pub fn desk_gates_minigame(self) -> bool {
        matches!(self, Screen::MiddleFloor | Screen::LowerFloor)
    }
}

/// Transient per-room state; rebuilt whenever a room is entered.
#[derive(Clone, Debug, Default)]
pub struct RoomFlags {
    /// Player's box pressed into the desk this tick.
    pub desk_contact: bool,
    /// Exit door ready: walking into its zone starts the fade.
    pub elevator_open: bool,
    /// This room's mini-game has been beaten; desk no longer gates.
    pub puzzle_won: bool,
    /// Fade-out opacity 0..=255 once a transition is underway.
    pub fade: Option<f32>,
    /// Exclamation-mark fade-in opacity.
    pub mark_alpha: f32,
    /// "Something on the desk" confirmation popup.
    pub gate_open: bool,
    /// Screen-specific help popup.
    pub info_open: bool,
    pub win_open: bool,
    pub lose_open: bool,
}

pub struct GameState {
    pub screen: Screen,
    pub difficulty: Difficulty,
    pub player: Player,
    pub room: RoomFlags,
    pub puzzle: ActivePuzzle,
    pub board: HighScoreBoard,

    // ── Escape clock ──
    pub run_start: Option<Instant>,
    pub clock_secs: u32,
    pub clock_frozen: bool,

    // ── UI ──
    pub message: String,
    pub message_timer: u32,

    // ── Animation ──
    pub anim_tick: u32,

    pub speed: SpeedConfig,
}

impl GameState {
    pub fn new(board: HighScoreBoard, speed: SpeedConfig) -> Self {
        GameState {
            screen: Screen::Title,
            difficulty: Difficulty::Easy,
            player: Player::new(0, 0),
            room: RoomFlags::default(),
            puzzle: ActivePuzzle::bridge(),
            board,
            run_start: None,
            clock_secs: 0,
            clock_frozen: false,
            message: String::new(),
            message_timer: 0,
            anim_tick: 0,
            speed,
        }
    }

    /// Place the player at the room's spawn and clear transient flags.
    pub fn enter_room(&mut self, screen: Screen) {
        if let Some(layout) = screen.layout() {
            self.player = Player::new(layout.spawn.0, layout.spawn.1);
        }
        self.room = RoomFlags::default();
        self.anim_tick = 0;
    }

    /// Any popup that should block walking?
    pub fn ui_blocked(&self) -> bool {
        let r = &self.room;
        r.gate_open || r.info_open || r.win_open || r.lose_open
    }

    pub fn set_message(&mut self, msg: &str, duration: u32) {
        self.message = msg.to_string();
        self.message_timer = duration;
    }
}
