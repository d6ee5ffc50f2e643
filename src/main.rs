/// Entry point and game loop.

mod config;
mod domain;
mod sim;
mod ui;

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use config::GameConfig;
use domain::entity::FrameInput;
use domain::minigame::{MiniGame, PuzzleInput};
use sim::event::GameEvent;
use sim::score;
use sim::screen::{self, Trigger};
use sim::step;
use sim::store;
use sim::world::{GameState, Screen};
use ui::input::InputState;
use ui::renderer::Renderer;
use ui::widgets::{self, ButtonRole, Popup};

const FRAME_SLEEP: Duration = Duration::from_millis(5);

fn main() {
    let config = GameConfig::load();

    let mut world = GameState::new(store::load_board(), config.speed.clone());

    let mut renderer = Renderer::new();
    if let Err(e) = renderer.init() {
        eprintln!("Terminal init failed: {e}");
        return;
    }

    let result = game_loop(&mut world, &mut renderer, &config);

    if let Err(e) = renderer.cleanup() {
        eprintln!("Terminal cleanup failed: {e}");
    }

    if let Err(e) = result {
        eprintln!("Game error: {e}");
    }

    println!();
    println!("Thanks for playing Clock Out!");
    println!("Last run: {}", score::format_clock(world.clock_secs));
}

fn game_loop(
    world: &mut GameState,
    renderer: &mut Renderer,
    config: &GameConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut kb = InputState::new();
    let mut last_tick = Instant::now();
    let tick_rate = Duration::from_millis(config.speed.tick_rate_ms);

    loop {
        kb.drain_events();

        if kb.ctrl_c_pressed() {
            break;
        }
        if handle_meta(world, &kb) {
            break;
        }

        if last_tick.elapsed() >= tick_rate {
            let frame = detect_movement(&kb);
            let events = step::tick(world, frame);
            process_events(world, &events);
            last_tick = Instant::now();
        }

        renderer.render(world, kb.mouse_pos())?;
        std::thread::sleep(FRAME_SLEEP);
    }

    Ok(())
}

// ── Key Constants ──

const KEYS_LEFT: &[KeyCode] = &[KeyCode::Left];
const KEYS_RIGHT: &[KeyCode] = &[KeyCode::Right];
const KEYS_UP: &[KeyCode] = &[KeyCode::Up];
const KEYS_DOWN: &[KeyCode] = &[KeyCode::Down];
const KEYS_CONFIRM: &[KeyCode] = &[KeyCode::Enter];

fn detect_movement(kb: &InputState) -> FrameInput {
    FrameInput {
        up: kb.any_held(KEYS_UP),
        down: kb.any_held(KEYS_DOWN),
        left: kb.any_held(KEYS_LEFT),
        right: kb.any_held(KEYS_RIGHT),
    }
}

/// Buttons, popups and puzzle keys. Returns true to quit.
fn handle_meta(world: &mut GameState, kb: &InputState) -> bool {
    let mut events: Vec<GameEvent> = Vec::new();

    // ── Mouse: hit-test this frame's buttons ──
    if !kb.clicks().is_empty() {
        let (tw, th) = crossterm::terminal::size().unwrap_or((80, 24));
        let buttons = widgets::buttons_for(world, tw, th);
        for &(cx, cy) in kb.clicks() {
            if let Some(role) = widgets::hit(&buttons, cx, cy) {
                apply_button(world, role, &mut events);
            }
        }
    }

    let confirm = kb.any_pressed(KEYS_CONFIRM);
    let esc = kb.any_pressed(&[KeyCode::Esc]);
    let popup = widgets::active_popup(world);

    // ── Keyboard fallbacks ──
    match popup {
        Some(Popup::Win) => {
            if confirm || esc {
                screen::fire(world, Trigger::PuzzleWonAck, &mut events);
            }
        }
        Some(Popup::Lose) => {
            if confirm || esc {
                screen::fire(world, Trigger::PuzzleLostAck, &mut events);
            }
        }
        Some(Popup::Gate) => {
            if confirm {
                screen::fire(world, Trigger::GateConfirmed, &mut events);
            } else if esc {
                // Step back from the desk without playing.
                world.room.gate_open = false;
            }
        }
        Some(Popup::Info) | Some(Popup::Scores) => {
            if confirm || esc {
                world.room.info_open = false;
            }
        }
        None => match world.screen {
            Screen::Title => {
                if confirm {
                    screen::fire(world, Trigger::StartPressed, &mut events);
                } else if esc || kb.any_pressed(&[KeyCode::Char('q'), KeyCode::Char('Q')]) {
                    return true;
                }
            }
            Screen::Ending => {
                if confirm {
                    screen::fire(world, Trigger::PlayAgainPressed, &mut events);
                }
            }
            s if s.is_minigame() => feed_puzzle(world, kb),
            _ => {
                // F1 mirrors the INFO button for keyboard players.
                if kb.any_pressed(&[KeyCode::F(1)]) {
                    world.room.info_open = true;
                }
            }
        },
    }

    process_events(world, &events);
    false
}

/// Letters, backspace and enter reach the running puzzle untouched.
fn feed_puzzle(world: &mut GameState, kb: &InputState) {
    for ch in kb.typed_chars() {
        world.puzzle.handle_input(PuzzleInput::Letter(ch));
    }
    if kb.any_pressed(&[KeyCode::Backspace]) {
        world.puzzle.handle_input(PuzzleInput::Erase);
    }
    if kb.any_pressed(KEYS_CONFIRM) {
        world.puzzle.handle_input(PuzzleInput::Commit);
    }
}

fn apply_button(world: &mut GameState, role: ButtonRole, events: &mut Vec<GameEvent>) {
    match role {
        ButtonRole::Start => {
            screen::fire(world, Trigger::StartPressed, events);
        }
        ButtonRole::CycleDifficulty => {
            world.difficulty = world.difficulty.cycle();
        }
        ButtonRole::ShowScores | ButtonRole::Info => {
            world.room.info_open = true;
        }
        ButtonRole::EnterGame => {
            screen::fire(world, Trigger::GateConfirmed, events);
        }
        ButtonRole::Back => match widgets::active_popup(world) {
            Some(Popup::Win) => {
                screen::fire(world, Trigger::PuzzleWonAck, events);
            }
            Some(Popup::Lose) => {
                screen::fire(world, Trigger::PuzzleLostAck, events);
            }
            _ => {
                world.room.info_open = false;
            }
        },
        ButtonRole::PlayAgain => {
            screen::fire(world, Trigger::PlayAgainPressed, events);
        }
    }
}

/// Turn sim events into transient notices (and the one disk write).
fn process_events(world: &mut GameState, events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::PuzzleWon => {
                world.set_message("The elevator clunks open somewhere above.", 120);
            }
            GameEvent::ScorePlaced { rank } => {
                if let Err(e) = store::save_board(&world.board) {
                    world.set_message(&e, 180);
                } else {
                    world.set_message(&format!("New high score — rank {}!", rank + 1), 240);
                }
            }
            GameEvent::ScoreMissed => {
                world.set_message("No spot on the board this time.", 240);
            }
            _ => {}
        }
    }
}
