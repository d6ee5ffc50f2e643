/// The tick function: advances the game by one frame.
///
/// Processing order for room screens:
///   1. Clock / message / animation timers
///   2. Movement resolution (four directions, axis-independent)
///   3. Desk-gate popup
///   4. Exclamation-mark fade-in
///   5. Exit-zone check (starts the fade)
///   6. Fade advance (fires the screen transition at full black)
///
/// Mini-game screens only maintain timers and raise the win/lose
/// overlay when the active puzzle turns terminal.

use crate::domain::entity::FrameInput;
use crate::domain::minigame::MiniGame;
use crate::domain::rules;

use super::event::GameEvent;
use super::screen::{self, Trigger};
use super::world::{GameState, Screen};

/// Opacity ceiling for fades and the exclamation mark.
pub const FULL_ALPHA: f32 = 255.0;

pub fn tick(world: &mut GameState, input: FrameInput) -> Vec<GameEvent> {
    let mut events: Vec<GameEvent> = Vec::new();

    world.anim_tick = world.anim_tick.wrapping_add(1);

    if world.message_timer > 0 {
        world.message_timer -= 1;
        if world.message_timer == 0 {
            world.message.clear();
        }
    }

    update_clock(world);

    if world.screen.is_room() {
        resolve_room(world, input, &mut events);
    } else if world.screen.is_minigame() {
        resolve_overlays(world, &mut events);
    }

    events
}

fn update_clock(world: &mut GameState) {
    if world.clock_frozen || !world.screen.shows_clock() {
        return;
    }
    if let Some(start) = world.run_start {
        world.clock_secs = start.elapsed().as_secs() as u32;
    }
}

// ── Room screens ──

fn resolve_room(world: &mut GameState, input: FrameInput, events: &mut Vec<GameEvent>) {
    let Some(layout) = world.screen.layout() else { return };

    world.room.elevator_open = elevator_open(world);

    // Walking is suspended while any popup is up or the room is
    // already fading out.
    if !world.ui_blocked() && world.room.fade.is_none() {
        let m = rules::resolve_motion(
            layout,
            world.room.elevator_open,
            world.player.x,
            world.player.y,
            input,
            world.speed.player_step,
        );
        world.player.x = m.x;
        world.player.y = m.y;
        if let Some(facing) = m.facing {
            world.player.facing = facing;
        }
        world.room.desk_contact = m.bumped_desk;

        if m.bumped_desk && world.screen.desk_gates_minigame() && !world.room.puzzle_won {
            if !world.room.gate_open {
                events.push(GameEvent::GateOpened);
            }
            world.room.gate_open = true;
        }
    }

    // The exclamation mark eases in over the desk until the room is won.
    if world.screen.desk_gates_minigame() && !world.room.puzzle_won {
        world.room.mark_alpha = (world.room.mark_alpha + world.speed.mark_fade_step).min(FULL_ALPHA);
    }

    // Standing in an open doorway starts the fade-out.
    if world.room.fade.is_none()
        && world.room.elevator_open
        && rules::in_exit_zone(layout, world.player.x, world.player.y)
        && !world.ui_blocked()
    {
        world.room.fade = Some(0.0);
        events.push(GameEvent::Boarding);
    }

    if let Some(alpha) = world.room.fade {
        let alpha = alpha + world.speed.fade_step;
        if alpha >= FULL_ALPHA {
            events.push(GameEvent::FadeFinished);
            screen::fire(world, Trigger::FadeOutDone, events);
        } else {
            world.room.fade = Some(alpha);
        }
    }
}

/// Is this room's exit ready to take the player?
///
/// Corridors and the endpoints always are — the boss office window is
/// already shattered and the lobby doors don't lock. The two gated
/// floors open only once their mini-game is beaten.
fn elevator_open(world: &GameState) -> bool {
    match world.screen {
        Screen::BossOffice | Screen::TopFloor | Screen::GroundFloor => true,
        Screen::MiddleFloor | Screen::LowerFloor => world.room.puzzle_won,
        _ => false,
    }
}

// ── Mini-game screens ──

fn resolve_overlays(world: &mut GameState, events: &mut Vec<GameEvent>) {
    if !world.puzzle.is_terminal() || world.room.win_open || world.room.lose_open {
        return;
    }
    if world.puzzle.is_victory() {
        world.room.win_open = true;
        events.push(GameEvent::PuzzleWon);
    } else {
        world.room.lose_open = true;
        events.push(GameEvent::PuzzleLost);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpeedConfig;
    use crate::domain::entity::FrameInput;
    use crate::domain::minigame::{ActivePuzzle, PuzzleInput};
    use crate::sim::score::HighScoreBoard;

    fn world_on(screen: Screen) -> GameState {
        let mut w = GameState::new(HighScoreBoard::with_fillers(), SpeedConfig::default());
        w.screen = screen;
        w.enter_room(screen);
        w
    }

    fn idle() -> FrameInput {
        FrameInput::default()
    }

    #[test]
    fn walking_moves_the_player() {
        let mut w = world_on(Screen::TopFloor);
        let (x0, y0) = (w.player.x, w.player.y);
        tick(&mut w, FrameInput { up: true, ..Default::default() });
        assert_eq!((w.player.x, w.player.y), (x0, y0 - w.speed.player_step));
    }

    #[test]
    fn popups_suspend_walking() {
        let mut w = world_on(Screen::TopFloor);
        w.room.info_open = true;
        let (x0, y0) = (w.player.x, w.player.y);
        tick(&mut w, FrameInput { up: true, ..Default::default() });
        assert_eq!((w.player.x, w.player.y), (x0, y0));
    }

    #[test]
    fn desk_bump_raises_the_gate_once() {
        let mut w = world_on(Screen::MiddleFloor);
        // Stand just right of the desk and press left into it.
        w.player.x = 315 + 175;
        w.player.y = 260;
        let events = tick(&mut w, FrameInput { left: true, ..Default::default() });
        assert!(w.room.gate_open);
        assert!(matches!(events[0], GameEvent::GateOpened));

        // Still pressing: popup stays, no duplicate event.
        w.room.gate_open = true;
        let events = tick(&mut w, FrameInput { left: true, ..Default::default() });
        assert!(events.iter().all(|e| !matches!(e, GameEvent::GateOpened)));
    }

    #[test]
    fn beaten_room_desk_is_just_furniture() {
        let mut w = world_on(Screen::MiddleFloor);
        w.room.puzzle_won = true;
        w.player.x = 315 + 175;
        w.player.y = 260;
        tick(&mut w, FrameInput { left: true, ..Default::default() });
        assert!(!w.room.gate_open);
        // Move still denied by the obstacle itself.
        assert_eq!(w.player.x, 315 + 175);
    }

    #[test]
    fn corridor_doorway_starts_the_fade() {
        let mut w = world_on(Screen::TopFloor);
        w.player.x = 400;
        w.player.y = 45;
        let events = tick(&mut w, idle());
        assert!(w.room.fade.is_some());
        assert!(matches!(events[0], GameEvent::Boarding));
    }

    #[test]
    fn gated_doorway_waits_for_the_win() {
        let mut w = world_on(Screen::MiddleFloor);
        w.player.x = 400;
        w.player.y = 45;
        tick(&mut w, idle());
        assert!(w.room.fade.is_none());

        w.room.puzzle_won = true;
        tick(&mut w, idle());
        assert!(w.room.fade.is_some());
    }

    #[test]
    fn fade_runs_to_black_then_switches_screens() {
        let mut w = world_on(Screen::TopFloor);
        w.player.x = 400;
        w.player.y = 45;
        let ticks_to_black = (FULL_ALPHA / w.speed.fade_step).ceil() as u32 + 1;
        for _ in 0..ticks_to_black {
            tick(&mut w, idle());
            if w.screen != Screen::TopFloor {
                break;
            }
            let alpha = w.room.fade.expect("fade stays active until black");
            assert!(alpha < FULL_ALPHA);
        }
        assert_eq!(w.screen, Screen::MiddleFloor);
        assert!(w.room.fade.is_none(), "fresh room starts unfaded");
    }

    #[test]
    fn exclamation_mark_fades_in_and_caps() {
        let mut w = world_on(Screen::LowerFloor);
        tick(&mut w, idle());
        let first = w.room.mark_alpha;
        assert!(first > 0.0);
        for _ in 0..1000 {
            tick(&mut w, idle());
        }
        assert_eq!(w.room.mark_alpha, FULL_ALPHA);

        // Beaten rooms drop the mark.
        let mut w = world_on(Screen::LowerFloor);
        w.room.puzzle_won = true;
        tick(&mut w, idle());
        assert_eq!(w.room.mark_alpha, 0.0);
    }

    #[test]
    fn finished_puzzle_raises_the_right_overlay() {
        let mut w = world_on(Screen::WordPuzzle);
        w.puzzle = ActivePuzzle::words();
        w.puzzle.start(crate::domain::wordgame::Difficulty::Easy);
        let events = tick(&mut w, idle());
        assert!(!w.room.win_open && !w.room.lose_open);
        assert!(events.is_empty());

        // Typing the target back is the deterministic way to finish.
        let target: String = w.puzzle.word_game().unwrap().target().to_string();
        for ch in target.chars() {
            w.puzzle.handle_input(PuzzleInput::Letter(ch));
        }
        w.puzzle.handle_input(PuzzleInput::Commit);
        let events = tick(&mut w, idle());
        assert!(w.room.win_open);
        assert!(matches!(events[0], GameEvent::PuzzleWon));

        // Overlay already up: no duplicate event.
        let events = tick(&mut w, idle());
        assert!(events.is_empty());
    }
}
