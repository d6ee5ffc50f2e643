/// Clickable buttons and popup selection.
///
/// Every button carries a role tag next to its geometry; click handling
/// matches on the role, never on the label text. Layouts are computed
/// per frame from the terminal size, so the renderer and the click
/// handler always agree on where a button is.

use crate::sim::world::{GameState, Screen};

/// What a button does when clicked.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonRole {
    /// Title: begin the run.
    Start,
    /// Title: cycle Easy → Medium → Hard.
    CycleDifficulty,
    /// Title: open the high-score table.
    ShowScores,
    /// Desk popup: enter the mini-game.
    EnterGame,
    /// Rooms and mini-games: open the help popup.
    Info,
    /// Dismiss the open popup.
    Back,
    /// Ending: record the run and return to the title.
    PlayAgain,
}

/// A button's footprint in terminal cells.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CellRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl CellRect {
    pub fn contains(&self, cx: u16, cy: u16) -> bool {
        cx >= self.x && cx < self.x + self.w && cy >= self.y && cy < self.y + self.h
    }
}

#[derive(Clone, Debug)]
pub struct Button {
    pub role: ButtonRole,
    pub rect: CellRect,
    pub label: String,
}

impl Button {
    fn new(role: ButtonRole, x: u16, y: u16, w: u16, label: &str) -> Self {
        Button { role, rect: CellRect { x, y, w, h: 3 }, label: label.to_string() }
    }

    /// Centered horizontally at `cy`.
    fn centered(role: ButtonRole, term_w: u16, cy: u16, w: u16, label: &str) -> Self {
        let x = term_w.saturating_sub(w) / 2;
        Self::new(role, x, cy, w, label)
    }
}

/// The one popup currently on screen, if any. Win/lose overlays beat
/// the help popup; the desk gate suppresses help in rooms.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Popup {
    /// Title-screen high-score table.
    Scores,
    /// Screen-specific help text.
    Info,
    /// "Something on the desk" confirmation.
    Gate,
    Win,
    Lose,
}

pub fn active_popup(world: &GameState) -> Option<Popup> {
    let r = &world.room;
    match world.screen {
        Screen::Title => r.info_open.then_some(Popup::Scores),
        Screen::Ending => None,
        s if s.is_minigame() => {
            if r.win_open {
                Some(Popup::Win)
            } else if r.lose_open {
                Some(Popup::Lose)
            } else if r.info_open {
                Some(Popup::Info)
            } else {
                None
            }
        }
        _ => {
            if r.gate_open {
                Some(Popup::Gate)
            } else if r.info_open {
                Some(Popup::Info)
            } else {
                None
            }
        }
    }
}

/// Buttons visible this frame, in draw order.
pub fn buttons_for(world: &GameState, term_w: u16, term_h: u16) -> Vec<Button> {
    let mid = term_h / 2;

    match active_popup(world) {
        Some(Popup::Gate) => {
            return vec![Button::centered(ButtonRole::EnterGame, term_w, mid + 4, 12, "Play")];
        }
        Some(_) => {
            // Lower-right corner of the popup frame.
            let x = term_w.saturating_sub(term_w / 8 + 12);
            let y = term_h.saturating_sub(term_h / 8 + 4);
            return vec![Button::new(ButtonRole::Back, x, y, 10, "Back")];
        }
        None => {}
    }

    match world.screen {
        Screen::Title => {
            let difficulty = format!("Difficulty: {}", world.difficulty.label());
            vec![
                Button::centered(ButtonRole::Start, term_w, mid.saturating_sub(3), 22, "Start Game"),
                Button::centered(ButtonRole::CycleDifficulty, term_w, mid + 1, 22, &difficulty),
                Button::centered(ButtonRole::ShowScores, term_w, mid + 5, 22, "Highscores"),
            ]
        }
        Screen::Ending => {
            vec![Button::centered(ButtonRole::PlayAgain, term_w, mid + 6, 16, "Play Again!")]
        }
        _ => {
            vec![Button::new(ButtonRole::Info, term_w.saturating_sub(9), 1, 8, "INFO")]
        }
    }
}

/// First button under the click, if any.
pub fn hit(buttons: &[Button], cx: u16, cy: u16) -> Option<ButtonRole> {
    buttons.iter().find(|b| b.rect.contains(cx, cy)).map(|b| b.role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpeedConfig;
    use crate::sim::score::HighScoreBoard;

    fn world_on(screen: Screen) -> GameState {
        let mut w = GameState::new(HighScoreBoard::with_fillers(), SpeedConfig::default());
        w.screen = screen;
        w
    }

    #[test]
    fn click_inside_and_outside() {
        let b = Button::new(ButtonRole::Start, 10, 5, 8, "Start");
        assert_eq!(hit(&[b.clone()], 10, 5), Some(ButtonRole::Start));
        assert_eq!(hit(&[b.clone()], 17, 7), Some(ButtonRole::Start));
        assert_eq!(hit(&[b.clone()], 18, 5), None);
        assert_eq!(hit(&[b], 10, 8), None);
    }

    #[test]
    fn title_offers_the_three_menu_buttons() {
        let roles: Vec<_> = buttons_for(&world_on(Screen::Title), 80, 24)
            .iter()
            .map(|b| b.role)
            .collect();
        assert_eq!(
            roles,
            [ButtonRole::Start, ButtonRole::CycleDifficulty, ButtonRole::ShowScores]
        );
    }

    #[test]
    fn difficulty_label_follows_the_setting() {
        let mut w = world_on(Screen::Title);
        w.difficulty = w.difficulty.cycle();
        let buttons = buttons_for(&w, 80, 24);
        assert!(buttons[1].label.contains("MEDIUM"));
    }

    #[test]
    fn gate_popup_offers_only_play() {
        let mut w = world_on(Screen::MiddleFloor);
        w.room.gate_open = true;
        let buttons = buttons_for(&w, 80, 24);
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].role, ButtonRole::EnterGame);
    }

    #[test]
    fn overlays_outrank_the_help_popup() {
        let mut w = world_on(Screen::WordPuzzle);
        w.room.info_open = true;
        assert_eq!(active_popup(&w), Some(Popup::Info));
        w.room.lose_open = true;
        assert_eq!(active_popup(&w), Some(Popup::Lose));
        w.room.win_open = true;
        assert_eq!(active_popup(&w), Some(Popup::Win));
    }

    #[test]
    fn rooms_show_the_info_button() {
        let buttons = buttons_for(&world_on(Screen::BossOffice), 80, 24);
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].role, ButtonRole::Info);
    }
}
