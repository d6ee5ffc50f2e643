/// Presentation layer: double-buffered, diff-based terminal renderer.
///
/// How it works:
///   1. Build the next frame into `front` buffer (array of Cell)
///   2. Compare each cell with `back` buffer (previous frame)
///   3. Only emit terminal commands for cells that changed
///   4. All commands are batched with `queue!`, flushed once at the end
///   5. Swap front/back
///
/// Rooms are composed by scaling the 800×600 logical space onto the
/// map area of the terminal; the fade-to-black multiplies every
/// composed color toward zero, so the transition works on any palette.

use std::io::{self, BufWriter, Write};

use crossterm::{
    cursor::{self, MoveTo},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::domain::entity::Facing;
use crate::domain::geometry::{Rect, PLAYER_SIZE, ROOM_H, ROOM_W};
use crate::domain::room::DoorSide;
use crate::domain::wordgame::{Judgment, GUESS_ROWS, WORD_LEN};
use crate::sim::score::{self, HighScoreBoard};
use crate::sim::step::FULL_ALPHA;
use crate::sim::world::{GameState, Screen};

use super::widgets::{self, Button, ButtonRole, Popup};

// ── Cell: the unit of the back-buffer ──

#[derive(Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: [u8; 4], // one UTF-8 scalar, narrow glyphs only
    ch_len: u8,
    fg: Color,
    bg: Color,
}

impl Cell {
    /// Explicit dark background for all "empty" terminal cells, so the
    /// cleared screen and composed cells agree on every terminal.
    const BASE_BG: Color = Color::Rgb { r: 18, g: 18, b: 28 };

    const BLANK: Cell = Cell {
        ch: [b' ', 0, 0, 0],
        ch_len: 1,
        fg: Color::White,
        bg: Cell::BASE_BG,
    };

    /// Sentinel cell used to invalidate the back buffer.
    /// Different from any real cell, so every position will be diff'd.
    const INVALID: Cell = Cell {
        ch: [b'?', 0, 0, 0],
        ch_len: 1,
        fg: Color::Magenta,
        bg: Color::Magenta,
    };

    fn from_char(c: char, fg: Color, bg: Color) -> Self {
        let mut cell = Self::BLANK;
        let len = c.encode_utf8(&mut cell.ch).len() as u8;
        cell.ch_len = len;
        cell.fg = fg;
        cell.bg = bg;
        cell
    }

    fn as_str(&self) -> &str {
        std::str::from_utf8(&self.ch[..self.ch_len as usize]).unwrap_or(" ")
    }
}

// ── FrameBuffer: a 2D grid of Cells ──

struct FrameBuffer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    fn new(w: usize, h: usize) -> Self {
        FrameBuffer { width: w, height: h, cells: vec![Cell::BLANK; w * h] }
    }

    fn resize(&mut self, w: usize, h: usize) {
        if self.width != w || self.height != h {
            self.width = w;
            self.height = h;
            self.cells = vec![Cell::BLANK; w * h];
        }
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }

    fn get(&self, x: usize, y: usize) -> Cell {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            Cell::BLANK
        }
    }

    /// Write a string at (x, y). Each char occupies 1 column.
    fn put_str(&mut self, x: usize, y: usize, s: &str, fg: Color, bg: Color) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.set(cx, y, Cell::from_char(ch, fg, bg));
            cx += 1;
        }
    }

    fn put_str_centered(&mut self, y: usize, s: &str, fg: Color, bg: Color) {
        let x = self.width.saturating_sub(s.chars().count()) / 2;
        self.put_str(x, y, s, fg, bg);
    }

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, cell: Cell) {
        for ry in y..y + h {
            for rx in x..x + w {
                self.set(rx, ry, cell);
            }
        }
    }
}

// ── Palette ──

const HUD_BG: Color = Color::Rgb { r: 20, g: 20, b: 60 };
const POPUP_BG: Color = Color::Rgb { r: 30, g: 30, b: 40 };
const DESK_BG: Color = Color::Rgb { r: 92, g: 62, b: 28 };
const DOOR_OPEN_BG: Color = Color::Rgb { r: 40, g: 90, b: 40 };
const DOOR_SHUT_BG: Color = Color::Rgb { r: 70, g: 70, b: 80 };
const GRID_IDLE_BG: Color = Color::Rgb { r: 90, g: 90, b: 90 };
const EXACT_BG: Color = Color::Rgb { r: 0, g: 170, b: 0 };
const PRESENT_BG: Color = Color::Rgb { r: 190, g: 180, b: 0 };
const ABSENT_BG: Color = Color::Rgb { r: 180, g: 30, b: 30 };

/// Per-room floor tint, the terminal stand-in for background art.
fn floor_color(screen: Screen, puzzle_won: bool) -> Color {
    match screen {
        Screen::BossOffice => Color::Rgb { r: 52, g: 40, b: 46 },
        Screen::TopFloor => Color::Rgb { r: 38, g: 46, b: 56 },
        Screen::MiddleFloor if puzzle_won => Color::Rgb { r: 40, g: 56, b: 44 },
        Screen::MiddleFloor => Color::Rgb { r: 46, g: 46, b: 38 },
        Screen::LowerFloor if puzzle_won => Color::Rgb { r: 40, g: 56, b: 50 },
        Screen::LowerFloor => Color::Rgb { r: 48, g: 42, b: 36 },
        Screen::GroundFloor => Color::Rgb { r: 40, g: 44, b: 48 },
        _ => Cell::BASE_BG,
    }
}

/// Scale a color toward black; the fade-out in terminal terms.
fn dim(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb { r, g, b } => Color::Rgb {
            r: (r as f32 * factor) as u8,
            g: (g as f32 * factor) as u8,
            b: (b as f32 * factor) as u8,
        },
        other => {
            if factor < 0.5 {
                Color::Black
            } else {
                other
            }
        }
    }
}

// ── Layout rows ──

const HUD_ROW: usize = 0;
const MAP_ROW: usize = 2;

pub struct Renderer {
    writer: BufWriter<io::Stdout>,
    front: FrameBuffer,
    back: FrameBuffer,
    term_w: usize,
    term_h: usize,
    last_screen: Option<Screen>,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            writer: BufWriter::with_capacity(16384, io::stdout()),
            front: FrameBuffer::new(0, 0),
            back: FrameBuffer::new(0, 0),
            term_w: 0,
            term_h: 0,
            last_screen: None,
        }
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.writer,
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide,
            SetBackgroundColor(Cell::BASE_BG),
            Clear(ClearType::All)
        )?;

        let (tw, th) = terminal::size().unwrap_or((80, 24));
        self.term_w = tw as usize;
        self.term_h = th as usize;
        self.front.resize(self.term_w, self.term_h);
        self.back.resize(self.term_w, self.term_h);
        // Force full repaint on first frame: back ≠ front for every cell.
        self.back.cells.fill(Cell::INVALID);

        Ok(())
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(
            self.writer,
            ResetColor,
            cursor::Show,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }

    pub fn render(&mut self, world: &GameState, mouse: (u16, u16)) -> io::Result<()> {
        // Detect terminal resize
        let (tw, th) = terminal::size().unwrap_or((80, 24));
        if tw as usize != self.term_w || th as usize != self.term_h {
            self.term_w = tw as usize;
            self.term_h = th as usize;
            self.front.resize(self.term_w, self.term_h);
            self.back.resize(self.term_w, self.term_h);
            self.back.cells.fill(Cell::INVALID);
            queue!(self.writer, SetBackgroundColor(Cell::BASE_BG), Clear(ClearType::All))?;
        }

        // Screen switch → clear for a clean transition
        if self.last_screen != Some(world.screen) {
            self.back.cells.fill(Cell::INVALID);
            queue!(self.writer, SetBackgroundColor(Cell::BASE_BG), Clear(ClearType::All))?;
            self.last_screen = Some(world.screen);
        }

        self.front.clear();

        match world.screen {
            Screen::Title => self.compose_title(),
            Screen::WordPuzzle => self.compose_word_puzzle(world),
            Screen::SkyBridge | Screen::Connections => self.compose_placeholder_game(world),
            Screen::Ending => self.compose_ending(world),
            _ => self.compose_room(world),
        }

        if world.screen.shows_clock() {
            self.compose_hud(world);
        }

        self.compose_popup(world);
        self.compose_buttons(world, mouse);

        if let Some(alpha) = world.room.fade {
            self.apply_fade(alpha);
        }

        if !world.message.is_empty() {
            let y = self.front.height.saturating_sub(1);
            self.front.put_str_centered(y, &world.message, Color::Yellow, Cell::BASE_BG);
        }

        self.flush_diff()?;
        std::mem::swap(&mut self.front, &mut self.back);
        Ok(())
    }

    // ── Diff flush: only write changed cells ──

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_fg = Color::White;
        let mut last_bg = Cell::BASE_BG;
        let mut need_move = true;
        let mut last_x: usize = 0;
        let mut last_y: usize = 0;

        // Set explicit base colors at start of frame. No ResetColor —
        // the terminal default may differ from BASE_BG and leave
        // artifact lines between rows.
        queue!(
            self.writer,
            SetForegroundColor(Color::White),
            SetBackgroundColor(Cell::BASE_BG),
        )?;

        for y in 0..self.front.height {
            for x in 0..self.front.width {
                let cell = self.front.get(x, y);
                if cell == self.back.get(x, y) {
                    need_move = true;
                    continue;
                }

                if need_move || x != last_x + 1 || y != last_y {
                    queue!(self.writer, MoveTo(x as u16, y as u16))?;
                    need_move = false;
                }
                if cell.fg != last_fg {
                    queue!(self.writer, SetForegroundColor(cell.fg))?;
                    last_fg = cell.fg;
                }
                if cell.bg != last_bg {
                    queue!(self.writer, SetBackgroundColor(cell.bg))?;
                    last_bg = cell.bg;
                }
                queue!(self.writer, Print(cell.as_str()))?;
                last_x = x;
                last_y = y;
            }
        }

        self.writer.flush()
    }

    // ── World → viewport mapping ──

    fn map_height(&self) -> usize {
        self.term_h.saturating_sub(MAP_ROW + 2)
    }

    fn to_view(&self, wx: i32, wy: i32) -> (usize, usize) {
        let vw = self.term_w.max(1) as i64;
        let vh = self.map_height().max(1) as i64;
        let x = (wx as i64 * vw / ROOM_W as i64).clamp(0, vw - 1) as usize;
        let y = (wy as i64 * vh / ROOM_H as i64).clamp(0, vh - 1) as usize;
        (x, y + MAP_ROW)
    }

    fn view_rect(&self, r: &Rect) -> (usize, usize, usize, usize) {
        let (x0, y0) = self.to_view(r.x, r.y);
        let (x1, y1) = self.to_view(r.x + r.w, r.y + r.h);
        (x0, y0, (x1 - x0).max(1), (y1 - y0).max(1))
    }

    // ── Compose: screens ──

    fn compose_title(&mut self) {
        let w = self.front.width;
        self.front.fill_rect(0, 0, w, self.front.height, Cell::BLANK);

        self.front.put_str_centered(2, "C L O C K   O U T", Color::Yellow, Cell::BASE_BG);
        self.front.put_str_centered(4, "The building is locked down. Work your way to the street.", Color::Grey, Cell::BASE_BG);
        let y = self.front.height.saturating_sub(2);
        self.front.put_str_centered(y, "click a button · Ctrl+C quits", Color::DarkGrey, Cell::BASE_BG);
    }

    fn compose_room(&mut self, world: &GameState) {
        let Some(layout) = world.screen.layout() else { return };
        let floor = floor_color(world.screen, world.room.puzzle_won);
        let mh = self.map_height();
        let w = self.front.width;
        if mh == 0 || w == 0 {
            return;
        }

        self.front.fill_rect(0, MAP_ROW, w, mh, Cell::from_char(' ', Color::White, floor));

        // Walls
        let wall = Cell::from_char('▒', Color::DarkGrey, floor);
        for x in 0..w {
            self.front.set(x, MAP_ROW, wall);
            self.front.set(x, MAP_ROW + mh - 1, wall);
        }
        for y in MAP_ROW..MAP_ROW + mh {
            self.front.set(0, y, wall);
            self.front.set(w - 1, y, wall);
        }

        self.compose_door(world, layout.door, &layout.exit_zone);

        if let Some(desk) = layout.desk {
            let (dx, dy, dw, dh) = self.view_rect(&desk);
            self.front.fill_rect(dx, dy, dw, dh, Cell::from_char('▓', Color::Rgb { r: 140, g: 100, b: 50 }, DESK_BG));
            if dh >= 2 && dw >= 6 {
                self.front.put_str(dx + dw / 2 - 2, dy + dh / 2, "DESK", Color::White, DESK_BG);
            }
        }

        self.compose_exclamation(world);
        self.compose_player(world, floor);

        let hint = match world.screen {
            Screen::BossOffice => "Boss's office — the window up top is shattered",
            Screen::TopFloor => "Top floor — the elevator is waiting",
            Screen::MiddleFloor | Screen::LowerFloor if world.room.puzzle_won => "The elevator hums open",
            Screen::MiddleFloor | Screen::LowerFloor => "Something sits on that desk...",
            Screen::GroundFloor => "The lobby — street doors at the bottom",
            _ => "",
        };
        self.front.put_str_centered(MAP_ROW + mh, hint, Color::Grey, Cell::BASE_BG);
    }

    fn compose_door(&mut self, world: &GameState, side: DoorSide, zone: &Rect) {
        let open = world.room.elevator_open;
        let (bg, label) = match (world.screen, open) {
            (Screen::BossOffice, _) => (DOOR_OPEN_BG, "░ WINDOW ░"),
            (Screen::GroundFloor, _) => (DOOR_OPEN_BG, "= STREET ="),
            (_, true) => (DOOR_OPEN_BG, "[ OPEN  ]"),
            (_, false) => (DOOR_SHUT_BG, "[CLOSED ]"),
        };
        let (zx, zy, zw, zh) = self.view_rect(zone);
        // Doors hug their wall; one row is enough to read.
        let row = match side {
            DoorSide::Top => zy,
            DoorSide::Bottom => zy + zh - 1,
        };
        self.front.fill_rect(zx, row, zw, 1, Cell::from_char(' ', Color::White, bg));
        let lx = zx + zw.saturating_sub(label.chars().count()) / 2;
        self.front.put_str(lx, row, label, Color::White, bg);
    }

    fn compose_exclamation(&mut self, world: &GameState) {
        if !world.screen.desk_gates_minigame() || world.room.puzzle_won {
            return;
        }
        let Some(desk) = world.screen.layout().and_then(|l| l.desk) else { return };

        // Bob above the desk: one row of sway.
        let phase = world.anim_tick as f32 * 0.15;
        let bob = if phase.sin() > 0.0 { 0 } else { 1 };
        let (cx, cy) = self.to_view(desk.x + desk.w / 2, desk.y - 40);
        let strength = (world.room.mark_alpha / FULL_ALPHA).clamp(0.0, 1.0);
        let fg = dim(Color::Rgb { r: 255, g: 220, b: 0 }, strength);
        let bg = floor_color(world.screen, world.room.puzzle_won);
        self.front.set(cx, cy + bob, Cell::from_char('!', fg, bg));
    }

    fn compose_player(&mut self, world: &GameState, floor: Color) {
        // The 55×55 box shrinks to roughly 2 columns; an arrow carries
        // the facing the sprite art used to.
        let (px, py) = self.to_view(world.player.x + PLAYER_SIZE / 2, world.player.y + PLAYER_SIZE / 2);
        let arrow = match world.player.facing {
            Facing::Up => '^',
            Facing::Down => 'v',
            Facing::Left => '<',
            Facing::Right => '>',
        };
        self.front.set(px, py, Cell::from_char('@', Color::Cyan, floor));
        self.front.set(px + 1, py, Cell::from_char(arrow, Color::Cyan, floor));
    }

    fn compose_word_puzzle(&mut self, world: &GameState) {
        let w = self.front.width;
        let bg = Color::Rgb { r: 30, g: 40, b: 26 };
        self.front.fill_rect(0, 0, w, self.front.height, Cell::from_char(' ', Color::White, bg));
        self.front.put_str_centered(1, "W O R D   P U Z Z L E", Color::White, bg);

        let Some(game) = world.puzzle.word_game() else { return };

        let cell_w = 4;
        let grid_w = WORD_LEN * cell_w;
        let x0 = w.saturating_sub(grid_w) / 2;
        let y0 = 3;

        for row in 0..GUESS_ROWS {
            let y = y0 + row * 2;
            let letters = game.rows().get(row).map(String::as_str).unwrap_or("");
            for col in 0..WORD_LEN {
                let x = x0 + col * cell_w;
                let letter = letters.as_bytes().get(col).copied();
                let cell_bg = match game.judge(row, col) {
                    Some(Judgment::Exact) => EXACT_BG,
                    Some(Judgment::Present) => PRESENT_BG,
                    Some(Judgment::Absent) => ABSENT_BG,
                    None => GRID_IDLE_BG,
                };
                let text = match letter {
                    Some(b) => format!(" {} ", b as char),
                    None => " · ".to_string(),
                };
                self.front.put_str(x, y, &text, Color::Black, cell_bg);
            }
        }

        let y = y0 + GUESS_ROWS * 2 + 1;
        self.front.put_str_centered(y, "type letters · backspace erases · enter submits", Color::Grey, bg);
    }

    fn compose_placeholder_game(&mut self, world: &GameState) {
        let (bg, title) = match world.screen {
            Screen::SkyBridge => (Color::Rgb { r: 26, g: 36, b: 48 }, "S K Y   B R I D G E"),
            _ => (Color::Rgb { r: 48, g: 36, b: 26 }, "C O N N E C T I O N S"),
        };
        let w = self.front.width;
        self.front.fill_rect(0, 0, w, self.front.height, Cell::from_char(' ', Color::White, bg));
        self.front.put_str_centered(1, title, Color::White, bg);
        self.front.put_str_centered(3, "(under construction — you breeze through)", Color::Grey, bg);
    }

    fn compose_ending(&mut self, world: &GameState) {
        let mid = self.front.height / 2;
        let clock = score::format_clock(world.clock_secs);
        self.front.put_str_centered(mid.saturating_sub(6), &format!("Congrats, you got out in: {}", clock), Color::Yellow, Cell::BASE_BG);
        self.front.put_str_centered(mid.saturating_sub(3), "Unfortunately, you are still legally", Color::White, Cell::BASE_BG);
        self.front.put_str_centered(mid.saturating_sub(2), "contracted to come back tomorrow.", Color::White, Cell::BASE_BG);
        self.front.put_str_centered(mid, "Don't be late!", Color::White, Cell::BASE_BG);
    }

    // ── HUD / popups / buttons ──

    fn compose_hud(&mut self, world: &GameState) {
        let w = self.front.width;
        self.front.fill_rect(0, HUD_ROW, w, 1, Cell::from_char(' ', Color::White, HUD_BG));
        let clock = score::format_clock(world.clock_secs);
        let hud = format!(" Elapsed Time: {}   Difficulty: {} ", clock, world.difficulty.label());
        self.front.put_str(0, HUD_ROW, &hud, Color::White, HUD_BG);
    }

    fn popup_frame(&mut self) -> (usize, usize, usize, usize) {
        let mx = self.term_w / 8;
        let my = self.term_h / 8;
        let w = self.term_w - 2 * mx;
        let h = self.term_h - 2 * my;
        self.front.fill_rect(mx, my, w, h, Cell::from_char(' ', Color::White, POPUP_BG));
        (mx, my, w, h)
    }

    fn compose_popup(&mut self, world: &GameState) {
        let Some(popup) = widgets::active_popup(world) else { return };
        let (x, y, w, _h) = self.popup_frame();

        match popup {
            Popup::Scores => self.compose_score_table(&world.board, x, y, w),
            Popup::Gate => {
                self.front.put_str_centered(y + 2, "Information", Color::White, POPUP_BG);
                for (i, line) in [
                    "The desk terminal blinks at you.",
                    "Beat its puzzle to unlock the elevator.",
                ]
                .iter()
                .enumerate()
                {
                    self.front.put_str_centered(y + 4 + i, line, Color::Grey, POPUP_BG);
                }
            }
            Popup::Win => {
                self.front.put_str_centered(y + 3, "You Win!", Color::Green, POPUP_BG);
                self.front.put_str_centered(y + 5, "Congratulations!", Color::White, POPUP_BG);
            }
            Popup::Lose => {
                self.front.put_str_centered(y + 3, "You Lose!", Color::Red, POPUP_BG);
                self.front.put_str_centered(y + 5, "Better luck next time!", Color::White, POPUP_BG);
                if let Some(game) = world.puzzle.word_game() {
                    let reveal = format!("The word was {}", game.target());
                    self.front.put_str_centered(y + 7, &reveal, Color::Grey, POPUP_BG);
                }
            }
            Popup::Info => {
                self.front.put_str_centered(y + 2, "Information", Color::White, POPUP_BG);
                for (i, line) in info_lines(world).iter().enumerate() {
                    self.front.put_str_centered(y + 4 + i, line, Color::Grey, POPUP_BG);
                }
            }
        }
    }

    fn compose_score_table(&mut self, board: &HighScoreBoard, x: usize, y: usize, w: usize) {
        self.front.put_str_centered(y + 1, "TOP 5 ALL-TIME HIGH SCORES", Color::Yellow, POPUP_BG);

        let col_time = x + 4;
        let col_diff = x + (w / 2).saturating_sub(4).max(12);
        let col_best = (x + w).saturating_sub(16).max(col_diff + 12);
        self.front.put_str(col_time, y + 3, "TIMES", Color::White, POPUP_BG);
        self.front.put_str(col_diff, y + 3, "DIFFICULTY", Color::White, POPUP_BG);
        self.front.put_str(col_best, y + 3, "BEST IN CAT.?", Color::White, POPUP_BG);

        for (i, entry) in board.entries().iter().enumerate() {
            let row = y + 5 + i;
            let clock = score::format_clock(entry.seconds);
            let tag = match entry.difficulty {
                None => "FILLER",
                Some(d) => d.label(),
            };
            let best = if board.is_best_in_category(i) { "YES!" } else { "NAH :(" };
            self.front.put_str(col_time, row, &clock, Color::White, POPUP_BG);
            self.front.put_str(col_diff, row, tag, Color::Grey, POPUP_BG);
            self.front.put_str(col_best, row, best, Color::Grey, POPUP_BG);
        }
    }

    fn compose_buttons(&mut self, world: &GameState, mouse: (u16, u16)) {
        let buttons = widgets::buttons_for(world, self.term_w as u16, self.term_h as u16);
        for b in &buttons {
            self.compose_button(world, b, b.rect.contains(mouse.0, mouse.1));
        }
    }

    fn compose_button(&mut self, world: &GameState, button: &Button, hover: bool) {
        // The difficulty toggle wears its level's color; everything
        // else shares the two-tone scheme.
        let bg = if button.role == ButtonRole::CycleDifficulty {
            match world.difficulty.index() {
                0 => Color::Rgb { r: 0, g: 150, b: 0 },
                1 => Color::Rgb { r: 160, g: 150, b: 0 },
                _ => Color::Rgb { r: 170, g: 20, b: 20 },
            }
        } else if hover {
            Color::Rgb { r: 50, g: 150, b: 200 }
        } else {
            Color::Rgb { r: 0, g: 102, b: 153 }
        };

        let r = button.rect;
        self.front.fill_rect(r.x as usize, r.y as usize, r.w as usize, r.h as usize, Cell::from_char(' ', Color::White, bg));
        let lx = r.x as usize + (r.w as usize).saturating_sub(button.label.chars().count()) / 2;
        self.front.put_str(lx, r.y as usize + r.h as usize / 2, &button.label, Color::White, bg);
    }

    fn apply_fade(&mut self, alpha: f32) {
        let factor = (1.0 - alpha / FULL_ALPHA).clamp(0.0, 1.0);
        for cell in &mut self.front.cells {
            cell.fg = dim(cell.fg, factor);
            cell.bg = dim(cell.bg, factor);
        }
    }
}

/// Help-popup body text, per screen and progress.
fn info_lines(world: &GameState) -> Vec<&'static str> {
    match world.screen {
        Screen::BossOffice => vec![
            "Make your way to the shattered window to",
            "escape the boss's office.",
        ],
        Screen::SkyBridge => vec!["Make your way across the sky bridge."],
        Screen::TopFloor => vec!["GO TO THE ELEVATOR TO ESCAPE THE BUILDING"],
        Screen::MiddleFloor | Screen::LowerFloor => {
            if world.room.puzzle_won {
                vec!["GO TO THE ELEVATOR TO ESCAPE THE BUILDING"]
            } else {
                vec!["The desk seems to have something on it..."]
            }
        }
        Screen::WordPuzzle => vec![
            "Enter 5-letter combinations and press enter",
            "to check your guess against the target word.",
            "",
            "Red: the letter is not in the word.",
            "Yellow: in the word, wrong position.",
            "Green: right letter, right position.",
        ],
        Screen::Connections => vec!["Nothing here yet. Enjoy the freebie."],
        Screen::GroundFloor => vec!["GO TO THE EXIT!!!"],
        _ => vec![],
    }
}
