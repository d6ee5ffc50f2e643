/// The word-guessing puzzle: a 5-column, 6-row guessing grid.
///
/// The target word is drawn from a per-difficulty list. Committed rows
/// are judged letter by letter; the working row is never judged. A row
/// equal to the target ends the game in victory; committing the sixth
/// row without a match ends it in defeat.

use rand::Rng;

use super::minigame::{MiniGame, PuzzleInput};

/// Letters per guess row.
pub const WORD_LEN: usize = 5;
/// Guess rows per session.
pub const GUESS_ROWS: usize = 6;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Title-screen toggle order: Easy → Medium → Hard → Easy.
    pub fn cycle(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

const EASY_WORDS: [&str; 5] = ["HITCH", "RURAL", "CRAIC", "ERGOT", "OUIJA"];
const MEDIUM_WORDS: [&str; 5] = ["LYMPH", "WALTZ", "XYLEM", "GLYPH", "NYMPH"];
const HARD_WORDS: [&str; 5] = ["CRWTH", "SCHWA", "GLITZ", "ZEBEC", "PSYCH"];

pub fn word_list(difficulty: Difficulty) -> &'static [&'static str; 5] {
    match difficulty {
        Difficulty::Easy => &EASY_WORDS,
        Difficulty::Medium => &MEDIUM_WORDS,
        Difficulty::Hard => &HARD_WORDS,
    }
}

/// Per-letter feedback for a committed row.
///
/// `Present` does not count letter multiplicity: every occurrence of a
/// letter that appears anywhere in the target is marked, even when the
/// target holds fewer copies. Looser than strict Wordle rules, and
/// intended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Judgment {
    /// Right letter, right column.
    Exact,
    /// Letter occurs elsewhere in the target.
    Present,
    /// Letter not in the target at all.
    Absent,
}

#[derive(Clone, Debug)]
pub struct WordGame {
    target: String,
    /// `GUESS_ROWS` rows; the one at `current_row` is the working entry.
    rows: Vec<String>,
    current_row: usize,
    over: bool,
    won: bool,
}

impl WordGame {
    /// An inert session; call `start` before use.
    pub fn new() -> Self {
        WordGame {
            target: String::new(),
            rows: vec![String::new(); GUESS_ROWS],
            current_row: 0,
            over: false,
            won: false,
        }
    }

    fn reset_with_target(&mut self, target: String) {
        self.target = target;
        self.rows = vec![String::new(); GUESS_ROWS];
        self.current_row = 0;
        self.over = false;
        self.won = false;
    }

    /// Append a letter to the working row. Non-letters, a full row, or a
    /// finished game are silent no-ops.
    pub fn push_letter(&mut self, ch: char) {
        if self.over || !ch.is_ascii_alphabetic() {
            return;
        }
        let row = &mut self.rows[self.current_row];
        if row.len() < WORD_LEN {
            row.push(ch.to_ascii_uppercase());
        }
    }

    /// Remove the last letter of the working row, if any.
    pub fn pop_letter(&mut self) {
        if self.over {
            return;
        }
        self.rows[self.current_row].pop();
    }

    /// Commit the working row. Requires exactly `WORD_LEN` letters;
    /// anything shorter is a no-op.
    pub fn commit_row(&mut self) {
        if self.over || self.rows[self.current_row].len() != WORD_LEN {
            return;
        }
        let matched = self.rows[self.current_row] == self.target;
        let last_row = self.current_row == GUESS_ROWS - 1;
        self.current_row += 1;
        if matched {
            self.over = true;
            self.won = true;
        } else if last_row {
            self.over = true;
        }
    }

    /// Judge one cell of a committed row.
    ///
    /// Returns `None` for the working row and beyond, and for columns
    /// past the row's letters — those cells render as blank boxes.
    pub fn judge(&self, row: usize, col: usize) -> Option<Judgment> {
        if row >= self.current_row {
            return None;
        }
        let letter = self.rows.get(row)?.as_bytes().get(col).copied()?;
        let target = self.target.as_bytes();
        if target.get(col).copied() == Some(letter) {
            Some(Judgment::Exact)
        } else if target.contains(&letter) {
            Some(Judgment::Present)
        } else {
            Some(Judgment::Absent)
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn current_row(&self) -> usize {
        self.current_row
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl MiniGame for WordGame {
    fn start(&mut self, difficulty: Difficulty) {
        let list = word_list(difficulty);
        let pick = rand::rng().random_range(0..list.len());
        self.reset_with_target(list[pick].to_string());
    }

    fn handle_input(&mut self, input: PuzzleInput) {
        match input {
            PuzzleInput::Letter(ch) => self.push_letter(ch),
            PuzzleInput::Erase => self.pop_letter(),
            PuzzleInput::Commit => self.commit_row(),
        }
    }

    fn is_terminal(&self) -> bool {
        self.over
    }

    fn is_victory(&self) -> bool {
        self.won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    fn game_with(target: &str) -> WordGame {
        let mut g = WordGame::new();
        g.reset_with_target(target.to_string());
        g
    }

    fn type_word(g: &mut WordGame, word: &str) {
        for ch in word.chars() {
            g.push_letter(ch);
        }
        g.commit_row();
    }

    #[test]
    fn start_draws_from_the_selected_list() {
        for difficulty in ALL {
            let mut g = WordGame::new();
            g.start(difficulty);
            let list = word_list(difficulty);
            assert!(list.contains(&g.target()), "{} not in {:?}", g.target(), list);
            assert_eq!(g.target().len(), WORD_LEN);
            assert_eq!(g.current_row(), 0);
            assert!(!g.is_terminal());
        }
    }

    #[test]
    fn all_list_words_are_five_uppercase_letters() {
        for difficulty in ALL {
            for word in word_list(difficulty) {
                assert_eq!(word.len(), WORD_LEN);
                assert!(word.bytes().all(|b| b.is_ascii_uppercase()));
            }
        }
    }

    #[test]
    fn full_row_ignores_extra_letters() {
        let mut g = game_with("HITCH");
        for ch in "WATCH".chars() {
            g.push_letter(ch);
        }
        let before = g.rows()[0].clone();
        g.push_letter('X');
        assert_eq!(g.rows()[0], before);
    }

    #[test]
    fn erase_on_empty_row_is_a_no_op() {
        let mut g = game_with("HITCH");
        g.pop_letter();
        assert_eq!(g.rows()[0], "");
        assert_eq!(g.current_row(), 0);
    }

    #[test]
    fn lowercase_input_is_uppercased_and_symbols_dropped() {
        let mut g = game_with("HITCH");
        g.push_letter('w');
        g.push_letter('1');
        g.push_letter('a');
        assert_eq!(g.rows()[0], "WA");
    }

    #[test]
    fn short_row_cannot_commit() {
        let mut g = game_with("HITCH");
        g.push_letter('W');
        g.commit_row();
        assert_eq!(g.current_row(), 0);
        assert!(!g.is_terminal());
    }

    #[test]
    fn watch_against_hitch() {
        let mut g = game_with("HITCH");
        type_word(&mut g, "WATCH");
        let marks: Vec<_> = (0..WORD_LEN).map(|c| g.judge(0, c).unwrap()).collect();
        assert_eq!(
            marks,
            [
                Judgment::Absent,  // W
                Judgment::Absent,  // A
                Judgment::Exact,   // T
                Judgment::Exact,   // C
                Judgment::Exact,   // H
            ]
        );
        assert!(!g.is_terminal());
    }

    #[test]
    fn repeated_letter_marks_every_occurrence() {
        // Target RURAL: both Rs in "ROARS" score, no count-limiting.
        let mut g = game_with("RURAL");
        type_word(&mut g, "ROARS");
        assert_eq!(g.judge(0, 0), Some(Judgment::Exact));
        assert_eq!(g.judge(0, 3), Some(Judgment::Present));
    }

    #[test]
    fn working_row_is_never_judged() {
        let mut g = game_with("HITCH");
        for ch in "WATCH".chars() {
            g.push_letter(ch);
        }
        assert_eq!(g.judge(0, 0), None);
        g.commit_row();
        assert!(g.judge(0, 0).is_some());
        assert_eq!(g.judge(1, 0), None);
    }

    #[test]
    fn exact_guess_wins_on_any_row() {
        let mut g = game_with("GLYPH");
        type_word(&mut g, "NYMPH");
        assert!(!g.is_terminal());
        type_word(&mut g, "GLYPH");
        assert!(g.is_terminal());
        assert!(g.is_victory());
        // Winning row is judged (it is no longer the working row).
        assert_eq!(g.judge(1, 0), Some(Judgment::Exact));
    }

    #[test]
    fn six_misses_lose_on_the_sixth_commit() {
        let mut g = game_with("SCHWA");
        for _ in 0..GUESS_ROWS - 1 {
            type_word(&mut g, "GLITZ");
            assert!(!g.is_terminal());
        }
        type_word(&mut g, "GLITZ");
        assert!(g.is_terminal());
        assert!(!g.is_victory());
    }

    #[test]
    fn finished_game_ignores_further_input() {
        let mut g = game_with("GLYPH");
        type_word(&mut g, "GLYPH");
        g.push_letter('A');
        g.commit_row();
        assert_eq!(g.current_row(), 1);
        assert!(g.is_victory());
    }

    #[test]
    fn difficulty_cycle_wraps() {
        assert_eq!(Difficulty::Easy.cycle(), Difficulty::Medium);
        assert_eq!(Difficulty::Medium.cycle(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.cycle(), Difficulty::Easy);
    }
}
