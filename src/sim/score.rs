/// Completion-time ranking and the escape clock.
///
/// The board always holds exactly `BOARD_SIZE` entries, ascending by
/// time. A fresh board is padded with filler rows (sentinel difficulty)
/// so the table renders full from the first launch.

use crate::domain::wordgame::Difficulty;

pub const BOARD_SIZE: usize = 5;

/// Seed times for the filler rows of a fresh board.
const FILLER_TIMES: [u32; BOARD_SIZE] = [20, 50, 50, 80, 135];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScoreEntry {
    pub seconds: u32,
    /// `None` marks a filler row — no real run behind it.
    pub difficulty: Option<Difficulty>,
}

#[derive(Clone, Debug)]
pub struct HighScoreBoard {
    /// Invariant: length == BOARD_SIZE, ascending by `seconds`.
    entries: Vec<ScoreEntry>,
}

impl HighScoreBoard {
    /// A board of filler rows only.
    pub fn with_fillers() -> Self {
        HighScoreBoard {
            entries: FILLER_TIMES
                .iter()
                .map(|&seconds| ScoreEntry { seconds, difficulty: None })
                .collect(),
        }
    }

    /// Rebuild from loaded entries; anything that breaks the invariant
    /// falls back to the filler board.
    pub fn from_entries(entries: Vec<ScoreEntry>) -> Self {
        let sorted = entries.windows(2).all(|w| w[0].seconds <= w[1].seconds);
        if entries.len() == BOARD_SIZE && sorted {
            HighScoreBoard { entries }
        } else {
            Self::with_fillers()
        }
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Record a finished run. The time enters the board only if it is
    /// strictly faster than at least one existing entry; it slots in
    /// after any equal times and the slowest entry falls off. Returns
    /// whether the run placed.
    pub fn record(&mut self, seconds: u32, difficulty: Difficulty) -> bool {
        let slot = match self.entries.iter().position(|e| seconds < e.seconds) {
            Some(i) => i,
            None => return false,
        };
        self.entries.insert(slot, ScoreEntry { seconds, difficulty: Some(difficulty) });
        self.entries.truncate(BOARD_SIZE);
        true
    }

    /// For each difficulty, the index of its fastest entry on the
    /// board. Filler rows never qualify; on a tie the higher-ranked
    /// entry wins.
    pub fn best_per_difficulty(&self) -> [Option<usize>; 3] {
        let mut best: [Option<usize>; 3] = [None; 3];
        for (i, entry) in self.entries.iter().enumerate() {
            let Some(difficulty) = entry.difficulty else { continue };
            let slot = &mut best[difficulty.index()];
            let faster = match *slot {
                Some(j) => entry.seconds < self.entries[j].seconds,
                None => true,
            };
            if faster {
                *slot = Some(i);
            }
        }
        best
    }

    /// Is the entry at `index` the fastest of its difficulty?
    pub fn is_best_in_category(&self, index: usize) -> bool {
        self.best_per_difficulty().contains(&Some(index))
    }
}

// ── Clock formatting ──

/// `seconds` as a zero-padded `HHh:MMm:SSs` clock; hours wrap at 24.
pub fn format_clock(seconds: u32) -> String {
    let h = (seconds / 3600) % 24;
    let m = (seconds / 60) % 60;
    let s = seconds % 60;
    format!("{:02}h:{:02}m:{:02}s", h, m, s)
}

/// Parse a `HHh:MMm:SSs` clock back into seconds.
pub fn parse_clock(text: &str) -> Option<u32> {
    let mut parts = text.split(':');
    let h = parse_unit(parts.next()?, 'h')?;
    let m = parse_unit(parts.next()?, 'm')?;
    let s = parse_unit(parts.next()?, 's')?;
    if parts.next().is_some() {
        return None;
    }
    Some(h * 3600 + m * 60 + s)
}

fn parse_unit(part: &str, suffix: char) -> Option<u32> {
    let digits = part.strip_suffix(suffix)?;
    if digits.len() != 2 {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(times: [u32; BOARD_SIZE], tags: [Option<Difficulty>; BOARD_SIZE]) -> HighScoreBoard {
        let entries = times
            .iter()
            .zip(tags)
            .map(|(&seconds, difficulty)| ScoreEntry { seconds, difficulty })
            .collect();
        HighScoreBoard::from_entries(entries)
    }

    fn times(board: &HighScoreBoard) -> Vec<u32> {
        board.entries().iter().map(|e| e.seconds).collect()
    }

    #[test]
    fn fresh_board_is_all_filler() {
        let board = HighScoreBoard::with_fillers();
        assert_eq!(board.entries().len(), BOARD_SIZE);
        assert!(board.entries().iter().all(|e| e.difficulty.is_none()));
        assert_eq!(times(&board), vec![20, 50, 50, 80, 135]);
    }

    #[test]
    fn placing_run_evicts_the_slowest() {
        let mut board = HighScoreBoard::with_fillers();
        assert!(board.record(30, Difficulty::Easy));
        assert_eq!(times(&board), vec![20, 30, 50, 50, 80]);
        assert_eq!(board.entries()[1].difficulty, Some(Difficulty::Easy));
    }

    #[test]
    fn slower_than_everything_is_discarded() {
        let mut board = HighScoreBoard::with_fillers();
        assert!(!board.record(200, Difficulty::Hard));
        assert_eq!(times(&board), vec![20, 50, 50, 80, 135]);
    }

    #[test]
    fn tying_time_slots_after_the_existing_one() {
        let mut board = HighScoreBoard::with_fillers();
        assert!(board.record(50, Difficulty::Medium));
        assert_eq!(times(&board), vec![20, 50, 50, 50, 80]);
        // The new 50 sits behind both fillers.
        assert_eq!(board.entries()[3].difficulty, Some(Difficulty::Medium));
        assert_eq!(board.entries()[1].difficulty, None);
    }

    #[test]
    fn board_never_grows_or_shrinks() {
        let mut board = HighScoreBoard::with_fillers();
        for t in [10, 5, 90, 300, 1] {
            board.record(t, Difficulty::Easy);
            assert_eq!(board.entries().len(), BOARD_SIZE);
        }
        assert_eq!(times(&board), vec![1, 5, 10, 20, 50]);
    }

    #[test]
    fn best_per_difficulty_picks_fastest_of_each() {
        let board = board_with(
            [20, 35, 50, 80, 135],
            [
                Some(Difficulty::Easy),
                Some(Difficulty::Hard),
                Some(Difficulty::Easy),
                Some(Difficulty::Medium),
                Some(Difficulty::Hard),
            ],
        );
        assert_eq!(board.best_per_difficulty(), [Some(0), Some(3), Some(1)]);
        assert!(board.is_best_in_category(0));
        assert!(!board.is_best_in_category(2));
        assert!(!board.is_best_in_category(4));
    }

    #[test]
    fn filler_rows_are_never_best() {
        let board = HighScoreBoard::with_fillers();
        assert_eq!(board.best_per_difficulty(), [None, None, None]);
        assert!((0..BOARD_SIZE).all(|i| !board.is_best_in_category(i)));
    }

    #[test]
    fn tie_within_a_difficulty_keeps_the_higher_rank() {
        let board = board_with(
            [50, 50, 60, 70, 80],
            [
                Some(Difficulty::Easy),
                Some(Difficulty::Easy),
                None,
                None,
                None,
            ],
        );
        assert_eq!(board.best_per_difficulty()[0], Some(0));
    }

    #[test]
    fn malformed_load_falls_back_to_fillers() {
        // Wrong length
        let board = HighScoreBoard::from_entries(vec![ScoreEntry { seconds: 9, difficulty: None }]);
        assert_eq!(times(&board), vec![20, 50, 50, 80, 135]);
        // Unsorted
        let board = board_with([50, 20, 50, 80, 135], [None; BOARD_SIZE]);
        assert_eq!(times(&board), vec![20, 50, 50, 80, 135]);
    }

    #[test]
    fn clock_formats_zero_padded() {
        assert_eq!(format_clock(0), "00h:00m:00s");
        assert_eq!(format_clock(75), "00h:01m:15s");
        assert_eq!(format_clock(3661), "01h:01m:01s");
    }

    #[test]
    fn clock_hours_wrap_at_24() {
        assert_eq!(format_clock(24 * 3600 + 61), "00h:01m:01s");
    }

    #[test]
    fn clock_round_trips_modulo_a_day() {
        for s in [0, 59, 60, 3599, 3600, 86399, 86400, 90061] {
            assert_eq!(parse_clock(&format_clock(s)), Some(s % 86400));
        }
    }

    #[test]
    fn clock_rejects_malformed_text() {
        assert_eq!(parse_clock("garbage"), None);
        assert_eq!(parse_clock("00h:00m"), None);
        assert_eq!(parse_clock("0h:00m:00s"), None);
        assert_eq!(parse_clock("00h:00m:00s:00s"), None);
    }
}
