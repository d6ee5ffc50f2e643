/// High-score persistence.
///
/// One `score=<clock>,<tag>` line per board row, top rank first, with
/// the clock in the same `HHh:MMm:SSs` shape the table displays; the
/// tag is `E`/`M`/`H` or `-` for a filler row. Anything that fails to
/// parse falls back to the filler board, so a corrupt file can never
/// break startup.

use std::path::PathBuf;

use crate::domain::wordgame::Difficulty;

use super::score::{self, HighScoreBoard, ScoreEntry, BOARD_SIZE};

const SCORES_FILE: &str = "scores.dat";

fn scores_dir() -> PathBuf {
    // 1. Exe directory, when writable (portable installs)
    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            let probe = parent.join(".write_test_clockout");
            if std::fs::write(&probe, "").is_ok() {
                let _ = std::fs::remove_file(&probe);
                return parent.to_path_buf();
            }
        }
    }

    // 2. XDG data home for system installs
    if let Ok(home) = std::env::var("HOME") {
        let xdg = PathBuf::from(&home).join(".local/share/clockout");
        if std::fs::create_dir_all(&xdg).is_ok() {
            return xdg;
        }
    }

    // 3. Fallback to CWD
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn scores_path() -> PathBuf {
    scores_dir().join(SCORES_FILE)
}

fn tag_str(difficulty: Option<Difficulty>) -> &'static str {
    match difficulty {
        None => "-",
        Some(Difficulty::Easy) => "E",
        Some(Difficulty::Medium) => "M",
        Some(Difficulty::Hard) => "H",
    }
}

fn parse_tag(s: &str) -> Option<Option<Difficulty>> {
    match s {
        "-" => Some(None),
        "E" => Some(Some(Difficulty::Easy)),
        "M" => Some(Some(Difficulty::Medium)),
        "H" => Some(Some(Difficulty::Hard)),
        _ => None,
    }
}

fn serialize(board: &HighScoreBoard) -> String {
    let mut out = String::with_capacity(128);
    for entry in board.entries() {
        out.push_str(&format!(
            "score={},{}\n",
            score::format_clock(entry.seconds),
            tag_str(entry.difficulty)
        ));
    }
    out
}

fn parse_board(content: &str) -> Option<HighScoreBoard> {
    let mut entries: Vec<ScoreEntry> = Vec::with_capacity(BOARD_SIZE);
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value = line.strip_prefix("score=")?;
        let (clock, tag) = value.split_once(',')?;
        entries.push(ScoreEntry {
            seconds: score::parse_clock(clock)?,
            difficulty: parse_tag(tag)?,
        });
    }
    if entries.len() != BOARD_SIZE {
        return None;
    }
    Some(HighScoreBoard::from_entries(entries))
}

/// Load the board from disk, or a filler board when there is none.
pub fn load_board() -> HighScoreBoard {
    let candidates = [scores_path(), PathBuf::from(SCORES_FILE)];
    for path in &candidates {
        if let Ok(content) = std::fs::read_to_string(path) {
            if let Some(board) = parse_board(&content) {
                return board;
            }
        }
    }
    HighScoreBoard::with_fillers()
}

/// Persist the board. Called after every placing run.
pub fn save_board(board: &HighScoreBoard) -> Result<(), String> {
    std::fs::write(scores_path(), serialize(board)).map_err(|e| format!("Score save failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_text_round_trips() {
        let mut board = HighScoreBoard::with_fillers();
        board.record(33, Difficulty::Medium);
        board.record(15, Difficulty::Hard);

        let text = serialize(&board);
        let loaded = parse_board(&text).expect("serialized board parses");
        assert_eq!(loaded.entries(), board.entries());
    }

    #[test]
    fn filler_tags_survive_the_trip() {
        let board = HighScoreBoard::with_fillers();
        let loaded = parse_board(&serialize(&board)).unwrap();
        assert!(loaded.entries().iter().all(|e| e.difficulty.is_none()));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_board("").is_none());
        assert!(parse_board("score=00h:00m:12s,X\n").is_none());
        assert!(parse_board("best=00h:00m:12s,E\n").is_none());
        assert!(parse_board("score=12,E\n").is_none());
        // Too few rows
        assert!(parse_board("score=00h:00m:12s,E\n").is_none());
    }

    #[test]
    fn unsorted_file_degrades_to_fillers() {
        let text = "score=00h:01m:30s,E\nscore=00h:00m:10s,E\nscore=00h:00m:20s,E\n\
                    score=00h:00m:30s,E\nscore=00h:00m:40s,E\n";
        let board = parse_board(text).unwrap();
        assert!(board.entries().iter().all(|e| e.difficulty.is_none()));
    }
}
