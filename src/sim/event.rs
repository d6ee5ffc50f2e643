/// Events emitted while advancing the game.
/// The main loop turns these into transient HUD notices.

#[derive(Clone, Debug)]
pub enum GameEvent {
    /// Player pressed into a desk that gates an unplayed mini-game.
    GateOpened,
    /// Player stepped into an open doorway; the fade-out has started.
    Boarding,
    /// The running fade reached full black.
    FadeFinished,
    /// The active mini-game just ended.
    PuzzleWon,
    PuzzleLost,
    /// Run complete; the clock froze at this many seconds.
    RunFinished { seconds: u32 },
    /// Outcome of handing the finished run to the score board.
    ScorePlaced { rank: usize },
    ScoreMissed,
}
