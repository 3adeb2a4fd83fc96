//! Input source and presentation adapter
//!
//! The simulation core only ever sees [`ControlEvent`]s going in and
//! [`Snapshot`]s coming out; these traits are that seam. The terminal
//! implementation lives in [`terminal`]; tests drive the core with scripted
//! events instead.

use std::io;

use crate::sim::{ControlEvent, GamePhase, Snapshot};

pub mod terminal;

pub use terminal::{TerminalInput, TerminalPresenter};

/// Produces the control events that arrived since the last poll.
///
/// Non-blocking: a poll drains everything pending and returns immediately.
/// The current phase is passed in because some physical inputs only map to a
/// control event in certain phases (Escape quits only on the game-over
/// screen).
pub trait InputSource {
    fn poll_events(&mut self, phase: GamePhase) -> io::Result<Vec<ControlEvent>>;
}

/// Draws one frame from a read-only snapshot of the match.
pub trait Presenter {
    fn present(&mut self, snapshot: &Snapshot) -> io::Result<()>;
}
