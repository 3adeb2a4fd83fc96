//! Terminal input and rendering via crossterm
//!
//! Thin presentation glue: raw-mode keyboard polling mapped onto the core's
//! control events, and a cell-grid projection of the playfield. None of this
//! is read by the simulation.

use std::io::{self, Stdout, Write, stdout};

use crossterm::event::{
    Event, KeyCode, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags, poll, read,
};
use crossterm::style::Print;
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode, size, supports_keyboard_enhancement,
};
use crossterm::{cursor, execute, queue};

use crate::config::Config;
use crate::sim::{ControlEvent, GamePhase, Snapshot};
use crate::ui;

use super::{InputSource, Presenter};

/// Raw-mode/alternate-screen session guard.
///
/// Restores the terminal on drop so a panic or early return never leaves the
/// shell in raw mode.
pub struct TerminalGuard {
    release_events: bool,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;

        // Key release reporting needs the kitty keyboard protocol
        let release_events = supports_keyboard_enhancement().unwrap_or(false);
        if release_events {
            execute!(
                stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        log::info!("terminal session started (release events: {release_events})");
        Ok(Self { release_events })
    }

    /// Whether the terminal reports key releases
    pub fn release_events(&self) -> bool {
        self.release_events
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.release_events {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        }
        let _ = execute!(stdout(), LeaveAlternateScreen, cursor::Show);
        let _ = disable_raw_mode();
    }
}

/// Polls without releases must infer them from key-repeat silence; this many
/// quiet polls (~1/3 s at 60 Hz) rides out the initial repeat delay.
const REPEAT_GRACE_POLLS: u8 = 20;

/// Keyboard input mapped to control events
pub struct TerminalInput {
    /// Whether the terminal delivers genuine key-release events
    release_events: bool,
    /// Movement key currently believed held (repeat-inference mode only)
    held: Option<ControlEvent>,
    /// Polls since the held key last repeated
    quiet_polls: u8,
}

impl TerminalInput {
    pub fn new(release_events: bool) -> Self {
        Self {
            release_events,
            held: None,
            quiet_polls: 0,
        }
    }

    fn movement_begin(code: KeyCode) -> Option<ControlEvent> {
        match code {
            KeyCode::Char('w') | KeyCode::Char('W') => Some(ControlEvent::MoveUpBegin),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(ControlEvent::MoveDownBegin),
            _ => None,
        }
    }

    fn movement_end(code: KeyCode) -> Option<ControlEvent> {
        match code {
            KeyCode::Char('w') | KeyCode::Char('W') => Some(ControlEvent::MoveUpEnd),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(ControlEvent::MoveDownEnd),
            _ => None,
        }
    }

    /// End event matching a begin event
    fn end_for(begin: ControlEvent) -> ControlEvent {
        match begin {
            ControlEvent::MoveUpBegin => ControlEvent::MoveUpEnd,
            _ => ControlEvent::MoveDownEnd,
        }
    }
}

impl InputSource for TerminalInput {
    fn poll_events(&mut self, phase: GamePhase) -> io::Result<Vec<ControlEvent>> {
        let mut events = Vec::new();
        let mut movement_seen = false;

        while poll(std::time::Duration::ZERO)? {
            let Event::Key(key) = read()? else { continue };

            match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => match key.code {
                    KeyCode::Char('q') => events.push(ControlEvent::Quit),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        events.push(ControlEvent::Quit);
                    }
                    // Escape exits only from the game-over screen
                    KeyCode::Esc if phase == GamePhase::GameOver => {
                        events.push(ControlEvent::Quit);
                    }
                    KeyCode::Char(' ') => events.push(ControlEvent::StartOrRestart),
                    code => {
                        if let Some(begin) = Self::movement_begin(code) {
                            movement_seen = true;
                            if self.held != Some(begin) {
                                events.push(begin);
                                self.held = Some(begin);
                            }
                            self.quiet_polls = 0;
                        }
                    }
                },
                KeyEventKind::Release => {
                    if let Some(end) = Self::movement_end(key.code) {
                        events.push(end);
                        self.held = None;
                    }
                }
            }
        }

        // Without release reporting, a held key shows up as a repeat stream;
        // treat sustained silence as the release.
        if !self.release_events {
            if let Some(begin) = self.held {
                if movement_seen {
                    self.quiet_polls = 0;
                } else {
                    self.quiet_polls = self.quiet_polls.saturating_add(1);
                    if self.quiet_polls >= REPEAT_GRACE_POLLS {
                        events.push(Self::end_for(begin));
                        self.held = None;
                        self.quiet_polls = 0;
                    }
                }
            }
        }

        Ok(events)
    }
}

/// Cell-grid renderer for the playfield
pub struct TerminalPresenter {
    out: Stdout,
    config: Config,
}

impl TerminalPresenter {
    pub fn new(config: Config) -> Self {
        Self {
            out: stdout(),
            config,
        }
    }

    fn draw_centered_lines(&mut self, lines: &[String], cols: u16, rows: u16) -> io::Result<()> {
        let top = rows.saturating_sub(lines.len() as u16) / 2;
        for (i, line) in lines.iter().enumerate() {
            let col = cols.saturating_sub(line.len() as u16) / 2;
            queue!(
                self.out,
                cursor::MoveTo(col, top + i as u16),
                Print(line)
            )?;
        }
        Ok(())
    }

    fn draw_playfield(&mut self, snapshot: &Snapshot, cols: u16, rows: u16) -> io::Result<()> {
        let sx = cols as f32 / self.config.field_width;
        let sy = rows as f32 / self.config.field_height;
        let to_col = |x: f32| ((x * sx) as u16).min(cols.saturating_sub(1));
        let to_row = |y: f32| ((y * sy) as u16).min(rows.saturating_sub(1));

        // Dashed net down the middle
        let net_col = cols / 2;
        for row in (0..rows).step_by(2) {
            queue!(self.out, cursor::MoveTo(net_col, row), Print('\u{2506}'))?;
        }

        // Paddles
        for paddle in [&snapshot.left_paddle, &snapshot.right_paddle] {
            let col = to_col(paddle.x);
            let top = to_row(paddle.y);
            let bottom = to_row(paddle.y + paddle.height).max(top + 1);
            for row in top..bottom {
                queue!(self.out, cursor::MoveTo(col, row), Print('\u{2588}'))?;
            }
        }

        // Ball
        queue!(
            self.out,
            cursor::MoveTo(to_col(snapshot.ball_pos.x), to_row(snapshot.ball_pos.y)),
            Print('\u{25cf}')
        )?;

        // Scores at the quarter points
        queue!(
            self.out,
            cursor::MoveTo(cols / 4, 0),
            Print(snapshot.left_score),
            cursor::MoveTo(cols * 3 / 4, 0),
            Print(snapshot.right_score)
        )?;
        Ok(())
    }
}

impl Presenter for TerminalPresenter {
    fn present(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        let (cols, rows) = size()?;
        queue!(self.out, Clear(ClearType::All))?;

        match snapshot.phase {
            GamePhase::NotStarted => {
                let lines = ui::start_screen_lines(&self.config);
                self.draw_centered_lines(&lines, cols, rows)?;
            }
            GamePhase::GameOver => {
                let lines = ui::game_over_lines(snapshot, &self.config);
                self.draw_centered_lines(&lines, cols, rows)?;
            }
            GamePhase::Playing => {
                self.draw_playfield(snapshot, cols, rows)?;
            }
        }

        self.out.flush()
    }
}
