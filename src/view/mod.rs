//! What a renderer sees.
//!
//! `Snapshot` is a self-contained copy of everything needed to draw one
//! frame: cells, bee, counters, status and background. It is
//! `Serialize` so a host can ship it across a process boundary as JSON.
//!
//! `Toast` holds a rendered notice for a short while. Timing is entirely
//! the presentation layer's business; the engine only emits notice values.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::background::ImageRef;
use crate::core::{Agent, Cell, Facing, GameState, Position, Status};

/// How long a toast stays up by default.
pub const DEFAULT_TOAST_TTL: Duration = Duration::from_secs(3);

/// Minimum jar fill shown once the game has any honey, so the jar never
/// looks broken.
const MIN_JAR_FILL: u32 = 5;

/// Render-ready copy of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub size: usize,
    /// Rows top to bottom.
    pub cells: Vec<Vec<Cell>>,
    pub agent: Agent,
    pub collected: u32,
    pub total: u32,
    pub status: Status,
    pub background: Option<ImageRef>,
}

impl Snapshot {
    /// Capture a state together with the session's background.
    #[must_use]
    pub fn capture(state: &GameState, background: Option<&ImageRef>) -> Self {
        Self {
            size: state.board().size(),
            cells: state.board().rows(),
            agent: state.agent(),
            collected: state.collected(),
            total: state.total(),
            status: state.status(),
            background: background.cloned(),
        }
    }

    /// Cell at a position, if on the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.y).and_then(|row| row.get(pos.x)).copied()
    }

    /// Check whether the bee is drawn on this cell.
    #[must_use]
    pub fn has_agent(&self, pos: Position) -> bool {
        self.agent.position == pos
    }

    /// Honey jar fill level in percent.
    ///
    /// Zero when there is no honey at all; otherwise the collected share,
    /// clamped to at least `MIN_JAR_FILL`.
    #[must_use]
    pub fn jar_fill_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.collected * 100 / self.total).max(MIN_JAR_FILL)
    }
}

/// Checkerboard shading for a cell.
#[must_use]
pub fn is_odd_cell(pos: Position) -> bool {
    (pos.x + pos.y) % 2 != 0
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            let line: String = row
                .iter()
                .enumerate()
                .map(|(x, cell)| {
                    if self.has_agent(Position::new(x, y)) {
                        match self.agent.facing {
                            Facing::North => '^',
                            Facing::East => '>',
                            Facing::South => 'v',
                            Facing::West => '<',
                        }
                    } else {
                        cell.glyph()
                    }
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        write!(f, "honey {}/{}", self.collected, self.total)?;
        if self.status == Status::Won {
            f.write_str(" WON")?;
        }
        Ok(())
    }
}

/// A notice on screen for a limited time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    shown_at: Instant,
    ttl: Duration,
}

impl Toast {
    /// Show `text` from `now` for `DEFAULT_TOAST_TTL`.
    #[must_use]
    pub fn new(text: impl Into<String>, now: Instant) -> Self {
        Self::with_ttl(text, now, DEFAULT_TOAST_TTL)
    }

    #[must_use]
    pub fn with_ttl(text: impl Into<String>, now: Instant, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            shown_at: now,
            ttl,
        }
    }

    #[must_use]
    pub fn is_visible(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < self.ttl
    }

    /// Time left on screen.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.ttl.saturating_sub(now.saturating_duration_since(self.shown_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;

    fn state() -> GameState {
        let mut board = Board::empty(3);
        board.set(Position::new(0, 2), Cell::Start);
        board.set(Position::new(2, 0), Cell::Flower);
        board.set(Position::new(1, 1), Cell::Honey);
        GameState::new(board, Agent::new(Position::new(0, 2), Facing::East)).unwrap()
    }

    #[test]
    fn test_capture() {
        let background = ImageRef::new("bg.png");
        let snap = Snapshot::capture(&state(), Some(&background));

        assert_eq!(snap.size, 3);
        assert_eq!(snap.cell(Position::new(1, 1)), Some(Cell::Honey));
        assert_eq!(snap.cell(Position::new(3, 0)), None);
        assert!(snap.has_agent(Position::new(0, 2)));
        assert_eq!(snap.background, Some(background));
    }

    #[test]
    fn test_jar_fill() {
        let mut snap = Snapshot::capture(&state(), None);
        assert_eq!(snap.jar_fill_percent(), 5);

        snap.total = 4;
        snap.collected = 1;
        assert_eq!(snap.jar_fill_percent(), 25);

        snap.collected = 4;
        assert_eq!(snap.jar_fill_percent(), 100);

        snap.total = 0;
        snap.collected = 0;
        assert_eq!(snap.jar_fill_percent(), 0);
    }

    #[test]
    fn test_checkerboard() {
        assert!(!is_odd_cell(Position::new(0, 0)));
        assert!(is_odd_cell(Position::new(1, 0)));
        assert!(!is_odd_cell(Position::new(1, 1)));
    }

    #[test]
    fn test_display() {
        let snap = Snapshot::capture(&state(), None);
        assert_eq!(snap.to_string(), "..F\n.h.\n>..\nhoney 0/1");
    }

    #[test]
    fn test_snapshot_json() {
        let snap = Snapshot::capture(&state(), None);
        let json = serde_json::to_value(&snap).unwrap();

        assert_eq!(json["collected"], 0);
        assert_eq!(json["status"], "Playing");
        assert_eq!(json["agent"]["facing"], "East");
        assert_eq!(json["cells"][1][1], "Honey");
        assert!(json["background"].is_null());
    }

    #[test]
    fn test_toast_expires() {
        let now = Instant::now();
        let toast = Toast::new("Oops", now);

        assert!(toast.is_visible(now));
        assert!(toast.is_visible(now + Duration::from_millis(2999)));
        assert!(!toast.is_visible(now + DEFAULT_TOAST_TTL));
        assert_eq!(toast.remaining(now + Duration::from_secs(1)), Duration::from_secs(2));
        assert_eq!(toast.remaining(now + Duration::from_secs(10)), Duration::ZERO);
    }
}
