//! The session controller.
//!
//! `Session` is the single owner of a live game. Input sources call
//! `dispatch` with one command at a time; renderers read `snapshot`. Every
//! state change goes through `rules::apply_move` / `rules::apply_turn` or a
//! reset, so there is no other path to mutate the board.
//!
//! ## Sessions and resets
//!
//! Each reset generates a new board from the same RNG stream, bumps the
//! session number and clears the command history. The cosmetic background
//! survives resets.
//!
//! ```
//! use bee_grid::core::{BoardConfig, Command};
//! use bee_grid::session::Session;
//!
//! let mut session = Session::new(BoardConfig::default(), 42).unwrap();
//! let outcome = session.dispatch(Command::TurnRight);
//! assert!(outcome.notice.is_none());
//! ```

use im::Vector;
use tracing::{debug, info};

use crate::background::{request_background, BackgroundProvider, ImageRef};
use crate::core::{
    BoardConfig, Command, CommandRecord, ConfigError, GameRng, GameRngState, GameState,
    MoveDirection, Turn,
};
use crate::rules::{
    apply_move, apply_turn, generate_validated, Events, GameEvent, Notice, Transition,
};
use crate::view::Snapshot;

/// What a dispatched command did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Events in the order they happened.
    pub events: Events,
    /// Advisory notice for the presentation layer, if any.
    pub notice: Option<Notice>,
}

impl Outcome {
    fn from_events(events: Events) -> Self {
        let notice = events.iter().find_map(GameEvent::notice);
        Self { events, notice }
    }

    /// Check whether the command won the game.
    #[must_use]
    pub fn won(&self) -> bool {
        self.events.contains(&GameEvent::Won)
    }
}

/// Controller owning one game between resets.
#[derive(Clone, Debug)]
pub struct Session {
    config: BoardConfig,
    rng: GameRng,
    state: GameState,
    background: Option<ImageRef>,
    history: Vector<CommandRecord>,
    session: u32,
}

impl Session {
    /// Start a session with a deterministic seed.
    pub fn new(config: BoardConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Start a session seeded from entropy.
    pub fn from_entropy(config: BoardConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Resume board generation from a saved RNG state.
    pub fn from_rng_state(config: BoardConfig, rng: &GameRngState) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::from_state(rng))
    }

    fn with_rng(config: BoardConfig, mut rng: GameRng) -> Result<Self, ConfigError> {
        let config = config.build()?;
        let state = generate_validated(&config, &mut rng).into_state();
        info!(
            seed = rng.seed(),
            size = config.size,
            honey = state.total(),
            "session started"
        );

        Ok(Self {
            config,
            rng,
            state,
            background: None,
            history: Vector::new(),
            session: 1,
        })
    }

    // === Commands ===

    /// Apply one command.
    ///
    /// Never fails: rejected moves and commands after a win come back as
    /// events, with a notice where the player should be told.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let transition = match command {
            Command::MoveForward => apply_move(self.take_state(), MoveDirection::Forward),
            Command::MoveBackward => apply_move(self.take_state(), MoveDirection::Backward),
            Command::TurnLeft => apply_turn(self.take_state(), Turn::Left),
            Command::TurnRight => apply_turn(self.take_state(), Turn::Right),
            Command::Reset => return self.reset(),
        };

        let sequence = self.history.len() as u32;
        self.history
            .push_back(CommandRecord::new(self.session, sequence, command));

        self.commit(command, transition)
    }

    /// Move the live state out for a transition; `commit` puts the next one back.
    fn take_state(&mut self) -> GameState {
        std::mem::replace(&mut self.state, GameState::vacant())
    }

    fn commit(&mut self, command: Command, transition: Transition) -> Outcome {
        let Transition { state, events } = transition;
        self.state = state;

        let outcome = Outcome::from_events(events);
        debug!(
            session = self.session,
            %command,
            position = %self.state.agent().position,
            facing = %self.state.agent().facing,
            collected = self.state.collected(),
            notice = ?outcome.notice,
            "command applied"
        );
        if outcome.won() {
            info!(session = self.session, "session won");
        }
        outcome
    }

    /// Generate a new board and start the next session.
    ///
    /// Discards the board, bee, counters, status and history. Keeps the
    /// background.
    pub fn reset(&mut self) -> Outcome {
        self.state = generate_validated(&self.config, &mut self.rng).into_state();
        self.session += 1;
        self.history.clear();
        info!(session = self.session, honey = self.state.total(), "session reset");

        let mut events = Events::new();
        events.push(GameEvent::Reset {
            session: self.session,
        });
        Outcome::from_events(events)
    }

    // === Background ===

    /// Replace the cosmetic background.
    pub fn set_background(&mut self, background: Option<ImageRef>) {
        self.background = background;
    }

    #[must_use]
    pub fn background(&self) -> Option<&ImageRef> {
        self.background.as_ref()
    }

    /// Ask a provider for a new background.
    ///
    /// On failure the current background is kept. Returns whether it
    /// changed.
    pub fn refresh_background<P>(&mut self, provider: &P, prompt: Option<&str>) -> bool
    where
        P: BackgroundProvider + ?Sized,
    {
        match request_background(provider, prompt) {
            Some(image) => {
                self.background = Some(image);
                true
            }
            None => false,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Render-ready copy of the current session.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, self.background.as_ref())
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Session number, starting at 1 and bumped by each reset.
    #[must_use]
    pub fn session_number(&self) -> u32 {
        self.session
    }

    /// Commands dispatched since the last reset.
    #[must_use]
    pub fn history(&self) -> &Vector<CommandRecord> {
        &self.history
    }

    /// Whether on-screen controls should accept input.
    #[must_use]
    pub fn controls_enabled(&self) -> bool {
        !self.state.is_won()
    }

    /// RNG state, for reproducing the next boards.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Facing, Position, Status};

    #[test]
    fn test_new_session() {
        let session = Session::new(BoardConfig::default(), 42).unwrap();

        assert_eq!(session.session_number(), 1);
        assert_eq!(session.state().total(), 4);
        assert_eq!(session.state().agent().position, Position::new(0, 4));
        assert_eq!(session.state().agent().facing, Facing::North);
        assert!(session.history().is_empty());
        assert!(session.controls_enabled());
        assert!(session.background().is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Session::new(BoardConfig::new().with_random_honey(0), 1);
        assert_eq!(result.unwrap_err(), ConfigError::NoHoney);
    }

    #[test]
    fn test_dispatch_records_history() {
        let mut session = Session::new(BoardConfig::default(), 42).unwrap();
        session.dispatch(Command::TurnRight);
        session.dispatch(Command::MoveForward);

        let history: Vec<_> = session.history().iter().cloned().collect();
        assert_eq!(
            history,
            vec![
                CommandRecord::new(1, 0, Command::TurnRight),
                CommandRecord::new(1, 1, Command::MoveForward),
            ]
        );
    }

    #[test]
    fn test_dispatch_matches_direct_transitions() {
        let mut session = Session::new(BoardConfig::default(), 21).unwrap();
        let mut expected = session.state().clone();

        for command in [
            Command::MoveBackward,
            Command::MoveForward,
            Command::TurnRight,
            Command::MoveForward,
            Command::TurnLeft,
        ] {
            expected = match command {
                Command::MoveForward => apply_move(expected, MoveDirection::Forward).state,
                Command::MoveBackward => apply_move(expected, MoveDirection::Backward).state,
                Command::TurnLeft => apply_turn(expected, Turn::Left).state,
                Command::TurnRight => apply_turn(expected, Turn::Right).state,
                Command::Reset => expected,
            };
            session.dispatch(command);

            assert_eq!(session.state(), &expected);
            assert_eq!(session.state().board().size(), 5);
        }
    }

    #[test]
    fn test_boundary_notice() {
        let mut session = Session::new(BoardConfig::default(), 42).unwrap();
        let outcome = session.dispatch(Command::MoveBackward);

        assert_eq!(outcome.notice, Some(Notice::Boundary));
        assert_eq!(session.state().agent().position, Position::new(0, 4));
    }

    #[test]
    fn test_reset_keeps_background() {
        let mut session = Session::new(BoardConfig::default(), 42).unwrap();
        session.set_background(Some(ImageRef::new("map.png")));
        session.dispatch(Command::TurnRight);

        let outcome = session.dispatch(Command::Reset);

        assert_eq!(outcome.events.as_slice(), &[GameEvent::Reset { session: 2 }]);
        assert_eq!(session.session_number(), 2);
        assert!(session.history().is_empty());
        assert_eq!(session.state().agent().facing, Facing::North);
        assert_eq!(session.state().collected(), 0);
        assert_eq!(session.state().status(), Status::Playing);
        assert_eq!(session.background(), Some(&ImageRef::new("map.png")));
    }

    #[test]
    fn test_refresh_background_failure_keeps_current() {
        let mut session = Session::new(BoardConfig::default(), 42).unwrap();
        session.set_background(Some(ImageRef::new("old.png")));

        assert!(!session.refresh_background(&crate::background::NoBackground, None));
        assert_eq!(session.background(), Some(&ImageRef::new("old.png")));

        let provider = |_: &str| -> Result<ImageRef, crate::background::BackgroundError> {
            Ok(ImageRef::new("new.png"))
        };
        assert!(session.refresh_background(&provider, None));
        assert_eq!(session.snapshot().background, Some(ImageRef::new("new.png")));
    }

    #[test]
    fn test_same_seed_same_sessions() {
        let mut a = Session::new(BoardConfig::default(), 99).unwrap();
        let mut b = Session::new(BoardConfig::default(), 99).unwrap();
        assert_eq!(a.state(), b.state());

        a.reset();
        b.reset();
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_resume_from_rng_state() {
        let mut session = Session::new(BoardConfig::default(), 5).unwrap();
        let saved = session.rng_state();

        session.reset();
        let next = session.state().clone();

        let mut resumed = Session::from_rng_state(BoardConfig::default(), &saved).unwrap();
        // from_rng_state generates its first board from the saved stream
        assert_eq!(resumed.state(), &next);
        resumed.reset();
        assert_eq!(resumed.state().board().count(Cell::Honey), 4);
    }
}
