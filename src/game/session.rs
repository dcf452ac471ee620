//! One game of Othello: a board plus the turn state machine.
//!
//! The board never knows whose turn it is; `Session` threads that state
//! through explicitly and reports forced passes and game over as events
//! rather than board mutations.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Board, Color, Coord, Score};
use crate::rules::{self, GameResult, InvalidMoveError};

/// Whose move it is, if anyone's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// The named color is to place a disc.
    ToMove(Color),
    /// Neither color can place; the game is decided.
    GameOver,
}

/// Observable outcome of one [`Session::play`] step, in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// A disc was placed and the bracketed runs flipped.
    Moved {
        player: Color,
        at: Coord,
        flipped: Vec<Coord>,
    },
    /// The named color had no legal placement and forfeited the turn.
    Passed(Color),
    /// The machine reached game over.
    Ended(GameResult),
}

/// Why [`Session::play`] rejected a placement. The session is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("the game is over")]
    Finished,

    #[error(transparent)]
    Rejected(#[from] InvalidMoveError),
}

/// Startup configuration for a [`Session`].
#[derive(Clone, Debug)]
pub struct SessionBuilder {
    first_player: Color,
    board: Board,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            first_player: Color::White,
            board: Board::new(),
        }
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color to move first. Defaults to White.
    pub fn first_player(mut self, color: Color) -> Self {
        self.first_player = color;
        self
    }

    /// Start from an arbitrary position instead of the standard layout,
    /// for mid-game analysis.
    pub fn board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Build the session, resolving the opening turn with the usual pass
    /// rules: a first player with no placement opens with the opponent to
    /// move, and a dead position opens in game over.
    #[must_use]
    pub fn build(self) -> Session {
        let turn = Session::resolve_opening(&self.board, self.first_player);
        Session {
            board: self.board,
            turn,
        }
    }
}

/// The turn/endgame state machine over the rules engine.
///
/// Owns the one mutable [`Board`] and the explicit [`Turn`] value; all
/// mutation funnels through [`Session::play`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    turn: Turn,
}

impl Session {
    /// Standard game: starting layout, White to move.
    #[must_use]
    pub fn new() -> Self {
        SessionBuilder::new().build()
    }

    /// The current position.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Whose move it is, if anyone's.
    #[must_use]
    pub const fn turn(&self) -> Turn {
        self.turn
    }

    /// True once neither color can move.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.turn, Turn::GameOver)
    }

    /// Current disc tally.
    #[must_use]
    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// Legal placements for the color to move, in row-major order;
    /// empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Coord> {
        match self.turn {
            Turn::ToMove(color) => rules::legal_moves(&self.board, color),
            Turn::GameOver => Vec::new(),
        }
    }

    /// Final result once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.turn {
            Turn::GameOver => Some(rules::winner(&self.board)),
            Turn::ToMove(_) => None,
        }
    }

    /// Play the current color's disc at `at`.
    ///
    /// On success the board is updated atomically and the turn advances:
    /// to the opponent, back to the mover after the opponent's forced
    /// pass, or to game over. The returned events record the step in
    /// order. On failure nothing changes; the caller re-solicits input.
    pub fn play(&mut self, at: Coord) -> Result<Vec<TurnEvent>, PlayError> {
        let Turn::ToMove(player) = self.turn else {
            return Err(PlayError::Finished);
        };

        let flipped = rules::apply_move(&mut self.board, at, player)?;
        debug!("{player} played {at}, flipping {} discs", flipped.len());

        let mut events = vec![TurnEvent::Moved {
            player,
            at,
            flipped,
        }];
        self.turn = Self::advance(&self.board, player, &mut events);
        Ok(events)
    }

    /// Turn resolution after `mover` placed: the opponent if they can
    /// move, the mover again after the opponent's forced pass, game over
    /// when both are blocked.
    fn advance(board: &Board, mover: Color, events: &mut Vec<TurnEvent>) -> Turn {
        let opponent = mover.opponent();
        if rules::has_legal_move(board, opponent) {
            return Turn::ToMove(opponent);
        }
        if rules::has_legal_move(board, mover) {
            debug!("{opponent} has no legal move, forced pass");
            events.push(TurnEvent::Passed(opponent));
            return Turn::ToMove(mover);
        }

        let result = rules::winner(board);
        debug!("game over: {result:?}");
        events.push(TurnEvent::Ended(result));
        Turn::GameOver
    }

    /// Opening-turn resolution used by the builder: same pass rules, but
    /// nothing observable has happened yet, so no events are emitted.
    fn resolve_opening(board: &Board, first: Color) -> Turn {
        if rules::has_legal_move(board, first) {
            Turn::ToMove(first)
        } else if rules::has_legal_move(board, first.opponent()) {
            Turn::ToMove(first.opponent())
        } else {
            Turn::GameOver
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
