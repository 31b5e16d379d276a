//! Owned game session
//!
//! Wraps the external rules engine together with the two pieces of UI-local
//! state (current selection, last accepted move). The engine remains the
//! single source of truth: the session never decides legality itself, it only
//! forwards gesture-level move attempts and reads the resulting state back.
//! Reset is expressed by constructing a fresh session value.

use std::collections::HashSet;

use shakmaty::san::SanPlus;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{Chess, Color, EnPassantMode, Move, Piece, Position, Role, Square};
use tracing::debug;

use crate::status::{self, GameStatus};

/// A move attempt the rules engine rejected. Engine state is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("illegal move")]
pub struct IllegalMove;

/// An accepted move, as the UI needs it: notation plus highlight endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// SAN notation, with check/mate suffix
    pub san: String,
    pub from: Square,
    pub to: Square,
}

/// One game of chess from the UI's point of view.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Current position, owned by the rules engine
    position: Chess,
    /// Position hash after every move, for threefold repetition detection
    history: Vec<Zobrist64>,
    /// Currently selected square (for click-to-move input)
    selection: Option<Square>,
    /// Legal destinations from the selected square
    legal_targets: HashSet<Square>,
    /// Endpoints of the most recent accepted move (for highlighting)
    last_move: Option<(Square, Square)>,
    /// Accepted moves in order
    moves: Vec<MoveRecord>,
    /// Piece a pawn promotes to when the gesture does not say otherwise
    promotion: Role,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Role::Queen)
    }
}

impl GameSession {
    /// Fresh session at the standard starting position.
    pub fn new(promotion: Role) -> Self {
        Self::from_position(Chess::default(), promotion)
    }

    /// Session over an arbitrary engine position.
    pub fn from_position(position: Chess, promotion: Role) -> Self {
        let initial_hash = position.zobrist_hash(EnPassantMode::Legal);
        Self {
            position,
            history: vec![initial_hash],
            selection: None,
            legal_targets: HashSet::new(),
            last_move: None,
            moves: Vec::new(),
            promotion,
        }
    }

    /// Click-path input: toggle, select, or attempt a move.
    ///
    /// Activating the selected square again clears the selection. Activating
    /// a square holding a piece of the side to move with at least one legal
    /// destination selects it. Anything else is a move attempt when a
    /// selection exists, and a no-op otherwise.
    pub fn activate_square(&mut self, sq: Square) {
        if self.status().is_over() {
            self.clear_selection();
            return;
        }

        if self.selection == Some(sq) {
            self.clear_selection();
            return;
        }

        let targets = self.targets_from(sq);
        if !targets.is_empty() && self.holds_piece_of_side_to_move(sq) {
            self.selection = Some(sq);
            self.legal_targets = targets;
            return;
        }

        if let Some(from) = self.selection {
            let _ = self.attempt_move(from, sq);
        }
    }

    /// Drag-start guard: a drag may only begin on a piece of the side to
    /// move while the game is in progress.
    pub fn can_drag_from(&self, sq: Square) -> bool {
        !self.status().is_over() && self.holds_piece_of_side_to_move(sq)
    }

    /// Drop-path input: attempt the dragged move, discarding the outcome.
    pub fn drop_move(&mut self, from: Square, to: Square) {
        let _ = self.attempt_move(from, to);
    }

    /// Ask the engine to perform `from` → `to`.
    ///
    /// When the pair is ambiguous (pawn promotion), the configured promotion
    /// role is chosen. Castling accepts the king's destination square as the
    /// target. Selection is cleared either way; on rejection the engine
    /// state and the last-move record are untouched.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, IllegalMove> {
        self.clear_selection();

        if self.status().is_over() {
            return Err(IllegalMove);
        }

        let turn = self.position.turn();
        let chosen = self
            .position
            .legal_moves()
            .iter()
            .find(|m| {
                m.from() == Some(from)
                    && gesture_target(m, turn) == to
                    && (m.promotion().is_none() || m.promotion() == Some(self.promotion))
            })
            .copied();

        let Some(mv) = chosen else {
            debug!(%from, %to, "move attempt rejected");
            return Err(IllegalMove);
        };

        let san = SanPlus::from_move(self.position.clone(), mv).to_string();
        let next = self.position.clone().play(mv).map_err(|_| IllegalMove)?;
        self.position = next;
        self.history
            .push(self.position.zobrist_hash(EnPassantMode::Legal));
        self.last_move = Some((from, to));

        let record = MoveRecord { san, from, to };
        debug!(san = %record.san, "move accepted");
        self.moves.push(record.clone());
        Ok(record)
    }

    /// Current status, checkmate taking precedence over draw conditions.
    pub fn status(&self) -> GameStatus {
        status::project(&self.position, &self.history)
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.position.board().piece_at(sq)
    }

    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    pub fn legal_targets(&self) -> &HashSet<Square> {
        &self.legal_targets
    }

    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn promotion(&self) -> Role {
        self.promotion
    }

    /// Engine position, read-only. The view layer paints from this.
    pub fn position(&self) -> &Chess {
        &self.position
    }

    fn clear_selection(&mut self) {
        self.selection = None;
        self.legal_targets.clear();
    }

    fn holds_piece_of_side_to_move(&self, sq: Square) -> bool {
        self.piece_at(sq)
            .is_some_and(|piece| piece.color == self.position.turn())
    }

    /// Gesture-level destinations of all legal moves starting on `sq`.
    fn targets_from(&self, sq: Square) -> HashSet<Square> {
        let turn = self.position.turn();
        self.position
            .legal_moves()
            .iter()
            .filter(|m| m.from() == Some(sq))
            .map(|m| gesture_target(m, turn))
            .collect()
    }
}

/// The square a user would click or drop on to perform `mv`.
///
/// For castling the engine encodes the rook, but the gesture targets the
/// king's destination square.
fn gesture_target(mv: &Move, turn: Color) -> Square {
    match mv.castling_side() {
        Some(side) => side.king_to(turn),
        None => mv.to(),
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
