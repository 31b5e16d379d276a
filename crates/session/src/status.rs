//! Game status projection
//!
//! Pure function of rules-engine state. Checkmate takes precedence over any
//! draw condition; all draw reasons are kept distinct here so collapsing them
//! into a single label stays a presentation decision.

use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{Chess, Color, EnPassantMode, Position};

/// Where the game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { in_check: bool },
    Checkmate { winner: Color },
    Draw(DrawReason),
}

/// Why a finished game is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    ThreefoldRepetition,
    FiftyMoveRule,
}

impl GameStatus {
    /// Checkmate and draw are terminal; only reset leaves them.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

/// Project engine state (plus the position-hash history kept by the session)
/// into a [`GameStatus`].
pub(crate) fn project(position: &Chess, history: &[Zobrist64]) -> GameStatus {
    if position.is_checkmate() {
        // The side to move is the one that got mated
        return GameStatus::Checkmate {
            winner: !position.turn(),
        };
    }

    if position.is_stalemate() {
        return GameStatus::Draw(DrawReason::Stalemate);
    }
    if position.is_insufficient_material() {
        return GameStatus::Draw(DrawReason::InsufficientMaterial);
    }
    if position.halfmoves() >= 100 {
        return GameStatus::Draw(DrawReason::FiftyMoveRule);
    }

    let current: Zobrist64 = position.zobrist_hash(EnPassantMode::Legal);
    let occurrences = history.iter().filter(|&&h| h == current).count();
    if occurrences >= 3 {
        return GameStatus::Draw(DrawReason::ThreefoldRepetition);
    }

    GameStatus::InProgress {
        in_check: position.is_check(),
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
