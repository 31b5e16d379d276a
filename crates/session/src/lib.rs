pub mod session;
pub mod status;

// Re-export the session surface the GUI works against
pub use session::{GameSession, IllegalMove, MoveRecord};
pub use status::{DrawReason, GameStatus};
