//! Gobblet game data as exchanged with the server.

mod action;
mod summary;
mod types;

pub use action::{Coord, Move, MoveOutcome, Origin};
pub use summary::GameSummary;
pub use types::{BOARD_SIZE, Board, GameState, Piece, Player};
