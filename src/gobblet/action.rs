//! Moves sent to the server and the outcome of playing them.

use super::types::GameState;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A board coordinate, sent as `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Coord(pub usize, pub usize);

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}

/// Where the moved piece comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Origin {
    /// Top piece of one of the player's piles, sent as a bare index.
    Pile(usize),
    /// A piece already on the board, sent as `[x, y]`.
    Board(Coord),
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Pile(index) => write!(f, "pile {}", index),
            Origin::Board(coord) => write!(f, "{}", coord),
        }
    }
}

/// A move: an origin and a board destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Move {
    /// Piece to move.
    pub origin: Origin,
    /// Target cell.
    pub destination: Coord,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

/// Result of a successfully submitted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game goes on with this new state.
    Continued(GameState),
    /// The move ended the game.
    Finished {
        /// Winner as reported by the server.
        winner: String,
    },
}

impl MoveOutcome {
    /// Returns true if the game is over.
    pub fn is_finished(&self) -> bool {
        matches!(self, MoveOutcome::Finished { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pile_origin_is_bare_integer() {
        assert_eq!(serde_json::to_value(Origin::Pile(2)).unwrap(), json!(2));
    }

    #[test]
    fn test_board_origin_is_pair() {
        let origin = Origin::Board(Coord::new(1, 3));
        assert_eq!(serde_json::to_value(origin).unwrap(), json!([1, 3]));
    }

    #[test]
    fn test_origin_decodes_both_shapes() {
        let pile: Origin = serde_json::from_value(json!(0)).unwrap();
        let board: Origin = serde_json::from_value(json!([2, 0])).unwrap();
        assert_eq!(pile, Origin::Pile(0));
        assert_eq!(board, Origin::Board(Coord(2, 0)));
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(Origin::Pile(1), Coord(0, 3));
        assert_eq!(mv.to_string(), "pile 1 -> 0,3");
    }
}
