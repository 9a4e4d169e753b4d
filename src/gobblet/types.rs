//! Core domain types for a Gobblet game snapshot.
//!
//! The server is the source of truth for every value here; these types only
//! decode what it sends. Cells arrive either as `null`, `[]` or
//! `[player, size]`.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 4;

/// A Gobblet piece, as sent by the server.
///
/// `player` is 1 or 2 and `size` ranges from 0 (smallest) to 3 (largest).
/// Values are not range-checked on decode; the renderer rejects unknown
/// combinations when it looks up their glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
#[serde(from = "(u8, u8)", into = "(u8, u8)")]
pub struct Piece {
    /// Owning player (1 or 2).
    pub player: u8,
    /// Size rank (0-3).
    pub size: u8,
}

impl From<(u8, u8)> for Piece {
    fn from((player, size): (u8, u8)) -> Self {
        Self { player, size }
    }
}

impl From<Piece> for (u8, u8) {
    fn from(piece: Piece) -> Self {
        (piece.player, piece.size)
    }
}

/// A cell or pile slot as it appears on the wire.
type WireCell = Option<Vec<u8>>;

fn piece_from_wire(cell: WireCell) -> Result<Option<Piece>, String> {
    match cell.as_deref() {
        None | Some([]) => Ok(None),
        Some(&[player, size]) => Ok(Some(Piece::new(player, size))),
        Some(other) => Err(format!(
            "expected an empty cell or [player, size], got {} values",
            other.len()
        )),
    }
}

fn deserialize_slots<'de, D>(deserializer: D) -> Result<Vec<Option<Piece>>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<WireCell>::deserialize(deserializer)?
        .into_iter()
        .map(piece_from_wire)
        .collect::<Result<_, _>>()
        .map_err(D::Error::custom)
}

/// The 4x4 board. Row 0 is the top row as displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "Vec<Vec<WireCell>>")]
pub struct Board {
    rows: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board from its rows.
    pub fn new(rows: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { rows }
    }

    /// Returns the rows in server order.
    pub fn rows(&self) -> &[[Option<Piece>; BOARD_SIZE]; BOARD_SIZE] {
        &self.rows
    }

    /// Gets the piece at the given row and column, if any.
    pub fn get(&self, row: usize, col: usize) -> Option<Piece> {
        self.rows.get(row).and_then(|r| r.get(col)).copied().flatten()
    }
}

impl TryFrom<Vec<Vec<WireCell>>> for Board {
    type Error = String;

    fn try_from(matrix: Vec<Vec<WireCell>>) -> Result<Self, Self::Error> {
        if matrix.len() != BOARD_SIZE {
            return Err(format!(
                "board must have {} rows, got {}",
                BOARD_SIZE,
                matrix.len()
            ));
        }

        let mut rows = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (row_index, row) in matrix.into_iter().enumerate() {
            if row.len() != BOARD_SIZE {
                return Err(format!(
                    "board row {} must have {} cells, got {}",
                    row_index,
                    BOARD_SIZE,
                    row.len()
                ));
            }
            for (col_index, cell) in row.into_iter().enumerate() {
                rows[row_index][col_index] = piece_from_wire(cell)?;
            }
        }

        Ok(Self { rows })
    }
}

/// A player and the pieces still waiting in their piles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters, new)]
pub struct Player {
    /// Display name.
    nom: String,
    /// Top piece of each pile, in pile order. Exhausted piles are `None`.
    #[serde(deserialize_with = "deserialize_slots")]
    piles: Vec<Option<Piece>>,
}

/// Snapshot of a game as returned by the server.
///
/// Decoding ignores any other keys of the response body, which is how the
/// `id`, `plateau` and `joueurs` projection is performed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters, new)]
pub struct GameState {
    /// Game identifier.
    id: String,
    /// Board.
    plateau: Board,
    /// Both players, player 1 first.
    joueurs: [Player; 2],
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn empty_matrix() -> serde_json::Value {
        json!([[[], [], [], []], [[], [], [], []], [[], [], [], []], [[], [], [], []]])
    }

    #[test]
    fn test_board_decodes_empty_and_occupied_cells() {
        let board: Board = serde_json::from_value(json!([
            [[1, 0], [], null, []],
            [[], [], [], []],
            [[], [], [], [2, 3]],
            [[], [], [], []]
        ]))
        .unwrap();

        assert_eq!(board.get(0, 0), Some(Piece::new(1, 0)));
        assert_eq!(board.get(0, 2), None);
        assert_eq!(board.get(2, 3), Some(Piece::new(2, 3)));
        assert_eq!(board.get(4, 0), None);
    }

    #[test]
    fn test_board_rejects_wrong_row_count() {
        let result: Result<Board, _> = serde_json::from_value(json!([[[], [], [], []]]));
        assert!(result.is_err());
    }

    #[test]
    fn test_board_rejects_short_row() {
        let result: Result<Board, _> = serde_json::from_value(json!([
            [[], [], [], []],
            [[], [], []],
            [[], [], [], []],
            [[], [], [], []]
        ]));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("row 1"), "unexpected error: {err}");
    }

    #[test]
    fn test_cell_rejects_three_values() {
        let result: Result<Board, _> = serde_json::from_value(json!([
            [[1, 2, 3], [], [], []],
            [[], [], [], []],
            [[], [], [], []],
            [[], [], [], []]
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_game_state_requires_two_players() {
        let result: Result<GameState, _> = serde_json::from_value(json!({
            "id": "g1",
            "plateau": empty_matrix(),
            "joueurs": [{"nom": "A", "piles": []}]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_game_state_ignores_extra_keys() {
        let state: GameState = serde_json::from_value(json!({
            "id": "g1",
            "plateau": empty_matrix(),
            "joueurs": [
                {"nom": "A", "piles": [[1, 3], [1, 3], []]},
                {"nom": "B", "piles": [[2, 3], null, [2, 3]]}
            ],
            "gagnant": null
        }))
        .unwrap();

        assert_eq!(state.id(), "g1");
        assert_eq!(state.joueurs()[0].piles()[2], None);
        assert_eq!(state.joueurs()[1].piles()[0], Some(Piece::new(2, 3)));
    }

    #[test]
    fn test_piece_serializes_as_pair() {
        assert_eq!(serde_json::to_value(Piece::new(2, 1)).unwrap(), json!([2, 1]));
    }
}
