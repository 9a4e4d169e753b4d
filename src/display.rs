//! Stateless text rendering of pieces, players, boards and game listings.

use crate::api::JsonObject;
use crate::gobblet::{BOARD_SIZE, Board, GameSummary, Piece, Player};
use tracing::{debug, instrument};

/// Glyphs indexed by `[player - 1][size]`.
pub const GLYPHS: [[&str; 4]; 2] = [["▫", "◇", "◯", "□"], ["▪", "◆", "●", "■"]];

const EMPTY_CELL: &str = "   ";
const CELL_SEPARATOR: &str = "│";
const ROW_SEPARATOR: &str = " ───┼───┼───┼───\n";
const COLUMN_FOOTER: &str = "  0   1   2   3 ";
const PLAYER_SEPARATOR: &str = " & ";
const NO_WINNER: &str = "None";

/// Error raised while rendering.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RenderError {
    /// No glyph exists for this player and size.
    #[display("No glyph for player {} size {}", player, size)]
    UnknownGlyph {
        /// Player number.
        player: u8,
        /// Size rank.
        size: u8,
    },

    /// The game listing does not have the expected shape.
    #[display("Malformed game listing: {}", _0)]
    MalformedListing(String),
}

impl std::error::Error for RenderError {}

/// Formats a cell or pile slot as a 3-character token.
pub fn format_piece(cell: Option<Piece>) -> Result<String, RenderError> {
    let Some(piece) = cell else {
        return Ok(EMPTY_CELL.to_string());
    };

    let glyph = usize::from(piece.player)
        .checked_sub(1)
        .and_then(|player| GLYPHS.get(player))
        .and_then(|glyphs| glyphs.get(usize::from(piece.size)))
        .ok_or(RenderError::UnknownGlyph {
            player: piece.player,
            size: piece.size,
        })?;

    Ok(format!(" {} ", glyph))
}

/// Formats a player as `name: ` followed by their pile slots.
pub fn format_player(player: &Player) -> Result<String, RenderError> {
    let piles = player
        .piles()
        .iter()
        .map(|slot| format_piece(*slot))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(format!("{}: {}", player.nom(), piles.join(" ")))
}

/// Formats the board, top row first, with row labels and a column footer.
///
/// Input row 0 is labelled 3 and input row 3 is labelled 0.
pub fn format_board(board: &Board) -> Result<String, RenderError> {
    let rows = board
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| -> Result<String, RenderError> {
            let cells = row
                .iter()
                .map(|cell| format_piece(*cell))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("{}{}\n", BOARD_SIZE - 1 - index, cells.join(CELL_SEPARATOR)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(format!("{}{}", rows.join(ROW_SEPARATOR), COLUMN_FOOTER))
}

/// Formats both players, aligned on the longest name, above the board.
#[instrument(skip_all)]
pub fn format_game(board: &Board, players: &[Player; 2]) -> Result<String, RenderError> {
    let name_width = players
        .iter()
        .map(|player| player.nom().chars().count())
        .max()
        .unwrap_or(0);
    let slots = players
        .iter()
        .map(|player| player.piles().len())
        .max()
        .unwrap_or(0);
    debug!(name_width, slots, "Formatting game");

    let indices: String = (0..slots).map(|index| format!("   {}", index)).collect();
    let mut out = format!("{}{} \n", " ".repeat(name_width), indices);

    for player in players {
        let padding = name_width - player.nom().chars().count();
        out.push_str(&" ".repeat(padding));
        out.push_str(&format_player(player)?);
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&format_board(board)?);
    Ok(out)
}

fn format_summary(summary: &GameSummary) -> String {
    format!(
        "ID : {}\nDate : {}\nJoueurs : {}\nGagnant : {}",
        summary.id,
        summary.date,
        summary.joueurs.join(PLAYER_SEPARATOR),
        summary.gagnant.as_deref().unwrap_or(NO_WINNER)
    )
}

/// Formats the `parties` of a listing, in the order received.
#[instrument(skip_all)]
pub fn format_game_list(listing: &JsonObject) -> Result<String, RenderError> {
    let parties = listing
        .get("parties")
        .ok_or_else(|| RenderError::MalformedListing("missing `parties`".to_string()))?;
    let summaries: Vec<GameSummary> = serde_json::from_value(parties.clone())
        .map_err(|e| RenderError::MalformedListing(e.to_string()))?;
    debug!(count = summaries.len(), "Formatting game list");

    Ok(summaries
        .iter()
        .map(format_summary)
        .collect::<Vec<_>>()
        .join("\n\n"))
}
