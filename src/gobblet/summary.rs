//! Entries of the game listing.

use serde::Deserialize;

/// One past or ongoing game, as listed by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameSummary {
    /// Game identifier.
    pub id: String,
    /// Creation date, verbatim from the server.
    pub date: String,
    /// Player names.
    pub joueurs: Vec<String>,
    /// Winner name, if the game is over.
    #[serde(default)]
    pub gagnant: Option<String>,
}
