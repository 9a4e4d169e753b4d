//! Game operations offered by the Gobblet server.

use super::credentials::Credentials;
use super::error::ApiError;
use super::transport::{JsonObject, MessageSource, Transport};
use crate::gobblet::{Coord, GameState, Move, MoveOutcome, Origin};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

const LIST_GAMES_PATH: &str = "parties/";
const START_GAME_PATH: &str = "partie";
const FETCH_GAME_PATH: &str = "partie/";
const PLAY_MOVE_PATH: &str = "jouer/";

/// Body of a move request.
#[derive(Debug, Serialize)]
struct PlayMoveRequest<'a> {
    id: &'a str,
    origine: Origin,
    destination: Coord,
}

/// Client for the Gobblet game server.
#[derive(Debug, Clone)]
pub struct GobbletClient {
    transport: Transport,
    credentials: Credentials,
}

impl GobbletClient {
    /// Creates a client talking to `base_url` with the given credentials.
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self::with_transport(Transport::new(base_url), credentials)
    }

    /// Creates a client over an existing transport.
    pub fn with_transport(transport: Transport, credentials: Credentials) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    /// Gets the credentials used for every request.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Lists the player's games.
    ///
    /// The body is returned as decoded; its `parties` array is projected
    /// into summaries only when rendered.
    #[instrument(skip(self), fields(idul = %self.credentials.idul()))]
    pub async fn list_games(&self) -> Result<JsonObject, ApiError> {
        debug!("Listing games");
        self.transport
            .send(
                Method::GET,
                LIST_GAMES_PATH,
                &self.credentials,
                None,
                MessageSource::RawText,
            )
            .await
    }

    /// Starts a new game.
    #[instrument(skip(self), fields(idul = %self.credentials.idul()))]
    pub async fn start_game(&self) -> Result<GameState, ApiError> {
        info!("Starting new game");
        let body = self
            .transport
            .send(
                Method::POST,
                START_GAME_PATH,
                &self.credentials,
                None,
                MessageSource::RawText,
            )
            .await?;
        let state = project_state(body)?;
        info!(game_id = %state.id(), "Game started");
        Ok(state)
    }

    /// Fetches the current state of an existing game.
    #[instrument(skip(self), fields(idul = %self.credentials.idul()))]
    pub async fn fetch_game(&self, game_id: &str) -> Result<GameState, ApiError> {
        debug!("Fetching game");
        let path = format!("{}{}", FETCH_GAME_PATH, game_id);
        let body = self
            .transport
            .send(
                Method::GET,
                &path,
                &self.credentials,
                None,
                MessageSource::MessageField,
            )
            .await?;
        project_state(body)
    }

    /// Plays a move.
    ///
    /// A response naming a winner ends the game, even though it also
    /// carries a board and players.
    #[instrument(skip(self, mv), fields(idul = %self.credentials.idul(), mv = %mv))]
    pub async fn play_move(&self, game_id: &str, mv: &Move) -> Result<MoveOutcome, ApiError> {
        info!("Playing move");
        let request = PlayMoveRequest {
            id: game_id,
            origine: mv.origin,
            destination: mv.destination,
        };
        let payload = serde_json::to_value(&request).map_err(|e| ApiError::Decode(e.to_string()))?;

        let body = self
            .transport
            .send(
                Method::PUT,
                PLAY_MOVE_PATH,
                &self.credentials,
                Some(&payload),
                MessageSource::MessageField,
            )
            .await?;

        if let Some(winner) = winner(&body) {
            info!(winner = %winner, "Game over");
            return Ok(MoveOutcome::Finished { winner });
        }

        Ok(MoveOutcome::Continued(project_state(body)?))
    }
}

fn project_state(body: JsonObject) -> Result<GameState, ApiError> {
    serde_json::from_value(Value::Object(body)).map_err(|e| ApiError::Decode(e.to_string()))
}

fn winner(body: &JsonObject) -> Option<String> {
    body.get("gagnant").filter(|value| is_truthy(value)).map(|value| match value {
        Value::String(name) => name.clone(),
        other => other.to_string(),
    })
}

// Loose truthiness, as the service uses it for `gagnant`.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
