//! Gobblet client library
//!
//! Talks to the remote Gobblet game server and renders its games as text.
//! The server owns every rule and every piece of state; this crate only
//! shapes requests, classifies responses and formats what comes back.
//!
//! # Architecture
//!
//! - **API**: authenticated JSON requests and the four game operations
//! - **Gobblet**: typed board, player and move data
//! - **Display**: pure text rendering of boards, players and game listings
//! - **Prompt**: interactive move entry
//! - **Config**: server location and player secret
//!
//! # Example
//!
//! ```no_run
//! use gobblet_client::{Credentials, GobbletClient, format_game};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let credentials = Credentials::new("alice".to_string(), "s3cret".to_string());
//! let client = GobbletClient::new("https://pax.ulaval.ca/gobblet/api/", credentials);
//!
//! let state = client.start_game().await?;
//! println!("{}", format_game(state.plateau(), state.joueurs())?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod api;
mod config;
mod display;
mod gobblet;
mod prompt;

// Crate-level exports - API client
pub use api::{ApiError, Credentials, GobbletClient, JsonObject, MessageSource, Transport, classify};

// Crate-level exports - Configuration
pub use config::{ClientConfig, ConfigError, DEFAULT_BASE_URL, SECRET_ENV_VAR};

// Crate-level exports - Rendering
pub use display::{
    GLYPHS, RenderError, format_board, format_game, format_game_list, format_piece, format_player,
};

// Crate-level exports - Game data
pub use gobblet::{
    BOARD_SIZE, Board, Coord, GameState, GameSummary, Move, MoveOutcome, Origin, Piece, Player,
};

// Crate-level exports - Move entry
pub use prompt::{InputError, parse_coord, parse_origin, read_move};
