//! HTTP access to the Gobblet game server.

mod client;
mod credentials;
mod error;
mod transport;

pub use client::GobbletClient;
pub use credentials::Credentials;
pub use error::ApiError;
pub use transport::{JsonObject, MessageSource, Transport, classify};
