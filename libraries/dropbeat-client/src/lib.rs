//! Dropbeat Server Client
//!
//! HTTP client library for the Dropbeat playlist API.
//!
//! # Features
//!
//! - **Playlists**: list playlist uids, fetch a playlist with its tracks
//! - **Tracks**: add a track to a playlist
//! - **Backend**: implements `dropbeat_core::PlaylistBackend`
//!
//! # Example
//!
//! ```ignore
//! use dropbeat_client::{ClientConfig, DropbeatClient};
//! use dropbeat_core::PlaylistId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DropbeatClient::new(ClientConfig::new("https://dropbeat.example.com"))?;
//!
//!     for uid in client.list_playlists().await? {
//!         let playlist = client.fetch_playlist(&uid).await?;
//!         println!("{} ({} tracks)", playlist.name, playlist.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod router;
mod types;

pub use client::DropbeatClient;
pub use error::{ClientError, Result};
pub use router::{ApiRouter, Endpoint};
pub use types::{
    AddTrackRequest, ClientConfig, PlaylistListResponse, PlaylistResponse, TrackResponse,
    DEFAULT_API_VERSION, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};
