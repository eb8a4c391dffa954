//! Dropbeat - command-line playlist client
use anyhow::Context;
use clap::{Parser, Subcommand};
use dropbeat_client::DropbeatClient;
use dropbeat_core::{PlaylistId, Track};
use dropbeat_playback::{
    ParseRepeatModeError, PlaybackConfig, PlaylistCallbacks, PlaylistManager, RepeatMode,
    ShuffleMode, TracingNotifier,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

use config::AppConfig;

#[derive(Parser)]
#[command(name = "dropbeat")]
#[command(about = "Browse and play Dropbeat playlists", long_about = None)]
struct Cli {
    /// Configuration file path (default: ./dropbeat.toml if present)
    #[arg(short, long, env = "DROPBEAT_CONFIG")]
    config: Option<PathBuf>,

    /// Server URL, overriding the configuration
    #[arg(long)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all playlists
    Playlists,
    /// Print the play queue of a playlist
    Queue {
        /// Playlist uid
        #[arg(short, long)]
        playlist: String,
        /// Shuffle the queue
        #[arg(short, long)]
        shuffle: bool,
    },
    /// Print the track that plays after the given one
    Next {
        /// Playlist uid
        #[arg(short, long)]
        playlist: String,
        /// Uid of the track currently playing
        #[arg(short, long)]
        track: String,
        /// Repeat mode (off, all, one)
        #[arg(short, long, value_parser = parse_repeat)]
        repeat: Option<RepeatMode>,
        /// Shuffle the queue
        #[arg(short, long)]
        shuffle: bool,
    },
    /// Add a track to a playlist
    AddTrack {
        /// Playlist uid
        #[arg(short, long)]
        playlist: String,
        /// Track uid
        #[arg(short, long)]
        track: String,
        /// Track name
        #[arg(short, long)]
        name: String,
    },
}

fn parse_repeat(s: &str) -> Result<RepeatMode, ParseRepeatModeError> {
    s.parse()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.server {
        config.server.url = url;
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    config.validate()?;

    match cli.command {
        Commands::Playlists => {
            list_playlists(&config).await?;
        }
        Commands::Queue { playlist, shuffle } => {
            let playback = PlaybackConfig {
                shuffle: if shuffle {
                    ShuffleMode::On
                } else {
                    config.playback.shuffle
                },
                ..config.playback.clone()
            };
            show_queue(&config, playback, &PlaylistId::new(playlist)).await?;
        }
        Commands::Next {
            playlist,
            track,
            repeat,
            shuffle,
        } => {
            let playback = PlaybackConfig {
                repeat: repeat.unwrap_or(config.playback.repeat),
                shuffle: if shuffle {
                    ShuffleMode::On
                } else {
                    config.playback.shuffle
                },
            };
            show_next(&config, playback, &PlaylistId::new(playlist), &track).await?;
        }
        Commands::AddTrack {
            playlist,
            track,
            name,
        } => {
            add_track(&config, &PlaylistId::new(playlist), Track::new(track.as_str(), name)).await?;
        }
    }

    Ok(())
}

/// Build the manager against the configured server and load every playlist.
async fn load_manager(config: &AppConfig, playback: PlaybackConfig) -> anyhow::Result<PlaylistManager> {
    let client = DropbeatClient::new(config.client_config())?;
    tracing::info!("Server: {}", client.url());

    let mut manager = PlaylistManager::new(Arc::new(client), playback)
        .with_notifier(Arc::new(TracingNotifier));
    manager.set_callbacks(PlaylistCallbacks::new().on_first_playlist_loaded(|playlist| {
        tracing::debug!(name = %playlist.name, "First playlist loaded");
    }));

    let summary = manager
        .load_all_playlists()
        .await
        .context("Failed to load playlists")?;
    if summary.failed > 0 {
        tracing::warn!(
            "{} of {} playlists could not be loaded",
            summary.failed,
            summary.requested
        );
    }

    Ok(manager)
}

async fn load_with_current(
    config: &AppConfig,
    playback: PlaybackConfig,
    uid: &PlaylistId,
) -> anyhow::Result<PlaylistManager> {
    let mut manager = load_manager(config, playback).await?;
    manager
        .set_current_playlist(uid)
        .with_context(|| format!("Playlist '{}' is not available", uid))?;
    Ok(manager)
}

async fn list_playlists(config: &AppConfig) -> anyhow::Result<()> {
    let manager = load_manager(config, config.playback.clone()).await?;

    if manager.playlists().is_empty() {
        println!("No playlists");
        return Ok(());
    }

    for playlist in manager.playlists() {
        let uid = playlist.uid.as_ref().map_or("-", PlaylistId::as_str);
        println!("{}\t{}\t{} tracks", uid, playlist.name, playlist.len());
    }

    Ok(())
}

async fn show_queue(
    config: &AppConfig,
    playback: PlaybackConfig,
    uid: &PlaylistId,
) -> anyhow::Result<()> {
    let manager = load_with_current(config, playback, uid).await?;
    let order = manager.play_order();

    println!(
        "Queue for '{}' (repeat: {}, shuffle: {})",
        uid,
        order.get_repeat().as_str(),
        if order.get_shuffle().is_on() { "on" } else { "off" }
    );
    for (position, track) in order.get_queue().iter().enumerate() {
        println!("{:>3}. {}\t{}", position + 1, track.uid, track.name);
    }

    Ok(())
}

async fn show_next(
    config: &AppConfig,
    playback: PlaybackConfig,
    uid: &PlaylistId,
    track_uid: &str,
) -> anyhow::Result<()> {
    let mut manager = load_with_current(config, playback, uid).await?;

    // An unknown track starts from the head of the queue
    let current = manager
        .current_playlist()
        .and_then(|p| p.tracks.iter().find(|t| t.uid.as_str() == track_uid))
        .cloned()
        .unwrap_or_else(|| {
            tracing::warn!(track = %track_uid, playlist = %uid, "Track not in playlist");
            Track::new(track_uid, "")
        });

    match manager.pop_next(&current) {
        Some(next) => println!("{}\t{}", next.uid, next.name),
        None => println!("stop"),
    }

    Ok(())
}

async fn add_track(config: &AppConfig, uid: &PlaylistId, track: Track) -> anyhow::Result<()> {
    let mut manager = load_with_current(config, config.playback.clone(), uid).await?;

    let added = manager
        .add_new_track(track)
        .await
        .context("Failed to add track")?;

    let count = manager.current_playlist().map_or(0, |p| p.len());
    println!(
        "Added {} ({}) to '{}', now {} tracks",
        added.name, added.uid, uid, count
    );

    Ok(())
}
