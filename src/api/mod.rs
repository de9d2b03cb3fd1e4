pub mod basic;
pub mod click_to_load;
pub mod color;
pub mod contacts;
pub mod health;
pub mod index;
pub mod modal;
pub mod sse;
pub mod ws;

use std::sync::Arc;

use chrono::Utc;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::models::Contact;
use crate::push::{BroadcastRelay, HeartbeatSequence};
use crate::store::{ColorPalette, ContactGuard};
use crate::views::{build_gallery, GalleryEntry};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub contacts: ContactGuard,
    pub palette: Arc<ColorPalette>,
    pub relay: BroadcastRelay,
    pub heartbeat: Arc<HeartbeatSequence>,
    /// Process start time in Unix seconds; clients compare it to detect restarts
    pub server_version: Arc<str>,
    pub gallery: Arc<Vec<GalleryEntry>>,
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_palette(config, ColorPalette::default())
    }

    pub fn with_palette(config: Config, palette: ColorPalette) -> Self {
        let gallery = build_gallery(&palette);
        let relay = BroadcastRelay::new(config.chat_buffer);
        Self {
            config,
            contacts: ContactGuard::new(Contact::default()),
            palette: Arc::new(palette),
            relay,
            heartbeat: Arc::new(HeartbeatSequence::default()),
            server_version: Utc::now().timestamp().to_string().into(),
            gallery: Arc::new(gallery),
            shutdown: CancellationToken::new(),
        }
    }
}
