use std::collections::HashMap;
use std::sync::Arc;

use strum::Display;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::models::ChatMessage;
use crate::views::{ChatFragment, Fragment};

pub type ConnectionId = Uuid;

/// Lifecycle of one relay peer; `Closed` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ConnectionState {
    Connecting,
    Open,
    Closed,
}

/// Fans chat messages out to every registered connection.
///
/// The connection set stays locked for the whole fan-out. Writes are
/// `try_send` into each peer's bounded queue, so the lock never spans socket
/// I/O and a peer removed in one pass can never be written to afterwards.
/// Delivery is best-effort: a peer whose queue is closed or full is dropped
/// from the set.
#[derive(Clone)]
pub struct BroadcastRelay {
    peers: Arc<Mutex<HashMap<ConnectionId, mpsc::Sender<String>>>>,
    buffer: usize,
}

impl BroadcastRelay {
    pub fn new(buffer: usize) -> Self {
        Self {
            peers: Arc::new(Mutex::new(HashMap::new())),
            buffer: buffer.max(1),
        }
    }

    /// Add a peer; fragments for it arrive on the returned receiver.
    pub async fn register(&self) -> (ConnectionId, mpsc::Receiver<String>) {
        let id = Uuid::new_v4();
        let (tx, rx) = mpsc::channel(self.buffer);
        let mut peers = self.peers.lock().await;
        peers.insert(id, tx);
        info!("Chat peer {} registered ({} open)", id, peers.len());
        (id, rx)
    }

    pub async fn unregister(&self, id: ConnectionId) {
        let mut peers = self.peers.lock().await;
        if peers.remove(&id).is_some() {
            info!("Chat peer {} unregistered ({} open)", id, peers.len());
        }
    }

    pub async fn len(&self) -> usize {
        self.peers.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Parse an inbound payload and broadcast it as a chat fragment.
    ///
    /// Malformed payloads are logged and dropped; returns the number of peers
    /// written to.
    pub async fn relay(&self, raw: &str) -> usize {
        let message = match ChatMessage::parse(raw) {
            Ok(message) => message,
            Err(e) => {
                warn!("Dropping malformed chat payload: {}", e);
                return 0;
            }
        };

        let fragment = ChatFragment {
            text: message.chat_message,
        }
        .render();
        self.broadcast(fragment).await
    }

    pub async fn broadcast(&self, fragment: String) -> usize {
        let mut peers = self.peers.lock().await;
        let mut delivered = 0;

        peers.retain(|id, tx| match tx.try_send(fragment.clone()) {
            Ok(()) => {
                delivered += 1;
                true
            }
            Err(e) => {
                debug!("Removing chat peer {}: {}", id, e);
                false
            }
        });

        debug!("Broadcast delivered to {} peer(s)", delivered);
        delivered
    }
}
