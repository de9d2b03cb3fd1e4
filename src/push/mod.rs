//! Server push primitives
//!
//! - [`HeartbeatEmitter`] streams periodic events over one long-lived response
//! - [`BroadcastRelay`] fans chat messages out to every open WebSocket peer

mod heartbeat;
mod relay;

pub use heartbeat::{Heartbeat, HeartbeatEmitter, HeartbeatExit, HeartbeatSequence, HEARTBEAT_EVENT};
pub use relay::{BroadcastRelay, ConnectionId, ConnectionState};
