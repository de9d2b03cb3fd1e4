//! Chat WebSocket
//!
//! Each socket is split: a writer task drains the peer's relay queue into the
//! sink while the read loop feeds inbound text frames to the relay.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use tracing::{debug, info, warn};

use crate::api::AppState;
use crate::push::{ConnectionId, ConnectionState};

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    debug!("Chat peer {}", ConnectionState::Connecting);
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (id, mut outbound) = state.relay.register().await;
    log_state(id, ConnectionState::Open);

    let (mut sink, mut stream) = socket.split();

    let mut writer = tokio::spawn(async move {
        while let Some(fragment) = outbound.recv().await {
            if let Err(e) = sink.send(Message::Text(fragment)).await {
                warn!("Chat peer {} write failed: {}", id, e);
                break;
            }
        }
        let _ = sink.close().await;
    });

    loop {
        tokio::select! {
            _ = state.shutdown.cancelled() => break,
            _ = &mut writer => break,
            frame = stream.next() => match frame {
                Some(Ok(Message::Text(text))) => {
                    state.relay.relay(&text).await;
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    warn!("Chat peer {} read failed: {}", id, e);
                    break;
                }
            },
        }
    }

    state.relay.unregister(id).await;
    writer.abort();
    log_state(id, ConnectionState::Closed);
}

fn log_state(id: ConnectionId, connection_state: ConnectionState) {
    info!("Chat peer {} {}", id, connection_state);
}
